use crate::domain::ports::ArgRecord;

/// Outcome of one full demonstration run.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoReport {
    pub prime_input: i64,
    pub prime_verdict: bool,
    pub sum: i64,
    pub greeting: String,
    pub introduction: String,
}

/// Named-argument bundle for `say_name`.
#[derive(Debug, Clone)]
pub struct NameArgs {
    pub name: String,
    pub surname: String,
}

impl Default for NameArgs {
    fn default() -> Self {
        Self {
            name: "name".to_string(),
            surname: "surname".to_string(),
        }
    }
}

impl ArgRecord for NameArgs {
    fn positional(&self) -> Vec<String> {
        Vec::new()
    }

    fn named(&self) -> Vec<String> {
        vec![
            format!("name={:?}", self.name),
            format!("surname={:?}", self.surname),
        ]
    }
}
