use crate::core::prime::PrimeChecker;
use crate::core::trace::TraceDecorator;
use crate::core::wrap::{ArgLogging, Func, Timing};
use crate::domain::model::{DemoReport, NameArgs};
use crate::domain::ports::{Callable, Component, ConfigProvider};

pub fn add_numbers((lhs, rhs): (i64, i64)) -> i64 {
    lhs + rhs
}

pub fn greet(_: ()) -> String {
    "Hello world!".to_string()
}

pub fn say_name(args: NameArgs) -> String {
    format!("I am {} {}. Nice to meet you.", args.name, args.surname)
}

/// Runs the fixed demonstration sequence: the traced prime check, then the
/// three wrapped functions. Results are printed as they are produced.
pub struct DemoEngine<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> DemoEngine<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn run(&self) -> DemoReport {
        println!("Running structural decorator demonstration...");
        let number = self.config.sample_number();
        let checker = TraceDecorator::new(PrimeChecker);
        let prime_verdict = checker.execute(number);
        tracing::debug!("Prime verdict for {}: {}", number, prime_verdict);

        println!("Running function decorator demonstration...");
        let add = ArgLogging::new(Timing::new(Func::new("add_numbers", add_numbers)));
        let sum = add.call((3, 7));
        println!("{}", sum);

        let hello = ArgLogging::new(Timing::new(Func::new("greet", greet)));
        let greeting = hello.call(());
        println!("{}", greeting);

        let introduce = ArgLogging::new(Timing::new(Func::new("say_name", say_name)));
        let introduction = introduce.call(NameArgs {
            name: "Foo".to_string(),
            surname: "Bar".to_string(),
        });
        println!("{}", introduction);

        DemoReport {
            prime_input: number,
            prime_verdict,
            sum,
            greeting,
            introduction,
        }
    }
}
