use std::fmt::Debug;

/// A unit exposing a single capability: deciding a property of a number.
pub trait Component {
    fn execute(&self, number: i64) -> bool;
}

/// A function-shaped unit: one argument bundle in, one value out.
///
/// Wrappers implement this by delegating. `name` always reports the
/// innermost function, so identity survives stacking.
pub trait Callable<A> {
    type Output;

    fn name(&self) -> &str;

    fn call(&self, args: A) -> Self::Output;
}

/// How an argument bundle renders for logging.
pub trait ArgRecord {
    /// One rendering per positional argument, in order.
    fn positional(&self) -> Vec<String>;

    /// `key=value` renderings of named arguments.
    fn named(&self) -> Vec<String>;
}

impl ArgRecord for () {
    fn positional(&self) -> Vec<String> {
        Vec::new()
    }

    fn named(&self) -> Vec<String> {
        Vec::new()
    }
}

macro_rules! tuple_arg_record {
    ($($element:ident . $index:tt),+) => {
        impl<$($element: Debug),+> ArgRecord for ($($element,)+) {
            fn positional(&self) -> Vec<String> {
                vec![$(format!("{:?}", self.$index)),+]
            }

            fn named(&self) -> Vec<String> {
                Vec::new()
            }
        }
    };
}

tuple_arg_record!(A0.0);
tuple_arg_record!(A0.0, A1.1);
tuple_arg_record!(A0.0, A1.1, A2.2);
tuple_arg_record!(A0.0, A1.1, A2.2, A3.3);

/// Accessors over the runtime configuration.
pub trait ConfigProvider {
    fn sample_number(&self) -> i64;

    fn verbose(&self) -> bool;
}
