pub mod demo;
pub mod prime;
pub mod trace;
pub mod wrap;

pub use crate::domain::model::{DemoReport, NameArgs};
pub use crate::domain::ports::{ArgRecord, Callable, Component, ConfigProvider};
pub use crate::utils::error::Result;
