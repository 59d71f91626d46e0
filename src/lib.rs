pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::demo::DemoEngine;
pub use crate::core::prime::PrimeChecker;
pub use crate::core::trace::TraceDecorator;
pub use crate::core::wrap::{ArgLogging, Func, Timing};
pub use crate::domain::model::{DemoReport, NameArgs};
pub use crate::domain::ports::{ArgRecord, Callable, Component, ConfigProvider};
pub use crate::utils::error::{DemoError, Result};
