use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Logger initialization failed: {0}")]
    LoggerInitError(#[from] tracing_subscriber::util::TryInitError),
}

pub type Result<T> = std::result::Result<T, DemoError>;
