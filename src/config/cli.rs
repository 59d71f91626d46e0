use crate::core::ConfigProvider;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "decor-demo")]
#[command(about = "Decorator pattern demonstrations, structural and function-wrapping")]
pub struct CliConfig {
    /// Number fed to the decorated prime checker
    #[arg(long, default_value = "9")]
    pub number: i64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn sample_number(&self) -> i64 {
        self.number
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}
