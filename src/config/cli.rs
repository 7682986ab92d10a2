use clap::Parser;
use std::path::PathBuf;

/// Every flag is optional; paths come from the dotenv file or the environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "patron-load")]
#[command(about = "Convert a patron CSV export into a bulk-load JSON file")]
pub struct CliArgs {
    #[arg(long, default_value = ".env", help = "Dotenv file holding the run settings")]
    pub env_file: PathBuf,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Include process memory in phase logs")]
    pub monitor: bool,
}
