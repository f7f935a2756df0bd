pub mod verbose;
pub mod version;

use clap::{ArgAction, Parser};

use crate::config;

#[derive(Parser, Debug)]
#[command(about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Target release version, e.g. v0.1.3
    #[arg(value_name = "VERSION")]
    pub target_version: Option<String>,

    /// GitHub repository hosting the release artifacts
    #[arg(long, value_name = "OWNER/NAME", default_value = config::DEFAULT_REPO)]
    pub repo: String,

    #[arg(short = 'V', long, action = ArgAction::SetTrue)]
    pub version: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    pub verbose: bool,
}
