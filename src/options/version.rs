use colored::Colorize;

use crate::config;

pub fn show() {
    let version = env!("CARGO_PKG_VERSION");
    let name = env!("CARGO_PKG_NAME");

    println!("{} v{}", name.bright_green(), version.bright_white());
    println!("Default repository: {}", config::DEFAULT_REPO.bright_blue());
}
