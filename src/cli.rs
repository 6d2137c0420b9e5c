use clap::Parser;

#[derive(Parser)]
#[command(name = "homesweep")]
#[command(
    about = "Find and remove caches, build outputs and old downloads under your home directory",
    long_about = None
)]
#[command(version)]
pub struct Cli {}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
