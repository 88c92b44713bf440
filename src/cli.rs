use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "input/2021/day1.txt";

/// Counts how often sonar depth readings increase, one by one and in sliding windows of three.
#[derive(Parser, Debug)]
#[command(name = "sonar-sweep", version)]
pub struct Args {
    /// File with one integer depth reading per line
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,
}
