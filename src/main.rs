// src/main.rs
use anyhow::Result;
use clap::Parser as _;
use env_logger::Env;

use charcount::{Args, run};

fn main() -> Result<()> {
    let args = Args::parse();
    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();
    run(args)
}
