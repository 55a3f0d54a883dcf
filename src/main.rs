//! CLI entrypoint for replace-chars.

use clap::Parser;
use rchars::cli::{run, Args};

fn main() {
    std::process::exit(run(Args::parse()));
}
