use cidr_calc::cli::{run, Args};
use clap::Parser;
use colored::Colorize;

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    if let Err(e) = cidr_calc::config::init() {
        eprintln!("{} {e}", "error:".red());
        std::process::exit(e.exit_code());
    }
    let args = Args::parse();

    match run(&args) {
        Ok(out) => println!("{out}"),
        Err(e) => {
            log::debug!("run() failed: {e:?}");
            eprintln!("{} {e}", "error:".red());
            std::process::exit(e.exit_code());
        }
    }
}
