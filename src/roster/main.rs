use clap::Parser;

mod args;
mod cli;

use args::Cli;

fn main() {
    let cli = Cli::parse();
    cli::setup::init_tracing(cli.verbose);

    if let Err(e) = cli::run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
