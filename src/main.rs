use clap::Parser;
use csssprite::cli::{Cli, Commands};
use csssprite::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => csssprite::cli::build::run(args, &printer)?,
        Commands::Init(args) => csssprite::cli::init::run(args, &printer)?,
        Commands::Completions(args) => csssprite::cli::completions::run(args)?,
    }

    Ok(())
}
