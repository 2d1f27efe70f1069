pub mod build;
pub mod completions;
pub mod init;

use clap::{Parser, Subcommand};

/// csssprite - CSS icon-sprite generator
#[derive(Parser, Debug)]
#[command(name = "csssprite")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pack icons into a sprite and generate its stylesheet
    Build(build::BuildArgs),

    /// Initialize a sprite project (generates sprite.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
