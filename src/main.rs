//! Audiohide - Hide audio in audio
//!
//! A CLI tool for LSB audio steganography: embed a secret WAV in the least
//! significant bits of a carrier WAV and recover it bit-exactly.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{CommandExecutor, DecodeCommand, EncodeCommand, InfoCommand};

/// Audiohide - Hide audio in audio
///
/// Embeds a secret PCM signal in the sample LSBs of a larger carrier at the
/// same sample rate. The embedding is inaudible but fragile: only a bit-exact
/// copy of the encoded WAV decodes back to the secret.
#[derive(Parser)]
#[command(name = "audiohide")]
#[command(version)]
#[command(about = "Hide a secret audio signal in the LSBs of a carrier WAV")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Embed a secret WAV inside a carrier WAV
    Encode(EncodeCommand),

    /// Recover the hidden secret from an encoded WAV
    Decode(DecodeCommand),

    /// Show a carrier's embedding capacity
    Info(InfoCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode(cmd) => cmd.execute(),
        Commands::Decode(cmd) => cmd.execute(),
        Commands::Info(cmd) => cmd.execute(),
    }
}
