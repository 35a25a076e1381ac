//! Decode command - recover a hidden secret WAV from an encoded WAV.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use audiohide::{decode, read_mono_i16, write_mono_i16};

use super::CommandExecutor;

/// Extract the hidden audio from an encoded WAV file.
///
/// The encoded file must be a bit-exact copy of the encoder's output; any
/// transcoding or re-quantization in between destroys the hidden data. The
/// length header is trusted as-is, so decoding a file that was never encoded
/// usually fails with an out-of-range length (or yields garbage audio).
#[derive(Args, Debug)]
pub struct DecodeCommand {
    /// Path to the encoded WAV
    pub encoded: PathBuf,

    /// Output path for the recovered secret WAV
    #[arg(short, long, default_value = "decoded_secret.wav")]
    pub output: PathBuf,

    /// Verbose output (shows recovered payload size)
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandExecutor for DecodeCommand {
    fn execute(&self) -> Result<()> {
        let (encoded, rate) = read_mono_i16(&self.encoded)
            .with_context(|| format!("Failed to read {}", self.encoded.display()))?;

        let (secret, secret_rate) =
            decode(&encoded, rate).context("Failed to extract hidden audio")?;

        if self.verbose {
            eprintln!("Recovered {} samples at {} Hz", secret.len(), secret_rate);
        }

        write_mono_i16(&secret, secret_rate, &self.output)
            .with_context(|| format!("Failed to write {}", self.output.display()))?;

        println!("Decoded secret audio saved to: {}", self.output.display());
        Ok(())
    }
}
