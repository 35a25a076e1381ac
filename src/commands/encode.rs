//! Encode command - embed a secret WAV inside a carrier WAV.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use audiohide::{capacity, encode, read_mono_i16, write_mono_i16};

use super::CommandExecutor;

/// Hide a secret audio file in the LSBs of a carrier audio file.
///
/// Both files must share one sample rate; nothing is resampled. The carrier
/// must be long enough to hold a 32-bit length header plus 16 bits per
/// secret sample. The encoded output has the carrier's length and rate and
/// differs from it only in the least significant bits.
#[derive(Args, Debug)]
pub struct EncodeCommand {
    /// Path to the carrier WAV (16-bit PCM or 32-bit float)
    pub carrier: PathBuf,

    /// Path to the secret WAV to hide
    pub secret: PathBuf,

    /// Output path for the encoded WAV
    #[arg(short, long, default_value = "encoded_audio.wav")]
    pub output: PathBuf,

    /// Verbose output (shows sample counts and capacity)
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandExecutor for EncodeCommand {
    fn execute(&self) -> Result<()> {
        let (carrier, carrier_rate) = read_mono_i16(&self.carrier)
            .with_context(|| format!("Failed to read carrier {}", self.carrier.display()))?;
        let (secret, secret_rate) = read_mono_i16(&self.secret)
            .with_context(|| format!("Failed to read secret {}", self.secret.display()))?;

        if self.verbose {
            eprintln!(
                "Carrier: {} samples at {} Hz (capacity: {} secret samples)",
                carrier.len(),
                carrier_rate,
                capacity(carrier.len())
            );
            eprintln!("Secret: {} samples at {} Hz", secret.len(), secret_rate);
        }

        let encoded = encode(&carrier, carrier_rate, &secret, secret_rate)
            .context("Failed to embed secret in carrier")?;

        write_mono_i16(&encoded, carrier_rate, &self.output)
            .with_context(|| format!("Failed to write {}", self.output.display()))?;

        println!("Encoded audio saved to: {}", self.output.display());
        Ok(())
    }
}
