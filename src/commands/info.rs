//! Info command - report a WAV file's embedding capacity.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use audiohide::{capacity, read_mono_i16, HEADER_BITS};

use super::CommandExecutor;

/// Show how much secret audio a carrier file can hold.
#[derive(Args, Debug)]
pub struct InfoCommand {
    /// Path to the WAV file to inspect
    pub audio: PathBuf,
}

impl CommandExecutor for InfoCommand {
    fn execute(&self) -> Result<()> {
        let (samples, rate) = read_mono_i16(&self.audio)
            .with_context(|| format!("Failed to read {}", self.audio.display()))?;

        let secret_samples = capacity(samples.len());

        println!("File: {}", self.audio.display());
        println!("Samples: {} (mono, 16-bit)", samples.len());
        println!("Sample rate: {} Hz", rate);
        println!("Duration: {:.2} s", samples.len() as f64 / f64::from(rate));
        println!(
            "Capacity: {} secret samples ({:.2} s at {} Hz, after the {}-bit header)",
            secret_samples,
            secret_samples as f64 / f64::from(rate),
            rate,
            HEADER_BITS
        );

        Ok(())
    }
}
