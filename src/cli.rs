use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sigrun",
    about = "Run-length encoded binary signal toolkit",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a bit pattern as a glyph waveform
    Render {
        /// Bit pattern; the leading 0/1 prefix is parsed, the rest ignored
        pattern: String,
    },

    /// Read the level at a single bit position
    Probe {
        /// Bit pattern to probe
        pattern: String,

        /// 0-indexed bit position
        position: u64,
    },

    /// Dump the run table of a pattern as JSON
    Inspect {
        /// Bit pattern to inspect
        pattern: String,
    },

    /// Splice one pattern into another at a bit position
    Insert {
        /// Pattern receiving the insertion
        base: String,

        /// Pattern being inserted
        patch: String,

        /// 0-indexed bit position within the base
        position: u64,
    },
}
