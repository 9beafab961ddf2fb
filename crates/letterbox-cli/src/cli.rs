use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Letterbox - fixed-frame image compressor with pixel inspection
#[derive(Parser)]
#[command(name = "letterbox")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Disable progress spinners
    #[arg(long, global = true)]
    pub no_progress: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compress an image onto the 500x500 canvas
    Compress {
        /// Input file path
        input: PathBuf,

        /// Output path (defaults to compressed_<name>.jpg next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JPEG quality on a 0-1 scale
        #[arg(short, long)]
        quality: Option<f32>,

        /// Print the base64 data URI instead of writing a file
        #[arg(long)]
        data_uri: bool,
    },

    /// Show image information without compressing
    Info {
        /// Input file path
        input: PathBuf,
    },

    /// Render a region of the compressed pixel table
    Pixels {
        /// Input file path
        input: PathBuf,

        /// Left edge of the region
        #[arg(short, long, default_value = "0")]
        x: u32,

        /// Top edge of the region
        #[arg(short, long, default_value = "0")]
        y: u32,

        /// Columns to print
        #[arg(long, default_value = "8")]
        cols: u32,

        /// Rows to print
        #[arg(long, default_value = "8")]
        rows: u32,

        /// Cell display mode
        #[arg(short, long, value_enum, default_value_t = TableMode::Rgba)]
        mode: TableMode,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Pixel table cell rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TableMode {
    /// Raw r,g,b,a channel values
    Rgba,

    /// Hex color strings
    Hex,

    /// Colored terminal swatches
    Color,
}

impl std::fmt::Display for TableMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Rgba => "rgba",
            Self::Hex => "hex",
            Self::Color => "color",
        };
        write!(f, "{}", name)
    }
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set configuration value
    Set {
        /// Configuration key
        key: String,

        /// Configuration value
        value: String,
    },

    /// Reset to defaults
    Reset,

    /// Show config file path
    Path,
}
