use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use letterbox_cli::{
    source, Cli, Commands, Config, ConfigCommands, OutputFormatter, PixelTable,
    ProgressReporter, TableMode,
};
use letterbox_core::{Compressor, ImageLoader, Quality};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        "letterbox=debug"
    } else {
        "letterbox=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .without_time()
        .init();

    // Load config
    let mut config = Config::load()?;

    // Override config with CLI flags
    if cli.no_color {
        config.colored_output = false;
    }
    if cli.no_progress {
        config.show_progress = false;
    }

    // Create formatter and progress reporter
    let formatter = OutputFormatter::new(config.colored_output);
    let progress = ProgressReporter::new(config.show_progress);

    // Execute command
    match cli.command {
        Commands::Compress {
            input,
            output,
            quality,
            data_uri,
        } => {
            handle_compress(
                input, output, quality, data_uri, &config, &formatter, &progress,
            )
            .await?;
        }

        Commands::Info { input } => {
            handle_info(input, &formatter, &progress).await?;
        }

        Commands::Pixels {
            input,
            x,
            y,
            cols,
            rows,
            mode,
        } => {
            handle_pixels(input, x, y, cols, rows, mode, &config, &progress).await?;
        }

        Commands::Config { action } => {
            handle_config(action, &formatter)?;
        }
    }

    Ok(())
}

async fn handle_compress(
    input: PathBuf,
    output: Option<PathBuf>,
    quality: Option<f32>,
    data_uri: bool,
    config: &Config,
    formatter: &OutputFormatter,
    progress: &ProgressReporter,
) -> Result<()> {
    let quality = parse_quality(quality.unwrap_or(config.default_quality))?;
    let source = source::read_source(&input)?;

    let spinner = progress.create_spinner("Compressing...");

    let compressor = Compressor::new().with_quality(quality);
    let result = match compressor.compress(&source).await {
        Ok(result) => result,
        Err(e) => {
            ProgressReporter::finish_bar_error(&spinner, "Failed");
            return Err(e.into());
        }
    };

    ProgressReporter::finish_bar(&spinner, "Done");

    if data_uri {
        println!("{}", result.data_uri);
        return Ok(());
    }

    let output_path = output.unwrap_or_else(|| default_output_path(&input));
    std::fs::write(&output_path, &result.jpeg)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    formatter.print_compression(&input, &output_path, source.len(), result.compressed_size());

    Ok(())
}

async fn handle_info(
    input: PathBuf,
    formatter: &OutputFormatter,
    progress: &ProgressReporter,
) -> Result<()> {
    let source = source::read_source(&input)?;

    let spinner = progress.create_spinner("Reading dimensions...");

    let dims = match ImageLoader::dimensions(&source).await {
        Ok(dims) => dims,
        Err(e) => {
            ProgressReporter::finish_bar_error(&spinner, "Failed");
            return Err(e.into());
        }
    };

    ProgressReporter::finish_bar(&spinner, "Done");
    formatter.print_info(&input, source.len(), dims, source.media_type());

    Ok(())
}

#[allow(clippy::too_many_arguments)]
async fn handle_pixels(
    input: PathBuf,
    x: u32,
    y: u32,
    cols: u32,
    rows: u32,
    mode: TableMode,
    config: &Config,
    progress: &ProgressReporter,
) -> Result<()> {
    let quality = parse_quality(config.default_quality)?;
    let source = source::read_source(&input)?;

    let spinner = progress.create_spinner("Compressing...");

    let compressor = Compressor::new().with_quality(quality);
    let result = match compressor.compress(&source).await {
        Ok(result) => result,
        Err(e) => {
            ProgressReporter::finish_bar_error(&spinner, "Failed");
            return Err(e.into());
        }
    };

    ProgressReporter::finish_bar(&spinner, "Done");

    PixelTable::new(&result).print_region(x, y, cols, rows, mode)?;

    Ok(())
}

fn handle_config(action: ConfigCommands, formatter: &OutputFormatter) -> Result<()> {
    match action {
        ConfigCommands::Show => {
            let config = Config::load()?;
            let toml = toml::to_string_pretty(&config)?;
            println!("{}", toml);
        }

        ConfigCommands::Set { key, value } => {
            let mut config = Config::load()?;

            match key.as_str() {
                "default_quality" => {
                    let quality: f32 = value.parse()?;
                    parse_quality(quality)?;
                    config.default_quality = quality;
                }
                "show_progress" => config.show_progress = value.parse()?,
                "colored_output" => config.colored_output = value.parse()?,
                _ => anyhow::bail!("Unknown config key: {}", key),
            }

            config.save()?;
            formatter.success(&format!("Set {} = {}", key, value));
        }

        ConfigCommands::Reset => {
            Config::reset()?;
            formatter.success("Configuration reset to defaults");
        }

        ConfigCommands::Path => {
            let path = Config::config_path()?;
            println!("{}", path.display());
        }
    }

    Ok(())
}

fn parse_quality(value: f32) -> Result<Quality> {
    if !(0.0..=1.0).contains(&value) {
        anyhow::bail!("Invalid quality: {}. Use a value between 0 and 1", value);
    }
    Ok(Quality::new(value))
}

fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    input.with_file_name(format!("compressed_{}.jpg", stem))
}
