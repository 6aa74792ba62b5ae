//! Spectroplot CLI - render analyser frames to SVG or draw-command JSON.

#![allow(clippy::needless_pass_by_value, clippy::doc_markdown)]

mod synth;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use spectroplot::{
    ConfigError, PlotError, RecordingCanvas, Rect, SpectrumView, SvgCanvas, ViewerConfig,
};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "spectroplot")]
#[command(about = "Render spectrum analyser frames")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one synthetic spectrum frame
    Render {
        /// Viewer config (.yaml, .yml or .toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Svg)]
        format: Format,

        /// Plot width in pixels, overriding the config
        #[arg(long)]
        width: Option<f64>,

        /// Plot height in pixels, overriding the config
        #[arg(long)]
        height: Option<f64>,
    },

    /// Render a sequence of frames with a peak sweeping across the spectrum
    Frames {
        /// Number of frames
        #[arg(short = 'n', long, default_value = "30")]
        count: usize,

        /// Directory for frame_NNNN.svg files
        #[arg(short, long, default_value = "frames")]
        output_dir: PathBuf,

        /// Viewer config (.yaml, .yml or .toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Check a viewer config file
    Check {
        /// Path to config file
        #[arg(default_value = "spectroplot.yaml")]
        config: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// SVG document
    Svg,
    /// Recorded draw commands as JSON
    Json,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Plot(#[from] PlotError),

    #[error("failed to encode draw commands: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write `{}`: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Render {
            config,
            output,
            format,
            width,
            height,
        } => {
            let mut config = load_config(config.as_deref())?;
            resize(&mut config, width, height);
            config.validate()?;
            let doc = render(&config, format)?;
            match output {
                Some(path) => write_file(&path, &doc),
                None => std::io::stdout()
                    .write_all(doc.as_bytes())
                    .map_err(|source| CliError::Write {
                        path: PathBuf::from("<stdout>"),
                        source,
                    }),
            }
        }
        Commands::Frames {
            count,
            output_dir,
            config,
        } => {
            let config = load_config(config.as_deref())?;
            frames(&config, count, &output_dir)
        }
        Commands::Check { config } => {
            let loaded = ViewerConfig::load(&config)?;
            println!(
                "OK: {} ({} bins, {} dB to {} dB)",
                config.display(),
                loaded.spectrum.fft_size / 2,
                loaded.spectrum.db_min,
                loaded.spectrum.db_max
            );
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<ViewerConfig, ConfigError> {
    match path {
        Some(path) => ViewerConfig::load(path),
        None => Ok(ViewerConfig::default()),
    }
}

fn resize(config: &mut ViewerConfig, width: Option<f64>, height: Option<f64>) {
    let rect = &mut config.chart.rect;
    if let Some(w) = width {
        rect.width = w;
    }
    if let Some(h) = height {
        rect.height = h;
    }
}

/// Document size that fits the whole plot rect.
fn document_size(rect: Rect) -> (f64, f64) {
    (rect.right().max(0.0), rect.bottom().max(0.0))
}

fn render(config: &ViewerConfig, format: Format) -> Result<String, CliError> {
    let hz = config.spectrum.bin_frequencies();
    let nyquist = config.spectrum.sample_rate / 2.0;
    let db = synth::spectrum_db(&hz, &synth::still_peaks(nyquist));
    tracing::debug!(bins = hz.len(), ?format, "rendering frame");

    match format {
        Format::Svg => {
            let (w, h) = document_size(config.chart.rect);
            let mut view = config.build_view(SvgCanvas::new(w, h))?;
            view.render(&hz, &db)?;
            Ok(view.into_canvas().finish())
        }
        Format::Json => {
            let mut view: SpectrumView<RecordingCanvas> =
                config.build_view(RecordingCanvas::new())?;
            view.render(&hz, &db)?;
            Ok(serde_json::to_string_pretty(view.into_canvas().commands())?)
        }
    }
}

fn frames(config: &ViewerConfig, count: usize, dir: &Path) -> Result<(), CliError> {
    std::fs::create_dir_all(dir).map_err(|source| CliError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    let hz = config.spectrum.bin_frequencies();
    let nyquist = config.spectrum.sample_rate / 2.0;
    let (w, h) = document_size(config.chart.rect);

    for frame in 0..count {
        let peak = synth::sweep_peak(nyquist, frame, count);
        let db = synth::spectrum_db(&hz, &[peak]);
        let mut view = config.build_view(SvgCanvas::new(w, h))?;
        view.render(&hz, &db)?;

        let path = dir.join(format!("frame_{frame:04}.svg"));
        write_file(&path, &view.into_canvas().finish())?;
        tracing::trace!(frame, peak_hz = peak.freq, "wrote frame");
    }
    tracing::info!(count, dir = %dir.display(), "frames written");
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<(), CliError> {
    std::fs::write(path, contents).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}
