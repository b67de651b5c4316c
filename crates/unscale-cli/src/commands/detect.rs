use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;
use unscale_core::consts::{DEFAULT_FUZZINESS, DEFAULT_MAX_VARIATION};
use unscale_core::report::{render, Preset};
use unscale_core::unscale::{determine_dimensions, CompareMode, ProgressReporter, UnscaleConfig};

use crate::summary::print_report;

#[derive(Clone, Copy, ValueEnum)]
pub enum PrintArg {
    /// {width}x{height}
    #[value(alias = "r")]
    Resolution,
    /// {x_scale}x{y_scale}
    #[value(alias = "s")]
    Scale,
    /// {par}
    #[value(aliases = ["pixel-aspect-ratio", "pixel aspect ratio"])]
    Par,
}

impl From<PrintArg> for Preset {
    fn from(arg: PrintArg) -> Self {
        match arg {
            PrintArg::Resolution => Preset::Resolution,
            PrintArg::Scale => Preset::Scale,
            PrintArg::Par => Preset::PixelAspectRatio,
        }
    }
}

#[derive(Args)]
pub struct DetectArgs {
    /// Screenshots of the same resolution, taken in the same program
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Config file (TOML); replaces the algorithm options below
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Allow some leeway when comparing pixels (e.g. PlayStation 1 screenshots)
    #[arg(short, long)]
    pub inexact: bool,

    /// How much an R, G or B value can differ when using --inexact (0-255)
    #[arg(short, long, default_value_t = DEFAULT_FUZZINESS)]
    pub leeway: u32,

    /// Maximum width/height variation between rows/columns of one source pixel
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_VARIATION)]
    pub nearest_neighbor_variation: u32,

    /// Print the result with a custom format, e.g. "{width}x{height}".
    /// Variables: {width} {height} {scaled_width} {scaled_height} {x_scale} {y_scale} {par}
    #[arg(short, long, conflicts_with = "print")]
    pub custom: Option<String>,

    /// Print a single property
    #[arg(short, long, value_enum)]
    pub print: Option<PrintArg>,
}

struct BarReporter {
    bar: ProgressBar,
}

impl ProgressReporter for BarReporter {
    fn begin_image(&self, path: &Path, index: usize, _total: usize) {
        self.bar.set_position(index as u64);
        self.bar.set_message(path.display().to_string());
    }
}

pub fn run(args: &DetectArgs) -> Result<()> {
    let config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid unscale config")?
    } else {
        build_config_from_args(args)
    };
    debug!(
        mode = %config.mode,
        fuzziness = config.fuzziness,
        max_variation = config.max_variation,
        "Detect configuration"
    );

    let bar = ProgressBar::new(args.files.len() as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    let reporter = BarReporter { bar };

    let report = determine_dimensions(args.files.as_slice(), &config, &reporter);
    reporter.bar.finish_and_clear();
    let report = report?;

    let template = match (&args.custom, args.print) {
        (Some(custom), _) => Some(custom.as_str()),
        (None, Some(print)) => {
            let preset = Preset::from(print);
            debug!(property = %preset, "Printing single property");
            Some(preset.template())
        }
        (None, None) => None,
    };
    match template {
        Some(template) => println!("{}", render(template, &report)),
        None => print_report(&report),
    }

    Ok(())
}

fn build_config_from_args(args: &DetectArgs) -> UnscaleConfig {
    UnscaleConfig {
        mode: if args.inexact {
            CompareMode::Fuzzy
        } else {
            CompareMode::Exact
        },
        fuzziness: args.leeway,
        max_variation: args.nearest_neighbor_variation,
    }
}
