// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, warn};

use crate::app_config::{Config, ImageEngine, ImageStyle};
use app_controller::Controller;

mod analysis;
mod app_config;
mod app_controller;
mod chunking;
mod errors;
mod file_utils;
mod pipeline;
mod plan;
mod text;

/// CLI Wrapper for ImageEngine to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliImageEngine {
    Flux,
    Sdxl,
    Sd15,
    Cascade,
    Pixart,
}

impl From<CliImageEngine> for ImageEngine {
    fn from(cli_engine: CliImageEngine) -> Self {
        match cli_engine {
            CliImageEngine::Flux => ImageEngine::Flux,
            CliImageEngine::Sdxl => ImageEngine::Sdxl,
            CliImageEngine::Sd15 => ImageEngine::Sd15,
            CliImageEngine::Cascade => ImageEngine::Cascade,
            CliImageEngine::Pixart => ImageEngine::Pixart,
        }
    }
}

/// CLI Wrapper for ImageStyle to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliImageStyle {
    Cinematic,
    Anime,
    Realistic,
    Painterly,
    Comic,
    Storyboard,
}

impl From<CliImageStyle> for ImageStyle {
    fn from(cli_style: CliImageStyle) -> Self {
        match cli_style {
            CliImageStyle::Cinematic => ImageStyle::Cinematic,
            CliImageStyle::Anime => ImageStyle::Anime,
            CliImageStyle::Realistic => ImageStyle::Realistic,
            CliImageStyle::Painterly => ImageStyle::Painterly,
            CliImageStyle::Comic => ImageStyle::Comic,
            CliImageStyle::Storyboard => ImageStyle::Storyboard,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a novel into a production plan (default command)
    #[command(alias = "plan")]
    Plan(PlanArgs),

    /// Generate shell completions for cineplan
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Input novel text file (.txt, .md, .text or .markdown)
    #[arg(value_name = "INPUT_FILE")]
    input_file: PathBuf,

    /// Output directory for the plan JSON files
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Image generation engine to target
    #[arg(short = 'e', long, value_enum)]
    image_engine: Option<CliImageEngine>,

    /// Visual style applied to image prompts
    #[arg(short = 's', long, value_enum)]
    image_style: Option<CliImageStyle>,

    /// Image prompts generated per scene
    #[arg(short, long)]
    broll_density: Option<usize>,

    /// Maximum characters per scene
    #[arg(long)]
    max_scene_chars: Option<usize>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// Cineplan - Novel to Production Plan
///
/// Turns raw novel text into a deterministic multi-track production plan:
/// scenes, image prompts, narration metadata, SFX cues and character tiers.
#[derive(Parser, Debug)]
#[command(name = "cineplan")]
#[command(version = "1.0.0")]
#[command(about = "Deterministic novel-to-production-plan analyzer")]
#[command(long_about = "Cineplan analyzes novel text into a production plan for automated video generation.

EXAMPLES:
    cineplan novel.txt                          # Analyze using default config
    cineplan -f novel.txt                       # Force overwrite existing outputs
    cineplan -e sdxl -s anime novel.txt         # Target SDXL with anime styling
    cineplan -b 8 novel.txt                     # Eight image prompts per scene
    cineplan -o plan/ novel.md                  # Write outputs to plan/
    cineplan --log-level debug novel.txt        # Verbose logging
    cineplan completions bash > cineplan.bash   # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically.

OUTPUTS:
    scenes.json, image_prompts.json, narration.json, sfx_cues.json,
    characters.json and config.json in the output directory (defaults to the
    input file's directory).")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input novel text file (.txt, .md, .text or .markdown)
    #[arg(value_name = "INPUT_FILE")]
    input_file: Option<PathBuf>,

    /// Output directory for the plan JSON files
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Image generation engine to target
    #[arg(short = 'e', long, value_enum)]
    image_engine: Option<CliImageEngine>,

    /// Visual style applied to image prompts
    #[arg(short = 's', long, value_enum)]
    image_style: Option<CliImageStyle>,

    /// Image prompts generated per scene
    #[arg(short, long)]
    broll_density: Option<usize>,

    /// Maximum characters per scene
    #[arg(long)]
    max_scene_chars: Option<usize>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// Custom logger writing timestamped, colored lines to stderr.
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "cineplan", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Plan(args)) => run_plan(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let input_file = cli
                .input_file
                .ok_or_else(|| anyhow!("INPUT_FILE is required when no subcommand is specified"))?;

            let plan_args = PlanArgs {
                input_file,
                output_dir: cli.output_dir,
                force_overwrite: cli.force_overwrite,
                image_engine: cli.image_engine,
                image_style: cli.image_style,
                broll_density: cli.broll_density,
                max_scene_chars: cli.max_scene_chars,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_plan(plan_args).await
        }
    }
}

async fn run_plan(options: PlanArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        log::set_max_level(level_filter(cmd_log_level.clone().into()));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(engine) = &options.image_engine {
        config.image_engine = engine.clone().into();
    }
    if let Some(style) = &options.image_style {
        config.image_style = style.clone().into();
    }
    if let Some(density) = options.broll_density {
        config.broll_density = density;
    }
    if let Some(max_chars) = options.max_scene_chars {
        config.max_scene_chars = max_chars;
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    config
        .validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(config.log_level));
    }

    if !options.input_file.is_file() {
        return Err(anyhow!(
            "Input file does not exist: {:?}",
            options.input_file
        ));
    }

    let output_dir = options.output_dir.clone().unwrap_or_else(|| {
        options
            .input_file
            .parent()
            .unwrap_or(Path::new("."))
            .to_path_buf()
    });

    let controller = Controller::with_config(config)?;
    controller
        .run(options.input_file, output_dir, options.force_overwrite)
        .await
}

fn level_filter(level: app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}
