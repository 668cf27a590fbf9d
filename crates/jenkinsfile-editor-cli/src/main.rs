mod commands;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use jenkinsfile_editor_config::Config;
use jenkinsfile_editor_engine::{ParseMode, io};

use commands::{Position, Settings};

#[derive(Parser)]
#[command(
    name = "jenkinsfile-editor",
    version,
    about = "Format Jenkinsfiles and insert pipeline stages"
)]
struct Cli {
    /// Tolerate stray braces and unterminated scripts
    #[arg(long, global = true)]
    lenient: bool,

    /// Spaces per nesting level (overrides the config file)
    #[arg(long, global = true)]
    indent: Option<usize>,

    /// Config file to use instead of ~/.config/jenkinsfile-editor/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Re-render a Jenkinsfile with canonical indentation
    Fmt(OutputArgs),

    /// Print the block structure without braces
    Outline(InputArgs),

    /// Print the index of the first stage running a matching step
    FindStage {
        /// Text to look for in step lines
        needle: String,

        #[command(flatten)]
        input: InputArgs,
    },

    /// Insert a new stage with the given steps
    InsertStage {
        /// Stage name, rendered as stage('<NAME>')
        #[arg(long)]
        name: String,

        /// Step line to put in the new stage. Repeatable.
        #[arg(long = "step")]
        steps: Vec<String>,

        #[command(flatten)]
        position: PositionArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Write the effective settings to the config file
    InitConfig {
        /// Replace an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct PositionArgs {
    /// Zero-based position in the stage list
    #[arg(long)]
    at: Option<usize>,

    /// Insert before the first stage running a step containing this text
    #[arg(long)]
    before: Option<String>,
}

impl PositionArgs {
    fn into_position(self) -> Position {
        match (self.at, self.before) {
            (Some(index), _) => Position::At(index),
            (None, Some(needle)) => Position::Before(needle),
            (None, None) => unreachable!("clap requires one of --at or --before"),
        }
    }
}

#[derive(Args)]
struct InputArgs {
    /// Jenkinsfile to read (standard input when omitted)
    file: Option<PathBuf>,
}

#[derive(Args)]
struct OutputArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Write the result back to FILE instead of standard output
    #[arg(long, requires = "file")]
    in_place: bool,
}

/// How a successful command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Success,
    /// `find-stage` found no matching stage.
    NotFound,
}

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let result = run(Cli::parse());
    if let Err(e) = &result {
        eprintln!("Error: {e:#}");
    }
    ExitCode::from(exit_code(&result))
}

fn exit_code(result: &Result<Status>) -> u8 {
    match result {
        Ok(Status::Success) => 0,
        Ok(Status::NotFound) => 1,
        Err(_) => 2,
    }
}

fn run(cli: Cli) -> Result<Status> {
    let settings = load_settings(&cli)?;
    let config_path = config_file(&cli);
    log::debug!("effective settings: {settings:?}");

    match cli.command {
        Command::Fmt(output) => {
            let source = read_input(&output.input)?;
            let formatted = commands::format(&source, &settings)?;
            write_output(&output, &formatted)?;
        }
        Command::Outline(input) => {
            let source = read_input(&input)?;
            print!("{}", commands::outline(&source, &settings)?);
        }
        Command::FindStage { needle, input } => {
            let source = read_input(&input)?;
            match commands::find_stage(&source, &needle, &settings)? {
                Some(index) => println!("{index}"),
                None => {
                    log::info!("no stage runs a step matching {needle:?}");
                    return Ok(Status::NotFound);
                }
            }
        }
        Command::InsertStage {
            name,
            steps,
            position,
            output,
        } => {
            let position = position.into_position();
            let source = read_input(&output.input)?;
            let edited = commands::insert_stage(&source, &name, &steps, &position, &settings)?;
            write_output(&output, &edited)?;
        }
        Command::InitConfig { force } => init_config(&config_path, &settings, force)?,
    }

    Ok(Status::Success)
}

fn config_file(cli: &Cli) -> PathBuf {
    match &cli.config {
        Some(path) => Config::expand_path(path).unwrap_or_else(|| path.clone()),
        None => Config::config_path(),
    }
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    let config = match &cli.config {
        Some(_) => {
            let path = config_file(cli);
            match Config::load_from_path(&path)? {
                Some(config) => config,
                None if matches!(cli.command, Command::InitConfig { .. }) => Config::default(),
                None => bail!("Config file '{}' does not exist", path.display()),
            }
        }
        None => Config::load()?.unwrap_or_default(),
    };

    let lenient = cli.lenient || config.lenient;
    Ok(Settings {
        indent_width: cli.indent.unwrap_or(config.indent_width),
        mode: if lenient {
            ParseMode::Lenient
        } else {
            ParseMode::Strict
        },
    })
}

fn read_input(input: &InputArgs) -> Result<String> {
    match &input.file {
        Some(path) => Ok(io::read_file(path)?),
        None => std::io::read_to_string(std::io::stdin()).context("Failed to read standard input"),
    }
}

fn write_output(output: &OutputArgs, content: &str) -> Result<()> {
    match (&output.input.file, output.in_place) {
        (Some(path), true) => write_in_place(path, content),
        _ => {
            print!("{content}");
            Ok(())
        }
    }
}

fn write_in_place(path: &Path, content: &str) -> Result<()> {
    io::write_file(path, content)
        .with_context(|| format!("Failed to write '{}'", path.display()))?;
    log::info!("wrote {}", path.display());
    Ok(())
}

fn init_config(path: &Path, settings: &Settings, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config file '{}' already exists (use --force to replace it)",
            path.display()
        );
    }

    let config = Config {
        indent_width: settings.indent_width,
        lenient: settings.mode == ParseMode::Lenient,
    };
    config
        .save_to_path(path)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
    log::info!("wrote {}", path.display());
    Ok(())
}
