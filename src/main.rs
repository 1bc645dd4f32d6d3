use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use modelconf_cli::config::{ResolverSettings, resolve};
use modelconf_cli::logging::init_logging;
use modelconf_cli::render::{OutputFormat, render_report};

#[derive(Parser)]
#[command(name = "modelconf")]
#[command(
	author,
	version,
	about = "Resolve a model configuration layered over shared defaults"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	/// Name of the model config file or folder (e.g. model_a)
	model_name: String,

	/// Overrides applied last, as key=value with dotted keys (e.g. optimizer.lr=0.1)
	overrides: Vec<String>,

	/// Folder containing the shared config and the model configs
	#[arg(long, env = "MODELCONF_DIR", default_value = "model")]
	config_dir: PathBuf,

	/// Shared config file loaded under every model
	#[arg(long, default_value = "defaults.yaml")]
	common_file: String,

	/// Config file used when the model name is a folder
	#[arg(long, default_value = "default.yaml")]
	default_file: String,

	/// Output format for the full configuration
	#[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
	format: OutputFormat,

	/// Enable verbose logging (sets log level to DEBUG)
	#[arg(short, long)]
	verbose: bool,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	let settings = ResolverSettings {
		base_folder: cli.config_dir,
		common_filename: cli.common_file,
		default_filename: cli.default_file,
	};

	let config = resolve(&cli.model_name, cli.overrides.as_slice(), &settings)
		.with_context(|| format!("Failed to resolve configuration for {}", cli.model_name))?;

	let report = render_report(&config, cli.format).context("Failed to render configuration")?;
	print!("{report}");

	Ok(ExitCode::SUCCESS)
}
