use std::{
	fs::File,
	io::{self, BufWriter, Write},
	path::{Path, PathBuf},
	process::ExitCode,
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use ed_file_ext::{Detector, DetectorConfig, MimeTypesFile, Sniffer};
use ed_magic::{BuiltinMagic, FileCommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod properties;
mod report;

use properties::FileProperties;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Oracle {
	/// The `file` command and its libmagic database
	File,
	/// The built-in magic table, for hosts without libmagic
	Builtin,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
	Human,
	Json,
}

#[derive(Parser, Debug)]
#[command(
	name = "build-list",
	version,
	about = "List every file under a directory next to the extension its content suggests"
)]
struct Cli {
	/// A file to describe, or a directory to walk
	path: Option<PathBuf>,

	/// Detector configuration (TOML)
	#[arg(long)]
	config: Option<PathBuf>,

	/// Where the directory report is written
	#[arg(long, short, default_value = "AllFilesList.txt")]
	output: PathBuf,

	/// Content oracle
	#[arg(long, value_enum, default_value = "file")]
	oracle: Oracle,

	/// Write per-extension decision counts to this file
	#[arg(long)]
	summary: Option<PathBuf>,

	/// Media type registry in mime.types format, used after the built-in table
	#[arg(long)]
	mime_types: Option<PathBuf>,

	/// Output format for a single file
	#[arg(long, value_enum, default_value = "human")]
	format: OutputFormat,

	/// Log every decision
	#[arg(short, long)]
	verbose: bool,
}

fn init_tracing(verbose: bool) {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
			EnvFilter::new(if verbose { "debug" } else { "info" })
		}))
		.with_writer(io::stderr)
		.init();
}

fn detector(cli: &Cli) -> Result<Detector> {
	let mut config = match &cli.config {
		Some(path) => DetectorConfig::load(path)
			.with_context(|| format!("failed to load configuration from '{}'", path.display()))?,
		None => DetectorConfig::default(),
	};
	config.instrumentation |= cli.summary.is_some();

	let sniffer: Box<dyn Sniffer> = match cli.oracle {
		Oracle::File => Box::new(FileCommand::default()),
		Oracle::Builtin => Box::new(BuiltinMagic::default()),
	};

	let detector = Detector::new(sniffer).with_config(config);
	let registry = match &cli.mime_types {
		Some(path) => Some(MimeTypesFile::load(path).with_context(|| {
			format!("failed to load media type registry from '{}'", path.display())
		})?),
		None => MimeTypesFile::system(),
	};

	Ok(match registry {
		Some(registry) => detector.with_registry(registry),
		None => detector,
	})
}

fn describe_file(detector: &Detector, cli: &Cli, path: &Path) -> Result<()> {
	let properties = FileProperties::gather(detector, path)
		.with_context(|| format!("failed to classify '{}'", path.display()))?;

	match cli.format {
		OutputFormat::Human => println!("{properties}"),
		OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&properties)?),
	}

	Ok(())
}

fn build_list(detector: &Detector, cli: &Cli, root: &Path) -> Result<()> {
	let file = File::create(&cli.output)
		.with_context(|| format!("failed to create '{}'", cli.output.display()))?;
	let exclude = cli.output.canonicalize().ok();

	info!(root = %root.display(), output = %cli.output.display(), "Building file list");
	let mut out = BufWriter::new(file);
	let stats = report::write_report(detector, root, exclude.as_deref(), &mut out)
		.and_then(|stats| out.flush().map(|()| stats))
		.with_context(|| format!("failed to write '{}'", cli.output.display()))?;

	info!(
		files = stats.files,
		classified = stats.classified,
		skipped = stats.skipped,
		"List building complete"
	);

	Ok(())
}

fn write_summary(detector: &Detector, path: &Path) -> Result<()> {
	let Some(stats) = detector.instrumentation() else {
		return Ok(());
	};

	let file =
		File::create(path).with_context(|| format!("failed to create '{}'", path.display()))?;
	let mut out = BufWriter::new(file);
	stats
		.write_summary(&mut out)
		.and_then(|()| out.flush())
		.with_context(|| format!("failed to write '{}'", path.display()))
}

fn main() -> Result<ExitCode> {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	let path = cli.path.clone().unwrap_or_else(|| PathBuf::from("."));
	if !path.exists() {
		eprintln!("File \"{}\" not found.", path.display());
		return Ok(ExitCode::FAILURE);
	}

	let detector = detector(&cli)?;

	if path.is_dir() {
		let root = path.canonicalize().unwrap_or(path);
		build_list(&detector, &cli, &root)?;
	} else {
		describe_file(&detector, &cli, &path)?;
	}

	if let Some(summary) = &cli.summary {
		write_summary(&detector, summary)?;
	}

	Ok(ExitCode::SUCCESS)
}
