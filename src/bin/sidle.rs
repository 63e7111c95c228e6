use std::{path::PathBuf, process::ExitCode};

use anyhow::Context as _;
use clap::{ArgAction, Parser};
use tracing::level_filters::LevelFilter;

/// Render an image manifest into TGA files, one per (image, resolution).
#[derive(Parser, Debug)]
#[command(name = "sidle", version)]
struct Cli {
    /// Input manifest JSON.
    manifest: PathBuf,

    /// Write under this directory instead of the manifest's `outputPath`.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Render images in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Print `sha256  path` for every written file.
    #[arg(long)]
    digests: bool,

    /// More logging (repeatable).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only print errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(cli: &Cli) {
    let level = match (cli.quiet, cli.verbose) {
        (true, _) => LevelFilter::ERROR,
        (false, 0) => LevelFilter::WARN,
        (false, 1) => LevelFilter::INFO,
        (false, 2) => LevelFilter::DEBUG,
        (false, _) => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let manifest = sidle::Manifest::from_path(&cli.manifest)
        .with_context(|| format!("load manifest '{}'", cli.manifest.display()))?;

    let opts = sidle::BatchOpts {
        parallel: cli.parallel,
        threads: cli.threads,
        output_root: cli.output.clone(),
    };
    let session = sidle::BatchSession::new(&manifest, opts)?;
    let report = session.run(&sidle::TgaFileSink)?;

    if cli.digests {
        for out in &report.outputs {
            println!("{}  {}", out.sha256, out.path.display());
        }
    }
    if !cli.quiet {
        eprintln!(
            "wrote {} images under {}",
            report.stats.images_written,
            session.output_root().display()
        );
    }
    Ok(())
}
