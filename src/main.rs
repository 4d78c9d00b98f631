use clap::Parser;
use playlist_exporter::{
    CatalogClient, ClientConfig, Credentials, Error, ExportConfig, ExportFormat, ExportPipeline,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "playlist-exporter")]
#[command(about = "Export Spotify playlists to JSON, CSV or XML", long_about = None)]
struct Args {
    /// Spotify playlist ID to export
    playlist_id: String,

    /// Export format
    #[arg(short = 'f', long, value_enum, default_value_t = ExportFormat::Json)]
    format: ExportFormat,

    /// Output directory
    #[arg(short = 'o', long, default_value = ".")]
    output: String,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match run(&args) {
        Ok(path) => {
            println!("✓ Playlist exported successfully to {}", path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<PathBuf> {
    log::info!("Playlist Exporter");

    // Credentials may come from a .env file in the working directory
    if let Ok(path) = dotenvy::dotenv() {
        log::debug!("Loaded environment from {:?}", path);
    }

    let credentials = Credentials::from_env()?;
    log::debug!("Initializing catalog client...");
    let client = CatalogClient::new(credentials, ClientConfig::default())?;

    // Expand ~ in the output path
    let output_dir = PathBuf::from(shellexpand::tilde(&args.output).as_ref());
    let config = ExportConfig::new(output_dir).with_format(args.format);

    let mut pipeline = ExportPipeline::new(config, client);
    pipeline.export(&args.playlist_id)
}

fn report(err: &anyhow::Error) {
    match err.downcast_ref::<Error>() {
        Some(inner) => {
            log::error!("{}: {:#}", inner.label(), err);
            eprintln!("✗ {}", inner);
        }
        None => {
            log::error!("Unexpected error: {:#}", err);
            eprintln!("✗ Unexpected error: {:#}", err);
        }
    }
}
