/// Soul Favorites - interactive favorites playlist
use anyhow::Context;
use clap::Parser;
use soul_favorites_cli::{CliConfig, OutputFormat, Session};
use std::{
    fs::File,
    io::{self, BufReader, IsTerminal},
    path::PathBuf,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "soul-favorites")]
#[command(about = "Manage a favorites playlist from the terminal", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./favorites.toml when present)
    #[arg(short, long, env = "SOUL_FAVORITES_CONFIG")]
    config: Option<PathBuf>,

    /// Print events as JSON lines
    #[arg(long)]
    json: bool,

    /// Read commands from a file instead of stdin
    #[arg(short, long)]
    script: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing (stderr, so stdout only carries playlist output)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "soul_favorites=info,soul_favorites_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = CliConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    config.apply_flags(cli.json);
    tracing::debug!("Loaded config: {:?}", config);

    let stdout = io::stdout().lock();

    match cli.script {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            Session::new(&config, stdout).run(BufReader::new(file))?;
        }
        None => {
            let stdin = io::stdin();
            let mut session = Session::new(&config, stdout);
            if stdin.is_terminal() && config.output.format == OutputFormat::Text {
                session = session.with_prompt(config.output.prompt.clone());
            }
            session.run(stdin.lock())?;
        }
    }

    Ok(())
}
