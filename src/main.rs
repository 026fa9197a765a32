use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rapor::models::samples;
use rapor::server;
use rapor::services::ChartComposer;

#[derive(Parser)]
#[command(name = "rapor")]
#[command(about = "Server-side score chart server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Render the report charts directly to PNG files
    Render {
        /// Output directory for the PNG files
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render { output }) => run_render_command(&output),
        Some(Commands::Serve) | None => run_server().await,
    }
}

/// Render the four report charts to PNG files (no server needed).
fn run_render_command(output: &Path) -> anyhow::Result<()> {
    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rapor=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    std::fs::create_dir_all(output)?;

    let composer = ChartComposer::new();
    for spec in samples::report_charts() {
        let image = composer
            .compose(&spec)
            .map_err(|e| anyhow::anyhow!("Render error: {e}"))?;
        let path = output.join(format!("{}.png", spec.kind));
        std::fs::write(&path, &image.png)?;
        println!("Rendered {} ({} bytes)", path.display(), image.png.len());
    }

    Ok(())
}

/// Run the HTTP server.
async fn run_server() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rapor=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    let state = server::create_app_state()?;
    let app = server::build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Rapor server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
