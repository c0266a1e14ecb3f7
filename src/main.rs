use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use launch_dashboard::{api, charts, client, config::DashboardConfig, data::LaunchTable, models};

#[derive(Parser)]
#[command(name = "launch-dash")]
#[command(about = "Interactive launch records dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the dashboard server
    Serve {
        /// Launch records CSV
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port for the dashboard
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Print payload bounds and per-site success counts without serving
    Summary {
        /// Launch records CSV
        #[arg(short, long)]
        data: Option<PathBuf>,
    },
    /// Check a running server
    Status {
        /// Server root URL
        #[arg(short, long, default_value = client::DEFAULT_URL)]
        url: String,
    },
}

/// Initialize tracing with output to stderr (for summary mode) or stdout
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "launch_dashboard=debug,tower_http=debug".into()),
    );

    if use_stderr {
        // Summary prints its report on stdout
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn load_table(config: &DashboardConfig) -> anyhow::Result<LaunchTable> {
    let table = LaunchTable::load(&config.data_path).with_context(|| {
        format!(
            "Failed to load launch records from {}",
            config.data_path.display()
        )
    })?;
    tracing::info!(
        "Loaded {} launch records, payload range [{}, {}] kg",
        table.len(),
        table.min_payload(),
        table.max_payload()
    );
    Ok(table)
}

async fn serve(config: DashboardConfig) -> anyhow::Result<()> {
    let table = load_table(&config)?;
    let addr = config.socket_addr()?;

    let app = api::create_router(table);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Launch dashboard listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

fn summary(config: DashboardConfig) -> anyhow::Result<()> {
    let table = load_table(&config)?;
    let pie = charts::site_success(&table, &models::SiteFilter::All);

    println!("Records:       {}", table.len());
    println!(
        "Payload range: {} - {} kg",
        table.min_payload(),
        table.max_payload()
    );
    println!("{}:", pie.title);
    for slice in &pie.slices {
        println!("  {:<14} {}", slice.label, slice.count);
    }
    Ok(())
}

async fn status(url: String) -> anyhow::Result<()> {
    let client = client::DashboardClient::new(url.as_str());
    let health = client
        .health()
        .await
        .with_context(|| format!("Dashboard at {} is not reachable", url))?;
    println!("Dashboard at {}: {} ({} records)", url, health.status, health.records);

    let pie = client.success_pie(&models::SiteFilter::All).await?;
    for slice in &pie.slices {
        println!("  {:<14} {}", slice.label, slice.count);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let use_stderr = matches!(cli.command, Some(Commands::Summary { .. }));
    init_tracing(use_stderr);

    match cli.command {
        Some(Commands::Serve { data, host, port }) => {
            serve(DashboardConfig::from_env().with_overrides(data, host, port)).await?;
        }
        Some(Commands::Summary { data }) => {
            summary(DashboardConfig::from_env().with_overrides(data, None, None))?;
        }
        Some(Commands::Status { url }) => {
            status(url).await?;
        }
        None => {
            // Default: start server
            serve(DashboardConfig::from_env()).await?;
        }
    }

    Ok(())
}
