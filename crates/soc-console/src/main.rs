//! CLI entry point for the SOC console derivation layer.
//!
//! Designed for subprocess invocation from the web tier: reads a store
//! snapshot (JSON file or stdin), derives the requested view, and writes
//! JSON to stdout. Logs go to stderr so stdout stays machine-readable.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use soc_core::config::ConsoleConfig;
use soc_core::types::TenantId;
use soc_store::{MemoryStore, Snapshot};

use soc_console::workspace::Tab;
use soc_console::DashboardSession;

#[derive(Parser)]
#[command(name = "soc-console")]
#[command(about = "Client-scoped aggregation and view derivation for the SOC dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Snapshot JSON file; `-` or omitted reads stdin, unless the config
    /// file provides a path.
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,

    /// Config file prefix (default: soc).
    #[arg(short, long, default_value = "soc", global = true)]
    config: String,
}

#[derive(Subcommand)]
enum Command {
    /// Derive the tenant-listing overview with per-tenant rollup cards.
    Overview,
    /// Derive one tenant's workspace views (monitor, assets, handoff
    /// context).
    Workspace {
        /// Tenant to scope to.
        #[arg(long)]
        tenant_id: String,
        /// Active tab to land on (default: monitor).
        #[arg(long, value_enum)]
        tab: Option<CliTab>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum CliTab {
    Monitor,
    Assets,
    AiAssistant,
    Reports,
    History,
}

impl From<CliTab> for Tab {
    fn from(t: CliTab) -> Self {
        match t {
            CliTab::Monitor => Tab::Monitor,
            CliTab::Assets => Tab::Assets,
            CliTab::AiAssistant => Tab::AiAssistant,
            CliTab::Reports => Tab::Reports,
            CliTab::History => Tab::History,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let config = ConsoleConfig::load(&cli.config)?;
    let store = load_store(&cli, &config)?.with_log_limit(config.scoped_log_limit);
    let mut session = DashboardSession::new(store);
    session.refresh_global().await?;

    match cli.command {
        Command::Overview => {
            println!("{}", serde_json::to_string(&session.overview())?);
        }
        Command::Workspace { ref tenant_id, tab } => {
            let tenant_id = TenantId(uuid::Uuid::parse_str(tenant_id)?);
            session.select_tenant(tenant_id).await?;
            if let Some(tab) = tab {
                session.select_tab(tab.into());
            }

            let output = serde_json::json!({
                "state": session.state(),
                "monitor": session.monitor(),
                "assets": session.assets(),
                "client_context": session.client_context(),
            });
            println!("{output}");
        }
    }

    Ok(())
}

fn load_store(cli: &Cli, config: &ConsoleConfig) -> anyhow::Result<MemoryStore> {
    if let Some(path) = &cli.snapshot {
        if path.as_os_str() != "-" {
            return Ok(MemoryStore::from_path(path)?);
        }
    } else {
        let path = PathBuf::from(&config.snapshot_path);
        if path.exists() {
            return Ok(MemoryStore::from_path(&path)?);
        }
    }

    let input = std::io::read_to_string(std::io::stdin())?;
    let snapshot: Snapshot = serde_json::from_str(&input)?;
    Ok(MemoryStore::from_snapshot(snapshot))
}
