mod cli;

use printwatch::adapters::inbound::WatchLoop;
use printwatch::adapters::outbound::console::{StderrProgressReporter, TracingAuditLog};
use printwatch::adapters::outbound::filesystem::{JsonInventoryStore, JsonLinesAuditLog};
use printwatch::adapters::outbound::formatters::DashboardFormatter;
use printwatch::adapters::outbound::network::{IppDeviceQueryClient, SystemPingProber};
use printwatch::application::dto::{PrinterFilter, SweepRequest};
use printwatch::application::session::MonitorSession;
use printwatch::application::use_cases::{ListPrintersUseCase, SweepPrintersUseCase};
use printwatch::config::{discover_config, load_config_from_path, ConfigFile, MonitorConfig};
use printwatch::monitoring::policies::{RefreshPolicy, SweepTrigger};
use printwatch::ports::inbound::StatusSweepPort;
use printwatch::ports::outbound::{AuditLog, InventoryFormatter};
use printwatch::shared::error::ExitCode;
use printwatch::shared::Result;

use cli::{Cli, Command, GlobalArgs, StatusArgs, SweepArgs};
use std::io::IsTerminal;
use std::process;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

type FleetSweep = SweepPrintersUseCase<
    JsonInventoryStore,
    SystemPingProber,
    IppDeviceQueryClient,
    StderrProgressReporter,
    Box<dyn AuditLog>,
>;

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();
    init_tracing(cli.global.verbose);

    match run(cli).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = resolve_config(&cli.global)?;

    match cli.command {
        Command::Sweep(args) => {
            if let Some(workers) = args.workers {
                config.worker_cap = workers;
            }
            config.validate()?;
            sweep(&config, &args).await
        }
        Command::Status(args) => {
            config.validate()?;
            status(&config, &args, !cli.global.no_color).await
        }
        Command::Watch(args) => {
            if let Some(workers) = args.workers {
                config.worker_cap = workers;
            }
            if args.auto_refresh {
                config.auto_refresh = true;
            }
            if let Some(interval) = args.interval {
                config.refresh_interval = Duration::from_secs(interval);
            }
            config.validate()?;
            watch(&config).await
        }
    }
}

/// Merges built-in defaults, the config file and global flags
fn resolve_config(global: &GlobalArgs) -> Result<MonitorConfig> {
    let file = match &global.config {
        Some(path) => load_config_from_path(path)?,
        None => {
            let cwd = std::env::current_dir()?;
            discover_config(&cwd)?.unwrap_or_else(ConfigFile::default)
        }
    };

    let mut config = MonitorConfig::from_file(&file);
    if let Some(inventory) = &global.inventory {
        config.inventory = inventory.clone();
    }
    Ok(config)
}

fn build_sweep(config: &MonitorConfig) -> Result<FleetSweep> {
    let inventory = JsonInventoryStore::new(config.inventory.clone());
    let prober = SystemPingProber::new(config.ping_timeout, config.ping_deadline);
    let query_client = IppDeviceQueryClient::with_settings(
        config.candidates.clone(),
        config.attempt_timeout,
        config.query_deadline,
    )?;
    let audit_log: Box<dyn AuditLog> = match &config.audit_log {
        Some(path) => Box::new(JsonLinesAuditLog::new(path.clone())),
        None => Box::new(TracingAuditLog),
    };

    Ok(SweepPrintersUseCase::new(
        inventory,
        prober,
        query_client,
        StderrProgressReporter::new(),
        audit_log,
    )
    .with_worker_cap(config.worker_cap))
}

async fn sweep(config: &MonitorConfig, args: &SweepArgs) -> Result<ExitCode> {
    let use_case = build_sweep(config)?;
    let request = SweepRequest::new(SweepTrigger::Manual).with_progress(!args.quiet);
    let response = use_case.execute(request).await?;

    if args.quiet {
        println!("{} of {} printers online", response.online, response.total);
    }

    if args.fail_on_offline && response.has_offline() {
        return Ok(ExitCode::PrintersOffline);
    }
    Ok(ExitCode::Success)
}

async fn status(config: &MonitorConfig, args: &StatusArgs, color: bool) -> Result<ExitCode> {
    let use_case = ListPrintersUseCase::new(JsonInventoryStore::new(config.inventory.clone()));
    let filter = PrinterFilter::new(args.unit.clone(), args.status);
    let devices = use_case.execute(&filter).await?;

    let formatter = DashboardFormatter::new(color && std::io::stdout().is_terminal());
    print!("{}", formatter.format(&devices)?);
    Ok(ExitCode::Success)
}

async fn watch(config: &MonitorConfig) -> Result<ExitCode> {
    let port: Arc<dyn StatusSweepPort> = Arc::new(build_sweep(config)?);
    let session = MonitorSession::new(
        RefreshPolicy::new(config.refresh_interval),
        config.auto_refresh,
    );

    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "cannot listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    let summary = WatchLoop::new(port, session, StderrProgressReporter::new())
        .run(input, shutdown)
        .await;

    eprintln!(
        "\n👋 Stopped watching after {} sweep(s).",
        summary.sweeps.len() + summary.failed_sweeps
    );
    Ok(ExitCode::Success)
}
