//! Meshlink terminal status window.
//!
//! Shows the local daemon's connection state and a single connect/disconnect
//! button, kept current by a background status poller.

use std::error::Error;
use std::time::Duration;

use clap::Parser;
use tokio::sync::mpsc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use meshlink_controller::ControllerConfig;

mod app;
mod backend;
mod event;
mod state;
mod ui;

use app::App;
use event::{BackendCommand, UiEvent};

#[derive(Parser)]
#[command(name = "meshlink-tui")]
#[command(about = "Meshlink connection status window")]
#[command(version)]
struct Cli {
    /// Daemon gRPC endpoint
    #[arg(short, long, default_value = "http://127.0.0.1:41731")]
    endpoint: String,

    /// Status poll interval in seconds
    #[arg(short, long, default_value = "10")]
    poll_interval: u64,

    /// Timeout for connecting to and calling the daemon, in seconds
    #[arg(long, default_value = "3")]
    fail_timeout: u64,

    /// How long to wait for a browser login to finish, in seconds
    #[arg(long, default_value = "300")]
    sso_timeout: u64,

    /// Log file path
    #[arg(long, default_value = "/tmp/meshlink-tui.log")]
    log_file: String,
}

impl Cli {
    fn config(&self) -> ControllerConfig {
        ControllerConfig {
            endpoint: self.endpoint.clone(),
            poll_interval: Duration::from_secs(self.poll_interval),
            fail_timeout: Duration::from_secs(self.fail_timeout),
            sso_wait_timeout: Duration::from_secs(self.sso_timeout),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // Write logs to a file to avoid terminal interference
    if let Ok(file) = std::fs::File::create(&cli.log_file) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("meshlink_tui=debug,meshlink_controller=debug,meshlink_client=info")
        });
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_env_filter(filter)
            .with_ansi(false)
            .init();
    }

    let config = cli.config();
    info!(
        endpoint = %config.endpoint,
        poll_interval = ?config.poll_interval,
        "Starting status window"
    );

    // Create channels for UI <-> backend communication
    let (ui_tx, ui_rx) = mpsc::channel::<UiEvent>(100);
    let (cmd_tx, cmd_rx) = mpsc::channel::<BackendCommand>(100);

    // Build the runtime up front so a failure is reported before the
    // terminal is taken over
    let rt = tokio::runtime::Runtime::new()?;
    let bg_handle = std::thread::spawn(move || {
        rt.block_on(backend::run_backend(config, ui_tx, cmd_rx));
    });

    // Initialize terminal (enters alternate screen, enables raw mode)
    let terminal = ratatui::init();

    let mut app = App::new(ui_rx, cmd_tx);
    let result = app.run(terminal);

    ratatui::restore();

    if bg_handle.join().is_err() {
        error!("Backend thread panicked");
    }

    info!("Status window closed");

    result.map_err(|e| e.into())
}
