pub mod commands;
pub mod config;
pub mod events;
pub mod facade;
pub mod seed;

use tracing_subscriber::{fmt, EnvFilter};

pub use commands::dashboard::DashboardSummary;
pub use config::ClientConfig;
pub use events::{EventBus, StoreEvent};
pub use facade::DataFacade;

/// Install the global tracing subscriber (respects `RUST_LOG`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("devfocus_client_lib=debug,devfocus_store=info,devfocus_rewards=info,warn")
    });

    let installed = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();

    // an embedding application may have installed its own subscriber
    if let Err(err) = installed {
        tracing::debug!(%err, "keeping existing tracing subscriber");
    }
}

pub fn run() -> anyhow::Result<()> {
    init_tracing();

    tracing::info!("Starting DevFocus v{}", env!("CARGO_PKG_VERSION"));

    let config = ClientConfig::from_env();
    tracing::info!(?config, "Loaded configuration");

    let mut facade = DataFacade::new(&config);
    if config.seed_demo {
        seed::seed_demo_data(&mut facade, &config.owner, &config.owner_display)?;
    }

    let summary = facade.dashboard(&config.owner);
    println!("{}", serde_json::to_string_pretty(&summary)?);

    println!();
    println!("# {}", facade.export_file_name());
    println!("{}", facade.export_csv(&config.owner));

    Ok(())
}
