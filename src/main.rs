use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use tracing::{error, info};

use idm_app::SubmitOutcome;
use idm_core::ConsoleConfig;
use openidm_admin_lib::bootstrap::{
    exit_status, init_tracing_subscriber, load_form_capture, run_registration,
};

/// Environment variable naming the console configuration file.
const CONFIG_ENV: &str = "OPENIDM_ADMIN_CONFIG";

const USAGE: &str = "usage: openidm-admin <form.json> [config.toml]";

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // A missing .env file is fine.
    dotenvy::dotenv().ok();
    init_tracing_subscriber()?;

    let mut args = env::args_os().skip(1).map(PathBuf::from);
    let form_path = args.next().context(USAGE)?;
    let config_path = args.next().or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from));

    let config = match config_path {
        Some(path) => idm_infra::load_config(&path)?,
        None => {
            info!("no config file given, using defaults");
            ConsoleConfig::default()
        }
    };
    info!(base_url = %config.base_url, form_id = %config.form_id, "admin console configured");

    let fields = load_form_capture(&form_path)?;
    let (outcome, events) = run_registration(&config, fields).await?;

    match &outcome {
        SubmitOutcome::Registered(user) => {
            info!(id = ?user.id, events = events.len(), "user registered");
        }
        other => error!(outcome = ?other, "user was not registered"),
    }
    Ok(ExitCode::from(exit_status(&outcome)))
}
