//! ft - FixTrack client CLI
//!
//! Drives the FixTrack backend API and the client-side access-control gate:
//! session storage, route-guard checks, profile, tenant roster, notes and
//! surveys.
//!
//! # Examples
//!
//! ```bash
//! # Store a credential issued by the login endpoint
//! ft session login --token <jwt>
//!
//! # Evaluate the route guard for a page
//! ft access check /tenants --pretty
//!
//! # List the tenant roster
//! ft tenants list --search lejla
//! ```

mod access_commands;
mod cli;
mod commands;
mod error;
mod logger;
mod note_commands;
mod profile_commands;
mod session;
mod session_commands;
mod survey_commands;
mod tenant_commands;

#[cfg(test)]
mod tests;

use crate::{
    access_commands::AccessCommands,
    cli::Cli,
    commands::Commands,
    error::{CliError, Result as CliErrorResult},
    note_commands::NoteCommands,
    profile_commands::ProfileCommands,
    session_commands::SessionCommands,
    survey_commands::SurveyCommands,
    tenant_commands::TenantCommands,
};

use ft_access::{GuardDecision, RedirectTarget, RouteGuard, dashboard_route};
use ft_auth::{ExpiryWatchdog, SessionEvent, SessionStore};
use ft_client::{ApiClient, ClientError, UpdateProfileRequest, classify_update_error};
use ft_config::Config;
use ft_core::{IssueCategory, Page, SatisfactionLevel};

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use log::{info, warn};
use serde_json::{Value, json};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let pretty = cli.pretty;

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    if let Err(e) = init_logging(&config) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    config.log_summary();

    // Single owner of the session lifecycle: load the persisted slots now,
    // mirror them back after the command ran.
    let session = SessionStore::new();
    if let Err(e) = session::restore(&session) {
        warn!("Failed to restore persisted session: {e}");
    }

    let base_url = cli
        .server
        .unwrap_or_else(|| config.api.base_url.clone());
    let client = match ApiClient::with_timeout(
        &base_url,
        session.clone(),
        Duration::from_secs(config.api.timeout_secs),
    ) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = run(cli.command, &config, &session, &client).await;

    if let Err(e) = session::persist(&session) {
        warn!("Failed to persist session state: {e}");
    }

    // Handle result
    match result {
        Ok(value) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(
    command: Commands,
    config: &Config,
    session: &SessionStore,
    client: &ApiClient,
) -> CliErrorResult<Value> {
    match command {
        // Session commands
        Commands::Session { action } => match action {
            SessionCommands::Login { token } => {
                let claims = session.login(&token)?;
                info!("Stored credential for role {:?}", claims.role());
                Ok(json!({
                    "message": "Session stored",
                    "role": claims.role().map(|r| r.as_str()),
                    "expires_at": claims.exp,
                }))
            }
            SessionCommands::Status => {
                let role = session.role();
                Ok(json!({
                    "valid": session.is_session_valid(),
                    "role": role.map(|r| r.as_str()),
                    "role_name": role.map(|r| r.display_name()),
                    "expires_at": session.expiry(),
                }))
            }
            SessionCommands::Logout => {
                session.logout();
                Ok(json!({ "message": "Session cleared" }))
            }
        },

        // Access commands
        Commands::Access { action } => match action {
            AccessCommands::Check { path } => {
                let guard = RouteGuard::new(session.clone());
                let page = Page::from_path(&path).map(|p| p.as_str());
                Ok(match guard.evaluate(&path) {
                    GuardDecision::Granted { role } => json!({
                        "path": path,
                        "page": page,
                        "decision": "granted",
                        "role": role.map(|r| r.as_str()),
                    }),
                    GuardDecision::Redirect(target) => json!({
                        "path": path,
                        "page": page,
                        "decision": "redirect",
                        "redirect_to": target.path(),
                    }),
                })
            }
            AccessCommands::Route => {
                let route = session
                    .role()
                    .map(dashboard_route)
                    .unwrap_or("/dashboard");
                Ok(json!({ "route": route }))
            }
        },

        // Profile commands
        Commands::Profile { action } => match action {
            ProfileCommands::Get => {
                let profile = client.get_profile().await?;
                Ok(serde_json::to_value(profile)?)
            }
            ProfileCommands::Update {
                full_name,
                email,
                phone,
                address,
                current_password,
                new_password,
                confirm_password,
            } => {
                let update = UpdateProfileRequest {
                    full_name,
                    email,
                    phone,
                    address,
                    current_password,
                    new_password,
                    confirm_password,
                };
                update_profile(client, update).await
            }
        },

        // Tenant commands
        Commands::Tenants { action } => match action {
            TenantCommands::List { search } => {
                let tenants = client.list_tenants().await?;
                let listed: Vec<_> = match search {
                    Some(term) => ft_client::search_tenants(&tenants, &term)
                        .into_iter()
                        .cloned()
                        .collect(),
                    None => tenants,
                };
                Ok(serde_json::to_value(listed)?)
            }
        },

        // Note commands
        Commands::Notes { action } => match action {
            NoteCommands::Add { tenant_id, note } => {
                let stored = client.submit_note(tenant_id, &note).await?;
                Ok(serde_json::to_value(stored)?)
            }
        },

        // Survey commands
        Commands::Surveys { action } => match action {
            SurveyCommands::List => {
                let surveys = client.list_surveys().await?;
                let listed = surveys
                    .iter()
                    .map(|survey| -> CliErrorResult<Value> {
                        let mut value = serde_json::to_value(survey)?;
                        if let Value::Object(fields) = &mut value {
                            fields.insert(
                                "satisfaction_label".to_string(),
                                Value::String(satisfaction_label(&survey.satisfaction_level)),
                            );
                            fields.insert(
                                "category_label".to_string(),
                                Value::String(IssueCategory::label(&survey.issue_category)),
                            );
                        }
                        Ok(value)
                    })
                    .collect::<CliErrorResult<Vec<Value>>>()?;
                Ok(Value::Array(listed))
            }
            SurveyCommands::Stats => {
                let stats = client.survey_stats().await?;
                Ok(serde_json::to_value(stats)?)
            }
        },

        Commands::Watch => watch(config, session).await,
    }
}

/// User-facing label for a satisfaction slug, falling back to the raw value
fn satisfaction_label(raw: &str) -> String {
    raw.parse::<SatisfactionLevel>()
        .map(|level| level.display_name().to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Validate the update locally first, then attribute a backend rejection to
/// the offending form field.
async fn update_profile(
    client: &ApiClient,
    update: UpdateProfileRequest,
) -> CliErrorResult<Value> {
    if let Err(errors) = update.validate() {
        let joined = errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        return Err(CliError::ProfileValidation(joined));
    }

    match client.update_profile(&update).await {
        Ok(value) => Ok(value),
        Err(ClientError::Api { message, .. }) => {
            let field = classify_update_error(&message);
            Err(CliError::ProfileUpdateRejected {
                field: field.as_str(),
                message,
            })
        }
        Err(e) => Err(e.into()),
    }
}

/// Run the expiry watchdog until the stored session lapses or Ctrl-C.
async fn watch(config: &Config, session: &SessionStore) -> CliErrorResult<Value> {
    let interval = Duration::from_secs(config.session.watchdog_interval_secs);
    let (handle, mut events) = ExpiryWatchdog::new(session.clone(), interval).spawn();
    info!(
        "Expiry watchdog running (every {}s)",
        config.session.watchdog_interval_secs
    );

    tokio::select! {
        event = events.recv() => match event {
            Some(SessionEvent::Expired) => Ok(json!({
                "message": "Vaša sesija je istekla, logujte se ponovo.",
                "redirect_to": RedirectTarget::Login.path(),
            })),
            None => Ok(json!({ "message": "Watchdog stopped" })),
        },
        _ = tokio::signal::ctrl_c() => {
            handle.shutdown().await;
            Ok(json!({ "message": "Watchdog stopped" }))
        }
    }
}

fn init_logging(config: &Config) -> CliErrorResult<()> {
    let log_file = if let Some(ref filename) = config.logging.file {
        let config_dir = Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir).map_err(|e| CliError::Logger {
            message: format!("Failed to create log directory {}: {}", log_dir.display(), e),
        })?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    logger::initialize(config.logging.level, log_file, config.logging.colored)
}
