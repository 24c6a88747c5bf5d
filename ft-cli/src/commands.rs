use crate::{
    access_commands::AccessCommands, note_commands::NoteCommands,
    profile_commands::ProfileCommands, session_commands::SessionCommands,
    survey_commands::SurveyCommands, tenant_commands::TenantCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Session operations
    Session {
        #[command(subcommand)]
        action: SessionCommands,
    },

    /// Access-control checks
    Access {
        #[command(subcommand)]
        action: AccessCommands,
    },

    /// Profile operations
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },

    /// Tenant roster operations
    Tenants {
        #[command(subcommand)]
        action: TenantCommands,
    },

    /// Tenant note operations
    Notes {
        #[command(subcommand)]
        action: NoteCommands,
    },

    /// Survey operations
    Surveys {
        #[command(subcommand)]
        action: SurveyCommands,
    },

    /// Run the expiry watchdog until the session lapses or Ctrl-C
    Watch,
}
