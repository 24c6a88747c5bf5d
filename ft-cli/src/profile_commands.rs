use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum ProfileCommands {
    /// Fetch the authenticated user's profile
    Get,

    /// Update profile fields, optionally changing the password
    Update {
        #[arg(long)]
        full_name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        address: Option<String>,

        /// Required when changing the password
        #[arg(long)]
        current_password: Option<String>,

        #[arg(long)]
        new_password: Option<String>,

        #[arg(long)]
        confirm_password: Option<String>,
    },
}
