use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum SessionCommands {
    /// Store a backend-issued credential
    Login {
        /// Bearer token as issued by the login endpoint
        #[arg(long)]
        token: String,
    },

    /// Show session validity, role and expiry
    Status,

    /// Clear the stored session
    Logout,
}
