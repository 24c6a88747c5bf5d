use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum AccessCommands {
    /// Evaluate the route guard for a pathname
    Check {
        /// Pathname to evaluate (e.g., "/tenants")
        path: String,
    },

    /// Print the dashboard route for the current role
    Route,
}
