use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum TenantCommands {
    /// List the tenant roster
    List {
        /// Case-insensitive name filter
        #[arg(long)]
        search: Option<String>,
    },
}
