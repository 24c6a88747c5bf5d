use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum NoteCommands {
    /// Attach a free-text note to a tenant
    Add {
        #[arg(long)]
        tenant_id: i64,

        #[arg(long)]
        note: String,
    },
}
