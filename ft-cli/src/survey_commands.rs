use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum SurveyCommands {
    /// List all survey records
    List,

    /// Show aggregate counts by satisfaction level and category
    Stats,
}
