use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "sitepatch",
    version,
    about = "Apply literal text patches to the site files in the current directory"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Add the .time-display wrapper rule to style.css
    FixCss,
    /// Move the header clock into the .time-display wrapper on every page
    UpdateHeader,
    /// List the available patches and the files they touch
    List,
}

impl Commands {
    /// Catalog name of the patch this command applies
    pub fn patch_name(&self) -> Option<&'static str> {
        match self {
            Commands::FixCss => Some("fix-css"),
            Commands::UpdateHeader => Some("update-header"),
            Commands::List => None,
        }
    }
}
