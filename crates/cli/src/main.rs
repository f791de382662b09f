mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand, ValueEnum};
use hexokit_core::frontmatter::FieldKind;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "hexokit", version, about = "Terminal-first Hexo front matter toolkit")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved paths
    Doctor,

    /// List tag or category groups with post counts
    List(ListArgs),

    /// Show the parsed front matter of one post
    Show(ShowArgs),

    /// Overwrite the tags or categories of one post
    Set(SetArgs),

    /// Add a tag or category to every post in an existing group
    Add(AddArgs),

    /// Rename a tag or category across every post carrying it
    Rename(RenameArgs),

    /// Delete a tag or category from every post carrying it
    Delete(DeleteArgs),

    /// Run the configured deploy command
    Deploy,
}

/// Which classify axis a command operates on.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Kind {
    Tags,
    Categories,
}

impl From<Kind> for FieldKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Tags => Self::Tags,
            Kind::Categories => Self::Categories,
        }
    }
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(value_enum)]
    pub kind: Kind,

    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Post file to inspect
    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct SetArgs {
    #[arg(value_enum)]
    pub kind: Kind,

    /// Post file to edit
    pub file: PathBuf,

    /// New values; none clears the field to `[]`
    pub values: Vec<String>,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(value_enum)]
    pub kind: Kind,

    /// Existing group whose posts receive the new value
    pub group: String,

    /// Value to add (categories accept `a/b/c` or `[a, b, c]`)
    pub value: String,
}

#[derive(Debug, Args)]
pub struct RenameArgs {
    #[arg(value_enum)]
    pub kind: Kind,

    pub old: String,
    pub new: String,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    #[arg(value_enum)]
    pub kind: Kind,

    pub name: String,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Doctor => cmd::doctor::run(cli.config.as_deref(), cli.profile.as_deref()),
        Commands::List(args) => {
            cmd::list::run(cli.config.as_deref(), cli.profile.as_deref(), &args);
        }
        Commands::Show(args) => cmd::show::run(&args),
        Commands::Set(args) => cmd::set::run(&args),
        Commands::Add(args) => {
            cmd::add::run(cli.config.as_deref(), cli.profile.as_deref(), &args);
        }
        Commands::Rename(args) => {
            cmd::rename::run(cli.config.as_deref(), cli.profile.as_deref(), &args);
        }
        Commands::Delete(args) => {
            cmd::delete::run(cli.config.as_deref(), cli.profile.as_deref(), &args);
        }
        Commands::Deploy => {
            cmd::deploy::run(cli.config.as_deref(), cli.profile.as_deref());
        }
    }
}
