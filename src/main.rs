use anyhow::Result;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use xit::areas::repository::Repository;

/// Environment variable holding the tracing filter (e.g. `XIT_LOG=xit=debug`)
const LOG_ENV: &str = "XIT_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Parser)]
#[command(
    name = "xit",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Browse the references of a git repository",
    long_about = "xit classifies the references of a git repository into branches, \
    remote branches, tags and remotes, and lays them out as a sidebar together with \
    the stash. It can also create and delete branches and tags.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        short = 'C',
        global = true,
        value_name = "PATH",
        help = "Run as if xit was started in <PATH>"
    )]
    directory: Option<PathBuf>,
    #[arg(long, global = true, help = "Disable coloured output")]
    no_color: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "sidebar",
        about = "Show branches, remotes, tags and stashes",
        long_about = "This command prints the four sidebar sections of the repository, \
        always in the order BRANCHES, REMOTES, TAGS, STASHES."
    )]
    Sidebar,
    #[command(
        name = "ref-type",
        about = "Classify a full reference name",
        long_about = "This command prints the kind of a full reference name \
        (branch, active-branch, remote-branch, tag, remote or unknown)."
    )]
    RefType {
        #[arg(index = 1, help = "Full reference name, e.g. refs/heads/main")]
        name: String,
    },
    #[command(
        name = "branch",
        about = "Create or delete a branch",
        long_about = "This command creates a branch pointing at the start point (HEAD by default), \
        or deletes it with --delete."
    )]
    Branch {
        #[arg(index = 1, help = "The branch name")]
        name: String,
        #[arg(index = 2, conflicts_with = "delete", help = "The revision to start from")]
        start_point: Option<String>,
        #[arg(short, long, help = "Delete the branch")]
        delete: bool,
    },
    #[command(
        name = "tag",
        about = "Create or delete a lightweight tag",
        long_about = "This command creates a lightweight tag pointing at the target (HEAD by default), \
        or deletes it with --delete."
    )]
    Tag {
        #[arg(index = 1, help = "The tag name")]
        name: String,
        #[arg(index = 2, conflicts_with = "delete", help = "The revision to tag")]
        target: Option<String>,
        #[arg(short, long, help = "Delete the tag")]
        delete: bool,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn open_repository(directory: Option<&PathBuf>) -> Result<Repository> {
    let path = match directory {
        Some(path) => path.clone(),
        None => std::env::current_dir()?,
    };

    Repository::new(&path.to_string_lossy(), Box::new(std::io::stdout()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing();
    if cli.no_color || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let mut repository = open_repository(cli.directory.as_ref())?;

    match &cli.command {
        Commands::Sidebar => repository.sidebar()?,
        Commands::RefType { name } => repository.ref_type(name)?,
        Commands::Branch {
            name,
            start_point,
            delete,
        } => {
            if *delete {
                repository.delete_branch(name)?
            } else {
                repository.branch(name, start_point.as_deref())?
            }
        }
        Commands::Tag {
            name,
            target,
            delete,
        } => {
            if *delete {
                repository.delete_tag(name)?
            } else {
                repository.tag(name, target.as_deref())?
            }
        }
    }

    Ok(())
}
