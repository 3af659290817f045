use clap::{Parser, Subcommand};

/// Returns the version string, including git hash and commit date for
/// non-release builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{} (dev: {} {})", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "doable")]
#[command(version = get_version())]
#[command(about = "Personal task tracker for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task
    #[command(alias = "a")]
    Add {
        /// Title of the task (optional, opens editor if not provided)
        #[arg(required = false)]
        title: Option<String>,

        /// Description of the task
        #[arg(required = false)]
        description: Option<String>,

        /// Deadline expression: a crontab line or a datetime
        #[arg(short, long)]
        cron: Option<String>,

        /// Skip opening the editor
        #[arg(long)]
        no_editor: bool,
    },

    /// List tasks
    #[command(alias = "ls")]
    List,

    /// Show one task
    #[command(alias = "s")]
    Show {
        /// Index of the task (e.g. 1)
        index: u32,

        /// Edit the task instead of displaying it
        #[arg(short, long)]
        edit: bool,
    },

    /// Edit a task in the editor
    #[command(alias = "e")]
    Edit {
        /// Index of the task
        index: u32,
    },

    /// Mark a task solved
    Done {
        /// Index of the task
        index: u32,
    },

    /// Reopen a solved task
    Undone {
        /// Index of the task
        index: u32,
    },

    /// Append a note to a task
    Note {
        /// Index of the task
        index: u32,

        /// The note text
        note: String,
    },

    /// Remove a task
    #[command(alias = "rm")]
    Remove {
        /// Index of the task
        index: u32,
    },
}
