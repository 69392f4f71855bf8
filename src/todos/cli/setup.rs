use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "todo", bin_name = "todo", version = get_version())]
#[command(about = "Keep a to-do list in a JSON file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// JSON document holding the to-dos
    #[arg(long, global = true, env = "TODO_FILE", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Directory that `backup` moves the document into
    #[arg(long, global = true, env = "TODO_BACKUP_DIR", value_name = "PATH")]
    pub backup_dir: Option<PathBuf>,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a to-do
    #[command(alias = "a")]
    Add {
        /// Title of the to-do (prompts when omitted)
        todo: Option<String>,

        /// Initial status; only `true` marks the to-do done
        #[arg(
            short,
            long,
            num_args = 0..=1,
            default_missing_value = "",
            value_name = "STATUS"
        )]
        status: Option<String>,
    },

    /// List the to-dos
    #[command(alias = "ls")]
    List,

    /// Mark to-dos as done
    Do {
        /// Ids of the to-dos (e.g. 0 2)
        #[arg(required = true, num_args = 1..)]
        todos: Vec<String>,
    },

    /// Mark to-dos as not done
    Undo {
        /// Ids of the to-dos (e.g. 0 2)
        #[arg(required = true, num_args = 1..)]
        todos: Vec<String>,
    },

    /// Move the to-do document into the backup directory, starting a fresh list
    Backup,
}
