//! `todo`: terminal front end for the todo store.
//!
//! Each invocation is one user action. Mutations re-render the list through
//! the store's change notification; `list` renders directly.

mod render;
#[cfg(test)]
mod test_support;
mod transport;

use std::cell::RefCell;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;
use std::time::Duration;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use todo_core::{FileStorage, StoreConfig, TodoStore, DEFAULT_BASE_URL, DEFAULT_STORAGE_KEY};
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use crate::transport::UreqTransport;

const LOAD_FAILED: &str = "Error loading todos. Please try again.";

/// Keep a short to-do list seeded from a remote source
#[derive(Parser, Debug)]
#[command(name = "todo", version)]
struct Args {
    /// Base URL of the todo source (`/todos` is appended)
    #[arg(long, env = "TODO_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Directory holding the persisted list
    #[arg(long, env = "TODO_DATA_DIR", default_value = ".todo-data")]
    data_dir: PathBuf,

    /// Key the list is stored under
    #[arg(long, env = "TODO_STORAGE_KEY", default_value = DEFAULT_STORAGE_KEY)]
    storage_key: String,

    /// Give up on the fetch after this many seconds (default: wait forever)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Fetch the first 20 todos from the source, replacing the stored list
    Load,
    /// Show the stored list (default)
    List,
    /// Flip a todo between completed and incomplete
    Toggle {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
    /// Delete a todo
    Delete {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
    /// Forget the stored list
    Clear,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let out = Rc::new(RefCell::new(io::stdout()));
    match run(args, out, &mut io::stderr()) {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Execute one action. The list is rendered to `out`; user-facing
/// notifications go to `err`.
fn run<W: Write + 'static>(args: Args, out: Rc<RefCell<W>>, err: &mut dyn Write) -> anyhow::Result<ExitCode> {
    let Args {
        base_url,
        data_dir,
        storage_key,
        timeout_secs,
        command,
        ..
    } = args;

    let config = StoreConfig::default()
        .with_base_url(base_url)
        .with_storage_key(storage_key);
    let mut store = TodoStore::new(config, FileStorage::new(data_dir));
    let sink = Rc::clone(&out);
    store.subscribe(move |todos| {
        if let Err(e) = render::render(todos, &mut *sink.borrow_mut()) {
            warn!(error = %e, "failed to render todos");
        }
    });

    match command.unwrap_or(Command::List) {
        Command::Load => {
            let transport = UreqTransport::new(timeout_secs.map(Duration::from_secs));
            if let Err(e) = store.load(&transport) {
                writeln!(err, "{LOAD_FAILED}")?;
                error!(error = %e, "failed to load todos");
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::List => {
            render::render(&store.list(), &mut *out.borrow_mut()).context("writing todo list")?;
        }
        Command::Toggle { id } => store.toggle(id).with_context(|| format!("toggling todo {id}"))?,
        Command::Delete { id } => store.remove(id).with_context(|| format!("deleting todo {id}"))?,
        Command::Clear => store.clear().context("clearing todos")?,
    }
    Ok(ExitCode::SUCCESS)
}
