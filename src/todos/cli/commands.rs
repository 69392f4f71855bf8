//! # CLI Layer
//!
//! The only place that knows about the terminal: argument parsing, the
//! interactive prompt, logging setup and output formatting. Each handler
//! calls one `TodoApi` method and prints the `CmdResult` it gets back.

use super::print::{print_messages, print_todos};
use super::prompt::ask_title;
use super::setup::{Cli, Commands};
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use todos::api::{parse_status, CmdResult, TodoApi};
use todos::config::TodoConfig;
use todos::error::{Result, TodoError};
use todos::store::fs::FileStore;
use todos::store::TodoStore;
use tracing::debug;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: TodoApi<FileStore>,
    config: TodoConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let mut ctx = init_context(&cli)?;
    debug!(store = %ctx.api.store().location(), "store ready");

    match cli.command {
        Some(Commands::Add { todo, status }) => handle_add(&mut ctx, todo, status),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Do { todos }) => handle_do(&mut ctx, todos),
        Some(Commands::Undo { todos }) => handle_undo(&mut ctx, todos),
        Some(Commands::Backup) => handle_backup(&mut ctx),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .compact()
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut config = TodoConfig::load(&cwd)?;

    if let Some(file) = &cli.file {
        config = config.with_data_file(file.clone());
    }
    if let Some(dir) = &cli.backup_dir {
        config = config.with_backup_dir(dir.clone());
    }

    let store = FileStore::new(config.data_file.clone(), config.backup_dir.clone());
    Ok(AppContext {
        api: TodoApi::new(store),
        config,
    })
}

fn handle_add(ctx: &mut AppContext, todo: Option<String>, status: Option<String>) -> Result<()> {
    let title = match todo {
        Some(title) if !title.is_empty() => title,
        _ if std::io::stdin().is_terminal() => ask_title()?,
        _ => {
            return Err(TodoError::Api(
                "No to-do given and stdin is not a terminal".into(),
            ))
        }
    };

    let result = ctx.api.add_todo(title, parse_status(status.as_deref()))?;
    print_result(ctx, &result);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_todos()?;
    print_result(ctx, &result);
    Ok(())
}

fn handle_do(ctx: &mut AppContext, todos: Vec<String>) -> Result<()> {
    let result = ctx.api.complete_todos(&todos)?;
    print_result(ctx, &result);
    Ok(())
}

fn handle_undo(ctx: &mut AppContext, todos: Vec<String>) -> Result<()> {
    let result = ctx.api.uncomplete_todos(&todos)?;
    print_result(ctx, &result);
    Ok(())
}

fn handle_backup(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.backup()?;
    print_messages(&result.messages);
    Ok(())
}

fn print_result(ctx: &AppContext, result: &CmdResult) {
    print_messages(&result.messages);
    print_todos(&result.listed_todos, &ctx.config);
}
