use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use linkshelf::api::{ConfigAction, ShelfApi};
use linkshelf::config::ShelfConfig;
use linkshelf::error::{Result, ShelfError};
use linkshelf::store::fs::FileStore;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod args;
mod cli;

use args::{Cli, Commands};
use cli::print::{print_config, print_messages, print_sources, print_theme, print_view};
use cli::prompt::TermPrompter;
use cli::styles::ShelfStyles;

const HOME_ENV: &str = "LINKSHELF_HOME";
const LOG_ENV: &str = "LINKSHELF_LOG";

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "linkshelf=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

struct AppContext {
    api: ShelfApi<FileStore>,
}

impl AppContext {
    fn styles(&self) -> ShelfStyles {
        ShelfStyles::for_theme(self.api.state().theme.effective())
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Add { name, url }) => handle_add(&mut ctx, name, url),
        Some(Commands::List { search }) => handle_list(&mut ctx, search),
        Some(Commands::Search { term }) => handle_list(&mut ctx, Some(term)),
        Some(Commands::Delete { selectors, yes }) => handle_delete(&mut ctx, selectors, yes),
        Some(Commands::Theme { name }) => handle_theme(&mut ctx, name),
        Some(Commands::Favicon { selector, failures }) => {
            handle_favicon(&ctx, selector, failures)
        }
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&mut ctx, None),
    }
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "linkshelf", "linkshelf")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ShelfError::Store("Could not determine data directory".into()))
}

fn init_context() -> Result<AppContext> {
    let dir = data_dir()?;
    tracing::debug!(dir = %dir.display(), "using data directory");

    let config = ShelfConfig::load(&dir)?;
    let store = FileStore::new(dir.clone());
    let mut api = ShelfApi::new(store, config, dir);
    api.start(&mut rand::thread_rng())?;

    Ok(AppContext { api })
}

fn handle_add(ctx: &mut AppContext, name: String, url: String) -> Result<()> {
    let mut prompter = TermPrompter::new(false);
    // The prompter has already shown why the URL was rejected.
    let result = match ctx.api.submit_link(&mut prompter, &name, &url) {
        Err(ShelfError::InvalidUrl(_)) => return Err(ShelfError::Api("Link not added".into())),
        other => other?,
    };
    if result.affected_links.is_empty() {
        println!("{}", "Nothing added: name and URL are required.".dimmed());
        return Ok(());
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, search: Option<String>) -> Result<()> {
    let result = match search {
        Some(term) => ctx.api.search(&term)?,
        None => ctx.api.list()?,
    };
    if let Some(view) = &result.view {
        print_view(view, &ctx.styles());
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, selectors: Vec<String>, yes: bool) -> Result<()> {
    let mut prompter = TermPrompter::new(yes);
    let result = ctx.api.delete_links(&mut prompter, &selectors, yes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_theme(ctx: &mut AppContext, name: Option<String>) -> Result<()> {
    match name {
        Some(name) => {
            let result = ctx.api.select_theme(&name)?;
            if let Some(theme) = &result.theme {
                print_theme(theme, &ctx.styles());
            }
            print_messages(&result.messages);
        }
        None => print_theme(&ctx.api.state().theme, &ctx.styles()),
    }
    Ok(())
}

fn handle_favicon(ctx: &AppContext, selector: String, failures: usize) -> Result<()> {
    let result = ctx.api.favicon(&selector, failures)?;
    print_sources(&result.favicon_sources, &ctx.styles());
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
