use std::process::ExitCode;

use clap::Parser;
use stocklist::{
    config::AppConfig,
    error::AppError,
    persist::sqlite::SqliteRecordStore,
    sync::{
        controller::{Controller, UserAction},
        synchronizer::Synchronizer,
    },
    telemetry,
};
use tracing::info;

mod args;
mod terminal;

use args::{Cli, Commands};
use terminal::{Listing, TerminalPresenter};

fn main() -> ExitCode {
    let cli = Cli::parse();
    telemetry::init(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, AppError> {
    let mut config = AppConfig::load(&cli.config)?;
    if let Some(db) = cli.db {
        config.db_path = db;
    }

    let store = SqliteRecordStore::open(&config.db_path, config.store_config())?;
    info!(db = %config.db_path.display(), "inventory opened");
    let sync = Synchronizer::new(store, config.export.clone())?;
    let mut controller = Controller::new(sync);

    let mut presenter = TerminalPresenter::new(cli.yes);
    let action = match cli.command.unwrap_or(Commands::List { json: false }) {
        Commands::Add { name, quantity } => {
            presenter.name = name;
            presenter.quantity = quantity;
            UserAction::AddItem
        }
        Commands::Remove { name } => {
            let projection = controller.synchronizer().projection();
            presenter.selected = projection.contains_name(&name).then_some(name);
            UserAction::DeleteItem
        }
        Commands::Clear => UserAction::RemoveAll,
        Commands::List { json } => {
            presenter.listing = if json { Listing::Json } else { Listing::Table };
            UserAction::Refresh
        }
        Commands::Export { path } => {
            presenter.save_path = Some(path);
            UserAction::SaveList
        }
    };

    let res = controller.handle(action, &mut presenter);

    controller
        .into_inner()
        .into_store()
        .close()
        .map_err(AppError::Close)?;

    Ok(if res.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
