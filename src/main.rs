use crate::config::{Cli, Command, Config};
use crate::responses::error_to_response;
use crate::router::{handle, AppState};
use crate::store::connection::init_db;
use crate::store::{Database, DocumentStore, FirestoreStore, SqliteStore};
use astra::Server;
use clap::Parser;
use std::error::Error;
use std::time::Instant;

mod config;
mod domain;
mod errors;
mod logging;
mod responses;
mod router;
mod store;
mod templates;
mod view;

#[cfg(test)]
mod tests;

fn main() {
    logging::init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Command::Seed { file }) => seed(&cli.config, &file),
        Some(Command::Serve) | None => serve(cli.config),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "exiting");
        std::process::exit(1);
    }
}

fn local_store(config: &Config) -> Result<SqliteStore, Box<dyn Error>> {
    let db = Database::new(config.db_path.clone());
    init_db(&db)?;
    Ok(SqliteStore::new(db))
}

fn seed(config: &Config, file: &std::path::Path) -> Result<(), Box<dyn Error>> {
    if config.firestore_project.is_some() {
        tracing::warn!("firestore is read-only here; seeding the local database instead");
    }
    let written = local_store(config)?.seed_from_file(file)?;
    println!("Seeded {written} listings into {}", config.db_path);
    Ok(())
}

fn serve(config: Config) -> Result<(), Box<dyn Error>> {
    let store: Box<dyn DocumentStore> = match config.firestore() {
        Some(fs) => {
            tracing::info!(project = %fs.project_id, "reading listings from firestore");
            Box::new(FirestoreStore::new(fs)?)
        }
        None => Box::new(local_store(&config)?),
    };

    let state = AppState { store };

    tracing::info!(addr = %config.bind, workers = config.workers, "starting server");
    let server = Server::bind(config.bind).max_workers(config.workers);

    server.serve(move |req: astra::Request, _info: astra::ConnectionInfo| {
        let started = Instant::now();
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        let resp = match handle(req, &state) {
            Ok(resp) => resp,
            Err(err) => error_to_response(err),
        };

        tracing::info!(
            %method,
            %path,
            status = resp.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request"
        );
        resp
    })?;

    tracing::info!("server shut down cleanly");
    Ok(())
}
