mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod repository;
mod services;
mod utils;

use std::io;
use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use log::{info, warn};

use config::AppConfig;
use repository::{InMemorySalaryRepository, PgSalaryRepository, SalaryRepository};
use services::salary::SalaryAnalysisService;
use services::solver;
use services::webhook::{WebhookOutcome, WebhookService};

#[derive(Parser)]
#[command(name = "finserv_backend", about = "Salary analysis API and webhook submitter")]
struct Cli {
    /// Keep all data in process memory instead of PostgreSQL.
    #[arg(long, global = true)]
    in_memory: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP server (default).
    Serve {
        /// Also run the webhook flow once, after the configured delay.
        #[arg(long)]
        with_webhook: bool,
    },
    /// Run the webhook flow once and exit.
    Webhook,
    /// Print the query selected for a registration number.
    Solve { reg_no: String },
}

async fn build_repository(config: &AppConfig, in_memory: bool) -> io::Result<Arc<dyn SalaryRepository>> {
    if in_memory {
        warn!("Using in-memory storage; data is lost on exit");
        return Ok(Arc::new(InMemorySalaryRepository::new()));
    }

    let database_url = config.require_database_url().map_err(io::Error::other)?;
    let pool = db::create_pool(database_url).await.map_err(io::Error::other)?;
    db::run_migrations(&pool).await.map_err(io::Error::other)?;
    Ok(Arc::new(PgSalaryRepository::new(pool)))
}

fn webhook_service(config: &AppConfig, repository: Arc<dyn SalaryRepository>) -> WebhookService {
    WebhookService::new(
        reqwest::Client::new(),
        config.webhook_generate_url.clone(),
        config.identity.clone(),
        repository,
    )
}

async fn load(in_memory: bool) -> io::Result<(AppConfig, Arc<dyn SalaryRepository>)> {
    let config = AppConfig::from_env().map_err(io::Error::other)?;
    let repository = build_repository(&config, in_memory).await?;
    Ok((config, repository))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve { with_webhook: false }) {
        Command::Solve { reg_no } => {
            println!("{}", solver::query_for(&reg_no));
            Ok(())
        }
        Command::Webhook => {
            let (config, repository) = load(cli.in_memory).await?;
            let outcome = webhook_service(&config, repository).process_webhook_flow().await;
            info!("Webhook process finished: {:?}", outcome);
            if outcome == WebhookOutcome::Submitted {
                Ok(())
            } else {
                Err(io::Error::other(format!("webhook flow stopped: {:?}", outcome)))
            }
        }
        Command::Serve { with_webhook } => {
            let (config, repository) = load(cli.in_memory).await?;
            if with_webhook {
                let service = webhook_service(&config, repository.clone());
                let delay = config.startup_delay;
                actix_web::rt::spawn(async move {
                    let outcome = service.run_after_delay(delay).await;
                    info!("Webhook process finished: {:?}", outcome);
                });
            }

            let salary_service = web::Data::new(SalaryAnalysisService::new(repository));

            info!("Starting server at {}", config.bind_address);

            HttpServer::new(move || {
                App::new()
                    .app_data(salary_service.clone())
                    .configure(handlers::routes)
            })
            .bind(&config.bind_address)?
            .run()
            .await
        }
    }
}
