pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::contact;
pub use modules::content;
pub use modules::email;
pub use modules::settings;

use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use clap::{Parser, Subcommand};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::openapi::ApiDoc;
use crate::contact::adapter::outgoing::ContactRepositoryPostgres;
use crate::contact::application::ports::outgoing::ContactNotifier;
use crate::contact::application::services::{ListContactMessagesService, SubmitContactService};
use crate::contact::application::ContactUseCases;
use crate::content::adapter::outgoing::{
    ContentQueryPostgres, ContentRepositoryPostgres, ContentSeederPostgres,
};
use crate::content::application::fallback::{
    fallback_experiences, fallback_personal_info, fallback_projects, fallback_skills,
};
use crate::content::application::ports::incoming::use_cases::SeedContentUseCase;
use crate::content::application::services::{
    ReadThroughService, SeedContentService, WriteContentService,
};
use crate::content::application::ContentUseCases;
use crate::content::domain::{Experience, Project, Skill};
use crate::email::adapter::outgoing::SmtpEmailSender;
use crate::email::application::services::ContactEmailNotifier;
use crate::settings::application::Settings;
use crate::shared::api::custom_json_config;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub content: ContentUseCases,
    pub contact: ContactUseCases,
}

#[derive(Parser, Debug)]
#[command(name = "portfolio_actix")]
#[command(about = "Backend for a personal portfolio site")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Reset the database to the built-in content and exit
    Seed,
}

/// Wire adapters and services for one database connection.
pub fn build_app_state(db: Arc<DatabaseConnection>, settings: Arc<Settings>) -> AppState {
    let query = ContentQueryPostgres::new(Arc::clone(&db));
    let writer = Arc::new(WriteContentService::new(ContentRepositoryPostgres::new(
        Arc::clone(&db),
    )));

    let personal_info = {
        let settings = Arc::clone(&settings);
        ReadThroughService::new(query.clone(), move || {
            vec![fallback_personal_info(&settings)]
        })
    };

    let content = ContentUseCases {
        get_personal_info: Arc::new(personal_info),
        update_personal_info: writer.clone(),
        list_experiences: Arc::new(ReadThroughService::<_, Experience>::new(
            query.clone(),
            fallback_experiences,
        )),
        create_experience: writer.clone(),
        list_projects: Arc::new(ReadThroughService::<_, Project>::new(
            query.clone(),
            fallback_projects,
        )),
        create_project: writer.clone(),
        list_skills: Arc::new(ReadThroughService::<_, Skill>::new(query, fallback_skills)),
        create_skill: writer,
        seed: Arc::new(SeedContentService::new(
            ContentSeederPostgres::new(Arc::clone(&db)),
            Arc::clone(&settings),
        )),
    };

    let notifier: Option<Arc<dyn ContactNotifier>> = if settings.mail_enabled() {
        let sender = Arc::new(SmtpEmailSender::new(&settings.mail));
        Some(Arc::new(ContactEmailNotifier::new(sender, &settings)))
    } else {
        info!("SMTP not configured, contact notifications disabled");
        None
    };

    let contact = ContactUseCases {
        submit: Arc::new(SubmitContactService::new(
            ContactRepositoryPostgres::new(Arc::clone(&db)),
            notifier,
            settings.mail.send_timeout(),
        )),
        list_messages: Arc::new(ListContactMessagesService::new(
            ContactRepositoryPostgres::new(db),
        )),
    };

    AppState {
        settings,
        content,
        contact,
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Content
    cfg.service(crate::content::adapter::incoming::web::routes::get_personal_info_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::update_personal_info_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_experience_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::create_experience_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::create_project_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_grouped_skills_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_skills_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::create_skill_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::init_db_handler);
    // Contact
    cfg.service(crate::contact::adapter::incoming::web::routes::submit_contact_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::list_contact_messages_handler);
    // Config
    cfg.service(crate::settings::adapter::incoming::web::routes::get_config_handler);
}

/// `.env.{RUST_ENV}` first, then `.env`.
fn load_env_files() {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

fn init_tracing(settings: &Settings) {
    let default_filter = if settings.should_debug() {
        "debug,actix_web=info,sqlx=warn"
    } else {
        "info,actix_web=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(not(tarpaulin_include))]
async fn connect(settings: &Settings) -> anyhow::Result<Arc<DatabaseConnection>> {
    let mut opt = ConnectOptions::new(settings.server.database_url.clone());
    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    Migrator::up(&db, None)
        .await
        .context("Failed to run database migrations")?;

    Ok(Arc::new(db))
}

#[cfg(not(tarpaulin_include))]
async fn serve(state: AppState, db: Arc<DatabaseConnection>) -> anyhow::Result<()> {
    let server_url = state.settings.server_address();
    info!("Server listening on {}", server_url);

    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await
    .context("HTTP server error")
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    load_env_files();
    let cli = Cli::parse();

    let settings = Arc::new(Settings::from_env());
    init_tracing(&settings);
    info!(env = %settings.app_env, "Starting application...");

    let db = connect(&settings).await?;
    let state = build_app_state(Arc::clone(&db), settings);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(state, db).await,
        Command::Seed => {
            let summary = state
                .content
                .seed
                .execute()
                .await
                .context("Seeding failed")?;
            info!(
                personal_info = summary.personal_info,
                experiences = summary.experiences,
                projects = summary.projects,
                skills = summary.skills,
                "Seed complete"
            );
            Ok(())
        }
    }
}
