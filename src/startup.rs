use crate::configuration::{DatabaseSettings, Settings, StoreBackend};
use crate::routes::{
    SUBMIT_EMAIL_PATH, health_check, json_error_handler, landing_page, submit_email,
};
use crate::store::{InMemorySubmissionStore, PgSubmissionStore, SubmissionStoreBackend};
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::TcpListener;
use std::time::Duration;
use tera::Tera;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub fn build(config: Settings) -> Result<Self, anyhow::Error> {
        let store = match config.store.backend {
            StoreBackend::Postgres => SubmissionStoreBackend::Postgres(PgSubmissionStore::new(
                get_connection_pool(&config.database),
            )),
            StoreBackend::InMemory => {
                SubmissionStoreBackend::InMemory(InMemorySubmissionStore::new())
            }
        };

        Self::build_with_store(config, store)
    }

    pub fn build_with_store(
        config: Settings,
        store: SubmissionStoreBackend,
    ) -> Result<Self, anyhow::Error> {
        let address = format!("{}:{}", config.app.host, config.app.port);
        let listener =
            TcpListener::bind(&address).with_context(|| format!("Failed to bind {address}."))?;
        let port = listener.local_addr()?.port();
        let templates = Tera::new("views/**/*").context("Failed to initialize Tera templates.")?;
        let server = run(listener, store, templates)?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    store: SubmissionStoreBackend,
    templates: Tera,
) -> Result<Server, anyhow::Error> {
    let store = web::Data::new(store);
    let templates = web::Data::new(templates);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(
                web::JsonConfig::default()
                    .content_type_required(false)
                    .content_type(|_| true)
                    .error_handler(json_error_handler),
            )
            .route("/health_check", web::get().to(health_check))
            .route("/", web::get().to(landing_page))
            .route(SUBMIT_EMAIL_PATH, web::post().to(submit_email))
            .app_data(store.clone())
            .app_data(templates.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}

pub fn get_connection_pool(db_config: &DatabaseSettings) -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(2))
        .connect_lazy_with(db_config.with_db())
}
