use std::time::Duration;

use once_cell::sync::Lazy;
use sqlx::{Connection, Executor, PgConnection, PgPool};
use uuid::Uuid;
use waitlist::{
    configuration::{DatabaseSettings, get_configuration},
    startup::{Application, get_connection_pool},
    store::{InMemorySubmissionStore, PgSubmissionStore, SubmissionStoreBackend},
    telemetry::{get_subscriber, init_subscriber},
    waitlist_client::WaitlistClient,
};

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn post_submission(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(format!("{}/api/submit-email", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_raw_submission(&self, body: &'static str) -> reqwest::Response {
        self.post_submission_with_content_type(body, Some("application/json"))
            .await
    }

    pub async fn post_submission_with_content_type(
        &self,
        body: &'static str,
        content_type: Option<&str>,
    ) -> reqwest::Response {
        let mut request = self
            .api_client
            .post(format!("{}/api/submit-email", self.address))
            .body(body);
        if let Some(content_type) = content_type {
            request = request.header("Content-type", content_type);
        }
        request.send().await.expect("Failed to execute request.")
    }

    pub fn waitlist_client(&self) -> WaitlistClient {
        WaitlistClient::new(&self.address, Duration::from_secs(5))
            .expect("Failed to build the waitlist client.")
    }
}

async fn spawn_with_store(store: SubmissionStoreBackend) -> TestApp {
    Lazy::force(&TRACING);

    let mut config = get_configuration().expect("Failed to read configuration");
    config.app.port = 0;

    let application =
        Application::build_with_store(config, store).expect("Failed to build application.");
    let port = application.get_port();
    let _ = tokio::spawn(application.run_until_stopped());

    TestApp {
        address: format!("http://127.0.0.1:{port}"),
        api_client: reqwest::Client::new(),
    }
}

/// Spawns the app backed by a fresh in-memory store, returned alongside it
/// so tests can inspect what was persisted.
pub async fn spawn_app() -> (TestApp, InMemorySubmissionStore) {
    let store = InMemorySubmissionStore::new();
    let app = spawn_with_store(SubmissionStoreBackend::InMemory(store.clone())).await;
    (app, store)
}

pub async fn configure_database(config: &DatabaseSettings) -> PgPool {
    let mut connection = PgConnection::connect_with(&config.without_db())
        .await
        .expect("Failed to connect to Postgres");

    connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, config.database_name).as_str())
        .await
        .expect("Failed to create database");

    let connection_pool = get_connection_pool(config);

    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await
        .expect("Failed to migrate database");

    connection_pool
}

/// Spawns the app against a freshly created and migrated Postgres database.
pub async fn spawn_app_with_postgres() -> (TestApp, PgPool) {
    let mut config = get_configuration().expect("Failed to read configuration");
    config.database.database_name = Uuid::new_v4().to_string();

    let db_pool = configure_database(&config.database).await;
    let store = SubmissionStoreBackend::Postgres(PgSubmissionStore::new(db_pool.clone()));

    (spawn_with_store(store).await, db_pool)
}
