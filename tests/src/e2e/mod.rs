//! E2E infrastructure: a MongoDB container plus the server binary bound to a free
//! port, and helpers to sign in and seed data.

mod menu;

use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use mongodb::bson::{doc, oid::ObjectId, Document};
use reqwest::header::{COOKIE, SET_COOKIE};
use testcontainers::{
    core::{IntoContainerPort, WaitFor},
    runners::AsyncRunner,
    ContainerAsync, GenericImage,
};
use tokio::time::sleep;
use uuid::Uuid;

const TOKEN_SECRET: &str = "e2e-token-secret";

const WORKSPACE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/..");

static SERVER_BINARY: OnceLock<Result<PathBuf, String>> = OnceLock::new();

/// Builds the server once per test run and returns the binary path. `kill` has to
/// reach the server process itself, so it is not started through `cargo run`.
fn server_binary() -> E2EResult<PathBuf> {
    SERVER_BINARY
        .get_or_init(|| {
            let status = Command::new("cargo")
                .args(["build", "--quiet", "--package", "bistro-server"])
                .current_dir(WORKSPACE_DIR)
                .status()
                .map_err(|e| format!("failed to run cargo build: {e}"))?;
            if !status.success() {
                return Err(format!("cargo build exited with {status}"));
            }
            let target = std::env::var("CARGO_TARGET_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(WORKSPACE_DIR).join("target"));
            Ok(target.join("debug").join("bistro-server"))
        })
        .clone()
        .map_err(E2EError::Setup)
}

/// Error type for E2E tests
#[derive(Debug, thiserror::Error)]
pub enum E2EError {
    #[error("Setup failed: {0}")]
    Setup(String),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Timeout waiting for: {0}")]
    Timeout(String),

    #[error("Missing token cookie")]
    MissingCookie,
}

pub type E2EResult<T> = Result<T, E2EError>;

pub struct E2EInfra {
    pub base_url: String,
    pub db: mongodb::Database,
    pub http: reqwest::Client,
    server: Child,
    _mongo: ContainerAsync<GenericImage>,
}

impl Drop for E2EInfra {
    fn drop(&mut self) {
        let _ = self.server.kill();
        let _ = self.server.wait();
    }
}

impl E2EInfra {
    pub async fn init() -> E2EResult<Self> {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("info")
            .try_init();

        let image = GenericImage::new("mongo", "7")
            .with_exposed_port(27017.tcp())
            .with_wait_for(WaitFor::message_on_stdout("Waiting for connections"));
        let mongo = image
            .start()
            .await
            .map_err(|e| E2EError::Setup(format!("failed to start MongoDB: {e}")))?;
        let mongo_port = mongo
            .get_host_port_ipv4(27017.tcp())
            .await
            .map_err(|e| E2EError::Setup(e.to_string()))?;
        let mongo_uri = format!("mongodb://127.0.0.1:{mongo_port}");
        let db_name = format!("bistro_e2e_{}", &Uuid::new_v4().simple().to_string()[..8]);
        tracing::info!("MongoDB started on {mongo_uri} ({db_name})");

        let port = portpicker::pick_unused_port()
            .ok_or_else(|| E2EError::Setup("no free port".into()))?;
        let server = Command::new(server_binary()?)
            .env("MONGO_URI", &mongo_uri)
            .env("MONGO_DB", &db_name)
            .env("PORT", port.to_string())
            .env("ACCESS_TOKEN_SECRET", TOKEN_SECRET)
            .env("RUST_LOG", "info,bistro_server=debug")
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| E2EError::Setup(format!("failed to start server: {e}")))?;

        let client = mongodb::Client::with_uri_str(&mongo_uri).await?;
        let infra = Self {
            base_url: format!("http://127.0.0.1:{port}"),
            db: client.database(&db_name),
            http: reqwest::Client::new(),
            server,
            _mongo: mongo,
        };
        infra.wait_ready(Duration::from_secs(30)).await?;
        Ok(infra)
    }

    async fn wait_ready(&self, timeout: Duration) -> E2EResult<()> {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if let Ok(resp) = self.http.get(self.url("/")).send().await {
                if resp.status().is_success() {
                    return Ok(());
                }
            }
            sleep(Duration::from_millis(250)).await;
        }
        Err(E2EError::Timeout(format!("server at {}", self.base_url)))
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Signs in as `email` and returns the `Cookie` header value to send back.
    pub async fn login(&self, email: &str) -> E2EResult<String> {
        let resp = self
            .http
            .post(self.url("/create-token"))
            .json(&serde_json::json!({ "email": email, "name": "E2E" }))
            .send()
            .await?
            .error_for_status()?;

        resp.headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .filter_map(|v| v.split(';').next())
            .find(|pair| pair.starts_with("token="))
            .map(String::from)
            .ok_or(E2EError::MissingCookie)
    }

    pub fn get(&self, path: &str, cookie: Option<&str>) -> reqwest::RequestBuilder {
        with_cookie(self.http.get(self.url(path)), cookie)
    }

    pub fn post(&self, path: &str, cookie: Option<&str>) -> reqwest::RequestBuilder {
        with_cookie(self.http.post(self.url(path)), cookie)
    }

    pub fn put(&self, path: &str, cookie: Option<&str>) -> reqwest::RequestBuilder {
        with_cookie(self.http.put(self.url(path)), cookie)
    }

    pub fn patch(&self, path: &str, cookie: Option<&str>) -> reqwest::RequestBuilder {
        with_cookie(self.http.patch(self.url(path)), cookie)
    }

    pub fn delete(&self, path: &str, cookie: Option<&str>) -> reqwest::RequestBuilder {
        with_cookie(self.http.delete(self.url(path)), cookie)
    }

    /// Stores a user with the given role directly, the way an operator would
    /// bootstrap the first admin.
    pub async fn seed_user(&self, email: &str, role: &str) -> E2EResult<ObjectId> {
        let res = self
            .db
            .collection::<Document>("users")
            .insert_one(doc! { "email": email, "role": role })
            .await?;
        res.inserted_id
            .as_object_id()
            .ok_or_else(|| E2EError::Setup("users insert returned no ObjectId".into()))
    }

    pub async fn seed_menu_item(&self, name: &str, category: &str, price: f64) -> E2EResult<ObjectId> {
        let res = self
            .db
            .collection::<Document>("menuItems")
            .insert_one(doc! {
                "name": name,
                "category": category,
                "price": price,
                "recipe": format!("{name} recipe"),
                "image": format!("https://img.example/{}.jpg", name.to_lowercase()),
            })
            .await?;
        res.inserted_id
            .as_object_id()
            .ok_or_else(|| E2EError::Setup("menu insert returned no ObjectId".into()))
    }

    /// Signs in as a freshly stored admin.
    pub async fn admin_cookie(&self) -> E2EResult<String> {
        self.seed_user("a@x.com", "admin").await?;
        self.login("a@x.com").await
    }
}

fn with_cookie(req: reqwest::RequestBuilder, cookie: Option<&str>) -> reqwest::RequestBuilder {
    match cookie {
        Some(cookie) => req.header(COOKIE, cookie),
        None => req,
    }
}
