//! Integration tests for MarineHarvest.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p marine-harvest-integration-tests
//! ```
//!
//! Each test starts the storefront router on an ephemeral local port with
//! its cart slot in a fresh temporary directory, then drives it over HTTP
//! with `reqwest`.
//!
//! # Test Categories
//!
//! - `catalog_listing` - Collection listing, filters and sorting
//! - `cart_persistence` - Cart survives server restarts; corrupt slots recover
//! - `storefront_api` - Cart, checkout and notification flows

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use marine_harvest_core::Catalog;
use marine_harvest_storefront::cart::CART_STORAGE_KEY;
use marine_harvest_storefront::config::StorefrontConfig;
use marine_harvest_storefront::state::AppState;
use marine_harvest_storefront::storage::{FileStore, KeyValueStore};
use reqwest::Client;
use tempfile::TempDir;
use tokio::task::JoinHandle;

/// A running storefront plus the directory holding its cart.
///
/// The server task lives until the test runtime shuts down.
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
    data_dir: TempDir,
    server: JoinHandle<()>,
}

impl TestContext {
    /// Start a storefront over an empty data directory.
    ///
    /// # Panics
    ///
    /// Panics if the directory or listener cannot be created.
    pub async fn start() -> Self {
        let data_dir = TempDir::new().expect("Failed to create data directory");
        Self::serve(data_dir).await
    }

    /// Start a storefront whose cart slot already holds `payload`.
    ///
    /// # Panics
    ///
    /// Panics if the slot cannot be written.
    pub async fn start_with_cart(payload: &str) -> Self {
        let data_dir = TempDir::new().expect("Failed to create data directory");
        FileStore::open(data_dir.path())
            .and_then(|store| store.set(CART_STORAGE_KEY, payload))
            .expect("Failed to seed cart slot");
        Self::serve(data_dir).await
    }

    /// Stop this server and start a new one over the same data directory.
    ///
    /// # Panics
    ///
    /// Panics if the new listener cannot be created.
    pub async fn restart(self) -> Self {
        self.server.abort();
        Self::serve(self.data_dir).await
    }

    /// Raw contents of the cart slot.
    ///
    /// # Panics
    ///
    /// Panics if the slot cannot be read.
    #[must_use]
    pub fn stored_cart(&self) -> Option<String> {
        FileStore::open(self.data_dir.path())
            .and_then(|store| store.get(CART_STORAGE_KEY))
            .expect("Failed to read cart slot")
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        self.data_dir.path()
    }

    /// Absolute URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn serve(data_dir: TempDir) -> Self {
        let storage = FileStore::open(data_dir.path()).expect("Failed to open data directory");
        let config = StorefrontConfig {
            data_dir: data_dir.path().to_path_buf(),
            ..StorefrontConfig::default()
        };
        let state = AppState::new(config, Catalog::builtin(), Arc::new(storage));
        let app = marine_harvest_storefront::app(state);

        let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");

        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            client: Client::new(),
            base_url: format!("http://{addr}"),
            data_dir,
            server,
        }
    }
}
