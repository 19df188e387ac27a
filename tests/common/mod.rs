//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use itemsrv::config::AppConfig;
use itemsrv::store::SqliteStore;
use itemsrv::{HttpServer, Shutdown};

/// A server running on an ephemeral local port.
pub struct RunningServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<(), std::io::Error>>,
}

impl RunningServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Trigger shutdown and wait for the server task to finish.
    pub async fn stop(self) {
        self.shutdown.trigger();
        self.handle.await.unwrap().unwrap();
    }
}

/// Open a fresh, unseeded store in `dir`.
pub async fn empty_store(dir: &tempfile::TempDir) -> SqliteStore {
    SqliteStore::open(dir.path().join("app.db"), false)
        .await
        .unwrap()
}

/// Start an HTTP server over `store` on 127.0.0.1 with a random port.
pub async fn start_server(store: SqliteStore) -> RunningServer {
    let server = HttpServer::new(&AppConfig::default(), Arc::new(store)).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let signalled = shutdown.signalled();
    let handle = tokio::spawn(async move { server.run(listener, signalled).await });

    RunningServer {
        addr,
        shutdown,
        handle,
    }
}

pub fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
