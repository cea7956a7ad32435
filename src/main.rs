//! employee-api server entry point
//!
//! Listens on the fixed default address (port 5000) with an empty store.
//! There are no flags or environment overrides other than `RUST_LOG`.

use employee_api::{observability, HttpServer};

#[tokio::main]
async fn main() {
    observability::init_logging();

    if let Err(e) = HttpServer::new().start().await {
        tracing::error!(error = %e, "server failed");
        std::process::exit(1);
    }
}
