//! Test server startup.

use std::net::SocketAddr;
use std::sync::Arc;

use airweather::loader::{default_airports, seed};
use airweather::{build_router, WeatherService};

/// Start a server seeded with the built-in airports on an ephemeral port.
///
/// Each call gets its own service, so tests do not share state.
pub async fn start_test_server() -> (SocketAddr, Arc<WeatherService>) {
    let service = WeatherService::new_shared();
    seed(&service, &default_airports(), "test");

    let app = build_router(service.clone());
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0))
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server error");
    });

    (addr, service)
}
