use autos_api_rust::{build_app, repository::AutomobileRepository, service::AutosService};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// Serves the full router on an ephemeral port until the test process exits.
pub async fn create_test_server(repository: Arc<dyn AutomobileRepository>) -> SocketAddr {
    let app = build_app(AutosService::new(repository));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let mut retries = 0;
    while retries < 10 {
        if tokio::net::TcpStream::connect(addr).await.is_ok() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
        retries += 1;
    }

    addr
}

pub fn autos_url(addr: SocketAddr, path: &str) -> String {
    format!("http://{}/api/autos{}", addr, path)
}
