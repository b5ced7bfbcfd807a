//! Stockroom server binary.

#[tokio::main]
async fn main() {
    if let Err(e) = stockroom_server::run().await {
        tracing::error!(error = %e, "Stockroom server failed");
        std::process::exit(1);
    }
}
