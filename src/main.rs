#[tokio::main]
async fn main() {
    if let Err(e) = pulseboard_lib::run().await {
        tracing::error!("Pulseboard failed: {e}");
        std::process::exit(1);
    }
}
