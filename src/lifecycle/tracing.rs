/// Initializes structured logging for the application.
///
/// Verbosity is controlled through `RUST_LOG`:
/// - `RUST_LOG=info` – lifecycle events and mutations
/// - `RUST_LOG=debug` – full request payloads and per-item stock movements
/// - `RUST_LOG=storefront=debug` – debug for this crate only
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
