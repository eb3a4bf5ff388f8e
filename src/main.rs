#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();
}

fn main() {
    // Dioxus installs its own logger on the web
    #[cfg(not(target_arch = "wasm32"))]
    init_tracing();
    dioxus::launch(bubblechat::ui::App);
}
