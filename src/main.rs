use dioxus::desktop::{Config, WindowBuilder};
use modeldeck::app::{App, CUSTOM_HEAD};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("modeldeck=info")),
        )
        .init();

    tracing::info!("Starting ModelDeck");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(WindowBuilder::new().with_title("ModelDeck"))
                .with_custom_head(CUSTOM_HEAD.to_string()),
        )
        .launch(App);
}
