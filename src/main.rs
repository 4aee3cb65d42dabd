use tracing::{error, info};
use user_admin::api::HttpUserApi;
use user_admin::config::Config;
use user_admin::ui::{initialize_app_context, make_config, App, AppContext, SharedUserApi};

fn main() {
    // Use RUST_LOG env var if set, otherwise default to info level for this crate
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "user_admin=info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let api = match HttpUserApi::new(&config.api_url, config.request_timeout) {
        Ok(api) => api,
        Err(e) => {
            error!("Failed to create users client: {}", e);
            std::process::exit(1);
        }
    };

    let context = AppContext {
        api: SharedUserApi::new(api),
        config,
    };
    if let Err(e) = initialize_app_context(context) {
        error!("{}", e);
        std::process::exit(1);
    }

    info!("Starting user admin");
    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_config())
        .launch(App);
}
