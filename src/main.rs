use mimir::server::{self, config::Config, model::app::AppState, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    startup::init_tracing();

    let listener = startup::bind_listener(&config).await.unwrap();
    tracing::info!("Listening on {}:{}", config.host, config.port);

    let router = server::router::routes().with_state(AppState { config });

    axum::serve(listener, router).await.unwrap();
}
