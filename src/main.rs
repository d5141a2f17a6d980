use fintrack::config::Config;
use fintrack::server::build_app;
use fintrack::VERSION;
use tokio::net::TcpListener;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fintrack=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let address = config.address();
    tracing::info!(
        database = %config.database_path.display(),
        origins = ?config.allowed_origins,
        "Starting fintrack v{} on {}",
        VERSION,
        address
    );

    let (_state, app) = match build_app(config) {
        Ok(built) => built,
        Err(e) => {
            tracing::error!("Failed to initialise database: {}", e);
            std::process::exit(1);
        }
    };

    let listener = TcpListener::bind(&address)
        .await
        .expect("Failed to bind address");

    tracing::info!("Listening on http://{}", address);

    axum::serve(listener, app).await.expect("Server error");
}
