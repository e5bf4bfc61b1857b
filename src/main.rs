use clap::Parser;
use trivia_api::db::Db;
use trivia_api::{names, AppState};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// SQLite database URL.
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite:trivia.db")]
    database_url: String,

    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:8000")]
    address: String,

    /// Number of questions returned per listing page.
    #[arg(long, env, default_value_t = names::DEFAULT_QUESTIONS_PER_PAGE)]
    questions_per_page: usize,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,axum=info,trivia_api=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let db = Db::new(&args.database_url).await?;
    let app = trivia_api::router(AppState {
        db,
        questions_per_page: args.questions_per_page,
    });

    let address = args.address.parse::<std::net::SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("listening on {address}");
    axum::serve(listener, app).await?;

    Ok(())
}
