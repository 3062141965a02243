use studylog::commands::Cli;
use studylog::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv::dotenv();
    init_tracing();

    Cli::menu().await
}

fn init_tracing() {
    if !is_debug_mode() {
        return;
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("studylog=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}
