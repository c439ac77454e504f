use anyhow::Context;
use leave_chat::{
    config::ClientConfig,
    services::{console, session::ChatSession, transport::HttpTransport},
};
use tokio::io::BufReader;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ClientConfig::from_env();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let transport = HttpTransport::new(&config.proxy_url);
    debug!(endpoint = %transport.endpoint(), "chat client starting");

    let mut session = ChatSession::new();
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();

    console::run(&mut session, &transport, stdin, &mut stdout)
        .await
        .context("chat console failed")
}
