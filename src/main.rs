use anyhow::Context;
use httpsuite::config::Config;
use httpsuite::server::{client, listener};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;
    let mut args = std::env::args().skip(1);

    match args.next().as_deref() {
        None | Some("serve") => serve(&cfg).await,
        Some("fetch") => {
            let url = args
                .next()
                .context("usage: httpsuite fetch <url> [body]")?;
            let body = args.next().map(String::into_bytes);

            let (request, response) = client::fetch(&url, body, &cfg).await?;
            println!("{request}\n\n{response}");
            Ok(())
        }
        Some(other) => anyhow::bail!("unknown command {other:?}, expected serve or fetch"),
    }
}

async fn serve(cfg: &Config) -> anyhow::Result<()> {
    tokio::select! {
        res = listener::run(cfg) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
