//! Minimal fetch client: one request over a fresh connection, read until the
//! server closes it.

use anyhow::Context;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use url::Url;

use crate::config::Config;
use crate::http::message::Message;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::server::framing;

/// Sends a `GET` (or a `POST` when `body` is given) to `target` and parses the
/// reply.
pub async fn fetch(
    target: &str,
    body: Option<Vec<u8>>,
    cfg: &Config,
) -> anyhow::Result<(Request, Response)> {
    let url = Url::parse(target).context("Invalid URL")?;
    if url.scheme() != "http" {
        anyhow::bail!("unsupported scheme {}, only http is spoken", url.scheme());
    }

    let request = build_request(&url, body)?;
    let host = url.host_str().context("URL missing host")?;
    let port = url.port_or_known_default().unwrap_or(80);

    let mut stream = TcpStream::connect((host, port))
        .await
        .with_context(|| format!("Failed to connect to {host}:{port}"))?;
    tracing::debug!(host, port, "Connected");

    stream.write_all(&request.raw()).await?;

    let raw = framing::read_to_close(&mut stream, cfg.read_buffer_size, cfg.max_message_size).await?;
    let response = Response::parse(&raw).context("Invalid response from server")?;

    tracing::info!(status = response.status(), bytes = raw.len(), "Received response");
    Ok((request, response))
}

/// Builds the request sent for `url`.
///
/// `Host` carries the port only when the URL spells one out.
pub fn build_request(url: &Url, body: Option<Vec<u8>>) -> anyhow::Result<Request> {
    let host = url.host_str().context("URL missing host")?;
    let host = match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    };

    let target = match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    };

    let mut request = Request::new("GET", target)?
        .with_header("Host", host)?
        .with_header("Connection", "close")?
        .with_header("Accept", "*/*")?;

    if let Some(body) = body {
        request.set_method("POST")?;
        request.headers.set("Content-Length", body.len().to_string())?;
        request.body = body;
    }

    Ok(request)
}
