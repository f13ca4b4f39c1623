use bytes::BytesMut;
use tokio::io::AsyncWriteExt;
use tokio::net::{TcpListener, TcpStream};
use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::http::message::Message;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::rfc;
use crate::server::framing;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!("Listening on {}", cfg.listen_addr);

    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let cfg = cfg.clone();
        tokio::spawn(async move {
            if let Err(e) = handle_connection(socket, &cfg).await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}

/// Serves a single request, then closes the connection.
async fn handle_connection(mut stream: TcpStream, cfg: &Config) -> anyhow::Result<()> {
    let mut buf = BytesMut::with_capacity(cfg.read_buffer_size);

    let response = match framing::read_message(
        &mut stream,
        &mut buf,
        cfg.read_buffer_size,
        cfg.max_message_size,
    )
    .await
    {
        Ok(Some(raw)) => respond(&raw, &cfg.server_name)?,
        Ok(None) => return Ok(()),
        Err(e) => {
            tracing::warn!(error = %e, "could not frame request");
            finish(Response::new(400)?, &cfg.server_name)?
        }
    };

    stream.write_all(&response.raw()).await?;
    stream.shutdown().await?;
    Ok(())
}

/// Turns one raw request into the response the microservice sends back.
pub fn respond(raw: &[u8], server_name: &str) -> Result<Response> {
    let response = match Request::parse(raw) {
        Ok(request) => {
            let extra = request.headers.names_outside(&rfc::REQUEST_HEADERS);
            if !extra.is_empty() {
                tracing::debug!(?extra, "non-standard request headers");
            }

            let response = route(&request)?;
            info!(
                method = request.method(),
                target = request.target(),
                status = response.status(),
                "Handled request"
            );
            response
        }
        Err(e) => {
            tracing::warn!(error = %e, "rejected request");
            Response::new(400)?
        }
    };

    finish(response, server_name)
}

/// Routes a parsed request: `/` and `/data` exist, everything else is 404.
pub fn route(request: &Request) -> Result<Response> {
    if !rfc::is_known_protocol(request.protocol()) {
        return Response::new(505);
    }
    if !rfc::is_known_method(request.method()) {
        return Response::new(501);
    }

    let response = match request.target() {
        "/" => Response::new(200)?.with_body("Homepage of the microservice."),
        "/data" => Response::new(200)?
            .with_body("You are accessing the /data directory of this microservice."),
        _ => Response::new(404)?.with_body("404 Not Found"),
    };

    Ok(response)
}

fn finish(mut response: Response, server_name: &str) -> Result<Response> {
    let len = response.body.len();
    response.headers.set("Server", server_name)?;
    response.headers.set("Content-Length", len.to_string())?;
    response.headers.set("Connection", "close")?;
    Ok(response)
}
