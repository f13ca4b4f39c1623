//! Cuts one message off a byte stream.
//!
//! The message layer trusts its input to be exactly one message. This is the
//! transport-side counterpart used by the demo server: wait for the blank line,
//! read the declared `Content-Length`, then hand over that many bytes.

use anyhow::Context;
use bytes::{Bytes, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::http::parser;

/// Reads until `buf` holds one complete message and splits it off.
///
/// Returns `Ok(None)` when the peer closes before sending anything.
pub async fn read_message<R>(
    reader: &mut R,
    buf: &mut BytesMut,
    read_size: usize,
    max_size: usize,
) -> anyhow::Result<Option<Bytes>>
where
    R: AsyncRead + Unpin,
{
    loop {
        if let Some(len) = message_len(&buf[..])? {
            if len > max_size {
                anyhow::bail!("message of {len} bytes exceeds limit of {max_size}");
            }
            if buf.len() >= len {
                return Ok(Some(buf.split_to(len).freeze()));
            }
        } else if buf.len() > max_size {
            anyhow::bail!("header section exceeds limit of {max_size} bytes");
        }

        buf.reserve(read_size);
        let n = reader.read_buf(buf).await?;

        if n == 0 {
            if buf.is_empty() {
                return Ok(None);
            }
            anyhow::bail!("connection closed mid-message");
        }
    }
}

/// Reads until the peer closes the stream.
pub async fn read_to_close<R>(
    reader: &mut R,
    read_size: usize,
    max_size: usize,
) -> anyhow::Result<Bytes>
where
    R: AsyncRead + Unpin,
{
    let mut buf = BytesMut::with_capacity(read_size);

    loop {
        buf.reserve(read_size);
        if reader.read_buf(&mut buf).await? == 0 {
            return Ok(buf.freeze());
        }
        if buf.len() > max_size {
            anyhow::bail!("response exceeds limit of {max_size} bytes");
        }
    }
}

/// Length of the first message in `buf`, once its header section is complete.
fn message_len(buf: &[u8]) -> anyhow::Result<Option<usize>> {
    let Some(head_len) = find_head_end(buf) else {
        return Ok(None);
    };

    let head = parser::parse_message(&buf[..head_len])?;
    let body_len = head
        .headers
        .get("Content-Length")
        .map(|v| v.trim().parse::<usize>())
        .transpose()
        .context("invalid Content-Length")?
        .unwrap_or(0);

    let total = head_len
        .checked_add(body_len)
        .context("Content-Length overflows the message size")?;
    Ok(Some(total))
}

/// Offset just past the blank line closing the header section.
fn find_head_end(buf: &[u8]) -> Option<usize> {
    buf.iter().enumerate().find_map(|(i, &b)| {
        if b != b'\n' {
            return None;
        }
        match &buf[i + 1..] {
            [b'\n', ..] => Some(i + 2),
            [b'\r', b'\n', ..] => Some(i + 3),
            _ => None,
        }
    })
}
