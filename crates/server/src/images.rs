//! Best-effort inline image retrieval.
//!
//! Discovery tools attach up to three product images alongside the
//! structured summary list. An image is an enhancement, never a
//! requirement: any failure here (missing URL, slow host, non-2xx,
//! non-image content type, oversized body) yields `None` and the
//! structured result ships without it.

use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use tracing::debug;

use crate::mcp::types::ToolContent;

/// Upper bound on an inline image payload (1 MiB). Larger bodies are
/// rejected so a hostile or misconfigured image host cannot balloon the
/// response.
pub const MAX_IMAGE_BYTES: usize = 1_048_576;

/// Fixed per-image retrieval timeout.
pub const IMAGE_FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// How many product images a discovery tool attaches at most.
pub const MAX_IMAGES_PER_CALL: usize = 3;

/// Download an image and encode it as inline MCP content.
///
/// Returns `None` on every failure path; callers treat absence as
/// "no image for this product" and carry on.
pub async fn fetch_image(http: &reqwest::Client, image_url: Option<&str>) -> Option<ToolContent> {
    let url = image_url.filter(|u| !u.is_empty())?;

    let response = match http
        .get(url)
        .timeout(IMAGE_FETCH_TIMEOUT)
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            debug!(url, error = %e, "image fetch failed");
            return None;
        }
    };

    if !response.status().is_success() {
        debug!(url, status = %response.status(), "image fetch returned non-2xx");
        return None;
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);

    if let Some(declared) = response.content_length()
        && declared > MAX_IMAGE_BYTES as u64
    {
        debug!(url, declared, "image exceeds size limit, skipping");
        return None;
    }

    let bytes = read_bounded_body(response, url).await?;
    content_from_parts(content_type.as_deref(), &bytes)
}

/// Stream the body, aborting as soon as it exceeds [`MAX_IMAGE_BYTES`].
///
/// The declared length is advisory; a host that lies (or omits it) is
/// cut off here instead of being buffered to completion.
async fn read_bounded_body(mut response: reqwest::Response, url: &str) -> Option<Vec<u8>> {
    let mut bytes = Vec::new();
    loop {
        match response.chunk().await {
            Ok(Some(chunk)) => {
                if bytes.len() + chunk.len() > MAX_IMAGE_BYTES {
                    debug!(url, "image body exceeded size limit mid-read, aborting");
                    return None;
                }
                bytes.extend_from_slice(&chunk);
            }
            Ok(None) => return Some(bytes),
            Err(e) => {
                debug!(url, error = %e, "image body read failed");
                return None;
            }
        }
    }
}

/// Validate declared content type and size, then encode.
///
/// The declared type must be `image/*` (parameters such as `; charset=`
/// are stripped); a missing or non-image declaration yields `None` rather
/// than a guessed MIME type.
#[must_use]
pub fn content_from_parts(content_type: Option<&str>, bytes: &[u8]) -> Option<ToolContent> {
    if bytes.len() > MAX_IMAGE_BYTES {
        return None;
    }
    let mime = content_type?.split(';').next()?.trim();
    if !mime.starts_with("image/") {
        return None;
    }
    Some(ToolContent::Image {
        data: BASE64.encode(bytes),
        mime_type: mime.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[test]
    fn test_accepts_plain_image_type() {
        let content = content_from_parts(Some("image/png"), b"fakepng").expect("content");
        match content {
            ToolContent::Image { data, mime_type } => {
                assert_eq!(mime_type, "image/png");
                assert_eq!(data, BASE64.encode(b"fakepng"));
            }
            ToolContent::Text { .. } => panic!("expected image content"),
        }
    }

    #[test]
    fn test_strips_mime_parameters() {
        let content =
            content_from_parts(Some("image/jpeg; charset=utf-8"), b"jpg").expect("content");
        match content {
            ToolContent::Image { mime_type, .. } => assert_eq!(mime_type, "image/jpeg"),
            ToolContent::Text { .. } => panic!("expected image content"),
        }
    }

    #[test]
    fn test_rejects_non_image_content_type() {
        assert!(content_from_parts(Some("text/html"), b"<html>").is_none());
        assert!(content_from_parts(Some("application/json"), b"{}").is_none());
    }

    #[test]
    fn test_rejects_missing_content_type() {
        assert!(content_from_parts(None, b"bytes").is_none());
    }

    #[test]
    fn test_rejects_oversized_body() {
        let body = vec![0u8; MAX_IMAGE_BYTES + 1];
        assert!(content_from_parts(Some("image/png"), &body).is_none());
    }

    #[test]
    fn test_accepts_body_at_limit() {
        let body = vec![0u8; MAX_IMAGE_BYTES];
        assert!(content_from_parts(Some("image/png"), &body).is_some());
    }

    #[tokio::test]
    async fn test_fetch_returns_small_image() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/ok.png")
            .with_header("content-type", "image/png")
            .with_body(b"pngbytes")
            .create_async()
            .await;

        let http = reqwest::Client::new();
        let url = format!("{}/ok.png", server.url());
        let content = fetch_image(&http, Some(&url)).await.expect("image");
        match content {
            ToolContent::Image { mime_type, .. } => assert_eq!(mime_type, "image/png"),
            ToolContent::Text { .. } => panic!("expected image content"),
        }
    }

    #[tokio::test]
    async fn test_fetch_rejects_declared_oversize_before_reading() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/big.png")
            .with_header("content-type", "image/png")
            .with_body(vec![0u8; MAX_IMAGE_BYTES + 1])
            .create_async()
            .await;

        let http = reqwest::Client::new();
        let url = format!("{}/big.png", server.url());
        assert!(fetch_image(&http, Some(&url)).await.is_none());
    }

    #[tokio::test]
    async fn test_fetch_aborts_oversize_chunked_body() {
        // No Content-Length to pre-check; the streaming read must cut the
        // body off once it passes the limit.
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/chunked.png")
            .with_header("content-type", "image/png")
            .with_chunked_body(|w| w.write_all(&vec![0u8; MAX_IMAGE_BYTES + 1]))
            .create_async()
            .await;

        let http = reqwest::Client::new();
        let url = format!("{}/chunked.png", server.url());
        assert!(fetch_image(&http, Some(&url)).await.is_none());
    }
}
