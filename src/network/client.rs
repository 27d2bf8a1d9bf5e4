//! HTTP client wrapper - fetches and decodes the post list

use crate::constants::APP_NAME;
use crate::error::FetchError;
use crate::models::Post;

/// Decode a response body as a list of posts
pub fn decode_posts(body: &[u8]) -> Result<Vec<Post>, FetchError> {
    Ok(serde_json::from_slice(body)?)
}

/// GET the post list. The status code is not inspected, only the body.
pub async fn fetch_posts(client: &reqwest::Client, url: &str) -> Result<Vec<Post>, FetchError> {
    let resp = client.get(url).send().await?;
    let status = resp.status().as_u16();
    let body = resp.bytes().await?;
    tracing::debug!(url, status, bytes = body.len(), "Posts response received");
    decode_posts(&body)
}

/// Create an HTTP client with default configuration
pub fn create_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(concat!("postboard/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, app = APP_NAME, "Falling back to default HTTP client");
            reqwest::Client::new()
        })
}


#[cfg(test)]
mod tests {
    use super::test_server::{closed_port_url, serve_once};
    use super::*;

    #[test]
    fn test_decode_single_post() {
        let posts = decode_posts(br#"[{"userId":1,"id":1,"title":"a","body":"b"}]"#).unwrap();
        assert_eq!(posts, vec![Post::new(1, 1, "a", "b")]);
    }

    #[test]
    fn test_decode_negative_ids() {
        let posts = decode_posts(br#"[{"userId":-1,"id":-5,"title":"a","body":"b"}]"#).unwrap();
        assert_eq!(posts, vec![Post::new(-1, -5, "a", "b")]);
    }

    #[test]
    fn test_decode_rejects_non_json() {
        let err = decode_posts(b"<html>oops</html>").unwrap_err();
        assert!(!err.is_transport());
    }

    #[test]
    fn test_decode_rejects_single_object() {
        let err = decode_posts(br#"{"userId":1,"id":1,"title":"a","body":"b"}"#).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_posts_from_server() {
        let body = concat!(
            r#"[{"userId":1,"id":1,"title":"a","body":"b"},"#,
            r#"{"userId":2,"id":7,"title":"c","body":"d"}]"#,
        );
        let url = serve_once("200 OK", body).await;
        let posts = fetch_posts(&create_client(), &url).await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[1], Post::new(2, 7, "c", "d"));
    }

    #[tokio::test]
    async fn test_fetch_malformed_body_is_decode_error() {
        let url = serve_once("200 OK", "not json").await;
        let err = fetch_posts(&create_client(), &url).await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_error_status_with_bad_body_is_decode_error() {
        let url = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#).await;
        let err = fetch_posts(&create_client(), &url).await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_refused_is_transport_error() {
        let url = closed_port_url().await;
        let err = fetch_posts(&create_client(), &url).await.unwrap_err();
        assert!(err.is_transport());
    }
}
