//! Directory Client
//!
//! HTTP client for the remote user directory and for probing avatar images.

use crate::consts::cli_consts::timeouts::{connect_timeout, image_probe_timeout};
use crate::directory::error::{DirectoryError, ImageLoadError};
use crate::directory::{Directory, ImageHost};
use crate::environment::Environment;
use crate::profile::DirectoryUser;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, ClientBuilder, Response};
use std::time::Duration;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("employee-profile/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct DirectoryClient {
    client: Client,
    environment: Environment,
}

impl DirectoryClient {
    /// Builds a client whose requests give up after `request_timeout`.
    pub fn new(environment: Environment, request_timeout: Duration) -> Result<Self, DirectoryError> {
        let client = ClientBuilder::new()
            .connect_timeout(connect_timeout().min(request_timeout))
            .timeout(request_timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            environment,
        })
    }

    async fn handle_response_status(response: Response) -> Result<Response, DirectoryError> {
        if !response.status().is_success() {
            return Err(DirectoryError::from_response(response).await);
        }
        Ok(response)
    }

    fn decode_users(bytes: &[u8]) -> Result<Vec<DirectoryUser>, DirectoryError> {
        serde_json::from_slice(bytes).map_err(DirectoryError::Decode)
    }
}

#[async_trait::async_trait]
impl Directory for DirectoryClient {
    async fn fetch_users(&self) -> Result<Vec<DirectoryUser>, DirectoryError> {
        let url = self.environment.directory_url();
        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_users(&response_bytes)
    }
}

#[async_trait::async_trait]
impl ImageHost for DirectoryClient {
    async fn check_image(&self, url: &str) -> Result<(), ImageLoadError> {
        let response = self
            .client
            .get(url)
            .timeout(image_probe_timeout())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageLoadError::Status(status.as_u16()));
        }

        // Servers that omit the header get the benefit of the doubt.
        if let Some(content_type) = response.headers().get(CONTENT_TYPE) {
            let content_type = content_type.to_str().unwrap_or_default().to_ascii_lowercase();
            if !content_type.starts_with("image/") {
                return Err(ImageLoadError::NotAnImage(content_type));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method, path},
    };

    fn client_for(server: &MockServer) -> DirectoryClient {
        let environment = Environment::Custom {
            directory_url: format!("{}/users", server.uri()),
        };
        DirectoryClient::new(environment, Duration::from_secs(2)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_users_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .and(header("user-agent", USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "id": 1, "name": "Ada Lovelace", "email": "ada@x.com", "phone": "555-0001" },
                { "id": 2, "name": "Grace Hopper", "email": "grace@x.com", "phone": "555-0002" }
            ])))
            .mount(&server)
            .await;

        let users = client_for(&server).fetch_users().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name, "Ada Lovelace");
        assert_eq!(users[1].email, "grace@x.com");
    }

    #[tokio::test]
    async fn test_fetch_users_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_users().await.unwrap_err();
        match err {
            DirectoryError::Http { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("expected HTTP error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_users_invalid_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_users().await.unwrap_err();
        assert!(matches!(err, DirectoryError::Decode(_)));
        assert!(err.is_malformed_response());
    }

    #[tokio::test]
    // An object where an array is expected is as malformed as invalid JSON.
    async fn test_fetch_users_wrong_shape() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "users": [] })),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_users().await.unwrap_err();
        assert!(matches!(err, DirectoryError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_users_unreachable() {
        let environment = Environment::Custom {
            directory_url: "http://127.0.0.1:1/users".to_string(),
        };
        let client = DirectoryClient::new(environment, Duration::from_secs(2)).unwrap();

        let err = client.fetch_users().await.unwrap_err();
        assert!(matches!(err, DirectoryError::Transport(_)));
    }

    #[tokio::test]
    async fn test_check_image_accepts_images() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/avatar.svg"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw("<svg/>", "image/svg+xml"),
            )
            .mount(&server)
            .await;

        let url = format!("{}/avatar.svg", server.uri());
        assert!(client_for(&server).check_image(&url).await.is_ok());
    }

    #[tokio::test]
    async fn test_check_image_rejects_missing_and_non_images() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gone.svg"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw("<html></html>", "text/html"),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let missing = client
            .check_image(&format!("{}/gone.svg", server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(missing, ImageLoadError::Status(404)));

        let html = client
            .check_image(&format!("{}/page", server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(html, ImageLoadError::NotAnImage(_)));
    }
}
