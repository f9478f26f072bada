use crate::error::{DomainErrorKind, Error, ExternalErrorKind, InternalErrorKind};
use email_address::EmailAddress;
use log::*;
use serde::{Deserialize, Serialize};
use service::config::Config;

/// MailerSend API client for sending transactional emails
pub struct MailerSendClient {
    client: reqwest::Client,
    base_url: String,
}

/// A sender or recipient with an optional display name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailAddressee {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl EmailAddressee {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    pub fn with_name(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: Some(name.into()),
        }
    }
}

/// Request payload for sending an email via MailerSend
#[derive(Debug, Serialize)]
pub struct SendEmailRequest {
    pub from: EmailAddressee,
    pub to: Vec<EmailAddressee>,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

/// Response from MailerSend API
#[derive(Debug, Deserialize)]
pub struct SendEmailResponse {
    pub message_id: Option<String>,
}

impl MailerSendClient {
    /// Create a new MailerSend client with authentication
    pub fn new(config: &Config) -> Result<Self, Error> {
        let headers = build_auth_headers(config)?;

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.mailer_base_url().to_string(),
        })
    }

    /// Send an email using MailerSend API
    pub async fn send_email(&self, request: SendEmailRequest) -> Result<SendEmailResponse, Error> {
        // Validate email addresses before sending
        if !is_valid_email(&request.from.email) {
            warn!("Invalid sender email: {}", request.from.email);
            return Err(Error {
                source: None,
                error_kind: DomainErrorKind::Internal(InternalErrorKind::Other(
                    "Invalid sender email address".to_string(),
                )),
            });
        }

        for recipient in &request.to {
            if !is_valid_email(&recipient.email) {
                warn!("Invalid recipient email: {}", recipient.email);
                return Err(Error {
                    source: None,
                    error_kind: DomainErrorKind::Internal(InternalErrorKind::Other(format!(
                        "Invalid recipient email address: {}",
                        recipient.email
                    ))),
                });
            }
        }

        let url = format!("{}/email", self.base_url);

        info!("Sending email to {} recipients", request.to.len());
        debug!("Email subject: {}", request.subject);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!("Failed to send email request: {e:?}");
                Error {
                    source: Some(Box::new(e)),
                    error_kind: DomainErrorKind::External(ExternalErrorKind::Network),
                }
            })?;

        let status = response.status();
        if status.is_success() {
            let message_id = response
                .headers()
                .get("x-message-id")
                .and_then(|v| v.to_str().ok())
                .map(|s| s.to_string());

            info!("Email sent successfully, message_id: {:?}", message_id);

            Ok(SendEmailResponse { message_id })
        } else {
            let error_text = response.text().await.unwrap_or_default();
            warn!("Failed to send email: {} - {}", status, error_text);
            Err(Error {
                source: None,
                error_kind: DomainErrorKind::External(ExternalErrorKind::Network),
            })
        }
    }
}

/// Build HTTP client headers with MailerSend authentication
fn build_auth_headers(config: &Config) -> Result<reqwest::header::HeaderMap, Error> {
    let api_key = config.mailer_api_key().ok_or_else(|| {
        warn!("Failed to get MailerSend API key from config");
        Error {
            source: None,
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Config),
        }
    })?;

    let mut headers = reqwest::header::HeaderMap::new();
    let auth_value = format!("Bearer {}", api_key);
    let mut auth_header = reqwest::header::HeaderValue::from_str(&auth_value).map_err(|err| {
        warn!("Failed to create authorization header value: {err:?}");
        Error {
            source: Some(Box::new(err)),
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Other(
                "Failed to create authorization header value".to_string(),
            )),
        }
    })?;
    auth_header.set_sensitive(true);
    headers.insert(reqwest::header::AUTHORIZATION, auth_header);

    headers.insert(
        reqwest::header::CONTENT_TYPE,
        reqwest::header::HeaderValue::from_static("application/json"),
    );

    Ok(headers)
}

/// Validate email address format using email_address crate
pub fn is_valid_email(email: &str) -> bool {
    EmailAddress::is_valid(email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use mockito::Server;

    fn test_config(base_url: &str) -> Config {
        Config::parse_from([
            "mytenderweb",
            "--mailer-base-url",
            base_url,
            "--mailer-api-key",
            "test_api_key_123",
        ])
    }

    fn guide_request() -> SendEmailRequest {
        SendEmailRequest {
            from: EmailAddressee::with_name("hello@mytender.io", "mytender.io"),
            to: vec![EmailAddressee::new("prospect@example.com")],
            subject: "Your bid-writing guide".to_string(),
            text: Some("Here is the guide you asked for.".to_string()),
            html: None,
        }
    }

    #[test]
    fn test_mailersend_client_creation_fails_without_api_key() {
        let config = Config::parse_from(["mytenderweb"]);
        let result = MailerSendClient::new(&config);
        assert!(result.is_err());
    }

    #[test]
    fn test_send_email_request_serialization() {
        let json = serde_json::to_string(&guide_request()).unwrap();
        assert!(json.contains("prospect@example.com"));
        assert!(json.contains("Your bid-writing guide"));
        // Absent optional fields are omitted, not serialized as null
        assert!(!json.contains("html"));
    }

    #[test]
    fn test_email_validation() {
        let invalid_emails = vec!["", "invalid-email", "@example.com", "prospect@"];
        for email in invalid_emails {
            assert!(!is_valid_email(email), "Email '{}' should be invalid", email);
        }

        assert!(is_valid_email("prospect@example.com"));
        assert!(is_valid_email("bid.manager@council.gov.uk"));
    }

    #[tokio::test]
    async fn test_send_email_posts_payload_and_reads_message_id() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/email")
            .match_header("authorization", "Bearer test_api_key_123")
            .with_status(202)
            .with_header("x-message-id", "msg_1")
            .create_async()
            .await;

        let client = MailerSendClient::new(&test_config(&server.url())).unwrap();
        let response = client.send_email(guide_request()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.message_id.as_deref(), Some("msg_1"));
    }

    #[tokio::test]
    async fn test_send_email_rejects_invalid_recipient_before_any_call() {
        let mut server = Server::new_async().await;
        let mock = server.mock("POST", "/email").expect(0).create_async().await;

        let client = MailerSendClient::new(&test_config(&server.url())).unwrap();
        let mut request = guide_request();
        request.to = vec![EmailAddressee::new("not-an-address")];

        let err = client.send_email(request).await.unwrap_err();
        match err.error_kind {
            DomainErrorKind::Internal(InternalErrorKind::Other(text)) => {
                assert!(text.contains("Invalid recipient"));
            }
            other => panic!("unexpected error kind: {other:?}"),
        }
        mock.assert_async().await;
    }
}
