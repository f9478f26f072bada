//! Stripe API client for hosted checkout sessions.
//!
//! This module provides an HTTP client for the two Checkout Session calls
//! the site makes: creating a session when a visitor picks a plan, and
//! retrieving one when they land back on the success page. Stripe's API is
//! form-encoded on the way in and JSON on the way out.

use crate::error::{DomainErrorKind, Error, ExternalErrorKind, InternalErrorKind};
use log::*;
use serde::Deserialize;
use service::config::Config;

/// Checkout mode the session is created in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutMode {
    /// One-off payment.
    Payment,
    /// Recurring subscription; the mode used for the site's plans.
    Subscription,
}

impl CheckoutMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutMode::Payment => "payment",
            CheckoutMode::Subscription => "subscription",
        }
    }
}

/// Request to create a hosted checkout session.
#[derive(Debug, Clone)]
pub struct CreateCheckoutSessionRequest {
    /// Stripe price ID of the plan being bought.
    pub price_id: String,
    pub quantity: u32,
    pub mode: CheckoutMode,
    /// Absolute URL Stripe redirects to after payment. May contain the
    /// literal `{CHECKOUT_SESSION_ID}` placeholder, which Stripe expands.
    pub success_url: String,
    /// Absolute URL Stripe redirects to when the visitor backs out.
    pub cancel_url: String,
    /// Pre-fills the checkout email field when the visitor already gave one.
    pub customer_email: Option<String>,
}

impl CreateCheckoutSessionRequest {
    /// Flattens the request into Stripe's bracketed form-parameter scheme.
    fn form_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("mode", self.mode.as_str().to_string()),
            ("line_items[0][price]", self.price_id.clone()),
            ("line_items[0][quantity]", self.quantity.to_string()),
            ("success_url", self.success_url.clone()),
            ("cancel_url", self.cancel_url.clone()),
        ];
        if let Some(email) = &self.customer_email {
            params.push(("customer_email", email.clone()));
        }
        params
    }
}

/// Checkout session as returned by Stripe. Only the fields the site reads.
#[derive(Debug, Deserialize)]
pub struct CheckoutSessionResponse {
    pub id: String,
    /// Hosted payment page URL. Present on freshly created sessions,
    /// null once the session has completed or expired.
    pub url: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub payment_status: Option<String>,
}

/// Stripe API client scoped to the checkout session endpoints.
pub struct StripeClient {
    client: reqwest::Client,
    base_url: String,
}

impl StripeClient {
    /// Create a new Stripe client with authentication
    pub fn new(config: &Config) -> Result<Self, Error> {
        let headers = build_auth_headers(config)?;

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.payment_api_base_url().to_string(),
        })
    }

    /// Create a hosted checkout session for a plan purchase.
    pub async fn create_checkout_session(
        &self,
        request: CreateCheckoutSessionRequest,
    ) -> Result<CheckoutSessionResponse, Error> {
        let url = format!("{}/checkout/sessions", self.base_url);

        debug!(
            "Creating checkout session for price {} in {} mode",
            request.price_id,
            request.mode.as_str()
        );

        let response = self
            .client
            .post(&url)
            .form(&request.form_params())
            .send()
            .await
            .map_err(|e| {
                warn!("Failed to reach Stripe to create checkout session: {e:?}");
                Error {
                    source: Some(Box::new(e)),
                    error_kind: DomainErrorKind::External(ExternalErrorKind::Network),
                }
            })?;

        if response.status().is_success() {
            let session: CheckoutSessionResponse = response.json().await.map_err(|e| {
                warn!("Failed to parse Stripe checkout session response: {e:?}");
                Error {
                    source: Some(Box::new(e)),
                    error_kind: DomainErrorKind::External(ExternalErrorKind::Other(
                        "Invalid response from Stripe".to_string(),
                    )),
                }
            })?;
            info!("Created checkout session {}", session.id);
            Ok(session)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            warn!("Stripe checkout session error: {error_text}");
            Err(Error {
                source: None,
                error_kind: DomainErrorKind::External(ExternalErrorKind::Other(error_text)),
            })
        }
    }

    /// Retrieve an existing checkout session by ID.
    pub async fn retrieve_checkout_session(
        &self,
        session_id: &str,
    ) -> Result<CheckoutSessionResponse, Error> {
        // The ID comes back from Stripe via a redirect query parameter, so
        // escape it before using it as a path segment.
        let url = format!(
            "{}/checkout/sessions/{}",
            self.base_url,
            urlencoding::encode(session_id)
        );

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("Failed to reach Stripe to retrieve checkout session: {e:?}");
            Error {
                source: Some(Box::new(e)),
                error_kind: DomainErrorKind::External(ExternalErrorKind::Network),
            }
        })?;

        if response.status().is_success() {
            let session: CheckoutSessionResponse = response.json().await.map_err(|e| {
                warn!("Failed to parse Stripe checkout session response: {e:?}");
                Error {
                    source: Some(Box::new(e)),
                    error_kind: DomainErrorKind::External(ExternalErrorKind::Other(
                        "Invalid response from Stripe".to_string(),
                    )),
                }
            })?;
            Ok(session)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            warn!("Stripe session retrieval error: {error_text}");
            Err(Error {
                source: None,
                error_kind: DomainErrorKind::External(ExternalErrorKind::Other(error_text)),
            })
        }
    }
}

/// Build authentication headers for the Stripe API
fn build_auth_headers(config: &Config) -> Result<reqwest::header::HeaderMap, Error> {
    let secret_key = config.payment_secret_key().ok_or_else(|| {
        warn!("Failed to get payment secret key from config");
        Error {
            source: None,
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Config),
        }
    })?;

    let mut headers = reqwest::header::HeaderMap::new();
    let auth_value = format!("Bearer {}", secret_key);
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

    Ok(headers)
}
