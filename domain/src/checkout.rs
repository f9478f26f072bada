//! Checkout session orchestration for the pricing page.
//!
//! Resolves the plan a visitor picked to its configured Stripe price,
//! creates the hosted checkout session with the site's success/cancel
//! redirect URLs, and looks sessions back up when visitors return from
//! payment.

use crate::error::{DomainErrorKind, Error, ExternalErrorKind, InternalErrorKind};
use crate::gateway::stripe::{
    CheckoutMode, CheckoutSessionResponse, CreateCheckoutSessionRequest, StripeClient,
};
use log::*;
use service::config::Config;

/// Placeholder Stripe expands to the real session ID when redirecting
/// back to the success page.
const SESSION_ID_PLACEHOLDER: &str = "{CHECKOUT_SESSION_ID}";

/// Subscription plans sold on the pricing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan {
    Standard,
    Premium,
}

impl Plan {
    /// Parses the plan value submitted by the pricing page form.
    pub fn from_form_value(value: &str) -> Result<Self, Error> {
        match value.trim().to_lowercase().as_str() {
            "standard" => Ok(Plan::Standard),
            "premium" => Ok(Plan::Premium),
            other => Err(Error {
                source: None,
                error_kind: DomainErrorKind::Internal(InternalErrorKind::Invalid(format!(
                    "Unknown plan: {other}"
                ))),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Standard => "standard",
            Plan::Premium => "premium",
        }
    }

    /// Resolves the plan to its configured Stripe price ID.
    fn price_id(&self, config: &Config) -> Result<String, Error> {
        let price_id = match self {
            Plan::Standard => config.standard_plan_price_id(),
            Plan::Premium => config.premium_plan_price_id(),
        };
        price_id.ok_or_else(|| {
            error!("No price ID configured for the {} plan", self.as_str());
            Error {
                source: None,
                error_kind: DomainErrorKind::Internal(InternalErrorKind::Config),
            }
        })
    }
}

/// Creates a hosted checkout session for `plan` and returns the URL the
/// visitor should be redirected to.
///
/// `success_url` and `cancel_url` are the absolute URLs of the site's
/// success and cancel pages; the session ID placeholder is appended to
/// the success URL so the success page can look the session back up.
pub async fn create_session(
    config: &Config,
    plan: Plan,
    success_url: &str,
    cancel_url: &str,
    customer_email: Option<String>,
) -> Result<String, Error> {
    let client = StripeClient::new(config)?;

    let request = CreateCheckoutSessionRequest {
        price_id: plan.price_id(config)?,
        quantity: 1,
        mode: CheckoutMode::Subscription,
        success_url: format!("{success_url}?session_id={SESSION_ID_PLACEHOLDER}"),
        cancel_url: cancel_url.to_string(),
        customer_email,
    };

    info!("Starting checkout for the {} plan", plan.as_str());
    let session = client.create_checkout_session(request).await?;

    session.url.ok_or_else(|| {
        warn!("Checkout session {} carried no redirect URL", session.id);
        Error {
            source: None,
            error_kind: DomainErrorKind::External(ExternalErrorKind::Other(
                "Checkout session response carried no redirect URL".to_string(),
            )),
        }
    })
}

/// Retrieves the session a visitor returned from payment with, for
/// logging its outcome on the success page.
pub async fn retrieve_session(
    config: &Config,
    session_id: &str,
) -> Result<CheckoutSessionResponse, Error> {
    let client = StripeClient::new(config)?;
    client.retrieve_checkout_session(session_id).await
}
