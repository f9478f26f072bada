//! Trial-signup and guide-request capture.
//!
//! The marketing site has no database; a captured lead becomes an email.
//! Trial signups from the campaign landing pages notify the sales inbox,
//! and guide requests send the bid-writing guide straight to the
//! prospect.

use crate::error::{DomainErrorKind, Error, InternalErrorKind};
use crate::gateway::mailersend::{
    is_valid_email, EmailAddressee, MailerSendClient, SendEmailRequest,
};
use log::*;
use service::config::Config;

/// The campaign landing page a trial signup arrived through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Campaign {
    BidStats,
    OxygenFinance,
}

impl Campaign {
    /// Tag used in sales notifications to attribute the lead.
    pub fn label(&self) -> &'static str {
        match self {
            Campaign::BidStats => "bidstats",
            Campaign::OxygenFinance => "oxygen-finance",
        }
    }
}

/// A trial-signup form submission from a campaign landing page.
#[derive(Debug, Clone)]
pub struct TrialSignup {
    pub email: String,
    pub name: Option<String>,
    pub company: Option<String>,
}

/// Records a trial signup by notifying the sales inbox, tagged with the
/// campaign it came through.
pub async fn record_trial_signup(
    config: &Config,
    campaign: Campaign,
    signup: &TrialSignup,
) -> Result<(), Error> {
    validate_address(&signup.email)?;

    info!(
        "Recording trial signup from the {} landing page",
        campaign.label()
    );

    let mut lines = vec![format!("Email: {}", signup.email)];
    if let Some(name) = &signup.name {
        lines.push(format!("Name: {name}"));
    }
    if let Some(company) = &signup.company {
        lines.push(format!("Company: {company}"));
    }
    lines.push(format!("Campaign: {}", campaign.label()));

    let client = MailerSendClient::new(config)?;
    client
        .send_email(SendEmailRequest {
            from: EmailAddressee::with_name(config.mailer_from_email(), "mytender.io"),
            to: vec![EmailAddressee::new(config.sales_notification_email())],
            subject: format!("New trial signup ({})", campaign.label()),
            text: Some(lines.join("\n")),
            html: None,
        })
        .await?;

    Ok(())
}

/// Sends the bid-writing guide to a prospect who requested it.
pub async fn send_guide(config: &Config, email: &str, name: Option<&str>) -> Result<(), Error> {
    validate_address(email)?;

    info!("Sending the bid-writing guide to a prospect");

    let recipient = match name {
        Some(name) => EmailAddressee::with_name(email, name),
        None => EmailAddressee::new(email),
    };
    let greeting = name.map_or_else(|| "Hello".to_string(), |name| format!("Hello {name}"));

    let client = MailerSendClient::new(config)?;
    client
        .send_email(SendEmailRequest {
            from: EmailAddressee::with_name(config.mailer_from_email(), "mytender.io"),
            to: vec![recipient],
            subject: "Your mytender.io bid-writing guide".to_string(),
            text: Some(format!(
                "{greeting},\n\nThanks for your interest. You can download the guide here:\n{}\n",
                config.guide_document_url()
            )),
            html: None,
        })
        .await?;

    Ok(())
}

fn validate_address(email: &str) -> Result<(), Error> {
    if is_valid_email(email) {
        Ok(())
    } else {
        warn!("Rejected form submission with an invalid email address");
        Err(Error {
            source: None,
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Invalid(format!(
                "Invalid email address: {email}"
            ))),
        })
    }
}
