use serde::Deserialize;

/// Form body posted by the pricing page when a visitor picks a plan.
#[derive(Debug, Deserialize)]
pub(crate) struct CreateSessionParams {
    pub(crate) plan: String,
    /// Pre-fills the checkout email field when the pricing form collected one.
    pub(crate) email: Option<String>,
}

/// Query string the payment provider appends when redirecting back to
/// the success page.
#[derive(Debug, Deserialize)]
pub(crate) struct SuccessParams {
    pub(crate) session_id: Option<String>,
}
