use domain::signup::TrialSignup;
use serde::Deserialize;

/// Form body posted by the guide request page.
#[derive(Debug, Deserialize)]
pub(crate) struct GuideRequestParams {
    pub(crate) email: String,
    pub(crate) name: Option<String>,
}

/// Form body posted by the campaign landing pages.
#[derive(Debug, Deserialize)]
pub(crate) struct TrialSignupParams {
    pub(crate) email: String,
    pub(crate) name: Option<String>,
    pub(crate) company: Option<String>,
}

impl TrialSignupParams {
    pub(crate) fn into_signup(self) -> TrialSignup {
        TrialSignup {
            email: self.email,
            name: self.name,
            company: self.company,
        }
    }
}
