use serde::Deserialize;

/// UTM attribution parameters campaigns append to links to the site root.
#[derive(Debug, Deserialize)]
pub(crate) struct AttributionParams {
    pub(crate) utm_source: Option<String>,
    pub(crate) utm_medium: Option<String>,
    pub(crate) utm_campaign: Option<String>,
}

impl AttributionParams {
    /// Joins whichever UTM values are present into one log-friendly tag.
    pub(crate) fn campaign_tag(&self) -> Option<String> {
        let present: Vec<&str> = [&self.utm_source, &self.utm_medium, &self.utm_campaign]
            .into_iter()
            .filter_map(|value| value.as_deref())
            .collect();
        if present.is_empty() {
            None
        } else {
            Some(present.join("/"))
        }
    }
}
