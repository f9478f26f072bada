use domain::pricing::{
    BidWorkload, DEFAULT_BIDS_PER_MONTH, DEFAULT_HOURLY_RATE, DEFAULT_HOURS_PER_BID,
};
use serde::Deserialize;

/// Optional workload figures from the calculator page's query string.
#[derive(Debug, Deserialize)]
pub(crate) struct EstimateParams {
    pub(crate) bids_per_month: Option<u32>,
    pub(crate) hours_per_bid: Option<f64>,
    pub(crate) hourly_rate: Option<f64>,
}

impl EstimateParams {
    /// Fills in the documented defaults for anything the visitor left blank.
    pub(crate) fn into_workload(self) -> BidWorkload {
        BidWorkload {
            bids_per_month: self.bids_per_month.unwrap_or(DEFAULT_BIDS_PER_MONTH),
            hours_per_bid: self.hours_per_bid.unwrap_or(DEFAULT_HOURS_PER_BID),
            hourly_rate: self.hourly_rate.unwrap_or(DEFAULT_HOURLY_RATE),
        }
    }
}
