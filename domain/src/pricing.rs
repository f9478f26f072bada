//! Savings arithmetic behind the bid-writing calculator page.

/// Fraction of manual bid-writing time the platform removes. This figure is
/// the one quoted across the marketing pages; keep them in sync.
const TIME_SAVED_FRACTION: f64 = 0.6;

pub const DEFAULT_BIDS_PER_MONTH: u32 = 4;
pub const DEFAULT_HOURS_PER_BID: f64 = 30.0;
pub const DEFAULT_HOURLY_RATE: f64 = 45.0;

/// A prospect's current monthly bid-writing workload, as entered on the
/// calculator page.
#[derive(Debug, Clone, PartialEq)]
pub struct BidWorkload {
    pub bids_per_month: u32,
    pub hours_per_bid: f64,
    pub hourly_rate: f64,
}

impl Default for BidWorkload {
    fn default() -> Self {
        Self {
            bids_per_month: DEFAULT_BIDS_PER_MONTH,
            hours_per_bid: DEFAULT_HOURS_PER_BID,
            hourly_rate: DEFAULT_HOURLY_RATE,
        }
    }
}

/// Monthly savings figures displayed on the calculator page.
#[derive(Debug, Clone, PartialEq)]
pub struct SavingsEstimate {
    pub hours_spent: f64,
    pub hours_saved: f64,
    pub cost_saved: f64,
}

/// Computes the monthly savings estimate for a workload.
///
/// Degenerate figures (negative or NaN hours/rates pasted into the form)
/// are clamped to zero rather than rejected; the calculator is a sales
/// aid, not a validator.
pub fn estimate(workload: &BidWorkload) -> SavingsEstimate {
    let hours_per_bid = sanitize(workload.hours_per_bid);
    let hourly_rate = sanitize(workload.hourly_rate);

    let hours_spent = f64::from(workload.bids_per_month) * hours_per_bid;
    let hours_saved = hours_spent * TIME_SAVED_FRACTION;
    let cost_saved = hours_saved * hourly_rate;

    SavingsEstimate {
        hours_spent,
        hours_saved,
        cost_saved,
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
