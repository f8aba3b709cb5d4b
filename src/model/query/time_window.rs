use crate::common::*;

use crate::utils_modules::time_utils::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct TimeWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> anyhow::Result<Self> {
        if start >= end {
            return Err(anyhow!(
                "[TimeWindow->new] window start must precede end: {} >= {}",
                start,
                end
            ));
        }

        Ok(TimeWindow { start, end })
    }

    #[doc = "[now - days, now] 구간"]
    pub fn last_days(now: DateTime<Utc>, days: i64) -> anyhow::Result<Self> {
        Self::new(minus_days(now, days), now)
    }
}
