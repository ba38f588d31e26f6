use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use emporium_types::entity::Entity;

/// A time-boxed discount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub id: Uuid,
    pub name: String,
    pub discount_percent: i16,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl Deal {
    pub fn new(
        name: String,
        discount_percent: i16,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            discount_percent,
            start_date: start_date.trunc_subsecs(6),
            end_date: end_date.trunc_subsecs(6),
        }
    }

    /// The window is half-open: a deal ending at `at` is no longer active.
    pub fn is_active_at(&self, at: DateTime<Utc>) -> bool {
        self.start_date <= at && at < self.end_date
    }
}

impl Entity for Deal {
    const TABLE: &'static str = "deals";

    fn id(&self) -> Uuid {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_deal_window_is_half_open() {
        let start = Utc::now();
        let deal = Deal::new("Spring".to_string(), 10, start, start + Duration::days(1));

        assert!(deal.is_active_at(start));
        assert!(deal.is_active_at(start + Duration::hours(23)));
        assert!(!deal.is_active_at(start + Duration::days(1)));
        assert!(!deal.is_active_at(start - Duration::seconds(1)));
    }

    #[test]
    fn test_dates_keep_microsecond_precision() {
        let start = DateTime::from_timestamp(1_700_000_000, 123_456_789).unwrap();
        let deal = Deal::new("Spring".to_string(), 10, start, start + Duration::days(1));

        assert_eq!(deal.start_date.timestamp_subsec_nanos(), 123_456_000);
        assert_eq!(deal.end_date.timestamp_subsec_nanos(), 123_456_000);
    }
}
