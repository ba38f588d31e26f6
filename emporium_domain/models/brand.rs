use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use emporium_types::entity::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: Uuid,
    pub brand_name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Brand {
    pub fn new(brand_name: String, description: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            brand_name,
            description,
            created_at: Utc::now().trunc_subsecs(6),
        }
    }
}

impl Entity for Brand {
    const TABLE: &'static str = "brands";

    fn id(&self) -> Uuid {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_at_has_microsecond_precision() {
        let brand = Brand::new("Acme".to_string(), None);
        assert_eq!(brand.created_at.timestamp_subsec_nanos() % 1_000, 0);
    }
}
