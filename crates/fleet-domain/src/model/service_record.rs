//! Service record value type

use serde::{Deserialize, Serialize};
use std::fmt;

/// One maintenance event. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    date: String,
    description: String,
    cost: f64,
}

impl ServiceRecord {
    pub fn new(date: impl Into<String>, description: impl Into<String>, cost: f64) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
            cost,
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }
}

impl fmt::Display for ServiceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Date: {} | Description: {} | Cost: ${:.2}",
            self.date, self.description, self.cost
        )
    }
}
