//! Quote line items and their status state machine

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Money;

/// One priced line awaiting or having received a customer decision.
/// Quote items are never deleted, only transitioned between statuses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuoteItem {
    pub id: String,
    pub quote_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub customer_name: String,
    pub customer_email: String,
    pub status: QuoteStatus,
    pub created_at: DateTime<Utc>,
    pub responded_at: Option<DateTime<Utc>>,
    /// Employee who prepared the quote, once assigned.
    pub handled_by: Option<String>,
}

impl QuoteItem {
    pub fn total_price(&self) -> Money {
        self.unit_price.multiply(self.quantity)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuoteStatus {
    #[default]
    Pending,
    Ready,
    Accepted,
    Rejected,
    PartiallyAccepted,
}

impl QuoteStatus {
    /// Accepted, rejected and partially-accepted admit no further transition.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Accepted | Self::Rejected | Self::PartiallyAccepted)
    }

    /// Whether this status records a customer response.
    pub fn is_response(self) -> bool {
        self.is_terminal()
    }

    pub fn can_transition_to(self, next: QuoteStatus) -> bool {
        match self {
            Self::Pending => next == Self::Ready,
            Self::Ready => next.is_terminal(),
            Self::Accepted | Self::Rejected | Self::PartiallyAccepted => false,
        }
    }
}

impl std::fmt::Display for QuoteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Ready => "ready",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::PartiallyAccepted => "partially-accepted",
        };
        write!(f, "{s}")
    }
}
