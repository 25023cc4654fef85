use serde::{Deserialize, Serialize};

use super::value_objects::TicketTypeRequest;

// ============================================================================
// Purchase Request - Represents user intent
// ============================================================================

/// A purchase as submitted by a caller. Nothing here is validated yet; an
/// absent account id or an empty ticket list is rejected by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    #[serde(default)]
    pub account_id: Option<i64>,
    #[serde(default)]
    pub tickets: Vec<TicketTypeRequest>,
}

impl PurchaseRequest {
    pub fn new(account_id: impl Into<Option<i64>>, tickets: Vec<TicketTypeRequest>) -> Self {
        Self {
            account_id: account_id.into(),
            tickets,
        }
    }
}
