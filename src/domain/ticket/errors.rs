// ============================================================================
// Ticket Purchase Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum PurchaseError {
    #[error("Invalid input: {0}")]
    InvalidInput(InvalidInputReason),

    #[error("At least one adult ticket is required")]
    NoAdult,

    #[error("Too many tickets requested: {requested} (maximum {max})")]
    MaxTicketsExceeded { requested: u64, max: u32 },

    #[error("Too many infants: {infants} infants for {adults} adults")]
    TooManyInfants { infants: u64, adults: u64 },

    /// Seat reservation service failed; its error is passed through as-is
    #[error(transparent)]
    SeatReservation(anyhow::Error),

    /// Payment service failed; its error is passed through as-is
    #[error(transparent)]
    Payment(anyhow::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInputReason {
    #[error("account id is missing")]
    MissingAccountId,

    #[error("account id must be positive, got {0}")]
    NonPositiveAccountId(i64),

    #[error("no ticket requests supplied")]
    NoTicketRequests,
}

impl PurchaseError {
    /// True when the request itself was rejected, before any collaborator ran
    pub fn is_validation_error(&self) -> bool {
        !matches!(self, PurchaseError::SeatReservation(_) | PurchaseError::Payment(_))
    }

    /// Stable label for logs and metrics
    pub fn kind(&self) -> &'static str {
        match self {
            PurchaseError::InvalidInput(_) => "invalid_input",
            PurchaseError::NoAdult => "no_adult",
            PurchaseError::MaxTicketsExceeded { .. } => "max_tickets_exceeded",
            PurchaseError::TooManyInfants { .. } => "too_many_infants",
            PurchaseError::SeatReservation(_) => "seat_reservation_failed",
            PurchaseError::Payment(_) => "payment_failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collaborator_errors_are_transparent() {
        let err = PurchaseError::Payment(anyhow::anyhow!("card declined"));
        assert_eq!(err.to_string(), "card declined");
        assert!(!err.is_validation_error());
    }

    #[test]
    fn test_validation_error_messages() {
        let err = PurchaseError::MaxTicketsExceeded { requested: 26, max: 20 };
        assert_eq!(err.to_string(), "Too many tickets requested: 26 (maximum 20)");
        assert!(err.is_validation_error());

        let err = PurchaseError::InvalidInput(InvalidInputReason::MissingAccountId);
        assert_eq!(err.to_string(), "Invalid input: account id is missing");
        assert_eq!(err.kind(), "invalid_input");
    }
}
