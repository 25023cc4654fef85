use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::{InvalidInputReason, PurchaseError};

// ============================================================================
// Ticket Value Objects
// ============================================================================

/// Ticket category. Only adults and children occupy a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketType {
    Adult,
    Child,
    Infant,
}

impl TicketType {
    pub const ALL: [TicketType; 3] = [TicketType::Adult, TicketType::Child, TicketType::Infant];

    /// Price charged per ticket of this type
    pub const fn unit_price(self) -> u64 {
        match self {
            TicketType::Adult => 20,
            TicketType::Child => 10,
            TicketType::Infant => 0,
        }
    }

    /// Infants sit on an adult's lap
    pub const fn occupies_seat(self) -> bool {
        !matches!(self, TicketType::Infant)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            TicketType::Adult => "ADULT",
            TicketType::Child => "CHILD",
            TicketType::Infant => "INFANT",
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable (type, count) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketTypeRequest {
    #[serde(rename = "type")]
    ticket_type: TicketType,
    #[serde(rename = "count")]
    no_of_tickets: u32,
}

impl TicketTypeRequest {
    pub const fn new(ticket_type: TicketType, no_of_tickets: u32) -> Self {
        Self { ticket_type, no_of_tickets }
    }

    pub fn adults(no_of_tickets: u32) -> Self {
        Self::new(TicketType::Adult, no_of_tickets)
    }

    pub fn children(no_of_tickets: u32) -> Self {
        Self::new(TicketType::Child, no_of_tickets)
    }

    pub fn infants(no_of_tickets: u32) -> Self {
        Self::new(TicketType::Infant, no_of_tickets)
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn no_of_tickets(&self) -> u32 {
        self.no_of_tickets
    }
}

/// Account identifier that has passed validation (always > 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AccountId(i64);

impl AccountId {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for AccountId {
    type Error = PurchaseError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value <= 0 {
            return Err(PurchaseError::InvalidInput(
                InvalidInputReason::NonPositiveAccountId(value),
            ));
        }
        Ok(Self(value))
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Seat and price totals for a request that passed every rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TicketSummary {
    pub adults: u64,
    pub children: u64,
    pub infants: u64,
    pub seats_to_reserve: u64,
    pub total_price: u64,
}

impl TicketSummary {
    /// Tally counts per type. Sums are widened to u64 so a huge count is
    /// rejected by the ticket limit instead of overflowing.
    pub fn tally(requests: &[TicketTypeRequest]) -> Self {
        let mut summary = Self::default();

        for request in requests {
            let count = u64::from(request.no_of_tickets());
            match request.ticket_type() {
                TicketType::Adult => summary.adults += count,
                TicketType::Child => summary.children += count,
                TicketType::Infant => summary.infants += count,
            }
            if request.ticket_type().occupies_seat() {
                summary.seats_to_reserve += count;
            }
            summary.total_price += count * request.ticket_type().unit_price();
        }

        summary
    }

    pub fn total_tickets(&self) -> u64 {
        self.adults + self.children + self.infants
    }

    pub fn count_of(&self, ticket_type: TicketType) -> u64 {
        match ticket_type {
            TicketType::Adult => self.adults,
            TicketType::Child => self.children,
            TicketType::Infant => self.infants,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_prices() {
        assert_eq!(TicketType::Adult.unit_price(), 20);
        assert_eq!(TicketType::Child.unit_price(), 10);
        assert_eq!(TicketType::Infant.unit_price(), 0);
    }

    #[test]
    fn test_infants_do_not_occupy_seats() {
        assert!(TicketType::Adult.occupies_seat());
        assert!(TicketType::Child.occupies_seat());
        assert!(!TicketType::Infant.occupies_seat());
    }

    #[test]
    fn test_ticket_type_wire_names() {
        assert_eq!(serde_json::to_string(&TicketType::Infant).unwrap(), "\"INFANT\"");
        let parsed: TicketType = serde_json::from_str("\"CHILD\"").unwrap();
        assert_eq!(parsed, TicketType::Child);
        assert!(serde_json::from_str::<TicketType>("\"SENIOR\"").is_err());
    }

    #[test]
    fn test_ticket_request_from_json() {
        let request: TicketTypeRequest =
            serde_json::from_str(r#"{"type": "ADULT", "count": 3}"#).unwrap();

        assert_eq!(request.ticket_type(), TicketType::Adult);
        assert_eq!(request.no_of_tickets(), 3);
    }

    #[test]
    fn test_negative_count_rejected_at_parse() {
        let result = serde_json::from_str::<TicketTypeRequest>(r#"{"type": "ADULT", "count": -1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_account_id_must_be_positive() {
        assert_eq!(AccountId::try_from(7).unwrap().get(), 7);
        assert!(matches!(
            AccountId::try_from(0),
            Err(PurchaseError::InvalidInput(InvalidInputReason::NonPositiveAccountId(0)))
        ));
        assert!(AccountId::try_from(-3).is_err());
    }

    #[test]
    fn test_tally_sums_repeated_types() {
        let summary = TicketSummary::tally(&[
            TicketTypeRequest::adults(2),
            TicketTypeRequest::children(1),
            TicketTypeRequest::adults(1),
            TicketTypeRequest::infants(2),
        ]);

        assert_eq!(summary.adults, 3);
        assert_eq!(summary.children, 1);
        assert_eq!(summary.infants, 2);
        assert_eq!(summary.seats_to_reserve, 4);
        assert_eq!(summary.total_price, 70);
        assert_eq!(summary.total_tickets(), 6);
    }

    #[test]
    fn test_tally_does_not_overflow() {
        let summary = TicketSummary::tally(&[
            TicketTypeRequest::adults(u32::MAX),
            TicketTypeRequest::children(u32::MAX),
        ]);

        assert_eq!(summary.seats_to_reserve, 2 * u64::from(u32::MAX));
        assert_eq!(summary.count_of(TicketType::Child), u64::from(u32::MAX));
    }
}
