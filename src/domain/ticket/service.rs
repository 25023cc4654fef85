use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

use crate::config::PurchasePolicy;
use crate::metrics::Metrics;
use crate::thirdparty::{SeatReservationService, TicketPaymentService};

use super::commands::PurchaseRequest;
use super::errors::{InvalidInputReason, PurchaseError};
use super::value_objects::{AccountId, TicketSummary, TicketType, TicketTypeRequest};

// ============================================================================
// Ticket Service
// ============================================================================
//
// Orchestrates: Request → Validation → Totals → Seat Reservation → Payment
//
// Every rule is checked before either collaborator is called. Collaborator
// failures are returned unchanged and nothing is compensated.
//
// ============================================================================

pub struct TicketService<S, P> {
    seat_reservation: S,
    payment: P,
    policy: PurchasePolicy,
    metrics: Option<Arc<Metrics>>,
}

impl<S, P> TicketService<S, P>
where
    S: SeatReservationService,
    P: TicketPaymentService,
{
    pub fn new(seat_reservation: S, payment: P) -> Self {
        Self::with_policy(seat_reservation, payment, PurchasePolicy::default())
    }

    pub fn with_policy(seat_reservation: S, payment: P, policy: PurchasePolicy) -> Self {
        Self {
            seat_reservation,
            payment,
            policy,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn policy(&self) -> &PurchasePolicy {
        &self.policy
    }

    /// Validate a purchase, reserve its seats and take payment
    pub fn purchase_tickets(
        &self,
        account_id: impl Into<Option<i64>>,
        ticket_type_requests: &[TicketTypeRequest],
    ) -> Result<(), PurchaseError> {
        let account_id = account_id.into();
        let purchase_id = Uuid::new_v4();
        let span = tracing::info_span!("purchase_tickets", %purchase_id, account_id = ?account_id);
        let _enter = span.enter();

        let started = Instant::now();
        let result = self.execute(account_id, ticket_type_requests);
        let elapsed = started.elapsed().as_secs_f64();

        match &result {
            Ok(summary) => {
                tracing::info!(
                    seats = summary.seats_to_reserve,
                    total_price = summary.total_price,
                    "Purchase completed"
                );
                if let Some(metrics) = &self.metrics {
                    metrics.record_purchase(summary, elapsed);
                }
            }
            Err(e) => {
                if e.is_validation_error() {
                    tracing::warn!(reason = e.kind(), "Purchase rejected: {}", e);
                } else {
                    tracing::error!(reason = e.kind(), "Purchase failed: {}", e);
                }
                if let Some(metrics) = &self.metrics {
                    metrics.record_failure(e.kind(), elapsed);
                }
            }
        }

        result.map(|_| ())
    }

    /// Submit a deserialized purchase request
    pub fn handle(&self, request: &PurchaseRequest) -> Result<(), PurchaseError> {
        self.purchase_tickets(request.account_id, &request.tickets)
    }

    /// Run every rule and compute totals without contacting either service
    pub fn quote(
        &self,
        account_id: impl Into<Option<i64>>,
        ticket_type_requests: &[TicketTypeRequest],
    ) -> Result<TicketSummary, PurchaseError> {
        let (_, summary) = self.validate(account_id.into(), ticket_type_requests)?;
        Ok(summary)
    }

    fn execute(
        &self,
        account_id: Option<i64>,
        ticket_type_requests: &[TicketTypeRequest],
    ) -> Result<TicketSummary, PurchaseError> {
        let (account_id, summary) = self.validate(account_id, ticket_type_requests)?;

        tracing::debug!(
            adults = summary.adults,
            children = summary.children,
            infants = summary.infants,
            "Purchase validated"
        );

        self.seat_reservation
            .reserve_seat(account_id, summary.seats_to_reserve)
            .map_err(PurchaseError::SeatReservation)?;

        self.payment
            .make_payment(account_id, summary.total_price)
            .map_err(PurchaseError::Payment)?;

        Ok(summary)
    }

    /// Rules are checked in a fixed order and the first violation wins
    fn validate(
        &self,
        account_id: Option<i64>,
        ticket_type_requests: &[TicketTypeRequest],
    ) -> Result<(AccountId, TicketSummary), PurchaseError> {
        let account_id = account_id
            .ok_or(PurchaseError::InvalidInput(InvalidInputReason::MissingAccountId))
            .and_then(AccountId::try_from)?;

        if ticket_type_requests.is_empty() {
            return Err(PurchaseError::InvalidInput(InvalidInputReason::NoTicketRequests));
        }

        let has_adult = ticket_type_requests
            .iter()
            .any(|r| r.ticket_type() == TicketType::Adult && r.no_of_tickets() > 0);
        if !has_adult {
            return Err(PurchaseError::NoAdult);
        }

        let summary = TicketSummary::tally(ticket_type_requests);

        let requested = summary.total_tickets();
        if requested > u64::from(self.policy.max_tickets) {
            return Err(PurchaseError::MaxTicketsExceeded {
                requested,
                max: self.policy.max_tickets,
            });
        }

        if let Some(limit) = self.policy.infant_limit(summary.adults) {
            if summary.infants > limit {
                return Err(PurchaseError::TooManyInfants {
                    infants: summary.infants,
                    adults: summary.adults,
                });
            }
        }

        Ok((account_id, summary))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
