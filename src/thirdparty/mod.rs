// ============================================================================
// Third-party Services - Seat booking and payment gateway
// ============================================================================
//
// The ticket service depends only on these two traits. Real providers live
// outside this crate; the logging implementations here stand in for them in
// the binary and accept every call.
//
// ============================================================================

pub mod payment_gateway;
pub mod seat_booking;

pub use payment_gateway::{LoggingTicketPaymentService, TicketPaymentService};
pub use seat_booking::{LoggingSeatReservationService, SeatReservationService};
