// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Ticket purchasing rules live here. The seat booking and payment providers
// are reached only through the traits in `crate::thirdparty`.
//
// ============================================================================

pub mod ticket;
