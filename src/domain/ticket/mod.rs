// ============================================================================
// Ticket Domain - Purchase validation and pricing
// ============================================================================
//
// This module contains ALL ticket-purchase code:
// - Value objects (TicketType, TicketTypeRequest, AccountId, TicketSummary)
// - Commands (PurchaseRequest)
// - Errors (PurchaseError enum)
// - Service (TicketService, validates then calls seat booking and payment)
//
// ============================================================================

pub mod commands;
pub mod errors;
pub mod service;
pub mod value_objects;

// Re-export for convenience
pub use commands::*;
pub use errors::*;
pub use service::*;
pub use value_objects::*;
