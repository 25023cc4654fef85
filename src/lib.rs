pub mod config;
pub mod domain;
pub mod metrics;
pub mod thirdparty;

pub use config::PurchasePolicy;
pub use domain::ticket::{
    AccountId, InvalidInputReason, PurchaseError, PurchaseRequest, TicketService, TicketSummary,
    TicketType, TicketTypeRequest,
};
pub use metrics::Metrics;
