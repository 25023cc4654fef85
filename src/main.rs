use anyhow::Context;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cinema_tickets::thirdparty::{LoggingSeatReservationService, LoggingTicketPaymentService};
use cinema_tickets::{Metrics, PurchasePolicy, PurchaseRequest, TicketService, TicketTypeRequest};

fn main() -> anyhow::Result<()> {
    // Default to INFO level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,cinema_tickets=debug")),
        )
        .init();

    let policy = PurchasePolicy::from_env()?;
    tracing::info!(
        max_tickets = policy.max_tickets,
        infants_per_adult = ?policy.infants_per_adult,
        "Loaded purchase policy"
    );

    let requests = match std::env::args().nth(1) {
        Some(path) => read_requests(&path)?,
        None => {
            tracing::info!("No requests file given, running demo purchases");
            demo_requests()
        }
    };

    let metrics = Arc::new(Metrics::new()?);
    let service = TicketService::with_policy(
        LoggingSeatReservationService,
        LoggingTicketPaymentService,
        policy,
    )
    .with_metrics(metrics.clone());

    let mut rejected = 0usize;
    for request in &requests {
        // Outcomes are logged by the service; keep going on failure
        if service.handle(request).is_err() {
            rejected += 1;
        }
    }

    tracing::info!(
        total = requests.len(),
        rejected,
        "Processed purchase requests"
    );

    print!("{}", metrics.encode_text()?);

    Ok(())
}

fn read_requests(path: impl AsRef<Path>) -> anyhow::Result<Vec<PurchaseRequest>> {
    let path = path.as_ref();
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read requests file '{}'", path.display()))?;
    serde_json::from_str(&s)
        .with_context(|| format!("failed to parse purchase requests in '{}'", path.display()))
}

fn demo_requests() -> Vec<PurchaseRequest> {
    vec![
        PurchaseRequest::new(
            1,
            vec![
                TicketTypeRequest::adults(2),
                TicketTypeRequest::children(2),
                TicketTypeRequest::infants(1),
            ],
        ),
        PurchaseRequest::new(None, vec![TicketTypeRequest::adults(1)]),
        PurchaseRequest::new(2, vec![TicketTypeRequest::children(3)]),
        PurchaseRequest::new(3, vec![TicketTypeRequest::adults(16), TicketTypeRequest::children(5)]),
        PurchaseRequest::new(4, vec![TicketTypeRequest::adults(1), TicketTypeRequest::infants(2)]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinema_tickets::TicketType;
    use std::path::PathBuf;

    fn temp_file(contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("requests-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_missing_requests_file() {
        let err = read_requests("/nonexistent/requests.json").unwrap_err();
        assert!(err.to_string().contains("failed to read requests file"));
    }

    #[test]
    fn test_malformed_requests_file() {
        let path = temp_file(r#"[{"account_id": 1, "tickets": [{"type": "SENIOR"#);
        let result = read_requests(&path);
        std::fs::remove_file(&path).unwrap();

        let err = result.unwrap_err();
        assert!(err.to_string().contains("failed to parse purchase requests"));
    }

    #[test]
    fn test_valid_requests_file() {
        let path = temp_file(
            r#"[
                {"account_id": 1, "tickets": [{"type": "ADULT", "count": 2}, {"type": "CHILD", "count": 1}]},
                {"tickets": [{"type": "INFANT", "count": 1}]}
            ]"#,
        );
        let result = read_requests(&path);
        std::fs::remove_file(&path).unwrap();

        let requests = result.unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].account_id, Some(1));
        assert_eq!(requests[0].tickets[1].ticket_type(), TicketType::Child);
        assert_eq!(requests[1].account_id, None);
    }

    #[test]
    fn test_demo_requests_cover_success_and_rejections() {
        let service = TicketService::new(LoggingSeatReservationService, LoggingTicketPaymentService);
        let outcomes: Vec<bool> = demo_requests().iter().map(|r| service.handle(r).is_ok()).collect();
        assert_eq!(outcomes, vec![true, false, false, false, false]);
    }
}
