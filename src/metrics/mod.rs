use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, Opts, Registry, TextEncoder,
};

use crate::domain::ticket::{TicketSummary, TicketType};

// ============================================================================
// Metrics Module - Prometheus metrics for observability
// ============================================================================
//
// Provides metrics for:
// - Purchase outcomes (success and each rejection kind)
// - Tickets sold per ticket type
// - Seats reserved and revenue taken
// - Time spent in a purchase call
//
// ============================================================================

/// Central metrics registry for the ticket service
pub struct Metrics {
    registry: Registry,

    pub purchases_total: IntCounterVec,
    pub tickets_sold: IntCounterVec,
    pub seats_reserved: IntCounter,
    pub revenue: IntCounter,
    pub purchase_duration: Histogram,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let purchases_total = IntCounterVec::new(
            Opts::new("ticket_purchases_total", "Total ticket purchase attempts by outcome"),
            &["outcome"],
        )?;
        registry.register(Box::new(purchases_total.clone()))?;

        let tickets_sold = IntCounterVec::new(
            Opts::new("tickets_sold_total", "Tickets sold by ticket type"),
            &["ticket_type"],
        )?;
        registry.register(Box::new(tickets_sold.clone()))?;

        let seats_reserved = IntCounter::new("seats_reserved_total", "Total seats reserved")?;
        registry.register(Box::new(seats_reserved.clone()))?;

        let revenue = IntCounter::new("revenue_total", "Total amount charged for tickets")?;
        registry.register(Box::new(revenue.clone()))?;

        let purchase_duration = Histogram::with_opts(
            HistogramOpts::new("purchase_duration_seconds", "Ticket purchase call duration")
                .buckets(vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5]),
        )?;
        registry.register(Box::new(purchase_duration.clone()))?;

        Ok(Self {
            registry,
            purchases_total,
            tickets_sold,
            seats_reserved,
            revenue,
            purchase_duration,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Record a completed purchase
    pub fn record_purchase(&self, summary: &TicketSummary, duration_secs: f64) {
        self.purchases_total.with_label_values(&["success"]).inc();
        for ticket_type in TicketType::ALL {
            self.tickets_sold
                .with_label_values(&[ticket_type.as_str()])
                .inc_by(summary.count_of(ticket_type));
        }
        self.seats_reserved.inc_by(summary.seats_to_reserve);
        self.revenue.inc_by(summary.total_price);
        self.purchase_duration.observe(duration_secs);
    }

    /// Record a purchase that was rejected or failed downstream
    pub fn record_failure(&self, kind: &str, duration_secs: f64) {
        self.purchases_total.with_label_values(&[kind]).inc();
        self.purchase_duration.observe(duration_secs);
    }

    /// Render the registry in the Prometheus text format
    pub fn encode_text(&self) -> anyhow::Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
