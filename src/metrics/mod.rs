use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

use crate::navigation::Transition;

// ============================================================================
// Metrics Module - Prometheus metrics for observability
// ============================================================================
//
// In-process counters for:
// - Orders placed
// - Status changes by target status
// - Screen transitions
// - Rejected actions by reason
//
// Rendered on demand in the Prometheus text format; nothing is served.
// ============================================================================

pub struct Metrics {
    registry: Registry,

    pub orders_created: IntCounter,
    pub status_changes: IntCounterVec,
    pub screen_transitions: IntCounterVec,
    pub rejected_actions: IntCounterVec,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new_custom(Some("quickwash".to_string()), None)?;

        let orders_created = IntCounter::new("orders_created_total", "Total orders placed")?;
        registry.register(Box::new(orders_created.clone()))?;

        let status_changes = IntCounterVec::new(
            Opts::new("status_changes_total", "Accepted status updates by target status"),
            &["status"],
        )?;
        registry.register(Box::new(status_changes.clone()))?;

        let screen_transitions = IntCounterVec::new(
            Opts::new("screen_transitions_total", "Screen changes"),
            &["from", "to"],
        )?;
        registry.register(Box::new(screen_transitions.clone()))?;

        let rejected_actions = IntCounterVec::new(
            Opts::new("rejected_actions_total", "Actions that failed and were reported to the user"),
            &["reason"],
        )?;
        registry.register(Box::new(rejected_actions.clone()))?;

        Ok(Self {
            registry,
            orders_created,
            status_changes,
            screen_transitions,
            rejected_actions,
        })
    }

    pub fn record_order_created(&self) {
        self.orders_created.inc();
    }

    pub fn record_status_change(&self, status: &str) {
        self.status_changes.with_label_values(&[status]).inc();
    }

    pub fn record_transition(&self, transition: &Transition) {
        if transition.changed_screen() {
            self.screen_transitions
                .with_label_values(&[transition.from.name(), transition.to.name()])
                .inc();
        }
    }

    pub fn record_rejection(&self, reason: &str) {
        self.rejected_actions.with_label_values(&[reason]).inc();
    }

    /// Text exposition of every registered metric
    pub fn render(&self) -> anyhow::Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::Screen;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new().unwrap();
        metrics.record_order_created();
        assert!(!metrics.registry.gather().is_empty());
    }

    #[test]
    fn test_record_order_and_status() {
        let metrics = Metrics::new().unwrap();
        metrics.record_order_created();
        metrics.record_order_created();
        metrics.record_status_change("Completed");

        assert_eq!(metrics.orders_created.get(), 2);
        assert_eq!(metrics.status_changes.with_label_values(&["Completed"]).get(), 1);
        assert_eq!(metrics.status_changes.with_label_values(&["Pending"]).get(), 0);
    }

    #[test]
    fn test_same_screen_transition_not_counted() {
        let metrics = Metrics::new().unwrap();
        metrics.record_transition(&Transition {
            from: Screen::NewOrder,
            to: Screen::NewOrder,
            recorded_events: 0,
        });
        metrics.record_transition(&Transition {
            from: Screen::Login,
            to: Screen::Home,
            recorded_events: 0,
        });

        assert_eq!(metrics.screen_transitions.with_label_values(&["order", "order"]).get(), 0);
        assert_eq!(metrics.screen_transitions.with_label_values(&["login", "home"]).get(), 1);
    }

    #[test]
    fn test_render_uses_namespace() {
        let metrics = Metrics::new().unwrap();
        metrics.record_rejection("not_found");

        let text = metrics.render().unwrap();
        assert!(text.contains("quickwash_rejected_actions_total{reason=\"not_found\"} 1"));
    }
}
