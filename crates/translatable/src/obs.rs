//! Observability: resolution telemetry behind a sink boundary.
//!
//! Resolution logic MUST NOT read counter state directly. All
//! instrumentation flows through `MetricsEvent` and `MetricsSink`, and
//! must not affect resolution semantics.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;

thread_local! {
    static STATE: RefCell<EventOps> = RefCell::new(EventOps::default());
    static SINK_OVERRIDE: RefCell<Option<Box<dyn MetricsSink>>> = const { RefCell::new(None) };
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricsEvent {
    /// Requested locale's column existed.
    ResolveHit,
    /// Resolution fell back to the default locale's column name.
    ResolveFallback,
    /// A getter or validator scanned all available translations.
    AnyScan,
    /// A validated field held no translation at all.
    ValidationFailure,
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

///
/// GlobalMetricsSink
/// Default sink writing into thread-local counter state.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        STATE.with_borrow_mut(|ops| ops.apply(event));
    }
}

///
/// EventOps
/// Ephemeral, in-memory counters for resolution operations.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventOps {
    pub resolve_hits: u64,
    pub resolve_fallbacks: u64,
    pub any_scans: u64,
    pub validation_failures: u64,
}

impl EventOps {
    fn apply(&mut self, event: MetricsEvent) {
        match event {
            MetricsEvent::ResolveHit => self.resolve_hits += 1,
            MetricsEvent::ResolveFallback => self.resolve_fallbacks += 1,
            MetricsEvent::AnyScan => self.any_scans += 1,
            MetricsEvent::ValidationFailure => self.validation_failures += 1,
        }
    }
}

// bridge used by the resolution modules
pub(crate) fn record(event: MetricsEvent) {
    let overridden = SINK_OVERRIDE.with_borrow(|sink| match sink {
        Some(sink) => {
            sink.record(event);
            true
        }
        None => false,
    });

    if !overridden {
        GlobalMetricsSink.record(event);
    }
}

/// Snapshot of this thread's counters.
#[must_use]
pub fn metrics_report() -> EventOps {
    STATE.with_borrow(Clone::clone)
}

/// Reset this thread's counters to zero.
pub fn metrics_reset() {
    STATE.with_borrow_mut(|ops| *ops = EventOps::default());
}

/// Install (or clear) a sink override for the current thread. Tests use
/// this to capture events without touching the counter state.
pub fn set_sink_override(sink: Option<Box<dyn MetricsSink>>) {
    SINK_OVERRIDE.with_borrow_mut(|slot| *slot = sink);
}
