//! Conversion metrics and tracing spans.
//!
//! Both halves are optional: `metrics` records through the global
//! OpenTelemetry meter, `tracing` wraps conversions in spans.

#[cfg(feature = "metrics")]
use once_cell::sync::Lazy;
#[cfg(feature = "metrics")]
use opentelemetry::{global, metrics::Counter, KeyValue};

#[cfg(feature = "metrics")]
pub static METRICS: Lazy<ConversionMetrics> = Lazy::new(ConversionMetrics::init);

#[cfg(feature = "metrics")]
pub struct ConversionMetrics {
    pub conversions_total: Counter<u64>,
    pub conversion_failures_total: Counter<u64>,
}

#[cfg(feature = "metrics")]
impl ConversionMetrics {
    pub fn init() -> Self {
        let meter = global::meter("simple_datetime_types");

        let conversions_total = meter
            .u64_counter("simple_datetime_conversions_total")
            .with_description("Total date/time column conversions")
            .build();

        let conversion_failures_total = meter
            .u64_counter("simple_datetime_conversion_failures_total")
            .with_description("Date/time column conversions that returned an error")
            .build();

        Self {
            conversions_total,
            conversion_failures_total,
        }
    }

    pub fn record_conversion(&self, type_name: &'static str, direction: &'static str, ok: bool) {
        let attributes = [
            KeyValue::new("type", type_name),
            KeyValue::new("direction", direction),
        ];
        self.conversions_total.add(1, &attributes);
        if !ok {
            self.conversion_failures_total.add(1, &attributes);
        }
    }
}

#[cfg(feature = "tracing")]
pub mod tracing_helpers {
    use tracing::Span;

    /// Span around a single conversion; `direction` is `to_value` or `to_database`.
    pub fn conversion_span(type_name: &'static str, direction: &'static str) -> Span {
        tracing::trace_span!("simple_datetime.convert", column_type = type_name, direction = direction)
    }
}
