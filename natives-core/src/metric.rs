use lazy_static::lazy_static;
use prometheus::{IntCounterVec, Opts};

lazy_static! {
    static ref ATTRIBUTE_RESOLUTION_COUNT: IntCounterVec = IntCounterVec::new(
        Opts::new("attribute_resolution_count", "Attribute Resolution Count")
            .namespace("natives_core"),
        &["category", "outcome"]
    )
    .expect("failed to initialize metric: ATTRIBUTE_RESOLUTION_COUNT");
}

pub fn attribute_resolution_count_metric() -> &'static IntCounterVec {
    &ATTRIBUTE_RESOLUTION_COUNT
}

/// Registers every metric of this crate with `registry`.
pub fn register_metrics(registry: &prometheus::Registry) -> prometheus::Result<()> {
    registry.register(Box::new(attribute_resolution_count_metric().clone()))?;

    Ok(())
}
