//! Prometheus counters exported on `/metrics`.

use prometheus::{IntCounter, Opts};

#[derive(Clone)]
pub struct Metrics {
    pub boms_generated: IntCounter,
    pub rule_failures: IntCounter,
}

impl Metrics {
    fn counters() -> Result<Self, prometheus::Error> {
        Ok(Self {
            boms_generated: IntCounter::with_opts(Opts::new(
                "forgebom_boms_generated_total",
                "BOMs written to the store",
            ))?,
            rule_failures: IntCounter::with_opts(Opts::new(
                "forgebom_rule_failures_total",
                "BOM requests rejected by the rules",
            ))?,
        })
    }

    /// Counters registered with the default registry.
    pub fn register() -> Result<Self, prometheus::Error> {
        let metrics = Self::counters()?;
        prometheus::register(Box::new(metrics.boms_generated.clone()))?;
        prometheus::register(Box::new(metrics.rule_failures.clone()))?;
        Ok(metrics)
    }

    /// Counters kept out of the default registry.
    #[cfg(test)]
    pub fn unregistered() -> Self {
        Self::counters().expect("static metric options")
    }
}
