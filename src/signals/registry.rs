//! Named signal registry.

use std::collections::{BTreeMap, HashMap};

use tracing::warn;

use crate::models::frame::MarketFrame;

use super::{
    ForeignFlowSignal, MarginReversalSignal, QualityValueSignal, SectorMomentumSignal,
    ShortSqueezeSignal, Signal,
};

/// Registry of available signals, resolved by name.
///
/// Registration is explicit and happens at construction; there is no
/// dynamic discovery.
pub struct SignalRegistry {
    signals: HashMap<&'static str, Box<dyn Signal>>,
}

impl SignalRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            signals: HashMap::new(),
        }
    }

    /// A registry with the five built-in signals.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(MarginReversalSignal));
        registry.register(Box::new(ForeignFlowSignal));
        registry.register(Box::new(QualityValueSignal));
        registry.register(Box::new(SectorMomentumSignal));
        registry.register(Box::new(ShortSqueezeSignal));
        registry
    }

    /// Register a signal under its name, replacing any previous entry.
    pub fn register(&mut self, signal: Box<dyn Signal>) {
        let name = signal.name();
        if self.signals.insert(name, signal).is_some() {
            warn!(name, "signal registration replaced an existing entry");
        }
    }

    /// Look up a signal by name.
    pub fn get(&self, name: &str) -> Option<&dyn Signal> {
        self.signals.get(name).map(|s| s.as_ref())
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.signals.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Run every registered signal over `frame`. Signals whose
    /// preconditions fail are logged and skipped so one bad input does
    /// not abort the batch.
    pub fn calculate_all(&self, frame: &MarketFrame) -> BTreeMap<&'static str, Vec<i8>> {
        let mut out = BTreeMap::new();
        for (name, signal) in &self.signals {
            match signal.calculate(frame) {
                Ok(column) => {
                    out.insert(*name, column);
                }
                Err(err) => warn!(name, %err, "signal skipped"),
            }
        }
        out
    }
}

impl Default for SignalRegistry {
    fn default() -> Self {
        Self::new()
    }
}
