//! Fixed-keys map strategy (spec.md §4.5).

use std::collections::BTreeMap;

use rand::RngCore;

use super::basic::BasicValue;
use super::descriptor::{Descriptor, TupleKind};
use super::error::StrategyError;
use super::parameter::{Parameter, ParameterValue};
use super::strategy::Strategy;
use super::template::{ReifiedValue, Template};
use super::tuple::TupleStrategy;

/// A record with a fixed, known set of string keys, each mapping to its own
/// (possibly distinct) value strategy.
///
/// Reuses `TupleStrategy` for everything but `descriptor`/`reify`: `fields`
/// arrives as a `BTreeMap`, so iteration is already in a stable key order;
/// that order becomes the inner tuple's positions. Only `reify` packs the
/// positions back into a `BTreeMap` keyed by name.
pub struct FixedKeysMapStrategy {
    sorted_keys: Vec<String>,
    inner: TupleStrategy,
}

impl FixedKeysMapStrategy {
    pub fn new(fields: BTreeMap<String, Box<dyn Strategy>>) -> Self {
        let mut sorted_keys = Vec::with_capacity(fields.len());
        let mut children = Vec::with_capacity(fields.len());
        for (key, strategy) in fields {
            sorted_keys.push(key);
            children.push(strategy);
        }
        Self {
            inner: TupleStrategy::new(children, TupleKind::Plain),
            sorted_keys,
        }
    }
}

impl Strategy for FixedKeysMapStrategy {
    fn descriptor(&self) -> Descriptor {
        let Descriptor::Tuple(children, _) = self.inner.descriptor() else {
            unreachable!("TupleStrategy::descriptor always returns Descriptor::Tuple");
        };
        Descriptor::Map(
            self.sorted_keys
                .iter()
                .cloned()
                .zip(children)
                .collect::<BTreeMap<_, _>>(),
        )
    }

    fn parameter(&self) -> Parameter {
        self.inner.parameter()
    }

    fn size_lower_bound(&self) -> u64 {
        self.inner.size_lower_bound()
    }

    fn size_upper_bound(&self) -> u64 {
        self.inner.size_upper_bound()
    }

    fn produce_template(
        &self,
        rng: &mut dyn RngCore,
        pv: &ParameterValue,
    ) -> Result<Template, StrategyError> {
        self.inner.produce_template(rng, pv)
    }

    fn reify(&self, template: &Template) -> Result<ReifiedValue, StrategyError> {
        let parts = template.as_tuple().ok_or_else(|| {
            StrategyError::invalid_template(format!("expected a tuple template, found {template:?}"))
        })?;
        if parts.len() != self.sorted_keys.len() {
            return Err(StrategyError::invalid_template(format!(
                "map template has {} fields, strategy expects {}",
                parts.len(),
                self.sorted_keys.len()
            )));
        }
        let tuple_value = self.inner.reify(template)?;
        let ReifiedValue::Tuple(values) = tuple_value else {
            unreachable!("TupleStrategy::reify always returns ReifiedValue::Tuple");
        };
        Ok(ReifiedValue::Map(
            self.sorted_keys.iter().cloned().zip(values).collect(),
        ))
    }

    fn decompose(&self, template: &Template) -> Result<Vec<(Descriptor, Template)>, StrategyError> {
        self.inner.decompose(template)
    }

    fn simplify(&self, template: &Template) -> Box<dyn Iterator<Item = Template>> {
        self.inner.simplify(template)
    }

    fn to_basic(&self, template: &Template) -> BasicValue {
        self.inner.to_basic(template)
    }

    fn from_basic(&self, basic: &BasicValue) -> Result<Template, StrategyError> {
        self.inner.from_basic(basic)
    }
}
