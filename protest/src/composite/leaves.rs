//! Leaf strategies: the "external collaborators" spec.md §6 assumes exist.
//!
//! The composite algebra only ever calls the six contract methods plus
//! `descriptor`/`parameter`/the size bounds on a child — it never cares how
//! a leaf generates or shrinks its values. These three adapters wrap
//! generators this workspace already has (`crate::primitives::IntGenerator`,
//! `BoolGenerator`, `StringGenerator`) so the composite strategies have
//! something concrete to compose over.

use rand::RngCore;

use crate::config::GeneratorConfig;
use crate::generator::Generator;
use crate::primitives::{BoolGenerator, IntGenerator, StringGenerator};

use super::basic::BasicValue;
use super::descriptor::{Descriptor, LeafKind};
use super::error::StrategyError;
use super::parameter::Parameter;
use super::strategy::Strategy;
use super::template::{ReifiedValue, Template};

/// A leaf strategy for `i64`, bounded `[min, max]`.
pub struct IntLeaf {
    inner: IntGenerator<i64>,
    config: GeneratorConfig,
}

impl IntLeaf {
    pub fn new(min: i64, max: i64) -> Self {
        Self {
            inner: IntGenerator::new(min, max),
            config: GeneratorConfig::default(),
        }
    }
}

impl Strategy for IntLeaf {
    fn descriptor(&self) -> Descriptor {
        Descriptor::Leaf(LeafKind::Int)
    }

    fn parameter(&self) -> Parameter {
        Parameter::Composite(Default::default())
    }

    fn produce_template(
        &self,
        rng: &mut dyn RngCore,
        _pv: &super::parameter::ParameterValue,
    ) -> Result<Template, StrategyError> {
        let v = self.inner.generate(rng, &self.config);
        Ok(Template::Leaf(BasicValue::Int(v)))
    }

    fn reify(&self, template: &Template) -> Result<ReifiedValue, StrategyError> {
        match template {
            Template::Leaf(v @ BasicValue::Int(_)) => Ok(ReifiedValue::Leaf(v.clone())),
            other => Err(StrategyError::invalid_template(format!(
                "expected an int leaf template, found {other:?}"
            ))),
        }
    }

    fn decompose(&self, _template: &Template) -> Result<Vec<(Descriptor, Template)>, StrategyError> {
        Ok(Vec::new())
    }

    fn simplify(&self, template: &Template) -> Box<dyn Iterator<Item = Template>> {
        match template {
            Template::Leaf(BasicValue::Int(v)) => {
                Box::new(self.inner.shrink(v).map(|s| Template::Leaf(BasicValue::Int(s))))
            }
            _ => Box::new(std::iter::empty()),
        }
    }

    fn to_basic(&self, template: &Template) -> BasicValue {
        match template {
            Template::Leaf(v) => v.clone(),
            _ => BasicValue::Null,
        }
    }

    fn from_basic(&self, basic: &BasicValue) -> Result<Template, StrategyError> {
        match basic {
            BasicValue::Int(_) => Ok(Template::Leaf(basic.clone())),
            other => Err(StrategyError::invalid_data("int", format!("{other:?}"))),
        }
    }
}

/// A leaf strategy for `bool`.
pub struct BoolLeaf {
    inner: BoolGenerator,
    config: GeneratorConfig,
}

impl BoolLeaf {
    pub fn new() -> Self {
        Self {
            inner: BoolGenerator,
            config: GeneratorConfig::default(),
        }
    }
}

impl Default for BoolLeaf {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for BoolLeaf {
    fn descriptor(&self) -> Descriptor {
        Descriptor::Leaf(LeafKind::Bool)
    }

    fn parameter(&self) -> Parameter {
        Parameter::Composite(Default::default())
    }

    fn produce_template(
        &self,
        rng: &mut dyn RngCore,
        _pv: &super::parameter::ParameterValue,
    ) -> Result<Template, StrategyError> {
        let v = self.inner.generate(rng, &self.config);
        Ok(Template::Leaf(BasicValue::Int(v as i64)))
    }

    fn reify(&self, template: &Template) -> Result<ReifiedValue, StrategyError> {
        match template {
            Template::Leaf(v @ BasicValue::Int(_)) => Ok(ReifiedValue::Leaf(v.clone())),
            other => Err(StrategyError::invalid_template(format!(
                "expected a bool leaf template, found {other:?}"
            ))),
        }
    }

    fn decompose(&self, _template: &Template) -> Result<Vec<(Descriptor, Template)>, StrategyError> {
        Ok(Vec::new())
    }

    fn simplify(&self, template: &Template) -> Box<dyn Iterator<Item = Template>> {
        match template {
            Template::Leaf(BasicValue::Int(0)) => Box::new(std::iter::empty()),
            Template::Leaf(BasicValue::Int(_)) => {
                Box::new(std::iter::once(Template::Leaf(BasicValue::Int(0))))
            }
            _ => Box::new(std::iter::empty()),
        }
    }

    fn to_basic(&self, template: &Template) -> BasicValue {
        match template {
            Template::Leaf(v) => v.clone(),
            _ => BasicValue::Null,
        }
    }

    fn from_basic(&self, basic: &BasicValue) -> Result<Template, StrategyError> {
        match basic {
            BasicValue::Int(0) | BasicValue::Int(1) => Ok(Template::Leaf(basic.clone())),
            other => Err(StrategyError::invalid_data("bool (0 or 1)", format!("{other:?}"))),
        }
    }
}

/// A leaf strategy for ASCII printable `String`s.
pub struct StringLeaf {
    inner: StringGenerator,
    config: GeneratorConfig,
}

impl StringLeaf {
    pub fn new(min_length: usize, max_length: usize) -> Self {
        Self {
            inner: StringGenerator::ascii_printable(min_length, max_length),
            config: GeneratorConfig::default(),
        }
    }
}

impl Strategy for StringLeaf {
    fn descriptor(&self) -> Descriptor {
        Descriptor::Leaf(LeafKind::Str)
    }

    fn parameter(&self) -> Parameter {
        Parameter::Composite(Default::default())
    }

    fn produce_template(
        &self,
        rng: &mut dyn RngCore,
        _pv: &super::parameter::ParameterValue,
    ) -> Result<Template, StrategyError> {
        let v = self.inner.generate(rng, &self.config);
        Ok(Template::Leaf(BasicValue::Str(v)))
    }

    fn reify(&self, template: &Template) -> Result<ReifiedValue, StrategyError> {
        match template {
            Template::Leaf(v @ BasicValue::Str(_)) => Ok(ReifiedValue::Leaf(v.clone())),
            other => Err(StrategyError::invalid_template(format!(
                "expected a string leaf template, found {other:?}"
            ))),
        }
    }

    fn decompose(&self, _template: &Template) -> Result<Vec<(Descriptor, Template)>, StrategyError> {
        Ok(Vec::new())
    }

    fn simplify(&self, template: &Template) -> Box<dyn Iterator<Item = Template>> {
        match template {
            Template::Leaf(BasicValue::Str(s)) => {
                Box::new(self.inner.shrink(s).map(|s| Template::Leaf(BasicValue::Str(s))))
            }
            _ => Box::new(std::iter::empty()),
        }
    }

    fn to_basic(&self, template: &Template) -> BasicValue {
        match template {
            Template::Leaf(v) => v.clone(),
            _ => BasicValue::Null,
        }
    }

    fn from_basic(&self, basic: &BasicValue) -> Result<Template, StrategyError> {
        match basic {
            BasicValue::Str(_) => Ok(Template::Leaf(basic.clone())),
            other => Err(StrategyError::invalid_data("str", format!("{other:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composite::parameter::ParameterValue;
    use rand::thread_rng;

    #[test]
    fn int_leaf_round_trips_through_basic() {
        let leaf = IntLeaf::new(-10, 10);
        let pv = ParameterValue::Composite(Default::default());
        let t = leaf.produce_template(&mut thread_rng(), &pv).unwrap();
        let basic = leaf.to_basic(&t);
        let back = leaf.from_basic(&basic).unwrap();
        assert!(t.template_eq(&back));
    }

    #[test]
    fn int_leaf_shrinks_toward_zero() {
        let leaf = IntLeaf::new(0, 100);
        let t = Template::Leaf(BasicValue::Int(50));
        let shrinks: Vec<_> = leaf.simplify(&t).collect();
        assert!(!shrinks.is_empty());
        for s in &shrinks {
            if let Template::Leaf(BasicValue::Int(v)) = s {
                assert!(*v < 50);
            }
        }
    }

    #[test]
    fn bool_leaf_from_basic_rejects_non_bool_ints() {
        let leaf = BoolLeaf::new();
        assert!(leaf.from_basic(&BasicValue::Int(2)).is_err());
        assert!(leaf.from_basic(&BasicValue::Int(0)).is_ok());
    }

    #[test]
    fn string_leaf_round_trips() {
        let leaf = StringLeaf::new(0, 8);
        let pv = ParameterValue::Composite(Default::default());
        let t = leaf.produce_template(&mut thread_rng(), &pv).unwrap();
        let basic = leaf.to_basic(&t);
        let back = leaf.from_basic(&basic).unwrap();
        assert!(t.template_eq(&back));
    }
}
