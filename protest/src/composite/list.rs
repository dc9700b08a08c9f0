//! List strategy (spec.md §4.3).

use rand::RngCore;

use super::basic::BasicValue;
use super::descriptor::Descriptor;
use super::error::StrategyError;
use super::one_of::OneOfStrategy;
use super::parameter::{geometric, Parameter, ParameterValue};
use super::strategy::Strategy;
use super::template::{ReifiedValue, Template};

/// A variable-length homogeneous-or-unioned sequence.
///
/// `elements` may hold more than one alternative strategy — the list's
/// descriptor then names "a list of the union of these", matching
/// `ListStrategy([...])` in the Python original, which accepts several
/// strategies and draws each element from whichever fits. An empty
/// `elements` is also permitted (spec.md §4.3): it names the unit list, and
/// every operation below short-circuits around the absent `OneOfStrategy`
/// (which itself requires a non-empty child set) to produce or accept only
/// the empty list.
pub struct ListStrategy {
    elements_descriptor: Vec<Descriptor>,
    element: Option<OneOfStrategy>,
    average_length: f64,
}

impl ListStrategy {
    /// Builds a list strategy using the default `average_list_length` of
    /// 50.0 (spec.md §6). Use [`ListStrategy::with_average_length`] to read
    /// the setting from a [`crate::config::GeneratorConfig`] instead.
    pub fn new(elements: Vec<Box<dyn Strategy>>) -> Self {
        Self::with_average_length(elements, 50.0)
    }

    pub fn with_average_length(mut elements: Vec<Box<dyn Strategy>>, average_length: f64) -> Self {
        // Deterministic order for determinism only (spec.md §4.3/§4.4) —
        // doesn't affect which values can be drawn.
        elements.sort_by_key(|c| c.descriptor().canonical_key());
        let elements_descriptor = elements.iter().map(|c| c.descriptor()).collect();
        let element = if elements.is_empty() {
            None
        } else {
            Some(OneOfStrategy::new(elements))
        };
        Self {
            elements_descriptor,
            element,
            average_length,
        }
    }
}

impl Strategy for ListStrategy {
    fn descriptor(&self) -> Descriptor {
        Descriptor::List(self.elements_descriptor.clone())
    }

    fn parameter(&self) -> Parameter {
        let child_parameter = match &self.element {
            Some(element) => element.parameter(),
            None => Parameter::Composite(Default::default()),
        };
        Parameter::composite([
            (
                "average_length",
                Parameter::Exponential {
                    rate: 1.0 / self.average_length.max(f64::MIN_POSITIVE),
                },
            ),
            ("child_parameter", child_parameter),
        ])
    }

    fn size_lower_bound(&self) -> u64 {
        1
    }

    fn size_upper_bound(&self) -> u64 {
        if self.element.is_some() {
            u64::MAX
        } else {
            // Only the empty list is ever produced.
            1
        }
    }

    fn produce_template(
        &self,
        rng: &mut dyn RngCore,
        pv: &ParameterValue,
    ) -> Result<Template, StrategyError> {
        let Some(element) = &self.element else {
            return Ok(Template::List(Vec::new()));
        };
        let average_length = pv.field("average_length").as_f64();
        let child_pv = pv.field("child_parameter");
        let length = geometric(rng, average_length);

        let mut items = Vec::with_capacity(length);
        for _ in 0..length {
            let t = element
                .produce_template(rng, child_pv)
                .map_err(|e| StrategyError::from_child(element.descriptor(), e))?;
            items.push(t);
        }
        Ok(Template::List(items))
    }

    fn reify(&self, template: &Template) -> Result<ReifiedValue, StrategyError> {
        let items = template.as_list().ok_or_else(|| {
            StrategyError::invalid_template(format!("expected a list template, found {template:?}"))
        })?;
        let Some(element) = &self.element else {
            if !items.is_empty() {
                return Err(StrategyError::invalid_template(
                    "empty-descriptor list template must be empty",
                ));
            }
            return Ok(ReifiedValue::List(Vec::new()));
        };
        let mut out = Vec::with_capacity(items.len());
        for item in items {
            let v = element
                .reify(item)
                .map_err(|e| StrategyError::from_child(element.descriptor(), e))?;
            out.push(v);
        }
        Ok(ReifiedValue::List(out))
    }

    fn decompose(&self, template: &Template) -> Result<Vec<(Descriptor, Template)>, StrategyError> {
        let items = template.as_list().ok_or_else(|| {
            StrategyError::invalid_template(format!("expected a list template, found {template:?}"))
        })?;
        let Some(element) = &self.element else {
            return Ok(Vec::new());
        };
        Ok(items.iter().map(|t| (element.descriptor(), t.clone())).collect())
    }

    /// In the order the Python `ListStrategy.simplifiers` chain requires:
    /// the empty list first (if non-empty), then one-element deletions,
    /// then per-element shrinks, then adjacent-pair deletions. Unlike
    /// `TupleStrategy`, these stages run sequentially rather than mixed,
    /// since a list's length itself is part of what's being shrunk.
    fn simplify(&self, template: &Template) -> Box<dyn Iterator<Item = Template>> {
        let Some(element) = &self.element else {
            // Only the empty list is ever produced for an empty descriptor,
            // and the empty list has no simplifications (spec.md §4.3, S2).
            return Box::new(std::iter::empty());
        };
        let items = match template.as_list() {
            Some(items) => items.to_vec(),
            None => return Box::new(std::iter::empty()),
        };
        let len = items.len();

        let empty: Vec<Template> = if len > 0 {
            vec![Template::List(Vec::new())]
        } else {
            Vec::new()
        };

        let delete_one: Vec<Template> = if len > 1 {
            (0..len)
                .map(|i| {
                    let mut rest = items.clone();
                    rest.remove(i);
                    Template::List(rest)
                })
                .collect()
        } else {
            Vec::new()
        };

        let mut element_shrinks: Vec<Template> = Vec::new();
        for i in 0..len {
            for s in element.simplify(&items[i]) {
                let mut z = items.clone();
                z[i] = s;
                element_shrinks.push(Template::List(z));
            }
        }

        let delete_pairs: Vec<Template> = if len > 1 {
            (0..len - 1)
                .map(|i| {
                    let mut rest = items.clone();
                    rest.remove(i + 1);
                    rest.remove(i);
                    Template::List(rest)
                })
                .collect()
        } else {
            Vec::new()
        };

        Box::new(
            empty
                .into_iter()
                .chain(delete_one)
                .chain(element_shrinks)
                .chain(delete_pairs),
        )
    }

    fn to_basic(&self, template: &Template) -> BasicValue {
        let items = template.as_list().unwrap_or(&[]);
        let Some(element) = &self.element else {
            return BasicValue::Seq(Vec::new());
        };
        BasicValue::Seq(items.iter().map(|t| element.to_basic(t)).collect())
    }

    fn from_basic(&self, basic: &BasicValue) -> Result<Template, StrategyError> {
        let items = basic
            .as_seq()
            .ok_or_else(|| StrategyError::invalid_data("a list", format!("{basic:?}")))?;
        let Some(element) = &self.element else {
            if !items.is_empty() {
                return Err(StrategyError::invalid_data(
                    "an empty list",
                    format!("a list of length {}", items.len()),
                ));
            }
            return Ok(Template::List(Vec::new()));
        };
        let mut out = Vec::with_capacity(items.len());
        for item in items {
            let t = element
                .from_basic(item)
                .map_err(|e| StrategyError::from_child(element.descriptor(), e))?;
            out.push(t);
        }
        Ok(Template::List(out))
    }
}
