//! Set and frozen-set strategies (spec.md §4.4).

use rand::RngCore;

use super::basic::BasicValue;
use super::descriptor::Descriptor;
use super::error::StrategyError;
use super::one_of::OneOfStrategy;
use super::parameter::{biased_coin, Parameter, ParameterValue};
use super::strategy::Strategy;
use super::template::{ReifiedValue, Template};

/// `2^exp`, saturating rather than overflowing for large exponents — spec.md
/// §4.4's size bounds are estimates, not exact counts.
fn pow2_saturating(exp: u64) -> u64 {
    match u32::try_from(exp) {
        Ok(exp) if exp < 63 => 1u64 << exp,
        _ => u64::MAX,
    }
}

/// Shared machinery for `SetStrategy` and `FrozenSetStrategy`: both draw,
/// reify, decompose, shrink, and serialize identically; they differ only in
/// the descriptor variant they report (spec.md §4.4, "frozen-sets are
/// immutable sets — same algebra, different descriptor tag").
///
/// `element` is `None` for an empty descriptor (spec.md §4.4, "Empty
/// descriptor accepts only the empty list"): there's no child to build a
/// `OneOfStrategy` from (it requires at least one), so every operation
/// short-circuits around it to produce or accept only the empty set.
struct SetCore {
    element: Option<OneOfStrategy>,
}

impl SetCore {
    fn new(mut elements: Vec<Box<dyn Strategy>>) -> Self {
        // Deterministic order for determinism only (spec.md §4.4) — doesn't
        // affect which values can be drawn.
        elements.sort_by_key(|c| c.descriptor().canonical_key());
        Self {
            element: if elements.is_empty() {
                None
            } else {
                Some(OneOfStrategy::new(elements))
            },
        }
    }

    fn parameter(&self) -> Parameter {
        let child_parameter = match &self.element {
            Some(element) => element.parameter(),
            None => Parameter::Composite(Default::default()),
        };
        Parameter::composite([
            (
                "stopping_chance",
                Parameter::UniformFloat { low: 0.01, high: 0.25 },
            ),
            ("child_parameter", child_parameter),
        ])
    }

    fn size_lower_bound(&self) -> u64 {
        match &self.element {
            Some(element) => pow2_saturating(element.size_lower_bound()),
            None => 1,
        }
    }

    fn size_upper_bound(&self) -> u64 {
        match &self.element {
            Some(element) => pow2_saturating(element.size_upper_bound()),
            None => 1,
        }
    }

    fn produce_template(
        &self,
        rng: &mut dyn RngCore,
        pv: &ParameterValue,
    ) -> Result<Template, StrategyError> {
        let Some(element) = &self.element else {
            return Ok(Template::Set(Vec::new()));
        };
        let stopping_chance = pv.field("stopping_chance").as_f64();
        let child_pv = pv.field("child_parameter");

        let mut items: Vec<Template> = Vec::new();
        loop {
            if biased_coin(rng, stopping_chance) {
                break;
            }
            let t = element
                .produce_template(rng, child_pv)
                .map_err(|e| StrategyError::from_child(element.descriptor(), e))?;
            if !items.iter().any(|x| x.template_eq(&t)) {
                items.push(t);
            }
        }
        Ok(Template::Set(items))
    }

    fn reify(&self, template: &Template) -> Result<ReifiedValue, StrategyError> {
        let items = template.as_set().ok_or_else(|| {
            StrategyError::invalid_template(format!("expected a set template, found {template:?}"))
        })?;
        let Some(element) = &self.element else {
            if !items.is_empty() {
                return Err(StrategyError::invalid_template(
                    "empty-descriptor set template must be empty",
                ));
            }
            return Ok(ReifiedValue::Set(Vec::new()));
        };
        let mut out = Vec::with_capacity(items.len());
        for item in items {
            let v = element
                .reify(item)
                .map_err(|e| StrategyError::from_child(element.descriptor(), e))?;
            out.push(v);
        }
        Ok(ReifiedValue::Set(out))
    }

    fn decompose(&self, template: &Template) -> Result<Vec<(Descriptor, Template)>, StrategyError> {
        let items = template.as_set().ok_or_else(|| {
            StrategyError::invalid_template(format!("expected a set template, found {template:?}"))
        })?;
        let Some(element) = &self.element else {
            return Ok(Vec::new());
        };
        Ok(items.iter().map(|t| (element.descriptor(), t.clone())).collect())
    }

    /// Deterministic traversal order: the empty set first (if non-empty),
    /// then one-element deletions (each position, in index order), then
    /// element-level shrinks — any shrink that would collide with an
    /// existing member is dropped rather than silently merged, keeping
    /// every emitted candidate well-formed.
    fn simplify(&self, template: &Template) -> Box<dyn Iterator<Item = Template>> {
        let Some(element) = &self.element else {
            // Only the empty set is ever produced for an empty descriptor,
            // and the empty set has no simplifications.
            return Box::new(std::iter::empty());
        };
        let items = match template.as_set() {
            Some(items) => items.to_vec(),
            None => return Box::new(std::iter::empty()),
        };
        let len = items.len();

        let empty: Vec<Template> = if len > 0 {
            vec![Template::Set(Vec::new())]
        } else {
            Vec::new()
        };

        let delete_one: Vec<Template> = (0..len)
            .map(|i| {
                let mut rest = items.clone();
                rest.remove(i);
                Template::Set(rest)
            })
            .collect();

        let mut element_shrinks: Vec<Template> = Vec::new();
        for i in 0..len {
            for s in element.simplify(&items[i]) {
                let collides = items.iter().enumerate().any(|(j, x)| j != i && x.template_eq(&s));
                if collides {
                    continue;
                }
                let mut z = items.clone();
                z[i] = s;
                element_shrinks.push(Template::Set(z));
            }
        }

        Box::new(empty.into_iter().chain(delete_one).chain(element_shrinks))
    }

    fn to_basic(&self, template: &Template) -> BasicValue {
        let items = template.as_set().unwrap_or(&[]);
        let Some(element) = &self.element else {
            return BasicValue::Seq(Vec::new());
        };
        let mut basics: Vec<BasicValue> = items.iter().map(|t| element.to_basic(t)).collect();
        basics.sort_by(BasicValue::basic_cmp);
        BasicValue::Seq(basics)
    }

    fn from_basic(&self, basic: &BasicValue) -> Result<Template, StrategyError> {
        let entries = basic
            .as_seq()
            .ok_or_else(|| StrategyError::invalid_data("a list", format!("{basic:?}")))?;
        let Some(element) = &self.element else {
            if !entries.is_empty() {
                return Err(StrategyError::invalid_data(
                    "an empty list",
                    format!("a list of length {}", entries.len()),
                ));
            }
            return Ok(Template::Set(Vec::new()));
        };
        let mut items: Vec<Template> = Vec::new();
        for entry in entries {
            let t = element
                .from_basic(entry)
                .map_err(|e| StrategyError::from_child(element.descriptor(), e))?;
            if !items.iter().any(|x| x.template_eq(&t)) {
                items.push(t);
            }
        }
        Ok(Template::Set(items))
    }
}

/// A mutable, unordered collection of distinct elements.
pub struct SetStrategy {
    core: SetCore,
    elements_descriptor: Vec<Descriptor>,
}

impl SetStrategy {
    pub fn new(mut elements: Vec<Box<dyn Strategy>>) -> Self {
        elements.sort_by_key(|c| c.descriptor().canonical_key());
        let elements_descriptor = elements.iter().map(|c| c.descriptor()).collect();
        Self {
            core: SetCore::new(elements),
            elements_descriptor,
        }
    }
}

impl Strategy for SetStrategy {
    fn descriptor(&self) -> Descriptor {
        Descriptor::Set(self.elements_descriptor.clone())
    }
    fn parameter(&self) -> Parameter {
        self.core.parameter()
    }
    fn size_lower_bound(&self) -> u64 {
        self.core.size_lower_bound()
    }
    fn size_upper_bound(&self) -> u64 {
        self.core.size_upper_bound()
    }
    fn produce_template(
        &self,
        rng: &mut dyn RngCore,
        pv: &ParameterValue,
    ) -> Result<Template, StrategyError> {
        self.core.produce_template(rng, pv)
    }
    fn reify(&self, template: &Template) -> Result<ReifiedValue, StrategyError> {
        self.core.reify(template)
    }
    fn decompose(&self, template: &Template) -> Result<Vec<(Descriptor, Template)>, StrategyError> {
        self.core.decompose(template)
    }
    fn simplify(&self, template: &Template) -> Box<dyn Iterator<Item = Template>> {
        self.core.simplify(template)
    }
    fn to_basic(&self, template: &Template) -> BasicValue {
        self.core.to_basic(template)
    }
    fn from_basic(&self, basic: &BasicValue) -> Result<Template, StrategyError> {
        self.core.from_basic(basic)
    }
}

/// An immutable, unordered collection of distinct elements. Same algebra as
/// [`SetStrategy`]; only the descriptor tag differs.
pub struct FrozenSetStrategy {
    core: SetCore,
    elements_descriptor: Vec<Descriptor>,
}

impl FrozenSetStrategy {
    pub fn new(mut elements: Vec<Box<dyn Strategy>>) -> Self {
        elements.sort_by_key(|c| c.descriptor().canonical_key());
        let elements_descriptor = elements.iter().map(|c| c.descriptor()).collect();
        Self {
            core: SetCore::new(elements),
            elements_descriptor,
        }
    }
}

impl Strategy for FrozenSetStrategy {
    fn descriptor(&self) -> Descriptor {
        Descriptor::FrozenSet(self.elements_descriptor.clone())
    }
    fn parameter(&self) -> Parameter {
        self.core.parameter()
    }
    fn size_lower_bound(&self) -> u64 {
        self.core.size_lower_bound()
    }
    fn size_upper_bound(&self) -> u64 {
        self.core.size_upper_bound()
    }
    fn produce_template(
        &self,
        rng: &mut dyn RngCore,
        pv: &ParameterValue,
    ) -> Result<Template, StrategyError> {
        self.core.produce_template(rng, pv)
    }
    fn reify(&self, template: &Template) -> Result<ReifiedValue, StrategyError> {
        self.core.reify(template)
    }
    fn decompose(&self, template: &Template) -> Result<Vec<(Descriptor, Template)>, StrategyError> {
        self.core.decompose(template)
    }
    fn simplify(&self, template: &Template) -> Box<dyn Iterator<Item = Template>> {
        self.core.simplify(template)
    }
    fn to_basic(&self, template: &Template) -> BasicValue {
        self.core.to_basic(template)
    }
    fn from_basic(&self, basic: &BasicValue) -> Result<Template, StrategyError> {
        self.core.from_basic(basic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composite::descriptor::LeafKind;
    use crate::composite::leaves::{BoolLeaf, IntLeaf};
    use rand::thread_rng;

    fn int_set() -> SetStrategy {
        SetStrategy::new(vec![Box::new(IntLeaf::new(0, 20))])
    }

    fn set_of(xs: Vec<i64>) -> Template {
        Template::Set(xs.into_iter().map(|n| Template::Leaf(BasicValue::Int(n))).collect())
    }

    #[test]
    fn produce_template_never_contains_duplicates() {
        let s = int_set();
        let mut rng = thread_rng();
        for _ in 0..50 {
            let pv = s.parameter().draw(&mut rng);
            let t = s.produce_template(&mut rng, &pv).unwrap();
            let items = t.as_set().unwrap();
            for i in 0..items.len() {
                for j in (i + 1)..items.len() {
                    assert!(!items[i].template_eq(&items[j]));
                }
            }
        }
    }

    #[test]
    fn s5_nonempty_set_shrinks_toward_empty() {
        let s = int_set();
        let t = set_of(vec![3, 9]);
        let shrinks: Vec<_> = s.simplify(&t).collect();
        assert!(shrinks.iter().any(|c| c.as_set().map(|l| l.len()) == Some(1)));
    }

    #[test]
    fn s5_empty_set_is_yielded_first_and_original_never_reappears() {
        let s = int_set();
        let t = set_of(vec![3, 9]);
        let shrinks: Vec<_> = s.simplify(&t).collect();
        assert!(shrinks[0].template_eq(&set_of(vec![])));
        assert!(!shrinks.iter().any(|c| c.template_eq(&t)));
    }

    #[test]
    fn to_basic_is_sorted_and_deterministic() {
        let s = int_set();
        let t = set_of(vec![5, 1, 3]);
        let basic = s.to_basic(&t);
        assert_eq!(
            basic,
            BasicValue::Seq(vec![BasicValue::Int(1), BasicValue::Int(3), BasicValue::Int(5)])
        );
    }

    #[test]
    fn from_basic_dedups() {
        let s = int_set();
        let basic = BasicValue::Seq(vec![BasicValue::Int(1), BasicValue::Int(1), BasicValue::Int(2)]);
        let t = s.from_basic(&basic).unwrap();
        assert_eq!(t.as_set().unwrap().len(), 2);
    }

    #[test]
    fn frozen_set_reports_frozen_descriptor() {
        let s = FrozenSetStrategy::new(vec![Box::new(IntLeaf::new(0, 5))]);
        assert!(matches!(s.descriptor(), Descriptor::FrozenSet(_)));
    }

    #[test]
    fn size_bounds_are_two_to_the_power_of_the_childs_bounds() {
        // IntLeaf doesn't override the trait's 1/1 default, so 2^1 == 2.
        let s = int_set();
        assert_eq!(s.size_lower_bound(), 2);
        assert_eq!(s.size_upper_bound(), 2);
        assert!(s.size_lower_bound() <= s.size_upper_bound());
    }

    #[test]
    fn stopping_chance_is_drawn_from_the_spec_range() {
        let s = int_set();
        let mut rng = thread_rng();
        for _ in 0..100 {
            let pv = s.parameter().draw(&mut rng);
            let chance = pv.field("stopping_chance").as_f64();
            assert!((0.01..0.25).contains(&chance), "{chance} out of spec range");
        }
    }

    #[test]
    fn multi_child_descriptor_order_is_sorted_regardless_of_input_order() {
        let a = SetStrategy::new(vec![Box::new(BoolLeaf::new()), Box::new(IntLeaf::new(0, 10))]);
        let b = SetStrategy::new(vec![Box::new(IntLeaf::new(0, 10)), Box::new(BoolLeaf::new())]);
        assert_eq!(a.descriptor(), b.descriptor());
        assert!(matches!(a.descriptor(), Descriptor::Set(children) if children == vec![
            Descriptor::Leaf(LeafKind::Bool),
            Descriptor::Leaf(LeafKind::Int),
        ]));
    }

    #[test]
    fn empty_descriptor_only_ever_produces_the_empty_set() {
        let s = SetStrategy::new(Vec::new());
        let pv = s.parameter().draw(&mut thread_rng());
        let t = s.produce_template(&mut thread_rng(), &pv).unwrap();
        assert!(t.template_eq(&set_of(vec![])));
        assert_eq!(s.size_lower_bound(), 1);
        assert_eq!(s.size_upper_bound(), 1);
    }

    #[test]
    fn empty_descriptor_has_no_simplifications() {
        let s = SetStrategy::new(Vec::new());
        assert_eq!(s.simplify(&set_of(vec![])).count(), 0);
    }

    #[test]
    fn empty_descriptor_round_trips_and_rejects_nonempty_basic() {
        let s = SetStrategy::new(Vec::new());
        let t = set_of(vec![]);
        assert_eq!(s.to_basic(&t), BasicValue::Seq(Vec::new()));
        let back = s.from_basic(&BasicValue::Seq(Vec::new())).unwrap();
        assert!(t.template_eq(&back));
        assert!(s.from_basic(&BasicValue::Seq(vec![BasicValue::Int(1)])).is_err());
    }
}
