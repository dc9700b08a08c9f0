//! Tuple / record strategy (spec.md §4.2).

use rand::RngCore;

use super::basic::BasicValue;
use super::descriptor::{Descriptor, TupleKind};
use super::error::StrategyError;
use super::mix::mix_generators;
use super::parameter::{Parameter, ParameterValue};
use super::strategy::Strategy;
use super::template::{ReifiedValue, Template};

/// A fixed heterogeneous product over N child strategies.
pub struct TupleStrategy {
    children: Vec<Box<dyn Strategy>>,
    kind: TupleKind,
}

impl TupleStrategy {
    pub fn new(children: Vec<Box<dyn Strategy>>, kind: TupleKind) -> Self {
        Self { children, kind }
    }

    fn field_key(i: usize) -> String {
        i.to_string()
    }
}

impl Strategy for TupleStrategy {
    fn descriptor(&self) -> Descriptor {
        Descriptor::Tuple(
            self.children.iter().map(|c| c.descriptor()).collect(),
            self.kind,
        )
    }

    fn parameter(&self) -> Parameter {
        Parameter::Composite(
            self.children
                .iter()
                .enumerate()
                .map(|(i, c)| (Self::field_key(i), c.parameter()))
                .collect(),
        )
    }

    fn size_lower_bound(&self) -> u64 {
        self.children.iter().map(|c| c.size_lower_bound()).product()
    }

    fn size_upper_bound(&self) -> u64 {
        self.children.iter().map(|c| c.size_upper_bound()).product()
    }

    fn produce_template(
        &self,
        rng: &mut dyn RngCore,
        pv: &ParameterValue,
    ) -> Result<Template, StrategyError> {
        let mut parts = Vec::with_capacity(self.children.len());
        for (i, child) in self.children.iter().enumerate() {
            let child_pv = pv.field(&Self::field_key(i));
            let t = child
                .produce_template(rng, child_pv)
                .map_err(|e| StrategyError::from_child(child.descriptor(), e))?;
            parts.push(t);
        }
        Ok(Template::Tuple(parts))
    }

    fn reify(&self, template: &Template) -> Result<ReifiedValue, StrategyError> {
        let parts = template.as_tuple().ok_or_else(|| {
            StrategyError::invalid_template(format!("expected a tuple template, found {template:?}"))
        })?;
        if parts.len() != self.children.len() {
            return Err(StrategyError::invalid_template(format!(
                "tuple template has {} elements, strategy expects {}",
                parts.len(),
                self.children.len()
            )));
        }
        let mut out = Vec::with_capacity(parts.len());
        for (child, part) in self.children.iter().zip(parts) {
            let v = child
                .reify(part)
                .map_err(|e| StrategyError::from_child(child.descriptor(), e))?;
            out.push(v);
        }
        Ok(ReifiedValue::Tuple(out))
    }

    fn decompose(&self, template: &Template) -> Result<Vec<(Descriptor, Template)>, StrategyError> {
        let parts = template.as_tuple().ok_or_else(|| {
            StrategyError::invalid_template(format!("expected a tuple template, found {template:?}"))
        })?;
        Ok(self
            .children
            .iter()
            .zip(parts)
            .map(|(c, t)| (c.descriptor(), t.clone()))
            .collect())
    }

    fn simplify(&self, template: &Template) -> Box<dyn Iterator<Item = Template>> {
        let parts = match template.as_tuple() {
            Some(p) => p.to_vec(),
            None => return Box::new(std::iter::empty()),
        };

        let mut generators: Vec<Box<dyn Iterator<Item = Template>>> = Vec::new();
        for i in 0..parts.len() {
            let child_shrinks: Vec<Template> = self.children[i].simplify(&parts[i]).collect();
            let base = parts.clone();
            let index = i;
            generators.push(Box::new(child_shrinks.into_iter().map(move |s| {
                let mut z = base.clone();
                z[index] = s;
                Template::Tuple(z)
            })));
        }

        if generators.is_empty() {
            return Box::new(std::iter::empty());
        }
        Box::new(mix_generators(generators))
    }

    fn to_basic(&self, template: &Template) -> BasicValue {
        let parts = template.as_tuple().unwrap_or(&[]);
        BasicValue::Seq(
            self.children
                .iter()
                .zip(parts)
                .map(|(c, t)| c.to_basic(t))
                .collect(),
        )
    }

    fn from_basic(&self, basic: &BasicValue) -> Result<Template, StrategyError> {
        let items = basic
            .as_seq()
            .ok_or_else(|| StrategyError::invalid_data("a list", format!("{basic:?}")))?;
        if items.len() != self.children.len() {
            return Err(StrategyError::invalid_data(
                format!("a list of length {}", self.children.len()),
                format!("a list of length {}", items.len()),
            ));
        }
        let mut parts = Vec::with_capacity(items.len());
        for (child, item) in self.children.iter().zip(items) {
            let t = child
                .from_basic(item)
                .map_err(|e| StrategyError::from_child(child.descriptor(), e))?;
            parts.push(t);
        }
        Ok(Template::Tuple(parts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composite::leaves::IntLeaf;
    use crate::composite::template::Template;
    use rand::thread_rng;

    fn int_tuple(children: usize) -> TupleStrategy {
        TupleStrategy::new(
            (0..children).map(|_| Box::new(IntLeaf::new(0, 10)) as Box<dyn Strategy>).collect(),
            TupleKind::Plain,
        )
    }

    #[test]
    fn size_bounds_multiply_children() {
        let s = int_tuple(3);
        assert_eq!(s.size_lower_bound(), 1);
        assert_eq!(s.size_upper_bound(), 1);
    }

    #[test]
    fn s1_tuple_of_ints_shrinks_one_position_at_a_time() {
        use crate::composite::basic::BasicValue;

        let s = int_tuple(2);
        let t = Template::Tuple(vec![
            Template::Leaf(BasicValue::Int(7)),
            Template::Leaf(BasicValue::Int(3)),
        ]);

        let shrinks: Vec<_> = s.simplify(&t).collect();
        assert!(!shrinks.is_empty());

        for candidate in &shrinks {
            assert!(!candidate.template_eq(&t), "simplify must never re-emit the input");
            let parts = candidate.as_tuple().unwrap();
            assert_eq!(parts.len(), 2, "length must never change");
        }

        // Both positions are represented among the shrinks.
        let changes_first = shrinks.iter().any(|c| {
            let p = c.as_tuple().unwrap();
            matches!(p[0], Template::Leaf(BasicValue::Int(v)) if v != 7) && matches!(p[1], Template::Leaf(BasicValue::Int(3)))
        });
        let changes_second = shrinks.iter().any(|c| {
            let p = c.as_tuple().unwrap();
            matches!(p[0], Template::Leaf(BasicValue::Int(7))) && matches!(p[1], Template::Leaf(BasicValue::Int(v)) if v != 3)
        });
        assert!(changes_first);
        assert!(changes_second);
    }

    #[test]
    fn round_trips_through_basic_form() {
        let s = int_tuple(2);
        let pv = s.parameter().draw(&mut thread_rng());
        let t = s.produce_template(&mut thread_rng(), &pv).unwrap();
        let basic = s.to_basic(&t);
        let back = s.from_basic(&basic).unwrap();
        assert!(t.template_eq(&back));
    }

    #[test]
    fn from_basic_rejects_wrong_length() {
        let s = int_tuple(2);
        let basic = BasicValue::Seq(vec![BasicValue::Int(1)]);
        assert!(s.from_basic(&basic).is_err());
    }

    #[test]
    fn decompose_pairs_children_with_descriptors() {
        let s = int_tuple(2);
        let t = Template::Tuple(vec![
            Template::Leaf(BasicValue::Int(1)),
            Template::Leaf(BasicValue::Int(2)),
        ]);
        let parts = s.decompose(&t).unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].0, s.children[0].descriptor());
    }
}
