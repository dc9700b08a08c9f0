//! The `one_of_strategies` combinator spec.md §6 requires from the leaf
//! layer: unions a non-empty collection of strategies into one strategy
//! whose descriptor is the ordered sequence of child descriptors and whose
//! template draws pick a child uniformly.
//!
//! Not itself one of the four composite strategies in spec.md §4 — `List`
//! and `Set` each build one internally to draw/shrink/serialize their
//! (possibly heterogeneous) elements.

use rand::Rng;
use rand::RngCore;

use super::basic::BasicValue;
use super::descriptor::Descriptor;
use super::error::StrategyError;
use super::parameter::{Parameter, ParameterValue};
use super::strategy::Strategy;
use super::template::{ReifiedValue, Template};

/// Unions `children` into a single element strategy. With more than one
/// child, templates are tagged with the index of the child that produced
/// them (`Template::Tuple([tag, inner])`) so `reify`/`simplify`/`to_basic`
/// know which child to delegate to — an implementation detail invisible to
/// callers, which only ever see this as one opaque child strategy. With
/// exactly one child there's no ambiguity to tag away, so every operation
/// passes the template through unwrapped, matching the shape that child's
/// own `produce_template` emits.
pub struct OneOfStrategy {
    children: Vec<Box<dyn Strategy>>,
}

impl OneOfStrategy {
    pub fn new(children: Vec<Box<dyn Strategy>>) -> Self {
        assert!(!children.is_empty(), "one_of_strategies requires at least one strategy");
        Self { children }
    }

    /// With a single child there's nothing to disambiguate: the template is
    /// already in the shape that child's own `produce_template` emits, and
    /// tagging it would just be a wrapper every caller has to strip back
    /// off. Only a genuine union (more than one child) needs the tag.
    fn tag(&self, index: usize, inner: Template) -> Template {
        if self.children.len() == 1 {
            return inner;
        }
        Template::Tuple(vec![Template::Leaf(BasicValue::Int(index as i64)), inner])
    }

    fn untag<'a>(&self, template: &'a Template) -> Result<(usize, &'a Template), StrategyError> {
        if self.children.len() == 1 {
            return Ok((0, template));
        }
        match template.as_tuple() {
            Some([Template::Leaf(BasicValue::Int(tag)), inner]) => Ok((*tag as usize, inner)),
            _ => Err(StrategyError::invalid_template(format!(
                "expected a tagged one-of template, found {template:?}"
            ))),
        }
    }
}

impl Strategy for OneOfStrategy {
    fn descriptor(&self) -> Descriptor {
        Descriptor::List(self.children.iter().map(|c| c.descriptor()).collect())
    }

    fn parameter(&self) -> Parameter {
        Parameter::Composite(
            self.children
                .iter()
                .enumerate()
                .map(|(i, c)| (i.to_string(), c.parameter()))
                .collect(),
        )
    }

    fn size_lower_bound(&self) -> u64 {
        self.children.iter().map(|c| c.size_lower_bound()).sum()
    }

    fn size_upper_bound(&self) -> u64 {
        self.children.iter().map(|c| c.size_upper_bound()).sum()
    }

    fn produce_template(
        &self,
        rng: &mut dyn RngCore,
        pv: &ParameterValue,
    ) -> Result<Template, StrategyError> {
        let index = rng.gen_range(0..self.children.len());
        let child = &self.children[index];
        let child_pv = pv.field(&index.to_string());
        let inner = child
            .produce_template(rng, child_pv)
            .map_err(|e| StrategyError::from_child(child.descriptor(), e))?;
        Ok(self.tag(index, inner))
    }

    fn reify(&self, template: &Template) -> Result<ReifiedValue, StrategyError> {
        let (index, inner) = self.untag(template)?;
        let child = self
            .children
            .get(index)
            .ok_or_else(|| StrategyError::invalid_template(format!("no child at index {index}")))?;
        child.reify(inner).map_err(|e| StrategyError::from_child(child.descriptor(), e))
    }

    fn decompose(&self, template: &Template) -> Result<Vec<(Descriptor, Template)>, StrategyError> {
        let (index, inner) = self.untag(template)?;
        let child = self
            .children
            .get(index)
            .ok_or_else(|| StrategyError::invalid_template(format!("no child at index {index}")))?;
        Ok(vec![(child.descriptor(), inner.clone())])
    }

    fn simplify(&self, template: &Template) -> Box<dyn Iterator<Item = Template>> {
        let (index, inner) = match self.untag(template) {
            Ok(v) => v,
            Err(_) => return Box::new(std::iter::empty()),
        };
        let child_shrinks: Vec<Template> = self.children[index].simplify(inner).collect();
        let single = self.children.len() == 1;
        Box::new(child_shrinks.into_iter().map(move |s| {
            if single {
                s
            } else {
                Template::Tuple(vec![Template::Leaf(BasicValue::Int(index as i64)), s])
            }
        }))
    }

    fn to_basic(&self, template: &Template) -> BasicValue {
        match self.untag(template) {
            Ok((index, inner)) => {
                let child_basic = self.children[index].to_basic(inner);
                if self.children.len() == 1 {
                    child_basic
                } else {
                    BasicValue::Seq(vec![BasicValue::Int(index as i64), child_basic])
                }
            }
            Err(_) => BasicValue::Null,
        }
    }

    fn from_basic(&self, basic: &BasicValue) -> Result<Template, StrategyError> {
        if self.children.len() == 1 {
            let child = &self.children[0];
            let inner_t = child
                .from_basic(basic)
                .map_err(|e| StrategyError::from_child(child.descriptor(), e))?;
            return Ok(self.tag(0, inner_t));
        }
        match basic.as_seq() {
            Some([BasicValue::Int(tag), inner]) => {
                let index = *tag as usize;
                let child = self
                    .children
                    .get(index)
                    .ok_or_else(|| StrategyError::invalid_data("a valid child tag", format!("{tag}")))?;
                let inner_t = child
                    .from_basic(inner)
                    .map_err(|e| StrategyError::from_child(child.descriptor(), e))?;
                Ok(self.tag(index, inner_t))
            }
            other => Err(StrategyError::invalid_data("[tag, inner]", format!("{other:?}"))),
        }
    }
}
