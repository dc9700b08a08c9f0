//! The composite strategy contract (spec.md §4.1).

use rand::RngCore;

use super::basic::BasicValue;
use super::descriptor::Descriptor;
use super::error::StrategyError;
use super::parameter::{Parameter, ParameterValue};
use super::template::{ReifiedValue, Template};

/// Every composite strategy exposes a descriptor, a parameter, size bounds,
/// and the six template operations. Object-safe so composites can hold
/// their children as `Box<dyn Strategy>` (spec.md §9, "dynamic dispatch on
/// descriptor").
pub trait Strategy {
    /// The value-space this strategy names.
    fn descriptor(&self) -> Descriptor;

    /// What must be drawn before templates can be produced.
    fn parameter(&self) -> Parameter;

    /// Strategy-static estimates of the number of distinct templates.
    /// Defaults are 1/1 for constant-shape containers with no children.
    fn size_lower_bound(&self) -> u64 {
        1
    }
    fn size_upper_bound(&self) -> u64 {
        1
    }

    /// Draw a fresh random template under the given parameter value.
    fn produce_template(
        &self,
        rng: &mut dyn RngCore,
        pv: &ParameterValue,
    ) -> Result<Template, StrategyError>;

    /// Convert a template to a user-visible value. Pure and deterministic.
    fn reify(&self, template: &Template) -> Result<ReifiedValue, StrategyError>;

    /// Expose structural sub-parts for cross-strategy inspection.
    fn decompose(&self, template: &Template) -> Result<Vec<(Descriptor, Template)>, StrategyError>;

    /// Lazily enumerate templates that are, heuristically, smaller than
    /// `template`. Must be finite and must never re-emit `template` itself.
    fn simplify(&self, template: &Template) -> Box<dyn Iterator<Item = Template>>;

    /// Serialize to the neutral basic form.
    fn to_basic(&self, template: &Template) -> BasicValue;

    /// Deserialize from the neutral basic form.
    fn from_basic(&self, basic: &BasicValue) -> Result<Template, StrategyError>;
}
