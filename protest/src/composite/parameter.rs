//! The two-level parameter model (spec.md §2.1, §3).
//!
//! A [`Parameter`] names a distribution (or a record of named
//! sub-distributions); drawing from it once per example session produces a
//! [`ParameterValue`] — the concrete bias that every `produce_template` call
//! in that session draws templates under.

use std::collections::BTreeMap;

use rand::Rng;

/// An undrawn distribution descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum Parameter {
    /// Exponential distribution with the given rate (mean = 1/rate).
    Exponential { rate: f64 },
    /// Uniform distribution over `[low, high]`.
    UniformFloat { low: f64, high: f64 },
    /// A record of named sub-parameters, each drawn independently.
    Composite(BTreeMap<String, Parameter>),
}

/// A concrete draw from a [`Parameter`]. Immutable once drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValue {
    Exponential(f64),
    UniformFloat(f64),
    Composite(BTreeMap<String, ParameterValue>),
}

impl Parameter {
    pub fn composite(fields: impl IntoIterator<Item = (&'static str, Parameter)>) -> Self {
        Parameter::Composite(fields.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }

    /// Draw a single value from this parameter. Composite parameters draw
    /// each field independently (spec.md §2.1).
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> ParameterValue {
        match self {
            Parameter::Exponential { rate } => {
                // Inverse-CDF sampling: -ln(U) / rate, U uniform in (0, 1].
                let u: f64 = rng.gen_range(f64::MIN_POSITIVE..=1.0);
                ParameterValue::Exponential(-u.ln() / rate)
            }
            Parameter::UniformFloat { low, high } => {
                ParameterValue::UniformFloat(rng.gen_range(*low..*high))
            }
            Parameter::Composite(fields) => ParameterValue::Composite(
                fields.iter().map(|(k, v)| (k.clone(), v.draw(rng))).collect(),
            ),
        }
    }
}

impl ParameterValue {
    pub fn as_f64(&self) -> f64 {
        match self {
            ParameterValue::Exponential(v) | ParameterValue::UniformFloat(v) => *v,
            ParameterValue::Composite(_) => {
                panic!("as_f64 called on a composite parameter value")
            }
        }
    }

    /// Look up a named field of a composite parameter value.
    pub fn field(&self, name: &str) -> &ParameterValue {
        match self {
            ParameterValue::Composite(fields) => fields
                .get(name)
                .unwrap_or_else(|| panic!("parameter value has no field `{name}`")),
            _ => panic!("field(\"{name}\") called on a non-composite parameter value"),
        }
    }
}

/// Draw a geometrically-distributed length with the given mean, the way
/// `ListStrategy::produce_template` needs (spec.md §4.3).
pub fn geometric<R: Rng + ?Sized>(rng: &mut R, mean: f64) -> usize {
    let p = 1.0 / (1.0 + mean.max(0.0));
    let mut length = 0usize;
    loop {
        if rng.gen_range(0.0..1.0) < p {
            return length;
        }
        length += 1;
    }
}

/// A single biased coin flip, the way `SetStrategy::produce_template` needs
/// to decide whether to keep drawing more elements (spec.md §4.4).
pub fn biased_coin<R: Rng + ?Sized>(rng: &mut R, chance_of_true: f64) -> bool {
    rng.gen_range(0.0..1.0) < chance_of_true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::thread_rng;

    #[test]
    fn composite_parameter_draws_each_field_independently() {
        let p = Parameter::composite([
            ("average_length", Parameter::Exponential { rate: 1.0 / 50.0 }),
            (
                "child_parameter",
                Parameter::UniformFloat {
                    low: 0.01,
                    high: 0.25,
                },
            ),
        ]);
        let mut rng = thread_rng();
        let pv = p.draw(&mut rng);
        let avg = pv.field("average_length").as_f64();
        let child = pv.field("child_parameter").as_f64();
        assert!(avg >= 0.0);
        assert!((0.01..0.25).contains(&child));
    }

    #[test]
    #[should_panic(expected = "as_f64 called on a composite")]
    fn as_f64_panics_on_composite() {
        let p = Parameter::composite([("a", Parameter::Exponential { rate: 1.0 })]);
        p.draw(&mut thread_rng()).as_f64();
    }

    #[test]
    fn geometric_respects_mean_trend() {
        let mut rng = thread_rng();
        let mut total = 0usize;
        let n = 2000;
        for _ in 0..n {
            total += geometric(&mut rng, 5.0);
        }
        let observed_mean = total as f64 / n as f64;
        assert!(
            (observed_mean - 5.0).abs() < 2.0,
            "observed mean {observed_mean} should be near 5.0"
        );
    }

    #[test]
    fn biased_coin_is_biased() {
        let mut rng = thread_rng();
        let trues = (0..2000).filter(|_| biased_coin(&mut rng, 0.9)).count();
        assert!(trues > 1500, "expected mostly true with chance 0.9, got {trues}/2000");
    }
}
