//! The descriptor-driven strategy algebra: `Descriptor` names a value
//! space, a `Strategy` built over it can draw, shrink, decompose, and
//! serialize `Template`s for that space.
//!
//! Distinct from — and not wired into — the ergonomic `crate::strategy`
//! combinator layer (`Map`/`Filter`/`Zip`/...) elsewhere in this crate;
//! `composite::Strategy` is its own, structurally different contract, built
//! for dynamic dispatch over heterogeneous children rather than static
//! combinator chaining.

pub mod basic;
pub mod descriptor;
pub mod error;
pub mod leaves;
pub mod list;
pub mod map;
pub mod mix;
pub mod one_of;
pub mod parameter;
pub mod registry;
pub mod set;
pub mod strategy;
pub mod template;
pub mod tuple;

pub use basic::BasicValue;
pub use descriptor::{Descriptor, DescriptorKind, LeafKind, TupleKind};
pub use error::StrategyError;
pub use leaves::{BoolLeaf, IntLeaf, StringLeaf};
pub use list::ListStrategy;
pub use map::FixedKeysMapStrategy;
pub use mix::mix_generators;
pub use one_of::OneOfStrategy;
pub use parameter::{Parameter, ParameterValue};
pub use registry::{default_registry, StrategyRegistry};
pub use set::{FrozenSetStrategy, SetStrategy};
pub use strategy::Strategy;
pub use template::{ReifiedValue, Template};
pub use tuple::TupleStrategy;
