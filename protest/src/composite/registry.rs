//! Dispatch registry (spec.md §4.7).

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::config::GeneratorConfig;

use super::descriptor::{Descriptor, DescriptorKind, LeafKind};
use super::leaves::{BoolLeaf, IntLeaf, StringLeaf};
use super::list::ListStrategy;
use super::map::FixedKeysMapStrategy;
use super::set::{FrozenSetStrategy, SetStrategy};
use super::strategy::Strategy;
use super::tuple::TupleStrategy;

/// A factory that builds a strategy for a descriptor of a registered kind,
/// recursing into `registry` to resolve any child descriptors it needs.
pub type StrategyFactory =
    Arc<dyn Fn(&Descriptor, &StrategyRegistry) -> Box<dyn Strategy> + Send + Sync>;

/// Maps a [`DescriptorKind`] to the factory that builds strategies for it.
///
/// Mirrors `crate::generator::GeneratorRegistry`'s shape (`register`/`get`/
/// `contains`), keyed by descriptor kind rather than `TypeId` since this
/// layer dispatches on descriptors, not Rust types. Open for extension:
/// nothing here is hardwired to the four built-in composite kinds.
#[derive(Default, Clone)]
pub struct StrategyRegistry {
    factories: HashMap<DescriptorKind, StrategyFactory>,
}

impl StrategyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, kind: DescriptorKind, factory: StrategyFactory) {
        self.factories.insert(kind, factory);
    }

    pub fn contains(&self, kind: DescriptorKind) -> bool {
        self.factories.contains_key(&kind)
    }

    /// Build a strategy for `descriptor` by looking up the factory for its
    /// kind. The factory itself is responsible for recursing into
    /// `descriptor`'s children, calling back into this registry for each.
    pub fn build(&self, descriptor: &Descriptor) -> Option<Box<dyn Strategy>> {
        let factory = self.factories.get(&descriptor.kind())?;
        Some(factory(descriptor, self))
    }
}

/// Builds the registry this crate ships: the three adapted leaves (spec.md
/// §6) plus the four composite kinds (spec.md §4.2-§4.5), wired so each
/// recurses into the registry for its children. `config.average_list_length`
/// is the one setting spec.md §6 says the core reads; it's captured here so
/// every `List` descriptor built through this registry honors it.
pub fn default_registry(config: &GeneratorConfig) -> StrategyRegistry {
    let mut registry = StrategyRegistry::new();
    let average_list_length = config.average_list_length;

    registry.register(
        DescriptorKind::Leaf(LeafKind::Int),
        Arc::new(|_d, _r| Box::new(IntLeaf::new(i64::MIN, i64::MAX)) as Box<dyn Strategy>),
    );
    registry.register(
        DescriptorKind::Leaf(LeafKind::Bool),
        Arc::new(|_d, _r| Box::new(BoolLeaf::new()) as Box<dyn Strategy>),
    );
    registry.register(
        DescriptorKind::Leaf(LeafKind::Str),
        Arc::new(|_d, _r| Box::new(StringLeaf::new(0, 50)) as Box<dyn Strategy>),
    );

    registry.register(
        DescriptorKind::Tuple,
        Arc::new(|d, r| {
            let Descriptor::Tuple(children, kind) = d else {
                unreachable!("Tuple factory only ever sees Descriptor::Tuple")
            };
            let built = build_children(r, children);
            Box::new(TupleStrategy::new(built, *kind)) as Box<dyn Strategy>
        }),
    );

    registry.register(
        DescriptorKind::List,
        Arc::new(move |d, r| {
            let Descriptor::List(children) = d else {
                unreachable!("List factory only ever sees Descriptor::List")
            };
            let built = build_children(r, children);
            Box::new(ListStrategy::with_average_length(built, average_list_length)) as Box<dyn Strategy>
        }),
    );

    registry.register(
        DescriptorKind::Set,
        Arc::new(|d, r| {
            let Descriptor::Set(children) = d else {
                unreachable!("Set factory only ever sees Descriptor::Set")
            };
            let built = build_children(r, children);
            Box::new(SetStrategy::new(built)) as Box<dyn Strategy>
        }),
    );

    registry.register(
        DescriptorKind::FrozenSet,
        Arc::new(|d, r| {
            let Descriptor::FrozenSet(children) = d else {
                unreachable!("FrozenSet factory only ever sees Descriptor::FrozenSet")
            };
            let built = build_children(r, children);
            Box::new(FrozenSetStrategy::new(built)) as Box<dyn Strategy>
        }),
    );

    registry.register(
        DescriptorKind::Map,
        Arc::new(|d, r| {
            let Descriptor::Map(fields) = d else {
                unreachable!("Map factory only ever sees Descriptor::Map")
            };
            let built: BTreeMap<String, Box<dyn Strategy>> = fields
                .iter()
                .map(|(k, child)| (k.clone(), r.build(child).expect("child kind must be registered")))
                .collect();
            Box::new(FixedKeysMapStrategy::new(built)) as Box<dyn Strategy>
        }),
    );

    registry
}

fn build_children(registry: &StrategyRegistry, children: &[Descriptor]) -> Vec<Box<dyn Strategy>> {
    children
        .iter()
        .map(|c| registry.build(c).expect("child kind must be registered"))
        .collect()
}
