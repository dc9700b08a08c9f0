//! Descriptors: value-level names for value spaces (spec.md §3).

use std::collections::BTreeMap;

/// The leaf kinds this workspace provides behind the composite contract.
/// Real leaf generation lives in `crate::primitives`; `composite::leaves`
/// adapts a handful of those generators for the composite algebra to build
/// on. Extending this enum is the seam for adding more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LeafKind {
    Int,
    Bool,
    Str,
}

impl LeafKind {
    fn printable(self) -> &'static str {
        match self {
            LeafKind::Int => "int",
            LeafKind::Bool => "bool",
            LeafKind::Str => "str",
        }
    }
}

/// How a tuple descriptor's reified value should be constructed: a plain
/// positional tuple, or a named record (the field names aren't tracked here
/// since this layer reifies structurally; `Record` only exists so the
/// descriptor can distinguish the two shapes, per the "container-type
/// preservation" design note in spec.md §9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TupleKind {
    Plain,
    Record(&'static str),
}

/// A value-space name. Descriptors are compared by value, have no identity,
/// and are immutable (spec.md §3).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Descriptor {
    Leaf(LeafKind),
    Tuple(Vec<Descriptor>, TupleKind),
    List(Vec<Descriptor>),
    Set(Vec<Descriptor>),
    FrozenSet(Vec<Descriptor>),
    Map(BTreeMap<String, Descriptor>),
}

/// The tag a [`crate::composite::registry::StrategyRegistry`] dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptorKind {
    Leaf(LeafKind),
    Tuple,
    List,
    Set,
    FrozenSet,
    Map,
}

impl Descriptor {
    pub fn kind(&self) -> DescriptorKind {
        match self {
            Descriptor::Leaf(k) => DescriptorKind::Leaf(*k),
            Descriptor::Tuple(..) => DescriptorKind::Tuple,
            Descriptor::List(_) => DescriptorKind::List,
            Descriptor::Set(_) => DescriptorKind::Set,
            Descriptor::FrozenSet(_) => DescriptorKind::FrozenSet,
            Descriptor::Map(_) => DescriptorKind::Map,
        }
    }

    /// A stable, printable form used only to derive deterministic orderings
    /// (spec.md §4.4, §4.5) — never for equality, which uses `PartialEq`.
    pub fn canonical_key(&self) -> String {
        match self {
            Descriptor::Leaf(k) => k.printable().to_string(),
            Descriptor::Tuple(children, kind) => {
                let inner = children
                    .iter()
                    .map(Descriptor::canonical_key)
                    .collect::<Vec<_>>()
                    .join(",");
                match kind {
                    TupleKind::Plain => format!("tuple({inner})"),
                    TupleKind::Record(name) => format!("record:{name}({inner})"),
                }
            }
            Descriptor::List(children) => {
                let inner = children
                    .iter()
                    .map(Descriptor::canonical_key)
                    .collect::<Vec<_>>()
                    .join(",");
                format!("list[{inner}]")
            }
            Descriptor::Set(children) => {
                let inner = children
                    .iter()
                    .map(Descriptor::canonical_key)
                    .collect::<Vec<_>>()
                    .join(",");
                format!("set[{inner}]")
            }
            Descriptor::FrozenSet(children) => {
                let inner = children
                    .iter()
                    .map(Descriptor::canonical_key)
                    .collect::<Vec<_>>()
                    .join(",");
                format!("frozenset[{inner}]")
            }
            Descriptor::Map(fields) => {
                let inner = fields
                    .iter()
                    .map(|(k, v)| format!("{k}:{}", v.canonical_key()))
                    .collect::<Vec<_>>()
                    .join(",");
                format!("map{{{inner}}}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_key_is_stable_and_distinguishes_shapes() {
        let a = Descriptor::Tuple(
            vec![Descriptor::Leaf(LeafKind::Int), Descriptor::Leaf(LeafKind::Int)],
            TupleKind::Plain,
        );
        let b = a.clone();
        assert_eq!(a.canonical_key(), b.canonical_key());

        let list = Descriptor::List(vec![Descriptor::Leaf(LeafKind::Int)]);
        assert_ne!(a.canonical_key(), list.canonical_key());
    }

    #[test]
    fn kind_matches_shape() {
        assert_eq!(Descriptor::Leaf(LeafKind::Bool).kind(), DescriptorKind::Leaf(LeafKind::Bool));
        assert_eq!(Descriptor::List(vec![]).kind(), DescriptorKind::List);
        assert_eq!(Descriptor::Set(vec![]).kind(), DescriptorKind::Set);
        assert_eq!(Descriptor::FrozenSet(vec![]).kind(), DescriptorKind::FrozenSet);
        assert_eq!(Descriptor::Map(BTreeMap::new()).kind(), DescriptorKind::Map);
    }

    #[test]
    fn descriptors_compare_by_value_not_identity() {
        let d1 = Descriptor::Leaf(LeafKind::Int);
        let d2 = Descriptor::Leaf(LeafKind::Int);
        assert_eq!(d1, d2);
    }
}
