use std::hash::BuildHasherDefault;
use indexmap::IndexMap;
use rustc_hash::FxHasher;

pub(crate) use rustc_hash::{FxHashMap, FxHashSet};


/// Use indexmap for fast lookups and rustc_hash for fast hashing
/// The index of an entry doubles as the dense id of a graph node
pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;
