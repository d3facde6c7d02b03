//! Hash map and set aliases used across Grafos.
//!
//! `hashbrown` tables keyed with `ahash`. Vertex ids are small integers, so a
//! fast non-cryptographic hasher is all that is needed.

/// Fast hash map.
pub type FxHashMap<K, V> = hashbrown::HashMap<K, V, ahash::RandomState>;

/// Fast hash set.
pub type FxHashSet<T> = hashbrown::HashSet<T, ahash::RandomState>;
