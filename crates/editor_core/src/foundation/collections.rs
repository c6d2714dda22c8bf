//! Specialized collection types

pub use slotmap::{new_key_type, Key, SlotMap};

/// Handle-based map using a slot map for stable, generational references
///
/// Keys handed out by a `HandleMap` stay unique across removals: a key for
/// a removed slot never matches a value inserted later into the same slot.
/// The scene graph relies on this to detect stale object references.
pub type HandleMap<K, V> = SlotMap<K, V>;
