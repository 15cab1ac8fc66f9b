//! Process-wide cache of member lists, keyed by type.
//!
//! Types are immutable keys shared by every comparison, so the cache is a
//! concurrent map that any thread may read or populate. A racing populate
//! keeps whichever list was inserted first.

use super::MemberDescriptor;
use dashmap::DashMap;
use std::any::TypeId;
use std::sync::{Arc, OnceLock};

static SHAPES: OnceLock<DashMap<TypeId, Arc<[MemberDescriptor]>>> = OnceLock::new();

fn shapes() -> &'static DashMap<TypeId, Arc<[MemberDescriptor]>> {
    SHAPES.get_or_init(DashMap::new)
}

/// Member list of `T`, built with `build` on first use
pub fn cached_members<T: ?Sized + 'static>(
    build: impl FnOnce() -> Vec<MemberDescriptor>,
) -> Arc<[MemberDescriptor]> {
    let key = TypeId::of::<T>();
    if let Some(members) = shapes().get(&key) {
        return members.value().clone();
    }

    // Built without holding a shard lock: `build` may describe other types.
    let members: Arc<[MemberDescriptor]> = Arc::from(build());
    shapes().entry(key).or_insert(members).value().clone()
}

/// Number of types whose member list has been cached
pub fn cached_type_count() -> usize {
    shapes().len()
}
