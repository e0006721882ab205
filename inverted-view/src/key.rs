#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::ChildMetrics;

#[cfg(feature = "std")]
pub(crate) type ChildMap<K> = HashMap<K, ChildMetrics>;
#[cfg(not(feature = "std"))]
pub(crate) type ChildMap<K> = BTreeMap<K, ChildMetrics>;

#[cfg(feature = "std")]
#[doc(hidden)]
pub trait ChildKey: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq> ChildKey for K {}

#[cfg(not(feature = "std"))]
#[doc(hidden)]
pub trait ChildKey: Ord {}
#[cfg(not(feature = "std"))]
impl<K: Ord> ChildKey for K {}
