#[cfg(feature = "std")]
pub trait ViewKey: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<T: core::hash::Hash + Eq> ViewKey for T {}

#[cfg(not(feature = "std"))]
pub trait ViewKey: Ord {}
#[cfg(not(feature = "std"))]
impl<T: Ord> ViewKey for T {}
