//! A dense runtime identifier tied to a component type.
//!
//! Developers shouldn't rely on the numeric value of a [ComponentId], as it depends
//! on registration order and is not stable between program re-runs. Ids are handed
//! out by a [ComponentRegistry](crate::components::ComponentRegistry) and are mainly
//! used for populating [component masks](crate::components::ComponentMask).

/// The maximum number of distinct component types a single
/// [ComponentRegistry](crate::components::ComponentRegistry) can hold.
pub const MAX_COMPONENTS: usize = 64;

/// A registry-unique identifier for a type implementing the
/// [`Component`](crate::components::Component) trait.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub struct ComponentId {
	value: u32,
}

impl ComponentId {
	pub(crate) fn new(value: usize) -> Self {
		debug_assert!(value < MAX_COMPONENTS);
		Self { value: value as u32 }
	}

	/// The dense index of this id, in range from 0 to [MAX_COMPONENTS].
	#[inline(always)]
	pub const fn value(&self) -> usize {
		self.value as usize
	}
}
