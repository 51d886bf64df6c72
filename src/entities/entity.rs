/// A unique handle to an entity.
///
/// The value 0 is reserved as [Entity::NULL]; live ids are drawn from a
/// monotonically increasing per-[World](crate::World) counter and never reused,
/// so a handle to a destroyed entity simply stops resolving instead of aliasing
/// a newer entity.
#[derive(Default, Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(transparent)]
pub struct Entity(u64);

impl Entity {
	/// The reserved "no entity" value.
	pub const NULL: Entity = Entity(0);

	pub(crate) const fn from_raw(value: u64) -> Self {
		Self(value)
	}

	/// The underlying 64-bit id.
	#[inline(always)]
	pub const fn raw(&self) -> u64 {
		self.0
	}

	#[inline(always)]
	pub const fn is_null(&self) -> bool {
		self.0 == 0
	}
}

// Entity ids are already unique 64-bit values; hashing them again is wasted work.
impl nohash_hasher::IsEnabled for Entity {}
