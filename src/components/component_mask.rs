use crate::components::{ComponentId, MAX_COMPONENTS};

/// A fixed-width bit set over [component ids](ComponentId).
///
/// Two entities share an archetype iff their masks are equal; a query matches an
/// archetype through the [subset](Self::contains_all) and [disjointness](Self::is_disjoint)
/// tests below.
#[derive(Default, Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ComponentMask {
	bits: u64,
}

impl ComponentMask {
	pub const EMPTY: ComponentMask = ComponentMask { bits: 0 };

	/// Build a mask with the bit of every id in `ids` set.
	pub fn from_ids(ids: &[ComponentId]) -> Self {
		let mut mask = Self::EMPTY;
		for id in ids {
			mask.set(*id);
		}

		mask
	}

	#[inline(always)]
	pub fn set(&mut self, id: ComponentId) {
		self.bits |= 1 << id.value();
	}

	#[inline(always)]
	pub fn clear(&mut self, id: ComponentId) {
		self.bits &= !(1 << id.value());
	}

	#[inline(always)]
	pub fn contains(&self, id: ComponentId) -> bool {
		self.bits & (1 << id.value()) != 0
	}

	/// Check whether this mask is a superset of `other`.
	#[inline(always)]
	pub fn contains_all(&self, other: &ComponentMask) -> bool {
		self.bits & other.bits == other.bits
	}

	/// Check whether this mask shares no set bits with `other`.
	#[inline(always)]
	pub fn is_disjoint(&self, other: &ComponentMask) -> bool {
		self.bits & other.bits == 0
	}

	#[inline(always)]
	pub fn union(&self, other: &ComponentMask) -> ComponentMask {
		ComponentMask { bits: self.bits | other.bits }
	}

	/// The mask with every bit of `other` cleared.
	#[inline(always)]
	pub fn difference(&self, other: &ComponentMask) -> ComponentMask {
		ComponentMask { bits: self.bits & !other.bits }
	}

	#[inline(always)]
	pub fn is_empty(&self) -> bool {
		self.bits == 0
	}

	/// The number of set bits.
	#[inline(always)]
	pub fn len(&self) -> usize {
		self.bits.count_ones() as usize
	}

	/// Iterate over the set ids in ascending order.
	pub fn iter(&self) -> MaskIter {
		MaskIter { bits: self.bits }
	}
}

impl From<&[ComponentId]> for ComponentMask {
	fn from(ids: &[ComponentId]) -> Self {
		Self::from_ids(ids)
	}
}

/// Iterates over the set [ids](ComponentId) of a [ComponentMask] in ascending order.
pub struct MaskIter {
	bits: u64,
}

impl Iterator for MaskIter {
	type Item = ComponentId;

	fn next(&mut self) -> Option<Self::Item> {
		if self.bits == 0 {
			return None;
		}

		let index = self.bits.trailing_zeros() as usize;
		self.bits &= self.bits - 1;

		debug_assert!(index < MAX_COMPONENTS);
		Some(ComponentId::new(index))
	}
}
