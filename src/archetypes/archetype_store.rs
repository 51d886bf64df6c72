use crate::archetypes::Archetype;
use crate::components::{ComponentMask, ComponentRegistry};
use std::collections::HashMap;

/// The set of every [Archetype] a [World](crate::World) has ever used, keyed by
/// [ComponentMask].
///
/// Archetypes are created lazily, one per distinct mask, and never destroyed
/// while the store lives. Index 0 always holds the empty-mask archetype, so an
/// entity with no components still owns an archetype and a valid slot.
pub(crate) struct ArchetypeStore {
	archetypes: Vec<Archetype>,
	by_mask: HashMap<ComponentMask, usize>,
}

impl ArchetypeStore {
	pub fn new(registry: &ComponentRegistry) -> Self {
		Self {
			archetypes: vec![Archetype::new(ComponentMask::EMPTY, registry)],
			by_mask: HashMap::from([(ComponentMask::EMPTY, 0)]),
		}
	}

	/// The index of the archetype for `mask`, creating it on first use.
	pub fn find_or_create(&mut self, mask: ComponentMask, registry: &ComponentRegistry) -> usize {
		if let Some(index) = self.by_mask.get(&mask) {
			return *index;
		}

		let index = self.archetypes.len();
		self.archetypes.push(Archetype::new(mask, registry));
		self.by_mask.insert(mask, index);
		index
	}

	#[inline(always)]
	pub fn get(&self, index: usize) -> &Archetype {
		&self.archetypes[index]
	}

	#[inline(always)]
	pub fn get_mut(&mut self, index: usize) -> &mut Archetype {
		&mut self.archetypes[index]
	}

	/// Mutably borrow two distinct archetypes at once, for migration.
	pub fn pair_mut(&mut self, src: usize, dst: usize) -> (&mut Archetype, &mut Archetype) {
		assert_ne!(src, dst, "migration source and destination must differ");
		debug_assert!(src < self.archetypes.len() && dst < self.archetypes.len());

		// SAFETY: The indices are distinct and in bounds, so the two references
		// never alias.
		unsafe {
			let archetypes = self.archetypes.as_mut_ptr();
			(&mut *archetypes.add(src), &mut *archetypes.add(dst))
		}
	}

	pub fn len(&self) -> usize {
		self.archetypes.len()
	}

	/// Destruct every live component in every archetype. The archetypes and
	/// their chunks are retained.
	pub fn clear_all(&mut self) {
		for archetype in &mut self.archetypes {
			archetype.clear();
		}
	}
}
