use crate::archetypes::{Chunk, ChunkLayout};
use crate::components::{ComponentId, ComponentMask, ComponentRegistry, ConstructKind};
use crate::entities::Entity;
use std::ptr::NonNull;

/// A storage location inside an archetype: which chunk, and which index in it.
///
/// Slots are volatile cursors. Freeing any other slot of the same chunk may
/// relocate the entity occupying the chunk's highest live index into the freed
/// position, so a slot is only meaningful while the owning
/// [directory](crate::entities::EntityRecord) entry agrees with it.
#[derive(Default, Copy, Clone, Eq, PartialEq, Debug)]
pub struct Slot {
	pub(crate) chunk: u32,
	pub(crate) index: u32,
}

impl Slot {
	pub(crate) fn new(chunk: usize, index: usize) -> Self {
		Self {
			chunk: chunk as u32,
			index: index as u32,
		}
	}
}

/// Dense storage for every entity sharing one exact [ComponentMask].
///
/// Component data lives in a grow-only list of fixed-size [chunks](Chunk), laid
/// out structure-of-arrays per the archetype's [ChunkLayout]. Slots are kept
/// dense through swap-and-pop; an archetype never shrinks except through
/// [clear](Self::clear).
pub struct Archetype {
	mask: ComponentMask,
	layout: ChunkLayout,
	chunks: Vec<Chunk>,
}

impl Archetype {
	/// # Panics
	/// Panics if `mask` names an unregistered id or describes a component set
	/// that cannot fit a single entity per chunk.
	pub(crate) fn new(mask: ComponentMask, registry: &ComponentRegistry) -> Self {
		let layout = ChunkLayout::new(mask, registry);
		log::trace!(
			"created archetype for mask {:?} ({} components, {} entities per chunk)",
			mask, mask.len(), layout.capacity,
		);

		Self {
			mask,
			layout,
			chunks: Vec::new(),
		}
	}

	#[inline(always)]
	pub fn mask(&self) -> ComponentMask {
		self.mask
	}

	/// The number of entities each chunk can hold.
	pub fn chunk_capacity(&self) -> usize {
		self.layout.capacity
	}

	/// The number of live entities across all chunks.
	pub fn len(&self) -> usize {
		self.chunks.iter().map(Chunk::len).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.chunks.iter().all(|chunk| chunk.len() == 0)
	}

	/// Check this archetype against a query: superset of `required`, disjoint
	/// from `disallowed`.
	pub fn matches(&self, required: &ComponentMask, disallowed: &ComponentMask) -> bool {
		self.mask.contains_all(required) && self.mask.is_disjoint(disallowed)
	}

	pub(crate) fn layout(&self) -> &ChunkLayout {
		&self.layout
	}

	pub(crate) fn chunks(&self) -> &[Chunk] {
		&self.chunks
	}

	/// Reserve a slot in the first chunk with spare capacity, appending a new
	/// chunk if none has room.
	///
	/// The slot's component memory and entity id are **not** constructed; the
	/// caller must initialize both before the slot can be observed.
	pub(crate) fn allocate_slot(&mut self) -> Slot {
		for (index, chunk) in self.chunks.iter_mut().enumerate() {
			if chunk.len() < self.layout.capacity {
				chunk.set_len(chunk.len() + 1);
				return Slot::new(index, chunk.len() - 1);
			}
		}

		log::trace!("archetype for mask {:?} grew to {} chunks", self.mask, self.chunks.len() + 1);

		let mut chunk = Chunk::new(&self.layout);
		chunk.set_len(1);
		self.chunks.push(chunk);

		Slot::new(self.chunks.len() - 1, 0)
	}

	/// Release `slot`, assuming every component there has already been destructed.
	///
	/// If `slot` is not the chunk's last live index, the last live entity's data
	/// is bitwise-relocated into it and that entity is returned so the caller can
	/// rewrite its directory entry in the same step.
	pub(crate) fn free_slot(&mut self, slot: Slot) -> Option<Entity> {
		let chunk = &mut self.chunks[slot.chunk as usize];
		debug_assert!(chunk.len() > 0);

		let index = slot.index as usize;
		let last = chunk.len() - 1;
		debug_assert!(index <= last);

		let moved = if index < last {
			for column in &self.layout.columns {
				unsafe {
					std::ptr::copy_nonoverlapping(
						chunk.column_ptr(column, last),
						chunk.column_ptr(column, index),
						column.descriptor.size(),
					);
				}
			}

			let moved = unsafe { *chunk.entity_ptr(last) };
			unsafe { *chunk.entity_ptr(index) = moved };
			Some(moved)
		} else {
			None
		};

		chunk.set_len(last);
		moved
	}

	/// Move the entity at `src_slot` of `src` into this archetype.
	///
	/// Every component of this archetype's mask is bitwise-moved from the source
	/// when shared, default-constructed when not, except the ids in `skip`, which
	/// are left as raw memory the caller must construct immediately afterwards.
	/// Source-only components are destructed in place, then the source slot is
	/// freed. Returns the destination slot and the entity displaced by the
	/// source-side swap-and-pop, if any.
	pub(crate) fn migrate_from(
		&mut self, src: &mut Archetype, src_slot: Slot, entity: Entity, skip: ComponentMask,
	) -> (Slot, Option<Entity>) {
		debug_assert!(self.mask != src.mask, "migration within one archetype");

		let dst_slot = self.allocate_slot();
		let dst_chunk = &self.chunks[dst_slot.chunk as usize];
		let src_chunk = &src.chunks[src_slot.chunk as usize];

		for column in &self.layout.columns {
			if skip.contains(column.id) {
				continue;
			}

			let dst = dst_chunk.column_ptr(column, dst_slot.index as usize);
			match src.layout.column(column.id) {
				Some(src_column) => unsafe {
					let from = src_chunk.column_ptr(src_column, src_slot.index as usize);
					column.descriptor.move_into(from, dst);
				},
				None => unsafe {
					column.descriptor.default_in_place(dst);
				},
			}
		}

		unsafe { *dst_chunk.entity_ptr(dst_slot.index as usize) = entity };

		// Components not carried into the destination die with the source slot.
		for column in &src.layout.columns {
			if !self.mask.contains(column.id) {
				unsafe {
					let value = src_chunk.column_ptr(column, src_slot.index as usize);
					column.descriptor.drop_in_place(value);
				}
			}
		}

		let displaced = src.free_slot(src_slot);
		(dst_slot, displaced)
	}

	/// Bounds-checked address of one component of the entity at `slot`.
	/// Returns [None] if `id` is not in this archetype's mask or `slot` lies
	/// outside the chunk's live range.
	pub(crate) fn component_ptr(&self, slot: Slot, id: ComponentId) -> Option<NonNull<u8>> {
		let column = self.layout.column(id)?;
		let chunk = self.chunks.get(slot.chunk as usize)?;

		if slot.index as usize >= chunk.len() {
			return None;
		}

		NonNull::new(chunk.column_ptr(column, slot.index as usize))
	}

	pub(crate) fn write_entity(&mut self, slot: Slot, entity: Entity) {
		let chunk = &self.chunks[slot.chunk as usize];
		unsafe { *chunk.entity_ptr(slot.index as usize) = entity };
	}

	/// Construct one component of the entity at `slot` from `src` per `kind`.
	///
	/// # Safety
	/// The component memory at `slot` must not hold a live value. For
	/// [ConstructKind::Clone] and [ConstructKind::Move], `src` must point to a
	/// live value of the component's type; for [ConstructKind::Move] the caller
	/// additionally relinquishes ownership of the source. For
	/// [ConstructKind::Default], `src` is ignored and may be null.
	///
	/// # Panics
	/// Panics if `id` is not part of this archetype's mask.
	pub(crate) unsafe fn construct(
		&mut self, slot: Slot, id: ComponentId, src: *const u8, kind: ConstructKind,
	) {
		let column = match self.layout.column(id) {
			Some(column) => column,
			None => panic!("component id {} is not part of this archetype", id.value()),
		};

		let chunk = &self.chunks[slot.chunk as usize];
		let dst = chunk.column_ptr(column, slot.index as usize);

		match kind {
			ConstructKind::Default => column.descriptor.default_in_place(dst),
			ConstructKind::Clone => column.descriptor.clone_into(src, dst),
			ConstructKind::Move => column.descriptor.move_into(src, dst),
		}
	}

	/// Destruct one live component of the entity at `slot`.
	pub(crate) fn drop_component(&mut self, slot: Slot, id: ComponentId) {
		let column = self.layout.column(id).expect("component id is not part of this archetype");
		let chunk = &self.chunks[slot.chunk as usize];

		unsafe {
			let value = chunk.column_ptr(column, slot.index as usize);
			column.descriptor.drop_in_place(value);
		}
	}

	/// Destruct every live component of the entity at `slot`, leaving the slot
	/// ready for [free_slot](Self::free_slot).
	pub(crate) fn drop_components(&mut self, slot: Slot) {
		let chunk = &self.chunks[slot.chunk as usize];

		for column in &self.layout.columns {
			unsafe {
				let value = chunk.column_ptr(column, slot.index as usize);
				column.descriptor.drop_in_place(value);
			}
		}
	}

	/// Destruct every live component in every chunk and reset live counts to
	/// zero. Chunks are retained for reuse.
	pub(crate) fn clear(&mut self) {
		for chunk in &mut self.chunks {
			for column in &self.layout.columns {
				for index in 0..chunk.len() {
					unsafe {
						let value = chunk.column_ptr(column, index);
						column.descriptor.drop_in_place(value);
					}
				}
			}

			chunk.set_len(0);
		}
	}
}

impl Drop for Archetype {
	fn drop(&mut self) {
		self.clear();
	}
}
