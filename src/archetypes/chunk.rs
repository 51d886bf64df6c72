use crate::components::{ComponentId, ComponentMask, ComponentRegistry, TypeDescriptor};
use crate::entities::Entity;
use std::alloc::Layout;
use std::ptr::NonNull;

/// The fixed byte size of every [Chunk].
pub const CHUNK_SIZE: usize = 16 * 1024;

/// The placement of one component's array inside a chunk.
#[derive(Copy, Clone)]
pub(crate) struct ColumnLayout {
	pub id: ComponentId,
	pub offset: usize,
	pub descriptor: TypeDescriptor,
}

/// The memory plan shared by every chunk of one archetype: how many entities fit
/// in [CHUNK_SIZE] bytes, and at which byte offset each component's array starts.
///
/// Computed once at archetype construction. The per-entity footprint is the entity
/// id plus the sum of all component sizes; capacity is derived after reserving the
/// worst-case inter-array padding, so the aligned arrays always fit the block.
pub(crate) struct ChunkLayout {
	pub capacity: usize,
	pub align: usize,
	pub columns: Vec<ColumnLayout>,
}

impl ChunkLayout {
	/// # Panics
	/// Panics if an id in `mask` is not registered, or if the component set is so
	/// large that not even one entity fits in a chunk.
	pub fn new(mask: ComponentMask, registry: &ComponentRegistry) -> Self {
		let descriptors: Vec<(ComponentId, TypeDescriptor)> =
			mask.iter().map(|id| (id, registry.descriptor(id))).collect();

		let mut footprint = std::mem::size_of::<Entity>();
		let mut padding = 0;
		for (_, descriptor) in &descriptors {
			footprint += descriptor.size();
			padding += descriptor.align() - 1;
		}

		assert!(padding < CHUNK_SIZE, "component set alignment requirements exceed the chunk size");
		let capacity = (CHUNK_SIZE - padding) / footprint;
		assert!(
			capacity > 0,
			"component set of {} bytes per entity does not fit a {} byte chunk",
			footprint, CHUNK_SIZE,
		);

		let mut align = std::mem::align_of::<Entity>();
		let mut offset = std::mem::size_of::<Entity>() * capacity;
		let mut columns = Vec::with_capacity(descriptors.len());

		for (id, descriptor) in descriptors {
			offset = align_up(offset, descriptor.align());
			columns.push(ColumnLayout { id, offset, descriptor });

			offset += descriptor.size() * capacity;
			align = usize::max(align, descriptor.align());
		}

		debug_assert!(offset <= CHUNK_SIZE, "column layout overflows the chunk");

		Self {
			capacity,
			align,
			columns,
		}
	}

	pub fn column(&self, id: ComponentId) -> Option<&ColumnLayout> {
		self.columns.iter().find(|column| column.id == id)
	}
}

#[inline(always)]
fn align_up(offset: usize, align: usize) -> usize {
	(offset + align - 1) & !(align - 1)
}

/// One fixed-capacity block of an archetype's storage: the entity-id array at
/// offset 0 followed by one contiguous array per component, at the offsets of
/// the owning archetype's [ChunkLayout].
///
/// A chunk tracks only its live count; construction and destruction of component
/// memory is driven by the [Archetype](crate::archetypes::Archetype).
pub(crate) struct Chunk {
	data: NonNull<u8>,
	layout: Layout,
	len: usize,
}

// SAFETY: The chunk stores raw bytes of component types, all of which are
// Send + Sync per the `Component` bound.
unsafe impl Send for Chunk {}
unsafe impl Sync for Chunk {}

impl Chunk {
	pub fn new(layout: &ChunkLayout) -> Self {
		let alloc_layout = Layout::from_size_align(CHUNK_SIZE, layout.align)
			.expect("invalid chunk layout");

		let data = unsafe { std::alloc::alloc(alloc_layout) };
		let data = match NonNull::new(data) {
			Some(data) => data,
			None => std::alloc::handle_alloc_error(alloc_layout),
		};

		Self {
			data,
			layout: alloc_layout,
			len: 0,
		}
	}

	#[inline(always)]
	pub fn len(&self) -> usize {
		self.len
	}

	pub fn set_len(&mut self, len: usize) {
		self.len = len;
	}

	/// The live entity-id array.
	pub fn entities(&self) -> &[Entity] {
		unsafe { std::slice::from_raw_parts(self.data.as_ptr() as *const Entity, self.len) }
	}

	#[inline(always)]
	pub fn entity_ptr(&self, index: usize) -> *mut Entity {
		debug_assert!(index < self.len);
		unsafe { (self.data.as_ptr() as *mut Entity).add(index) }
	}

	/// The address of element `index` of the column described by `column`.
	/// Zero-sized components share one aligned address for every index.
	#[inline(always)]
	pub fn column_ptr(&self, column: &ColumnLayout, index: usize) -> *mut u8 {
		debug_assert!(index < self.len);
		unsafe { self.data.as_ptr().add(column.offset + column.descriptor.size() * index) }
	}
}

impl Drop for Chunk {
	fn drop(&mut self) {
		// Live component values must already have been dropped by the archetype.
		unsafe { std::alloc::dealloc(self.data.as_ptr(), self.layout) };
	}
}
