use crate::archetypes::{ChunkLayout, CHUNK_SIZE};
use crate::components::{ComponentMask, ComponentRegistry};
use crate::entities::Entity;

#[derive(Default, Clone)]
struct Flag(u8);

#[derive(Default, Clone)]
struct Mass(f32);

#[derive(Default, Clone)]
struct Position([f32; 3]);

#[derive(Default, Clone)]
struct Timestamp(u64);

#[derive(Default, Clone)]
struct Tag;

#[test]
pub fn single_component_capacity() {
	let registry = ComponentRegistry::new();
	let mass = registry.register::<Mass>();

	let layout = ChunkLayout::new(ComponentMask::from_ids(&[mass]), &registry);

	// 8 bytes of entity id plus 4 bytes of component, minus 3 bytes of
	// worst-case padding for the f32 array.
	assert_eq!(
		(CHUNK_SIZE - 3) / 12,
		layout.capacity,
		"Capacity should follow from the per-entity footprint and worst-case padding"
	);
}

#[test]
pub fn empty_mask_capacity() {
	let registry = ComponentRegistry::new();
	let layout = ChunkLayout::new(ComponentMask::EMPTY, &registry);

	assert_eq!(
		CHUNK_SIZE / std::mem::size_of::<Entity>(),
		layout.capacity,
		"An empty mask should fit one entity id per id-sized stride"
	);
	assert!(layout.columns.is_empty(), "An empty mask should lay out no columns");
}

#[test]
pub fn columns_are_aligned_and_in_bounds() {
	let registry = ComponentRegistry::new();
	let flag = registry.register::<Flag>();
	let timestamp = registry.register::<Timestamp>();
	let position = registry.register::<Position>();

	let mask = ComponentMask::from_ids(&[flag, timestamp, position]);
	let layout = ChunkLayout::new(mask, &registry);

	let entities_end = std::mem::size_of::<Entity>() * layout.capacity;

	for column in &layout.columns {
		assert_eq!(
			0,
			column.offset % column.descriptor.align(),
			"Every column should start at an address aligned for its type"
		);
		assert!(
			column.offset >= entities_end,
			"Every column should start after the entity id array"
		);
		assert!(
			column.offset + column.descriptor.size() * layout.capacity <= CHUNK_SIZE,
			"Every column should end within the chunk"
		);
	}
}

#[test]
pub fn columns_do_not_overlap() {
	let registry = ComponentRegistry::new();
	let flag = registry.register::<Flag>();
	let timestamp = registry.register::<Timestamp>();
	let position = registry.register::<Position>();

	let mask = ComponentMask::from_ids(&[flag, timestamp, position]);
	let layout = ChunkLayout::new(mask, &registry);

	for pair in layout.columns.windows(2) {
		let end = pair[0].offset + pair[0].descriptor.size() * layout.capacity;
		assert!(
			end <= pair[1].offset,
			"Consecutive columns should occupy disjoint byte ranges"
		);
	}
}

#[test]
pub fn zero_sized_components_cost_nothing() {
	let registry = ComponentRegistry::new();
	let tag = registry.register::<Tag>();
	let mass = registry.register::<Mass>();

	let with_tag = ChunkLayout::new(ComponentMask::from_ids(&[mass, tag]), &registry);
	let without_tag = ChunkLayout::new(ComponentMask::from_ids(&[mass]), &registry);

	assert_eq!(
		without_tag.capacity,
		with_tag.capacity,
		"A zero-sized component should not reduce the chunk capacity"
	);
}
