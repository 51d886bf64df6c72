use crate::archetypes::{Archetype, ArchetypeStore, ColumnLayout, Slot};
use crate::components::{
	Component, ComponentBundle, ComponentId, ComponentMask, ComponentRegistry, ConstructKind,
	TypeDescriptor,
};
use crate::entities::{Entity, EntityDirectory, EntityRecord};
use crate::query::Query;
use rayon::prelude::{IntoParallelIterator, ParallelIterator};
use std::alloc::Layout;
use std::ptr::NonNull;
use std::sync::Arc;

/// A container for [entities](Entity) and their associated components.
///
/// The world is the sole entry point for structural mutation: it looks up or
/// lazily creates the archetype for a [ComponentMask], delegates slot
/// allocation, migration and addressing to that archetype, and keeps the entity
/// directory consistent with every structural change, including rewriting the
/// entry of any entity displaced by swap-and-pop.
///
/// A world is single-threaded-cooperative: every operation runs to completion
/// synchronously on the calling thread. The one blessed form of parallelism is
/// fanning the per-chunk bodies of [par_iterate](Self::par_iterate) out to
/// worker threads, which is safe because chunks are disjoint and the callback
/// cannot reach any structural operation while the iteration borrow is held.
pub struct World {
	registry: Arc<ComponentRegistry>,
	archetypes: ArchetypeStore,
	directory: EntityDirectory,
	singletons: SingletonTable,
	next_entity: u64,
}

impl World {
	/// Create an empty world backed by `registry`. Several worlds may share one
	/// registry; they share nothing else.
	pub fn new(registry: Arc<ComponentRegistry>) -> Self {
		Self {
			archetypes: ArchetypeStore::new(&registry),
			directory: EntityDirectory::default(),
			singletons: SingletonTable::default(),
			next_entity: 0,
			registry,
		}
	}

	pub fn registry(&self) -> &ComponentRegistry {
		&self.registry
	}

	/// The number of live entities.
	pub fn len(&self) -> usize {
		self.directory.len()
	}

	pub fn is_empty(&self) -> bool {
		self.directory.len() == 0
	}

	/// Whether `entity` is currently alive.
	pub fn contains(&self, entity: Entity) -> bool {
		self.directory.get(entity).is_some()
	}

	/// The number of distinct archetypes created so far.
	pub fn archetype_count(&self) -> usize {
		self.archetypes.len()
	}

	fn allocate_entity_id(&mut self) -> Entity {
		// Ids are monotonic and never reused; 0 stays reserved for Entity::NULL.
		self.next_entity += 1;
		Entity::from_raw(self.next_entity)
	}

	/// Create an entity holding a default-constructed component for every id in
	/// `ids`. An empty slice creates a component-less entity.
	pub fn create_entity(&mut self, ids: &[ComponentId]) -> Entity {
		unsafe { self.create_entity_raw(ids, None, ConstructKind::Default) }
	}

	/// Create an entity from a tuple of component values, moving each value into
	/// the reserved chunk memory.
	///
	/// # Panics
	/// Panics if an element type is unregistered or appears twice in the bundle.
	pub fn spawn<B: ComponentBundle>(&mut self, bundle: B) -> Entity {
		let mut ids = Vec::new();
		B::component_ids(&self.registry, &mut ids);

		let mask = ComponentMask::from_ids(&ids);
		assert_eq!(mask.len(), ids.len(), "bundle contains duplicate component types");

		let index = self.archetypes.find_or_create(mask, &self.registry);
		let entity = self.allocate_entity_id();

		let archetype = self.archetypes.get_mut(index);
		let slot = archetype.allocate_slot();
		archetype.write_entity(slot, entity);

		// SAFETY: The slot was reserved for exactly the bundle's mask; every
		// value is moved into its column exactly once.
		unsafe {
			bundle.move_into(&self.registry, &mut |id, src| {
				archetype.construct(slot, id, src, ConstructKind::Move);
			});
		}

		self.directory.insert(entity, EntityRecord { archetype: index as u32, slot });
		entity
	}

	pub fn spawn_empty(&mut self) -> Entity {
		self.create_entity(&[])
	}

	/// Create an entity with one component per id in `ids`, constructed from the
	/// matching source pointer per `kind`.
	///
	/// # Safety
	/// With [ConstructKind::Clone] or [ConstructKind::Move], `sources` must hold
	/// one pointer per id, each pointing to a live value of that id's type; with
	/// [ConstructKind::Move] the caller additionally relinquishes ownership of
	/// every source value. With [ConstructKind::Default], `sources` is ignored.
	///
	/// # Panics
	/// Panics if `ids` contains duplicates or unregistered ids.
	pub unsafe fn create_entity_raw(
		&mut self, ids: &[ComponentId], sources: Option<&[*const u8]>, kind: ConstructKind,
	) -> Entity {
		debug_assert!(
			kind == ConstructKind::Default || sources.map_or(false, |s| s.len() == ids.len()),
			"one source pointer per id is required",
		);

		let mask = ComponentMask::from_ids(ids);
		assert_eq!(mask.len(), ids.len(), "component id list contains duplicates");

		let index = self.archetypes.find_or_create(mask, &self.registry);
		let entity = self.allocate_entity_id();

		let archetype = self.archetypes.get_mut(index);
		let slot = archetype.allocate_slot();
		archetype.write_entity(slot, entity);

		// A panicking constructor must not leave a half-built row behind: the
		// guard destructs the constructed prefix and frees the slot before the
		// unwind continues, so the storage never disagrees with the directory.
		let mut guard = RowConstruction { archetype, slot, ids, constructed: 0 };
		guard.construct_all(sources, kind);
		std::mem::forget(guard);

		self.directory.insert(entity, EntityRecord { archetype: index as u32, slot });
		entity
	}

	/// Destroy `entity`, destructing all its components and freeing its slot.
	/// No-op on a null or already-destroyed entity.
	pub fn destroy_entity(&mut self, entity: Entity) {
		let record = match self.directory.remove(entity) {
			Some(record) => record,
			None => return,
		};

		let archetype = self.archetypes.get_mut(record.archetype as usize);
		archetype.drop_components(record.slot);

		if let Some(displaced) = archetype.free_slot(record.slot) {
			self.directory.set_slot(displaced, record.slot);
		}
	}

	/// Add a single component value to `entity`, overwriting in place when the
	/// component is already present. Returns whether the component was newly
	/// added (and hence whether the entity migrated archetypes).
	///
	/// # Panics
	/// Panics if `T` is unregistered or `entity` is not alive.
	pub fn add_component<T: Component>(&mut self, entity: Entity, value: T) -> bool {
		let id = self.registry.expect_id::<T>();
		let sources = [&value as *const T as *const u8];

		// SAFETY: `value` is a live T and ownership is released right after.
		let added = unsafe { self.add_components_raw(entity, &[id], Some(&sources), ConstructKind::Move) };
		std::mem::forget(value);
		added
	}

	/// Add a default-constructed component for every id in `ids`; components
	/// already present are destructed and default-constructed in place. Returns
	/// whether the entity's mask changed.
	pub fn add_components(&mut self, entity: Entity, ids: &[ComponentId]) -> bool {
		unsafe { self.add_components_raw(entity, ids, None, ConstructKind::Default) }
	}

	/// Type-erased add: for every id in `ids`, construct a component value from
	/// the matching source pointer per `kind`. Ids already present are
	/// overwritten in place (destruct, then construct); if any id is new, the
	/// entity migrates to the union-mask archetype, with the migration skipping
	/// the added columns so they are constructed here exactly once.
	///
	/// # Safety
	/// Same source-pointer contract as [create_entity_raw](Self::create_entity_raw).
	///
	/// # Panics
	/// Panics if `entity` is not alive or `ids` contains duplicates.
	pub unsafe fn add_components_raw(
		&mut self, entity: Entity, ids: &[ComponentId], sources: Option<&[*const u8]>,
		kind: ConstructKind,
	) -> bool {
		debug_assert!(
			kind == ConstructKind::Default || sources.map_or(false, |s| s.len() == ids.len()),
			"one source pointer per id is required",
		);

		let record = match self.directory.get(entity) {
			Some(record) => record,
			None => panic!("cannot add components to a destroyed or null entity"),
		};

		let added = ComponentMask::from_ids(ids);
		assert_eq!(added.len(), ids.len(), "component id list contains duplicates");

		let old_mask = self.archetypes.get(record.archetype as usize).mask();
		let new_mask = old_mask.union(&added);

		let source_at = |i: usize| match sources {
			Some(sources) => sources[i],
			None => std::ptr::null(),
		};

		// Past this point the entity's old values are consumed as the operation
		// proceeds, so there is no state an unwind could restore. A panicking
		// constructor or destructor is fatal.
		let guard = AbortOnUnwind;

		if new_mask == old_mask {
			// Only values change; destruct and reconstruct each one in place.
			let archetype = self.archetypes.get_mut(record.archetype as usize);
			for (i, id) in ids.iter().enumerate() {
				archetype.drop_component(record.slot, *id);
				archetype.construct(record.slot, *id, source_at(i), kind);
			}

			std::mem::forget(guard);
			return false;
		}

		// Values about to be overwritten die at the source; the migration skips
		// every id in `added`, so they are neither moved nor double-dropped.
		{
			let archetype = self.archetypes.get_mut(record.archetype as usize);
			for id in ids {
				if old_mask.contains(*id) {
					archetype.drop_component(record.slot, *id);
				}
			}
		}

		let destination = self.archetypes.find_or_create(new_mask, &self.registry);
		let (src, dst) = self.archetypes.pair_mut(record.archetype as usize, destination);
		let (slot, displaced) = dst.migrate_from(src, record.slot, entity, added);

		if let Some(displaced) = displaced {
			self.directory.set_slot(displaced, record.slot);
		}
		self.directory.update(entity, EntityRecord { archetype: destination as u32, slot });

		// The skipped columns are raw memory until this point.
		let destination = self.archetypes.get_mut(destination);
		for (i, id) in ids.iter().enumerate() {
			destination.construct(slot, *id, source_at(i), kind);
		}

		std::mem::forget(guard);
		true
	}

	/// Remove the component `T` from `entity`. Returns whether anything was
	/// removed.
	///
	/// # Panics
	/// Panics if `T` is unregistered or `entity` is not alive.
	pub fn remove_component<T: Component>(&mut self, entity: Entity) -> bool {
		let id = self.registry.expect_id::<T>();
		self.remove_components(entity, &[id])
	}

	/// Remove every id in `ids` from `entity`'s mask. Ids not present are
	/// ignored; when nothing changes, returns `false` without migrating.
	///
	/// # Panics
	/// Panics if `entity` is not alive.
	pub fn remove_components(&mut self, entity: Entity, ids: &[ComponentId]) -> bool {
		let record = match self.directory.get(entity) {
			Some(record) => record,
			None => panic!("cannot remove components from a destroyed or null entity"),
		};

		let removed = ComponentMask::from_ids(ids);
		let old_mask = self.archetypes.get(record.archetype as usize).mask();
		let new_mask = old_mask.difference(&removed);

		if new_mask == old_mask {
			return false;
		}

		let destination = self.archetypes.find_or_create(new_mask, &self.registry);
		let (src, dst) = self.archetypes.pair_mut(record.archetype as usize, destination);

		// The destination mask is a strict subset; dropped components are
		// destructed at the source by the migration itself.
		let (slot, displaced) = dst.migrate_from(src, record.slot, entity, ComponentMask::EMPTY);

		if let Some(displaced) = displaced {
			self.directory.set_slot(displaced, record.slot);
		}
		self.directory.update(entity, EntityRecord { archetype: destination as u32, slot });

		true
	}

	/// Get a reference to a component of `entity`, or [None] when the entity is
	/// dead or does not hold `T`.
	pub fn get<T: Component>(&self, entity: Entity) -> Option<&T> {
		let id = self.registry.id_of::<T>()?;
		let ptr = self.component_ptr(entity, id)?;
		unsafe { Some(&*(ptr.as_ptr() as *const T)) }
	}

	/// Get a mutable reference to a component of `entity`.
	pub fn get_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
		let id = self.registry.id_of::<T>()?;
		let ptr = self.component_ptr(entity, id)?;
		unsafe { Some(&mut *(ptr.as_ptr() as *mut T)) }
	}

	/// Bounds-checked address of one component of `entity`; [None] when the
	/// entity is dead or its archetype lacks `id`.
	///
	/// The pointer is invalidated by any structural mutation.
	pub fn component_ptr(&self, entity: Entity, id: ComponentId) -> Option<NonNull<u8>> {
		let record = self.directory.get(entity)?;
		self.archetypes.get(record.archetype as usize).component_ptr(record.slot, id)
	}

	pub fn has_component<T: Component>(&self, entity: Entity) -> bool {
		match self.registry.id_of::<T>() {
			Some(id) => self.has_components(entity, &[id]),
			None => false,
		}
	}

	/// Whether `entity` is alive and holds every id in `ids`.
	pub fn has_components(&self, entity: Entity, ids: &[ComponentId]) -> bool {
		match self.mask(entity) {
			Some(mask) => mask.contains_all(&ComponentMask::from_ids(ids)),
			None => false,
		}
	}

	/// The component mask of `entity`, or [None] when the entity is dead.
	pub fn mask(&self, entity: Entity) -> Option<ComponentMask> {
		let record = self.directory.get(entity)?;
		Some(self.archetypes.get(record.archetype as usize).mask())
	}

	/// Invoke `func` once per non-empty chunk of every archetype whose mask is a
	/// superset of the query's required ids and disjoint from its disallowed
	/// ids. The view hands out the chunk's live entity-id slice plus one column
	/// pointer per required id and one nullable column per optional id, in query
	/// order.
	///
	/// Nothing handed to the callback may be retained beyond its invocation; any
	/// later structural mutation can relocate the underlying chunk memory.
	pub fn iterate(&mut self, query: &Query, mut func: impl FnMut(ChunkView)) {
		let mut required_columns: Vec<ColumnLayout> = Vec::with_capacity(query.required_ids().len());
		let mut optional_columns: Vec<Option<ColumnLayout>> = Vec::with_capacity(query.optional_ids().len());
		let mut required_ptrs: Vec<*mut u8> = Vec::with_capacity(query.required_ids().len());
		let mut optional_ptrs: Vec<Option<*mut u8>> = Vec::with_capacity(query.optional_ids().len());

		for index in 0..self.archetypes.len() {
			let archetype = self.archetypes.get(index);
			if !archetype.matches(query.required_mask(), query.disallowed_mask()) {
				continue;
			}

			required_columns.clear();
			optional_columns.clear();
			for id in query.required_ids() {
				required_columns.push(*archetype.layout().column(*id).unwrap());
			}
			for id in query.optional_ids() {
				optional_columns.push(archetype.layout().column(*id).copied());
			}

			for chunk in archetype.chunks() {
				if chunk.len() == 0 {
					continue;
				}

				required_ptrs.clear();
				optional_ptrs.clear();
				for column in &required_columns {
					required_ptrs.push(chunk.column_ptr(column, 0));
				}
				for column in &optional_columns {
					optional_ptrs.push(column.as_ref().map(|column| chunk.column_ptr(column, 0)));
				}

				func(ChunkView {
					entities: chunk.entities(),
					required: &required_ptrs,
					optional: &optional_ptrs,
				});
			}
		}
	}

	/// The parallel counterpart of [iterate](Self::iterate): the per-chunk
	/// bodies are fanned out over the rayon pool. Each invocation has exclusive
	/// access to its chunk's arrays; `func` must not touch anything outside the
	/// view it was handed.
	pub fn par_iterate(&mut self, query: &Query, func: impl Fn(ChunkView) + Send + Sync) {
		struct ChunkTask {
			entities: *const Entity,
			len: usize,
			required: Vec<*mut u8>,
			optional: Vec<Option<*mut u8>>,
		}

		// SAFETY: Every task describes a distinct chunk, all component types are
		// Send + Sync, and the world is exclusively borrowed for the duration.
		unsafe impl Send for ChunkTask {}
		unsafe impl Sync for ChunkTask {}

		let mut tasks = Vec::new();

		for index in 0..self.archetypes.len() {
			let archetype = self.archetypes.get(index);
			if !archetype.matches(query.required_mask(), query.disallowed_mask()) {
				continue;
			}

			let required_columns: Vec<ColumnLayout> = query
				.required_ids()
				.iter()
				.map(|id| *archetype.layout().column(*id).unwrap())
				.collect();
			let optional_columns: Vec<Option<ColumnLayout>> = query
				.optional_ids()
				.iter()
				.map(|id| archetype.layout().column(*id).copied())
				.collect();

			for chunk in archetype.chunks() {
				if chunk.len() == 0 {
					continue;
				}

				tasks.push(ChunkTask {
					entities: chunk.entities().as_ptr(),
					len: chunk.len(),
					required: required_columns.iter().map(|column| chunk.column_ptr(column, 0)).collect(),
					optional: optional_columns
						.iter()
						.map(|column| column.as_ref().map(|column| chunk.column_ptr(column, 0)))
						.collect(),
				});
			}
		}

		tasks.into_par_iter().for_each(|task| {
			let view = ChunkView {
				entities: unsafe { std::slice::from_raw_parts(task.entities, task.len) },
				required: &task.required,
				optional: &task.optional,
			};

			func(view);
		});
	}

	/// Overwrite (or lazily create) the singleton value of type `T`.
	///
	/// # Panics
	/// Panics if `T` is unregistered.
	pub fn set_singleton<T: Component>(&mut self, value: T) {
		let id = self.registry.expect_id::<T>();
		let descriptor = self.registry.descriptor(id);

		// SAFETY: `value` is a live T and ownership is released right after.
		unsafe { self.singletons.set(id, descriptor, &value as *const T as *const u8) };
		std::mem::forget(value);
	}

	/// Read the singleton of type `T` without allocating; [None] if it was never
	/// accessed or set.
	pub fn singleton<T: Component>(&self) -> Option<&T> {
		let id = self.registry.id_of::<T>()?;
		let ptr = self.singletons.get(id)?;
		unsafe { Some(&*(ptr.as_ptr() as *const T)) }
	}

	/// Mutable access to the singleton of type `T`, default-constructing it on
	/// first access.
	///
	/// # Panics
	/// Panics if `T` is unregistered.
	pub fn singleton_mut<T: Component>(&mut self) -> &mut T {
		let id = self.registry.expect_id::<T>();
		let ptr = self.singleton_ptr(id);
		unsafe { &mut *(ptr.as_ptr() as *mut T) }
	}

	/// Type-erased singleton access, default-constructing the value on first
	/// call. The pointer stays valid until the world is dropped.
	pub fn singleton_ptr(&mut self, id: ComponentId) -> NonNull<u8> {
		let descriptor = self.registry.descriptor(id);
		self.singletons.get_or_init(id, descriptor)
	}

	/// Destroy every entity, retaining archetypes, chunks and singletons. The
	/// entity id counter stays monotonic.
	pub fn clear(&mut self) {
		log::debug!("clearing world with {} live entities", self.directory.len());
		self.archetypes.clear_all();
		self.directory.clear();
	}
}

/// A borrowed window into one chunk during [World::iterate].
///
/// Columns are raw pointers to the start of each component array; element `i` of
/// every column belongs to `entities()[i]`. Neither the view nor any slice
/// derived from it may outlive the callback invocation that produced it.
pub struct ChunkView<'l> {
	entities: &'l [Entity],
	required: &'l [*mut u8],
	optional: &'l [Option<*mut u8>],
}

impl<'l> ChunkView<'l> {
	/// The number of live entities in this chunk.
	#[inline(always)]
	pub fn len(&self) -> usize {
		self.entities.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entities.is_empty()
	}

	/// The chunk's live entity-id array.
	#[inline(always)]
	pub fn entities(&self) -> &'l [Entity] {
		self.entities
	}

	/// The base address of required column `index`, in query order.
	#[inline(always)]
	pub fn required_ptr(&self, index: usize) -> *mut u8 {
		self.required[index]
	}

	/// The base address of optional column `index`, or [None] when the visited
	/// archetype lacks that component.
	#[inline(always)]
	pub fn optional_ptr(&self, index: usize) -> Option<*mut u8> {
		self.optional[index]
	}

	/// View required column `index` as a typed slice.
	///
	/// # Safety
	/// `T` must be the component type the query required at `index`, and no
	/// other live slice may alias the same column.
	#[inline(always)]
	pub unsafe fn required_slice<T: Component>(&self, index: usize) -> &'l mut [T] {
		std::slice::from_raw_parts_mut(self.required[index] as *mut T, self.entities.len())
	}

	/// View optional column `index` as a typed slice, if present.
	///
	/// # Safety
	/// Same contract as [required_slice](Self::required_slice).
	#[inline(always)]
	pub unsafe fn optional_slice<T: Component>(&self, index: usize) -> Option<&'l mut [T]> {
		let ptr = self.optional[index]?;
		Some(std::slice::from_raw_parts_mut(ptr as *mut T, self.entities.len()))
	}
}

/// Constructs every column of one freshly reserved row, destructing the
/// constructed prefix and releasing the slot again if a constructor unwinds.
///
/// Only valid for a slot that is the newest row of its chunk, where freeing it
/// displaces no other entity.
struct RowConstruction<'l> {
	archetype: &'l mut Archetype,
	slot: Slot,
	ids: &'l [ComponentId],
	constructed: usize,
}

impl RowConstruction<'_> {
	/// # Safety
	/// Same source-pointer contract as [World::create_entity_raw].
	unsafe fn construct_all(&mut self, sources: Option<&[*const u8]>, kind: ConstructKind) {
		for (i, id) in self.ids.iter().enumerate() {
			let src = match sources {
				Some(sources) => sources[i],
				None => std::ptr::null(),
			};

			self.archetype.construct(self.slot, *id, src, kind);
			self.constructed += 1;
		}
	}
}

impl Drop for RowConstruction<'_> {
	fn drop(&mut self) {
		for id in &self.ids[..self.constructed] {
			self.archetype.drop_component(self.slot, *id);
		}

		let displaced = self.archetype.free_slot(self.slot);
		debug_assert!(displaced.is_none(), "an unpublished row must be its chunk's newest");
	}
}

/// Escalates an unwind to a process abort. Armed across spans that consume
/// component values as they go and therefore cannot be unwound through without
/// leaving storage and the directory disagreeing.
struct AbortOnUnwind;

impl Drop for AbortOnUnwind {
	fn drop(&mut self) {
		log::error!("a component constructor or destructor panicked mid-operation; storage is unrecoverable");
		std::process::abort();
	}
}

struct SingletonSlot {
	data: NonNull<u8>,
	descriptor: TypeDescriptor,
}

/// Storage for singleton components: one value per component id, outside any
/// archetype, lazily allocated and dropped with the table.
#[derive(Default)]
struct SingletonTable {
	slots: Vec<Option<SingletonSlot>>,
}

impl SingletonTable {
	fn get_or_init(&mut self, id: ComponentId, descriptor: TypeDescriptor) -> NonNull<u8> {
		if self.slots.len() <= id.value() {
			self.slots.resize_with(id.value() + 1, || None);
		}

		if let Some(slot) = &self.slots[id.value()] {
			return slot.data;
		}

		let data = allocate_value(&descriptor);
		unsafe { descriptor.default_in_place(data.as_ptr()) };

		self.slots[id.value()] = Some(SingletonSlot { data, descriptor });
		data
	}

	fn get(&self, id: ComponentId) -> Option<NonNull<u8>> {
		self.slots.get(id.value())?.as_ref().map(|slot| slot.data)
	}

	/// # Safety
	/// `src` must point to a live value of the descriptor's type; ownership
	/// transfers to the table.
	unsafe fn set(&mut self, id: ComponentId, descriptor: TypeDescriptor, src: *const u8) {
		if self.slots.len() <= id.value() {
			self.slots.resize_with(id.value() + 1, || None);
		}

		match &self.slots[id.value()] {
			Some(slot) => {
				descriptor.drop_in_place(slot.data.as_ptr());
				descriptor.move_into(src, slot.data.as_ptr());
			},

			None => {
				let data = allocate_value(&descriptor);
				descriptor.move_into(src, data.as_ptr());
				self.slots[id.value()] = Some(SingletonSlot { data, descriptor });
			},
		}
	}
}

impl Drop for SingletonTable {
	fn drop(&mut self) {
		for slot in self.slots.iter().flatten() {
			unsafe {
				slot.descriptor.drop_in_place(slot.data.as_ptr());

				if slot.descriptor.size() > 0 {
					let layout = Layout::from_size_align_unchecked(
						slot.descriptor.size(),
						slot.descriptor.align(),
					);
					std::alloc::dealloc(slot.data.as_ptr(), layout);
				}
			}
		}
	}
}

fn allocate_value(descriptor: &TypeDescriptor) -> NonNull<u8> {
	if descriptor.size() == 0 {
		// Zero-sized values live at any aligned address.
		return NonNull::new(descriptor.align() as *mut u8).unwrap();
	}

	let layout = Layout::from_size_align(descriptor.size(), descriptor.align())
		.expect("invalid singleton layout");

	let data = unsafe { std::alloc::alloc(layout) };
	match NonNull::new(data) {
		Some(data) => data,
		None => std::alloc::handle_alloc_error(layout),
	}
}
