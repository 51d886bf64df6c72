use crate::archetypes::Slot;
use crate::entities::Entity;
use std::hash::BuildHasherDefault;
use nohash_hasher::NoHashHasher;
use std::collections::HashMap;

type Hasher = BuildHasherDefault<NoHashHasher<Entity>>;

/// Where an entity's component data currently lives.
///
/// The [Slot] is a volatile cursor: destroying or migrating *another* entity in
/// the same chunk may relocate this entity through swap-and-pop, in which case
/// the directory entry is rewritten in the same step.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct EntityRecord {
	pub(crate) archetype: u32,
	pub(crate) slot: Slot,
}

/// The single source of truth for "where is this entity's data", exclusively
/// owned and mutated by the [World](crate::World).
#[derive(Default)]
pub(crate) struct EntityDirectory {
	records: HashMap<Entity, EntityRecord, Hasher>,
}

impl EntityDirectory {
	pub fn insert(&mut self, entity: Entity, record: EntityRecord) {
		let previous = self.records.insert(entity, record);
		debug_assert!(previous.is_none(), "entity id allocated twice");
	}

	pub fn update(&mut self, entity: Entity, record: EntityRecord) {
		debug_assert!(self.records.contains_key(&entity));
		self.records.insert(entity, record);
	}

	/// Rewrite the slot of an entity relocated by swap-and-pop.
	pub fn set_slot(&mut self, entity: Entity, slot: Slot) {
		match self.records.get_mut(&entity) {
			Some(record) => record.slot = slot,
			None => unreachable!("relocated entity has no directory entry"),
		}
	}

	pub fn get(&self, entity: Entity) -> Option<EntityRecord> {
		self.records.get(&entity).copied()
	}

	pub fn remove(&mut self, entity: Entity) -> Option<EntityRecord> {
		self.records.remove(&entity)
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn clear(&mut self) {
		self.records.clear();
	}
}
