use crate::components::ComponentRegistry;
use crate::prelude::*;
use std::sync::Arc;

#[derive(Default, Clone, PartialEq, Debug)]
struct Position([f32; 3]);

#[derive(Default, Clone, PartialEq, Debug)]
struct Health(u32);

fn world() -> World {
	let registry = Arc::new(ComponentRegistry::new());
	registry.register::<Position>();
	registry.register::<Health>();
	World::new(registry)
}

#[test]
pub fn entity_ids_are_unique_and_never_null() {
	let mut world = world();

	let mut seen = std::collections::HashSet::new();
	for _ in 0..1024 {
		let entity = world.spawn_empty();
		assert!(!entity.is_null(), "A live entity should never be the null id");
		assert!(seen.insert(entity), "Every created entity should get a fresh id");
	}

	assert_eq!(1024, world.len(), "The world should count every live entity");
}

#[test]
pub fn destroyed_ids_are_not_reused() {
	let mut world = world();

	let first = world.spawn_empty();
	world.destroy_entity(first);
	let second = world.spawn_empty();

	assert_ne!(first, second, "Ids of destroyed entities should never be handed out again");
	assert!(!world.contains(first), "A destroyed entity should not be contained");
	assert!(world.contains(second));
}

#[test]
pub fn spawn_stores_the_bundle_values() {
	let mut world = world();

	let entity = world.spawn((Position([1.0, 2.0, 3.0]), Health(50)));

	assert_eq!(Some(&Position([1.0, 2.0, 3.0])), world.get(entity));
	assert_eq!(Some(&Health(50)), world.get(entity));
	assert!(world.has_component::<Position>(entity));
}

#[test]
pub fn create_entity_default_constructs() {
	let mut world = world();
	let position = world.registry().expect_id::<Position>();
	let health = world.registry().expect_id::<Health>();

	let entity = world.create_entity(&[position, health]);

	assert_eq!(Some(&Position::default()), world.get(entity));
	assert_eq!(Some(&Health::default()), world.get(entity));

	let mask = world.mask(entity).unwrap();
	assert_eq!(2, mask.len(), "The entity's mask should contain exactly the requested ids");
}

#[test]
pub fn destroy_is_idempotent() {
	let mut world = world();

	let entity = world.spawn((Health(1),));
	world.destroy_entity(entity);
	world.destroy_entity(entity);
	world.destroy_entity(Entity::NULL);

	assert_eq!(0, world.len(), "Destroying twice should not disturb the entity count");
}

#[test]
pub fn reads_on_dead_entities_report_absence() {
	let mut world = world();

	let entity = world.spawn((Health(1),));
	world.destroy_entity(entity);

	assert_eq!(None, world.get::<Health>(entity), "A dead entity should have no components");
	assert_eq!(None, world.mask(entity), "A dead entity should have no mask");
	assert!(!world.has_component::<Health>(entity));
}

#[test]
pub fn mutation_through_get_mut_persists() {
	let mut world = world();

	let entity = world.spawn((Health(1),));
	world.get_mut::<Health>(entity).unwrap().0 = 99;

	assert_eq!(Some(&Health(99)), world.get(entity));
}

#[test]
pub fn clear_destroys_every_entity() {
	let mut world = world();

	let before: Vec<Entity> = (0..64).map(|_| world.spawn((Health(1),))).collect();
	world.clear();

	assert!(world.is_empty(), "A cleared world should hold no entities");
	for entity in before {
		assert!(!world.contains(entity), "Cleared entities should be dead");
	}

	let after = world.spawn_empty();
	assert!(world.contains(after), "A cleared world should accept new entities");
}
