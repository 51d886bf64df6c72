//! An archetype-based component storage engine.
//!
//! Entities with identical component sets share an [Archetype]; each archetype
//! packs its entities into fixed-size chunks, structure-of-arrays, so iteration
//! walks contiguous per-component memory. Component types are described at
//! runtime by a [registry](ComponentRegistry) of type-erased descriptors, which
//! lets the [World] construct, move and drop component memory without generics
//! on the storage path.
//!
//! ```
//! use strata_ecs::prelude::*;
//! use std::sync::Arc;
//!
//! #[derive(Default, Clone)]
//! struct Position([f32; 3]);
//!
//! #[derive(Default, Clone)]
//! struct Velocity([f32; 3]);
//!
//! let registry = Arc::new(ComponentRegistry::new());
//! let position = registry.register::<Position>();
//! let velocity = registry.register::<Velocity>();
//!
//! let mut world = World::new(registry);
//! world.spawn((Position([0.0, 1.0, 0.0]), Velocity([1.0, 0.0, 0.0])));
//!
//! let query = Query::new().require(position).require(velocity);
//! world.iterate(&query, |chunk| {
//! 	let positions = unsafe { chunk.required_slice::<Position>(0) };
//! 	let velocities = unsafe { chunk.required_slice::<Velocity>(1) };
//!
//! 	for (position, velocity) in positions.iter_mut().zip(velocities.iter()) {
//! 		position.0[0] += velocity.0[0];
//! 	}
//! });
//! ```

pub mod components;
pub mod archetypes;
pub mod entities;

mod query;
mod world;

pub use query::Query;
pub use world::{ChunkView, World};

pub mod prelude {
	pub use crate::components::{
		Component, ComponentBundle, ComponentId, ComponentMask, ComponentRegistry,
		ConstructKind, TypeDescriptor, MAX_COMPONENTS,
	};
	pub use crate::archetypes::{Archetype, Slot, CHUNK_SIZE};
	pub use crate::entities::{Entity, EntityRecord};
	pub use crate::query::Query;
	pub use crate::world::{ChunkView, World};
}

#[cfg(test)]
mod tests;
