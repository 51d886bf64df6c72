use crate::components::{Component, ComponentId, TypeDescriptor, MAX_COMPONENTS};
use std::collections::HashMap;
use parking_lot::RwLock;
use std::any::TypeId;

/// The table of every registered component type, indexed by [ComponentId].
///
/// A registry is an explicit object rather than process-wide state: construct one,
/// register every component type during startup, then share it (usually through an
/// [Arc](std::sync::Arc)) with any number of independent [Worlds](crate::World).
/// Registration is idempotent per type and `&self`, so the registration phase does
/// not need exclusive access. After that phase the registry is effectively
/// read-only; [descriptors](TypeDescriptor) are `Copy` and handed out by value.
pub struct ComponentRegistry {
	inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
	descriptors: Vec<TypeDescriptor>,
	ids: HashMap<TypeId, ComponentId>,
}

impl ComponentRegistry {
	pub fn new() -> Self {
		Self {
			inner: RwLock::new(Inner::default()),
		}
	}

	/// Register the component type `T`, assigning the next unused [ComponentId].
	/// Repeated registration of the same type returns the previously assigned id.
	///
	/// # Panics
	/// Panics if more than [MAX_COMPONENTS] distinct types are registered.
	pub fn register<T: Component>(&self) -> ComponentId {
		let mut inner = self.inner.write();
		if let Some(id) = inner.ids.get(&TypeId::of::<T>()) {
			return *id;
		}

		assert!(
			inner.descriptors.len() < MAX_COMPONENTS,
			"cannot register {}: the limit of {} component types is exhausted",
			std::any::type_name::<T>(),
			MAX_COMPONENTS,
		);

		let descriptor = TypeDescriptor::of::<T>();
		let id = ComponentId::new(inner.descriptors.len());

		log::debug!("registered component {} as id {}", descriptor.type_name(), id.value());

		inner.descriptors.push(descriptor);
		inner.ids.insert(TypeId::of::<T>(), id);
		id
	}

	/// Get the id of the type `T`, or [None] if it was never registered.
	pub fn id_of<T: Component>(&self) -> Option<ComponentId> {
		self.inner.read().ids.get(&TypeId::of::<T>()).copied()
	}

	/// Get the id of the type `T`.
	///
	/// # Panics
	/// Panics if `T` was never registered.
	pub fn expect_id<T: Component>(&self) -> ComponentId {
		match self.id_of::<T>() {
			Some(id) => id,
			None => panic!("component type {} is not registered", std::any::type_name::<T>()),
		}
	}

	/// Get the [TypeDescriptor] assigned to `id`.
	///
	/// # Panics
	/// Panics if `id` does not belong to this registry.
	pub fn descriptor(&self, id: ComponentId) -> TypeDescriptor {
		let inner = self.inner.read();
		match inner.descriptors.get(id.value()) {
			Some(descriptor) => *descriptor,
			None => panic!("component id {} is not registered", id.value()),
		}
	}

	/// The number of registered component types.
	pub fn len(&self) -> usize {
		self.inner.read().descriptors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl Default for ComponentRegistry {
	fn default() -> Self {
		Self::new()
	}
}
