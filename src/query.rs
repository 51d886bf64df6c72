use crate::components::{ComponentId, ComponentMask};

/// A mask-based description of which archetypes and columns an iteration visits.
///
/// An archetype matches when its mask is a superset of the required ids and
/// disjoint from the disallowed ids. Optional ids do not affect matching; the
/// [ChunkView](crate::ChunkView) reports them as null columns when the visited
/// archetype lacks them.
///
/// ```
/// # use strata_ecs::prelude::*;
/// # let registry = ComponentRegistry::new();
/// # let position = registry.register::<[f32; 3]>();
/// # let scale = registry.register::<f32>();
/// # let frozen = registry.register::<u8>();
/// let query = Query::new().require(position).optional(scale).without(frozen);
/// ```
#[derive(Default, Clone)]
pub struct Query {
	required: Vec<ComponentId>,
	optional: Vec<ComponentId>,
	required_mask: ComponentMask,
	disallowed_mask: ComponentMask,
}

impl Query {
	pub fn new() -> Self {
		Self::default()
	}

	/// Require `id` to be present; its column is passed to the callback at the
	/// next required index.
	pub fn require(mut self, id: ComponentId) -> Self {
		debug_assert!(!self.disallowed_mask.contains(id), "id is both required and disallowed");
		self.required.push(id);
		self.required_mask.set(id);
		self
	}

	/// Pass `id`'s column to the callback when present, a null column otherwise.
	pub fn optional(mut self, id: ComponentId) -> Self {
		self.optional.push(id);
		self
	}

	/// Skip any archetype containing `id`.
	pub fn without(mut self, id: ComponentId) -> Self {
		debug_assert!(!self.required_mask.contains(id), "id is both required and disallowed");
		self.disallowed_mask.set(id);
		self
	}

	pub(crate) fn required_ids(&self) -> &[ComponentId] {
		&self.required
	}

	pub(crate) fn optional_ids(&self) -> &[ComponentId] {
		&self.optional
	}

	pub(crate) fn required_mask(&self) -> &ComponentMask {
		&self.required_mask
	}

	pub(crate) fn disallowed_mask(&self) -> &ComponentMask {
		&self.disallowed_mask
	}
}
