use crate::components::{Component, ComponentId, ComponentRegistry};
use paste::paste;

/// A statically-typed set of component values that can be moved into storage
/// as a unit, implemented for tuples of [Component] types.
///
/// Used by [World::spawn](crate::World::spawn). Every element type must already
/// be registered; a bundle must not contain the same type twice.
pub trait ComponentBundle {
	/// Collect the [ComponentId] of every element, in declaration order.
	fn component_ids(registry: &ComponentRegistry, out: &mut Vec<ComponentId>);

	/// Hand every element to `put` as a raw pointer, transferring ownership.
	///
	/// # Safety
	/// `put` must bitwise-move the pointed-to value into storage exactly once;
	/// the bundle forgets its elements afterwards, so a value `put` skips is
	/// leaked and a value read twice is duplicated.
	unsafe fn move_into(self, registry: &ComponentRegistry, put: &mut dyn FnMut(ComponentId, *const u8));
}

impl ComponentBundle for () {
	fn component_ids(_: &ComponentRegistry, _: &mut Vec<ComponentId>) {}

	unsafe fn move_into(self, _: &ComponentRegistry, _: &mut dyn FnMut(ComponentId, *const u8)) {}
}

macro_rules! impl_component_bundle {
	($($t: ident),*) => {
		paste! {
			impl<$($t: Component),*> ComponentBundle for ($($t,)*) {
				fn component_ids(registry: &ComponentRegistry, out: &mut Vec<ComponentId>) {
					$(out.push(registry.expect_id::<$t>());)*
				}

				unsafe fn move_into(
					self, registry: &ComponentRegistry, put: &mut dyn FnMut(ComponentId, *const u8),
				) {
					let ($([<$t:lower>],)*) = self;
					$(
						put(registry.expect_id::<$t>(), &[<$t:lower>] as *const $t as *const u8);
						std::mem::forget([<$t:lower>]);
					)*
				}
			}
		}
	};
}

impl_component_bundle!(T0);
impl_component_bundle!(T0, T1);
impl_component_bundle!(T0, T1, T2);
impl_component_bundle!(T0, T1, T2, T3);
impl_component_bundle!(T0, T1, T2, T3, T4);
impl_component_bundle!(T0, T1, T2, T3, T4, T5);
impl_component_bundle!(T0, T1, T2, T3, T4, T5, T6);
impl_component_bundle!(T0, T1, T2, T3, T4, T5, T6, T7);
