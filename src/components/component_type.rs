use std::any::TypeId;
use std::ptr;

/// The trait every component type must satisfy.
///
/// The bounds cover everything the storage engine needs to manage a component's
/// memory without knowing its concrete type: [Default] for default construction,
/// [Clone] for copy construction, and [Send] + [Sync] so chunk bodies can be
/// handed to worker threads during parallel iteration. Drop glue is always
/// available. The blanket impl means no explicit opt-in is required.
pub trait Component: Default + Clone + Send + Sync + 'static {}

impl<T: Default + Clone + Send + Sync + 'static> Component for T {}

/// How component memory should be initialized from a caller-provided source.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ConstructKind {
	/// Default-construct in place; no source value is read.
	Default,
	/// Clone-construct from the source value, leaving the source untouched.
	Clone,
	/// Bitwise-move from the source value. The caller relinquishes ownership
	/// and must not drop the source afterwards.
	Move,
}

/// A runtime description of one component type: its memory layout plus a table
/// of monomorphized function pointers for constructing, cloning and dropping a
/// value in type-erased storage.
///
/// Built once per concrete type by [TypeDescriptor::of] and stored in the
/// [ComponentRegistry](crate::components::ComponentRegistry), read-only afterwards.
/// Move construction has no table entry since moves are bitwise in Rust.
#[derive(Copy, Clone)]
pub struct TypeDescriptor {
	size: usize,
	align: usize,
	type_id: TypeId,
	type_name: &'static str,
	default_fn: unsafe fn(*mut u8),
	clone_fn: unsafe fn(*const u8, *mut u8),
	drop_fn: unsafe fn(*mut u8),
}

impl TypeDescriptor {
	/// Build the descriptor of the type `T`.
	pub fn of<T: Component>() -> Self {
		unsafe fn default_fn<T: Default>(dst: *mut u8) {
			ptr::write(dst as *mut T, T::default());
		}

		unsafe fn clone_fn<T: Clone>(src: *const u8, dst: *mut u8) {
			ptr::write(dst as *mut T, (*(src as *const T)).clone());
		}

		unsafe fn drop_fn<T>(value: *mut u8) {
			ptr::drop_in_place(value as *mut T);
		}

		Self {
			size: std::mem::size_of::<T>(),
			align: std::mem::align_of::<T>(),
			type_id: TypeId::of::<T>(),
			type_name: std::any::type_name::<T>(),
			default_fn: default_fn::<T>,
			clone_fn: clone_fn::<T>,
			drop_fn: drop_fn::<T>,
		}
	}

	#[inline(always)]
	pub const fn size(&self) -> usize {
		self.size
	}

	#[inline(always)]
	pub const fn align(&self) -> usize {
		self.align
	}

	pub const fn type_id(&self) -> TypeId {
		self.type_id
	}

	pub const fn type_name(&self) -> &'static str {
		self.type_name
	}

	/// Default-construct a value at `dst`.
	///
	/// # Safety
	/// `dst` must be properly aligned, writable memory of at least [size](Self::size)
	/// bytes, holding no live value.
	#[inline(always)]
	pub unsafe fn default_in_place(&self, dst: *mut u8) {
		(self.default_fn)(dst)
	}

	/// Clone-construct the value at `src` into `dst`.
	///
	/// # Safety
	/// `src` must point to a live value of the described type. `dst` must be
	/// properly aligned, writable memory holding no live value.
	#[inline(always)]
	pub unsafe fn clone_into(&self, src: *const u8, dst: *mut u8) {
		(self.clone_fn)(src, dst)
	}

	/// Bitwise-move the value at `src` into `dst`.
	///
	/// # Safety
	/// Same as [clone_into](Self::clone_into); additionally the caller must treat
	/// `src` as moved-from and never drop it.
	#[inline(always)]
	pub unsafe fn move_into(&self, src: *const u8, dst: *mut u8) {
		ptr::copy_nonoverlapping(src, dst, self.size);
	}

	/// Drop the value at `value` in place.
	///
	/// # Safety
	/// `value` must point to a live value of the described type.
	#[inline(always)]
	pub unsafe fn drop_in_place(&self, value: *mut u8) {
		(self.drop_fn)(value)
	}
}
