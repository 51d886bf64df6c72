mod chunk;
mod archetype;
mod archetype_store;

pub use chunk::CHUNK_SIZE;
pub use archetype::{Archetype, Slot};

pub(crate) use chunk::{Chunk, ChunkLayout, ColumnLayout};
pub(crate) use archetype_store::ArchetypeStore;
