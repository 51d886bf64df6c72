mod entity;
mod directory;

pub use entity::*;
pub use directory::EntityRecord;

pub(crate) use directory::EntityDirectory;
