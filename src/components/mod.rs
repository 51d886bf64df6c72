mod component_id;
mod component_mask;
mod component_type;
mod registry;
mod bundle;

pub use component_id::*;
pub use component_mask::*;
pub use component_type::*;
pub use registry::*;
pub use bundle::*;
