//! Per-frame passes run by the frame controller, in order.

pub(crate) mod diffuse;
pub(crate) mod ignite;

pub use diffuse::diffuse;
pub use ignite::ignite;
