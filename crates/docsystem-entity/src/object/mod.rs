//! System object catalog entities.

pub mod kind;
pub mod model;
pub mod status;

pub use kind::KNOWN_OBJECT_TYPES;
pub use model::SystemObject;
pub use status::ObjectStatus;
