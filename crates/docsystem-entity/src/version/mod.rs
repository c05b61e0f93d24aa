//! Documentation release entities.

pub mod file_type;
pub mod kind;
pub mod model;

pub use file_type::FileType;
pub use kind::VersionType;
pub use model::{AttachmentFile, Version};
