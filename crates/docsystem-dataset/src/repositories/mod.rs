//! Read-only repositories over the shared [`Dataset`](crate::Dataset).

pub mod contact;
pub mod object;
pub mod version;

pub use contact::ContactRepository;
pub use object::ObjectRepository;
pub use version::VersionRepository;
