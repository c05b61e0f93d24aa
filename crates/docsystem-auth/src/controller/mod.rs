//! Client-side session controller.

pub mod guard;
pub mod session;
pub mod state;

pub use session::AuthController;
pub use state::AuthState;
