/// Module containing the OAuth2 session manager
pub mod auth;
/// Module containing the token pair model and session states
pub mod token;

pub use auth::Auth;
pub use token::{AuthState, TokenPair};
