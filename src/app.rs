//! Application state and the message dispatch that drives it.
//!
//! Views never mutate state directly: they emit [`Message`]s, [`AppState::update`] applies them,
//! and derived views (the preview raster) are refreshed before control returns.

pub(crate) mod state;

pub use state::{AppState, Message};
