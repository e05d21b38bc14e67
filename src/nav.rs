pub(crate) mod screen;

pub use screen::{NavAction, Screen};
