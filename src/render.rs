//! CPU compositing of the customization preview.

pub(crate) mod frame;
pub(crate) mod preview;

pub use frame::PreviewFrame;
pub use preview::{ImageFit, PreviewOpts, PreviewRenderer, fit_transform};
