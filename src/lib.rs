//! SnapShop is a desktop product customizer.
//!
//! The crate is split into a headless core and a thin egui front end:
//!
//! - [`Catalog`] lists the fixed products
//! - [`CustomizationState`] holds the in-progress image, text, colors and size
//! - [`PreviewRenderer`] composites that state into a [`PreviewFrame`]
//! - [`Cart`] keeps frozen snapshots of committed customizations
//! - [`Screen`] is the navigation state machine
//! - [`AppState`] ties them together behind [`AppState::update`]
#![forbid(unsafe_code)]

mod foundation;

pub mod app;
pub mod assets;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod customize;
pub mod nav;
pub mod render;
pub mod ui;

pub use crate::foundation::core::{Canvas, Price, Rgba8};
pub use crate::foundation::error::{ShopError, ShopResult};

pub use crate::app::{AppState, Message};
pub use crate::assets::{FontOpts, LoadedFont, PreparedImage, UploadOpts};
pub use crate::cart::{Cart, CartItem, CartItemId};
pub use crate::catalog::{Catalog, Product, ProductCategory, ProductId};
pub use crate::config::{AppConfig, WindowOpts};
pub use crate::customize::{CustomizationState, Size};
pub use crate::nav::{NavAction, Screen};
pub use crate::render::{ImageFit, PreviewFrame, PreviewOpts, PreviewRenderer};
