pub(crate) mod items;

pub use items::{Cart, CartItem, CartItemId};
