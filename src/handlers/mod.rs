pub mod auth;
pub mod wishlist;

pub use auth::{login, register};
pub use wishlist::add_wishlist_item;

#[cfg(test)]
mod tests;
