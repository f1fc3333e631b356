pub mod cart_items;
pub mod menu_items;
pub mod payments;
pub mod reviews;
pub mod users;
