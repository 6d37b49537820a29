pub mod cart_item;
