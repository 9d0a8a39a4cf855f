pub mod cart;
pub mod menu;
pub mod results;
pub mod roles;
pub mod testimonial;
pub mod users;
