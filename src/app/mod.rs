pub mod admin;
pub mod render;
