// Adapters layer: concrete catalog sources and the hosted chat backend.

pub mod catalog;
pub mod chat;
