//! SeaORM entities for the store schema.

pub mod post;
pub mod session;
pub mod user;
