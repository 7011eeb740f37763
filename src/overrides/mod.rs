pub mod merge;
pub mod pending;
pub mod schema;
pub mod skeleton;
