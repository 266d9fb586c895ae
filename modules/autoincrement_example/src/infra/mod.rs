//! Infrastructure layer - ORM setup and SeaORM storage

pub mod setup;
pub mod storage;

pub use setup::{OrmResource, OrmSetup};
