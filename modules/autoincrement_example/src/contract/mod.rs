//! Contract layer - public model and error types
//!
//! Transport- and storage-agnostic; nothing here depends on SeaORM.

pub mod error;
pub mod model;

pub use error::EmployeeError;
pub use model::{
    AggregateOp, AggregateValue, Employee, EmployeeField, EmployeeFilter, EmployeeQuery,
    InsertMode, SortOrder,
};
