//! Auto-increment ORM example
//!
//! Exercises SeaORM against a single `Employee` entity whose primary key is
//! generated by the database. The fixed demo script inserts, queries, updates
//! and deletes employees and records every step in a human-readable transcript.

// Public exports
pub mod contract;
pub use contract::{
    AggregateOp, AggregateValue, Employee, EmployeeError, EmployeeField, EmployeeFilter,
    EmployeeQuery, InsertMode, SortOrder,
};

pub mod config;
pub use config::Config;

pub mod module;
pub use module::EmployeeDemoModule;

pub mod domain;
pub use domain::{DemoReport, Transcript, TRANSCRIPT_TARGET};

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod infra;
