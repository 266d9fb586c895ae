//! Repository trait for employee data access
//!
//! This is the contract the demo script needs from the ORM runtime.
//! The SeaORM implementation lives in infra/storage/repositories.rs.

use crate::contract::{
    AggregateOp, AggregateValue, Employee, EmployeeError, EmployeeField, EmployeeFilter,
    EmployeeQuery, InsertMode,
};
use async_trait::async_trait;

/// Employee persistence operations, as exposed by one ORM session
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Apply an aggregate function over one column; `None` when no row contributes
    ///
    /// Name and date-of-birth only support `COUNT`.
    async fn aggregate(
        &self,
        op: AggregateOp,
        field: EmployeeField,
        filter: Option<&EmployeeFilter>,
    ) -> Result<Option<AggregateValue>, EmployeeError>;

    /// Delete every employee matching `filter` (all of them when `None`)
    async fn delete_all(&self, filter: Option<&EmployeeFilter>) -> Result<u64, EmployeeError>;

    /// Insert an employee
    ///
    /// With [`InsertMode::EchoGeneratedId`] the generated key is written into
    /// `employee.id`; with [`InsertMode::Default`] the object is left as is.
    /// [`InsertMode::OverrideGeneratedId`] requires `employee.id` to be set.
    async fn insert(&self, employee: &mut Employee, mode: InsertMode) -> Result<(), EmployeeError>;

    /// Persist every attribute of an employee, keyed by its id
    async fn update(&self, employee: &Employee) -> Result<(), EmployeeError>;

    /// Shallow query
    async fn query(&self, query: &EmployeeQuery) -> Result<Vec<Employee>, EmployeeError>;
}
