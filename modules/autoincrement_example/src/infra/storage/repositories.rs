//! SeaORM repository implementation

use crate::contract::{
    AggregateOp, AggregateValue, Employee, EmployeeError, EmployeeField, EmployeeFilter,
    EmployeeQuery, InsertMode,
};
use crate::domain::repository::EmployeeRepository;
use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::{
    Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;

use super::{entity, mapper};

// ===== Employee Repository =====

pub struct SeaOrmEmployeeRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmEmployeeRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// SQLite reports integer aggregates for integer columns and for `COUNT`,
/// real ones for `AVG` and float columns.
fn yields_integer(op: AggregateOp, field: EmployeeField) -> bool {
    match op {
        AggregateOp::Count => true,
        AggregateOp::Avg => false,
        _ => !matches!(field, EmployeeField::Compensation),
    }
}

/// Text and date columns only support `COUNT`; the other aggregates have no
/// numeric value to report for them.
fn check_aggregate(op: AggregateOp, field: EmployeeField) -> Result<(), EmployeeError> {
    let textual = matches!(field, EmployeeField::Name | EmployeeField::DateOfBirth);
    if textual && op != AggregateOp::Count {
        return Err(EmployeeError::Validation {
            message: format!("{} is not supported on non-numeric field {}", op, field),
        });
    }
    Ok(())
}

fn aggregate_expr(op: AggregateOp, field: EmployeeField) -> SimpleExpr {
    let col = Expr::col(mapper::column(field));
    match op {
        AggregateOp::Max => Func::max(col).into(),
        AggregateOp::Min => Func::min(col).into(),
        AggregateOp::Sum => Func::sum(col).into(),
        AggregateOp::Avg => Func::avg(col).into(),
        AggregateOp::Count => Func::count(col).into(),
    }
}

#[async_trait]
impl EmployeeRepository for SeaOrmEmployeeRepository {
    async fn aggregate(
        &self,
        op: AggregateOp,
        field: EmployeeField,
        filter: Option<&EmployeeFilter>,
    ) -> Result<Option<AggregateValue>, EmployeeError> {
        check_aggregate(op, field)?;

        let mut select = entity::Entity::find()
            .select_only()
            .column_as(aggregate_expr(op, field), "value");
        if let Some(filter) = filter {
            select = select.filter(Condition::from(filter));
        }

        let value = if yields_integer(op, field) {
            select
                .into_tuple::<Option<i64>>()
                .one(&*self.db)
                .await?
                .flatten()
                .map(AggregateValue::Integer)
        } else {
            select
                .into_tuple::<Option<f64>>()
                .one(&*self.db)
                .await?
                .flatten()
                .map(AggregateValue::Real)
        };

        tracing::debug!(%op, %field, ?value, "aggregate");
        Ok(value)
    }

    async fn delete_all(&self, filter: Option<&EmployeeFilter>) -> Result<u64, EmployeeError> {
        let mut delete = entity::Entity::delete_many();
        if let Some(filter) = filter {
            delete = delete.filter(Condition::from(filter));
        }
        let result = delete.exec(&*self.db).await?;

        tracing::debug!(rows = result.rows_affected, "deleted employees");
        Ok(result.rows_affected)
    }

    async fn insert(&self, employee: &mut Employee, mode: InsertMode) -> Result<(), EmployeeError> {
        match mode {
            InsertMode::Default => {
                let active = mapper::to_insert_model(employee, false);
                entity::Entity::insert(active)
                    .exec_without_returning(&*self.db)
                    .await?;
            }
            InsertMode::EchoGeneratedId => {
                let active = mapper::to_insert_model(employee, false);
                let result = entity::Entity::insert(active).exec(&*self.db).await?;
                employee.id = Some(result.last_insert_id);
            }
            InsertMode::OverrideGeneratedId => {
                if employee.id.is_none() {
                    return Err(EmployeeError::MissingId {
                        name: employee.name.clone(),
                        operation: "override insert".to_string(),
                    });
                }
                let active = mapper::to_insert_model(employee, true);
                entity::Entity::insert(active)
                    .exec_without_returning(&*self.db)
                    .await?;
            }
        }

        tracing::debug!(name = %employee.name, ?mode, id = ?employee.id, "inserted employee");
        Ok(())
    }

    async fn update(&self, employee: &Employee) -> Result<(), EmployeeError> {
        let id = employee.id.ok_or_else(|| EmployeeError::MissingId {
            name: employee.name.clone(),
            operation: "update".to_string(),
        })?;

        let active = mapper::to_update_model(id, employee);
        match entity::Entity::update(active).exec(&*self.db).await {
            Ok(_) => {
                tracing::debug!(id, "updated employee");
                Ok(())
            }
            Err(DbErr::RecordNotUpdated) => Err(EmployeeError::NotFound { id }),
            Err(e) => Err(e.into()),
        }
    }

    async fn query(&self, query: &EmployeeQuery) -> Result<Vec<Employee>, EmployeeError> {
        let mut select = entity::Entity::find();
        if let Some(filter) = &query.filter {
            select = select.filter(Condition::from(filter));
        }
        for (field, order) in &query.order_by {
            select = select.order_by(mapper::column(*field), mapper::order(*order));
        }
        if let Some(limit) = query.max_results {
            select = select.limit(limit);
        }

        let results = select.all(&*self.db).await?;
        tracing::debug!(rows = results.len(), "queried employees");
        Ok(results.into_iter().map(Employee::from).collect())
    }
}
