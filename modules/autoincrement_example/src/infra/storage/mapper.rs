//! Entity to model mappers
//!
//! Conversions between the SeaORM entity and contract types, plus the
//! translation of typed filters and sort keys into SeaORM conditions.

use super::entity;
use crate::contract::{Employee, EmployeeError, EmployeeField, EmployeeFilter, SortOrder};
use sea_orm::{ColumnTrait, Condition, DbErr, Order};

// ===== Employee Conversions =====

impl From<entity::Model> for Employee {
    fn from(entity: entity::Model) -> Self {
        Self {
            id: Some(entity.id),
            name: entity.name,
            date_of_birth: entity.date_of_birth,
            exempt: entity.exempt,
            compensation: entity.compensation,
        }
    }
}

/// Active model for an insert; the key is only sent when `keep_id` is set
pub(crate) fn to_insert_model(employee: &Employee, keep_id: bool) -> entity::ActiveModel {
    use sea_orm::ActiveValue::*;

    entity::ActiveModel {
        id: match employee.id {
            Some(id) if keep_id => Set(id),
            _ => NotSet,
        },
        name: Set(employee.name.clone()),
        date_of_birth: Set(employee.date_of_birth),
        exempt: Set(employee.exempt),
        compensation: Set(employee.compensation),
    }
}

/// Active model for an update keyed by `id`
pub(crate) fn to_update_model(id: i32, employee: &Employee) -> entity::ActiveModel {
    use sea_orm::ActiveValue::*;

    entity::ActiveModel {
        id: Unchanged(id),
        name: Set(employee.name.clone()),
        date_of_birth: Set(employee.date_of_birth),
        exempt: Set(employee.exempt),
        compensation: Set(employee.compensation),
    }
}

// ===== Query Conversions =====

pub(crate) fn column(field: EmployeeField) -> entity::Column {
    match field {
        EmployeeField::Id => entity::Column::Id,
        EmployeeField::Name => entity::Column::Name,
        EmployeeField::DateOfBirth => entity::Column::DateOfBirth,
        EmployeeField::Exempt => entity::Column::Exempt,
        EmployeeField::Compensation => entity::Column::Compensation,
    }
}

pub(crate) fn order(order: SortOrder) -> Order {
    match order {
        SortOrder::Ascending => Order::Asc,
        SortOrder::Descending => Order::Desc,
    }
}

impl From<&EmployeeFilter> for Condition {
    fn from(filter: &EmployeeFilter) -> Self {
        match filter {
            EmployeeFilter::IdEquals(id) => Condition::all().add(entity::Column::Id.eq(*id)),
            EmployeeFilter::IdAtLeast(id) => Condition::all().add(entity::Column::Id.gte(*id)),
            EmployeeFilter::NameEquals(name) => {
                Condition::all().add(entity::Column::Name.eq(name.as_str()))
            }
            EmployeeFilter::ExemptEquals(exempt) => {
                Condition::all().add(entity::Column::Exempt.eq(*exempt))
            }
            EmployeeFilter::All(filters) => filters
                .iter()
                .fold(Condition::all(), |cond, f| cond.add(Condition::from(f))),
        }
    }
}

// ===== Error Conversions =====

impl From<DbErr> for EmployeeError {
    fn from(err: DbErr) -> Self {
        EmployeeError::storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sea_orm::ActiveValue;

    fn bill() -> Employee {
        Employee::new(
            "Bill",
            NaiveDate::from_ymd_opt(1982, 2, 2).unwrap(),
            false,
            52002.0,
        )
    }

    #[test]
    fn insert_model_drops_id_unless_kept() {
        let emp = bill().with_id(42);
        assert_eq!(to_insert_model(&emp, false).id, ActiveValue::NotSet);
        assert_eq!(to_insert_model(&emp, true).id, ActiveValue::Set(42));
        assert_eq!(to_insert_model(&bill(), true).id, ActiveValue::NotSet);
    }

    #[test]
    fn update_model_keys_on_id() {
        let model = to_update_model(3, &bill());
        assert_eq!(model.id, ActiveValue::Unchanged(3));
        assert_eq!(model.name, ActiveValue::Set("Bill".to_string()));
    }

    #[test]
    fn entity_model_maps_to_employee_with_id() {
        let model = entity::Model {
            id: 9,
            name: "Steve".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1983, 3, 3).unwrap(),
            exempt: false,
            compensation: 53003.0,
        };
        let emp = Employee::from(model);
        assert_eq!(emp.id, Some(9));
        assert_eq!(emp.name, "Steve");
    }

    #[test]
    fn fields_map_to_columns() {
        assert!(matches!(column(EmployeeField::Id), entity::Column::Id));
        assert!(matches!(
            column(EmployeeField::DateOfBirth),
            entity::Column::DateOfBirth
        ));
        assert!(matches!(order(SortOrder::Descending), Order::Desc));
    }
}
