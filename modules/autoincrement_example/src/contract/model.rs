//! Contract models for the employee example
//!
//! These models are storage-agnostic. NO SeaORM types appear here; the
//! conversions live in `infra::storage::mapper`.

use chrono::NaiveDate;
use std::fmt;

/// Employee domain object
///
/// `id` stays `None` until the database assigns one and the caller asks for it
/// to be echoed back, or until the caller sets it explicitly for an override
/// insert.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    /// Primary key (database generated unless overridden)
    pub id: Option<i32>,
    /// Employee name
    pub name: String,
    /// Date of birth
    pub date_of_birth: NaiveDate,
    /// Exempt from overtime rules
    pub exempt: bool,
    /// Yearly compensation
    pub compensation: f32,
}

impl Employee {
    /// Create an employee without an identifier
    pub fn new(
        name: impl Into<String>,
        date_of_birth: NaiveDate,
        exempt: bool,
        compensation: f32,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            date_of_birth,
            exempt,
            compensation,
        }
    }

    /// Same employee with a caller-supplied identifier
    pub fn with_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }
}

/// Queryable employee attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmployeeField {
    Id,
    Name,
    DateOfBirth,
    Exempt,
    Compensation,
}

impl fmt::Display for EmployeeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::DateOfBirth => "date_of_birth",
            Self::Exempt => "exempt",
            Self::Compensation => "compensation",
        };
        f.write_str(name)
    }
}

/// Typed row predicate
#[derive(Debug, Clone, PartialEq)]
pub enum EmployeeFilter {
    /// `id = value`
    IdEquals(i32),
    /// `id >= value`
    IdAtLeast(i32),
    /// `name = value`
    NameEquals(String),
    /// `exempt = value`
    ExemptEquals(bool),
    /// Every inner filter must hold
    All(Vec<EmployeeFilter>),
}

impl EmployeeFilter {
    /// Shorthand for [`EmployeeFilter::NameEquals`]
    pub fn name(name: impl Into<String>) -> Self {
        Self::NameEquals(name.into())
    }

    /// Conjunction with another filter, flattening nested conjunctions
    pub fn and(self, other: EmployeeFilter) -> Self {
        match self {
            Self::All(mut filters) => {
                filters.push(other);
                Self::All(filters)
            }
            first => Self::All(vec![first, other]),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Shallow employee query: optional predicate, sort keys and row cap
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EmployeeQuery {
    pub filter: Option<EmployeeFilter>,
    pub order_by: Vec<(EmployeeField, SortOrder)>,
    pub max_results: Option<u64>,
}

impl EmployeeQuery {
    /// Every employee, storage order
    pub fn all() -> Self {
        Self::default()
    }

    pub fn filter(mut self, filter: EmployeeFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Append an ascending sort key
    pub fn order_by(self, field: EmployeeField) -> Self {
        self.order_by_with(field, SortOrder::Ascending)
    }

    pub fn order_by_with(mut self, field: EmployeeField, order: SortOrder) -> Self {
        self.order_by.push((field, order));
        self
    }

    pub fn limit(mut self, max_results: u64) -> Self {
        self.max_results = Some(max_results);
        self
    }
}

/// How an insert treats the primary key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertMode {
    /// Database generates the key; the in-memory object is left untouched
    #[default]
    Default,
    /// Database generates the key and it is written back into the object
    EchoGeneratedId,
    /// The caller-supplied key is stored instead of a generated one
    OverrideGeneratedId,
}

/// Aggregate function applied over one column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateOp {
    Max,
    Min,
    Sum,
    Avg,
    Count,
}

impl fmt::Display for AggregateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Max => "max",
            Self::Min => "min",
            Self::Sum => "sum",
            Self::Avg => "avg",
            Self::Count => "count",
        };
        f.write_str(name)
    }
}

/// Result of an aggregate query
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AggregateValue {
    Integer(i64),
    Real(f64),
}

impl AggregateValue {
    /// Integer view; real values are truncated
    pub fn as_i64(&self) -> i64 {
        match *self {
            Self::Integer(v) => v,
            Self::Real(v) => v as i64,
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Integer(v) => v as f64,
            Self::Real(v) => v,
        }
    }
}

impl fmt::Display for AggregateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{}", v),
            Self::Real(v) => write!(f, "{}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_employee_has_no_id() {
        let dob = NaiveDate::from_ymd_opt(1981, 1, 1).unwrap();
        let emp = Employee::new("Mark", dob, true, 51001.0);
        assert_eq!(emp.id, None);
        assert_eq!(emp.with_id(7).id, Some(7));
    }

    #[test]
    fn and_flattens_conjunctions() {
        let filter = EmployeeFilter::name("Bill")
            .and(EmployeeFilter::ExemptEquals(true))
            .and(EmployeeFilter::IdAtLeast(2));
        match filter {
            EmployeeFilter::All(parts) => assert_eq!(parts.len(), 3),
            other => panic!("expected conjunction, got {:?}", other),
        }
    }

    #[test]
    fn query_builder_collects_sort_keys() {
        let query = EmployeeQuery::all()
            .order_by(EmployeeField::Id)
            .order_by_with(EmployeeField::Name, SortOrder::Descending)
            .limit(2);
        assert_eq!(query.order_by.len(), 2);
        assert_eq!(query.order_by[1], (EmployeeField::Name, SortOrder::Descending));
        assert_eq!(query.max_results, Some(2));
        assert!(query.filter.is_none());
    }

    #[test]
    fn aggregate_value_views() {
        assert_eq!(AggregateValue::Integer(555).as_f64(), 555.0);
        assert_eq!(AggregateValue::Real(52002.5).as_i64(), 52002);
        assert_eq!(AggregateValue::Integer(3).to_string(), "3");
    }
}
