//! Demo script - the fixed sequence of ORM operations

use super::repository::EmployeeRepository;
use super::transcript::Transcript;
use crate::contract::{
    AggregateOp, Employee, EmployeeError, EmployeeField, EmployeeFilter, EmployeeQuery,
    InsertMode,
};
use chrono::NaiveDate;

/// Identifier supplied by the application for the override insert
pub const FORCED_ID: i32 = 555;

/// What the script observed at each step
#[derive(Debug, Clone)]
pub struct DemoReport {
    /// Largest identifier stored before the script ran
    pub previous_max_id: Option<i64>,
    /// Rows removed by the bulk delete
    pub removed_rows: u64,
    /// Mark after an insert that echoed the generated id
    pub echoed: Employee,
    /// Bill right after an insert that did not echo the id
    pub unechoed: Employee,
    /// Bill re-read by id after the update was persisted
    pub updated: Employee,
    /// Every row after Mark and Bill were inserted
    pub after_first_inserts: Vec<Employee>,
    /// Every row ordered by id after Steve was inserted
    pub after_steve: Vec<Employee>,
    /// Every row ordered by id after Mary was inserted with a forced id
    pub final_rows: Vec<Employee>,
    /// Human-readable log of the run
    pub transcript: Transcript,
}

fn date(y: i32, m: u32, d: u32) -> Result<NaiveDate, EmployeeError> {
    NaiveDate::from_ymd_opt(y, m, d)
        .ok_or_else(|| EmployeeError::Validation {
            message: format!("invalid date {}-{}-{}", y, m, d),
        })
}

/// Run the demo script against one ORM session
///
/// Steps run strictly in order; the first failure aborts the rest and is
/// returned unchanged.
pub async fn run_demo(repo: &dyn EmployeeRepository) -> Result<DemoReport, EmployeeError> {
    let mut log = Transcript::new();

    let previous_max_id = repo
        .aggregate(AggregateOp::Max, EmployeeField::Id, None)
        .await?
        .map(|v| v.as_i64());
    log.section(&format!(
        "Last max id in the database is {}",
        previous_max_id.map_or_else(|| "none".to_string(), |id| id.to_string())
    ));

    log.section("Deleting all existing Employee objects from the database");
    let removed_rows = repo.delete_all(None).await?;
    log.log(format!("Deleted {} row(s)", removed_rows));

    log.section("Creating and saving two new Employee objects (Mark and Bill)");
    let mut mark = Employee::new("Mark", date(1981, 1, 1)?, true, 51001.0);
    repo.insert(&mut mark, InsertMode::EchoGeneratedId).await?;

    log.section("Mark, with its id initialized from the database generated value");
    log.object(&mark);

    // The generated id is not needed yet, so skip fetching it back
    let mut bill = Employee::new("Bill", date(1982, 2, 2)?, false, 52002.0);
    repo.insert(&mut bill, InsertMode::Default).await?;

    log.section("Bill, with its id not initialized after the insert");
    log.object(&bill);
    let unechoed = bill;

    log.section("Querying all the Employee objects");
    let after_first_inserts = repo.query(&EmployeeQuery::all()).await?;
    log.results(&after_first_inserts);

    log.section("Querying for the Employee (name = 'Bill')");
    let by_name = EmployeeQuery::all()
        .filter(EmployeeFilter::name("Bill"))
        .limit(2);
    let mut found = repo.query(&by_name).await?;
    if found.len() != 1 {
        return Err(EmployeeError::UnexpectedCount {
            query: "name = 'Bill'".to_string(),
            expected: 1,
            actual: found.len(),
        });
    }
    let mut updated = found.remove(0);
    log.object(&updated);

    log.section("Updating Employee Bill");
    updated.exempt = true;
    updated.compensation = 52002.02;
    repo.update(&updated).await?;

    let id = updated.id.ok_or_else(|| EmployeeError::MissingId {
        name: updated.name.clone(),
        operation: "re-read after update".to_string(),
    })?;
    let mut reread = repo
        .query(&EmployeeQuery::all().filter(EmployeeFilter::IdEquals(id)))
        .await?;
    if reread.len() != 1 {
        return Err(EmployeeError::UnexpectedCount {
            query: format!("id = {}", id),
            expected: 1,
            actual: reread.len(),
        });
    }
    let updated = reread.remove(0);
    log.section("Employee Bill as stored after the update");
    log.object(&updated);

    log.section("Creating and saving a new Employee Steve");
    let mut steve = Employee::new("Steve", date(1983, 3, 3)?, false, 53003.0);
    repo.insert(&mut steve, InsertMode::Default).await?;

    let ordered = EmployeeQuery::all().order_by(EmployeeField::Id);

    log.section("Querying all the Employee objects ordered by id");
    let after_steve = repo.query(&ordered).await?;
    log.results(&after_steve);

    log.section(&format!(
        "Creating and saving a new Employee Mary with application supplied id {}",
        FORCED_ID
    ));
    let mut mary = Employee::new("Mary", date(1984, 4, 4)?, false, 54004.0).with_id(FORCED_ID);
    repo.insert(&mut mary, InsertMode::OverrideGeneratedId).await?;

    log.section("Querying all the Employee objects ordered by id");
    let final_rows = repo.query(&ordered).await?;
    log.results(&final_rows);

    Ok(DemoReport {
        previous_max_id,
        removed_rows,
        echoed: mark,
        unechoed,
        updated,
        after_first_inserts,
        after_steve,
        final_rows,
        transcript: log,
    })
}
