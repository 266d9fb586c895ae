//! Common test utilities: in-memory ORM setup and sample employees

#![allow(dead_code)]

use autoincrement_example::infra::OrmSetup;
use autoincrement_example::{Config, Employee};
use chrono::NaiveDate;

/// Fresh in-memory database with the schema applied
pub async fn in_memory_setup() -> OrmSetup {
    OrmSetup::initialize(&Config::in_memory())
        .await
        .expect("in-memory ORM setup")
}

pub fn employee(name: &str, y: i32, m: u32, d: u32, exempt: bool, compensation: f32) -> Employee {
    Employee::new(
        name,
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date"),
        exempt,
        compensation,
    )
}

pub fn mark() -> Employee {
    employee("Mark", 1981, 1, 1, true, 51001.0)
}

pub fn bill() -> Employee {
    employee("Bill", 1982, 2, 2, false, 52002.0)
}

pub fn steve() -> Employee {
    employee("Steve", 1983, 3, 3, false, 53003.0)
}

pub fn mary() -> Employee {
    employee("Mary", 1984, 4, 4, false, 54004.0)
}

pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}

pub fn ids(employees: &[Employee]) -> Vec<Option<i32>> {
    employees.iter().map(|e| e.id).collect()
}
