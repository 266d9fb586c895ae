//! SeaORM entity for the `Employee` table
//!
//! This is the declarative mapping: the primary key lives in column `EmpId`
//! and is generated by the database (`INTEGER PRIMARY KEY AUTOINCREMENT`).

use sea_orm::entity::prelude::*;

/// Employee table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "Employee")]
pub struct Model {
    /// RDBMS generated primary key
    #[sea_orm(primary_key, auto_increment = true, column_name = "EmpId")]
    pub id: i32,

    pub name: String,

    #[sea_orm(column_name = "DOB")]
    pub date_of_birth: Date,

    pub exempt: bool,

    pub compensation: f32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
