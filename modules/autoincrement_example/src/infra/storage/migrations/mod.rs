//! Database migrations for the employee example
//!
//! Tables are created with `if_not_exists`, so the first run creates the
//! schema and later runs reuse it along with any stored rows.

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20241210_000001_create_employee::Migration)]
    }
}

mod m20241210_000001_create_employee {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Employee::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Employee::EmpId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Employee::Name).string().not_null())
                        .col(ColumnDef::new(Employee::Dob).date().not_null())
                        .col(ColumnDef::new(Employee::Exempt).boolean().not_null())
                        .col(ColumnDef::new(Employee::Compensation).float().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_employee_name")
                        .table(Employee::Table)
                        .col(Employee::Name)
                        .if_not_exists()
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Employee::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Employee {
        #[sea_orm(iden = "Employee")]
        Table,
        #[sea_orm(iden = "EmpId")]
        EmpId,
        Name,
        #[sea_orm(iden = "DOB")]
        Dob,
        Exempt,
        Compensation,
    }
}
