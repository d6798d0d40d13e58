//! The `employees` relation.
//!
//! Rows are written once at seed time and never updated or deleted.
//! `hire_date` is stored as an ISO 8601 string so lexicographic order
//! equals chronological order.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    /// Seed-assigned identifier, not auto-incremented.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
    /// References `departments.name` by convention only; not a foreign key.
    pub department: String,
    pub salary: i64,
    pub hire_date: String,
    pub email: String,
    pub phone: String,
    pub job_title: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
