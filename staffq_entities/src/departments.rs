//! The `departments` relation.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "departments")]
pub struct Model {
    /// Seed-assigned identifier, not auto-incremented.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    /// Unique join key matched by `employees.department`.
    #[sea_orm(unique)]
    pub name: String,
    /// Free text; not a foreign key into `employees`.
    pub manager: String,
    pub budget: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
