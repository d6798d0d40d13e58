//! Storage engine for the employee directory.
//!
//! One connection pool, built at startup and injected where needed. Every
//! query goes through the parameterized query builder; user input is never
//! formatted into SQL text.

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, ConnectionTrait, Database, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Schema,
};
use staffq_core::Directory;
use staffq_entities::{departments, employees};
use tracing::info;

use crate::seed;

/// Storage engine over the two seeded relations.
pub struct DirectoryStore {
    db: DatabaseConnection,
}

impl DirectoryStore {
    /// Connect to the database at `database_url`.
    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        info!("Connecting to database for DirectoryStore");
        let db = Database::connect(database_url).await?;
        Ok(Self { db })
    }

    /// Get a reference to the database connection.
    #[must_use]
    pub const fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Create both relations if absent and insert any missing seed rows.
    ///
    /// Seeding is keyed on `id` with on-conflict-do-nothing, so calling
    /// this on every startup neither duplicates nor alters existing rows.
    pub async fn initialize(&self) -> anyhow::Result<()> {
        let backend = self.db.get_database_backend();
        let schema = Schema::new(backend);

        let mut employees_table = schema.create_table_from_entity(employees::Entity);
        employees_table.if_not_exists();
        self.db.execute(&employees_table).await?;

        let mut departments_table = schema.create_table_from_entity(departments::Entity);
        departments_table.if_not_exists();
        self.db.execute(&departments_table).await?;

        employees::Entity::insert_many(seed::employees())
            .on_conflict(
                OnConflict::column(employees::Column::Id)
                    .do_nothing()
                    .to_owned(),
            )
            .do_nothing()
            .exec(&self.db)
            .await?;

        departments::Entity::insert_many(seed::departments())
            .on_conflict(
                OnConflict::column(departments::Column::Id)
                    .do_nothing()
                    .to_owned(),
            )
            .do_nothing()
            .exec(&self.db)
            .await?;

        info!("DirectoryStore initialized");
        Ok(())
    }
}

#[async_trait]
impl Directory for DirectoryStore {
    async fn employee_names_by_department(
        &self,
        department: &str,
    ) -> anyhow::Result<Vec<String>> {
        let names = employees::Entity::find()
            .select_only()
            .column(employees::Column::Name)
            .filter(employees::Column::Department.eq(department))
            .order_by_asc(employees::Column::Id)
            .into_tuple::<String>()
            .all(&self.db)
            .await?;

        Ok(names)
    }

    async fn manager_by_department(&self, department: &str) -> anyhow::Result<Option<String>> {
        let manager = departments::Entity::find()
            .select_only()
            .column(departments::Column::Manager)
            .filter(departments::Column::Name.eq(department))
            .into_tuple::<String>()
            .one(&self.db)
            .await?;

        Ok(manager)
    }

    async fn employee_names_hired_after(&self, date: &str) -> anyhow::Result<Vec<String>> {
        // hire_date is ISO 8601 text, so the string comparison the database
        // performs here is also a chronological one.
        let names = employees::Entity::find()
            .select_only()
            .column(employees::Column::Name)
            .filter(employees::Column::HireDate.gt(date))
            .order_by_asc(employees::Column::Id)
            .into_tuple::<String>()
            .all(&self.db)
            .await?;

        Ok(names)
    }

    async fn salary_expense_by_department(
        &self,
        department: &str,
    ) -> anyhow::Result<Option<i64>> {
        let total = employees::Entity::find()
            .select_only()
            .column_as(employees::Column::Salary.sum(), "total")
            .filter(employees::Column::Department.eq(department))
            .into_tuple::<Option<i64>>()
            .one(&self.db)
            .await?;

        Ok(total.flatten())
    }
}
