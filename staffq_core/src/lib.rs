#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use async_trait::async_trait;

pub mod dispatch;
pub mod extract;
pub mod intent;
pub mod recognize;

pub use dispatch::{Answer, QueryDispatcher, QueryError, QueryErrorKind};
pub use extract::{DEPARTMENT_VOCABULARY, IntentExtractor};
pub use intent::Intent;
pub use recognize::{EntityLabel, EntityRecognizer, EntitySpan};

/// Read contract for the employee directory store.
///
/// All lookups are pure reads over seeded data. Department names are
/// matched by exact string equality; date comparison is lexicographic
/// over ISO 8601 strings.
#[async_trait]
pub trait Directory: Send + Sync {
    /// Names of employees in a department, in insertion order.
    async fn employee_names_by_department(
        &self,
        department: &str,
    ) -> anyhow::Result<Vec<String>>;

    /// Manager of a department, or `None` when the department is not seeded.
    async fn manager_by_department(&self, department: &str) -> anyhow::Result<Option<String>>;

    /// Names of employees with a hire date strictly greater than `date`.
    async fn employee_names_hired_after(&self, date: &str) -> anyhow::Result<Vec<String>>;

    /// Sum of salaries in a department, or `None` when no rows matched.
    async fn salary_expense_by_department(
        &self,
        department: &str,
    ) -> anyhow::Result<Option<i64>>;
}
