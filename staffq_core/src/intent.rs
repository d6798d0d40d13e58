//! Intent classification for incoming queries.
//!
//! Classification is a fixed, ordered sequence of keyword-containment tests
//! over the lowercased input. The department-guarded rules only fire when a
//! department was extracted from the same query, so a query like "show the
//! manager" with no recognizable department falls through to the catch-all.

use serde::{Deserialize, Serialize};

/// The fixed set of query categories the dispatcher understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum Intent {
    /// "which employees work in Sales"
    EmployeesByDepartment,
    /// "who is the manager of Engineering"
    ManagerByDepartment,
    /// "who was hired after 2021-01-01"
    HiredAfter,
    /// "salary expense for Marketing"
    SalaryExpense,
    /// Anything outside the fixed set.
    #[default]
    Unsupported,
}

impl Intent {
    /// Returns the string representation.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::EmployeesByDepartment => "employees_by_department",
            Self::ManagerByDepartment => "manager_by_department",
            Self::HiredAfter => "hired_after",
            Self::SalaryExpense => "salary_expense",
            Self::Unsupported => "unsupported",
        }
    }

    /// Classify a query by ordered keyword containment.
    ///
    /// The first matching rule wins: a query containing both "employees"
    /// and "manager" resolves to [`Self::EmployeesByDepartment`]. The
    /// hired-after rule carries no department guard; its date requirement
    /// is enforced at dispatch time.
    #[must_use]
    pub fn classify(query: &str, has_department: bool) -> Self {
        let lower = query.to_lowercase();

        if lower.contains("employees") && has_department {
            Self::EmployeesByDepartment
        } else if lower.contains("manager") && has_department {
            Self::ManagerByDepartment
        } else if lower.contains("hired after") {
            Self::HiredAfter
        } else if lower.contains("salary expense") && has_department {
            Self::SalaryExpense
        } else {
            Self::Unsupported
        }
    }
}
