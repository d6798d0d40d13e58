//! Query dispatch: classification, store lookup, and answer shaping.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::Directory;
use crate::extract::IntentExtractor;
use crate::intent::Intent;
use crate::recognize::EntityRecognizer;

/// Successful answer payload.
///
/// Serialized untagged so the wire value is either a plain string or an
/// array of names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Names(Vec<String>),
    Text(String),
}

/// Taxonomy class of a dispatch error, for boundary-side presentation
/// decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryErrorKind {
    /// No keyword rule matched.
    UnsupportedIntent,
    /// A rule matched but its required parameter could not be extracted.
    MissingParameter,
    /// The query ran and returned no rows.
    EmptyResult,
    /// Store or infrastructure failure.
    Failure,
}

/// Typed dispatch outcome, replacing the original catch-all
/// exception-to-string conversion. Every variant still renders as a flat
/// string at the boundary, with HTTP 200.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Unsupported query. Try another question.")]
    Unsupported,

    #[error("Invalid date format. Use YYYY-MM-DD.")]
    MissingDate,

    #[error("No employees found.")]
    NoEmployees,

    #[error("Department not found.")]
    DepartmentNotFound,

    #[error("No data available.")]
    NoData,

    #[error("Error processing query: {0}")]
    Store(#[from] anyhow::Error),
}

impl QueryError {
    /// The taxonomy class this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> QueryErrorKind {
        match self {
            Self::Unsupported => QueryErrorKind::UnsupportedIntent,
            Self::MissingDate => QueryErrorKind::MissingParameter,
            Self::NoEmployees | Self::DepartmentNotFound | Self::NoData => {
                QueryErrorKind::EmptyResult
            }
            Self::Store(_) => QueryErrorKind::Failure,
        }
    }
}

/// Stateless request handler wiring the extractor and the store together.
///
/// Both collaborators are injected at construction; the dispatcher holds no
/// cross-request state of its own.
pub struct QueryDispatcher<D, R>
where
    D: Send + Sync,
    R: Send + Sync,
{
    directory: D,
    extractor: IntentExtractor<R>,
}

impl<D, R> QueryDispatcher<D, R>
where
    D: Directory,
    R: EntityRecognizer,
{
    pub const fn new(directory: D, recognizer: R) -> Self {
        Self {
            directory,
            extractor: IntentExtractor::new(recognizer),
        }
    }

    /// Handle one query end to end.
    ///
    /// An unsupported query returns before any store access. A query that
    /// matches several keyword sets resolves by the first rule in the
    /// classification order.
    pub async fn handle(&self, query: &str) -> Result<Answer, QueryError> {
        let department = self.extractor.department(query);
        let intent = Intent::classify(query, department.is_some());

        debug!(
            intent = intent.as_str(),
            department = ?department,
            "classified query"
        );

        match (intent, department) {
            (Intent::EmployeesByDepartment, Some(dept)) => {
                let names = self.directory.employee_names_by_department(&dept).await?;
                if names.is_empty() {
                    Err(QueryError::NoEmployees)
                } else {
                    Ok(Answer::Names(names))
                }
            }
            (Intent::ManagerByDepartment, Some(dept)) => self
                .directory
                .manager_by_department(&dept)
                .await?
                .map(Answer::Text)
                .ok_or(QueryError::DepartmentNotFound),
            (Intent::HiredAfter, _) => {
                let date = self.extractor.date(query).ok_or(QueryError::MissingDate)?;
                let names = self.directory.employee_names_hired_after(&date).await?;
                if names.is_empty() {
                    Err(QueryError::NoEmployees)
                } else {
                    Ok(Answer::Names(names))
                }
            }
            (Intent::SalaryExpense, Some(dept)) => {
                // The original treats a zero sum the same as no rows.
                match self.directory.salary_expense_by_department(&dept).await? {
                    Some(total) if total != 0 => Ok(Answer::Text(format!(
                        "Total salary expense for {dept}: {total}"
                    ))),
                    _ => Err(QueryError::NoData),
                }
            }
            _ => Err(QueryError::Unsupported),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognize::{EntityLabel, EntitySpan};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FakeRecognizer {
        spans: Vec<EntitySpan>,
    }

    impl EntityRecognizer for FakeRecognizer {
        fn recognize(&self, _text: &str) -> Vec<EntitySpan> {
            self.spans.clone()
        }
    }

    #[derive(Default)]
    struct FakeDirectory {
        calls: Mutex<Vec<&'static str>>,
        employees: Vec<String>,
        manager: Option<String>,
        hired: Vec<String>,
        expense: Option<i64>,
        fail: bool,
    }

    impl FakeDirectory {
        fn record(&self, call: &'static str) -> anyhow::Result<()> {
            if let Ok(mut calls) = self.calls.lock() {
                calls.push(call);
            }
            if self.fail {
                anyhow::bail!("store unreachable");
            }
            Ok(())
        }

        fn call_count(&self) -> usize {
            self.calls.lock().map(|calls| calls.len()).unwrap_or(0)
        }
    }

    #[async_trait]
    impl Directory for FakeDirectory {
        async fn employee_names_by_department(
            &self,
            _department: &str,
        ) -> anyhow::Result<Vec<String>> {
            self.record("employees")?;
            Ok(self.employees.clone())
        }

        async fn manager_by_department(
            &self,
            _department: &str,
        ) -> anyhow::Result<Option<String>> {
            self.record("manager")?;
            Ok(self.manager.clone())
        }

        async fn employee_names_hired_after(&self, _date: &str) -> anyhow::Result<Vec<String>> {
            self.record("hired_after")?;
            Ok(self.hired.clone())
        }

        async fn salary_expense_by_department(
            &self,
            _department: &str,
        ) -> anyhow::Result<Option<i64>> {
            self.record("salary_expense")?;
            Ok(self.expense)
        }
    }

    fn vocabulary_only() -> FakeRecognizer {
        FakeRecognizer { spans: vec![] }
    }

    #[tokio::test]
    async fn test_employees_by_department() {
        let directory = FakeDirectory {
            employees: vec!["Alice".to_string(), "David".to_string()],
            ..Default::default()
        };
        let dispatcher = QueryDispatcher::new(directory, vocabulary_only());

        let answer = dispatcher.handle("Which employees work in Sales?").await;
        assert!(
            matches!(answer, Ok(Answer::Names(ref names)) if names == &["Alice", "David"])
        );
    }

    #[tokio::test]
    async fn test_employees_empty_result() {
        let dispatcher = QueryDispatcher::new(FakeDirectory::default(), vocabulary_only());

        let answer = dispatcher.handle("employees in sales").await;
        assert!(matches!(answer, Err(QueryError::NoEmployees)));
    }

    #[tokio::test]
    async fn test_manager_by_department() {
        let directory = FakeDirectory {
            manager: Some("Alice".to_string()),
            ..Default::default()
        };
        let dispatcher = QueryDispatcher::new(directory, vocabulary_only());

        let answer = dispatcher.handle("who is the manager of Sales").await;
        assert!(matches!(answer, Ok(Answer::Text(ref name)) if name == "Alice"));
    }

    #[tokio::test]
    async fn test_manager_not_found() {
        let dispatcher = QueryDispatcher::new(FakeDirectory::default(), vocabulary_only());

        let answer = dispatcher.handle("manager of marketing").await;
        assert!(matches!(answer, Err(QueryError::DepartmentNotFound)));
    }

    #[tokio::test]
    async fn test_hired_after_with_date() {
        let directory = FakeDirectory {
            hired: vec!["Frank".to_string()],
            ..Default::default()
        };
        let recognizer = FakeRecognizer {
            spans: vec![EntitySpan::new("2022-01-01", EntityLabel::Date, 17)],
        };
        let dispatcher = QueryDispatcher::new(directory, recognizer);

        let answer = dispatcher.handle("who was hired after 2022-01-01").await;
        assert!(matches!(answer, Ok(Answer::Names(ref names)) if names == &["Frank"]));
    }

    #[tokio::test]
    async fn test_hired_after_missing_date() {
        let dispatcher = QueryDispatcher::new(FakeDirectory::default(), vocabulary_only());

        let answer = dispatcher.handle("who was hired after the merger").await;
        assert!(matches!(answer, Err(QueryError::MissingDate)));
    }

    #[tokio::test]
    async fn test_salary_expense_formatting() {
        let directory = FakeDirectory {
            expense: Some(145_000),
            ..Default::default()
        };
        let dispatcher = QueryDispatcher::new(directory, vocabulary_only());

        let answer = dispatcher.handle("salary expense for engineering").await;
        assert!(matches!(
            answer,
            Ok(Answer::Text(ref text)) if text == "Total salary expense for Engineering: 145000"
        ));
    }

    #[tokio::test]
    async fn test_salary_expense_zero_is_no_data() {
        let directory = FakeDirectory {
            expense: Some(0),
            ..Default::default()
        };
        let dispatcher = QueryDispatcher::new(directory, vocabulary_only());

        let answer = dispatcher.handle("salary expense for sales").await;
        assert!(matches!(answer, Err(QueryError::NoData)));
    }

    #[tokio::test]
    async fn test_first_rule_wins_over_manager() {
        let directory = FakeDirectory {
            employees: vec!["Alice".to_string(), "David".to_string()],
            manager: Some("Alice".to_string()),
            ..Default::default()
        };
        let dispatcher = QueryDispatcher::new(directory, vocabulary_only());

        let answer = dispatcher
            .handle("list employees and manager for Sales")
            .await;
        assert!(
            matches!(answer, Ok(Answer::Names(ref names)) if names == &["Alice", "David"])
        );
    }

    #[tokio::test]
    async fn test_unsupported_without_store_access() {
        let directory = FakeDirectory::default();
        let dispatcher = QueryDispatcher::new(directory, vocabulary_only());

        let answer = dispatcher.handle("what is the weather").await;
        assert!(matches!(answer, Err(QueryError::Unsupported)));
        assert_eq!(dispatcher.directory.call_count(), 0);
    }

    #[tokio::test]
    async fn test_store_failure_is_wrapped() {
        let directory = FakeDirectory {
            fail: true,
            ..Default::default()
        };
        let dispatcher = QueryDispatcher::new(directory, vocabulary_only());

        let answer = dispatcher.handle("employees in sales").await;
        match answer {
            Err(err @ QueryError::Store(_)) => {
                assert_eq!(err.kind(), QueryErrorKind::Failure);
                assert_eq!(
                    err.to_string(),
                    "Error processing query: store unreachable"
                );
            }
            other => panic!("expected store error, got {other:?}"),
        }
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            QueryError::Unsupported.kind(),
            QueryErrorKind::UnsupportedIntent
        );
        assert_eq!(
            QueryError::MissingDate.kind(),
            QueryErrorKind::MissingParameter
        );
        assert_eq!(QueryError::NoEmployees.kind(), QueryErrorKind::EmptyResult);
        assert_eq!(QueryError::NoData.kind(), QueryErrorKind::EmptyResult);
    }

    #[test]
    fn test_answer_serialization_shapes() {
        let names = Answer::Names(vec!["Alice".to_string()]);
        let text = Answer::Text("Department not found.".to_string());

        assert_eq!(
            serde_json::to_string(&names).unwrap_or_default(),
            r#"["Alice"]"#
        );
        assert_eq!(
            serde_json::to_string(&text).unwrap_or_default(),
            r#""Department not found.""#
        );
    }
}
