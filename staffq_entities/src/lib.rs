//! Database entity definitions for the staffq workspace.

pub mod departments;
pub mod employees;
