//! Fixed seed rows inserted at first startup.

use sea_orm::Set;
use staffq_entities::{departments, employees};

const EMPLOYEES: [(i32, &str, &str, i64, &str, &str, &str, &str); 6] = [
    (
        1,
        "Alice",
        "Sales",
        50_000,
        "2021-01-15",
        "alice@sales.com",
        "555-1234",
        "Sales Manager",
    ),
    (
        2,
        "Bob",
        "Engineering",
        70_000,
        "2020-06-10",
        "bob@eng.com",
        "555-5678",
        "Software Engineer",
    ),
    (
        3,
        "Charlie",
        "Marketing",
        60_000,
        "2022-03-20",
        "charlie@marketing.com",
        "555-8765",
        "Marketing Specialist",
    ),
    (
        4,
        "David",
        "Sales",
        55_000,
        "2021-02-25",
        "david@sales.com",
        "555-4321",
        "Sales Associate",
    ),
    (
        5,
        "Eve",
        "Engineering",
        75_000,
        "2019-11-10",
        "eve@eng.com",
        "555-1357",
        "Senior Software Engineer",
    ),
    (
        6,
        "Frank",
        "Marketing",
        65_000,
        "2023-01-05",
        "frank@marketing.com",
        "555-2468",
        "Marketing Manager",
    ),
];

const DEPARTMENTS: [(i32, &str, &str, i64); 3] = [
    (1, "Sales", "Alice", 200_000),
    (2, "Engineering", "Bob", 500_000),
    (3, "Marketing", "Charlie", 150_000),
];

pub fn employees() -> Vec<employees::ActiveModel> {
    EMPLOYEES
        .iter()
        .map(
            |&(id, name, department, salary, hire_date, email, phone, job_title)| {
                employees::ActiveModel {
                    id: Set(id),
                    name: Set(name.to_string()),
                    department: Set(department.to_string()),
                    salary: Set(salary),
                    hire_date: Set(hire_date.to_string()),
                    email: Set(email.to_string()),
                    phone: Set(phone.to_string()),
                    job_title: Set(job_title.to_string()),
                }
            },
        )
        .collect()
}

pub fn departments() -> Vec<departments::ActiveModel> {
    DEPARTMENTS
        .iter()
        .map(|&(id, name, manager, budget)| departments::ActiveModel {
            id: Set(id),
            name: Set(name.to_string()),
            manager: Set(manager.to_string()),
            budget: Set(budget),
        })
        .collect()
}
