use employee_tonic_core::types::Employee;

/// The four records a seeded store starts with, IDs 1 through 4, one per
/// seed department.
pub fn seed_employees() -> Vec<Employee> {
    vec![
        Employee {
            id: 1,
            name: "John Doe".into(),
            age: 28,
            department: "IT".into(),
            position: "Software Engineer".into(),
            hiring_year: 2021,
            salary: 70000.0,
        },
        Employee {
            id: 2,
            name: "Jane Smith".into(),
            age: 32,
            department: "HR".into(),
            position: "HR Manager".into(),
            hiring_year: 2020,
            salary: 60000.0,
        },
        Employee {
            id: 3,
            name: "Alice Brown".into(),
            age: 25,
            department: "Marketing".into(),
            position: "Content Strategist".into(),
            hiring_year: 2019,
            salary: 50000.0,
        },
        Employee {
            id: 4,
            name: "Bob Johnson".into(),
            age: 30,
            department: "Finance".into(),
            position: "Financial Analyst".into(),
            hiring_year: 2022,
            salary: 80000.0,
        },
    ]
}
