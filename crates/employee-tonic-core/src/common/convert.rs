//! Conversions between generated wire messages and domain types.
//!
//! Request messages convert into domain inputs ([`NewEmployee`],
//! [`EmployeeFilter`]) and domain records convert back into
//! [`proto::Employee`]. Response lists can be collected directly from
//! iterators of domain values.

use crate::proto;
use crate::types::{Employee, EmployeeFilter, NewEmployee};

impl From<Employee> for proto::Employee {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            age: employee.age,
            department: employee.department,
            position: employee.position,
            hiring_year: employee.hiring_year,
            salary: employee.salary,
        }
    }
}

impl From<proto::Employee> for Employee {
    fn from(employee: proto::Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            age: employee.age,
            department: employee.department,
            position: employee.position,
            hiring_year: employee.hiring_year,
            salary: employee.salary,
        }
    }
}

impl From<proto::AddEmployeeRequest> for NewEmployee {
    fn from(req: proto::AddEmployeeRequest) -> Self {
        Self {
            name: req.name,
            age: req.age,
            department: req.department,
            position: req.position,
            hiring_year: req.hiring_year,
            salary: req.salary,
        }
    }
}

impl From<NewEmployee> for proto::AddEmployeeRequest {
    fn from(employee: NewEmployee) -> Self {
        Self {
            name: employee.name,
            age: employee.age,
            department: employee.department,
            position: employee.position,
            hiring_year: employee.hiring_year,
            salary: employee.salary,
        }
    }
}

impl From<proto::EmployeeFilterRequest> for EmployeeFilter {
    fn from(req: proto::EmployeeFilterRequest) -> Self {
        Self {
            department: req.department,
            min_age: req.min_age,
            max_age: req.max_age,
            position: req.position,
            hiring_year: req.hiring_year,
            min_salary: req.min_salary,
            max_salary: req.max_salary,
        }
    }
}

impl From<String> for proto::Department {
    fn from(department_name: String) -> Self {
        Self { department_name }
    }
}

impl FromIterator<Employee> for proto::GetAllEmployeesResponse {
    fn from_iter<I: IntoIterator<Item = Employee>>(iter: I) -> Self {
        Self {
            employees: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl FromIterator<Employee> for proto::EmployeeListResponse {
    fn from_iter<I: IntoIterator<Item = Employee>>(iter: I) -> Self {
        Self {
            employees: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl FromIterator<String> for proto::GetDepartmentsResponse {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            departments: iter.into_iter().map(Into::into).collect(),
        }
    }
}
