//! # Employee Domain Types
//!
//! Domain-side representation of the registry, independent of the generated
//! wire messages in [`crate::proto`].
//!
//! - [`Employee`] - A stored record with its assigned [`EmployeeId`].
//! - [`NewEmployee`] - A candidate record awaiting an ID from the store.
//! - [`EmployeeFilter`] - A conjunction of optional constraints.
//!
//! Business rules (age range, positive salary, hiring-year range) live here
//! and are checked by the service before anything reaches the store. The
//! store itself trusts its callers.

use crate::ValidationError;
use core::ops::RangeInclusive;

/// Identifier assigned to an employee by the store.
pub type EmployeeId = i32;

/// Accepted employee ages, inclusive.
pub const AGE_RANGE: RangeInclusive<i32> = 18..=60;

/// Accepted years for the hiring-year lookup, inclusive.
pub const HIRING_YEAR_RANGE: RangeInclusive<i32> = 1900..=2100;

/// Departments every store starts with.
pub const SEED_DEPARTMENTS: [&str; 4] = ["IT", "HR", "Marketing", "Finance"];

/// An employee record as held by the store.
#[derive(Clone, Debug, PartialEq)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub age: i32,
    pub department: String,
    pub position: String,
    pub hiring_year: i32,
    pub salary: f64,
}

/// An employee that has not been assigned an ID yet.
#[derive(Clone, Debug, PartialEq)]
pub struct NewEmployee {
    pub name: String,
    pub age: i32,
    pub department: String,
    pub position: String,
    pub hiring_year: i32,
    pub salary: f64,
}

impl NewEmployee {
    /// Checks the fields the registry constrains, in order: age first, then
    /// salary. The first violation wins.
    ///
    /// A `NaN` salary is rejected along with zero and negative values.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !AGE_RANGE.contains(&self.age) {
            return Err(ValidationError::AgeOutOfRange);
        }
        if self.salary.is_nan() || self.salary <= 0.0 {
            return Err(ValidationError::NonPositiveSalary);
        }
        Ok(())
    }

    /// Attaches a store-assigned ID, producing the stored record.
    pub fn with_id(self, id: EmployeeId) -> Employee {
        Employee {
            id,
            name: self.name,
            age: self.age,
            department: self.department,
            position: self.position,
            hiring_year: self.hiring_year,
            salary: self.salary,
        }
    }
}

/// Validates the year accepted by the hiring-year lookup.
pub fn validate_hiring_year(year: i32) -> Result<i32, ValidationError> {
    if HIRING_YEAR_RANGE.contains(&year) {
        Ok(year)
    } else {
        Err(ValidationError::HiringYearOutOfRange)
    }
}

/// Optional constraints applied to every stored employee.
///
/// A `None` field is not applied. Present fields are combined with logical
/// AND. Strings compare exactly (case-sensitive), age and salary bounds are
/// inclusive, and the hiring year compares for equality.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmployeeFilter {
    pub department: Option<String>,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    pub position: Option<String>,
    pub hiring_year: Option<i32>,
    pub min_salary: Option<f64>,
    pub max_salary: Option<f64>,
}

impl EmployeeFilter {
    /// Returns `true` if no constraint is set, i.e. every employee matches.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn with_age_range(mut self, min: Option<i32>, max: Option<i32>) -> Self {
        self.min_age = min;
        self.max_age = max;
        self
    }

    pub fn with_salary_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_salary = min;
        self.max_salary = max;
        self
    }

    pub fn with_hiring_year(mut self, year: i32) -> Self {
        self.hiring_year = Some(year);
        self
    }

    /// Returns `true` if `employee` satisfies every present constraint.
    pub fn matches(&self, employee: &Employee) -> bool {
        if self
            .hiring_year
            .is_some_and(|year| employee.hiring_year != year)
        {
            return false;
        }
        if self
            .department
            .as_deref()
            .is_some_and(|department| employee.department != department)
        {
            return false;
        }
        if self.min_age.is_some_and(|min| employee.age < min) {
            return false;
        }
        if self.max_age.is_some_and(|max| employee.age > max) {
            return false;
        }
        if self
            .position
            .as_deref()
            .is_some_and(|position| employee.position != position)
        {
            return false;
        }
        if self.min_salary.is_some_and(|min| employee.salary < min) {
            return false;
        }
        if self.max_salary.is_some_and(|max| employee.salary > max) {
            return false;
        }
        true
    }
}
