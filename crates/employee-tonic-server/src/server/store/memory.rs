//! Process-wide employee store.
//!
//! [`EmployeeStore`] owns the record list and the department set behind a
//! single [`RwLock`]. Writers assign the ID, append the record, and register
//! the department under one write lock, so IDs are unique and insertion
//! order matches ID order. Readers clone out under a read lock and never
//! hold it across an `.await`.
//!
//! The store performs no validation. Callers are expected to have checked
//! [`NewEmployee::validate`] first.

use super::seed::seed_employees;
use employee_tonic_core::{
    Error, Result,
    types::{Employee, EmployeeFilter, EmployeeId, NewEmployee, SEED_DEPARTMENTS},
};
use parking_lot::RwLock;
use std::collections::BTreeSet;

/// Thread-safe in-memory collection of employees and department names.
#[derive(Debug)]
pub struct EmployeeStore {
    inner: RwLock<Inner>,
}

#[derive(Debug)]
struct Inner {
    employees: Vec<Employee>,
    departments: BTreeSet<String>,
    // `None` once every positive `i32` has been handed out.
    next_id: Option<EmployeeId>,
}

impl EmployeeStore {
    /// Creates a store with the seed departments and no employees. The first
    /// saved employee receives ID 1.
    pub fn empty() -> Self {
        Self::from_records(Vec::new())
    }

    /// Creates a store holding the four seed employees (IDs 1-4).
    pub fn seeded() -> Self {
        Self::from_records(seed_employees())
    }

    fn from_records(employees: Vec<Employee>) -> Self {
        let mut departments: BTreeSet<String> =
            SEED_DEPARTMENTS.iter().map(|d| (*d).to_string()).collect();
        departments.extend(employees.iter().map(|e| e.department.clone()));

        let next_id = match employees.iter().map(|e| e.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };

        Self {
            inner: RwLock::new(Inner {
                employees,
                departments,
                next_id,
            }),
        }
    }

    /// Returns every stored employee in insertion order.
    pub fn list_all(&self) -> Vec<Employee> {
        self.inner.read().employees.clone()
    }

    /// Returns every known department name, sorted.
    pub fn list_departments(&self) -> Vec<String> {
        self.inner.read().departments.iter().cloned().collect()
    }

    /// Stores `candidate` under a freshly assigned ID and registers its
    /// department if it is new.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IdSpaceExhausted`] if no unused ID remains.
    pub fn save(&self, candidate: NewEmployee) -> Result<Employee> {
        let mut inner = self.inner.write();
        let id = inner.next_id.ok_or(Error::IdSpaceExhausted)?;
        inner.next_id = id.checked_add(1);

        if !inner.departments.contains(&candidate.department) {
            inner.departments.insert(candidate.department.clone());
        }

        let employee = candidate.with_id(id);
        inner.employees.push(employee.clone());
        Ok(employee)
    }

    /// Looks up an employee by ID.
    pub fn find_by_id(&self, id: EmployeeId) -> Option<Employee> {
        self.inner
            .read()
            .employees
            .iter()
            .find(|e| e.id == id)
            .cloned()
    }

    /// Returns every employee hired in `year`, in store order.
    pub fn find_by_hiring_year(&self, year: i32) -> Vec<Employee> {
        self.inner
            .read()
            .employees
            .iter()
            .filter(|e| e.hiring_year == year)
            .cloned()
            .collect()
    }

    /// Returns every employee matching `filter`, in store order.
    pub fn filter(&self, filter: &EmployeeFilter) -> Vec<Employee> {
        self.inner
            .read()
            .employees
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.read().employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for EmployeeStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn candidate(name: &str, department: &str, hiring_year: i32) -> NewEmployee {
        NewEmployee {
            name: name.into(),
            age: 32,
            department: department.into(),
            position: "Support".into(),
            hiring_year,
            salary: 1500.0,
        }
    }

    #[test]
    fn seeded_store_holds_four_employees_in_order() {
        let store = EmployeeStore::seeded();
        let ids: Vec<_> = store.list_all().iter().map(|e| e.id).collect();
        assert_eq!(ids, [1, 2, 3, 4]);
        assert_eq!(store.len(), 4);
        assert_eq!(
            store.list_departments(),
            ["Finance", "HR", "IT", "Marketing"]
        );
    }

    #[test]
    fn empty_store_keeps_seed_departments() {
        let store = EmployeeStore::empty();
        assert!(store.is_empty());
        assert_eq!(store.list_departments().len(), SEED_DEPARTMENTS.len());

        let saved = store.save(candidate("First", "IT", 2020)).unwrap();
        assert_eq!(saved.id, 1);
    }

    #[test]
    fn save_assigns_the_next_id_and_appends() {
        let store = EmployeeStore::seeded();
        let saved = store.save(candidate("Aaron Lennon", "IT", 2020)).unwrap();
        assert_eq!(saved.id, 5);
        assert_eq!(store.find_by_id(5), Some(saved.clone()));
        assert_eq!(store.list_all().last(), Some(&saved));

        let next = store.save(candidate("Theo Black", "IT", 2020)).unwrap();
        assert_eq!(next.id, 6);
    }

    #[test]
    fn save_registers_new_departments_once() {
        let store = EmployeeStore::seeded();
        store.save(candidate("A", "Legal", 2020)).unwrap();
        store.save(candidate("B", "Legal", 2021)).unwrap();
        store.save(candidate("C", "IT", 2021)).unwrap();

        let departments = store.list_departments();
        assert_eq!(departments.len(), 5);
        assert_eq!(departments.iter().filter(|d| *d == "Legal").count(), 1);
    }

    #[test]
    fn find_by_id_misses_unknown_ids() {
        let store = EmployeeStore::seeded();
        assert_eq!(store.find_by_id(-1), None);
        assert_eq!(store.find_by_id(0), None);
        assert_eq!(store.find_by_id(5), None);
        assert_eq!(store.find_by_id(3).map(|e| e.name), Some("Alice Brown".into()));
    }

    #[test]
    fn find_by_hiring_year_preserves_store_order() {
        let store = EmployeeStore::seeded();
        store.save(candidate("Late Hire", "IT", 2021)).unwrap();

        let names: Vec<_> = store
            .find_by_hiring_year(2021)
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, ["John Doe", "Late Hire"]);
        assert!(store.find_by_hiring_year(1999).is_empty());
    }

    #[test]
    fn filter_applies_every_present_field() {
        let store = EmployeeStore::seeded();
        assert_eq!(store.filter(&EmployeeFilter::default()).len(), 4);

        let ages: Vec<_> = store
            .filter(&EmployeeFilter::default().with_age_range(Some(25), Some(30)))
            .into_iter()
            .map(|e| e.age)
            .collect();
        assert_eq!(ages, [28, 25, 30]);

        let it = store.filter(&EmployeeFilter::default().with_department("IT"));
        assert_eq!(it.len(), 1);
        assert_eq!(it[0].name, "John Doe");
    }

    #[test]
    fn exhausted_id_space_is_reported() {
        let store = EmployeeStore::seeded();
        store.inner.write().next_id = Some(EmployeeId::MAX);

        let last = store.save(candidate("Last", "IT", 2020)).unwrap();
        assert_eq!(last.id, EmployeeId::MAX);
        assert_eq!(
            store.save(candidate("Overflow", "IT", 2020)),
            Err(Error::IdSpaceExhausted)
        );
        assert_eq!(store.len(), 5);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn concurrent_saves_receive_unique_ids() {
        const TASKS: usize = 8;
        const SAVES_PER_TASK: usize = 250;

        let store = Arc::new(EmployeeStore::seeded());
        let tasks: Vec<_> = (0..TASKS)
            .map(|task| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    let mut ids = Vec::with_capacity(SAVES_PER_TASK);
                    for i in 0..SAVES_PER_TASK {
                        let department = format!("Dept {task}");
                        let saved = store
                            .save(candidate(&format!("Worker {task}-{i}"), &department, 2020))
                            .unwrap();
                        ids.push(saved.id);
                    }
                    ids
                })
            })
            .collect();

        let mut seen = HashSet::new();
        for task in tasks {
            for id in task.await.unwrap() {
                assert!(seen.insert(id), "duplicate id {id}");
            }
        }

        assert_eq!(seen.len(), TASKS * SAVES_PER_TASK);
        assert_eq!(store.len(), 4 + TASKS * SAVES_PER_TASK);
        assert_eq!(store.list_departments().len(), 4 + TASKS);

        let ids: Vec<_> = store.list_all().iter().map(|e| e.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }
}
