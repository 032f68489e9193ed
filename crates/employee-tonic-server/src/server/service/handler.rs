//! gRPC service implementation for the employee registry.
//!
//! This module defines [`EmployeeServiceImpl`], the concrete implementation
//! of the [`EmployeeService`] gRPC service defined in `proto/employee.proto`.
//!
//! ## Responsibilities
//!
//! - Validate requests before anything reaches the store.
//! - Translate between wire messages and domain records.
//! - Map domain failures onto gRPC status codes via [`Error`].
//! - Refuse new calls and drain admitted ones during shutdown.

use crate::server::{
    service::inflight::{InflightGuard, InflightTracker},
    store::EmployeeStore,
    telemetry::{
        increment_employees_added, increment_request_errors, increment_requests,
        record_employees_returned, record_request_duration,
    },
};
use core::time::Duration;
use employee_tonic_core::{
    Error,
    proto::{
        AddEmployeeRequest, AddEmployeeResponse, EmployeeFilterRequest, EmployeeListResponse,
        GetAllEmployeesResponse, GetDepartmentsResponse, GetEmployeeRequest, GetEmployeeResponse,
        GetEmployeesByHiringYearRequest, employee_service_server::EmployeeService,
    },
    types::{EmployeeFilter, NewEmployee, validate_hiring_year},
};
use std::{sync::Arc, time::Instant};
use tonic::{Request, Response, Status};

/// gRPC front end of the employee registry.
///
/// Cloning is cheap: clones share the same store and in-flight tracker.
#[derive(Clone)]
pub struct EmployeeServiceImpl {
    store: Arc<EmployeeStore>,
    inflight: Arc<InflightTracker>,
}

impl EmployeeServiceImpl {
    pub fn new(store: Arc<EmployeeStore>) -> Self {
        Self {
            store,
            inflight: Arc::new(InflightTracker::new()),
        }
    }

    pub fn store(&self) -> &Arc<EmployeeStore> {
        &self.store
    }

    /// Stops admitting calls and waits up to `drain_timeout` for in-flight
    /// calls to complete. Returns `true` if the drain finished in time.
    pub async fn shutdown(&self, drain_timeout: Duration) -> bool {
        self.inflight.shutdown(drain_timeout).await
    }

    fn begin(&self, method: &'static str) -> Result<Call<'_>, Status> {
        increment_requests(method);
        match self.inflight.enter() {
            Ok(guard) => Ok(Call {
                method,
                start: Instant::now(),
                _guard: guard,
            }),
            Err(e) => {
                tracing::debug!(method, "Rejected during shutdown");
                let status = Status::from(e);
                increment_request_errors(method, status.code());
                Err(status)
            }
        }
    }

    fn add(&self, candidate: NewEmployee) -> Result<AddEmployeeResponse, Error> {
        candidate.validate()?;
        let employee = self.store.save(candidate)?;
        increment_employees_added();
        tracing::info!(
            employee_id = employee.id,
            department = %employee.department,
            "Employee added"
        );
        Ok(AddEmployeeResponse {
            employee_id: employee.id,
        })
    }
}

/// One admitted RPC. Records duration and failures when finished.
struct Call<'a> {
    method: &'static str,
    start: Instant,
    _guard: InflightGuard<'a>,
}

impl Call<'_> {
    fn finish<T>(self, result: Result<T, Error>) -> Result<Response<T>, Status> {
        record_request_duration(self.method, self.start.elapsed().as_secs_f64() * 1000.0);
        match result {
            Ok(message) => Ok(Response::new(message)),
            Err(e) => {
                match &e {
                    Error::NotFound { .. } => tracing::debug!(method = self.method, "{e}"),
                    _ => tracing::warn!(method = self.method, "{e}"),
                }
                let status = Status::from(e);
                increment_request_errors(self.method, status.code());
                Err(status)
            }
        }
    }
}

#[tonic::async_trait]
impl EmployeeService for EmployeeServiceImpl {
    #[tracing::instrument(name = "GetAllEmployees", skip_all)]
    async fn get_all_employees(
        &self,
        _req: Request<()>,
    ) -> Result<Response<GetAllEmployeesResponse>, Status> {
        let call = self.begin("GetAllEmployees")?;
        let employees = self.store.list_all();
        record_employees_returned(employees.len());
        call.finish(Ok(employees.into_iter().collect()))
    }

    /// Validates age (18..=60) then salary (> 0) and stores the employee.
    #[tracing::instrument(
        name = "AddEmployee",
        skip_all,
        fields(age = req.get_ref().age, department = %req.get_ref().department)
    )]
    async fn add_employee(
        &self,
        req: Request<AddEmployeeRequest>,
    ) -> Result<Response<AddEmployeeResponse>, Status> {
        let call = self.begin("AddEmployee")?;
        call.finish(self.add(NewEmployee::from(req.into_inner())))
    }

    #[tracing::instrument(
        name = "GetEmployee",
        skip_all,
        fields(employee_id = req.get_ref().employee_id)
    )]
    async fn get_employee(
        &self,
        req: Request<GetEmployeeRequest>,
    ) -> Result<Response<GetEmployeeResponse>, Status> {
        let call = self.begin("GetEmployee")?;
        let id = req.get_ref().employee_id;
        let result = self
            .store
            .find_by_id(id)
            .map(|employee| GetEmployeeResponse {
                employee: Some(employee.into()),
            })
            .ok_or(Error::NotFound { id });
        call.finish(result)
    }

    /// Applies every present filter field; absent fields do not constrain.
    #[tracing::instrument(name = "FilterEmployees", skip_all, fields(filter = ?req.get_ref()))]
    async fn filter_employees(
        &self,
        req: Request<EmployeeFilterRequest>,
    ) -> Result<Response<EmployeeListResponse>, Status> {
        let call = self.begin("FilterEmployees")?;
        let filter = EmployeeFilter::from(req.into_inner());
        let employees = self.store.filter(&filter);
        tracing::debug!(matched = employees.len(), "Filter applied");
        record_employees_returned(employees.len());
        call.finish(Ok(employees.into_iter().collect()))
    }

    #[tracing::instrument(
        name = "GetEmployeesByHiringYear",
        skip_all,
        fields(hiring_year = req.get_ref().hiring_year)
    )]
    async fn get_employees_by_hiring_year(
        &self,
        req: Request<GetEmployeesByHiringYearRequest>,
    ) -> Result<Response<EmployeeListResponse>, Status> {
        let call = self.begin("GetEmployeesByHiringYear")?;
        let result = validate_hiring_year(req.get_ref().hiring_year)
            .map_err(Error::from)
            .map(|year| -> EmployeeListResponse {
                let employees = self.store.find_by_hiring_year(year);
                record_employees_returned(employees.len());
                employees.into_iter().collect()
            });
        call.finish(result)
    }

    #[tracing::instrument(name = "GetDepartments", skip_all)]
    async fn get_departments(
        &self,
        _req: Request<()>,
    ) -> Result<Response<GetDepartmentsResponse>, Status> {
        let call = self.begin("GetDepartments")?;
        call.finish(Ok(self.store.list_departments().into_iter().collect()))
    }
}
