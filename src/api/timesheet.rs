use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::{
    db::Storage,
    error::ApiError,
    model::{
        employee::Employee,
        timesheet::{Timesheet, TimesheetDate},
    },
    resolver::{Nested, Resolved, fetch},
    utils::{payload::JsonBody, validate::required},
};

const MISSING_FIELDS: &str = "Missing required fields";

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct TimesheetInput {
    #[schema(example = 8.0)]
    pub hours: Option<f64>,
    #[schema(example = 18.5)]
    pub rate: Option<f64>,
    /// Epoch timestamp or date string; stored and returned unchanged.
    pub date: Option<TimesheetDate>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TimesheetRequest {
    pub timesheet: Option<TimesheetInput>,
}

#[derive(Serialize, ToSchema)]
pub struct TimesheetResponse {
    pub timesheet: Timesheet,
}

#[derive(Serialize, ToSchema)]
pub struct TimesheetListResponse {
    pub timesheets: Vec<Timesheet>,
}

struct TimesheetFields {
    hours: f64,
    rate: f64,
    date: TimesheetDate,
}

impl TimesheetRequest {
    fn validate(self) -> Result<TimesheetFields, ApiError> {
        let input = self.timesheet.unwrap_or_default();
        match (
            required(input.hours),
            required(input.rate),
            required(input.date),
        ) {
            (Some(hours), Some(rate), Some(date)) => Ok(TimesheetFields { hours, rate, date }),
            _ => Err(ApiError::Validation(MISSING_FIELDS.to_string())),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/employees/{employeeId}/timesheets",
    params(("employeeId", Path, description = "Employee ID")),
    responses(
        (status = 200, body = TimesheetListResponse),
        (status = 404, body = ErrorBody)
    ),
    tag = "Timesheet"
)]
pub async fn list_timesheets(
    storage: web::Data<Storage>,
    Resolved(employee): Resolved<Employee>,
) -> Result<HttpResponse, ApiError> {
    let timesheets: Vec<Timesheet> = storage
        .query(
            "SELECT * FROM Timesheet WHERE employee_id = ?",
            vec![employee.id.into()],
        )
        .await?;

    Ok(HttpResponse::Ok().json(TimesheetListResponse { timesheets }))
}

#[utoipa::path(
    post,
    path = "/api/employees/{employeeId}/timesheets",
    params(("employeeId", Path, description = "Employee ID")),
    request_body = TimesheetRequest,
    responses(
        (status = 201, body = TimesheetResponse),
        (status = 400, description = "Missing hours, rate or date", body = ErrorBody),
        (status = 404, body = ErrorBody)
    ),
    tag = "Timesheet"
)]
pub async fn create_timesheet(
    storage: web::Data<Storage>,
    Resolved(employee): Resolved<Employee>,
    payload: JsonBody<TimesheetRequest>,
) -> Result<HttpResponse, ApiError> {
    let fields = payload.decode()?.validate()?;

    let result = storage
        .execute(
            r#"
            INSERT INTO Timesheet (employee_id, hours, rate, date)
            VALUES (?, ?, ?, ?)
            "#,
            vec![
                employee.id.into(),
                fields.hours.into(),
                fields.rate.into(),
                fields.date.into(),
            ],
        )
        .await?;
    info!(
        timesheet_id = result.last_insert_id,
        employee_id = employee.id,
        "Timesheet created"
    );

    // keyed on the generated id: several timesheets may share a date
    let timesheet = fetch::<Timesheet>(&storage, result.last_insert_id).await?;
    Ok(HttpResponse::Created().json(TimesheetResponse { timesheet }))
}

#[utoipa::path(
    put,
    path = "/api/employees/{employeeId}/timesheets/{timesheetId}",
    params(
        ("employeeId", Path, description = "Employee ID"),
        ("timesheetId", Path, description = "Timesheet ID, must belong to the employee")
    ),
    request_body = TimesheetRequest,
    responses(
        (status = 200, body = TimesheetResponse),
        (status = 400, body = ErrorBody),
        (status = 404, description = "Employee or timesheet not found", body = ErrorBody)
    ),
    tag = "Timesheet"
)]
pub async fn update_timesheet(
    storage: web::Data<Storage>,
    path: Nested<Employee, Timesheet>,
    payload: JsonBody<TimesheetRequest>,
) -> Result<HttpResponse, ApiError> {
    let fields = payload.decode()?.validate()?;
    let timesheet_id = path.child.id;

    storage
        .execute(
            "UPDATE Timesheet SET hours = ?, rate = ?, date = ? WHERE id = ?",
            vec![
                fields.hours.into(),
                fields.rate.into(),
                fields.date.into(),
                timesheet_id.into(),
            ],
        )
        .await?;

    let timesheet = fetch::<Timesheet>(&storage, timesheet_id).await?;
    Ok(HttpResponse::Ok().json(TimesheetResponse { timesheet }))
}

#[utoipa::path(
    delete,
    path = "/api/employees/{employeeId}/timesheets/{timesheetId}",
    params(
        ("employeeId", Path, description = "Employee ID"),
        ("timesheetId", Path, description = "Timesheet ID, must belong to the employee")
    ),
    responses(
        (status = 204, description = "Timesheet deleted"),
        (status = 404, body = ErrorBody)
    ),
    tag = "Timesheet"
)]
pub async fn delete_timesheet(
    storage: web::Data<Storage>,
    path: Nested<Employee, Timesheet>,
) -> Result<HttpResponse, ApiError> {
    storage
        .execute("DELETE FROM Timesheet WHERE id = ?", vec![path.child.id.into()])
        .await?;
    info!(timesheet_id = path.child.id, "Timesheet deleted");

    Ok(HttpResponse::NoContent().finish())
}
