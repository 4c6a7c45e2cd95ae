use crate::{
    db::Storage,
    error::ApiError,
    model::employee::Employee,
    resolver::{Resolved, fetch},
    utils::{payload::JsonBody, validate::required},
};
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

const MISSING_FIELDS: &str = "Please provide name, position, and wage";

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct EmployeeInput {
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    #[schema(example = "Line Cook")]
    pub position: Option<String>,
    #[schema(example = 18.5)]
    pub wage: Option<f64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct EmployeeRequest {
    pub employee: Option<EmployeeInput>,
}

#[derive(Serialize, ToSchema)]
pub struct EmployeeResponse {
    pub employee: Employee,
}

#[derive(Serialize, ToSchema)]
pub struct EmployeeListResponse {
    pub employees: Vec<Employee>,
}

struct EmployeeFields {
    name: String,
    position: String,
    wage: f64,
}

impl EmployeeRequest {
    fn validate(self) -> Result<EmployeeFields, ApiError> {
        let input = self.employee.unwrap_or_default();
        match (
            required(input.name),
            required(input.position),
            required(input.wage),
        ) {
            (Some(name), Some(position), Some(wage)) => Ok(EmployeeFields {
                name,
                position,
                wage,
            }),
            _ => Err(ApiError::Validation(MISSING_FIELDS.to_string())),
        }
    }
}

/// List current employees
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "Employees still on staff", body = EmployeeListResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn list_employees(storage: web::Data<Storage>) -> Result<HttpResponse, ApiError> {
    let employees: Vec<Employee> = storage
        .query("SELECT * FROM Employee WHERE is_current_employee = 1", vec![])
        .await?;

    Ok(HttpResponse::Ok().json(EmployeeListResponse { employees }))
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = EmployeeRequest,
    responses(
        (status = 201, description = "Employee created", body = EmployeeResponse),
        (status = 400, description = "Missing name, position or wage", body = ErrorBody),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    storage: web::Data<Storage>,
    payload: JsonBody<EmployeeRequest>,
) -> Result<HttpResponse, ApiError> {
    let fields = payload.decode()?.validate()?;

    let result = storage
        .execute(
            r#"
            INSERT INTO Employee (name, position, wage, is_current_employee)
            VALUES (?, ?, ?, ?)
            "#,
            vec![
                fields.name.into(),
                fields.position.into(),
                fields.wage.into(),
                true.into(),
            ],
        )
        .await?;
    info!(employee_id = result.last_insert_id, "Employee created");

    let employee = fetch::<Employee>(&storage, result.last_insert_id).await?;
    Ok(HttpResponse::Created().json(EmployeeResponse { employee }))
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/api/employees/{employeeId}",
    params(
        ("employeeId", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = EmployeeResponse),
        (status = 404, description = "Employee not found", body = ErrorBody)
    ),
    tag = "Employee"
)]
pub async fn get_employee(employee: Resolved<Employee>) -> HttpResponse {
    HttpResponse::Ok().json(EmployeeResponse {
        employee: employee.into_inner(),
    })
}

/// Update Employee
#[utoipa::path(
    put,
    path = "/api/employees/{employeeId}",
    params(
        ("employeeId", Path, description = "Employee ID")
    ),
    request_body = EmployeeRequest,
    responses(
        (status = 200, description = "Employee updated", body = EmployeeResponse),
        (status = 400, description = "Missing name, position or wage", body = ErrorBody),
        (status = 404, description = "Employee not found", body = ErrorBody),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn update_employee(
    storage: web::Data<Storage>,
    Resolved(employee): Resolved<Employee>,
    payload: JsonBody<EmployeeRequest>,
) -> Result<HttpResponse, ApiError> {
    let fields = payload.decode()?.validate()?;

    storage
        .execute(
            "UPDATE Employee SET name = ?, position = ?, wage = ? WHERE id = ?",
            vec![
                fields.name.into(),
                fields.position.into(),
                fields.wage.into(),
                employee.id.into(),
            ],
        )
        .await?;

    let employee = fetch::<Employee>(&storage, employee.id).await?;
    Ok(HttpResponse::Ok().json(EmployeeResponse { employee }))
}

/// Retire Employee
///
/// The row is kept and flagged as no longer current; the response carries
/// the retired record.
#[utoipa::path(
    delete,
    path = "/api/employees/{employeeId}",
    params(
        ("employeeId", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee marked as no longer current", body = EmployeeResponse),
        (status = 404, description = "Employee not found", body = ErrorBody),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    storage: web::Data<Storage>,
    Resolved(employee): Resolved<Employee>,
) -> Result<HttpResponse, ApiError> {
    storage
        .execute(
            "UPDATE Employee SET is_current_employee = ? WHERE id = ?",
            vec![false.into(), employee.id.into()],
        )
        .await?;
    info!(employee_id = employee.id, "Employee retired");

    let employee = fetch::<Employee>(&storage, employee.id).await?;
    Ok(HttpResponse::Ok().json(EmployeeResponse { employee }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: serde_json::Value) -> EmployeeRequest {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn wage_of_zero_counts_as_missing() {
        let err = request(serde_json::json!({
            "employee": { "name": "A", "position": "B", "wage": 0 }
        }))
        .validate()
        .err()
        .unwrap();
        assert_eq!(err.to_string(), MISSING_FIELDS);
    }

    #[test]
    fn missing_wrapper_is_a_validation_error() {
        assert!(request(serde_json::json!({})).validate().is_err());
        assert!(request(serde_json::json!({ "employee": null })).validate().is_err());
    }

    #[test]
    fn complete_payload_validates() {
        let fields = request(serde_json::json!({
            "employee": { "name": "A", "position": "B", "wage": 12 }
        }))
        .validate()
        .unwrap();
        assert_eq!(fields.name, "A");
        assert_eq!(fields.wage, 12.0);
    }
}
