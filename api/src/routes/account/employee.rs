use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::{CreateEmployeeRequest, EmailQuery};
use crate::handlers::{resolve_caller, ApiError};
use crate::middleware::AuthContext;

/// Handler for POST /api/v1/account/createEmployee (bearer, MANAGER)
///
/// ## Success (201 Created)
/// ```json
/// { "message": "Employee created", "account": {..}, "employee": {..} }
/// ```
pub async fn create_employee(
    state: web::Data<AppState>,
    auth: AuthContext,
    query: web::Query<EmailQuery>,
    request: web::Json<CreateEmployeeRequest>,
) -> Result<HttpResponse, ApiError> {
    let manager = resolve_caller(&auth, query.email.as_deref())?;
    let request = request.into_inner();
    request.validate()?;

    let created = state
        .accounts
        .create_employee(&manager, request.into())
        .await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Employee created",
        "account": created.account,
        "employee": created.employee,
    })))
}
