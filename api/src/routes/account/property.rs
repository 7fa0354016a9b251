use actix_multipart::form::MultipartForm;
use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::{EmailQuery, PageQuery, PropertyForm};
use crate::handlers::{resolve_caller, ApiError};
use crate::middleware::AuthContext;

/// Handler for POST /api/v1/account/createProperty (bearer, MANAGER or EMPLOYEE)
///
/// Multipart fields: `address`, `price`, `area`, `status` and the `image` file.
///
/// ## Errors
/// - 400 Bad Request: missing image or invalid fields
/// - 403 Forbidden: caller is a customer or inactive
/// - 502 Bad Gateway: image upload failed
pub async fn create_property(
    state: web::Data<AppState>,
    auth: AuthContext,
    query: web::Query<EmailQuery>,
    form: MultipartForm<PropertyForm>,
) -> Result<HttpResponse, ApiError> {
    let caller = resolve_caller(&auth, query.email.as_deref())?;
    let input = form.into_inner().into_new_property()?;

    let property = state.properties.create(&caller, input).await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Property created",
        "property": property,
    })))
}

/// Handler for PUT /api/v1/account/updateProperty/{id} (bearer, MANAGER or EMPLOYEE)
pub async fn update_property(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<String>,
    query: web::Query<EmailQuery>,
    form: MultipartForm<PropertyForm>,
) -> Result<HttpResponse, ApiError> {
    let caller = resolve_caller(&auth, query.email.as_deref())?;
    let (patch, image) = form.into_inner().into_patch()?;

    let property = state
        .properties
        .update(&caller, &path.into_inner(), patch, image)
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Property updated",
        "property": property,
    })))
}

/// Handler for GET /api/v1/account/getMyProperties (bearer, EMPLOYEE)
pub async fn get_my_properties(
    state: web::Data<AppState>,
    auth: AuthContext,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, ApiError> {
    let caller = resolve_caller(&auth, query.email.as_deref())?;
    let pagination = query.pagination(&state.ledger)?;
    let sort = query.sort()?;

    let properties = state
        .properties
        .list_owned_by(&caller, pagination, sort)
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "properties": properties,
        "page": pagination.page,
        "limit": pagination.limit(),
    })))
}
