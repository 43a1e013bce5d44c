//! Contact intake handler.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use drplan_core::validate;
use serde_json::Value;
use tracing::info;

use drplan_catalog::model::AREAS_OF_INTEREST;
use drplan_catalog::{ContactSubmission, NewContactSubmission};

use crate::error::{ApiError, ApiResult};
use crate::extract::FieldErrors;
use crate::state::AppState;

/// POST /api/contact
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<ContactSubmission>)> {
    let new = parse_contact(&body)?;
    let created = state.store.add_contact(new).await?;
    info!(id = created.id, "contact submission received");
    Ok((StatusCode::CREATED, Json(created)))
}

fn parse_contact(body: &Value) -> Result<NewContactSubmission, ApiError> {
    let mut errs = FieldErrors::new();

    let full_name = errs.require_str(body, "fullName");
    let email = errs.require_str(body, "email");
    let organization = errs.require_str(body, "organization");
    let area_of_interest = errs.require_str(body, "areaOfInterest");
    let message = errs.require_str(body, "message");
    let agree_to_receive_info = errs.require_bool(body, "agreeToReceiveInfo");

    if let Some(full_name) = &full_name {
        errs.check(validate::min_len("fullName", full_name, 2));
    }
    if let Some(email) = &email {
        errs.check(validate::email("email", email));
    }
    if let Some(organization) = &organization {
        errs.check(validate::min_len("organization", organization, 2));
    }
    if let Some(area) = &area_of_interest {
        errs.check(validate::one_of("areaOfInterest", area, &AREAS_OF_INTEREST));
    }
    if let Some(message) = &message {
        errs.check(validate::min_len("message", message, 10));
    }

    errs.finish("Invalid contact data")?;

    Ok(NewContactSubmission {
        full_name: full_name.unwrap_or_default(),
        email: email.unwrap_or_default(),
        organization: organization.unwrap_or_default(),
        area_of_interest: area_of_interest.unwrap_or_default(),
        message: message.unwrap_or_default(),
        agree_to_receive_info: agree_to_receive_info.unwrap_or_default(),
    })
}

// ============================================================================
// Tests
// ============================================================================
