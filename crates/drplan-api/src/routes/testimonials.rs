//! Testimonial handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use drplan_core::validate;
use serde_json::Value;
use tracing::info;

use drplan_catalog::{NewTestimonial, Testimonial};

use crate::error::{ApiError, ApiResult};
use crate::extract::FieldErrors;
use crate::state::AppState;

/// GET /api/testimonials
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Testimonial>>> {
    Ok(Json(state.store.testimonials().await?))
}

/// POST /api/testimonials
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<Testimonial>)> {
    let new = parse_testimonial(&body)?;
    let created = state.store.add_testimonial(new).await?;
    info!(id = created.id, "testimonial created");
    Ok((StatusCode::CREATED, Json(created)))
}

fn parse_testimonial(body: &Value) -> Result<NewTestimonial, ApiError> {
    let mut errs = FieldErrors::new();

    let name = errs.require_str(body, "name");
    let company = errs.require_str(body, "company");
    let rating = errs.require_int(body, "rating");
    let comment = errs.require_str(body, "comment");

    if let Some(name) = &name {
        errs.check(validate::min_len("name", name, 2));
    }
    if let Some(company) = &company {
        errs.check(validate::min_len("company", company, 2));
    }
    if let Some(rating) = rating {
        errs.check(validate::int_range("rating", rating, 1, 5));
    }
    if let Some(comment) = &comment {
        errs.check(validate::min_len("comment", comment, 10));
    }

    errs.finish("Invalid testimonial data")?;

    Ok(NewTestimonial {
        name: name.unwrap_or_default(),
        company: company.unwrap_or_default(),
        rating: rating.unwrap_or_default() as u8,
        comment: comment.unwrap_or_default(),
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_valid_testimonial() {
        let body = json!({
            "name": "Jo Smith",
            "company": "Acme Corp",
            "rating": 5,
            "comment": "Saved our quarterly audit."
        });
        let new = parse_testimonial(&body).unwrap();
        assert_eq!(new.rating, 5);
        assert_eq!(new.name, "Jo Smith");
    }

    #[test]
    fn test_parse_rejects_out_of_range_rating() {
        for rating in [0, 6] {
            let body = json!({
                "name": "Jo Smith",
                "company": "Acme Corp",
                "rating": rating,
                "comment": "Saved our quarterly audit."
            });
            let err = parse_testimonial(&body).unwrap_err();
            assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_parse_reports_all_missing_fields() {
        let err = parse_testimonial(&json!({})).unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_parse_rejects_short_comment() {
        let body = json!({
            "name": "Jo Smith",
            "company": "Acme Corp",
            "rating": 4,
            "comment": "ok"
        });
        assert!(parse_testimonial(&body).is_err());
    }
}
