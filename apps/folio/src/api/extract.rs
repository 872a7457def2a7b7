//! Contact body extractor accepting JSON or URL-encoded forms.

use super::error::ApiError;
use axum::{
    Form, Json,
    body::{Body, Bytes},
    extract::{FromRequest, Request},
    http::{HeaderValue, Method, StatusCode, header},
};
use folio_core::ContactRequest;
use std::fmt::Display;

/// Client message for a body that cannot be decoded.
pub const INVALID_BODY: &str = "Invalid request body";

/// Client message for a body over the configured size limit.
pub const BODY_TOO_LARGE: &str = "Request body too large";

const FORM_MIME: &str = "application/x-www-form-urlencoded";

/// A [`ContactRequest`] decoded according to the request's content type.
///
/// - `application/json` (and `+json` types) are decoded as JSON
/// - `application/x-www-form-urlencoded` is decoded as a form
/// - anything else, no body type, or an empty body yields an empty
///   request, which validation then reports as missing fields
///
/// A body over the size limit is rejected with 413.
#[derive(Debug)]
pub struct ContactBody(pub ContactRequest);

impl<S> FromRequest<S> for ContactBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_ascii_lowercase())
            .unwrap_or_default();
        let mime = content_type.split(';').next().unwrap_or_default().trim();

        let is_form = mime == FORM_MIME;
        let is_json = mime == "application/json" || mime.ends_with("+json");
        if !is_form && !is_json {
            return Ok(Self(ContactRequest::default()));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| body_rejection(e.status(), &e))?;
        if bytes.is_empty() {
            return Ok(Self(ContactRequest::default()));
        }

        if is_json {
            let Json(body) = Json::<ContactRequest>::from_bytes(&bytes)
                .map_err(|e| body_rejection(e.status(), &e))?;
            return Ok(Self(body));
        }

        // The buffered bytes are already within the limit.
        let mut buffered = Request::new(Body::from(bytes));
        *buffered.method_mut() = Method::POST;
        buffered
            .headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static(FORM_MIME));
        let Form(body) = Form::<ContactRequest>::from_request(buffered, state)
            .await
            .map_err(|e| body_rejection(e.status(), &e))?;
        Ok(Self(body))
    }
}

fn body_rejection(status: StatusCode, error: &dyn Display) -> ApiError {
    tracing::debug!(error = %error, "Rejected contact body");
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(BODY_TOO_LARGE.to_string())
    } else {
        ApiError::Validation(INVALID_BODY.to_string())
    }
}
