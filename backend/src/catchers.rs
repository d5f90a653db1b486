use rocket::{Request, catch, serde::json::Json};
use shared::error::{ErrorCode, ErrorMessage};
use tracing::warn;

#[catch(400)]
pub fn bad_request(_req: &Request) -> Json<ErrorMessage> {
    Json(ErrorCode::InvalidInput.into())
}

#[catch(404)]
pub fn not_found(req: &Request) -> Json<ErrorMessage> {
    warn!("No route for {} {}", req.method(), req.uri());
    Json(ErrorCode::NotFound.into())
}

#[catch(500)]
pub fn internal_error(_req: &Request) -> Json<ErrorMessage> {
    Json(ErrorCode::SystemError.into())
}
