use rocket::http::Status;
use rocket::response::Responder;
use thiserror::Error;
use crate::store::StoreError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Invalid record id")]
    InvalidId,
    #[error("{0}")]
    Decode(String),
}

impl ApiError {
    pub fn from_store(kind: &'static str, err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound(kind),
        }
    }

    pub fn status(&self) -> Status {
        match self {
            ApiError::NotFound(_) => Status::NotFound,
            ApiError::InvalidId => Status::BadRequest,
            ApiError::Decode(_) => Status::BadRequest,
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let status = self.status();

        rocket::Response::build_from(self.to_string().respond_to(req)?)
            .status(status)
            .ok()
    }
}
