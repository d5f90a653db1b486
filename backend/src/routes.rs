use rocket::{Route, routes, response::status::NoContent, serde::json::{self, Json}};
use tracing::debug;
use shared::models::{Form, Game, Record};
use crate::{error::ApiError, store::RecordStore, utils::parse_record_id};

pub mod forms;
pub mod games;

/// Request body guard: a decoded record, or the decoder's complaint. A bare
/// `null` body decodes to `None`.
pub type JsonBody<'r, R> = Result<Json<Option<R>>, json::Error<'r>>;

#[derive(Debug, Default)]
pub struct AppState {
    pub games: RecordStore<Game>,
    pub forms: RecordStore<Form>,
    pub strict_ids: bool,
}

impl AppState {
    pub fn new(strict_ids: bool) -> Self {
        Self {
            strict_ids,
            ..Self::default()
        }
    }
}

pub fn api_routes() -> Vec<Route> {
    routes![
        games::list_games,
        games::get_game,
        games::create_game,
        games::update_game,
        games::replace_game,
        games::delete_game,
        games::remove_game,
        forms::list_forms,
        forms::get_form,
        forms::create_form,
        forms::update_form,
        forms::replace_form,
        forms::delete_form,
        forms::remove_form,
    ]
}

/// Repeated query parameters resolve to their first value.
fn first<'a>(values: &[&'a str]) -> Option<&'a str> {
    values.first().copied()
}

fn decode<R: Record>(body: JsonBody<'_, R>) -> Result<R, ApiError> {
    match body {
        Ok(record) => Ok(record.into_inner().unwrap_or_default()),
        Err(json::Error::Io(e)) => Err(ApiError::Decode(e.to_string())),
        Err(json::Error::Parse(_, e)) => {
            debug!("Rejected {} body: {}", R::KIND, e);
            Err(ApiError::Decode(e.to_string()))
        }
    }
}

pub fn list_records<R: Record>(store: &RecordStore<R>) -> Json<Vec<R>> {
    Json(store.list())
}

pub fn get_record<R: Record>(
    store: &RecordStore<R>,
    id: Option<&str>,
    strict: bool,
) -> Result<Json<R>, ApiError> {
    let id = parse_record_id(id, strict)?;
    store
        .get(id)
        .map(Json)
        .map_err(|e| ApiError::from_store(R::KIND, e))
}

pub fn create_record<R: Record>(
    store: &RecordStore<R>,
    body: JsonBody<'_, R>,
) -> Result<Json<R>, ApiError> {
    let record = store.create(decode(body)?);
    debug!("Created {} {}", R::KIND, record.id());
    Ok(Json(record))
}

pub fn update_record<R: Record>(
    store: &RecordStore<R>,
    id: Option<&str>,
    strict: bool,
    body: JsonBody<'_, R>,
) -> Result<Json<R>, ApiError> {
    let id = parse_record_id(id, strict)?;
    let record = decode(body)?;
    store
        .update(id, record)
        .map(Json)
        .map_err(|e| ApiError::from_store(R::KIND, e))
}

pub fn delete_record<R: Record>(
    store: &RecordStore<R>,
    id: Option<&str>,
    strict: bool,
) -> Result<NoContent, ApiError> {
    let id = parse_record_id(id, strict)?;
    store
        .delete(id)
        .map(|_| NoContent)
        .map_err(|e| ApiError::from_store(R::KIND, e))
}
