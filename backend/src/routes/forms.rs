use rocket::{State, get, post, put, delete, response::status::NoContent, serde::json::Json};
use tracing::instrument;
use shared::models::Form;
use crate::error::ApiError;
use super::{AppState, JsonBody, first, create_record, delete_record, get_record, list_records, update_record};

#[get("/Forms")]
pub fn list_forms(state: &State<AppState>) -> Json<Vec<Form>> {
    list_records(&state.forms)
}

#[instrument(skip(state))]
#[get("/Form?<id>")]
pub fn get_form(state: &State<AppState>, id: Vec<&str>) -> Result<Json<Form>, ApiError> {
    get_record(&state.forms, first(&id), state.strict_ids)
}

#[instrument(skip(state, form))]
#[post("/Form/create", data = "<form>")]
pub fn create_form(state: &State<AppState>, form: JsonBody<'_, Form>) -> Result<Json<Form>, ApiError> {
    create_record(&state.forms, form)
}

#[instrument(skip(state, form))]
#[post("/Form/update?<id>", data = "<form>")]
pub fn update_form(
    state: &State<AppState>,
    id: Vec<&str>,
    form: JsonBody<'_, Form>,
) -> Result<Json<Form>, ApiError> {
    update_record(&state.forms, first(&id), state.strict_ids, form)
}

#[instrument(skip(state, form))]
#[put("/Form/update?<id>", data = "<form>")]
pub fn replace_form(
    state: &State<AppState>,
    id: Vec<&str>,
    form: JsonBody<'_, Form>,
) -> Result<Json<Form>, ApiError> {
    update_record(&state.forms, first(&id), state.strict_ids, form)
}

#[instrument(skip(state))]
#[post("/Form/delete?<id>")]
pub fn delete_form(state: &State<AppState>, id: Vec<&str>) -> Result<NoContent, ApiError> {
    delete_record(&state.forms, first(&id), state.strict_ids)
}

#[instrument(skip(state))]
#[delete("/Form/delete?<id>")]
pub fn remove_form(state: &State<AppState>, id: Vec<&str>) -> Result<NoContent, ApiError> {
    delete_record(&state.forms, first(&id), state.strict_ids)
}
