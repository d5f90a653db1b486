use rocket::{State, get, post, put, delete, response::status::NoContent, serde::json::Json};
use tracing::instrument;
use shared::models::Game;
use crate::error::ApiError;
use super::{AppState, JsonBody, first, create_record, delete_record, get_record, list_records, update_record};

#[get("/Games")]
pub fn list_games(state: &State<AppState>) -> Json<Vec<Game>> {
    list_records(&state.games)
}

#[instrument(skip(state))]
#[get("/Game?<id>")]
pub fn get_game(state: &State<AppState>, id: Vec<&str>) -> Result<Json<Game>, ApiError> {
    get_record(&state.games, first(&id), state.strict_ids)
}

#[instrument(skip(state, game))]
#[post("/Game/create", data = "<game>")]
pub fn create_game(state: &State<AppState>, game: JsonBody<'_, Game>) -> Result<Json<Game>, ApiError> {
    create_record(&state.games, game)
}

#[instrument(skip(state, game))]
#[post("/Game/update?<id>", data = "<game>")]
pub fn update_game(
    state: &State<AppState>,
    id: Vec<&str>,
    game: JsonBody<'_, Game>,
) -> Result<Json<Game>, ApiError> {
    update_record(&state.games, first(&id), state.strict_ids, game)
}

#[instrument(skip(state, game))]
#[put("/Game/update?<id>", data = "<game>")]
pub fn replace_game(
    state: &State<AppState>,
    id: Vec<&str>,
    game: JsonBody<'_, Game>,
) -> Result<Json<Game>, ApiError> {
    update_record(&state.games, first(&id), state.strict_ids, game)
}

#[instrument(skip(state))]
#[post("/Game/delete?<id>")]
pub fn delete_game(state: &State<AppState>, id: Vec<&str>) -> Result<NoContent, ApiError> {
    delete_record(&state.games, first(&id), state.strict_ids)
}

#[instrument(skip(state))]
#[delete("/Game/delete?<id>")]
pub fn remove_game(state: &State<AppState>, id: Vec<&str>) -> Result<NoContent, ApiError> {
    delete_record(&state.games, first(&id), state.strict_ids)
}
