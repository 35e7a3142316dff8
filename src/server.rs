//! HTTP facade: a chat page and one form endpoint in front of the responder.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::bot::Responder;

#[derive(Clone)]
pub struct AppState {
    pub responder: Arc<Responder>,
}

#[derive(Deserialize)]
pub struct AskForm {
    pub msg: String,
}

#[derive(Serialize)]
pub struct BotResponse {
    pub response: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(chat_page))
        .route("/get", post(get_bot_response))
        .with_state(state)
}

async fn chat_page() -> impl IntoResponse {
    Html(include_str!("../static/index.html"))
}

async fn get_bot_response(
    State(st): State<AppState>,
    Form(form): Form<AskForm>,
) -> Json<BotResponse> {
    let reply = st.responder.respond(&form.msg, &mut rand::thread_rng());
    info!(query = %form.msg, source = ?reply.source, score = ?reply.score, "answered");
    Json(BotResponse {
        response: reply.text,
    })
}
