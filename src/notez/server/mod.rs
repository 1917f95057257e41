//! # HTTP Adapter
//!
//! Maps HTTP requests onto [`NotesApi`](crate::api::NotesApi) calls and error kinds onto
//! status codes. Nothing here knows about notes beyond ids, titles and bodies; all rules
//! live in the command layer.
//!
//! | Method | Path                | Success         | Failure                               |
//! |--------|---------------------|-----------------|---------------------------------------|
//! | GET    | `/notes`            | 200 list        | 404 if empty, 500                     |
//! | GET    | `/note/:id`         | 200 note        | 404 bad id or missing, 500            |
//! | GET    | `/note/read/:title` | 200 note        | 404 missing, 500                      |
//! | POST   | `/note`             | 201 note        | 409 validation/conflict, 500          |
//! | PUT    | `/note/:id`         | 204             | 409 bad id/validation/conflict/missing, 500 |
//! | DELETE | `/note/:id`         | 204             | 409 bad id or missing, 500            |
//!
//! Error bodies are `{"message": "..."}` with fixed, generic messages. Details only go to
//! the log.

use crate::api::SharedNotesApi;
use crate::store::DataStore;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;

pub mod routes;

pub fn router<S>(api: SharedNotesApi<S>) -> Router
where
    S: DataStore + Send + 'static,
{
    Router::new()
        .route("/notes", get(routes::list_notes::<S>))
        .route("/note", post(routes::create_note::<S>))
        .route(
            "/note/:id",
            get(routes::get_note::<S>)
                .put(routes::update_note::<S>)
                .delete(routes::delete_note::<S>),
        )
        .route("/note/read/:title", get(routes::get_note_by_title::<S>))
        .with_state(api)
}

/// Serves until Ctrl+C.
pub async fn serve<S>(listener: TcpListener, api: SharedNotesApi<S>) -> std::io::Result<()>
where
    S: DataStore + Send + 'static,
{
    axum::serve(listener, router(api))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Received Ctrl+C, shutting down...");
}
