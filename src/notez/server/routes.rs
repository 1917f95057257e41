//! Axum route handlers for the notes HTTP API.

use crate::api::SharedNotesApi;
use crate::error::{ErrorKind, NotezError};
use crate::model::NoteUpdate;
use crate::store::DataStore;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

const NO_NOTES: &str = "No notes found";
const NOT_FOUND: &str = "Note not found";
const CANNOT_CREATE: &str = "Cannot create note";
const CANNOT_UPDATE: &str = "Cannot update note";
const CANNOT_DELETE: &str = "Cannot delete note";
const UNEXPECTED: &str = "Unexpected error";
const INVALID_BODY: &str = "Invalid request body";

/// JSON body of POST and PUT. Missing fields and empty strings mean "not provided".
#[derive(Debug, Default, Deserialize)]
pub struct NoteBody {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl From<NoteBody> for NoteUpdate {
    fn from(body: NoteBody) -> Self {
        NoteUpdate::new(body.title, body.content)
    }
}

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

fn message(status: StatusCode, message: &'static str) -> Response {
    (status, Json(MessageBody { message })).into_response()
}

/// Logs the real cause and answers with the generic 500.
fn unexpected(context: &str, err: NotezError) -> Response {
    log::error!("{}: {}", context, err);
    message(StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED)
}

/// A path id is valid when it is a plain decimal integer greater than zero. Surrounding
/// whitespace, fractions and exponents (`" 1"`, `"1.0"`, `"1e0"`) are rejected.
pub fn parse_id(raw: &str) -> Option<u64> {
    raw.parse::<u64>().ok().filter(|id| *id > 0)
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

/// An empty body, or one not sent as JSON, reads as `{}`. A JSON body that does not parse is
/// a malformed request.
pub fn read_body(headers: &HeaderMap, body: &Bytes) -> Result<NoteBody, Response> {
    if body.is_empty() || !is_json(headers) {
        return Ok(NoteBody::default());
    }
    serde_json::from_slice(body).map_err(|e| {
        log::debug!("Rejected request body: {}", e);
        message(StatusCode::BAD_REQUEST, INVALID_BODY)
    })
}

// GET /notes
pub async fn list_notes<S>(State(api): State<SharedNotesApi<S>>) -> Response
where
    S: DataStore + Send + 'static,
{
    match api.run(|api| api.list_notes()).await {
        Ok(notes) if notes.is_empty() => message(StatusCode::NOT_FOUND, NO_NOTES),
        Ok(notes) => (StatusCode::OK, Json(notes)).into_response(),
        Err(e) => unexpected("Listing notes failed", e),
    }
}

// GET /note/:id
pub async fn get_note<S>(
    State(api): State<SharedNotesApi<S>>,
    Path(raw_id): Path<String>,
) -> Response
where
    S: DataStore + Send + 'static,
{
    let Some(id) = parse_id(&raw_id) else {
        return message(StatusCode::NOT_FOUND, NOT_FOUND);
    };

    match api.run(move |api| api.get_note(id)).await {
        Ok(Some(note)) => (StatusCode::OK, Json(note)).into_response(),
        Ok(None) => message(StatusCode::NOT_FOUND, NOT_FOUND),
        Err(e) => unexpected("Reading note failed", e),
    }
}

// GET /note/read/:title
pub async fn get_note_by_title<S>(
    State(api): State<SharedNotesApi<S>>,
    Path(title): Path<String>,
) -> Response
where
    S: DataStore + Send + 'static,
{
    match api.run(move |api| api.get_note_by_title(&title)).await {
        Ok(Some(note)) => (StatusCode::OK, Json(note)).into_response(),
        Ok(None) => message(StatusCode::NOT_FOUND, NOT_FOUND),
        Err(e) => unexpected("Reading note by title failed", e),
    }
}

// POST /note
pub async fn create_note<S>(
    State(api): State<SharedNotesApi<S>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response
where
    S: DataStore + Send + 'static,
{
    let body = match read_body(&headers, &body) {
        Ok(body) => body,
        Err(response) => return response,
    };
    let title = body.title.unwrap_or_default();
    let content = body.content.unwrap_or_default();

    match api.run(move |api| api.create_note(&title, &content)).await {
        Ok(note) => (StatusCode::CREATED, Json(note)).into_response(),
        Err(e) => match e.kind() {
            ErrorKind::Validation | ErrorKind::Conflict => {
                message(StatusCode::CONFLICT, CANNOT_CREATE)
            }
            _ => unexpected("Creating note failed", e),
        },
    }
}

// PUT /note/:id
pub async fn update_note<S>(
    State(api): State<SharedNotesApi<S>>,
    Path(raw_id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response
where
    S: DataStore + Send + 'static,
{
    let Some(id) = parse_id(&raw_id) else {
        return message(StatusCode::CONFLICT, CANNOT_UPDATE);
    };
    let update: NoteUpdate = match read_body(&headers, &body) {
        Ok(body) => body.into(),
        Err(response) => return response,
    };

    match api.run(move |api| api.update_note(id, &update)).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => match e.kind() {
            ErrorKind::Validation | ErrorKind::Conflict | ErrorKind::NotFound => {
                message(StatusCode::CONFLICT, CANNOT_UPDATE)
            }
            ErrorKind::Io => unexpected("Updating note failed", e),
        },
    }
}

// DELETE /note/:id
pub async fn delete_note<S>(
    State(api): State<SharedNotesApi<S>>,
    Path(raw_id): Path<String>,
) -> Response
where
    S: DataStore + Send + 'static,
{
    let Some(id) = parse_id(&raw_id) else {
        return message(StatusCode::CONFLICT, CANNOT_DELETE);
    };

    match api.run(move |api| api.delete_note(id)).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => match e.kind() {
            ErrorKind::NotFound => message(StatusCode::CONFLICT, CANNOT_DELETE),
            _ => unexpected("Deleting note failed", e),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_ids_only() {
        assert_eq!(parse_id("1"), Some(1));
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id("0"), None);
        assert_eq!(parse_id("-3"), None);
        assert_eq!(parse_id("1.5"), None);
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id(""), None);
    }

    #[test]
    fn ids_must_be_plain_decimal_integers() {
        assert_eq!(parse_id("+1"), Some(1));
        assert_eq!(parse_id("007"), Some(7));
        for raw in ["1.0", "1e0", " 1", "1 ", "0x10", "18446744073709551616"] {
            assert_eq!(parse_id(raw), None, "{:?}", raw);
        }
    }

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "application/json".parse().unwrap());
        headers
    }

    #[test]
    fn empty_json_body_reads_as_empty_object() {
        let body = read_body(&json_headers(), &Bytes::new()).unwrap();
        assert!(body.title.is_none() && body.content.is_none());
    }

    #[test]
    fn non_json_body_is_ignored() {
        let body = read_body(&HeaderMap::new(), &Bytes::from_static(b"title=A")).unwrap();
        assert!(body.title.is_none());
    }

    #[test]
    fn json_content_type_allows_parameters() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            "Application/JSON; charset=utf-8".parse().unwrap(),
        );
        let body = read_body(&headers, &Bytes::from_static(br#"{"title":"A"}"#)).unwrap();
        assert_eq!(body.title.as_deref(), Some("A"));
    }

    #[test]
    fn malformed_json_body_is_bad_request() {
        let body = Bytes::from_static(b"{ \"title\": ");
        let response = read_body(&json_headers(), &body).unwrap_err();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn body_fields_are_optional() {
        let body: NoteBody = serde_json::from_str("{}").unwrap();
        assert!(body.title.is_none() && body.content.is_none());

        let update: NoteUpdate = serde_json::from_str::<NoteBody>(r#"{"content":"x"}"#)
            .unwrap()
            .into();
        assert_eq!(update, NoteUpdate::content("x"));
    }
}
