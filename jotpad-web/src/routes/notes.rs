use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use jotpad::errors::{NoteStoreError, ValidationError};
use jotpad::note::{normalize_tags, validate_note, NoteUpdate};
use jotpad::notestore::BoxedNoteStore;
use jotpad::{NoteFilter, NoteID, NoteStore};
use serde::Deserialize;
use serde_json::json;

fn notestore_error_handler(e: &NoteStoreError) -> HttpResponse {
    match e {
        NoteStoreError::NoteNotExist(_) => {
            HttpResponse::NotFound().json(json!({ "error": "Note not found" }))
        }
        NoteStoreError::NoteIDConflict(_) => {
            error!("Note store internal error {:?}", e);
            HttpResponse::InternalServerError().json(json!({ "error": "Internal server error" }))
        }
    }
}

fn validation_error_handler(e: &ValidationError) -> HttpResponse {
    HttpResponse::BadRequest().json(json!({ "error": e.to_string() }))
}

#[derive(Deserialize)]
struct NotePayload {
    title: Option<String>,
    content: Option<String>,
    tags: Option<Vec<String>>,
}

/// A validated and normalized note body, ready for the store.
struct NoteDraft {
    title: String,
    content: String,
    tags: Vec<String>,
}

impl TryFrom<NotePayload> for NoteDraft {
    type Error = ValidationError;

    fn try_from(payload: NotePayload) -> Result<Self, Self::Error> {
        validate_note(payload.title.as_deref(), payload.content.as_deref())?;
        Ok(NoteDraft {
            title: payload.title.unwrap_or_default().trim().to_owned(),
            content: payload.content.unwrap_or_default().trim().to_owned(),
            tags: normalize_tags(payload.tags.unwrap_or_default()),
        })
    }
}

#[derive(Deserialize, Debug)]
struct ListQuery {
    tag: Option<String>,
    search: Option<String>,
}

#[get("/notes")]
#[instrument(skip(store, query))]
async fn list_notes(
    store: web::Data<BoxedNoteStore>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    let query = query.into_inner();
    // An empty query value means no filtering, same as an absent one
    let filter = NoteFilter {
        tag: query.tag.filter(|t| !t.is_empty()),
        search: query.search.filter(|s| !s.is_empty()),
    };
    let res = store.list_notes(&filter).await;
    match res {
        Ok(notes) => HttpResponse::Ok().json(notes),
        Err(e) => notestore_error_handler(&e),
    }
}

#[get("/notes/{note_id}")]
#[instrument(
    skip(store, params),
    fields(
        note_id = %params.0
    )
)]
async fn get_note(
    store: web::Data<BoxedNoteStore>,
    params: web::Path<(String,)>,
) -> impl Responder {
    let (note_id,) = params.into_inner();
    let id: NoteID = note_id.into();
    let res = store.get_note(&id).await;
    match res {
        Ok(note) => HttpResponse::Ok().json(note),
        Err(e) => notestore_error_handler(&e),
    }
}

#[post("/notes")]
#[instrument(skip(store, payload))]
async fn new_note(
    store: web::Data<BoxedNoteStore>,
    payload: web::Json<NotePayload>,
) -> impl Responder {
    let draft: Result<NoteDraft, ValidationError> = payload.into_inner().try_into();
    let draft = match draft {
        Ok(draft) => draft,
        Err(e) => return validation_error_handler(&e),
    };
    let res = store.new_note(draft.title, draft.content, draft.tags).await;
    match res {
        Ok(note) => HttpResponse::Created().json(note),
        Err(e) => notestore_error_handler(&e),
    }
}

#[put("/notes/{note_id}")]
#[instrument(
    skip(store, params, payload),
    fields(
        note_id = %params.0
    )
)]
async fn update_note(
    store: web::Data<BoxedNoteStore>,
    params: web::Path<(String,)>,
    payload: web::Json<NotePayload>,
) -> impl Responder {
    let (note_id,) = params.into_inner();
    let id: NoteID = note_id.into();
    // Unknown IDs are reported before any field validation
    if let Err(e) = store.get_note(&id).await {
        return notestore_error_handler(&e);
    }
    let payload = payload.into_inner();
    if payload.title.as_deref().unwrap_or_default().is_empty()
        || payload.content.as_deref().unwrap_or_default().is_empty()
    {
        return HttpResponse::BadRequest()
            .json(json!({ "error": "Title and content are required" }));
    }
    let draft: Result<NoteDraft, ValidationError> = payload.try_into();
    let draft = match draft {
        Ok(draft) => draft,
        Err(e) => return validation_error_handler(&e),
    };
    let update = NoteUpdate {
        title: Some(draft.title),
        content: Some(draft.content),
        tags: Some(draft.tags),
    };
    let res = store.update_note(&id, update).await;
    match res {
        Ok(note) => HttpResponse::Ok().json(note),
        Err(e) => notestore_error_handler(&e),
    }
}

#[delete("/notes/{note_id}")]
#[instrument(
    skip(store, params),
    fields(
        note_id = %params.0
    )
)]
async fn delete_note(
    store: web::Data<BoxedNoteStore>,
    params: web::Path<(String,)>,
) -> impl Responder {
    let (note_id,) = params.into_inner();
    let id: NoteID = note_id.into();
    let res = store.delete_note(&id).await;
    match res {
        Ok(_) => HttpResponse::Ok().json(json!({ "message": "Note deleted successfully" })),
        Err(e) => notestore_error_handler(&e),
    }
}

#[get("/tags")]
#[instrument(skip(store))]
async fn get_tags(store: web::Data<BoxedNoteStore>) -> impl Responder {
    let res = store.tags().await;
    match res {
        Ok(tags) => HttpResponse::Ok().json(tags),
        Err(e) => notestore_error_handler(&e),
    }
}

async fn api_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "error": "API endpoint not found" }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(list_notes)
        .service(get_note)
        .service(new_note)
        .service(update_note)
        .service(delete_note)
        .service(get_tags)
        .default_service(web::route().to(api_not_found));
}
