//! Contact pages, form actions, and JSON endpoints.
//!
//! ERROR HANDLING
//! ==============
//! A blank or unknown id is always `404 Not Found`. Store failures are
//! logged here and surface as a bare 500.

use axum::extract::{Form, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, Json, Redirect};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::services::contact::{self, Contact, ContactError, ContactUpdate};
use crate::state::AppState;
use crate::views;

type RouteError = (StatusCode, &'static str);

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

impl SearchParams {
    fn query(&self) -> Option<&str> {
        self.q.as_deref()
    }

    fn into_value(self) -> String {
        self.q.unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub struct FavoriteForm {
    pub favorite: Option<String>,
}

/// Loader payload: `{ "contact": { ... } }`.
#[derive(Serialize)]
pub struct ContactResponse {
    pub contact: Contact,
}

pub(crate) fn contact_error_to_status(err: &ContactError) -> StatusCode {
    match err {
        ContactError::MissingId | ContactError::NotFound(_) => StatusCode::NOT_FOUND,
        ContactError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn route_error(err: ContactError) -> RouteError {
    let status = contact_error_to_status(&err);
    if status == StatusCode::NOT_FOUND {
        return (status, "Not Found");
    }
    error!(error = %err, "contact store failure");
    (status, "Internal Server Error")
}

/// Rejects a blank id; any other id is used exactly as it appears in the path.
fn require_id(id: &str) -> Result<&str, RouteError> {
    if id.trim().is_empty() {
        return Err(route_error(ContactError::MissingId));
    }
    Ok(id)
}

async fn sidebar(state: &AppState, params: &SearchParams) -> Result<Vec<Contact>, RouteError> {
    state.contacts.list(params.query()).await.map_err(route_error)
}

// =============================================================================
// PAGES
// =============================================================================

/// `GET /`: contact list with the landing text.
pub async fn index(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Result<Html<String>, RouteError> {
    let contacts = sidebar(&state, &params).await?;
    Ok(views::index_page(contacts, params.into_value()))
}

/// `GET /contacts/:id`: contact detail.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, RouteError> {
    let contact = contact::load_contact(state.contacts.as_ref(), &id)
        .await
        .map_err(route_error)?;
    let contacts = sidebar(&state, &params).await?;
    Ok(views::contact_page(contacts, params.into_value(), contact))
}

/// `GET /contacts/:id/edit`: edit form prefilled with current values.
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, RouteError> {
    let contact = contact::load_contact(state.contacts.as_ref(), &id)
        .await
        .map_err(route_error)?;
    let contacts = sidebar(&state, &params).await?;
    Ok(views::edit_page(contacts, params.into_value(), contact))
}

// =============================================================================
// FORM ACTIONS
// =============================================================================

/// `POST /contacts`: create an empty contact and open its edit form.
pub async fn create(State(state): State<AppState>) -> Result<Redirect, RouteError> {
    let contact = state.contacts.create_empty().await.map_err(route_error)?;
    info!(contact_id = %contact.id, "contact created");
    Ok(Redirect::to(&format!("/contacts/{}/edit", contact.id)))
}

/// `POST /contacts/:id`: favorite toggle. Only the literal `"true"` marks
/// the contact as a favorite.
pub async fn favorite(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<FavoriteForm>,
) -> Result<Redirect, RouteError> {
    let id = require_id(&id)?;
    let favorite = form.favorite.as_deref() == Some("true");
    state
        .contacts
        .set_favorite(id, favorite)
        .await
        .map_err(route_error)?;
    info!(contact_id = %id, favorite, "favorite updated");
    Ok(Redirect::to(&format!("/contacts/{id}")))
}

/// `POST /contacts/:id/edit`: replace editable fields.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(update): Form<ContactUpdate>,
) -> Result<Redirect, RouteError> {
    let id = require_id(&id)?;
    state
        .contacts
        .update(id, update.normalized())
        .await
        .map_err(route_error)?;
    info!(contact_id = %id, "contact updated");
    Ok(Redirect::to(&format!("/contacts/{id}")))
}

/// `POST /contacts/:id/destroy`: delete and return to the index.
pub async fn destroy(State(state): State<AppState>, Path(id): Path<String>) -> Result<Redirect, RouteError> {
    let id = require_id(&id)?;
    state.contacts.delete(id).await.map_err(route_error)?;
    info!(contact_id = %id, "contact deleted");
    Ok(Redirect::to("/"))
}

// =============================================================================
// JSON API
// =============================================================================

/// `GET /api/contacts`: filtered, sorted contact list.
pub async fn api_list(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Contact>>, RouteError> {
    Ok(Json(sidebar(&state, &params).await?))
}

/// `GET /api/contacts/:id`: the record behind the detail page.
pub async fn api_show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<ContactResponse>, RouteError> {
    let contact = contact::load_contact(state.contacts.as_ref(), &id)
        .await
        .map_err(route_error)?;
    Ok(Json(ContactResponse { contact }))
}

#[cfg(test)]
#[path = "contacts_test.rs"]
mod tests;
