use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::contact::form::{ContactForm, ContactSubmission};
use crate::contact::modal::{ClickTarget, ContactModal};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ContactResponse {
    #[serde(flatten)]
    pub submission: ContactSubmission,
    /// Body `overflow` once the modal has closed.
    pub body_overflow: &'static str,
}

#[derive(Deserialize)]
pub struct ModalRequest {
    pub open: bool,
    #[serde(default)]
    pub click: Option<ClickTarget>,
}

#[derive(Serialize)]
pub struct ModalResponse {
    pub open: bool,
    pub body_overflow: &'static str,
}

/// POST /api/v1/contact
pub async fn handle_contact(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> Result<Json<ContactResponse>, AppError> {
    let (subject_len, message_len) = (form.subject.len(), form.message.len());
    let mut modal = ContactModal::showing(form);
    let submission = modal.submit(&state.config.contact_email)?;
    info!(subject_len, message_len, "Contact mailto link built");
    Ok(Json(ContactResponse {
        submission,
        body_overflow: modal.body_overflow().as_css(),
    }))
}

/// POST /api/v1/contact/modal
pub async fn handle_modal(Json(req): Json<ModalRequest>) -> Json<ModalResponse> {
    let mut modal = ContactModal::default();
    if req.open {
        modal.open();
    }
    let overflow = match req.click {
        Some(target) => modal.handle_click(target),
        None => modal.body_overflow(),
    };
    Json(ModalResponse {
        open: modal.is_open(),
        body_overflow: overflow.as_css(),
    })
}
