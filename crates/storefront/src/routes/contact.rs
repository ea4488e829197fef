//! Contact form route handler.
//!
//! The outcome is stored as a one-shot session flash and the visitor is
//! redirected back to the contact section, where the page renders the
//! status line and (after a failure) the fields as they were typed.

use axum::{Form, extract::State, response::Redirect};
use tower_sessions::Session;
use tracing::instrument;

use ressurreccion_core::{ContactPayload, Section};

use crate::error::Result;
use crate::models::{ContactFlash, session};
use crate::state::AppState;

/// Submit the contact form.
///
/// POST /contact
#[instrument(skip(state, session, form))]
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ContactPayload>,
) -> Result<Redirect> {
    let status = state.contact().submit(&form).await;
    tracing::info!(?status, "contact form resolved");

    session::set_contact_flash(&session, &ContactFlash::new(status, form)).await?;

    Ok(Redirect::to(&format!("/#{}", Section::Contact.id())))
}
