//! Header navigation and mobile menu handlers.

use axum::{Form, extract::Path, response::Redirect};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use ressurreccion_core::Section;

use super::back_to_page;
use crate::error::Result;
use crate::models::session;

/// Menu toggle form data.
#[derive(Debug, Default, Deserialize)]
pub struct MenuForm {
    /// Active shop filter, kept across the redirect.
    #[serde(default)]
    pub category: Option<String>,
}

/// Flip the mobile menu.
#[instrument(skip(session))]
pub async fn toggle_menu(session: Session, Form(form): Form<MenuForm>) -> Result<Redirect> {
    let mut flags = session::load_flags(&session).await?;
    flags.toggle_menu();
    session::save_flags(&session, flags).await?;
    Ok(back_to_page(form.category.as_deref(), None))
}

/// Follow a menu link without script: close the menu and jump to the section.
///
/// A name that is not a page section lands on the top of the page.
#[instrument(skip(session))]
pub async fn section(session: Session, Path(name): Path<String>) -> Result<Redirect> {
    let mut flags = session::load_flags(&session).await?;
    if flags.menu_open {
        flags.close_menu();
        session::save_flags(&session, flags).await?;
    }

    let target = name.parse::<Section>().map_or_else(
        |()| "/".to_string(),
        |section| format!("/#{}", section.id()),
    );
    Ok(Redirect::to(&target))
}
