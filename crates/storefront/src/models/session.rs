//! Session-related types.
//!
//! Typed accessors over `tower_sessions::Session` for per-visitor state.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tower_sessions::session::Error;

use ressurreccion_core::{Cart, ContactPayload, ContactStatus, UiFlags};

/// Session keys for visitor state.
pub mod keys {
    /// Key for the visitor's cart (lines and drawer flag).
    pub const CART: &str = "cart";

    /// Key for UI flags not owned by the cart.
    pub const UI_FLAGS: &str = "ui_flags";

    /// Key for the outcome of the last contact submission, shown once.
    pub const CONTACT_FLASH: &str = "contact_flash";
}

/// Outcome of a contact submission carried across the post/redirect/get.
///
/// `form` holds the fields as typed; it is empty after a success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFlash {
    pub status: ContactStatus,
    pub form: ContactPayload,
}

impl ContactFlash {
    /// Build the flash for a resolved submission.
    #[must_use]
    pub fn new(status: ContactStatus, submitted: ContactPayload) -> Self {
        let form = if status.clears_form() {
            ContactPayload::default()
        } else {
            submitted
        };
        Self { status, form }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// Load the visitor's cart, empty if none has been stored yet.
///
/// # Errors
///
/// Returns an error if the session store fails or the stored value does not
/// deserialize.
pub async fn load_cart(session: &Session) -> Result<Cart, Error> {
    Ok(session.get::<Cart>(keys::CART).await?.unwrap_or_default())
}

/// Store the visitor's cart.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn save_cart(session: &Session, cart: &Cart) -> Result<(), Error> {
    session.insert(keys::CART, cart).await
}

// =============================================================================
// UI flags
// =============================================================================

/// Load the visitor's UI flags, all closed by default.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn load_flags(session: &Session) -> Result<UiFlags, Error> {
    Ok(session.get::<UiFlags>(keys::UI_FLAGS).await?.unwrap_or_default())
}

/// Store the visitor's UI flags.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn save_flags(session: &Session, flags: UiFlags) -> Result<(), Error> {
    session.insert(keys::UI_FLAGS, flags).await
}

// =============================================================================
// Contact flash
// =============================================================================

/// Remember a contact outcome for the next page render.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn set_contact_flash(session: &Session, flash: &ContactFlash) -> Result<(), Error> {
    session.insert(keys::CONTACT_FLASH, flash).await
}

/// Take the pending contact outcome, if any. It is removed from the session.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn take_contact_flash(session: &Session) -> Result<Option<ContactFlash>, Error> {
    session.remove::<ContactFlash>(keys::CONTACT_FLASH).await
}
