//! snk-session
//!
//! The ordering session: catalog cache, room index, cart, destination
//! selection and the submission flow.
//!
//! Pure orchestration over snk-cart / snk-rooms; all IO goes through a
//! `snk_client::ShopBackend`.

mod catalog;
mod load;
mod session;
mod submit;

pub use catalog::Catalog;
pub use load::{LoadNotice, LoadSource};
pub use session::ShopSession;
pub use submit::{OrderReceipt, PendingOrder, SubmitBlocked, SubmitOutcome};

use snk_schemas::SnackId;

/// Errors from session operations that take user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The id does not name a snack in the loaded catalog.
    UnknownSnack { id: SnackId },
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::UnknownSnack { id } => write!(f, "no snack with id {id} in the catalog"),
        }
    }
}

impl std::error::Error for SessionError {}
