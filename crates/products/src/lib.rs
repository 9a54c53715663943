//! `stockdesk-products` — the product edit reconciliation engine.
//!
//! A [`ProductEditor`] owns one editable record for the lifetime of an
//! editor session: a *pristine* copy (last server-confirmed value) and a
//! *working* draft (what the user has typed). Validation and dirtiness are
//! pure functions over those copies; a save reconciles the server's echo
//! back into both so they are identical again afterwards.

pub mod draft;
pub mod editor;
pub mod validate;

pub use draft::{Field, ProductDraft};
pub use editor::{EditorError, EditorPhase, ProductEditor, SaveOutcome};
pub use validate::ValidationReport;
