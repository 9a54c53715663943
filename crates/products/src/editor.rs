//! Editor state machine: `Loading → Ready → Saving → Ready`, or
//! `Loading → Failed` (terminal).

use thiserror::Error;

use stockdesk_core::{ProductId, TransportError};
use stockdesk_transport::{Api, Product};

use crate::draft::{Field, ProductDraft};
use crate::validate::ValidationReport;

/// Observable lifecycle phase of an editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorPhase {
    Loading,
    Ready,
    Saving,
    Failed,
}

/// Result of a save attempt that reached the server (or was declined).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The server applied a material change ("Saved").
    Saved,
    /// The payload matched what was stored ("No changes").
    NoChanges,
    /// Guard failed (not ready, capability missing, invalid, or clean);
    /// nothing was sent.
    Skipped,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// Edits are only accepted while the editor is `Ready`.
    #[error("editor is not ready for edits")]
    NotEditable,
}

enum EditorState {
    Loading,
    Ready {
        pristine: Product,
        draft: ProductDraft,
        error: Option<TransportError>,
    },
    // Buffers live on the save call's stack while the request is in
    // flight; the exclusive borrow already blocks overlapping saves.
    Saving,
    Failed(TransportError),
}

/// One editor session over one product record.
///
/// The editor exclusively owns both copies of the record: *pristine* is
/// only ever replaced by a server response, *working* only by user input or
/// by reconciliation after a successful save. Both are swapped as whole
/// values; no partially-updated copy is ever observable.
pub struct ProductEditor<A> {
    api: A,
    id: ProductId,
    state: EditorState,
}

impl<A: Api> ProductEditor<A> {
    /// Create an editor in `Loading`; call [`load`](Self::load) to resolve it.
    pub fn new(api: A, id: ProductId) -> Self {
        Self {
            api,
            id,
            state: EditorState::Loading,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn phase(&self) -> EditorPhase {
        match &self.state {
            EditorState::Loading => EditorPhase::Loading,
            EditorState::Ready { .. } => EditorPhase::Ready,
            EditorState::Saving => EditorPhase::Saving,
            EditorState::Failed(_) => EditorPhase::Failed,
        }
    }

    /// The last server-confirmed copy.
    pub fn record(&self) -> Option<&Product> {
        match &self.state {
            EditorState::Ready { pristine, .. } => Some(pristine),
            _ => None,
        }
    }

    /// The working draft.
    pub fn draft(&self) -> Option<&ProductDraft> {
        match &self.state {
            EditorState::Ready { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// The retained error, if any: the load failure in `Failed`, or the
    /// most recent save failure in `Ready`.
    pub fn error(&self) -> Option<&TransportError> {
        match &self.state {
            EditorState::Ready { error, .. } => error.as_ref(),
            EditorState::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Fetch the record and enter `Ready` with pristine == working.
    ///
    /// A failure is terminal: the editor enters `Failed`, retains the error
    /// for display, and accepts no further operations. Calling `load` again
    /// in `Ready` is a no-op; in `Failed` it returns the retained error.
    pub async fn load(&mut self) -> Result<(), TransportError> {
        match &self.state {
            EditorState::Loading => {}
            EditorState::Failed(error) => return Err(error.clone()),
            _ => return Ok(()),
        }

        match self.api.get_product(self.id).await {
            Ok(record) => {
                let draft = ProductDraft::from_record(&record);
                self.state = EditorState::Ready {
                    pristine: record,
                    draft,
                    error: None,
                };
                Ok(())
            }
            Err(err) => {
                tracing::debug!(id = %self.id, error = %err, "product load failed");
                self.state = EditorState::Failed(err.clone());
                Err(err)
            }
        }
    }

    /// Replace one working-copy field with user input. Only valid in
    /// `Ready`; the pristine copy is never touched.
    pub fn set_field(&mut self, field: Field, raw: &str) -> Result<(), EditorError> {
        match &mut self.state {
            EditorState::Ready { draft, .. } => {
                draft.set(field, raw);
                Ok(())
            }
            _ => Err(EditorError::NotEditable),
        }
    }

    /// Pure; recomputed on every call. Valid (empty) outside `Ready`.
    pub fn validate(&self) -> ValidationReport {
        self.draft()
            .map(ProductDraft::validate)
            .unwrap_or_default()
    }

    /// Pure; false outside `Ready` and immediately after load/save.
    pub fn is_dirty(&self) -> bool {
        match &self.state {
            EditorState::Ready {
                pristine, draft, ..
            } => draft.is_dirty(pristine),
            _ => false,
        }
    }

    /// Persist the working copy.
    ///
    /// A no-op (`Skipped`) unless the caller holds the edit capability, the
    /// draft validates, and it differs from pristine — an invalid or clean
    /// draft never reaches the transport. On success the server's echo
    /// becomes the new pristine and the working copy is re-derived from it
    /// field by field, so `is_dirty()` is false afterwards; `changed`
    /// distinguishes "Saved" from "No changes". On failure the editor
    /// returns to `Ready` with both copies untouched and the error
    /// retained; the save is safely retryable.
    pub async fn save(&mut self, can_edit: bool) -> Result<SaveOutcome, TransportError> {
        let (pristine, draft, error) =
            match std::mem::replace(&mut self.state, EditorState::Saving) {
                EditorState::Ready {
                    pristine,
                    draft,
                    error,
                } => (pristine, draft, error),
                other => {
                    // Loading, Failed, or a save already in flight.
                    self.state = other;
                    return Ok(SaveOutcome::Skipped);
                }
            };

        if !can_edit || !draft.is_dirty(&pristine) {
            self.state = EditorState::Ready {
                pristine,
                draft,
                error,
            };
            return Ok(SaveOutcome::Skipped);
        }

        let update = match draft.to_update() {
            Ok(update) => update,
            Err(_) => {
                self.state = EditorState::Ready {
                    pristine,
                    draft,
                    error,
                };
                return Ok(SaveOutcome::Skipped);
            }
        };

        match self.api.update_product(self.id, &update).await {
            Ok(receipt) => {
                let outcome = if receipt.changed {
                    SaveOutcome::Saved
                } else {
                    SaveOutcome::NoChanges
                };
                tracing::debug!(id = %self.id, changed = receipt.changed, "product saved");
                let draft = ProductDraft::from_record(&receipt.product);
                self.state = EditorState::Ready {
                    pristine: receipt.product,
                    draft,
                    error: None,
                };
                Ok(outcome)
            }
            Err(err) => {
                self.state = EditorState::Ready {
                    pristine,
                    draft,
                    error: Some(err.clone()),
                };
                Err(err)
            }
        }
    }
}
