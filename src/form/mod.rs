//! Add-members form: draft management and image attachment.
//!
//! The form is a Closed/Open state machine over an owned list of in-progress
//! drafts. Drafts are addressed by record id, never by position, so an image
//! decode finishing late can only ever land on the draft it was requested for.

use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::directory::Directory;
use crate::errors::AppError;
use crate::models::{MemberField, MemberRecord};

/// A completed image decode, tagged with the draft it was requested for.
#[derive(Debug, Clone)]
pub struct ImageAttachment {
    pub draft_id: String,
    pub data_uri: String,
}

/// The add-members form.
#[derive(Default)]
pub struct DraftForm {
    open: bool,
    drafts: Vec<MemberRecord>,
}

impl DraftForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn drafts(&self) -> &[MemberRecord] {
        &self.drafts
    }

    /// Open the form with an empty draft list.
    pub fn open(&mut self) {
        self.open = true;
        self.drafts.clear();
    }

    /// Append one blank draft; returns its generated id.
    pub fn add_draft(&mut self) -> Result<String, AppError> {
        self.ensure_open()?;
        let draft = MemberRecord::blank();
        let id = draft.id.clone();
        self.drafts.push(draft);
        Ok(id)
    }

    /// Set a single field on the draft with the given id. Status values
    /// outside the enumerated set are rejected and never stored.
    pub fn edit_field(&mut self, id: &str, field: MemberField, value: &str) -> Result<(), AppError> {
        self.ensure_open()?;
        self.draft_mut(id)?.set_field(field, value)
    }

    /// Reset a draft's image to empty (the form's "Remove Photo" action).
    pub fn clear_image(&mut self, id: &str) -> Result<(), AppError> {
        self.ensure_open()?;
        self.draft_mut(id)?.profile_image = String::new();
        Ok(())
    }

    /// Delete one draft; later drafts shift down.
    pub fn remove_draft(&mut self, id: &str) -> Result<(), AppError> {
        self.ensure_open()?;
        let index = self
            .drafts
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Draft {} not found", id)))?;
        self.drafts.remove(index);
        Ok(())
    }

    /// Apply a completed image decode to the draft it was requested for.
    ///
    /// The target may have disappeared in the meantime (draft removed, form
    /// cancelled or submitted); the attachment is then discarded.
    pub fn attach_image(&mut self, attachment: ImageAttachment) {
        if !self.open {
            tracing::debug!(
                "Dropping image for draft {}: form is closed",
                attachment.draft_id
            );
            return;
        }
        match self.drafts.iter_mut().find(|d| d.id == attachment.draft_id) {
            Some(draft) => draft.profile_image = attachment.data_uri,
            None => tracing::debug!("Dropping image for removed draft {}", attachment.draft_id),
        }
    }

    /// Discard all drafts and close, without touching the collection.
    pub fn cancel(&mut self) {
        self.drafts.clear();
        self.open = false;
    }

    /// Commit every draft to the collection in order, persist, reset the
    /// draft list and close. Drafts are accepted as-is; empty fields are
    /// not rejected.
    pub async fn submit(&mut self, directory: &mut Directory) -> Result<usize, AppError> {
        self.ensure_open()?;
        let drafts = std::mem::take(&mut self.drafts);
        let count = drafts.len();
        directory.append(drafts).await?;
        self.open = false;
        tracing::info!("Committed {} new members", count);
        Ok(count)
    }

    fn ensure_open(&self) -> Result<(), AppError> {
        if self.open {
            Ok(())
        } else {
            Err(AppError::Validation(
                "The add-members form is not open".to_string(),
            ))
        }
    }

    fn draft_mut(&mut self, id: &str) -> Result<&mut MemberRecord, AppError> {
        self.drafts
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Draft {} not found", id)))
    }
}

/// Read an image file and encode it as a `data:` URI.
///
/// The mime type is sniffed from the file's magic bytes. Runs off the main
/// update path; the caller applies the result via [`DraftForm::attach_image`].
/// Failure leaves the draft's image unset and never blocks a submit.
pub async fn read_image_data_uri(path: &Path) -> Result<String, AppError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| AppError::ImageDecode(format!("Failed to read {}: {}", path.display(), e)))?;

    let kind = image::guess_format(&bytes)
        .map_err(|e| AppError::ImageDecode(format!("Unrecognized image format: {}", e)))?;

    Ok(format!(
        "data:{};base64,{}",
        kind.to_mime_type(),
        BASE64.encode(&bytes)
    ))
}
