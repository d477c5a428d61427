//! Single view-state container for the directory shell.
//!
//! Owns page navigation, the collection, the add-form and the detail panel,
//! replacing scattered open/closed flags with explicit transitions. It also
//! serializes image-decode completions onto the main update path: decodes are
//! spawned tagged with their draft id and applied only through
//! [`Session::apply_pending_images`].

use std::path::PathBuf;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::directory::Directory;
use crate::errors::AppError;
use crate::form::{self, DraftForm, ImageAttachment};
use crate::models::MemberRecord;
use crate::panel::DetailPanel;
use crate::search::filter_members;
use crate::view::Page;

/// All mutable view state for one directory session.
pub struct Session {
    pub page: Page,
    pub directory: Directory,
    pub form: DraftForm,
    pub panel: DetailPanel,
    query: String,
    image_tx: UnboundedSender<ImageAttachment>,
    image_rx: UnboundedReceiver<ImageAttachment>,
}

impl Session {
    pub fn new(directory: Directory) -> Self {
        let (image_tx, image_rx) = mpsc::unbounded_channel();
        Self {
            page: Page::Overview,
            directory,
            form: DraftForm::new(),
            panel: DetailPanel::new(),
            query: String::new(),
            image_tx,
            image_rx,
        }
    }

    /// Switch the shell between pages.
    pub fn navigate(&mut self, page: Page) {
        self.page = page;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// The derived filtered view for the current query.
    pub fn filtered(&self) -> Vec<&MemberRecord> {
        filter_members(self.directory.members(), &self.query)
    }

    /// Start an image decode for a draft.
    ///
    /// The read and encode run off the main path. The completion carries the
    /// draft id captured here, so two decodes finishing in either order can
    /// never target each other's draft. A failed decode is logged and leaves
    /// the draft's image unset.
    pub fn request_image(&self, draft_id: &str, path: PathBuf) {
        let tx = self.image_tx.clone();
        let draft_id = draft_id.to_string();
        tokio::spawn(async move {
            match form::read_image_data_uri(&path).await {
                Ok(data_uri) => {
                    // A dropped receiver means the session is gone.
                    let _ = tx.send(ImageAttachment { draft_id, data_uri });
                }
                Err(e) => {
                    tracing::warn!("Image decode for draft {} failed: {}", draft_id, e);
                }
            }
        });
    }

    /// Drain completed image decodes and apply them to their drafts.
    /// Completions whose draft no longer exists are discarded.
    pub fn apply_pending_images(&mut self) {
        while let Ok(attachment) = self.image_rx.try_recv() {
            self.form.attach_image(attachment);
        }
    }

    /// Commit the open form's drafts to the collection, applying any image
    /// decodes that completed before the submit.
    pub async fn submit_form(&mut self) -> Result<usize, AppError> {
        self.apply_pending_images();
        self.form.submit(&mut self.directory).await
    }
}
