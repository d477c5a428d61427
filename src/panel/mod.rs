//! Read-only detail panel selection.

use crate::models::MemberRecord;

/// Tracks which member is shown in the detail side panel, if any.
///
/// Holds a by-value copy of the selected record, so later collection edits
/// do not reach an open panel.
#[derive(Default)]
pub struct DetailPanel {
    selection: Option<MemberRecord>,
}

impl DetailPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.selection.is_some()
    }

    /// Copy the record into the panel and open it.
    pub fn select(&mut self, member: &MemberRecord) {
        self.selection = Some(member.clone());
    }

    /// Close the panel and clear the selection.
    pub fn deselect(&mut self) {
        self.selection = None;
    }

    pub fn selected(&self) -> Option<&MemberRecord> {
        self.selection.as_ref()
    }
}
