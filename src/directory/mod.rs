//! The committed member collection.
//!
//! An ordered in-memory list; insertion order is display order. Every
//! mutation persists the whole collection before returning, so the store
//! never lags behind what the next read would see.

use crate::errors::AppError;
use crate::models::MemberRecord;
use crate::store::Store;

/// The committed, persisted member collection.
pub struct Directory {
    store: Store,
    members: Vec<MemberRecord>,
}

impl Directory {
    pub fn new(store: Store) -> Self {
        Self {
            store,
            members: Vec::new(),
        }
    }

    /// Replace the in-memory collection with the stored one.
    ///
    /// Called once at startup. Records persisted before stable ids existed
    /// get one backfilled here; it reaches the store on the next mutation.
    pub async fn hydrate(&mut self) {
        self.members = self.store.load().await;
        for member in &mut self.members {
            if member.id.is_empty() {
                member.id = uuid::Uuid::new_v4().to_string();
            }
        }
        tracing::info!("Hydrated {} members", self.members.len());
    }

    pub fn members(&self) -> &[MemberRecord] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&MemberRecord> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Append records at the tail, preserving their order, and persist.
    pub async fn append(&mut self, records: Vec<MemberRecord>) -> Result<(), AppError> {
        self.members.extend(records);
        self.store.save(&self.members).await
    }

    /// Remove the record with the given id and persist. Later records shift
    /// down one position; an unknown id is an explicit error.
    pub async fn remove(&mut self, id: &str) -> Result<MemberRecord, AppError> {
        let index = self
            .members
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Member {} not found", id)))?;

        let removed = self.members.remove(index);
        self.store.save(&self.members).await?;
        tracing::debug!("Removed member {} ({})", removed.id, removed.name);
        Ok(removed)
    }
}
