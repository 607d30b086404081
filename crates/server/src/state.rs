use database::services::snapshot::SnapshotService;
use hub::{HotelHub, HubResult, SharedHub, Snapshot};
use log::error;
use sea_orm::DatabaseConnection;

use crate::error::ApiError;

/// Shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub hub: SharedHub,
    /// Export target; `None` disables snapshot export
    pub db: Option<DatabaseConnection>,
}

impl AppState {
    pub fn new(hub: SharedHub, db: Option<DatabaseConnection>) -> Self {
        Self { hub, db }
    }

    /// Runs a read-only store operation under the store lock
    pub fn read<T>(&self, op: impl FnOnce(&HotelHub) -> HubResult<T>) -> Result<T, ApiError> {
        let hub = self.hub.lock();
        Ok(op(&hub)?)
    }

    /// Runs a mutating store operation under the store lock, then exports the
    /// resulting state once the lock is released.
    pub fn mutate<T>(
        &self,
        op: impl FnOnce(&mut HotelHub) -> HubResult<T>,
    ) -> Result<T, ApiError> {
        let (value, snapshot) = {
            let mut hub = self.hub.lock();
            let value = op(&mut hub)?;
            let snapshot = self.db.as_ref().map(|_| hub.snapshot());
            (value, snapshot)
        };

        if let Some(snapshot) = snapshot {
            self.export(snapshot);
        }
        Ok(value)
    }

    /// Fire-and-forget: failures are logged, never reported to the caller
    fn export(&self, snapshot: Snapshot) {
        let Some(db) = self.db.clone() else {
            return;
        };

        tokio::spawn(async move {
            if let Err(e) =
                SnapshotService::save_snapshot(&db, &snapshot.hotels, &snapshot.reservations).await
            {
                error!("Failed to export snapshot: {e}");
            }
        });
    }
}
