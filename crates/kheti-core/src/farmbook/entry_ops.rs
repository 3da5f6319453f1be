//! Crop log operations for the Farmbook.

use log::debug;

use super::Farmbook;
use crate::{
    error::{KhetiError, Result},
    models::{CropEntry, CropPlan, NewCropEntry},
    params::{AddCropEntry, EntryPlan, Id},
    schedule::generate_plan,
};

impl Farmbook {
    /// Records a crop in the crop log.
    ///
    /// # Errors
    ///
    /// Returns `KhetiError::InvalidInput` for an empty crop name, a
    /// non-positive area or a sowing date that does not parse.
    pub async fn add_crop_entry(&self, params: &AddCropEntry) -> Result<CropEntry> {
        let new = NewCropEntry::try_from(params.clone())?;

        let entry = self
            .with_database(move |db| db.insert_crop_entry(&new))
            .await?;
        debug!("Recorded crop entry {} ({})", entry.id, entry.crop);
        Ok(entry)
    }

    /// Retrieves a crop entry by its ID.
    pub async fn get_crop_entry(&self, params: &Id) -> Result<Option<CropEntry>> {
        let id = params.id;
        self.with_database(move |db| db.get_crop_entry(id)).await
    }

    /// Lists the crop log, most recently recorded first.
    pub async fn list_crop_entries(&self) -> Result<Vec<CropEntry>> {
        self.with_database(|db| db.list_crop_entries()).await
    }

    /// Removes a crop entry and returns what was removed.
    ///
    /// # Errors
    ///
    /// Returns `KhetiError::EntryNotFound` if no entry has this ID.
    pub async fn remove_crop_entry(&self, params: &Id) -> Result<CropEntry> {
        let id = params.id;

        let entry = self
            .with_database(move |db| {
                let entry = db
                    .get_crop_entry(id)?
                    .ok_or(KhetiError::EntryNotFound { id })?;
                db.delete_crop_entry(id)?;
                Ok(entry)
            })
            .await?;
        debug!("Removed crop entry {id}");
        Ok(entry)
    }

    /// Generates the calendar of a stored crop entry.
    ///
    /// # Errors
    ///
    /// Returns `KhetiError::EntryNotFound` if no entry has this ID and
    /// `KhetiError::InvalidInput` if the entry has no sowing date.
    pub async fn plan_for_entry(&self, params: &EntryPlan) -> Result<CropPlan> {
        let id = params.id;
        let entry = self
            .get_crop_entry(&Id { id })
            .await?
            .ok_or(KhetiError::EntryNotFound { id })?;

        let request = entry.plan_request(params.locale.unwrap_or_default())?;
        let plan = generate_plan(&request)?;
        Ok(CropPlan { entry, plan })
    }
}
