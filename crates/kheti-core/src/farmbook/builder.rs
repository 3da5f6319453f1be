//! Builder for creating and configuring Farmbook instances.

use std::path::{Path, PathBuf};

use log::info;

use super::Farmbook;
use crate::{
    catalog::verify_catalog,
    error::{KhetiError, Result},
};

/// Builder for creating and configuring Farmbook instances.
#[derive(Debug, Clone, Default)]
pub struct FarmbookBuilder {
    database_path: Option<PathBuf>,
}

impl FarmbookBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/kheti/kheti.db` or `~/.local/share/kheti/kheti.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured farmbook.
    ///
    /// # Errors
    ///
    /// Returns `KhetiError::Configuration` if the static crop tables are
    /// inconsistent
    /// Returns `KhetiError::FileSystem` if the database directory cannot be
    /// created
    /// Returns `KhetiError::Database` if database initialization fails
    pub async fn build(self) -> Result<Farmbook> {
        verify_catalog()?;

        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| KhetiError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let farmbook = Farmbook::new(db_path);
        let version = farmbook.with_database(|db| db.schema_version()).await?;
        info!(
            "Opened farmbook at {} (schema v{version})",
            farmbook.db_path.display()
        );

        Ok(farmbook)
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("kheti")
            .place_data_file("kheti.db")
            .map_err(|e| KhetiError::XdgDirectory(e.to_string()))
    }
}

