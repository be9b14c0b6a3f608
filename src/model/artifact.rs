//! Persistence of trained models.

use crate::model::error::ModelError;
use crate::model::regressor::SeasonalOlsModel;
use crate::types::window::YearWindow;
use bincode::config::{Configuration, Fixint, LittleEndian};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

const BINCODE_CONFIG: Configuration<LittleEndian, Fixint> =
    bincode::config::standard().with_fixed_int_encoding();

/// A trained model plus the metadata the serving path needs.
///
/// The artifact is produced offline by the trainer and loaded once at client
/// construction; the serving path never retrains. Its [`YearWindow`] bounds
/// which request ranges the model may be asked about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub model: SeasonalOlsModel,
    pub window: YearWindow,
}

impl ModelArtifact {
    pub fn save(&self, path: &Path) -> Result<(), ModelError> {
        let bytes = bincode::serde::encode_to_vec(self, BINCODE_CONFIG)
            .map_err(|e| ModelError::ArtifactEncode(Box::new(e)))?;
        std::fs::write(path, &bytes)
            .map_err(|e| ModelError::ArtifactWrite(path.to_path_buf(), e))?;
        info!("Wrote model artifact ({} bytes) to {:?}", bytes.len(), path);
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let bytes =
            std::fs::read(path).map_err(|e| ModelError::ArtifactRead(path.to_path_buf(), e))?;
        let (artifact, _) =
            bincode::serde::decode_from_slice::<ModelArtifact, _>(&bytes, BINCODE_CONFIG)
                .map_err(|e| ModelError::ArtifactDecode(path.to_path_buf(), Box::new(e)))?;
        Ok(artifact)
    }
}
