use crate::core::Storage;
use crate::domain::model::{ArchiveEntry, DraftRequest, GenerationResult};
use crate::utils::error::{FormError, Result};

pub const DEFAULT_ARCHIVE_FILE: &str = "structures.json";

/// 把每次生成的方案追加到 JSON 陣列檔案
pub struct PlanArchive<S: Storage> {
    storage: S,
    file_name: String,
}

impl<S: Storage> PlanArchive<S> {
    pub fn new(storage: S) -> Self {
        Self::with_file_name(storage, DEFAULT_ARCHIVE_FILE)
    }

    pub fn with_file_name(storage: S, file_name: &str) -> Self {
        Self {
            storage,
            file_name: file_name.to_string(),
        }
    }

    pub async fn load(&self) -> Result<Vec<ArchiveEntry>> {
        match self.storage.read_file(&self.file_name).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(FormError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    pub async fn append(
        &self,
        draft: &DraftRequest,
        result: &GenerationResult,
    ) -> Result<ArchiveEntry> {
        let mut entries = self.load().await?;

        let entry = ArchiveEntry {
            time: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            text: draft.theme.clone(),
            plans: result.rendered().to_vec(),
        };
        entries.push(entry.clone());

        let json_data = serde_json::to_string_pretty(&entries)?;
        self.storage
            .write_file(&self.file_name, json_data.as_bytes())
            .await?;

        tracing::debug!("Archived plans ({} entries in {})", entries.len(), self.file_name);
        Ok(entry)
    }
}
