use async_trait::async_trait;
use scriptdeploy_api::{BoxError, ResourceModule, ResourceStream};
use std::io::{Cursor, Read};
use std::sync::Arc;
use zip::ZipArchive;
use zip::result::{ZipError, ZipResult};

/// Upper bound on the buffer reserved from an entry's declared size
const MAX_PREALLOC: u64 = 1024 * 1024;

/// Module over a zip (or jar) archive held in memory.
///
/// The central directory is parsed once; clones of the parsed archive share
/// it. Directory entries are not resources. Entries are decompressed on
/// open, on the blocking pool.
#[derive(Debug, Clone)]
pub struct ArchiveModule {
    name: String,
    archive: ZipArchive<Cursor<Arc<[u8]>>>,
    entries: Vec<String>,
}

impl ArchiveModule {
    /// Parse the archive's central directory; malformed archives fail here
    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> ZipResult<Self> {
        let mut archive = ZipArchive::new(Cursor::new(bytes.into()))?;

        let mut entries = Vec::with_capacity(archive.len());
        for i in 0..archive.len() {
            let entry = archive.by_index_raw(i)?;
            if !entry.is_dir() {
                entries.push(entry.name().to_string());
            }
        }

        Ok(Self {
            name: name.into(),
            archive,
            entries,
        })
    }
}

fn read_entry(
    archive: &mut ZipArchive<Cursor<Arc<[u8]>>>,
    name: &str,
) -> ZipResult<Option<Vec<u8>>> {
    let mut entry = match archive.by_name(name) {
        Ok(entry) if !entry.is_dir() => entry,
        Ok(_) | Err(ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e),
    };

    let mut data = Vec::with_capacity(entry.size().min(MAX_PREALLOC) as usize);
    entry.read_to_end(&mut data)?;
    Ok(Some(data))
}

#[async_trait]
impl ResourceModule for ArchiveModule {
    fn name(&self) -> &str {
        &self.name
    }

    fn resource_names(&self) -> Box<dyn Iterator<Item = String> + Send + '_> {
        Box::new(self.entries.iter().cloned())
    }

    async fn open_resource(&self, name: &str) -> Result<Option<ResourceStream>, BoxError> {
        let mut archive = self.archive.clone();
        let name = name.to_string();
        let data = tokio::task::spawn_blocking(move || read_entry(&mut archive, &name)).await??;
        Ok(data.map(|data| Box::new(Cursor::new(data)) as ResourceStream))
    }
}
