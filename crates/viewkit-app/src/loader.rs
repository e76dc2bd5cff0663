//! Content loader that reads image headers on a worker thread.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use viewkit_core::{
    spawn_job, Content, ContentLoader, ContentTable, LoadError, LoadTicket, TextureHandle,
};

const NO_FILES_LABEL: &str = "no files";

/// Cycles through a list of files, one per click.
///
/// Images become [`Content::Texture`] entries sized from their headers.
/// Model files are recorded by name only. Loading a file again refills the
/// slot and texture id it got the first time.
pub struct ImageLoader {
    table: ContentTable,
    paths: Vec<PathBuf>,
    slots: HashMap<PathBuf, (usize, u64)>,
    next: usize,
    next_texture: u64,
}

impl ImageLoader {
    pub fn new(table: ContentTable, paths: Vec<PathBuf>) -> Self {
        Self {
            table,
            paths,
            slots: HashMap::new(),
            next: 0,
            next_texture: 1,
        }
    }

    pub fn table(&self) -> &ContentTable {
        &self.table
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn load_content(path: &Path, texture_id: u64) -> Result<Content, LoadError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("obj" | "gltf" | "glb" | "fbx") => {
            std::fs::metadata(path).map_err(|e| LoadError::Io(e.to_string()))?;
            Ok(Content::Model {
                name: file_label(path),
            })
        }
        _ => {
            let (width, height) = image::image_dimensions(path).map_err(|e| match e {
                image::ImageError::IoError(io) => LoadError::Io(io.to_string()),
                other => LoadError::Decode(other.to_string()),
            })?;
            log::debug!("{:?} is {}x{}", path, width, height);
            Ok(Content::Texture(TextureHandle::new(texture_id, width, height)))
        }
    }
}

impl ContentLoader for ImageLoader {
    fn begin_load(&mut self, previous: LoadTicket) -> LoadTicket {
        if self.paths.is_empty() {
            log::warn!("Nothing to load");
            return LoadTicket {
                job: None,
                index: previous.index,
                label: NO_FILES_LABEL.to_string(),
            };
        }

        let path = self.paths[self.next % self.paths.len()].clone();
        self.next += 1;
        let (index, texture_id) = match self.slots.get(&path) {
            Some(&slot) => slot,
            None => {
                let slot = (self.table.reserve(), self.next_texture);
                self.next_texture += 1;
                self.slots.insert(path.clone(), slot);
                slot
            }
        };
        let label = file_label(&path);

        let table = self.table.clone();
        let job = spawn_job("viewkit-loader", move || {
            let content = load_content(&path, texture_id)?;
            table
                .fill(index, content)
                .map_err(|e| LoadError::Io(e.to_string()))
        });
        match job {
            Ok(handle) => LoadTicket::new(Box::new(handle), index, label),
            Err(e) => {
                log::error!("Failed to start loader thread: {}", e);
                previous
            }
        }
    }

    fn content(&self, index: usize) -> Option<Content> {
        self.table.get(index)
    }
}
