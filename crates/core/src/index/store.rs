use super::IndexView;
use crate::error::{Result, RtscopeError};
use crate::format::{Header, MIN_FILE_SIZE};
use memmap2::Mmap;
use std::fs::File;
use std::path::{Path, PathBuf};

/// A symbol index mapped read-only from disk.
///
/// The mapping lives exactly as long as this value; dropping it unmaps the file on
/// every exit path.
pub struct SymbolIndex {
    path: PathBuf,
    mmap: Mmap,
    header: Header,
}

impl SymbolIndex {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let size = file.metadata()?.len();
        if size < MIN_FILE_SIZE {
            return Err(RtscopeError::TooSmall { size });
        }

        // SAFETY: the index is a static snapshot; nothing writes to it while it is mapped.
        let mmap = unsafe { Mmap::map(&file)? };
        let header = Header::parse(&mmap)?;

        tracing::info!(
            "Opened index {} ({} nodes, {} symbols)",
            path.display(),
            header.node_count,
            header.dictionary_count
        );

        Ok(Self {
            path: path.to_path_buf(),
            mmap,
            header,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn view(&self) -> IndexView<'_> {
        IndexView::from_parts(&self.mmap, self.header)
    }
}
