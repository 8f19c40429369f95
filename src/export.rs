use crate::surface::Surface;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Suggested filename handed to the save collaborator.
pub const SUGGESTED_NAME: &str = "sketch.png";
/// Media type of the exported artifact.
pub const PNG_MIME: &str = "image/png";

/// Errors that can occur inside the file-save collaborator
#[derive(Debug, Error)]
pub enum SaveError {
    /// The user dismissed the save prompt.
    #[error("save cancelled")]
    Cancelled,

    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur during export
#[derive(Debug, Error)]
pub enum ExportError {
    /// A previous export has not finished yet; the save collaborator is a
    /// single external resource per invocation.
    #[error("an export is already in progress")]
    Busy,

    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    /// The collaborator rejected the save or the user cancelled it.
    #[error("export aborted: {0}")]
    Aborted(#[from] SaveError),
}

/// The external "save a byte buffer to a user-chosen file" capability.
///
/// Given the encoded bytes, a suggested filename and a media type, prompts
/// the user (or decides on its own) where to put them and returns the
/// resulting path, or signals cancellation/failure.
pub trait SaveTarget {
    fn save(&mut self, bytes: &[u8], suggested_name: &str, mime: &str)
        -> Result<PathBuf, SaveError>;
}

/// Save collaborator that writes into a fixed directory under the suggested
/// name, for shells without a file dialog.
pub struct DiskSaveTarget {
    dir: PathBuf,
}

impl DiskSaveTarget {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

impl SaveTarget for DiskSaveTarget {
    fn save(
        &mut self,
        bytes: &[u8],
        suggested_name: &str,
        _mime: &str,
    ) -> Result<PathBuf, SaveError> {
        let path = self.dir.join(suggested_name);
        std::fs::write(&path, bytes)?;
        log::info!("saved {} bytes to {}", bytes.len(), path.display());
        Ok(path)
    }
}

/// Encode the surface's current contents as a PNG byte stream. An empty
/// surface encodes to a valid, fully transparent image of the surface's
/// pixel dimensions.
pub fn encode_png(surface: &dyn Surface) -> Result<Vec<u8>, image::ImageError> {
    let snapshot = surface.to_rgba();
    let mut bytes = Cursor::new(Vec::new());
    snapshot.write_to(&mut bytes, image::ImageFormat::Png)?;
    Ok(bytes.into_inner())
}
