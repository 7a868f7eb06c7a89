//! External bitmap-resampling delegate.
//!
//! Small sizes are produced by downsampling the master PNG rather than
//! re-rendering, and the resampling itself is delegated to an OS tool. The
//! seam is deliberately narrow so the driver can be tested against a fake
//! and so failures surface as typed errors instead of silently missing
//! files.

use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

/// Resamples a PNG on disk to a new size.
pub trait Resizer {
    /// Resize the image at `src` to `width` x `height`, writing it to `dst`.
    fn resize(&self, src: &Path, width: u32, height: u32, dst: &Path) -> Result<()>;
}

/// The macOS `sips` scriptable image tool, invoked as a subprocess with
/// captured output.
pub struct SipsResizer;

impl Resizer for SipsResizer {
    fn resize(&self, src: &Path, width: u32, height: u32, dst: &Path) -> Result<()> {
        // sips -z takes height before width
        let output = Command::new("sips")
            .arg("-z")
            .arg(height.to_string())
            .arg(width.to_string())
            .arg(src)
            .arg("--out")
            .arg(dst)
            .output()
            .map_err(|e| Error::Resize(format!("failed to launch sips: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Resize(format!(
                "sips exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }
        Ok(())
    }
}
