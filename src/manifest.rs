//! The `Contents.json` manifest describing the icon set.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::SizeSpec;

/// Top-level manifest: one image entry per size variant plus the fixed
/// authoring info block Xcode expects.
#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    pub images: Vec<ImageEntry>,
    pub info: Info,
}

/// One icon variant in the manifest.
#[derive(Debug, Clone, Serialize)]
pub struct ImageEntry {
    pub filename: String,
    pub idiom: String,
    pub scale: String,
    pub size: String,
}

/// Authoring info block.
#[derive(Debug, Clone, Serialize)]
pub struct Info {
    pub author: String,
    pub version: u32,
}

impl Manifest {
    /// Build the manifest for the given variants, in order.
    pub fn from_sizes(sizes: &[SizeSpec]) -> Self {
        let images = sizes
            .iter()
            .map(|spec| ImageEntry {
                filename: spec.filename.to_string(),
                idiom: "mac".to_string(),
                scale: spec.scale_string(),
                size: spec.size_string(),
            })
            .collect();
        Self {
            images,
            info: Info {
                author: "xcode".to_string(),
                version: 1,
            },
        }
    }

    /// Serialize to the 2-space-indented JSON Xcode writes itself.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Manifest(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ICON_SIZES;

    #[test]
    fn one_entry_per_variant() {
        let manifest = Manifest::from_sizes(&ICON_SIZES);
        assert_eq!(manifest.images.len(), ICON_SIZES.len());
        for (entry, spec) in manifest.images.iter().zip(ICON_SIZES.iter()) {
            assert_eq!(entry.filename, spec.filename);
            assert_eq!(entry.idiom, "mac");
            assert_eq!(entry.scale, format!("{}x", spec.scale));
            assert_eq!(entry.size, format!("{0}x{0}", spec.base));
        }
    }

    #[test]
    fn json_shape() {
        let manifest = Manifest::from_sizes(&ICON_SIZES[..1]);
        let json = manifest.to_json().unwrap();
        assert!(json.contains("\"filename\": \"icon_16x16.png\""));
        assert!(json.contains("\"idiom\": \"mac\""));
        assert!(json.contains("\"author\": \"xcode\""));
        assert!(json.contains("\"version\": 1"));
    }
}
