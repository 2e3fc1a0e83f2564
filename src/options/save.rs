//! Options for writing the merged result.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// How a single merged result should be serialized to disk.
///
/// Negative `bps`, `preview_size`, or `feather_radius` are representable but
/// invalid; the saving collaborator rejects them rather than interpreting
/// them. Path validity and bit-depth support for a given output format are
/// likewise the saver's concern, not this type's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveOptions {
    /// Output bit depth per sample (e.g. 8 or 16).
    #[serde(default = "default_bps")]
    pub bps: i32,

    /// Size of the embedded preview image; 0 means no preview.
    #[serde(default)]
    pub preview_size: i32,

    /// Destination path for the merged output.
    #[serde(default)]
    pub file_name: PathBuf,

    /// Additionally write a mask image marking which source pixels
    /// contributed to the merge.
    #[serde(default)]
    pub save_mask: bool,

    /// Destination path for the mask image. Only meaningful when
    /// `save_mask` is true.
    #[serde(default)]
    pub mask_file_name: PathBuf,

    /// Blending radius in pixels at mask boundaries; 0 means a hard edge.
    #[serde(default = "default_feather_radius")]
    pub feather_radius: i32,
}

fn default_bps() -> i32 {
    16
}

fn default_feather_radius() -> i32 {
    3
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            bps: default_bps(),
            preview_size: 0,
            file_name: PathBuf::new(),
            save_mask: false,
            mask_file_name: PathBuf::new(),
            feather_radius: default_feather_radius(),
        }
    }
}

impl SaveOptions {
    /// Create default options for the given destination path.
    pub fn for_output(file_name: PathBuf) -> Self {
        Self {
            file_name,
            ..Self::default()
        }
    }

    /// Set the output bit depth.
    pub fn with_bps(mut self, bps: i32) -> Self {
        self.bps = bps;
        self
    }

    /// Enable mask output to the given path.
    pub fn with_mask(mut self, mask_file_name: PathBuf) -> Self {
        self.save_mask = true;
        self.mask_file_name = mask_file_name;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_contract() {
        let opts = SaveOptions::default();
        assert_eq!(opts.bps, 16);
        assert_eq!(opts.preview_size, 0);
        assert!(opts.file_name.as_os_str().is_empty());
        assert!(!opts.save_mask);
        assert!(opts.mask_file_name.as_os_str().is_empty());
        assert_eq!(opts.feather_radius, 3);
    }

    #[test]
    fn clone_preserves_mask_fields() {
        let opts = SaveOptions::for_output("out.dng".into()).with_mask("out_mask.png".into());
        let copy = opts.clone();
        assert!(copy.save_mask);
        assert_eq!(copy.mask_file_name, PathBuf::from("out_mask.png"));
        assert_eq!(copy, opts);
    }

    #[test]
    fn fields_are_plain_values() {
        let mut opts = SaveOptions::default();
        opts.bps = 8;
        opts.preview_size = 1024;
        opts.feather_radius = 0;
        assert_eq!(opts.bps, 8);
        assert_eq!(opts.preview_size, 1024);
        assert_eq!(opts.feather_radius, 0);
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let opts: SaveOptions = toml::from_str("file_name = \"out.dng\"").unwrap();
        assert_eq!(opts.file_name, PathBuf::from("out.dng"));
        assert_eq!(opts.bps, 16);
        assert_eq!(opts.feather_radius, 3);
        assert!(!opts.save_mask);
    }

    #[test]
    fn serializes_to_json() {
        let opts = SaveOptions::default();
        let json = serde_json::to_string(&opts).unwrap();
        assert!(json.contains("\"bps\":16"));
        assert!(json.contains("\"feather_radius\":3"));
    }
}
