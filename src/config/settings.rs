use crate::cli::Args;

use super::defaults::DEFAULT_COMPRESSION_LEVEL;

/// Runtime settings for an optimization run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Flate compression level (0-9)
    pub compression_level: u32,
    /// Merge a page's content streams into a single stream
    pub merge_streams: bool,
    /// Drop objects no longer reachable from the trailer before saving
    pub prune_unused: bool,
    /// Reload the output and compare page counts
    pub verify_pages: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            compression_level: DEFAULT_COMPRESSION_LEVEL,
            merge_streams: true,
            prune_unused: true,
            verify_pages: false,
        }
    }
}

impl Settings {
    /// Create settings from CLI arguments
    pub fn from_args(args: &Args) -> Self {
        Self {
            compression_level: args.level,
            merge_streams: !args.no_merge,
            prune_unused: !args.keep_unused,
            verify_pages: args.verify,
        }
    }

    pub fn flate_level(&self) -> flate2::Compression {
        flate2::Compression::new(self.compression_level.min(9))
    }
}
