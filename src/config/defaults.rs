/// Output path used when `--output` is not given
pub const DEFAULT_OUTPUT_PATH: &str = "optimized_output.pdf";

/// Flate level for re-encoded content streams (9 = best)
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 9;

/// Separator inserted between content streams when a page's streams are merged
pub const CONTENT_SEPARATOR: &[u8] = b"\n";
