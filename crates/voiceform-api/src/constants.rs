//! API constants.

/// Base path prefix under which the form endpoints are mounted.
pub const API_BASE: &str = "/api";

/// Headroom added to the request body ceiling on top of the audio size
/// limit, so that multipart boundaries and text fields do not push a
/// file at the limit past it. Files just over the limit still reach the
/// validator and get its diagnostic instead of a generic rejection.
pub const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;
