//! Platform detection from raw OS descriptors

use crate::factory::Platform;

/// Returned by [`detect_platform`] when no known marker is found.
/// [`crate::resolve_family`] rejects it.
pub const UNSUPPORTED_PLATFORM: &str = "unsupported";

/// Map a raw OS descriptor such as `"Windows 10"` or `"Mac OS X"` to a
/// family key
///
/// The descriptor is lowercased, then checked for `"windows"` before
/// `"mac"`. Anything else yields [`UNSUPPORTED_PLATFORM`] rather than an
/// error.
pub fn detect_platform(raw: &str) -> &'static str {
    let normalized = raw.to_lowercase();

    let detected = if normalized.contains(Platform::Windows.as_key()) {
        Platform::Windows.as_key()
    } else if normalized.contains(Platform::Mac.as_key()) {
        Platform::Mac.as_key()
    } else {
        UNSUPPORTED_PLATFORM
    };

    tracing::trace!(raw, detected, "Detected platform");
    detected
}
