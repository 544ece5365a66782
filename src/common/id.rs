//! Widget identifier generation.
use std::sync::atomic::{AtomicU64, Ordering};

/// Prefix of automatically generated widget ids
pub const AUTO_ID_PREFIX: &str = "w";

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Generate a process-unique widget id in the form `w0`, `w1`, ...
///
/// Widgets call this when their root options carry no `id`; a caller-supplied
/// id always takes precedence.
pub fn next_widget_id() -> String {
    let seq = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    let mut buffer = itoa::Buffer::new();
    let digits = buffer.format(seq);
    let mut id = String::with_capacity(AUTO_ID_PREFIX.len() + digits.len());
    id.push_str(AUTO_ID_PREFIX);
    id.push_str(digits);
    id
}
