//! Splitting a pending buffer into the next line and its remainder.
//!
//! [extract_line] and [split_remainder] are the two halves of one split;
//! [split_pending] computes both from a single separator scan and moves the
//! buffer's storage into the returned line.

/// Position of the first `separator` in `pending`, if any.
#[inline]
pub fn find_separator(pending: &[u8], separator: u8) -> Option<usize> {
    pending.iter().position(|&b| b == separator)
}

/// Returns the next line contained in `pending`.
///
/// # Returns
/// * `None` - If `pending` is empty
/// * `Some(line)` - The prefix through and including the first separator,
///   or all of `pending` if it holds no separator (end of source)
pub fn extract_line(pending: &[u8], separator: u8) -> Option<Vec<u8>> {
    if pending.is_empty() {
        return None;
    }
    match find_separator(pending, separator) {
        Some(pos) => Some(pending[..=pos].to_vec()),
        None => Some(pending.to_vec()),
    }
}

/// Returns what is left of `pending` after its next line.
///
/// # Returns
/// * `None` - If `pending` is empty or holds no separator (the whole buffer
///   is the final line)
/// * `Some(rest)` - Everything strictly after the first separator, possibly
///   empty
pub fn split_remainder(pending: &[u8], separator: u8) -> Option<Vec<u8>> {
    if pending.is_empty() {
        return None;
    }
    find_separator(pending, separator).map(|pos| pending[pos + 1..].to_vec())
}

/// Splits `pending` into `(line, remainder)` with one scan.
///
/// Agrees with [extract_line] and [split_remainder] on the same input. The
/// allocation of `pending` becomes the line; only the remainder is copied.
pub fn split_pending(mut pending: Vec<u8>, separator: u8) -> (Option<Vec<u8>>, Option<Vec<u8>>) {
    if pending.is_empty() {
        return (None, None);
    }
    match find_separator(&pending, separator) {
        Some(pos) => {
            let remainder = pending.split_off(pos + 1);
            (Some(pending), Some(remainder))
        }
        None => (Some(pending), None),
    }
}
