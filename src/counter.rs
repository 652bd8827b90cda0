//! Leading-zero-bit counting over hex strings.
//!
//! This is the whole computation: scan the string from its most significant
//! digit, add four bits per zero nibble, and stop at the first nonzero
//! nibble after adding its in-nibble leading zeros.

/// Parse one character as a hex digit, yielding its nibble value in [0, 15].
///
/// Characters that are not valid hex digits parse as 0. This is a deliberate
/// permissive policy, not an oversight: an invalid digit contributes four
/// leading zero bits instead of aborting the scan, matching the behavior the
/// tool has always had. Rejecting invalid input would be a reasonable
/// alternative, but it changes observable results (e.g. for `"00g0"`), so it
/// would be a behavioral variant rather than a fix.
fn nibble_value(c: char) -> u32 {
    c.to_digit(16).unwrap_or(0)
}

/// Count leading zero bits in a hex-encoded string.
///
/// Scans left to right. Each zero nibble contributes 4 bits. The first
/// nonzero nibble contributes the leading zeros within its own 4 bits
/// (nibble 8-15 adds 0, 4-7 adds 1, 2-3 adds 2, 1 adds 3) and ends the
/// scan. An empty string, or one consisting entirely of zero nibbles,
/// yields 4 x length.
///
/// Invalid hex digits parse as zero nibbles; see [`nibble_value`]'s
/// permissive policy.
///
/// # Examples
///
/// ```rust
/// use hexlz::count_leading_zeros;
///
/// assert_eq!(count_leading_zeros("0800"), 5);
/// assert_eq!(count_leading_zeros("0000"), 16);
/// assert_eq!(count_leading_zeros(""), 0);
/// ```
#[must_use]
pub fn count_leading_zeros(hex: &str) -> u32 {
    let mut count = 0;
    for c in hex.chars() {
        let nibble = nibble_value(c);
        if nibble == 0 {
            count += 4;
        } else {
            // leading_zeros() counts over all 32 bits; the nibble occupies
            // only the low 4, so discard the 28 bits above it.
            count += nibble.leading_zeros() - 28;
            break;
        }
    }
    count
}
