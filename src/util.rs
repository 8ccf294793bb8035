//! Small string helpers shared across the crate.
//!
//! String splitting, random alphanumeric generation for default
//! credentials, and MAC address syntax checking.

use crate::hotspot::MAX_PSK_LEN;
use rand_core::{OsRng, RngCore};

/// Length of a canonical colon-separated MAC address string.
const MAC_STRING_LEN: usize = 17;

/// Split `input` on every occurrence of `delimiter`, dropping empty
/// segments.
///
/// An empty delimiter yields the whole input as a single element.
///
/// # Example
///
/// ```
/// use wifimgr_core::util::split_string;
///
/// assert_eq!(split_string("a,,b,", ","), vec!["a", "b"]);
/// assert_eq!(split_string("abc", ""), vec!["abc"]);
/// ```
pub fn split_string(input: &str, delimiter: &str) -> Vec<String> {
    if delimiter.is_empty() {
        return vec![input.to_string()];
    }
    input
        .split(delimiter)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Generate a random alphanumeric string of `len` characters.
///
/// Each character comes from lowercase letters, uppercase letters or
/// digits, with the class chosen per character. Lengths above
/// [`MAX_PSK_LEN`] are clamped so the result always fits a pre-shared key.
/// Characters are drawn from the operating system RNG.
pub fn random_alphanumeric(len: usize) -> String {
    let len = len.min(MAX_PSK_LEN);
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        let r = OsRng.next_u32();
        let c = match r % 3 {
            0 => b'a' + (r % 26) as u8,
            1 => b'A' + (r % 26) as u8,
            _ => b'0' + (r % 10) as u8,
        };
        out.push(char::from(c));
    }
    out
}

/// Check that `mac` is a canonical colon-separated MAC address.
///
/// Exactly six pairs of hex digits separated by ':', e.g.
/// `"AA:BB:CC:DD:EE:FF"`.
pub fn is_valid_mac(mac: &str) -> bool {
    let bytes = mac.as_bytes();
    if bytes.len() != MAC_STRING_LEN {
        return false;
    }
    for (i, &b) in bytes.iter().enumerate() {
        if i % 3 == 2 {
            if b != b':' {
                return false;
            }
        } else if !b.is_ascii_hexdigit() {
            return false;
        }
    }
    true
}
