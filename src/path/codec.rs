//! Key <-> file name codec
//!
//! Percent-encoding with the `encodeURIComponent` escape set, so every
//! separator, space, `%` and non-ASCII byte is escaped as `%XX`.
//! Two extra rules keep every name a plain visible file:
//! - a leading `.` is escaped (no dotfiles, no `.` / `..`)
//! - the empty key maps to [`EMPTY_KEY_NAME`]
//!
//! Only canonical names decode: `encode_key(decode_file_name(n)?) == n`.
//!
//! ## File System Caveats
//! Names are distinct byte strings, which is only enough on a
//! case-sensitive file system. On case-insensitive ones (default macOS
//! APFS, NTFS) the keys `"A"` and `"a"` land on the same file. `*` is left
//! unescaped and is not a legal file-name character on Windows.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{FolderKvError, Result};

/// Characters left as-is: alphanumerics and `- _ . ! ~ * ' ( )`
const KEY_ESCAPE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// File name reserved for the empty key.
/// A lone `%` is never produced for any other key since `%` is always escaped.
pub const EMPTY_KEY_NAME: &str = "%";

/// Encode a key into a file name
pub fn encode_key(key: &str) -> String {
    if key.is_empty() {
        return EMPTY_KEY_NAME.to_string();
    }

    match key.strip_prefix('.') {
        Some(rest) => format!("%2E{}", utf8_percent_encode(rest, KEY_ESCAPE_SET)),
        None => utf8_percent_encode(key, KEY_ESCAPE_SET).to_string(),
    }
}

/// Recover the key from a bare file name
///
/// Returns `InvalidFileName` for anything [`encode_key`] could not have
/// produced: malformed escapes, non-UTF-8 payloads, unescaped reserved
/// characters, lowercase hex, dotfiles.
pub fn decode_file_name(name: &str) -> Result<String> {
    if name == EMPTY_KEY_NAME {
        return Ok(String::new());
    }

    let key = percent_decode_str(name)
        .decode_utf8()
        .map_err(|_| FolderKvError::InvalidFileName(name.to_string()))?;

    // "%" decodes to itself leniently, so canonical form is the real check
    if encode_key(&key) != name {
        return Err(FolderKvError::InvalidFileName(name.to_string()));
    }

    Ok(key.into_owned())
}
