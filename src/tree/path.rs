//! Path canonicalization and platform-neutral relative paths

use std::borrow::Cow;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

/// Separator used in every relative path key, on every platform
pub const SEPARATOR: &str = "/";

/// Canonicalize a comparison root.
///
/// Resolves symlinks, `..` and `.` so that walked paths come back absolute.
/// Uses dunce so Windows roots do not pick up the `\\?\` prefix.
pub fn canonicalize_root(path: &Path) -> std::io::Result<PathBuf> {
    dunce::canonicalize(path)
}

/// Compute the key under which `path` is stored in a mapping for `root`.
///
/// This is [`raw_relative_path`] normalized to NFC, so the same logical file
/// produces the same key on filesystems that store decomposed names.
/// Returns `None` when `path` is not beneath `root` or equals it.
pub fn relative_path(path: &Path, root: &Path) -> Option<String> {
    raw_relative_path(path, root).map(|raw| normalize_key(&raw))
}

/// Relative path of `path` beneath `root`, joined with `/`, without Unicode
/// normalization.
///
/// Name bytes that are not valid UTF-8 are written as `\xNN`, so two names
/// that differ only in such bytes keep distinct keys.
pub fn raw_relative_path(path: &Path, root: &Path) -> Option<String> {
    let stripped = path.strip_prefix(root).ok()?;

    let mut parts = Vec::new();
    for component in stripped.components() {
        match component {
            Component::Normal(name) => parts.push(encode_name(name)),
            Component::CurDir => {}
            _ => return None,
        }
    }

    if parts.is_empty() {
        return None;
    }

    Some(parts.join(SEPARATOR))
}

/// NFC form of a relative key
pub fn normalize_key(raw: &str) -> String {
    raw.nfc().collect()
}

fn encode_name(name: &OsStr) -> Cow<'_, str> {
    match name.to_str() {
        Some(name) => Cow::Borrowed(name),
        None => Cow::Owned(escape_invalid_utf8(name.as_encoded_bytes())),
    }
}

fn escape_invalid_utf8(mut bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 8);
    loop {
        match std::str::from_utf8(bytes) {
            Ok(valid) => {
                out.push_str(valid);
                return out;
            }
            Err(e) => {
                let (valid, rest) = bytes.split_at(e.valid_up_to());
                out.push_str(std::str::from_utf8(valid).unwrap_or_default());
                let invalid = e.error_len().unwrap_or(rest.len());
                for byte in &rest[..invalid] {
                    out.push_str(&format!("\\x{:02X}", byte));
                }
                bytes = &rest[invalid..];
            }
        }
    }
}
