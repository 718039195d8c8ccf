//! Byte-for-byte content comparison

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::trace;

/// Default read buffer size per file (64 KiB)
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Options for a single content comparison
#[derive(Debug, Clone, Copy)]
pub struct ContentOptions {
    /// Bytes read from each file per step
    pub buffer_size: usize,
    /// Report different without reading when sizes differ
    pub size_short_circuit: bool,
}

impl Default for ContentOptions {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            size_short_circuit: true,
        }
    }
}

/// Whether the two files differ.
///
/// Returns `false` only when both files were read completely and matched
/// exactly, length included. If either file cannot be opened or read the
/// problem goes to `sink` and the pair is reported as different.
pub fn contents_differ(
    path_a: &Path,
    path_b: &Path,
    options: &ContentOptions,
    sink: &dyn DiagnosticSink,
) -> bool {
    match compare_files(path_a, path_b, options) {
        Ok(equal) => {
            trace!(a = %path_a.display(), b = %path_b.display(), equal, "Compared");
            !equal
        }
        Err((path, e)) => {
            sink.warn(Diagnostic::Read {
                path: path.to_path_buf(),
                message: e.to_string(),
            });
            true
        }
    }
}

/// Read both files in lockstep. The error carries the path that failed.
fn compare_files<'a>(
    path_a: &'a Path,
    path_b: &'a Path,
    options: &ContentOptions,
) -> Result<bool, (&'a Path, io::Error)> {
    let mut file_a = File::open(path_a).map_err(|e| (path_a, e))?;
    let mut file_b = File::open(path_b).map_err(|e| (path_b, e))?;

    if options.size_short_circuit {
        let len_a = file_a.metadata().map_err(|e| (path_a, e))?.len();
        let len_b = file_b.metadata().map_err(|e| (path_b, e))?.len();
        if len_a != len_b {
            return Ok(false);
        }
    }

    let buffer_size = options.buffer_size.max(1);
    let mut buf_a = vec![0u8; buffer_size];
    let mut buf_b = vec![0u8; buffer_size];

    loop {
        let read_a = fill(&mut file_a, &mut buf_a).map_err(|e| (path_a, e))?;
        let read_b = fill(&mut file_b, &mut buf_b).map_err(|e| (path_b, e))?;

        if read_a != read_b || buf_a[..read_a] != buf_b[..read_b] {
            return Ok(false);
        }
        if read_a == 0 {
            return Ok(true);
        }
    }
}

/// Read until `buf` is full or the file ends; returns bytes read.
fn fill(file: &mut File, buf: &mut [u8]) -> io::Result<usize> {
    let mut total = 0;
    while total < buf.len() {
        match file.read(&mut buf[total..]) {
            Ok(0) => break,
            Ok(n) => total += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(total)
}
