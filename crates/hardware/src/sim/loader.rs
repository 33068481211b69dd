//! Program Image Loader.
//!
//! This module turns a textual program image into the bytes placed in memory. It performs:
//! 1. **Reading:** Loads the image file from disk as UTF-8 text.
//! 2. **Parsing:** One 8-digit binary literal per line; `#` starts a comment; blank and
//!    comment-only lines are skipped and take no address.
//! 3. **Validation:** Malformed lines and images larger than memory are errors, never
//!    skipped or truncated.
//!
//! Loading never touches a `Cpu`: the caller receives the complete image or an
//! error, so a failed load leaves machine state unobserved.

use std::fs;
use std::path::Path;

use crate::common::constants::{COMMENT_CHAR, INSTRUCTION_LINE_WIDTH, MEMORY_SIZE};
use crate::common::error::LoadError;

/// Leading marker some editors write at the start of UTF-8 files.
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Reads and parses a program image file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, or any error from
/// [`parse_program`].
pub fn load_program(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let image = parse_program(&source)?;
    tracing::debug!(path = %path.display(), bytes = image.len(), "program loaded");
    Ok(image)
}

/// Parses program image text into bytes, in address order from 0.
///
/// A leading byte order mark is ignored.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] for the first line that is not an 8-digit
/// binary literal, or [`LoadError::ProgramTooLarge`] if more than 256 bytes
/// are present.
///
/// # Examples
///
/// ```
/// use ls8_core::sim::loader::parse_program;
///
/// let src = "# print 8\n10000010 # LDI R0,8\n00000000\n00001000\n\n00000001\n";
/// assert_eq!(parse_program(src).unwrap(), vec![0b1000_0010, 0, 8, 1]);
/// ```
pub fn parse_program(source: &str) -> Result<Vec<u8>, LoadError> {
    let source = source.strip_prefix(BYTE_ORDER_MARK).unwrap_or(source);
    let mut image = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        let Some(byte) = parse_line(line, idx + 1)? else {
            continue;
        };
        if image.len() == MEMORY_SIZE {
            return Err(LoadError::ProgramTooLarge {
                capacity: MEMORY_SIZE,
            });
        }
        image.push(byte);
    }
    Ok(image)
}

/// Parses one image line. `Ok(None)` for blank or comment-only lines.
fn parse_line(line: &str, line_no: usize) -> Result<Option<u8>, LoadError> {
    let text = line
        .split_once(COMMENT_CHAR)
        .map_or(line, |(code, _)| code)
        .trim();
    if text.is_empty() {
        return Ok(None);
    }

    let well_formed =
        text.len() == INSTRUCTION_LINE_WIDTH && text.bytes().all(|b| b == b'0' || b == b'1');
    let parsed = if well_formed {
        u8::from_str_radix(text, 2).ok()
    } else {
        None
    };

    parsed.map(Some).ok_or_else(|| LoadError::Parse {
        line: line_no,
        text: text.to_owned(),
    })
}
