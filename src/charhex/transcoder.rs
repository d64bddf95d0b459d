//! Line transcoder
//!
//! Turns every newline-terminated input line into a pair of records:
//!
//! ```text
//! C0000000001: a      b
//! X0000000001: 0x0061 0x0062
//! ```
//!
//! The character record lists each code point left-justified in a six column
//! field, the hex record lists each code point as `0x` followed by at least
//! four uppercase hex digits. Both share the line counter, zero-padded to at
//! least ten digits.
//!
//! A trailing fragment that is not terminated by `\n` is not a line and
//! produces no records.

use crate::charhex::error::TranscodeError;
use log::{debug, warn};
use std::io::{self, BufRead, Write};

/// Minimum display width of the line counter
pub const COUNTER_WIDTH: usize = 10;

/// Minimum width of a character field
pub const CHAR_FIELD_WIDTH: usize = 6;

/// Minimum number of hex digits per code point
pub const HEX_DIGITS: usize = 4;

/// Outcome of a completed transcoding pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    /// Number of input lines turned into record pairs
    pub lines: u64,
}

/// Transcode `reader` to `writer` until the input is exhausted.
///
/// Reading stops at end of input, at an unterminated final fragment, or at
/// the first read error. Only write failures are reported.
pub fn transcode<R, W>(mut reader: R, mut writer: W) -> Result<Summary, TranscodeError>
where
    R: BufRead,
    W: Write,
{
    let mut counter: u64 = 0;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) if buf.last() != Some(&b'\n') => {
                debug!("dropping unterminated fragment of {} bytes", buf.len());
                break;
            }
            Ok(_) => {}
            Err(e) => {
                warn!("stopped reading after line {}: {}", counter, e);
                break;
            }
        }

        counter += 1;
        let line = decode_line(&buf);

        write_char_record(&mut writer, counter, &line)
            .and_then(|_| write_hex_record(&mut writer, counter, &line))
            .map_err(|source| TranscodeError::Write {
                line: counter,
                source,
            })?;
    }

    Ok(Summary { lines: counter })
}

/// Decode raw line bytes, dropping every trailing `\r` and `\n`.
///
/// Every byte of an invalid UTF-8 run becomes its own U+FFFD.
pub fn decode_line(raw: &[u8]) -> String {
    let end = raw
        .iter()
        .rposition(|&b| b != b'\r' && b != b'\n')
        .map_or(0, |i| i + 1);
    let mut rest = &raw[..end];
    let mut line = String::with_capacity(rest.len());

    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                line.push_str(valid);
                return line;
            }
            Err(e) => {
                let (valid, after) = rest.split_at(e.valid_up_to());
                line.push_str(std::str::from_utf8(valid).unwrap_or_default());
                let invalid = e.error_len().unwrap_or(after.len());
                line.extend(std::iter::repeat(char::REPLACEMENT_CHARACTER).take(invalid));
                rest = &after[invalid..];
            }
        }
    }
}

/// Write the `C` record for `line`.
pub fn write_char_record<W: Write + ?Sized>(
    writer: &mut W,
    counter: u64,
    line: &str,
) -> io::Result<()> {
    write!(writer, "C{:0width$}:", counter, width = COUNTER_WIDTH)?;
    for c in line.chars() {
        write!(writer, " {:<width$}", c, width = CHAR_FIELD_WIDTH)?;
    }
    writeln!(writer)
}

/// Write the `X` record for `line`.
pub fn write_hex_record<W: Write + ?Sized>(
    writer: &mut W,
    counter: u64,
    line: &str,
) -> io::Result<()> {
    write!(writer, "X{:0width$}:", counter, width = COUNTER_WIDTH)?;
    for c in line.chars() {
        write!(writer, " 0x{:0width$X}", u32::from(c), width = HEX_DIGITS)?;
    }
    writeln!(writer)
}

/// The `C` record for `line` as a string, including the trailing newline.
pub fn char_record(counter: u64, line: &str) -> String {
    render(|out| write_char_record(out, counter, line))
}

/// The `X` record for `line` as a string, including the trailing newline.
pub fn hex_record(counter: u64, line: &str) -> String {
    render(|out| write_hex_record(out, counter, line))
}

fn render(write: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
    let mut out = Vec::new();
    write(&mut out).expect("writing to a Vec cannot fail");
    String::from_utf8(out).expect("records are built from str")
}
