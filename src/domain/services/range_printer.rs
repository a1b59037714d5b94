//! Line range printer
//!
//! Streams lines from a reader, numbering them from 1, and echoes those in
//! range as `"{n}: {line}"`. Lines end at `\n`, `\r\n` or a lone `\r`, and are
//! handled as raw bytes so the original content and terminators come out
//! exactly as they went in.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use super::lines::read_line_bytes;

use crate::domain::value_objects::LineRange;

/// Which side of the copy failed
#[derive(Error, Debug)]
pub enum StreamError {
    #[error("read failed: {0}")]
    Read(#[source] io::Error),
    #[error("write failed: {0}")]
    Write(#[source] io::Error),
}

/// Copy the lines of `reader` that fall in `range` to `out`.
///
/// Returns the number of lines written. Stops reading once past the end of
/// the range.
pub fn print_range<R, W>(
    reader: &mut R,
    range: LineRange,
    out: &mut W,
) -> Result<usize, StreamError>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    if range.is_empty() {
        return Ok(0);
    }

    let mut buf = Vec::new();
    let mut line_no: i64 = 0;
    let mut printed = 0;

    loop {
        buf.clear();
        let read = read_line_bytes(&mut *reader, &mut buf).map_err(StreamError::Read)?;
        if read == 0 {
            break;
        }
        line_no += 1;

        if range.is_past(line_no) {
            break;
        }
        if range.contains(line_no) {
            write!(out, "{}: ", line_no).map_err(StreamError::Write)?;
            out.write_all(&buf).map_err(StreamError::Write)?;
            printed += 1;
        }
    }

    Ok(printed)
}
