//! Line splitting with universal line endings
//!
//! `\n`, `\r\n` and a lone `\r` all end a line. Each line is yielded with its
//! terminator attached, so joining the pieces gives back the input exactly.

use std::io::{self, BufRead};

/// Iterator over the lines of a string, terminators included.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
}

/// Split `text` into lines ending in `\n`, `\r\n` or `\r`.
pub fn split_lines(text: &str) -> Lines<'_> {
    Lines { rest: text }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        let bytes = self.rest.as_bytes();
        let end = match bytes.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(i) if bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n') => i + 2,
            Some(i) => i + 1,
            None => bytes.len(),
        };

        let (line, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(line)
    }
}

/// Byte-level twin of [`split_lines`] for readers.
///
/// Appends the next line, terminator included, to `buf` and returns the
/// number of bytes appended. Returns 0 at end of input.
pub fn read_line_bytes<R>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<usize>
where
    R: BufRead + ?Sized,
{
    let start_len = buf.len();

    loop {
        let available = match reader.fill_buf() {
            Ok(available) => available,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if available.is_empty() {
            break;
        }

        // A `\r` already taken ends the line unless `\n` follows it.
        if buf.len() > start_len && buf.last() == Some(&b'\r') {
            if available[0] == b'\n' {
                buf.push(b'\n');
                reader.consume(1);
            }
            break;
        }

        match available.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(i) => {
                let ends_at_lf = available[i] == b'\n';
                buf.extend_from_slice(&available[..=i]);
                reader.consume(i + 1);
                if ends_at_lf {
                    break;
                }
            }
            None => {
                let taken = available.len();
                buf.extend_from_slice(available);
                reader.consume(taken);
            }
        }
    }

    Ok(buf.len() - start_len)
}
