//! Read one line from a text source and parse it as an integer.

use std::io::{self, BufRead};

use tracing::debug;

/// Read a single line from `reader` and parse it as a base-10 `i32`.
///
/// A line ends at `\n`, `\r\n`, or a lone `\r`. Returns `Ok(None)` when the
/// line is not a valid integer (including non-UTF-8 bytes, empty input and
/// end of input). Only read errors propagate. `reader` is consumed and
/// dropped before returning on every path.
pub fn read_number<R: BufRead>(mut reader: R) -> io::Result<Option<i32>> {
    let mut buf = Vec::new();
    let read = reader.read_until(b'\n', &mut buf);
    drop(reader);
    read?;

    let end = buf
        .iter()
        .position(|&b| b == b'\n' || b == b'\r')
        .unwrap_or(buf.len());
    let line = match std::str::from_utf8(&buf[..end]) {
        Ok(line) => line,
        Err(err) => {
            debug!(%err, "line is not an integer");
            return Ok(None);
        }
    };
    match line.parse::<i32>() {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            debug!(line, %err, "line is not an integer");
            Ok(None)
        }
    }
}
