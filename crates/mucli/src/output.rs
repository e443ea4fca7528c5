//! Printing of API response bodies.

use std::io::{self, Write};

/// Writes a response body: indented when it is JSON, verbatim otherwise.
///
/// Object keys keep the order the server sent them in.
pub fn write_body(out: &mut dyn Write, body: &[u8]) -> io::Result<()> {
    match serde_json::from_slice::<serde_json::Value>(body) {
        Ok(value) => {
            let pretty = serde_json::to_string_pretty(&value).map_err(io::Error::other)?;
            writeln!(out, "{pretty}")
        }
        Err(_) => {
            out.write_all(body)?;
            if !body.is_empty() && !body.ends_with(b"\n") {
                writeln!(out)?;
            }
            Ok(())
        }
    }
}
