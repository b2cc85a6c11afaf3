// JSON line output
// Author: kelexine (https://github.com/kelexine)

use serde::Serialize;
use serde_json::ser::Formatter;
use std::io::{self, Write};

/// Single-line formatter using `", "` and `": "` separators with every
/// non-ASCII character escaped as `\uXXXX`, the layout most scripting-language
/// JSON encoders produce by default.
#[derive(Debug, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut copied = 0;
        for (index, c) in fragment.char_indices() {
            if c.is_ascii() {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[copied..index])?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            copied = index + c.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[copied..])
    }
}

/// Serialize `value` as one JSON line, without the trailing newline.
pub fn to_json_line<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut ser)?;
    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write `line` plus a newline to `writer` and flush it.
pub fn write_line<W: Write>(mut writer: W, line: &[u8]) -> io::Result<()> {
    writer.write_all(line)?;
    writer.write_all(b"\n")?;
    writer.flush()
}

/// Print `value` as one JSON line on stdout.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let line = to_json_line(value)?;
    write_line(io::stdout().lock(), line.as_bytes())?;
    Ok(())
}
