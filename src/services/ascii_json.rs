use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use std::io;

/// Pretty printer with two-space indentation that writes every character
/// outside printable ASCII as a `\uXXXX` escape (surrogate pairs above the
/// BMP). Control characters are already escaped by `serde_json`; DEL is
/// escaped here.
pub struct AsciiPrettyFormatter {
    inner: PrettyFormatter<'static>,
}

impl AsciiPrettyFormatter {
    pub fn new() -> Self {
        Self {
            inner: PrettyFormatter::with_indent(b"  "),
        }
    }
}

impl Default for AsciiPrettyFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for AsciiPrettyFormatter {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (idx, ch) in fragment.char_indices() {
            if ch.is_ascii() && ch != '\x7f' {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..idx])?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = idx + ch.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }
}

/// Serializes `value` as indented, ASCII-only JSON.
pub fn to_ascii_pretty_string<T: ?Sized + Serialize>(value: &T) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, AsciiPrettyFormatter::new());
    value.serialize(&mut ser)?;
    // only ASCII bytes are ever written
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_ascii_is_escaped() {
        let json = to_ascii_pretty_string("Café – naïve").unwrap();
        assert_eq!(json, "\"Caf\\u00e9 \\u2013 na\\u00efve\"");
    }

    #[test]
    fn test_astral_chars_use_surrogate_pairs() {
        let json = to_ascii_pretty_string("smile 😀!").unwrap();
        assert_eq!(json, "\"smile \\ud83d\\ude00!\"");
    }

    #[test]
    fn test_control_chars_keep_short_escapes() {
        let json = to_ascii_pretty_string("a\nb\t\"c\"").unwrap();
        assert_eq!(json, "\"a\\nb\\t\\\"c\\\"\"");
    }

    #[test]
    fn test_delete_char_is_escaped() {
        let json = to_ascii_pretty_string("a\x7fb").unwrap();
        assert_eq!(json, "\"a\\u007fb\"");
    }

    #[test]
    fn test_layout_matches_pretty_printer_for_ascii() {
        let value = serde_json::json!([{ "page": 1, "text": "x", "images": [1, 2] }]);
        assert_eq!(
            to_ascii_pretty_string(&value).unwrap(),
            serde_json::to_string_pretty(&value).unwrap()
        );
    }

    #[test]
    fn test_escaped_output_parses_back() {
        let text = "Ngũgĩ wa Thiong'o — 📖";
        let json = to_ascii_pretty_string(text).unwrap();
        assert!(json.is_ascii());
        assert_eq!(serde_json::from_str::<String>(&json).unwrap(), text);
    }
}
