//! Canonical text encoding.
//!
//! Stored orders are JSON objects with sorted keys, written with `", "` and
//! `": "` separators and non-ASCII escaped as `\uXXXX`:
//!
//! ```text
//! {"milk": "Soy", "size": "Large", "type": "Cappuccino"}
//! ```
//!
//! This is the layout already present in persisted rows, and migrations
//! pattern-match on it, so two equal orders must encode to identical bytes.
//! Key order comes from the caller passing a `BTreeMap`; this module only
//! fixes the byte layout.

use serde::Serialize;
use serde_json::ser::Formatter;
use std::io;

/// `serde_json` formatter producing the persisted byte layout.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct PersistedFormatter;

impl Formatter for PersistedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if fragment.is_ascii() {
            return writer.write_all(fragment.as_bytes());
        }
        let mut units = [0u16; 2];
        for c in fragment.chars() {
            if c.is_ascii() {
                writer.write_all(&[c as u8])?;
            } else {
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

/// Encode `value` in the persisted layout.
pub(crate) fn to_canonical_bytes<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PersistedFormatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn encode<T: Serialize + ?Sized>(value: &T) -> String {
        String::from_utf8(to_canonical_bytes(value).unwrap()).unwrap()
    }

    #[test]
    fn objects_use_spaced_separators() {
        let map = BTreeMap::from([("type", "Latte"), ("milk", "Soy"), ("size", "Large")]);
        assert_eq!(encode(&map), r#"{"milk": "Soy", "size": "Large", "type": "Latte"}"#);
    }

    #[test]
    fn empty_object_and_arrays() {
        let empty: BTreeMap<String, String> = BTreeMap::new();
        assert_eq!(encode(&empty), "{}");
        assert_eq!(encode(&["a", "b"]), r#"["a", "b"]"#);
    }

    #[test]
    fn non_ascii_is_escaped() {
        let map = BTreeMap::from([("note", "café ☕ 𝄞")]);
        assert_eq!(encode(&map), r#"{"note": "caf\u00e9 \u2615 \ud834\udd1e"}"#);
    }
}
