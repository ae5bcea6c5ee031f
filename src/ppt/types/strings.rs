//! Nominal string kinds.
//!
//! All of them are stored as UTF-16LE in the stream and differ only in which
//! characters they admit. Keeping them as distinct types stops a file path
//! from being passed where slide text is expected, and vice versa.

use crate::common::error::{PptError, Result};
use crate::ppt::records::RecordReader;
use encoding_rs::UTF_16LE;
use std::borrow::Cow;
use std::fmt;

/// Read `byte_count` bytes of UTF-16LE. Unpaired surrogates are corrupt input.
fn read_utf16(reader: &mut RecordReader<'_>, byte_count: usize) -> Result<String> {
    let offset = reader.position();
    let bytes = read_utf16_bytes(reader, byte_count)?;
    decode_utf16(bytes, offset)
}

fn read_utf16_bytes<'a>(reader: &mut RecordReader<'a>, byte_count: usize) -> Result<&'a [u8]> {
    if byte_count % 2 != 0 {
        return Err(PptError::corrupted(
            reader.position(),
            format!("UTF-16 string with odd byte count {byte_count}"),
        ));
    }
    reader.read_bytes(byte_count)
}

fn decode_utf16(bytes: &[u8], offset: usize) -> Result<String> {
    UTF_16LE
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(Cow::into_owned)
        .ok_or_else(|| PptError::corrupted(offset, "malformed UTF-16 string"))
}

fn is_c0_control(c: char) -> bool {
    c < '\u{20}'
}

fn check_printable(text: &str) -> std::result::Result<(), String> {
    match text.chars().find(|&c| is_c0_control(c)) {
        Some(c) => Err(format!("control character U+{:04X}", c as u32)),
        None => Ok(()),
    }
}

/// A string kind with its own admissible character set.
pub trait StringKind: Sized + AsRef<str> {
    /// Name used in error messages
    const NAME: &'static str;

    /// Describe why `text` is not admissible, if it is not.
    fn check(text: &str) -> std::result::Result<(), String>;

    /// Wrap text that already passed [`check`](Self::check).
    fn from_checked(text: String) -> Self;

    /// Validate `text`; `offset` is where it was read from.
    fn validated(text: String, offset: usize) -> Result<Self> {
        Self::check(&text)
            .map_err(|reason| PptError::corrupted(offset, format!("{}: {reason}", Self::NAME)))?;
        Ok(Self::from_checked(text))
    }

    /// Decode exactly `byte_count` bytes of UTF-16LE.
    fn decode(reader: &mut RecordReader<'_>, byte_count: usize) -> Result<Self> {
        let offset = reader.position();
        let text = read_utf16(reader, byte_count)?;
        Self::validated(text, offset)
    }

    /// Decode a fixed `byte_count` buffer holding a NUL-terminated string.
    ///
    /// The whole buffer is consumed; everything after the first NUL is ignored.
    fn decode_terminated(reader: &mut RecordReader<'_>, byte_count: usize) -> Result<Self> {
        let offset = reader.position();
        let bytes = read_utf16_bytes(reader, byte_count)?;
        let end = bytes
            .chunks_exact(2)
            .position(|unit| unit == [0, 0])
            .map_or(bytes.len(), |units| units * 2);
        let text = decode_utf16(&bytes[..end], offset)?;
        Self::validated(text, offset)
    }
}

macro_rules! string_kind {
    ($(#[$meta:meta])* $name:ident, $check:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            #[inline]
            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl StringKind for $name {
            const NAME: &'static str = stringify!($name);

            fn check(text: &str) -> std::result::Result<(), String> {
                let check: fn(&str) -> std::result::Result<(), String> = $check;
                check(text)
            }

            fn from_checked(text: String) -> Self {
                Self(text)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

string_kind!(
    /// Unicode text without any C0 control character.
    PrintableString,
    check_printable
);

string_kind!(
    /// Slide text. Besides printable characters it admits tab, line feed,
    /// carriage return and vertical tab.
    ///
    /// Vertical tab is not listed as admissible for text atoms, but real files
    /// use it for soft line breaks, so it is accepted.
    TextString,
    |text| match text
        .chars()
        .find(|&c| is_c0_control(c) && !matches!(c, '\t' | '\n' | '\u{0B}' | '\r'))
    {
        Some(c) => Err(format!("control character U+{:04X}", c as u32)),
        None => Ok(()),
    }
);

string_kind!(
    /// Printable path that starts with `\\`.
    UncPath,
    |text| {
        check_printable(text)?;
        if text.starts_with("\\\\") {
            Ok(())
        } else {
            Err("path does not start with \\\\".to_string())
        }
    }
);

string_kind!(
    /// Printable URL or file path.
    UrlOrPath,
    check_printable
);

string_kind!(
    /// Printable host name without path separators.
    MachineName,
    |text| {
        check_printable(text)?;
        if text.contains(['\\', '/']) {
            Err("path separator in machine name".to_string())
        } else {
            Ok(())
        }
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ppt::records::test_support::utf16;

    fn decode<K: StringKind>(text: &str) -> Result<K> {
        let bytes = utf16(text);
        let mut reader = RecordReader::new(&bytes);
        K::decode(&mut reader, bytes.len())
    }

    #[test]
    fn test_printable() {
        assert_eq!(decode::<PrintableString>("Arial").unwrap(), "Arial");
        assert!(decode::<PrintableString>("a\tb").is_err());
    }

    #[test]
    fn test_text_admits_line_controls() {
        let text = decode::<TextString>("one\rtwo\u{0B}three\tfour\n").unwrap();
        assert_eq!(text.as_str(), "one\rtwo\u{0B}three\tfour\n");
        let err = decode::<TextString>("bell\u{07}").unwrap_err();
        assert!(err.reason().contains("U+0007"));
    }

    #[test]
    fn test_paths_and_machines() {
        assert!(decode::<UncPath>("\\\\server\\share").is_ok());
        assert!(decode::<UncPath>("C:\\share").is_err());
        assert!(decode::<UrlOrPath>("https://example.com/a b").is_ok());
        assert!(decode::<MachineName>("workstation-7").is_ok());
        assert!(decode::<MachineName>("host/path").is_err());
    }

    #[test]
    fn test_odd_byte_count_and_surrogates() {
        let bytes = [0x41, 0x00, 0x42];
        let mut reader = RecordReader::new(&bytes);
        assert!(PrintableString::decode(&mut reader, 3).is_err());

        // Lone high surrogate.
        let bytes = [0x00, 0xD8];
        let mut reader = RecordReader::new(&bytes);
        assert!(PrintableString::decode(&mut reader, 2).is_err());
    }

    #[test]
    fn test_terminated_buffer() {
        let mut bytes = utf16("Tahoma");
        bytes.resize(64, 0);
        let mut reader = RecordReader::new(&bytes);
        let name = PrintableString::decode_terminated(&mut reader, 64).unwrap();
        assert_eq!(name, "Tahoma");
        assert_eq!(reader.position(), 64);
    }
}
