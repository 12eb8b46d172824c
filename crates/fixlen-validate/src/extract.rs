//! Field extraction by byte or character offsets.

use encoding_rs::Encoding;

/// Unit used to measure field widths and offsets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WidthMode {
    /// Offsets count encoded bytes in the session encoding.
    #[default]
    Bytes,
    /// Offsets count Unicode scalar values.
    Chars,
}

enum Units {
    Bytes(Vec<u8>),
    Chars(Vec<char>),
}

/// Slices one line of text at fixed offsets in the active unit.
///
/// In byte mode the line is encoded once up front and slices are decoded
/// back with the same encoding. A slice that splits a multi-byte sequence
/// decodes with U+FFFD replacement instead of failing; the garbled value
/// then fails whatever rules apply to it.
pub struct LineSlicer {
    encoding: &'static Encoding,
    units: Units,
}

impl LineSlicer {
    pub fn new(line: &str, mode: WidthMode, encoding: &'static Encoding) -> Self {
        let units = match mode {
            WidthMode::Bytes => Units::Bytes(encoding.encode(line).0.into_owned()),
            WidthMode::Chars => Units::Chars(line.chars().collect()),
        };
        Self { encoding, units }
    }

    /// Total line length in the active unit.
    pub fn unit_len(&self) -> usize {
        match &self.units {
            Units::Bytes(bytes) => bytes.len(),
            Units::Chars(chars) => chars.len(),
        }
    }

    /// Extract the `[offset, offset + width)` slice, or None when the line
    /// is too short to cover it.
    pub fn extract(&self, offset: usize, width: usize) -> Option<String> {
        let end = offset.checked_add(width)?;
        match &self.units {
            Units::Bytes(bytes) => {
                let slice = bytes.get(offset..end)?;
                let (decoded, _) = self.encoding.decode_without_bom_handling(slice);
                Some(decoded.into_owned())
            }
            Units::Chars(chars) => {
                let slice = chars.get(offset..end)?;
                Some(slice.iter().collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::{SHIFT_JIS, UTF_8};

    #[test]
    fn ascii_slices_are_identical_in_both_modes() {
        for mode in [WidthMode::Bytes, WidthMode::Chars] {
            let slicer = LineSlicer::new("ABCDE", mode, UTF_8);
            assert_eq!(slicer.unit_len(), 5);
            assert_eq!(slicer.extract(1, 3).as_deref(), Some("BCD"));
            assert_eq!(slicer.extract(3, 3), None);
        }
    }

    #[test]
    fn byte_mode_counts_encoded_bytes() {
        // Two 3-byte characters: 6 bytes, 2 chars.
        let slicer = LineSlicer::new("あい", WidthMode::Bytes, UTF_8);
        assert_eq!(slicer.unit_len(), 6);
        assert_eq!(slicer.extract(0, 6).as_deref(), Some("あい"));
        assert_eq!(slicer.extract(0, 3).as_deref(), Some("あ"));
    }

    #[test]
    fn char_mode_counts_scalar_values() {
        let slicer = LineSlicer::new("あい", WidthMode::Chars, UTF_8);
        assert_eq!(slicer.unit_len(), 2);
        assert_eq!(slicer.extract(0, 2).as_deref(), Some("あい"));
        assert_eq!(slicer.extract(0, 6), None);
    }

    #[test]
    fn split_multibyte_decodes_with_replacement() {
        let slicer = LineSlicer::new("あい", WidthMode::Bytes, UTF_8);
        let garbled = slicer.extract(0, 4).expect("slice inside line");
        assert!(garbled.contains('\u{FFFD}'));
    }

    #[test]
    fn byte_mode_uses_session_encoding() {
        // Shift_JIS encodes each kana in 2 bytes instead of UTF-8's 3.
        let slicer = LineSlicer::new("あい", WidthMode::Bytes, SHIFT_JIS);
        assert_eq!(slicer.unit_len(), 4);
        assert_eq!(slicer.extract(2, 2).as_deref(), Some("い"));
    }
}
