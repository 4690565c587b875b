/// A key pressed in the display window, as an 8-bit key code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Key(pub u8);

impl Key {
    /// Maps a raw key code to a key; negative codes mean no key was pressed.
    pub fn from_code(code: i32) -> Option<Key> {
        if code < 0 {
            None
        } else {
            Some(Key((code & 0xFF) as u8))
        }
    }

    pub fn is_quit(self) -> bool {
        matches!(self.0, b'q' | b'Q')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::lower(b'q', true)]
    #[case::upper(b'Q', true)]
    #[case::other_letter(b'w', false)]
    #[case::escape(27, false)]
    fn test_is_quit(#[case] code: u8, #[case] expected: bool) {
        assert_eq!(Key(code).is_quit(), expected);
    }

    #[test]
    fn test_from_code_negative_is_none() {
        assert_eq!(Key::from_code(-1), None);
    }

    #[test]
    fn test_from_code_masks_high_bits() {
        // Some backends report modifier state above the low byte
        assert_eq!(Key::from_code(0x10_0071), Some(Key(b'q')));
    }
}
