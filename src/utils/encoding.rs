//! Character encoding utilities
//!
//! City records store their strings in ISO-8859-1. Results always carry UTF-8.

use crate::database::Charset;
use encoding_rs::UTF_8;

/// Convert ISO-8859-1 encoded bytes to a UTF-8 string
pub fn latin1_to_utf8(data: &[u8]) -> String {
    // Every byte maps to the code point of the same value, so this cannot fail
    encoding_rs::mem::decode_latin1(data).into_owned()
}

/// Decode a record string according to the charset the database was built with
pub fn decode(data: &[u8], charset: Charset) -> String {
    match charset {
        Charset::Iso8859_1 => latin1_to_utf8(data),
        Charset::Utf8 => {
            let (cow, had_errors) = UTF_8.decode_without_bom_handling(data);
            if had_errors {
                log::debug!("UTF-8 decoding had errors for bytes: {:?}", data);
            }
            cow.into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin1_to_utf8() {
        // "Zürich" with ü as 0xFC
        let bytes = [0x5A, 0xFC, 0x72, 0x69, 0x63, 0x68];
        assert_eq!(latin1_to_utf8(&bytes), "Zürich");
        assert_eq!(latin1_to_utf8(b"Mountain View"), "Mountain View");
    }

    #[test]
    fn test_decode_by_charset() {
        let utf8 = "São Paulo".as_bytes();
        assert_eq!(decode(utf8, Charset::Utf8), "São Paulo");
        // Read as latin1 the two UTF-8 bytes of ã become two characters
        assert_eq!(decode(utf8, Charset::Iso8859_1).chars().count(), 10);
        assert_eq!(decode(&[0xE3], Charset::Iso8859_1), "ã");
        assert_eq!(decode(&[0xE3], Charset::Utf8), "\u{FFFD}");
    }
}
