//! Track id escaping for URL paths
//!
//! Recognized titles double as track ids, so they reach the track store as a
//! single path segment. Spaces travel as `+`; every other byte outside the
//! unreserved set is percent-encoded, which keeps a literal `+` (`%2B`) and
//! `/` (`%2F`) distinguishable from the separators.

use crate::{Error, Result};

/// Encode a track id as a single URL path segment (`My Song` → `My+Song`)
pub fn encode_path_segment(id: &str) -> String {
    id.split(' ')
        .map(|part| urlencoding::encode(part).into_owned())
        .collect::<Vec<_>>()
        .join("+")
}

/// Decode a raw (still percent-encoded) path segment back into a track id
pub fn decode_path_segment(segment: &str) -> Result<String> {
    let spaced = segment.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|id| id.into_owned())
        .map_err(|e| Error::InvalidInput(format!("track id is not valid UTF-8: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_becomes_plus() {
        assert_eq!(encode_path_segment("My Song"), "My+Song");
        assert_eq!(decode_path_segment("My+Song").unwrap(), "My Song");
    }

    #[test]
    fn test_reserved_characters_are_percent_encoded() {
        assert_eq!(encode_path_segment("AC/DC + Friends"), "AC%2FDC+%2B+Friends");
        assert_eq!(encode_path_segment("What?"), "What%3F");
        assert_eq!(encode_path_segment("100%"), "100%25");
    }

    #[test]
    fn test_decode_reverses_encode() {
        for id in ["My Song", "AC/DC + Friends", "Café del Mar", "  padded  ", "a+b", "plain"] {
            let segment = encode_path_segment(id);
            assert!(!segment.contains(' ') && !segment.contains('/'), "{segment}");
            assert_eq!(decode_path_segment(&segment).unwrap(), id);
        }
    }

    #[test]
    fn test_decode_percent_encoded_space() {
        assert_eq!(decode_path_segment("My%20Song").unwrap(), "My Song");
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        assert!(matches!(decode_path_segment("%FF"), Err(Error::InvalidInput(_))));
    }
}
