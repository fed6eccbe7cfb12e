//! Eddystone-URL compression
//!
//! A URL goes on the wire as one scheme-prefix byte followed by the rest of the
//! URL, where common top-level domains are folded into single expansion bytes.

use super::error::{CodecError, CodecResult};

/// Scheme prefixes, indexed by their wire byte.
///
/// Encoding tries them longest first so `http://www.` wins over `http://`.
const SCHEME_PREFIXES: [&str; 4] = ["http://www.", "https://www.", "http://", "https://"];

/// Expansion codes, indexed by their wire byte.
///
/// The slash-terminated forms come first so a greedy match prefers them.
const EXPANSIONS: [&str; 14] = [
    ".com/", ".org/", ".edu/", ".net/", ".info/", ".biz/", ".gov/", ".com", ".org", ".edu",
    ".net", ".info", ".biz", ".gov",
];

/// First and last printable bytes that stand for themselves
const LITERAL_MIN: u8 = 0x21;
const LITERAL_MAX: u8 = 0x7E;

/// Eddystone-URL codec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UrlCodec;

impl UrlCodec {
    /// Compress `url` into its Eddystone-URL byte form
    pub fn encode(&self, url: &str) -> CodecResult<Vec<u8>> {
        let (scheme, mut rest) = SCHEME_PREFIXES
            .iter()
            .enumerate()
            .filter(|(_, prefix)| url.starts_with(*prefix))
            .max_by_key(|(_, prefix)| prefix.len())
            .map(|(code, prefix)| (code as u8, &url[prefix.len()..]))
            .ok_or_else(|| CodecError::UnsupportedScheme(url.to_string()))?;

        let mut buf = Vec::with_capacity(rest.len() + 1);
        buf.push(scheme);

        'outer: while !rest.is_empty() {
            for (code, expansion) in EXPANSIONS.iter().enumerate() {
                if rest.starts_with(expansion) {
                    buf.push(code as u8);
                    rest = &rest[expansion.len()..];
                    continue 'outer;
                }
            }

            let mut chars = rest.chars();
            // Loop condition guarantees at least one char
            let Some(c) = chars.next() else { break };
            if !c.is_ascii() || !(LITERAL_MIN..=LITERAL_MAX).contains(&(c as u8)) {
                return Err(CodecError::InvalidCharacter(c));
            }
            buf.push(c as u8);
            rest = chars.as_str();
        }

        Ok(buf)
    }

    /// Expand an Eddystone-URL byte form back into a URL
    pub fn decode(&self, data: &[u8]) -> CodecResult<String> {
        let (&scheme, body) = data.split_first().ok_or(CodecError::EmptyUrl)?;
        let prefix = SCHEME_PREFIXES
            .get(scheme as usize)
            .ok_or(CodecError::InvalidScheme(scheme))?;

        let mut url = String::with_capacity(prefix.len() + body.len() * 2);
        url.push_str(prefix);

        for (idx, &byte) in body.iter().enumerate() {
            if let Some(expansion) = EXPANSIONS.get(byte as usize) {
                url.push_str(expansion);
            } else if (LITERAL_MIN..=LITERAL_MAX).contains(&byte) {
                url.push(byte as char);
            } else {
                return Err(CodecError::InvalidByte {
                    byte,
                    offset: idx + 1,
                });
            }
        }

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_default_url() {
        let encoded = UrlCodec.encode("http://google.com").unwrap();
        assert_eq!(encoded, vec![0x02, b'g', b'o', b'o', b'g', b'l', b'e', 0x07]);
    }

    #[test]
    fn test_encode_prefers_longest_scheme() {
        let encoded = UrlCodec.encode("https://www.example.com/").unwrap();
        assert_eq!(encoded[0], 0x01);
        assert_eq!(*encoded.last().unwrap(), 0x00);
        assert_eq!(encoded.len(), 1 + "example".len() + 1);
    }

    #[test]
    fn test_encode_expansion_mid_url() {
        let encoded = UrlCodec.encode("https://example.org/path").unwrap();
        let mut expected = vec![0x03];
        expected.extend_from_slice(b"example");
        expected.push(0x01);
        expected.extend_from_slice(b"path");
        assert_eq!(encoded, expected);
    }

    #[test]
    fn test_encode_rejects_unknown_scheme() {
        assert!(matches!(
            UrlCodec.encode("ftp://example.com"),
            Err(CodecError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn test_encode_rejects_unprintable() {
        assert!(matches!(
            UrlCodec.encode("http://exa mple.com"),
            Err(CodecError::InvalidCharacter(' '))
        ));
        assert!(matches!(
            UrlCodec.encode("http://bücher.de"),
            Err(CodecError::InvalidCharacter('ü'))
        ));
    }

    #[test]
    fn test_decode_errors() {
        assert!(matches!(UrlCodec.decode(&[]), Err(CodecError::EmptyUrl)));
        assert!(matches!(
            UrlCodec.decode(&[0x04, b'a']),
            Err(CodecError::InvalidScheme(0x04))
        ));
        assert!(matches!(
            UrlCodec.decode(&[0x02, b'a', 0x20]),
            Err(CodecError::InvalidByte { byte: 0x20, offset: 2 })
        ));
        assert!(matches!(
            UrlCodec.decode(&[0x02, 0xFF]),
            Err(CodecError::InvalidByte { byte: 0xFF, offset: 1 })
        ));
    }
}
