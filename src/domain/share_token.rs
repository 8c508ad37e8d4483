//! Share token codec for "my flags" links.
//!
//! Layout before encoding: `<red ids>|<green ids>`, each side a comma-joined
//! list of decimal flag numbers (`"1,3|2"`). The text is then base64-encoded
//! with the URL-safe alphabet and no padding so it fits in a path segment.
//! Decoding also accepts the standard alphabet and padded input, which is what
//! older links were produced with.

use crate::domain::entities::FlagKind;
use crate::domain::errors::DomainError;
use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD};
use std::collections::BTreeSet;

const SEPARATOR: char = '|';
const ID_DELIMITER: &str = ",";

/// Selected flag numbers, one set per catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagSelection {
    pub red: BTreeSet<u32>,
    pub green: BTreeSet<u32>,
}

impl FlagSelection {
    pub fn new(red: BTreeSet<u32>, green: BTreeSet<u32>) -> Self {
        Self { red, green }
    }

    pub fn ids(&self, kind: FlagKind) -> &BTreeSet<u32> {
        match kind {
            FlagKind::Red => &self.red,
            FlagKind::Green => &self.green,
        }
    }

    fn ids_mut(&mut self, kind: FlagKind) -> &mut BTreeSet<u32> {
        match kind {
            FlagKind::Red => &mut self.red,
            FlagKind::Green => &mut self.green,
        }
    }

    /// Flips membership of `n`. Returns true when the flag is now selected.
    pub fn toggle(&mut self, kind: FlagKind, n: u32) -> bool {
        let ids = self.ids_mut(kind);
        if ids.remove(&n) {
            false
        } else {
            ids.insert(n);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.red.len() + self.green.len()
    }

    pub fn is_empty(&self) -> bool {
        self.red.is_empty() && self.green.is_empty()
    }

    pub fn clear(&mut self) {
        self.red.clear();
        self.green.clear();
    }
}

/// Encodes both id sets into a URL-safe token.
pub fn encode(red: &BTreeSet<u32>, green: &BTreeSet<u32>) -> String {
    let plain = format!("{}{}{}", join_ids(red), SEPARATOR, join_ids(green));
    URL_SAFE_NO_PAD.encode(plain.as_bytes())
}

/// Reverses [`encode`]. Does not consult any catalog: unknown ids come back
/// as-is and are filtered by the caller.
pub fn decode(token: &str) -> Result<FlagSelection, DomainError> {
    let token = token.trim();
    let bytes = [URL_SAFE_NO_PAD, URL_SAFE, STANDARD, STANDARD_NO_PAD]
        .iter()
        .find_map(|engine| engine.decode(token).ok())
        .ok_or_else(|| DomainError::InvalidToken("not base64".to_string()))?;
    let plain = String::from_utf8(bytes)
        .map_err(|_| DomainError::InvalidToken("not UTF-8".to_string()))?;

    let mut parts = plain.split(SEPARATOR);
    let (Some(red), Some(green), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(DomainError::InvalidToken(format!(
            "expected exactly one '{}' separator",
            SEPARATOR
        )));
    };

    Ok(FlagSelection {
        red: parse_ids(red)?,
        green: parse_ids(green)?,
    })
}

fn join_ids(ids: &BTreeSet<u32>) -> String {
    ids.iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(ID_DELIMITER)
}

fn parse_ids(segment: &str) -> Result<BTreeSet<u32>, DomainError> {
    segment
        .split(ID_DELIMITER)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u32>()
                .map_err(|_| DomainError::InvalidToken(format!("bad id fragment {:?}", s)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[u32]) -> BTreeSet<u32> {
        ids.iter().copied().collect()
    }

    fn raw(plain: &str) -> String {
        STANDARD.encode(plain)
    }

    #[test]
    fn test_encode_decode_example() {
        let token = encode(&set(&[1, 3]), &set(&[2]));
        let decoded = decode(&token).unwrap();
        assert_eq!(decoded.red, set(&[1, 3]));
        assert_eq!(decoded.green, set(&[2]));
    }

    #[test]
    fn test_round_trip_varied_sets() {
        let cases: Vec<(Vec<u32>, Vec<u32>)> = vec![
            (vec![], vec![]),
            (vec![7], vec![]),
            (vec![], vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]),
            (vec![0, u32::MAX], vec![42]),
        ];
        for (r, g) in cases {
            let (r, g) = (set(&r), set(&g));
            let decoded = decode(&encode(&r, &g)).unwrap();
            assert_eq!(decoded, FlagSelection::new(r, g));
        }
    }

    #[test]
    fn test_token_is_path_safe() {
        let many: BTreeSet<u32> = (0..200).collect();
        let token = encode(&many, &many);
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn test_decode_accepts_standard_padded_tokens() {
        let decoded = decode(&raw("1,3|2")).unwrap();
        assert_eq!(decoded.red, set(&[1, 3]));
        assert_eq!(decoded.green, set(&[2]));
    }

    #[test]
    fn test_decode_skips_empty_fragments() {
        let decoded = decode(&raw(",1,,2,|")).unwrap();
        assert_eq!(decoded.red, set(&[1, 2]));
        assert!(decoded.green.is_empty());
    }

    #[test]
    fn test_decode_rejects_missing_separator() {
        let err = decode(&raw("1,2,3")).unwrap_err();
        assert!(matches!(err, DomainError::InvalidToken(_)));
    }

    #[test]
    fn test_decode_rejects_extra_separator() {
        let err = decode(&raw("1|2|3")).unwrap_err();
        assert!(matches!(err, DomainError::InvalidToken(_)));
    }

    #[test]
    fn test_decode_rejects_non_numeric_fragment() {
        let err = decode(&raw("1,abc|2")).unwrap_err();
        assert!(matches!(err, DomainError::InvalidToken(_)));
        let err = decode(&raw("1|-2")).unwrap_err();
        assert!(matches!(err, DomainError::InvalidToken(_)));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            decode("!!not*base64!!").unwrap_err(),
            DomainError::InvalidToken(_)
        ));
        // Valid base64 of bytes that are not UTF-8.
        assert!(matches!(
            decode(&STANDARD.encode([0xff, 0xfe, 0x7c])).unwrap_err(),
            DomainError::InvalidToken(_)
        ));
    }

    #[test]
    fn test_toggle_selection() {
        let mut sel = FlagSelection::default();
        assert!(sel.toggle(FlagKind::Red, 3));
        assert!(sel.toggle(FlagKind::Green, 3));
        assert_eq!(sel.len(), 2);
        assert!(!sel.toggle(FlagKind::Red, 3));
        assert_eq!(sel.ids(FlagKind::Red).len(), 0);
        assert_eq!(sel.ids(FlagKind::Green), &set(&[3]));
        sel.clear();
        assert!(sel.is_empty());
    }
}
