use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::constants::manifest::SEED_HEX_LEN;

/// SHA-256 digest of a combination's canonical form.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Fingerprint a set of `(dimension, value)` pairs, independent of their order.
    pub fn of_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self::of_canonical(&canonical_form(pairs))
    }

    /// Fingerprint an already canonicalized string.
    pub fn of_canonical(canonical: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(canonical.as_bytes());
        let mut digest = [0u8; 32];
        digest.copy_from_slice(&hasher.finalize());
        Self(digest)
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex rendering (64 chars).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short hex prefix used as a content-derived design seed.
    pub fn short(&self) -> String {
        let mut hex = self.to_hex();
        hex.truncate(SEED_HEX_LEN);
        hex
    }

    /// First eight digest bytes as an integer, used to seed per-combination RNGs.
    pub fn seed_u64(&self) -> u64 {
        let mut head = [0u8; 8];
        head.copy_from_slice(&self.0[..8]);
        u64::from_le_bytes(head)
    }

    /// Parse a 64-char hex rendering.
    pub fn from_hex(raw: &str) -> Option<Self> {
        let bytes = hex::decode(raw).ok()?;
        let digest: [u8; 32] = bytes.try_into().ok()?;
        Some(Self(digest))
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({})", self.short())
    }
}

impl Serialize for Fingerprint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Fingerprint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Fingerprint::from_hex(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid fingerprint '{raw}'")))
    }
}

/// Canonical serialization: keys sorted, rendered as a JSON object using
/// `", "` between entries and `": "` between key and value. Non-ASCII text is
/// written as lowercase `\uXXXX` escapes (UTF-16 surrogate pairs above the BMP).
pub fn canonical_form<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let sorted: BTreeMap<&str, &str> = pairs.into_iter().collect();
    let body = sorted
        .into_iter()
        .map(|(key, value)| format!("{}: {}", json_string(key), json_string(value)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{body}}}")
}

fn json_string(raw: &str) -> String {
    let quoted = serde_json::Value::String(raw.to_string()).to_string();
    if quoted.is_ascii() {
        return quoted;
    }
    let mut escaped = String::with_capacity(quoted.len() + 8);
    let mut units = [0u16; 2];
    for ch in quoted.chars() {
        if ch.is_ascii() {
            escaped.push(ch);
        } else {
            for unit in ch.encode_utf16(&mut units) {
                escaped.push_str(&format!("\\u{unit:04x}"));
            }
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_form_sorts_keys_and_uses_spaced_separators() {
        let canonical = canonical_form([("b", "two"), ("a", "one")]);
        assert_eq!(canonical, r#"{"a": "one", "b": "two"}"#);
    }

    #[test]
    fn canonical_form_escapes_quotes() {
        let canonical = canonical_form([("k", "say \"hi\"")]);
        assert_eq!(canonical, r#"{"k": "say \"hi\""}"#);
    }

    #[test]
    fn fingerprint_ignores_insertion_order() {
        let left = Fingerprint::of_pairs([("density", "airy"), ("color_mode", "both")]);
        let right = Fingerprint::of_pairs([("color_mode", "both"), ("density", "airy")]);
        assert_eq!(left, right);
    }

    #[test]
    fn canonical_form_escapes_non_ascii_like_sorted_json_dumps() {
        let pairs = [("k", "café"), ("ß", "😀")];
        assert_eq!(
            canonical_form(pairs),
            r#"{"k": "caf\u00e9", "\u00df": "\ud83d\ude00"}"#
        );
        assert_eq!(
            Fingerprint::of_pairs(pairs).to_hex(),
            "e8c4d1776acbd64be39ce9c0087a975a447c35029b1be847b908a455582f4b82"
        );
    }

    #[test]
    fn fingerprint_matches_sha256_of_canonical_json() {
        // sha256('{"a": "x"}')
        let fp = Fingerprint::of_pairs([("a", "x")]);
        let expected = {
            let mut hasher = Sha256::new();
            hasher.update(br#"{"a": "x"}"#);
            hex::encode(hasher.finalize())
        };
        assert_eq!(fp.to_hex(), expected);
        assert_eq!(fp.to_hex().len(), 64);
        assert_eq!(fp.short().len(), SEED_HEX_LEN);
        assert!(fp.to_hex().starts_with(&fp.short()));
    }

    #[test]
    fn fingerprint_hex_parses_back() {
        let fp = Fingerprint::of_pairs([("a", "x"), ("b", "y")]);
        assert_eq!(Fingerprint::from_hex(&fp.to_hex()), Some(fp));
        assert_eq!(Fingerprint::from_hex("not-hex"), None);
        assert_eq!(Fingerprint::from_hex("abcd"), None);
    }
}
