//! Port code types.

use std::fmt;

/// Maximum length of a port code.
const MAX_LEN: usize = 16;

/// Error returned when parsing an invalid port code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid port code: {reason}")]
pub struct InvalidPortCode {
    reason: &'static str,
}

/// A port identifier, usually a 5-character UN/LOCODE such as `NLRTM`.
///
/// Codes are non-empty, at most 16 ASCII letters or digits, and always
/// stored in uppercase. The planner treats them as opaque: two ports are the
/// same location exactly when their codes are equal.
///
/// # Examples
///
/// ```
/// use sailing_planner::domain::PortCode;
///
/// let rotterdam = PortCode::parse("NLRTM").unwrap();
/// assert_eq!(rotterdam.as_str(), "NLRTM");
///
/// // Strict parsing rejects lowercase
/// assert!(PortCode::parse("nlrtm").is_err());
///
/// // Normalized parsing accepts it
/// assert_eq!(PortCode::parse_normalized(" nlrtm ").unwrap(), rotterdam);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PortCode(String);

impl PortCode {
    /// Parse a port code that is already in canonical (uppercase) form.
    pub fn parse(s: &str) -> Result<Self, InvalidPortCode> {
        if s.is_empty() {
            return Err(InvalidPortCode {
                reason: "must not be empty",
            });
        }

        if s.len() > MAX_LEN {
            return Err(InvalidPortCode {
                reason: "must be at most 16 characters",
            });
        }

        for b in s.bytes() {
            if !(b.is_ascii_uppercase() || b.is_ascii_digit()) {
                return Err(InvalidPortCode {
                    reason: "must be uppercase ASCII letters or digits",
                });
            }
        }

        Ok(PortCode(s.to_string()))
    }

    /// Parse user input: surrounding whitespace is trimmed and letters are
    /// uppercased before validation.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidPortCode> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the port code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PortCode({})", self.0)
    }
}

impl fmt::Display for PortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_codes() {
        assert!(PortCode::parse("NLRTM").is_ok());
        assert!(PortCode::parse("CNSHA").is_ok());
        assert!(PortCode::parse("ESBCN").is_ok());
        assert!(PortCode::parse("A").is_ok());
        assert!(PortCode::parse("PORT1").is_ok());
        assert!(PortCode::parse("UNREACHABLE").is_ok());
    }

    #[test]
    fn reject_lowercase() {
        assert!(PortCode::parse("nlrtm").is_err());
        assert!(PortCode::parse("NLrTM").is_err());
    }

    #[test]
    fn reject_empty_and_too_long() {
        assert!(PortCode::parse("").is_err());
        assert!(PortCode::parse("ABCDEFGHIJKLMNOPQ").is_err());
        assert!(PortCode::parse("ABCDEFGHIJKLMNOP").is_ok());
    }

    #[test]
    fn reject_punctuation_and_spaces() {
        assert!(PortCode::parse("NL RTM").is_err());
        assert!(PortCode::parse("NL-RTM").is_err());
        assert!(PortCode::parse("NLRTÖ").is_err());
    }

    #[test]
    fn parse_normalized_trims_and_uppercases() {
        let code = PortCode::parse_normalized("  esbcn\n").unwrap();
        assert_eq!(code.as_str(), "ESBCN");
        assert!(PortCode::parse_normalized("   ").is_err());
    }

    #[test]
    fn display_and_debug() {
        let code = PortCode::parse("BRSSZ").unwrap();
        assert_eq!(format!("{}", code), "BRSSZ");
        assert_eq!(format!("{:?}", code), "PortCode(BRSSZ)");
    }

    #[test]
    fn ordering_follows_code() {
        let a = PortCode::parse("BRSSZ").unwrap();
        let b = PortCode::parse("CNSHA").unwrap();
        assert!(a < b);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in "[A-Z0-9]{1,16}") {
            let code = PortCode::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.as_str());
        }

        /// Normalized parsing agrees with strict parsing of the uppercased input
        #[test]
        fn normalized_matches_uppercase(s in "[a-zA-Z0-9]{1,16}") {
            let normalized = PortCode::parse_normalized(&s).unwrap();
            prop_assert_eq!(normalized, PortCode::parse(&s.to_ascii_uppercase()).unwrap());
        }

        /// Wrong-length strings are always rejected
        #[test]
        fn too_long_rejected(s in "[A-Z]{17,30}") {
            prop_assert!(PortCode::parse(&s).is_err());
        }
    }
}
