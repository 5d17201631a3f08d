//! Version parsing and formatting.

use std::fmt;
use std::str::FromStr;

use crate::error::VersionError;

/// A release version with an optional build counter.
///
/// Two textual shapes are accepted: `1.2.3` and `1.2.3+4`. The shape is part
/// of the value: a version parsed without a build counter stays without one
/// across bumps, and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub build: Option<u64>,
}

impl Version {
    /// Create a version without a build counter.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            build: None,
        }
    }

    /// Create a version with a build counter.
    pub fn with_build(major: u64, minor: u64, patch: u64, build: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            build: Some(build),
        }
    }

    /// Whether this version carries a build counter.
    pub fn has_build(&self) -> bool {
        self.build.is_some()
    }
}

impl FromStr for Version {
    type Err = VersionError;

    /// Parse `MAJOR.MINOR.PATCH` or `MAJOR.MINOR.PATCH+BUILD`.
    ///
    /// Each field must be a bare base-10 integer: no sign, no whitespace.
    /// The caller is expected to trim surrounding whitespace first.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (core, build) = match text.split_once('+') {
            Some((core, build)) => (core, Some(build)),
            None => (text, None),
        };

        let fields: Vec<&str> = core.split('.').collect();
        let [major, minor, patch] = fields[..] else {
            return Err(format_error(
                text,
                format!(
                    "expected exactly three dot-separated fields, found {}",
                    fields.len()
                ),
            ));
        };

        Ok(Version {
            major: parse_field(text, "major", major)?,
            minor: parse_field(text, "minor", minor)?,
            patch: parse_field(text, "patch", patch)?,
            build: build
                .map(|b| parse_field(text, "build", b))
                .transpose()?,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(build) = self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

/// Parse one numeric field, rejecting anything but plain ASCII digits.
///
/// A stricter check than `u64::from_str`, which tolerates a leading `+`.
fn parse_field(input: &str, name: &str, text: &str) -> Result<u64, VersionError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format_error(
            input,
            format!("{} field '{}' is not a non-negative integer", name, text),
        ));
    }

    text.parse().map_err(|_| {
        format_error(input, format!("{} field '{}' is out of range", name, text))
    })
}

fn format_error(input: &str, reason: String) -> VersionError {
    VersionError::Format {
        input: input.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_without_build() {
        let version: Version = "1.2.3".parse().unwrap();
        assert_eq!(version, Version::new(1, 2, 3));
        assert!(!version.has_build());
    }

    #[test]
    fn test_parse_with_build() {
        let version: Version = "1.2.3+5".parse().unwrap();
        assert_eq!(version, Version::with_build(1, 2, 3, 5));
        assert!(version.has_build());
    }

    #[test]
    fn test_parse_zero_version() {
        let version: Version = "0.0.0".parse().unwrap();
        assert_eq!(version, Version::new(0, 0, 0));
    }

    #[test]
    fn test_display_round_trip() {
        for text in ["0.0.0", "1.2.3", "10.20.30", "1.2.3+1", "4.5.6+99"] {
            let version: Version = text.parse().unwrap();
            assert_eq!(version.to_string(), text);
        }
    }

    #[test]
    fn test_rejects_too_few_fields() {
        assert!(matches!(
            "1.2".parse::<Version>(),
            Err(VersionError::Format { .. })
        ));
    }

    #[test]
    fn test_rejects_too_many_fields() {
        assert!(matches!(
            "1.2.3.4".parse::<Version>(),
            Err(VersionError::Format { .. })
        ));
    }

    #[test]
    fn test_rejects_non_numeric_field() {
        assert!(matches!(
            "1.2.x".parse::<Version>(),
            Err(VersionError::Format { .. })
        ));
    }

    #[test]
    fn test_rejects_empty_build() {
        assert!(matches!(
            "1.2.3+".parse::<Version>(),
            Err(VersionError::Format { .. })
        ));
    }

    #[test]
    fn test_rejects_double_plus() {
        // split on the first '+' leaves '4+5' as the build field
        assert!(matches!(
            "1.2.3+4+5".parse::<Version>(),
            Err(VersionError::Format { .. })
        ));
    }

    #[test]
    fn test_rejects_empty_string() {
        assert!(matches!(
            "".parse::<Version>(),
            Err(VersionError::Format { .. })
        ));
    }

    #[test]
    fn test_rejects_signed_fields() {
        // u64::from_str would accept '+1'; our field parser must not
        assert!("+1.2.3".parse::<Version>().is_err());
        assert!("-1.2.3".parse::<Version>().is_err());
        assert!("1.2.3++1".parse::<Version>().is_err());
    }

    #[test]
    fn test_rejects_interior_whitespace() {
        assert!("1. 2.3".parse::<Version>().is_err());
        assert!("1.2.3 +1".parse::<Version>().is_err());
    }
}
