//! Bump rules: increment one field, cascade-reset the lower-order ones.

use std::fmt;
use std::str::FromStr;

use crate::error::VersionError;
use crate::version::Version;

/// Which version field to increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
    Build,
}

impl FromStr for BumpKind {
    type Err = VersionError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "major" => Ok(BumpKind::Major),
            "minor" => Ok(BumpKind::Minor),
            "patch" => Ok(BumpKind::Patch),
            "build" => Ok(BumpKind::Build),
            other => Err(VersionError::InvalidBumpKind(other.to_string())),
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
            BumpKind::Build => "build",
        };
        write!(f, "{}", name)
    }
}

impl Version {
    /// Compute the next version for the requested bump kind.
    ///
    /// Fields below the bumped one reset: a major or minor bump zeroes
    /// everything beneath it, and any change to major/minor/patch resets the
    /// build counter to 1. Bumping `build` on a version without a build
    /// counter fails with [`VersionError::UnsupportedBump`]; every other bump
    /// preserves the shape of its input. A field already at `u64::MAX` cannot
    /// be bumped further and fails with [`VersionError::Overflow`].
    pub fn bump(self, kind: BumpKind) -> Result<Version, VersionError> {
        let next = match kind {
            BumpKind::Major => Version {
                major: self.incremented(self.major, "major")?,
                minor: 0,
                patch: 0,
                build: self.build.map(|_| 1),
            },
            BumpKind::Minor => Version {
                minor: self.incremented(self.minor, "minor")?,
                patch: 0,
                build: self.build.map(|_| 1),
                ..self
            },
            BumpKind::Patch => Version {
                patch: self.incremented(self.patch, "patch")?,
                build: self.build.map(|_| 1),
                ..self
            },
            BumpKind::Build => match self.build {
                Some(build) => Version {
                    build: Some(self.incremented(build, "build")?),
                    ..self
                },
                None => {
                    return Err(VersionError::UnsupportedBump {
                        kind,
                        version: self.to_string(),
                    });
                }
            },
        };

        Ok(next)
    }

    /// Add one to a field, failing rather than wrapping at `u64::MAX`.
    fn incremented(&self, value: u64, field: &'static str) -> Result<u64, VersionError> {
        value.checked_add(1).ok_or_else(|| VersionError::Overflow {
            field,
            version: self.to_string(),
        })
    }
}
