//! Image kinds known to a project.
//!
//! Callers historically identify image kinds by free-form strings (`"Binary"`, `"Gray"`, ...).
//! [`ImageKind`] is the closed set of recognised kinds; string-keyed lookups on
//! [`ProjectConfiguration`](crate::ProjectConfiguration) parse into it first.

use crate::constants::{BINARY_IMAGE_EXT, GRAY_IMAGE_EXT, IMAGE_EXT};
use crate::{ProjectError, ProjectResult};
use std::fmt;
use std::str::FromStr;

/// A recognised image kind.
///
/// Names are matched exactly and case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageKind {
    Original,
    Binary,
    Gray,
    Despeckled,
}

impl ImageKind {
    /// Every kind, in layout order.
    pub const ALL: [ImageKind; 4] = [
        ImageKind::Original,
        ImageKind::Binary,
        ImageKind::Gray,
        ImageKind::Despeckled,
    ];

    /// Looks up a kind by its exact name, without allocating on a miss.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Original" => Some(Self::Original),
            "Binary" => Some(Self::Binary),
            "Gray" => Some(Self::Gray),
            "Despeckled" => Some(Self::Despeckled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Original => "Original",
            Self::Binary => "Binary",
            Self::Gray => "Gray",
            Self::Despeckled => "Despeckled",
        }
    }

    /// File extension used for images of this kind.
    ///
    /// Only binary and gray images carry a dedicated extension; originals and
    /// despeckled images use the default.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Binary => BINARY_IMAGE_EXT,
            Self::Gray => GRAY_IMAGE_EXT,
            Self::Original | Self::Despeckled => IMAGE_EXT,
        }
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageKind {
    type Err = ProjectError;

    fn from_str(s: &str) -> ProjectResult<Self> {
        Self::from_name(s).ok_or_else(|| ProjectError::UnknownImageKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_display() {
        for kind in ImageKind::ALL {
            assert_eq!(kind.to_string().parse::<ImageKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(matches!(
            "binary".parse::<ImageKind>(),
            Err(ProjectError::UnknownImageKind(name)) if name == "binary"
        ));
        assert!("GRAY".parse::<ImageKind>().is_err());
    }

    #[test]
    fn test_parse_rejects_empty_and_unknown() {
        assert!("".parse::<ImageKind>().is_err());
        assert!("Cleaned".parse::<ImageKind>().is_err());
        assert_eq!(ImageKind::from_name("Cleaned"), None);
    }

    #[test]
    fn test_extensions() {
        assert_eq!(ImageKind::Binary.extension(), ".bin.png");
        assert_eq!(ImageKind::Gray.extension(), ".nrm.png");
        assert_eq!(ImageKind::Original.extension(), ".png");
        assert_eq!(ImageKind::Despeckled.extension(), ".png");
    }
}
