//! Constants used throughout the OCR project core crate.
//!
//! File extensions are fixed for every project and never depend on the project directory.

/// Default image extension of a project.
pub const IMAGE_EXT: &str = ".png";

/// Extension of binarized images (`.bin` + [`IMAGE_EXT`]).
pub const BINARY_IMAGE_EXT: &str = ".bin.png";

/// Extension of normalized gray images (`.nrm` + [`IMAGE_EXT`]).
pub const GRAY_IMAGE_EXT: &str = ".nrm.png";

/// Extension of project configuration files.
pub const CONFIG_EXT: &str = ".xml";

/// Environment variable holding the project directory when none is given explicitly.
pub const PROJECT_DIR_ENV_VAR: &str = "OCR_PROJECT_DIR";
