//! On-disk directory names for an OCR project.
//!
//! This module defines the relative layout of a project directory.
//! It contains **no I/O logic** - only typed names and template construction.
//!
//! # Path Structure
//!
//! ```text
//! <project_dir>/
//!     Original/
//!     PreProc/
//!         Binary/
//!         Gray/
//!         Despeckled/
//!     OCR/
//!         Pages/
//!         Models/
//!         Lines/
//! ```

pub mod images;
pub mod ocr;

use std::path::MAIN_SEPARATOR_STR;

/// Builds a relative directory template from its components.
///
/// Every component is followed by the host separator, so `["PreProc", "Binary"]`
/// becomes `PreProc/Binary/` on Unix. An empty slice yields an empty template.
pub fn template(components: &[&str]) -> String {
    components.iter().fold(String::new(), |mut acc, name| {
        acc.push_str(name);
        acc.push_str(MAIN_SEPARATOR_STR);
        acc
    })
}
