//! # OCR Project Core
//!
//! Directory and file-extension layout of an OCR project.
//!
//! Every project lives under a single project directory with a fixed tree below it:
//! original page images, preprocessing stages, and OCR pages/models/lines. This crate turns a
//! project directory into that tree of paths and exposes the extension conventions for each
//! image kind.
//!
//! **No I/O**: nothing here creates, reads or checks files. Image handling, OCR execution and
//! project file parsing belong to the callers that consume these paths.
//!
//! ```
//! use ocr_project_core::ProjectConfiguration;
//!
//! let config = ProjectConfiguration::new("/data/proj");
//! assert_eq!(config.image_extension("Gray"), ".nrm.png");
//! assert!(config.image_directory("Cleaned").is_none());
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod kind;
pub mod layout;
pub mod paths;
pub mod validation;

pub use config::ProjectConfiguration;
pub use error::{ProjectError, ProjectResult};
pub use kind::ImageKind;
pub use layout::{LayoutEntry, ProjectLayout};
pub use validation::validate_project_dir;
