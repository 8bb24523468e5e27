//! Project path configuration.
//!
//! A [`ProjectConfiguration`] is built once per project session from the project directory and
//! then shared read-only. Every directory slot is computed in the constructor by prefixing the
//! project directory onto the slot's relative template; nothing is recomputed on lookup.
//!
//! Construction never fails and never touches the filesystem. A malformed project directory is
//! stored as given, and the failure surfaces wherever a caller first uses the resulting path.
//! Callers that want eager checks can run
//! [`validate_project_dir`](crate::validation::validate_project_dir) first.

use crate::constants::{BINARY_IMAGE_EXT, CONFIG_EXT, GRAY_IMAGE_EXT, IMAGE_EXT};
use crate::kind::ImageKind;
use crate::layout::ProjectLayout;
use crate::paths::images::{BinaryDir, DespeckledDir, GrayDir, OriginalDir, PreProcDir};
use crate::paths::ocr::{LinesDir, ModelsDir, OcrDir, PagesDir};
use crate::paths::template;
use std::path::MAIN_SEPARATOR_STR;

/// Directory and extension layout of one OCR project.
///
/// Directory paths keep a trailing separator, e.g. `/data/proj/PreProc/Gray/`, so callers can
/// append a file name directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectConfiguration {
    root: Option<String>,
    project_dir: String,
    original_dir: String,
    preproc_dir: String,
    binary_dir: String,
    gray_dir: String,
    despeckled_dir: String,
    ocr_dir: String,
    pages_dir: String,
    models_dir: String,
    lines_dir: String,
}

impl ProjectConfiguration {
    /// Creates the layout for the project rooted at `project_dir`.
    ///
    /// Each directory slot becomes `project_dir + separator + template`. The project directory
    /// slot itself has an empty template and therefore reads `project_dir + separator`.
    ///
    /// The project directory is not inspected: an empty one yields root-anchored paths such as
    /// `/Original/`. Use [`Self::schema_only`] for relative templates.
    pub fn new(project_dir: impl AsRef<str>) -> Self {
        let project_dir = project_dir.as_ref();
        let config = Self::schema_only().prefixed(project_dir);
        tracing::debug!(project_dir, "resolved project layout");
        config
    }

    /// Creates a layout whose directory slots keep their relative templates.
    ///
    /// Useful to inspect the naming schema without a concrete project location.
    pub fn schema_only() -> Self {
        Self {
            root: None,
            project_dir: template(&[]),
            original_dir: template(&[OriginalDir::NAME]),
            preproc_dir: template(&[PreProcDir::NAME]),
            binary_dir: template(&[PreProcDir::NAME, BinaryDir::NAME]),
            gray_dir: template(&[PreProcDir::NAME, GrayDir::NAME]),
            despeckled_dir: template(&[PreProcDir::NAME, DespeckledDir::NAME]),
            ocr_dir: template(&[OcrDir::NAME]),
            pages_dir: template(&[OcrDir::NAME, PagesDir::NAME]),
            models_dir: template(&[OcrDir::NAME, ModelsDir::NAME]),
            lines_dir: template(&[OcrDir::NAME, LinesDir::NAME]),
        }
    }

    /// Creates a layout for an optional project directory.
    pub fn from_root(project_dir: Option<&str>) -> Self {
        match project_dir {
            Some(dir) => Self::new(dir),
            None => Self::schema_only(),
        }
    }

    // Applied exactly once, to the relative templates of a schema-only layout.
    fn prefixed(self, project_dir: &str) -> Self {
        let resolve = |relative: String| format!("{project_dir}{MAIN_SEPARATOR_STR}{relative}");

        Self {
            root: Some(project_dir.to_owned()),
            project_dir: resolve(self.project_dir),
            original_dir: resolve(self.original_dir),
            preproc_dir: resolve(self.preproc_dir),
            binary_dir: resolve(self.binary_dir),
            gray_dir: resolve(self.gray_dir),
            despeckled_dir: resolve(self.despeckled_dir),
            ocr_dir: resolve(self.ocr_dir),
            pages_dir: resolve(self.pages_dir),
            models_dir: resolve(self.models_dir),
            lines_dir: resolve(self.lines_dir),
        }
    }

    /// The project directory exactly as passed to [`Self::new`], if any.
    pub fn root(&self) -> Option<&str> {
        self.root.as_deref()
    }

    pub fn is_schema_only(&self) -> bool {
        self.root.is_none()
    }

    pub fn project_dir(&self) -> &str {
        &self.project_dir
    }

    pub fn original_dir(&self) -> &str {
        &self.original_dir
    }

    pub fn preproc_dir(&self) -> &str {
        &self.preproc_dir
    }

    pub fn binary_dir(&self) -> &str {
        &self.binary_dir
    }

    pub fn gray_dir(&self) -> &str {
        &self.gray_dir
    }

    pub fn despeckled_dir(&self) -> &str {
        &self.despeckled_dir
    }

    pub fn ocr_dir(&self) -> &str {
        &self.ocr_dir
    }

    pub fn pages_dir(&self) -> &str {
        &self.pages_dir
    }

    pub fn models_dir(&self) -> &str {
        &self.models_dir
    }

    pub fn lines_dir(&self) -> &str {
        &self.lines_dir
    }

    pub fn image_ext(&self) -> &'static str {
        IMAGE_EXT
    }

    pub fn binary_image_ext(&self) -> &'static str {
        BINARY_IMAGE_EXT
    }

    pub fn gray_image_ext(&self) -> &'static str {
        GRAY_IMAGE_EXT
    }

    pub fn config_ext(&self) -> &'static str {
        CONFIG_EXT
    }

    /// Returns the file extension for an image kind given by name.
    ///
    /// `"Binary"` and `"Gray"` have dedicated extensions. Every other input, including empty
    /// and unrecognised names, falls back to the default image extension.
    pub fn image_extension(&self, kind: &str) -> &'static str {
        ImageKind::from_name(kind).map_or(IMAGE_EXT, |kind| self.extension_for(kind))
    }

    pub fn extension_for(&self, kind: ImageKind) -> &'static str {
        kind.extension()
    }

    /// Returns the directory for an image kind given by name.
    ///
    /// Unlike [`Self::image_extension`] there is no fallback: any name other than
    /// `"Original"`, `"Binary"`, `"Gray"` or `"Despeckled"` returns `None`.
    pub fn image_directory(&self, kind: &str) -> Option<&str> {
        let Some(kind) = ImageKind::from_name(kind) else {
            tracing::trace!(kind, "no image directory for kind");
            return None;
        };
        Some(self.directory_for(kind))
    }

    /// Path of the image for `page` of the given kind, e.g. `<gray_dir>/0001.nrm.png`.
    pub fn image_path(&self, kind: ImageKind, page: &str) -> String {
        format!("{}{page}{}", self.directory_for(kind), kind.extension())
    }

    pub fn directory_for(&self, kind: ImageKind) -> &str {
        match kind {
            ImageKind::Original => &self.original_dir,
            ImageKind::Binary => &self.binary_dir,
            ImageKind::Gray => &self.gray_dir,
            ImageKind::Despeckled => &self.despeckled_dir,
        }
    }

    /// All directory slots as `(name, path)` pairs, in layout order.
    pub fn directories(&self) -> [(&'static str, &str); 10] {
        [
            ("project_dir", self.project_dir.as_str()),
            ("original", self.original_dir.as_str()),
            ("preprocessing", self.preproc_dir.as_str()),
            ("binary_images", self.binary_dir.as_str()),
            ("gray_images", self.gray_dir.as_str()),
            ("despeckled_images", self.despeckled_dir.as_str()),
            ("ocr", self.ocr_dir.as_str()),
            ("ocr_pages", self.pages_dir.as_str()),
            ("ocr_models", self.models_dir.as_str()),
            ("ocr_lines", self.lines_dir.as_str()),
        ]
    }

    /// All extension slots as `(name, extension)` pairs.
    pub fn extensions(&self) -> [(&'static str, &'static str); 4] {
        [
            ("default_image", IMAGE_EXT),
            ("binary_image", BINARY_IMAGE_EXT),
            ("gray_image", GRAY_IMAGE_EXT),
            ("config", CONFIG_EXT),
        ]
    }

    /// Owned, serializable snapshot of every slot.
    pub fn layout(&self) -> ProjectLayout {
        ProjectLayout::from_config(self)
    }
}

impl Default for ProjectConfiguration {
    fn default() -> Self {
        Self::schema_only()
    }
}
