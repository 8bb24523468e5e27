//! OCR directory names.

/// Top-level OCR directory.
#[derive(Debug, Clone, Copy)]
pub struct OcrDir;

impl OcrDir {
    pub const NAME: &'static str = "OCR";
}

/// Segmented pages, below [`OcrDir`].
#[derive(Debug, Clone, Copy)]
pub struct PagesDir;

impl PagesDir {
    pub const NAME: &'static str = "Pages";
}

/// Recognition models, below [`OcrDir`].
#[derive(Debug, Clone, Copy)]
pub struct ModelsDir;

impl ModelsDir {
    pub const NAME: &'static str = "Models";
}

/// Extracted text lines, below [`OcrDir`].
#[derive(Debug, Clone, Copy)]
pub struct LinesDir;

impl LinesDir {
    pub const NAME: &'static str = "Lines";
}
