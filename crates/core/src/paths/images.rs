//! Image directory names.
//!
//! Original page images live directly under the project directory, and every
//! preprocessing stage gets its own subdirectory below `PreProc/`.

/// Original page images, as imported into the project.
#[derive(Debug, Clone, Copy)]
pub struct OriginalDir;

impl OriginalDir {
    pub const NAME: &'static str = "Original";
}

/// Parent directory of all preprocessing output.
#[derive(Debug, Clone, Copy)]
pub struct PreProcDir;

impl PreProcDir {
    pub const NAME: &'static str = "PreProc";
}

/// Binarized images, below [`PreProcDir`].
#[derive(Debug, Clone, Copy)]
pub struct BinaryDir;

impl BinaryDir {
    pub const NAME: &'static str = "Binary";
}

/// Normalized gray images, below [`PreProcDir`].
#[derive(Debug, Clone, Copy)]
pub struct GrayDir;

impl GrayDir {
    pub const NAME: &'static str = "Gray";
}

/// Despeckled images, below [`PreProcDir`].
#[derive(Debug, Clone, Copy)]
pub struct DespeckledDir;

impl DespeckledDir {
    pub const NAME: &'static str = "Despeckled";
}
