/// Paper size for the generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    /// 210mm x 297mm.
    #[default]
    A4,
    /// 215.9mm x 279.4mm.
    Letter,
}

impl PageSize {
    /// Width and height in millimetres.
    pub fn dimensions_mm(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (210.0, 297.0),
            PageSize::Letter => (215.9, 279.4),
        }
    }

    /// Name understood by wkhtmltopdf's `--page-size` option.
    pub fn name(&self) -> &'static str {
        match self {
            PageSize::A4 => "A4",
            PageSize::Letter => "Letter",
        }
    }
}

/// Per-side page margins in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub const fn zero() -> Self {
        Self {
            top: 0.0,
            right: 0.0,
            bottom: 0.0,
            left: 0.0,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::zero()
    }
}

/// Fixed option set shared by every rendering backend.
///
/// The defaults match the report templates: A4 paper with no margins (the
/// template draws its own frame), print-media CSS, and local file access
/// for linked assets. Text encoding is always UTF-8.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSettings {
    pub size: PageSize,
    pub margins: Margins,
    pub print_media: bool,
    pub local_file_access: bool,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            size: PageSize::A4,
            margins: Margins::zero(),
            print_media: true,
            local_file_access: true,
        }
    }
}
