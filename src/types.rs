//! Core data types for the sprite pipeline.
//!
//! An [`ImageDescriptor`] comes out of discovery, the planner turns a slice
//! of them into a [`Layout`] of [`PlacedIcon`]s, and the compositor and both
//! emitters consume that one layout so their geometry can never diverge.

use std::path::{Path, PathBuf};

/// Metadata for one source icon image.
///
/// Produced once by discovery and immutable for the rest of the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDescriptor {
    /// Filename with extension (e.g. `save.png`).
    pub name: String,
    /// Pixel width, non-zero.
    pub width: u32,
    /// Pixel height, non-zero.
    pub height: u32,
    /// Directory containing the file.
    pub source: PathBuf,
}

impl ImageDescriptor {
    /// Full path to the image file.
    pub fn path(&self) -> PathBuf {
        self.source.join(&self.name)
    }

    /// CSS class for this icon: the filename without its extension,
    /// prefixed with `icon-`.
    pub fn css_class(&self) -> String {
        let stem = match self.name.rfind('.') {
            Some(idx) => &self.name[..idx],
            None => self.name.as_str(),
        };
        format!("icon-{}", stem)
    }
}

/// Column/row counts for a sprite grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    pub columns: usize,
    pub rows: usize,
}

impl GridShape {
    /// Derive the grid shape for `n` icons.
    ///
    /// `columns = ceil(sqrt(n))` and `rows = ceil(n / columns)`, so the
    /// last row may be partially filled. `n == 0` yields a `0x0` shape;
    /// callers must not divide by its counts.
    pub fn for_count(n: usize) -> Self {
        if n == 0 {
            return Self {
                columns: 0,
                rows: 0,
            };
        }
        let sqrt = (n as f64).sqrt();
        let floor = sqrt.floor() as usize;
        let columns = if floor * floor == n { floor } else { floor + 1 };
        let rows = n.div_ceil(columns);
        Self { columns, rows }
    }
}

/// One icon with its grid cell and pixel offset inside the final sprite.
///
/// Offsets are accumulated from each icon's own dimensions, which assumes
/// uniform icon sizes within a row and column. Heterogeneous sizes produce
/// offsets that do not line up with the composed sprite; that is a
/// documented constraint, not a supported input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedIcon {
    pub descriptor: ImageDescriptor,
    pub row: usize,
    pub col: usize,
    /// Pixel distance from the sprite's left edge to this icon's left edge.
    pub offset_x: u32,
    /// Pixel distance from the sprite's top edge to this icon's top edge.
    pub offset_y: u32,
    pub css_class: String,
}

/// The planner's output: grid shape plus one placement per input icon,
/// input order preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub shape: GridShape,
    pub icons: Vec<PlacedIcon>,
}

impl Layout {
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Iterate the icons of row `row` in column order.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &PlacedIcon> {
        self.icons.iter().filter(move |icon| icon.row == row)
    }
}

/// A transient horizontally-concatenated strip for one grid row.
///
/// Exists only between row and column composition; deleted after the final
/// sprite is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowImage {
    pub index: usize,
    pub path: PathBuf,
}

/// Filename for the intermediate strip of row `index`, unique per row so
/// concurrent row jobs never collide.
pub fn row_image_name(index: usize) -> String {
    format!("_row-{}.png", index)
}

/// Path for the intermediate strip of row `index`, placed beside the
/// sprite target.
pub fn row_image_path(work_dir: &Path, index: usize) -> PathBuf {
    work_dir.join(row_image_name(index))
}
