//! Row/column sprite composition.
//!
//! The sprite is assembled in two stages: each grid row is concatenated
//! horizontally into an intermediate strip, then the strips are concatenated
//! vertically into the final image. Row jobs are independent and run in
//! parallel; collecting their results is the join barrier before the
//! vertical pass. Strips are deleted once the sprite is written.

use std::fs;
use std::path::{Path, PathBuf};

use image::{imageops, RgbaImage};
use rayon::prelude::*;

use crate::error::{Result, SpriteError};
use crate::output::{display_path, plural, Printer};
use crate::types::{row_image_path, Layout, RowImage};

/// The image-concatenation service the pipeline is built on.
///
/// `Sync` because row jobs share one compositor across threads.
pub trait Compositor: Sync {
    /// Concatenate `inputs` left to right into `output`.
    fn concat_horizontal(&self, inputs: &[PathBuf], output: &Path) -> Result<()>;

    /// Concatenate `inputs` top to bottom into `output`.
    fn concat_vertical(&self, inputs: &[PathBuf], output: &Path) -> Result<()>;
}

/// Compositor backed by the `image` crate.
///
/// Inputs are decoded to RGBA, placed edge to edge on a canvas sized to
/// fit them all, and saved in the format implied by the output extension.
pub struct ImageCompositor;

impl ImageCompositor {
    fn load_all(inputs: &[PathBuf]) -> Result<Vec<RgbaImage>> {
        inputs
            .iter()
            .map(|path| {
                image::open(path)
                    .map(|img| img.to_rgba8())
                    .map_err(|e| SpriteError::Io {
                        path: path.clone(),
                        message: format!("Failed to load image: {}", e),
                    })
            })
            .collect()
    }

    fn save(canvas: &RgbaImage, output: &Path) -> Result<()> {
        canvas.save(output).map_err(|e| SpriteError::Io {
            path: output.to_path_buf(),
            message: format!("Failed to write image: {}", e),
        })
    }
}

impl Compositor for ImageCompositor {
    fn concat_horizontal(&self, inputs: &[PathBuf], output: &Path) -> Result<()> {
        let images = Self::load_all(inputs)?;
        let width: u32 = images.iter().map(|img| img.width()).sum();
        let height: u32 = images.iter().map(|img| img.height()).max().unwrap_or(0);

        let mut canvas = RgbaImage::new(width, height);
        let mut x: i64 = 0;
        for img in &images {
            imageops::replace(&mut canvas, img, x, 0);
            x += i64::from(img.width());
        }

        Self::save(&canvas, output)
    }

    fn concat_vertical(&self, inputs: &[PathBuf], output: &Path) -> Result<()> {
        let images = Self::load_all(inputs)?;
        let width: u32 = images.iter().map(|img| img.width()).max().unwrap_or(0);
        let height: u32 = images.iter().map(|img| img.height()).sum();

        let mut canvas = RgbaImage::new(width, height);
        let mut y: i64 = 0;
        for img in &images {
            imageops::replace(&mut canvas, img, 0, y);
            y += i64::from(img.height());
        }

        Self::save(&canvas, output)
    }
}

/// Concatenate one grid row into its intermediate strip.
///
/// The strip path is keyed by `index`, so concurrent row jobs never write
/// to the same file. Any service failure aborts the whole build.
pub fn compose_row<C: Compositor>(
    compositor: &C,
    inputs: &[PathBuf],
    index: usize,
    work_dir: &Path,
) -> Result<RowImage> {
    let path = row_image_path(work_dir, index);

    compositor
        .concat_horizontal(inputs, &path)
        .map_err(|e| SpriteError::Compose {
            stage: format!("row {}", index),
            message: e.to_string(),
        })?;

    Ok(RowImage { index, path })
}

/// Build the final sprite for a layout.
///
/// All rows are composed in parallel; the collect below is the barrier the
/// vertical pass waits on, and it yields the strips in row-index order. On
/// a vertical failure the strips are left on disk for diagnosis; on success
/// every strip is deleted, with deletion failures reported as warnings.
///
/// An empty layout is a no-op.
pub fn build_sprite<C: Compositor>(
    compositor: &C,
    layout: &Layout,
    target: &Path,
    printer: &Printer,
) -> Result<()> {
    if layout.is_empty() {
        return Ok(());
    }

    let work_dir = target.parent().unwrap_or_else(|| Path::new("."));

    let rows: Vec<(usize, Vec<PathBuf>)> = (0..layout.shape.rows)
        .map(|row| {
            let paths = layout.row(row).map(|icon| icon.descriptor.path()).collect();
            (row, paths)
        })
        .collect();

    printer.status(
        "Composing",
        &format!(
            "{} of {} into {}",
            plural(rows.len(), "row", "rows"),
            plural(layout.icons.len(), "icon", "icons"),
            display_path(target)
        ),
    );

    let row_images: Vec<RowImage> = rows
        .par_iter()
        .map(|(index, inputs)| compose_row(compositor, inputs, *index, work_dir))
        .collect::<Result<Vec<_>>>()?;

    let strip_paths: Vec<PathBuf> = row_images.iter().map(|row| row.path.clone()).collect();

    compositor
        .concat_vertical(&strip_paths, target)
        .map_err(|e| SpriteError::Compose {
            stage: "final sprite".to_string(),
            message: e.to_string(),
        })?;

    for row in &row_images {
        if let Err(e) = fs::remove_file(&row.path) {
            printer.warning(
                "Warning",
                &format!("Failed to delete {}: {}", display_path(&row.path), e),
            );
        }
    }

    Ok(())
}
