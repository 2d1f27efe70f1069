//! Source image discovery.
//!
//! Enumerates the icon images in a source directory, filters them with a
//! glob-style filename pattern, and reads their pixel dimensions. The
//! result feeds the grid planner; enumeration order is whatever the file
//! system walker yields, not a sorted order.

use std::path::Path;

use walkdir::WalkDir;

use crate::error::{Result, SpriteError};
use crate::types::ImageDescriptor;

/// Scan `dir` for image files whose names match `filter`.
///
/// Only regular files directly inside `dir` are considered. Dimensions are
/// read from the image headers; any unreadable match is a fatal metadata
/// error, aborting before composition starts.
pub fn scan_images(dir: &Path, filter: &str) -> Result<Vec<ImageDescriptor>> {
    if !dir.is_dir() {
        return Err(SpriteError::Metadata {
            path: dir.to_path_buf(),
            message: "not a directory".to_string(),
            help: Some("Point the source directory at a folder of icon images".to_string()),
        });
    }

    let mut images = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !entry.file_type().is_file() {
            continue;
        }

        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => continue,
        };

        if !matches_filter(name, filter) {
            continue;
        }

        let (width, height) =
            image::image_dimensions(path).map_err(|e| SpriteError::Metadata {
                path: path.to_path_buf(),
                message: format!("failed to read image dimensions: {}", e),
                help: None,
            })?;

        images.push(ImageDescriptor {
            name: name.to_string(),
            width,
            height,
            source: dir.to_path_buf(),
        });
    }

    Ok(images)
}

/// Glob-style filename matching: `*` matches any run of characters, `?`
/// matches exactly one. The pattern is anchored to the whole name.
pub fn matches_filter(name: &str, pattern: &str) -> bool {
    let name: Vec<char> = name.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();

    // Iterative matcher with single-star backtracking
    let (mut n, mut p) = (0usize, 0usize);
    let mut star: Option<(usize, usize)> = None;

    while n < name.len() {
        if p < pattern.len() && (pattern[p] == '?' || pattern[p] == name[n]) {
            n += 1;
            p += 1;
        } else if p < pattern.len() && pattern[p] == '*' {
            star = Some((p, n));
            p += 1;
        } else if let Some((star_p, star_n)) = star {
            p = star_p + 1;
            n = star_n + 1;
            star = Some((star_p, star_n + 1));
        } else {
            return false;
        }
    }

    while p < pattern.len() && pattern[p] == '*' {
        p += 1;
    }
    p == pattern.len()
}
