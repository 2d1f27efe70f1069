//! Grid planner.
//!
//! A pure pass over the discovered images that derives the grid shape and
//! each icon's cell and pixel offset. The compositor and both emitters all
//! consume this single result, so the stylesheet coordinates and the pixel
//! geometry of the composed sprite come from the same computation.

use crate::types::{GridShape, ImageDescriptor, Layout, PlacedIcon};

/// Assign every image a grid cell and cumulative pixel offset.
///
/// Images are walked in input order, row-major: `row = i / columns`,
/// `col = i % columns`. Offsets accumulate row-relatively: the x offset
/// resets at the start of each row and grows by the current image's width;
/// the y offset grows by the current image's height whenever a new row
/// starts. This matches a uniform icon grid; mixed icon sizes are out of
/// scope (see [`PlacedIcon`]).
///
/// An empty input yields an empty layout with a `0x0` shape.
pub fn plan(images: &[ImageDescriptor]) -> Layout {
    let shape = GridShape::for_count(images.len());
    let mut icons = Vec::with_capacity(images.len());

    let mut offset_x: u32 = 0;
    let mut offset_y: u32 = 0;

    for (i, image) in images.iter().enumerate() {
        let col = i % shape.columns.max(1);
        let row = i / shape.columns.max(1);

        if col == 0 {
            offset_x = 0;
            if i != 0 {
                offset_y += image.height;
            }
        } else {
            offset_x += image.width;
        }

        icons.push(PlacedIcon {
            css_class: image.css_class(),
            descriptor: image.clone(),
            row,
            col,
            offset_x,
            offset_y,
        });
    }

    Layout { shape, icons }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::*;

    fn images(n: usize) -> Vec<ImageDescriptor> {
        (0..n)
            .map(|i| ImageDescriptor {
                name: format!("icon-{}.png", i),
                width: 16,
                height: 16,
                source: PathBuf::from("icons"),
            })
            .collect()
    }

    #[test]
    fn test_plan_empty() {
        let layout = plan(&[]);
        assert!(layout.is_empty());
        assert_eq!(layout.shape, GridShape { columns: 0, rows: 0 });
    }

    #[test]
    fn test_plan_preserves_input_order() {
        let layout = plan(&images(5));
        let names: Vec<&str> = layout
            .icons
            .iter()
            .map(|icon| icon.descriptor.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "icon-0.png",
                "icon-1.png",
                "icon-2.png",
                "icon-3.png",
                "icon-4.png"
            ]
        );
    }

    #[test]
    fn test_plan_four_icons_two_by_two() {
        let layout = plan(&images(4));
        assert_eq!(layout.shape, GridShape { columns: 2, rows: 2 });

        let cells: Vec<(usize, usize, u32, u32)> = layout
            .icons
            .iter()
            .map(|icon| (icon.row, icon.col, icon.offset_x, icon.offset_y))
            .collect();
        assert_eq!(
            cells,
            vec![(0, 0, 0, 0), (0, 1, 16, 0), (1, 0, 0, 16), (1, 1, 16, 16)]
        );
    }

    #[test]
    fn test_plan_five_icons_partial_last_row() {
        let layout = plan(&images(5));
        assert_eq!(layout.shape, GridShape { columns: 3, rows: 2 });

        // Last row holds two icons at columns 0 and 1
        let last_row: Vec<&PlacedIcon> = layout.row(1).collect();
        assert_eq!(last_row.len(), 2);
        assert_eq!(last_row[0].col, 0);
        assert_eq!(last_row[1].col, 1);

        // Second row sits one icon-height down
        assert!(last_row.iter().all(|icon| icon.offset_y == 16));
    }

    #[test]
    fn test_plan_unique_cells_in_bounds() {
        for n in 0..40 {
            let layout = plan(&images(n));
            assert_eq!(layout.icons.len(), n);

            let mut seen = HashSet::new();
            for icon in &layout.icons {
                assert!(icon.col < layout.shape.columns);
                assert!(icon.row < layout.shape.rows);
                assert!(seen.insert((icon.row, icon.col)), "duplicate cell for n={}", n);
            }
        }
    }

    #[test]
    fn test_plan_offsets_monotonic_within_row() {
        let layout = plan(&images(11));
        for row in 0..layout.shape.rows {
            let mut prev: Option<u32> = None;
            for icon in layout.row(row) {
                if icon.col == 0 {
                    assert_eq!(icon.offset_x, 0);
                }
                if let Some(prev) = prev {
                    assert!(icon.offset_x >= prev);
                }
                prev = Some(icon.offset_x);
            }
        }
    }

    #[test]
    fn test_plan_is_idempotent() {
        let input = images(13);
        assert_eq!(plan(&input), plan(&input));
    }

    #[test]
    fn test_plan_css_classes() {
        let layout = plan(&images(2));
        assert_eq!(layout.icons[0].css_class, "icon-icon-0");
        assert_eq!(layout.icons[1].css_class, "icon-icon-1");
    }
}
