//! Build command implementation.
//!
//! Runs the whole pipeline: scan the source directory, plan the grid once,
//! compose the sprite, then emit the stylesheet and preview page from the
//! same plan.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::compose::{build_sprite, ImageCompositor};
use crate::config::{SpriteSpec, MANIFEST_FILENAME};
use crate::discovery::scan_images;
use crate::emit::{render_preview, render_stylesheet};
use crate::error::{Result, SpriteError};
use crate::layout::plan;
use crate::output::{display_path, plural, Printer};

/// Pack icons into a sprite and generate its stylesheet
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Directory containing the source icons (default: manifest value,
    /// then the current directory)
    pub source: Option<PathBuf>,

    /// Glob-style filename filter for selecting icons
    #[arg(long)]
    pub filter: Option<String>,

    /// Output path for the sprite image
    #[arg(long, short)]
    pub out: Option<PathBuf>,

    /// Output path for the stylesheet (skipped if omitted)
    #[arg(long)]
    pub css: Option<PathBuf>,

    /// Output path for the HTML preview page (skipped if omitted)
    #[arg(long)]
    pub html: Option<PathBuf>,

    /// Manifest to read defaults from (default: sprite.yaml in the
    /// source directory, when present)
    #[arg(long)]
    pub manifest: Option<PathBuf>,
}

impl BuildArgs {
    /// Resolve the effective spec: manifest values first, CLI flags on top.
    fn resolve(&self) -> Result<SpriteSpec> {
        let mut spec = match &self.manifest {
            Some(path) => SpriteSpec::load(path)?,
            None => {
                let base = self.source.clone().unwrap_or_else(|| PathBuf::from("."));
                let conventional = base.join(MANIFEST_FILENAME);
                if conventional.is_file() {
                    SpriteSpec::load(&conventional)?
                } else {
                    SpriteSpec::default()
                }
            }
        };

        if let Some(source) = &self.source {
            spec.source_directory = source.clone();
        }
        if let Some(filter) = &self.filter {
            spec.filter = filter.clone();
        }
        if let Some(out) = &self.out {
            spec.image_file = out.clone();
        }
        if let Some(css) = &self.css {
            spec.css_file = Some(css.clone());
        }
        if let Some(html) = &self.html {
            spec.html_file = Some(html.clone());
        }

        Ok(spec)
    }
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let spec = args.resolve()?;
    build_from_spec(&spec, printer)
}

/// Run one sprite build for a resolved spec.
pub fn build_from_spec(spec: &SpriteSpec, printer: &Printer) -> Result<()> {
    printer.status("Scanning", &display_path(&spec.source_directory));

    let images = scan_images(&spec.source_directory, &spec.filter)?;
    if images.is_empty() {
        return Err(SpriteError::Metadata {
            path: spec.source_directory.clone(),
            message: format!("no images match filter '{}'", spec.filter),
            help: Some("Adjust --filter or point at a different directory".to_string()),
        });
    }

    // One planner pass feeds the compositor and both emitters
    let layout = plan(&images);
    printer.info(
        "Planned",
        &format!(
            "{} in a {}x{} grid",
            plural(layout.icons.len(), "icon", "icons"),
            layout.shape.columns,
            layout.shape.rows
        ),
    );

    if let Some(parent) = spec.image_file.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| SpriteError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })?;
        }
    }

    build_sprite(&ImageCompositor, &layout, &spec.image_file, printer)?;
    printer.status("Created", &display_path(&spec.image_file));

    // A stylesheet/preview write failure is reported but never rolls back
    // the sprite written above.
    if let Some(css_path) = &spec.css_file {
        let css = render_stylesheet(&layout.icons, &spec.sprite_name());
        write_text(css_path, &css)?;
        printer.status("Created", &display_path(css_path));
    }

    if let Some(html_path) = &spec.html_file {
        let href = spec.css_file.as_ref().map(|p| p.display().to_string());
        let html = render_preview(&layout.icons, href.as_deref());
        write_text(html_path, &html)?;
        printer.status("Created", &display_path(html_path));
    }

    Ok(())
}

fn write_text(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| SpriteError::Sink {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use tempfile::tempdir;

    use super::*;

    fn write_png(path: &Path, w: u32, h: u32) {
        RgbaImage::from_pixel(w, h, Rgba([255, 0, 0, 255]))
            .save(path)
            .unwrap();
    }

    fn icon_dir(names: &[&str]) -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        for name in names {
            write_png(&dir.path().join(name), 16, 16);
        }
        dir
    }

    fn args_for(dir: &Path) -> BuildArgs {
        BuildArgs {
            source: Some(dir.to_path_buf()),
            filter: None,
            out: None,
            css: None,
            html: None,
            manifest: None,
        }
    }

    #[test]
    fn test_build_sprite_only() {
        let dir = icon_dir(&["a.png", "b.png", "c.png", "d.png"]);
        let out = dir.path().join("sprite.png");

        let mut args = args_for(dir.path());
        args.out = Some(out.clone());
        run(args, &Printer::new()).unwrap();

        let img = image::open(&out).unwrap().to_rgba8();
        assert_eq!((img.width(), img.height()), (32, 32));

        // No stylesheet or preview unless requested, no strips left behind
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|name| name.starts_with("_row-") || name.ends_with(".css"))
            .collect();
        assert!(leftovers.is_empty(), "unexpected files: {:?}", leftovers);
    }

    #[test]
    fn test_build_with_stylesheet_and_preview() {
        let dir = icon_dir(&["save.png", "load.png"]);
        let out = dir.path().join("sprite.png");
        let css = dir.path().join("icons.css");
        let html = dir.path().join("preview.html");

        let mut args = args_for(dir.path());
        args.out = Some(out.clone());
        args.css = Some(css.clone());
        args.html = Some(html.clone());
        run(args, &Printer::new()).unwrap();

        assert!(out.exists());

        let css_text = fs::read_to_string(&css).unwrap();
        assert!(css_text.contains(".icon-save { background: url(sprite.png)"));
        assert!(css_text.contains(".icon-load { background: url(sprite.png)"));

        let html_text = fs::read_to_string(&html).unwrap();
        assert!(html_text.contains(&format!("href='{}'", css.display())));
        assert!(html_text.contains("class='icon-save'"));
    }

    #[test]
    fn test_build_preview_without_stylesheet() {
        let dir = icon_dir(&["a.png"]);
        let out = dir.path().join("sprite.png");
        let html = dir.path().join("preview.html");

        let mut args = args_for(dir.path());
        args.out = Some(out.clone());
        args.html = Some(html.clone());
        run(args, &Printer::new()).unwrap();

        // Sprite still produced; preview links an empty stylesheet
        assert!(out.exists());
        let html_text = fs::read_to_string(&html).unwrap();
        assert!(html_text.contains("href=''"));
    }

    #[test]
    fn test_build_no_matches_is_fatal() {
        let dir = icon_dir(&[]);
        let result = run(args_for(dir.path()), &Printer::new());
        assert!(matches!(result, Err(SpriteError::Metadata { .. })));
    }

    #[test]
    fn test_build_filter_narrows_selection() {
        let dir = icon_dir(&["btn-a.png", "btn-b.png", "other.png"]);
        let out = dir.path().join("sprite.png");

        let mut args = args_for(dir.path());
        args.filter = Some("btn-*.png".to_string());
        args.out = Some(out.clone());
        args.css = Some(dir.path().join("icons.css"));
        run(args, &Printer::new()).unwrap();

        let css_text = fs::read_to_string(dir.path().join("icons.css")).unwrap();
        assert!(css_text.contains(".icon-btn-a"));
        assert!(css_text.contains(".icon-btn-b"));
        assert!(!css_text.contains(".icon-other"));
    }

    #[test]
    fn test_build_reads_conventional_manifest() {
        let dir = icon_dir(&["a.png", "b.png"]);
        let out = dir.path().join("from-manifest.png");
        fs::write(
            dir.path().join(MANIFEST_FILENAME),
            format!("image_file: {}\n", out.display()),
        )
        .unwrap();

        run(args_for(dir.path()), &Printer::new()).unwrap();
        assert!(out.exists());
    }

    #[test]
    fn test_build_flags_override_manifest() {
        let dir = icon_dir(&["a.png"]);
        fs::write(
            dir.path().join(MANIFEST_FILENAME),
            "image_file: ignored.png\n",
        )
        .unwrap();

        let out = dir.path().join("flag-wins.png");
        let mut args = args_for(dir.path());
        args.out = Some(out.clone());
        run(args, &Printer::new()).unwrap();

        assert!(out.exists());
        assert!(!dir.path().join("ignored.png").exists());
    }

    #[test]
    fn test_build_creates_output_directory() {
        let dir = icon_dir(&["a.png"]);
        let out = dir.path().join("dist/sprites/sprite.png");

        let mut args = args_for(dir.path());
        args.out = Some(out.clone());
        run(args, &Printer::new()).unwrap();

        assert!(out.exists());
    }
}
