//! Output targets for a finished figure.

use std::path::{Path, PathBuf};
use std::process::Command;

use log::{debug, info};
use mango_core::{MangoError, Result};

use crate::figure::SurfaceFigure;
use crate::html::export_html;

/// Something that can present a [`SurfaceFigure`].
pub trait Renderer {
    fn render(&self, figure: &SurfaceFigure<'_>) -> Result<()>;
}

/// Writes the figure as an HTML page at a fixed path.
#[derive(Debug, Clone)]
pub struct HtmlFileRenderer {
    path: PathBuf,
}

impl HtmlFileRenderer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Renderer for HtmlFileRenderer {
    fn render(&self, figure: &SurfaceFigure<'_>) -> Result<()> {
        export_html(figure, &self.path)
    }
}

/// Writes the figure to a scratch HTML file and opens it in the default
/// browser.
#[derive(Debug, Clone)]
pub struct BrowserRenderer {
    path: PathBuf,
}

impl BrowserRenderer {
    /// Reserve a fresh `mango-*.html` file in the system temp directory.
    ///
    /// The file is created exclusively and kept after the renderer is
    /// dropped, so the browser can still read it.
    pub fn new() -> Result<Self> {
        let file = tempfile::Builder::new()
            .prefix("mango-")
            .suffix(".html")
            .tempfile()?;
        let (_, path) = file.keep().map_err(|e| e.error)?;
        debug!("reserved {}", path.display());
        Ok(Self::with_path(path))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Renderer for BrowserRenderer {
    fn render(&self, figure: &SurfaceFigure<'_>) -> Result<()> {
        export_html(figure, &self.path)?;
        open_in_browser(&self.path)
    }
}

/// Platform command that opens a file with its default application.
fn opener_command(path: &Path) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(path);
        cmd
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]).arg(path);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(path);
        cmd
    }
}

fn open_in_browser(path: &Path) -> Result<()> {
    let mut cmd = opener_command(path);
    debug!("launching viewer: {:?}", cmd);
    let status = cmd.status().map_err(|e| {
        MangoError::Display(format!(
            "could not launch a viewer for {}: {}",
            path.display(),
            e
        ))
    })?;
    if !status.success() {
        return Err(MangoError::Display(format!(
            "viewer exited with {} for {}",
            status,
            path.display()
        )));
    }
    info!("opened {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use mango_geometry::{normalized_heights, MangoSurface, Surface, SurfaceGrid};

    #[test]
    fn test_html_file_renderer_writes_page() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = HtmlFileRenderer::new(dir.path().join("out.html"));

        let mango = MangoSurface::default();
        let grid = mango.param_grid(5, 5).unwrap();
        let surface = SurfaceGrid::evaluate(&mango, &grid);
        let heights = normalized_heights(&surface).unwrap();
        let config = RenderConfig::default();
        let figure = SurfaceFigure::new(&surface, &heights, &config).unwrap();

        renderer.render(&figure).unwrap();
        assert!(renderer.path().exists());
    }

    #[test]
    fn test_browser_renderer_reserves_temp_file() {
        let renderer = BrowserRenderer::new().unwrap();
        let name = renderer.path().file_name().unwrap().to_str().unwrap().to_string();
        assert!(renderer.path().starts_with(std::env::temp_dir()));
        assert!(name.starts_with("mango-") && name.ends_with(".html"), "{}", name);
        assert!(renderer.path().is_file());
        std::fs::remove_file(renderer.path()).unwrap();
    }

    #[test]
    fn test_browser_renderers_get_distinct_paths() {
        let first = BrowserRenderer::new().unwrap();
        let second = BrowserRenderer::new().unwrap();
        assert_ne!(first.path(), second.path());
        std::fs::remove_file(first.path()).unwrap();
        std::fs::remove_file(second.path()).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_browser_renderer_ignores_planted_symlink() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("notes.txt");
        std::fs::write(&target, "keep me").unwrap();
        let planted = std::env::temp_dir().join("mango.html");
        let planted_here = std::os::unix::fs::symlink(&target, &planted).is_ok();

        let renderer = BrowserRenderer::new().unwrap();
        assert_ne!(renderer.path(), planted.as_path());
        let mango = MangoSurface::default();
        let grid = mango.param_grid(4, 4).unwrap();
        let surface = SurfaceGrid::evaluate(&mango, &grid);
        let heights = normalized_heights(&surface).unwrap();
        let config = RenderConfig::default();
        let figure = SurfaceFigure::new(&surface, &heights, &config).unwrap();
        export_html(&figure, renderer.path()).unwrap();

        assert_eq!(std::fs::read_to_string(&target).unwrap(), "keep me");
        std::fs::remove_file(renderer.path()).unwrap();
        if planted_here {
            std::fs::remove_file(&planted).unwrap();
        }
    }

    #[test]
    fn test_opener_targets_path() {
        let cmd = opener_command(Path::new("/tmp/mango.html"));
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args.last().unwrap().to_str(), Some("/tmp/mango.html"));
    }
}
