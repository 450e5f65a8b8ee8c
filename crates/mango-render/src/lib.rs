//! Mango surface rendering: colour scales, display configuration, and the
//! Plotly figure handed to the browser.

pub mod camera;
pub mod color;
pub mod config;
pub mod figure;
pub mod html;
pub mod pipeline;
pub mod renderer;

// Re-export main types
pub use camera::SceneCamera;
pub use color::{ColorScale, ColorStop, Rgb};
pub use config::{AxisConfig, Lighting, Margin, RenderConfig};
pub use figure::SurfaceFigure;
pub use html::{export_html, write_html, PLOTLY_CDN};
pub use pipeline::{plot_surface, PlotSummary};
pub use renderer::{BrowserRenderer, HtmlFileRenderer, Renderer};
