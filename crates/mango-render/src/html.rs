//! Standalone HTML page embedding a Plotly surface figure.

use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;
use mango_core::{MangoError, Result};

use crate::figure::SurfaceFigure;

/// Plotly.js bundle loaded by the exported page.
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Write `figure` as a self-contained HTML page to `out`.
pub fn write_html<W: Write>(figure: &SurfaceFigure<'_>, out: &mut W) -> Result<()> {
    let title = escape_html(&figure.config().title);
    let (rows, cols) = figure.surface().shape();
    let bounds = figure
        .surface()
        .bounds()
        .map(|b| b.to_string())
        .unwrap_or_else(|| "empty".to_string());

    // "</" inside a <script> block would end it early.
    let figure_json = serde_json::to_string(&figure.to_json())
        .map_err(|e| MangoError::Display(e.to_string()))?
        .replace("</", "<\\/");

    write!(out, r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        body {{
            margin: 0;
            overflow: hidden;
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background: #ffffff;
        }}
        #plot {{
            width: 100vw;
            height: 100vh;
        }}
        #info {{
            position: absolute;
            bottom: 10px;
            left: 10px;
            color: #666;
            font-size: 12px;
        }}
        #error {{
            position: absolute;
            top: 50%;
            left: 50%;
            transform: translate(-50%, -50%);
            background: rgba(200, 0, 0, 0.9);
            color: white;
            padding: 20px;
            border-radius: 5px;
            display: none;
        }}
    </style>
</head>
<body>
    <div id="plot"></div>
    <div id="info">{rows} x {cols} grid, bounds {bounds}</div>
    <div id="error">Failed to load Plotly from CDN. Please check your internet connection.</div>

    <script src="{cdn}"></script>
    <script>
        const figure = {figure_json};
        if (typeof Plotly === 'undefined') {{
            document.getElementById('error').style.display = 'block';
        }} else {{
            Plotly.newPlot('plot', figure.data, figure.layout, {{ responsive: true }});
        }}
    </script>
</body>
</html>
"#,
        title = title,
        rows = rows,
        cols = cols,
        bounds = bounds,
        cdn = PLOTLY_CDN,
        figure_json = figure_json,
    )?;
    Ok(())
}

/// Export `figure` as a standalone HTML file at `path`.
pub fn export_html(figure: &SurfaceFigure<'_>, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    let mut out = BufWriter::new(file);
    write_html(figure, &mut out)?;
    out.flush()?;
    info!("wrote surface figure to {}", path.display());
    Ok(())
}

fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
