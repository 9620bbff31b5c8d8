// File: crates/chart-core/src/svg.rs
// Summary: SVG and HTML serialization of a rendered chart.

use std::fmt::{self, Write};
use std::path::Path;

use crate::axis::{Axis, Orient};
use crate::chart::RenderedChart;
use crate::error::{ChartError, Result};
use crate::legend::{Legend, SWATCH_SIZE};
use crate::scene::Scene;

/// Compact number: integers without a fraction, others to three decimals.
fn num(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    let rounded = (v * 1000.0).round() / 1000.0;
    // avoid "-0"
    if rounded == 0.0 { "0".to_string() } else { format!("{rounded}") }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn write_axis<W: Write>(out: &mut W, axis: &Axis, scene: &Scene) -> fmt::Result {
    let theme = &scene.theme;
    let stroke = theme.axis_line.to_hex();
    let (anchor, transform) = match axis.orient {
        Orient::Left => ("end", String::new()),
        Orient::Bottom => (
            "middle",
            format!(r#" transform="translate({}, {})""#, num(axis.origin.x), num(axis.origin.y)),
        ),
    };
    writeln!(
        out,
        r#"<g id="{}"{transform} fill="none" font-size="10" font-family="sans-serif" text-anchor="{anchor}">"#,
        axis.id
    )?;

    let (r0, r1) = axis.range;
    let size = axis.tick_size;
    let domain = match axis.orient {
        Orient::Left => format!("M{},{}H0V{}H{}", num(-size), num(r0), num(r1), num(-size)),
        Orient::Bottom => format!("M{},{}V0H{}V{}", num(r0), num(size), num(r1), num(size)),
    };
    writeln!(out, r#"<path class="domain" stroke="{stroke}" d="{domain}"/>"#)?;

    let label_fill = theme.tick_label.to_hex();
    for tick in &axis.ticks {
        let (_, end, label_at) = axis.tick_geometry(tick);
        match axis.orient {
            Orient::Left => writeln!(
                out,
                r#"<g class="tick" opacity="1" transform="translate(0,{})"><line stroke="{stroke}" x2="{}"/><text fill="{label_fill}" x="{}" dy="0.32em">{}</text></g>"#,
                num(tick.offset),
                num(end.x),
                num(label_at.x),
                escape(&tick.label)
            )?,
            Orient::Bottom => writeln!(
                out,
                r#"<g class="tick" opacity="1" transform="translate({},0)"><line stroke="{stroke}" y2="{}"/><text fill="{label_fill}" y="{}" dy="0.71em">{}</text></g>"#,
                num(tick.offset),
                num(end.y),
                num(label_at.y),
                escape(&tick.label)
            )?,
        }
    }

    let title = &axis.title;
    let rotate = if title.rotate != 0.0 {
        format!(r#" transform="rotate({})""#, num(title.rotate))
    } else {
        String::new()
    };
    writeln!(
        out,
        r#"<text class="axis-title"{rotate} x="{}" y="{}" font-size="1rem" fill="{}" letter-spacing="2px">{}</text>"#,
        num(title.x),
        num(title.y),
        theme.axis_title.to_hex(),
        escape(&title.text)
    )?;
    writeln!(out, "</g>")
}

fn write_legend<W: Write>(out: &mut W, legend: &Legend) -> fmt::Result {
    writeln!(
        out,
        r#"<g class="legend" transform="translate({}, {})" fill="{}">"#,
        num(legend.origin.x),
        num(legend.origin.y),
        legend.text_fill.to_hex()
    )?;
    writeln!(out, r#"<text class="legendTitle">{}</text>"#, escape(&legend.title))?;
    writeln!(out, r#"<g class="legendCells">"#)?;
    for cell in &legend.cells {
        writeln!(
            out,
            r#"<g class="cell"><rect class="swatch" x="{}" y="{}" width="{}" height="{}" fill="{}"/><text class="label" x="{}" y="{}">{}</text></g>"#,
            num(cell.swatch.x),
            num(cell.swatch.y),
            num(SWATCH_SIZE),
            num(SWATCH_SIZE),
            cell.color.to_hex(),
            num(cell.label_at.x),
            num(cell.label_at.y),
            escape(&cell.label)
        )?;
    }
    writeln!(out, "</g>\n</g>")
}

impl Scene {
    pub fn write_svg<W: Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="wrapper" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = num(self.width),
            h = num(self.height)
        )?;
        writeln!(out, r#"<rect width="100%" height="100%" fill="{}"/>"#, self.theme.background.to_hex())?;
        writeln!(
            out,
            r#"<g class="bounds" transform="translate({}, {})">"#,
            num(self.bounds_origin.x),
            num(self.bounds_origin.y)
        )?;

        writeln!(out, r#"<g class="bins">"#)?;
        let marker_stroke = self.theme.marker_stroke;
        for m in &self.markers {
            writeln!(
                out,
                r#"<g class="bin"><circle class="dot" r="{}" cx="{}" cy="{}" data-xvalue="{}" data-yvalue="{}" fill="{}" stroke="{}" stroke-opacity="{}"/></g>"#,
                num(m.radius),
                num(m.center.x),
                num(m.center.y),
                m.data_xvalue(),
                m.data_yvalue(),
                m.fill.to_hex(),
                marker_stroke.to_hex(),
                num(marker_stroke.opacity())
            )?;
        }
        writeln!(out, "</g>")?;

        write_axis(out, &self.y_axis, self)?;
        write_axis(out, &self.x_axis, self)?;
        writeln!(out, "</g>")?;

        write_legend(out, &self.legend)?;
        writeln!(out, "</svg>")
    }

    pub fn to_svg_string(&self) -> String {
        let mut out = String::new();
        // formatting into a String cannot fail
        let _ = self.write_svg(&mut out);
        out
    }
}

/// Pointer enter/leave for `circle.dot`: year from `data-xvalue`, `MM:SS`
/// from `data-yvalue`, placed beside the marker.
const HOVER_SCRIPT: &str = r##"(() => {
  const tooltip = document.getElementById("tooltip");
  const svg = document.querySelector("#wrapper svg");
  const pad = (n) => String(n).padStart(2, "0");
  const dx = Number(tooltip.dataset.offsetX);
  const dy = Number(tooltip.dataset.offsetY);
  for (const dot of document.querySelectorAll("circle.dot")) {
    dot.addEventListener("mouseenter", () => {
      const year = dot.dataset.xvalue;
      const time = new Date(dot.dataset.yvalue);
      tooltip.style.opacity = 1;
      tooltip.querySelector("#year").textContent = year;
      tooltip.querySelector("#time").textContent = `${pad(time.getUTCMinutes())}:${pad(time.getUTCSeconds())}`;
      const x = Number(dot.getAttribute("cx")) + dx;
      const y = Number(dot.getAttribute("cy")) + dy + svg.offsetTop;
      tooltip.style.transform = `translate(${x}px, ${y}px)`;
      tooltip.dataset.year = year;
      tooltip.dataset.time = dot.dataset.yvalue;
    });
    dot.addEventListener("mouseleave", () => {
      tooltip.style.opacity = 0;
    });
  }
})();
"##;

impl RenderedChart {
    pub fn to_svg_string(&self) -> String {
        self.scene.to_svg_string()
    }

    /// Standalone page: `#wrapper` holding the title, the SVG and a hidden
    /// `#tooltip` with `#year` and `#time` slots. The inline script drives the
    /// tooltip from the markers' data attributes.
    pub fn to_html_string(&self) -> String {
        let scene = &self.scene;
        let theme = &scene.theme;
        let dims = &self.context.dimensions;
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
body {{ background: {bg}; color: {fg}; font-family: sans-serif; }}
#wrapper {{ position: relative; }}
#title {{ text-align: center; }}
#tooltip {{ position: absolute; top: 0; left: 0; opacity: 0; pointer-events: none; padding: 0.5rem; border-radius: 4px; background: {tip_bg}; color: {tip_fg}; }}
</style>
</head>
<body>
<div id="wrapper">
<h1 id="title">{title}</h1>
{svg}<div id="tooltip" data-offset-x="{dx}" data-offset-y="{dy}"><div id="year"></div><div id="time"></div></div>
</div>
<script>
{script}</script>
</body>
</html>
"#,
            title = escape(&scene.title),
            bg = theme.background.to_hex(),
            fg = theme.title.to_hex(),
            tip_bg = theme.tooltip_background.to_hex(),
            tip_fg = theme.tooltip_text.to_hex(),
            svg = scene.to_svg_string(),
            dx = num(dims.margin_left() + self.context.tooltip_pad),
            dy = num(dims.margin_top()),
            script = HOVER_SCRIPT,
        )
    }

    pub fn render_to_svg(&self, path: impl AsRef<Path>) -> Result<()> {
        write_output(path.as_ref(), self.to_svg_string().as_bytes())
    }

    pub fn render_to_html(&self, path: impl AsRef<Path>) -> Result<()> {
        write_output(path.as_ref(), self.to_html_string().as_bytes())
    }
}

/// Write `bytes` to `path`, creating parent directories.
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    let io_err = |source| ChartError::Io { path: path.to_path_buf(), source };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
    }
    std::fs::write(path, bytes).map_err(io_err)?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote chart");
    Ok(())
}
