// File: crates/gdpchart-svg/src/lib.rs
// Summary: SVG renderer; maps drawable primitives 1:1 onto SVG elements.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use gdpchart_core::scene::{Primitive, Scene, TextAnchor};

const FONT_FAMILY: &str = "Verdana, Arial, sans-serif";

/// Serialize a scene into a standalone SVG document.
pub fn render_to_svg(scene: &Scene) -> String {
    let mut out = String::with_capacity(scene.primitives.len() * 96 + 256);
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = scene.width,
        h = scene.height,
    );
    for p in &scene.primitives {
        match p {
            Primitive::Rect { rect, fill, key } => {
                let _ = write!(
                    out,
                    r#"  <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}""#,
                    rect.left,
                    rect.top,
                    rect.width(),
                    rect.height(),
                    fill.to_css(),
                );
                if let Some(key) = key {
                    let _ = write!(out, r#" data-key="{}""#, escape(key));
                }
                let _ = writeln!(out, "/>");
            }
            Primitive::Line { x1, y1, x2, y2, stroke, width } => {
                let _ = writeln!(
                    out,
                    r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{}"/>"#,
                    x1, y1, x2, y2, stroke.to_css(), width,
                );
            }
            Primitive::Text { x, y, text, anchor, size, color } => {
                let anchor = match anchor {
                    TextAnchor::Start => "start",
                    TextAnchor::Middle => "middle",
                    TextAnchor::End => "end",
                };
                let _ = writeln!(
                    out,
                    r#"  <text x="{:.2}" y="{:.2}" text-anchor="{}" font-family="{}" font-size="{}" fill="{}">{}</text>"#,
                    x, y, anchor, FONT_FAMILY, size, color.to_css(), escape(text),
                );
            }
        }
    }
    out.push_str("</svg>\n");
    out
}

/// Render and write the document to disk, creating parent directories.
pub fn write_svg(scene: &Scene, path: impl AsRef<std::path::Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, render_to_svg(scene))
        .with_context(|| format!("writing {}", path.display()))
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gdpchart_core::view::{ChartState, Event};
    use gdpchart_core::{Series, Theme};

    #[test]
    fn ready_scene_serializes_bars_and_labels() {
        let mut state = ChartState::new();
        let series =
            Series::from_json(r#"{"data":[["1947-01-01",243.1],["1947-04-01",246.3]]}"#).unwrap();
        state.apply(Event::DataLoaded(series));
        let svg = render_to_svg(&Scene::build(&state, &Theme::default()));

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("data-key=").count(), 2);
        assert!(svg.contains(r#"data-key="1947-01-01""#));
        assert!(svg.contains("United States GDP"));
        assert!(svg.contains("rgb(70,130,180)"));
    }

    #[test]
    fn text_content_is_escaped() {
        let state = ChartState::Failed { message: "<boom> & more".into() };
        let svg = render_to_svg(&Scene::build(&state, &Theme::default()));
        assert!(svg.contains("&lt;boom&gt; &amp; more"));
        assert!(!svg.contains("<boom>"));
    }
}
