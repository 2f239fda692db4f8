use std::io::Write;

use crate::error::Result;
use crate::layout::{CellTag, GridAssignment, RING_ITEM_PX};
use crate::sizing::ItemFootprint;

/// Renderer parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct RendererSettings {
    /// Box shared by populated and empty cells.
    pub footprint: ItemFootprint,
    pub margin_px: f64,
    /// Minimum track size handed to the CSS grid.
    pub min_track_px: u32,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            footprint: ItemFootprint::square(40.0),
            margin_px: 0.0,
            min_track_px: 10,
        }
    }
}

impl RendererSettings {
    /// Spacing used by the similarity-rating screen.
    pub fn rating_ring() -> Self {
        Self {
            footprint: ItemFootprint::square(f64::from(RING_ITEM_PX)),
            margin_px: 10.0,
            ..Self::default()
        }
    }
}

/// Writes a [`GridAssignment`] as a CSS grid of image cells.
pub struct HtmlRenderer {
    settings: RendererSettings,
}

impl HtmlRenderer {
    pub fn new(settings: RendererSettings) -> Self {
        Self { settings }
    }

    pub fn with_default() -> Self {
        Self::new(RendererSettings::default())
    }

    pub fn settings_mut(&mut self) -> &mut RendererSettings {
        &mut self.settings
    }

    pub fn render(&self, writer: &mut impl Write, layout: &GridAssignment) -> Result<()> {
        let size = layout.size();
        let track = self.settings.min_track_px;
        write!(
            writer,
            "<div class=\"grid-container\" style=\"grid-template-columns: repeat({}, minmax({track}px, 1fr)); grid-template-rows: repeat({}, minmax({track}px, 1fr));\">",
            size.columns, size.rows
        )?;

        let box_style = self.box_style();
        for (_coordinate, tag) in layout.cells() {
            match layout.asset_for(tag) {
                Some(asset) => write!(
                    writer,
                    "<div class=\"grid-item {}\"><img src=\"{}\" style=\"{box_style}\"></div>",
                    tag_class(tag),
                    html_escape::encode_double_quoted_attribute(asset)
                )?,
                None => write!(writer, "<div class=\"grid-item empty\" style=\"{box_style}\"></div>")?,
            }
        }

        write!(writer, "</div>")?;
        writer.flush()?;
        Ok(())
    }

    pub fn render_to_string(&self, layout: &GridAssignment) -> Result<String> {
        let mut output = Vec::new();
        self.render(&mut output, layout)?;
        Ok(String::from_utf8_lossy(&output).into_owned())
    }

    fn box_style(&self) -> String {
        let ItemFootprint {
            width_px,
            height_px,
        } = self.settings.footprint;
        format!(
            "margin: {}px; width: {}px; height: {}px",
            px(self.settings.margin_px),
            px(width_px),
            px(height_px)
        )
    }
}

fn tag_class(tag: CellTag) -> &'static str {
    match tag {
        CellTag::Target => "target",
        CellTag::Distractor => "distractor",
        CellTag::Empty => "empty",
    }
}

fn px(value: f64) -> String {
    let fixed = format!("{value:.2}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}
