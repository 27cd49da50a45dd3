//! Tables with banded row fills

use super::ShapeError;
use crate::backend::{
    Geometry, HorizontalAlign, Presentation, RunStyle, SlideId, TableCell, TablePlan,
    VerticalAnchor,
};
use crate::color::{ColorSchemes, TableRoles};
use crate::config::{
    Defaults, Options, ShapeConfig, FALLBACK_FONT, FALLBACK_FONT_SIZE, FALLBACK_LEFT, FALLBACK_TOP,
};
use crate::spec::ContentValue;

const DEFAULT_WIDTH: f64 = 5.5;
const DEFAULT_HEIGHT: f64 = 3.0;
const DEFAULT_CELL_PADDING: f64 = 0.05;

/// Options of a table shape
#[derive(Debug, Clone, PartialEq)]
pub struct TableShape {
    pub geometry: Geometry,
    /// Uniform row height; unset or zero keeps the backend default
    pub row_height: Option<f64>,
    /// Per-column widths, applied only when the count matches the data
    pub column_widths: Option<Vec<f64>>,
    pub cell_padding: f64,
    pub font: String,
    pub font_size: f64,
    pub align: HorizontalAlign,
    pub anchor: VerticalAnchor,
    pub header_bold: bool,
    /// Name of the color scheme providing header and banding fills
    pub table_colors: Option<String>,
}

impl TableShape {
    pub fn from_config(config: &ShapeConfig, defaults: &Defaults) -> Self {
        Self {
            geometry: Geometry::new(
                config.f64_or("left", defaults).unwrap_or(FALLBACK_LEFT),
                config.f64_or("top", defaults).unwrap_or(FALLBACK_TOP),
                config.f64("width").unwrap_or(DEFAULT_WIDTH),
                config.f64("height").unwrap_or(DEFAULT_HEIGHT),
            ),
            row_height: config.f64("row_height").filter(|h| *h != 0.0),
            column_widths: config.f64_list("column_widths").filter(|w| !w.is_empty()),
            cell_padding: config.f64("cell_padding").unwrap_or(DEFAULT_CELL_PADDING),
            font: config
                .str_or("font", defaults)
                .unwrap_or(FALLBACK_FONT)
                .to_string(),
            font_size: config.f64_or("font_size", defaults).unwrap_or(FALLBACK_FONT_SIZE),
            align: config
                .str_or("horizontal_align", defaults)
                .map(HorizontalAlign::parse)
                .unwrap_or_default(),
            anchor: config
                .str_or("vertical_align", defaults)
                .map(VerticalAnchor::parse)
                .unwrap_or_default(),
            header_bold: config.flag("header_bold").unwrap_or(true),
            table_colors: config.str("table_colors").map(str::to_string),
        }
    }

    /// Compute the table for `data`
    ///
    /// The column count comes from the first row. Longer rows are truncated,
    /// shorter rows leave their trailing cells empty.
    pub fn plan(
        &self,
        name: &str,
        data: &[Vec<String>],
        schemes: &ColorSchemes,
    ) -> Result<TablePlan, ShapeError> {
        let rows = data.len();
        let cols = data.first().map_or(1, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(ShapeError::EmptyTable {
                name: name.to_string(),
            });
        }

        let roles = match &self.table_colors {
            Some(scheme) => schemes.table_roles(scheme)?,
            None => TableRoles::default(),
        };

        let column_widths = match &self.column_widths {
            Some(widths) if widths.len() == cols => Some(widths.clone()),
            Some(widths) => {
                log::warn!(
                    "table '{}': {} column widths given for {} columns, keeping defaults",
                    name,
                    widths.len(),
                    cols
                );
                None
            }
            None => None,
        };

        let cells = data
            .iter()
            .enumerate()
            .map(|(r, row)| {
                if row.len() > cols {
                    log::warn!(
                        "table '{}': row {} has {} cells, only {} fit",
                        name,
                        r,
                        row.len(),
                        cols
                    );
                }
                (0..cols)
                    .map(|c| self.cell(r, row.get(c).cloned().unwrap_or_default(), &roles))
                    .collect()
            })
            .collect();

        Ok(TablePlan {
            geometry: self.geometry,
            rows,
            cols,
            row_heights: self.row_height.map(|h| vec![h; rows]),
            column_widths,
            cells,
        })
    }

    fn cell(&self, row: usize, text: String, roles: &TableRoles) -> TableCell {
        TableCell {
            text,
            word_wrap: true,
            anchor: self.anchor,
            padding: self.cell_padding,
            align: self.align,
            style: RunStyle {
                font: Some(self.font.clone()),
                size: Some(self.font_size),
                bold: (row == 0 && self.header_bold).then_some(true),
                ..RunStyle::default()
            },
            fill: roles.fill_for_row(row),
        }
    }
}

/// Add a table for `content` to `slide`
pub fn add_table<P: Presentation + ?Sized>(
    presentation: &mut P,
    slide: SlideId,
    name: &str,
    shape: &TableShape,
    content: &ContentValue,
    schemes: &ColorSchemes,
) -> Result<(), ShapeError> {
    let data: &[Vec<String>] = match content {
        ContentValue::Rows(data) => data,
        // `[]` has no nested list to mark it as rows
        ContentValue::Lines(lines) if lines.is_empty() => &[],
        _ => return Err(ShapeError::unsupported(name, "rows", content)),
    };
    let table = shape.plan(name, data, schemes)?;
    presentation.add_table(slide, table)?;
    Ok(())
}
