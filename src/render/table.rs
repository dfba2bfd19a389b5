//! Table layout: equal-width columns, wrapped cells, dynamic row heights.

use crate::render::layout::{LayoutContext, LINE_HEIGHT};
use crate::render::surface::{FontFamily, Surface};
use crate::render::wrap::wrap;

const CELL_FONT_SIZE: f32 = 10.0;
const CELL_LINE_UNIT: f32 = 10.0;
const ROW_PADDING: f32 = 5.0;
const CELL_TEXT_INSET: f32 = 2.0;
const CELL_WRAP_MARGIN: f32 = 4.0;
const RECT_LIFT: f32 = 3.0;

/// Lay out a table block: header row in bold, then each data row. Rows are
/// paginated as units; a row taller than a fresh page is drawn anyway and
/// overflows.
pub(crate) fn layout_table<S: Surface>(
    ctx: &mut LayoutContext<'_, S>,
    header: &[String],
    rows: &[Vec<String>],
) {
    if header.is_empty() {
        return;
    }
    let columns = header.len();
    let column_width = ctx.content_width() / columns as f32;

    draw_row(ctx, header, columns, column_width, FontFamily::HelveticaBold);
    for row in rows {
        if row.len() > columns {
            log::warn!(
                "table row has {} cells, truncating to {} columns",
                row.len(),
                columns
            );
        }
        draw_row(ctx, row, columns, column_width, FontFamily::Helvetica);
    }
    ctx.y -= LINE_HEIGHT;
}

fn draw_row<S: Surface>(
    ctx: &mut LayoutContext<'_, S>,
    cells: &[String],
    columns: usize,
    column_width: f32,
    font: FontFamily,
) {
    let wrapped: Vec<Vec<String>> = cells
        .iter()
        .take(columns)
        .map(|cell| {
            wrap(
                ctx.surface,
                cell,
                font,
                CELL_FONT_SIZE,
                column_width - CELL_WRAP_MARGIN,
            )
        })
        .collect();
    let line_count = wrapped.iter().map(Vec::len).max().unwrap_or(1).max(1);
    let height = line_count as f32 * CELL_LINE_UNIT + ROW_PADDING;

    ctx.ensure_room(height);
    let top = ctx.y;
    for (col, lines) in wrapped.iter().enumerate() {
        let x = ctx.margins.left + col as f32 * column_width;
        ctx.surface
            .draw_rect(x, top - height + RECT_LIFT, column_width, height);
        for (index, line) in lines.iter().enumerate() {
            let line_y = top - CELL_LINE_UNIT - index as f32 * CELL_LINE_UNIT;
            ctx.draw_runs(line, x + CELL_TEXT_INSET, line_y, font, CELL_FONT_SIZE);
        }
    }
    ctx.y -= height;
}
