use core::fmt::Write;

use crate::document::SummaryDocument;
use crate::error::ExportResult;

use super::DocumentRenderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

/// Fixed-width plain-text tables, for terminals and plain printers.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl DocumentRenderer for TextRenderer {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn render(&self, doc: &SummaryDocument) -> ExportResult<String> {
        let mut out = String::new();

        writeln!(out, "{}", doc.title)?;
        writeln!(
            out,
            "Date: {} | Time: {}",
            doc.generated_at.date_label(),
            doc.generated_at.time_label()
        )?;
        writeln!(out)?;

        let rows: Vec<Vec<String>> = doc
            .line_items
            .iter()
            .map(|r| {
                vec![
                    r.serial.to_string(),
                    r.category.to_string(),
                    r.unit_price.to_string(),
                    r.size_count.to_string(),
                    r.colour_count.to_string(),
                    r.total_pieces.to_string(),
                    r.total_price.to_string(),
                ]
            })
            .collect();
        write_table(
            &mut out,
            &[
                ("S.No", Align::Right),
                ("Dress Type", Align::Left),
                ("Price/Piece", Align::Right),
                ("Sizes", Align::Right),
                ("Colours", Align::Right),
                ("Total Pieces", Align::Right),
                ("Total Price", Align::Right),
            ],
            &rows,
        )?;
        writeln!(out)?;

        writeln!(out, "ORDER SUMMARY")?;
        write_table(
            &mut out,
            &[
                ("Total Items", Align::Right),
                ("Total Pieces", Align::Right),
                ("Grand Total", Align::Right),
            ],
            &[vec![
                doc.summary.item_count.to_string(),
                doc.summary.total_pieces.to_string(),
                doc.summary.grand_total.to_string(),
            ]],
        )?;
        writeln!(out)?;

        writeln!(out, "DRESS TYPE BREAKDOWN")?;
        let rows: Vec<Vec<String>> = doc
            .breakdown
            .iter()
            .map(|r| vec![r.category.to_string(), format!("{} pieces", r.pieces)])
            .collect();
        write_table(
            &mut out,
            &[("Dress Type", Align::Left), ("Total Pieces", Align::Right)],
            &rows,
        )?;
        writeln!(out)?;

        for line in &doc.footer {
            writeln!(out, "{line}")?;
        }
        Ok(out)
    }
}

fn width(text: &str) -> usize {
    text.chars().count()
}

fn write_table(
    out: &mut String,
    columns: &[(&str, Align)],
    rows: &[Vec<String>],
) -> core::fmt::Result {
    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, (heading, _))| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| width(cell))
                .chain(core::iter::once(width(heading)))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let headings: Vec<&str> = columns.iter().map(|(h, _)| *h).collect();
    write_row(out, &headings, columns, &widths)?;
    let rule: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    writeln!(out, "{}", "-".repeat(rule))?;
    for row in rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        write_row(out, &cells, columns, &widths)?;
    }
    Ok(())
}

fn write_row(
    out: &mut String,
    cells: &[&str],
    columns: &[(&str, Align)],
    widths: &[usize],
) -> core::fmt::Result {
    for (i, ((cell, (_, align)), w)) in cells.iter().zip(columns).zip(widths).enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        let pad = w.saturating_sub(width(cell));
        match align {
            Align::Left => write!(out, "{cell}{}", " ".repeat(pad))?,
            Align::Right => write!(out, "{}{cell}", " ".repeat(pad))?,
        }
    }
    let trimmed = out.trim_end_matches(' ').len();
    out.truncate(trimmed);
    out.push('\n');
    Ok(())
}
