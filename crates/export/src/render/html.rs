use core::fmt::Write;

use crate::document::{BreakdownLine, LineItem, OrderSummary, SummaryDocument};
use crate::error::ExportResult;

use super::DocumentRenderer;

const STYLE: &str = r#"
        body { font-family: Arial, sans-serif; margin: 20px; line-height: 1.4; }
        .header { text-align: center; border-bottom: 2px solid #333; padding-bottom: 15px; margin-bottom: 30px; }
        .title { font-size: 24px; font-weight: bold; margin-bottom: 8px; }
        .date-time { color: #666; font-size: 14px; }
        table { width: 100%; border-collapse: collapse; margin: 20px 0; }
        th, td { border: 1px solid #ddd; padding: 12px; text-align: left; }
        th { background-color: #f8f9fa; font-weight: bold; text-align: center; }
        .text-center { text-align: center; }
        .text-right { text-align: right; }
        .summary-table { margin-top: 30px; background-color: #1e293b; color: white; }
        .summary-table th, .summary-table td { border-color: #475569; }
        .summary-table th { background-color: #334155; }
        .footer { text-align: center; margin-top: 30px; color: #666; font-size: 12px; border-top: 1px solid #ddd; padding-top: 15px; }
"#;

/// Printable, self-contained HTML page (open and "Save as PDF").
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl DocumentRenderer for HtmlRenderer {
    fn extension(&self) -> &'static str {
        "html"
    }

    fn render(&self, document: &SummaryDocument) -> ExportResult<String> {
        let mut out = String::with_capacity(4096 + document.line_items.len() * 512);
        write_page(&mut out, document)?;
        Ok(out)
    }
}

fn write_page(out: &mut String, doc: &SummaryDocument) -> core::fmt::Result {
    let title = escape(&doc.title);
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html>\n<head>")?;
    writeln!(out, "    <meta charset=\"utf-8\">")?;
    writeln!(out, "    <title>{title}</title>")?;
    writeln!(out, "    <style>{STYLE}    </style>")?;
    writeln!(out, "</head>\n<body>")?;
    writeln!(out, "    <div class=\"header\">")?;
    writeln!(out, "        <div class=\"title\">{title}</div>")?;
    writeln!(
        out,
        "        <div class=\"date-time\">Date: {} | Time: {}</div>",
        doc.generated_at.date_label(),
        doc.generated_at.time_label()
    )?;
    writeln!(out, "    </div>")?;

    write_line_items(out, &doc.line_items)?;
    write_summary(out, &doc.summary)?;
    write_breakdown(out, &doc.breakdown)?;

    let footer = doc
        .footer
        .iter()
        .map(|line| escape(line))
        .collect::<Vec<_>>()
        .join("<br>\n        ");
    writeln!(out, "    <div class=\"footer\">\n        {footer}\n    </div>")?;
    writeln!(out, "</body>\n</html>")
}

fn write_line_items(out: &mut String, rows: &[LineItem]) -> core::fmt::Result {
    writeln!(out, "    <table>\n        <thead>\n            <tr>")?;
    for heading in [
        "S.No",
        "Dress Type",
        "Price/Piece",
        "Sizes",
        "Colours",
        "Total Pieces",
        "Total Price",
    ] {
        writeln!(out, "                <th>{heading}</th>")?;
    }
    writeln!(out, "            </tr>\n        </thead>\n        <tbody>")?;
    for row in rows {
        writeln!(out, "            <tr>")?;
        writeln!(out, "                <td class=\"text-center\">{}</td>", row.serial)?;
        writeln!(out, "                <td>{}</td>", escape(row.category.as_str()))?;
        writeln!(out, "                <td class=\"text-right\">{}</td>", row.unit_price)?;
        writeln!(out, "                <td class=\"text-center\">{}</td>", row.size_count)?;
        writeln!(out, "                <td class=\"text-center\">{}</td>", row.colour_count)?;
        writeln!(
            out,
            "                <td class=\"text-center\"><strong>{}</strong></td>",
            row.total_pieces
        )?;
        writeln!(
            out,
            "                <td class=\"text-right\"><strong>{}</strong></td>",
            row.total_price
        )?;
        writeln!(out, "            </tr>")?;
    }
    writeln!(out, "        </tbody>\n    </table>")
}

fn write_summary(out: &mut String, summary: &OrderSummary) -> core::fmt::Result {
    writeln!(out, "    <table class=\"summary-table\">")?;
    writeln!(out, "        <tr><th colspan=\"3\">ORDER SUMMARY</th></tr>")?;
    writeln!(
        out,
        "        <tr><th>Total Items</th><th>Total Pieces</th><th>Grand Total</th></tr>"
    )?;
    writeln!(
        out,
        "        <tr><td class=\"text-center\"><strong>{}</strong></td><td class=\"text-center\"><strong>{}</strong></td><td class=\"text-center\"><strong>{}</strong></td></tr>",
        summary.item_count, summary.total_pieces, summary.grand_total
    )?;
    writeln!(out, "    </table>")
}

fn write_breakdown(out: &mut String, rows: &[BreakdownLine]) -> core::fmt::Result {
    writeln!(out, "    <table style=\"margin-top: 20px;\">\n        <thead>")?;
    writeln!(
        out,
        "            <tr><th colspan=\"2\">DRESS TYPE BREAKDOWN</th></tr>"
    )?;
    writeln!(
        out,
        "            <tr><th>Dress Type</th><th>Total Pieces</th></tr>"
    )?;
    writeln!(out, "        </thead>\n        <tbody>")?;
    for row in rows {
        writeln!(
            out,
            "            <tr><td>{}</td><td class=\"text-center\"><strong>{} pieces</strong></td></tr>",
            escape(row.category.as_str()),
            row.pieces
        )?;
    }
    writeln!(out, "        </tbody>\n    </table>")
}

/// Escape text for element content and quoted attributes.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
