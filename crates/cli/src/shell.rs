//! Read-eval-print loop over an [`OrderSession`].

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Context;
use chrono::Local;
use tracing::{info, warn};

use dresscalc_export::{RenderFormat, SummaryExporter};
use dresscalc_orders::{
    DressType, FocusMode, OrderEntry, OrderSession, VariantKind, variant_label,
};

use crate::command::{Command, HELP, RemoveTarget};
use crate::config::ShellConfig;

/// Whether the loop should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell {
    session: OrderSession,
    exporter: SummaryExporter,
}

impl Shell {
    pub fn new(config: ShellConfig) -> Self {
        Self {
            session: OrderSession::with_limits(config.limits),
            exporter: SummaryExporter::new(config.export),
        }
    }

    pub fn session(&self) -> &OrderSession {
        &self.session
    }

    /// Process lines until EOF or `quit`. Command mistakes are reported on
    /// `output` and do not stop the loop; only IO failures do.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> anyhow::Result<()> {
        writeln!(output, "Wholesale Dress Calculator (type 'help' for commands)")?;
        for line in input.lines() {
            let line = line.context("failed to read input")?;
            let flow = match Command::parse(&line) {
                Ok(Some(command)) => self.execute(command, &mut output)?,
                Ok(None) => Flow::Continue,
                Err(err) => {
                    warn!(error = %err, "rejected command");
                    writeln!(output, "error: {err}")?;
                    Flow::Continue
                }
            };
            output.flush()?;
            if flow == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> anyhow::Result<Flow> {
        match command {
            Command::Add {
                category,
                unit_price,
                size_count,
                colour_count,
            } => {
                self.session.set_category(category);
                self.session.set_unit_price(unit_price);
                self.session.set_size_count(size_count);
                self.session.set_colour_count(colour_count);
                match self.session.submit_draft() {
                    Ok(entry) => {
                        let serial = self.session.entries().len();
                        writeln!(out, "added #{serial}")?;
                        write_entry(out, serial, &entry)?;
                        write_totals(out, &self.session)?;
                    }
                    Err(err) => writeln!(out, "error: {err}")?,
                }
            }
            Command::Remove(target) => {
                let id = match target {
                    RemoveTarget::Serial(n) => self.session.entry_at(n).map(OrderEntry::id_typed),
                    RemoveTarget::Id(id) => Some(id),
                };
                let removed = id.is_some_and(|id| self.session.remove(id));
                if removed {
                    writeln!(out, "removed")?;
                    write_totals(out, &self.session)?;
                } else {
                    writeln!(out, "nothing to remove")?;
                }
            }
            Command::List => self.write_list(out)?,
            Command::Toggle => {
                let mode = self.session.toggle_focus();
                writeln!(out, "{}", focus_label(mode, self.session.entries().len()))?;
            }
            Command::Totals => write_totals(out, &self.session)?,
            Command::Breakdown => {
                let breakdown = self.session.breakdown();
                if breakdown.is_empty() {
                    writeln!(out, "No orders added yet")?;
                }
                for row in breakdown.iter() {
                    writeln!(out, "{}: {} pieces", row.category, row.pieces)?;
                }
            }
            Command::Types => {
                for dress_type in DressType::ALL {
                    writeln!(out, "{dress_type}")?;
                }
                let max = self.session.limits().max_variant_count;
                writeln!(
                    out,
                    "sizes: {} .. {}; colours: {} .. {}",
                    variant_label(VariantKind::Size, 1),
                    variant_label(VariantKind::Size, max),
                    variant_label(VariantKind::Colour, 1),
                    variant_label(VariantKind::Colour, max),
                )?;
            }
            Command::Clear => {
                let removed = self.session.clear();
                writeln!(out, "removed {removed} entries")?;
            }
            Command::Export { path, format } => self.export(&path, format, out)?,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn write_list(&self, out: &mut impl Write) -> anyhow::Result<()> {
        let all = self.session.entries();
        if all.is_empty() {
            writeln!(out, "No orders added yet")?;
            return Ok(());
        }
        writeln!(out, "{}", focus_label(self.session.focus(), all.len()))?;

        let visible = self.session.visible_entries();
        // serials always refer to the full cart order
        let first_serial = all.len() - visible.len() + 1;
        for (offset, entry) in visible.iter().enumerate() {
            write_entry(out, first_serial + offset, entry)?;
        }
        write_totals(out, &self.session)?;
        Ok(())
    }

    fn export(
        &self,
        path: &Path,
        format: Option<RenderFormat>,
        out: &mut impl Write,
    ) -> anyhow::Result<()> {
        let format = format
            .or_else(|| {
                path.extension()
                    .and_then(|e| e.to_str())
                    .and_then(RenderFormat::from_extension)
            })
            .unwrap_or_default();

        let document = self
            .exporter
            .export_session(&self.session, Local::now().fixed_offset());
        let rendered = format.renderer().render(&document)?;

        match std::fs::write(path, rendered) {
            Ok(()) => {
                info!(path = %path.display(), ?format, "summary written");
                writeln!(out, "exported {} entries to {}", document.line_items.len(), path.display())?;
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "export failed");
                writeln!(out, "error: could not write {}: {err}", path.display())?;
            }
        }
        Ok(())
    }
}

fn focus_label(mode: FocusMode, count: usize) -> String {
    match mode {
        FocusMode::ShowAll => format!("All Orders ({count} items)"),
        FocusMode::LatestOnly => "Latest Order".to_string(),
    }
}

fn write_entry(out: &mut impl Write, serial: usize, entry: &OrderEntry) -> std::io::Result<()> {
    writeln!(
        out,
        "  {serial}. {} | {} per piece | {} x {} = {} pieces | {}   [{}]",
        entry.category(),
        entry.unit_price(),
        variant_label(VariantKind::Size, entry.size_count()),
        variant_label(VariantKind::Colour, entry.colour_count()),
        entry.total_pieces(),
        entry.total_price(),
        entry.id_typed(),
    )
}

fn write_totals(out: &mut impl Write, session: &OrderSession) -> std::io::Result<()> {
    let view = session.aggregates();
    writeln!(
        out,
        "Items: {} | Pieces: {} | Grand Total: {}",
        view.item_count, view.total_pieces, view.total_price
    )
}
