//! Shell command grammar.

use std::path::PathBuf;

use thiserror::Error;

use dresscalc_core::EntryId;
use dresscalc_export::{ExportError, RenderFormat};

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error(transparent)]
    Format(#[from] ExportError),
}

/// What `remove` points at: a serial number from `list`, or a full entry id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveTarget {
    Serial(usize),
    Id(EntryId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        category: String,
        unit_price: String,
        size_count: String,
        colour_count: String,
    },
    Remove(RemoveTarget),
    List,
    Toggle,
    Totals,
    Breakdown,
    Types,
    Clear,
    Export {
        path: PathBuf,
        format: Option<RenderFormat>,
    },
    Help,
    Quit,
}

const ADD_USAGE: &str = "add <dress type> | <price per piece> | <sizes> | <colours>";
const REMOVE_USAGE: &str = "remove <S.No | entry id>";
const EXPORT_USAGE: &str = "export <path> [html|text|json]";

pub const HELP: &str = "\
commands:
  add <dress type> | <price per piece> | <sizes> | <colours>
  remove <S.No | entry id>
  list                     show entries (latest only or all, see toggle)
  toggle                   switch between latest-only and all entries
  totals                   items, pieces and grand total
  breakdown                pieces per dress type
  types                    dress type catalogue
  clear                    remove every entry
  export <path> [html|text|json]
  help
  quit";

impl Command {
    /// Parse one input line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((w, r)) => (w, r.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "add" => parse_add(rest)?,
            "remove" | "rm" => Command::Remove(parse_remove(rest)?),
            "list" | "ls" => Command::List,
            "toggle" => Command::Toggle,
            "totals" => Command::Totals,
            "breakdown" => Command::Breakdown,
            "types" => Command::Types,
            "clear" => Command::Clear,
            "export" => parse_export(rest)?,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

/// Fields are `|`-separated so dress types may contain spaces. Empty fields
/// are passed through; the session reports them as missing.
fn parse_add(rest: &str) -> Result<Command, CommandError> {
    let fields: Vec<&str> = rest.split('|').map(str::trim).collect();
    match fields.as_slice() {
        [category, unit_price, size_count, colour_count] => Ok(Command::Add {
            category: category.to_string(),
            unit_price: unit_price.to_string(),
            size_count: size_count.to_string(),
            colour_count: colour_count.to_string(),
        }),
        _ => Err(CommandError::Usage(ADD_USAGE)),
    }
}

fn parse_remove(rest: &str) -> Result<RemoveTarget, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::Usage(REMOVE_USAGE));
    }
    if let Ok(serial) = rest.parse::<usize>() {
        return Ok(RemoveTarget::Serial(serial));
    }
    rest.parse::<EntryId>()
        .map(RemoveTarget::Id)
        .map_err(|_| CommandError::Usage(REMOVE_USAGE))
}

fn parse_export(rest: &str) -> Result<Command, CommandError> {
    let mut parts = rest.split_whitespace();
    let path = parts.next().ok_or(CommandError::Usage(EXPORT_USAGE))?;
    let format = parts.next().map(str::parse::<RenderFormat>).transpose()?;
    if parts.next().is_some() {
        return Err(CommandError::Usage(EXPORT_USAGE));
    }
    Ok(Command::Export {
        path: PathBuf::from(path),
        format,
    })
}
