use std::io::Cursor;

use dresscalc_cli::{Shell, ShellConfig};
use dresscalc_core::Money;

fn run_script(shell: &mut Shell, script: &str) -> String {
    let mut output = Vec::new();
    shell.run(Cursor::new(script.to_string()), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn scripted_session_adds_lists_and_totals() {
    let mut shell = Shell::new(ShellConfig::default());
    let out = run_script(
        &mut shell,
        "add Lehenga | 1000 | 3 | 2\n\
         add Palazzo Suit | 500 | 2 | 2\n\
         list\n\
         toggle\n\
         list\n\
         breakdown\n",
    );

    assert!(out.contains("added #1"));
    assert!(out.contains("added #2"));
    assert!(out.contains("Latest Order"));
    assert!(out.contains("All Orders (2 items)"));
    assert!(out.contains("Items: 2 | Pieces: 10 | Grand Total: ₹8,000"));
    assert!(out.contains("Lehenga: 6 pieces"));
    assert!(out.contains("Palazzo Suit: 4 pieces"));

    let view = shell.session().aggregates();
    assert_eq!(view.total_price, Money::from_rupees(8000));
}

#[test]
fn mistakes_are_reported_and_the_loop_continues() {
    let mut shell = Shell::new(ShellConfig::default());
    let out = run_script(
        &mut shell,
        "add  | 1000 | 3 | 2\n\
         add Lehenga | abc | 3 | 2\n\
         dance\n\
         remove 7\n\
         export out.pdf pdf\n\
         add Lehenga | 1000 | 3 | 11\n\
         add Lehenga | 1000 | 3 | 2\n",
    );

    assert!(out.contains("missing: dress type"));
    assert!(out.contains("price per piece must be a non-negative number"));
    assert!(out.contains("unknown command 'dance'"));
    assert!(out.contains("nothing to remove"));
    assert!(out.contains("error: unknown export format 'pdf' (expected html, text or json)"));
    assert!(out.contains("colour count cannot exceed 10"));
    assert_eq!(shell.session().entries().len(), 1);
}

#[test]
fn quit_stops_reading_input() {
    let mut shell = Shell::new(ShellConfig::default());
    run_script(&mut shell, "quit\nadd Lehenga | 1000 | 3 | 2\n");
    assert!(shell.session().entries().is_empty());
}

#[test]
fn remove_by_serial_then_clear() {
    let mut shell = Shell::new(ShellConfig::default());
    let out = run_script(
        &mut shell,
        "add A | 10 | 1 | 1\n\
         add B | 20 | 1 | 1\n\
         add C | 30 | 1 | 1\n\
         remove 2\n\
         clear\n",
    );
    assert!(out.contains("removed\n"));
    assert!(out.contains("Items: 2 | Pieces: 2 | Grand Total: ₹40"));
    assert!(out.contains("removed 2 entries"));
    assert!(shell.session().entries().is_empty());
}

#[test]
fn export_writes_each_format() {
    let dir = tempfile::tempdir().unwrap();
    let html = dir.path().join("summary.html");
    let txt = dir.path().join("summary.txt");
    let json = dir.path().join("summary.out");

    let mut shell = Shell::new(ShellConfig::default());
    let script = format!(
        "add Lehenga | 1000 | 3 | 2\nexport {}\nexport {}\nexport {} json\n",
        html.display(),
        txt.display(),
        json.display()
    );
    let out = run_script(&mut shell, &script);
    assert_eq!(out.matches("exported 1 entries").count(), 3);

    let html = std::fs::read_to_string(html).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("₹6,000"));

    let txt = std::fs::read_to_string(txt).unwrap();
    assert!(txt.starts_with("WHOLESALE DRESS ORDER SUMMARY"));

    let json = std::fs::read_to_string(json).unwrap();
    assert!(json.contains("\"grand_total\": \"6000\""));
}
