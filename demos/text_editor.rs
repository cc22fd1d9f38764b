//! Text Editor Undo/Redo
//!
//! This example drives a tiny line-based editor with a `History` of
//! document snapshots.
//!
//! Key concepts:
//! - Every edit commits a new present with `evolve`
//! - Undo and redo are `back` and `forward`, no-ops at either end
//! - Editing after an undo discards the redo branch
//! - Old snapshots stay valid and cheap to keep
//!
//! Run with: cargo run --example text_editor

use rewind::History;

#[derive(Clone, Debug, PartialEq)]
struct Document {
    lines: Vec<String>,
}

impl Document {
    fn empty() -> Self {
        Self { lines: Vec::new() }
    }

    fn append(&self, line: &str) -> Self {
        let mut lines = self.lines.clone();
        lines.push(line.to_string());
        Self { lines }
    }

    fn render(&self) -> String {
        if self.lines.is_empty() {
            "<empty>".to_string()
        } else {
            self.lines.join(" / ")
        }
    }
}

fn show(label: &str, history: &History<Document>) {
    println!(
        "{label:<22} {} (undo: {}, redo: {})",
        history.current().render(),
        history.past_len(),
        history.future_len()
    );
}

fn main() {
    println!("=== Text Editor Undo/Redo Example ===\n");

    let history = History::new(Document::empty());
    show("Start", &history);

    let history = history.evolve(|doc| doc.append("Dear team,"));
    let history = history.evolve(|doc| doc.append("Ship it on Friday."));
    let drafted = history.evolve(|doc| doc.append("Cheers"));
    show("After three edits", &drafted);

    let undone = drafted.back().back();
    show("Undo twice", &undone);

    let redone = undone.forward();
    show("Redo once", &redone);

    let rewritten = redone.evolve(|doc| doc.append("Thanks!"));
    show("New edit after undo", &rewritten);
    show("Redo (nothing to redo)", &rewritten.forward());

    // The earlier snapshot is untouched by later edits
    show("Earlier snapshot", &drafted);

    let line_counts = rewritten.map(|doc| doc.lines.len());
    println!(
        "\nLine counts, newest past first: {:?}",
        line_counts.past().collect::<Vec<_>>()
    );

    println!("\n=== Example Complete ===");
}
