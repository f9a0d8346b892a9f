// File: src/report.rs
//! Console summaries for the binaries.

use crate::core::engine::ResourceSummary;
use crate::core::filter::FilterReport;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::{execute, queue};
use std::io::{self, Write};
use std::path::Path;

fn heading<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    queue!(
        out,
        SetForegroundColor(Color::Cyan),
        SetAttribute(Attribute::Bold),
        Print(format!("{}\n{title}\n{}\n", "=".repeat(50), "=".repeat(50))),
        SetAttribute(Attribute::Reset),
        ResetColor
    )
}

/// Totals and the most frequent entries.
pub fn write_summary<W: Write>(
    out: &mut W,
    title: &str,
    summary: &ResourceSummary,
    output: &Path,
) -> io::Result<()> {
    let meta = &summary.metadata;
    heading(out, title)?;
    writeln!(out, "Phase: {}", meta.phase)?;
    writeln!(out, "Total words in dictionary: {}", meta.total_words)?;
    writeln!(out, "Words with frequency data: {}", meta.words_with_frequency)?;
    writeln!(out, "Total unique syllables: {}", meta.total_syllables)?;
    writeln!(out, "Syllables with frequency data: {}", meta.syllables_with_frequency)?;

    if !summary.top_words.is_empty() {
        writeln!(out, "\nTop {} most frequent words:", summary.top_words.len())?;
        for entry in &summary.top_words {
            writeln!(out, "  {}: {}", entry.word, entry.frequency)?;
        }
    }
    if !summary.top_syllables.is_empty() {
        writeln!(out, "\nTop {} most frequent syllables:", summary.top_syllables.len())?;
        for entry in &summary.top_syllables {
            writeln!(out, "  {}: {}", entry.syllable, entry.frequency)?;
        }
    }

    execute!(
        out,
        SetForegroundColor(Color::Green),
        Print(format!("\nOutput saved to: {}\n", output.display())),
        ResetColor
    )
}

/// Counts kept and removed, plus the removed-entry preview.
pub fn write_filter_report<W: Write>(out: &mut W, report: &FilterReport) -> io::Result<()> {
    heading(out, "FILTER REPORT")?;
    if !report.applied {
        writeln!(out, "No syllables in resource; nothing filtered.")?;
        return Ok(());
    }
    writeln!(out, "Original syllables: {}", report.original)?;
    writeln!(out, "Filtered syllables: {}", report.kept)?;
    writeln!(out, "Removed syllables: {}", report.removed)?;
    if !report.removed_preview.is_empty() {
        queue!(out, SetForegroundColor(Color::Yellow))?;
        writeln!(out, "\nFirst {} removed syllables:", report.removed_preview.len())?;
        for entry in &report.removed_preview {
            writeln!(out, "  - {} (frequency: {})", entry.syllable, entry.frequency)?;
        }
        queue!(out, ResetColor)?;
    }
    out.flush()
}
