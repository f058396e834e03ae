//! Rendering of the loaded count, selected courses and mark statistics.

use std::io::{self, Write};

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use course_core::{Selection, Summary};
use course_model::{CourseRecord, SortKey, YearFilter};
use serde::Serialize;

use crate::number::format_number;

/// Shown in place of a deviation that needs at least two marks.
pub const UNDEFINED_STD_DEV: &str = "undefined (requires at least 2 courses)";

pub fn write_loaded_count<W: Write>(out: &mut W, count: usize) -> io::Result<()> {
    writeln!(out, "Total Number of Courses Loaded: {count}")
}

/// Plain line-per-course listing followed by statistics and the count.
pub fn write_text_report<W: Write>(out: &mut W, selection: &Selection<'_>) -> io::Result<()> {
    writeln!(out, "Filtered Courses:")?;
    for record in &selection.records {
        writeln!(
            out,
            "{} - Mark: {}",
            record.full_title(),
            format_number(record.mark())
        )?;
    }
    if let Some(summary) = &selection.summary {
        writeln!(
            out,
            "Mean for selected courses: {}",
            format_number(summary.mean)
        )?;
        writeln!(out, "Standard Deviation: {}", format_std_dev(summary))?;
    }
    writeln!(out, "Number of courses selected: {}", selection.len())
}

pub fn write_table_report<W: Write>(out: &mut W, selection: &Selection<'_>) -> io::Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Year"),
        header_cell("Course"),
        header_cell("Mark"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    for record in &selection.records {
        table.add_row(vec![
            code_cell(record.code()),
            Cell::new(record.year()),
            Cell::new(record.full_title()),
            Cell::new(format_number(record.mark())),
        ]);
    }
    writeln!(out, "{table}")?;

    let mut totals = Table::new();
    totals.set_header(vec![header_cell("Statistic"), header_cell("Value")]);
    apply_table_style(&mut totals);
    align_column(&mut totals, 1, CellAlignment::Right);
    totals.add_row(vec![
        Cell::new("Selected").add_attribute(Attribute::Bold),
        Cell::new(selection.len()).add_attribute(Attribute::Bold),
    ]);
    match &selection.summary {
        Some(summary) => {
            totals.add_row(vec![Cell::new("Mean"), Cell::new(format_number(summary.mean))]);
            totals.add_row(vec![
                Cell::new("Standard Deviation"),
                std_dev_cell(summary),
            ]);
        }
        None => {
            totals.add_row(vec![Cell::new("Mean"), dim_cell("-")]);
            totals.add_row(vec![Cell::new("Standard Deviation"), dim_cell("-")]);
        }
    }
    writeln!(out, "{totals}")
}

#[derive(Serialize)]
struct JsonReport<'a> {
    loaded: usize,
    sort: Option<SortKey>,
    filter: Option<YearFilter>,
    selected: usize,
    courses: &'a [&'a CourseRecord],
    summary: Option<Summary>,
}

/// Machine-readable document of the whole run.
pub fn write_json_report<W: Write>(
    out: &mut W,
    loaded: usize,
    sort: Option<SortKey>,
    selection: &Selection<'_>,
) -> io::Result<()> {
    let report = JsonReport {
        loaded,
        sort,
        filter: selection.filter,
        selected: selection.len(),
        courses: &selection.records,
        summary: selection.summary,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)
}

pub fn format_std_dev(summary: &Summary) -> String {
    match summary.std_dev {
        Some(value) => format_number(value),
        None => UNDEFINED_STD_DEV.to_string(),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn code_cell(code: i32) -> Cell {
    Cell::new(code)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn std_dev_cell(summary: &Summary) -> Cell {
    match summary.std_dev {
        Some(value) => Cell::new(format_number(value)),
        None => dim_cell("undefined"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
