//! Table rendering for reports and reference listings.

use std::collections::BTreeMap;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use oli_model::{
    CategoryEntry, ChainEntry, Diagnostic, FieldKind, ParseResult, SchemaField, Severity,
};

/// Reference listings: compact, fixed width.
pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_report_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn kind_label(kind: FieldKind) -> String {
    match kind {
        FieldKind::Text => "text".to_string(),
        FieldKind::Boolean => "boolean".to_string(),
        FieldKind::Enum(vocabulary) => format!("enum ({vocabulary})"),
        FieldKind::AddressLike => "address".to_string(),
    }
}

pub fn fields_table(fields: &[SchemaField]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Label"),
        header_cell("Required"),
        header_cell("Kind"),
        header_cell("Checks"),
    ]);
    apply_table_style(&mut table);
    for field in fields {
        let mut checks = Vec::new();
        if field.validator.is_some() {
            checks.push("format");
        }
        if field.similarity.is_some() {
            checks.push("duplicates");
        }
        table.add_row(vec![
            Cell::new(field.id),
            Cell::new(field.label),
            if field.required {
                Cell::new("yes").fg(Color::Cyan)
            } else {
                dim_cell("no")
            },
            Cell::new(kind_label(field.kind)),
            Cell::new(checks.join(", ")),
        ]);
    }
    align_column(&mut table, 2, CellAlignment::Center);
    table
}

pub fn chains_table(chains: &[ChainEntry], aliases: &BTreeMap<String, String>) -> Table {
    let mut by_chain: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for (alias, caip2) in aliases {
        by_chain.entry(caip2.as_str()).or_default().push(alias.as_str());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Chain ID"),
        header_cell("Short ID"),
        header_cell("Name"),
        header_cell("Aliases"),
    ]);
    apply_table_style(&mut table);
    for chain in chains {
        let aliases = by_chain
            .get(chain.caip2.as_str())
            .map(|aliases| aliases.join(", "))
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(&chain.caip2),
            Cell::new(&chain.short_id),
            Cell::new(&chain.name),
            Cell::new(aliases),
        ]);
    }
    table
}

pub fn categories_table(categories: &[CategoryEntry]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Name"),
        header_cell("Group"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    for category in categories {
        table.add_row(vec![
            Cell::new(&category.id),
            Cell::new(&category.name),
            dim_cell(&category.main_category),
            Cell::new(&category.description),
        ]);
    }
    table
}

/// One-row overview of an import.
pub fn summary_table(result: &ParseResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows"),
        header_cell("Mapped columns"),
        header_cell("Fatal"),
        header_cell("Blocking"),
        header_cell("Warnings"),
        header_cell("Conversions"),
        header_cell("Submittable"),
    ]);
    apply_report_table_style(&mut table);
    let submittable = if result.is_submittable() {
        Cell::new("yes").fg(Color::Green).add_attribute(Attribute::Bold)
    } else {
        Cell::new("no").fg(Color::Red).add_attribute(Attribute::Bold)
    };
    table.add_row(vec![
        Cell::new(result.rows.len()),
        Cell::new(result.mapped_field_ids().join(", ")),
        count_cell(result.fatal_errors().len(), Color::Red),
        count_cell(result.blocking_count(), Color::Red),
        count_cell(result.warning_count(), Color::Yellow),
        count_cell(result.conversions.len(), Color::Cyan),
        submittable,
    ]);
    for index in [0, 2, 3, 4, 5] {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table
}

struct IssueLine<'a> {
    blocking: bool,
    row: Option<usize>,
    location: String,
    message: &'a str,
    suggestions: String,
}

fn issue_line(diagnostic: &Diagnostic) -> IssueLine<'_> {
    match diagnostic {
        Diagnostic::FatalError { message } => IssueLine {
            blocking: true,
            row: None,
            location: "file".to_string(),
            message,
            suggestions: String::new(),
        },
        Diagnostic::ColumnWarning { header, message } => IssueLine {
            blocking: false,
            row: None,
            location: format!("column '{header}'"),
            message,
            suggestions: String::new(),
        },
        Diagnostic::RowWarning { row_index, message } => IssueLine {
            blocking: false,
            row: Some(*row_index),
            location: "row".to_string(),
            message,
            suggestions: String::new(),
        },
        Diagnostic::FieldIssue(issue) => {
            let mut suggestions = issue.suggestions.join(", ");
            if issue.offers_add_new {
                suggestions = "register new project".to_string();
            } else if issue.is_conversion && !suggestions.is_empty() {
                suggestions = format!("convert to {suggestions}");
            }
            IssueLine {
                blocking: issue.severity == Severity::Error,
                row: Some(issue.row_index),
                location: issue.field_id.clone(),
                message: &issue.message,
                suggestions,
            }
        }
    }
}

/// Every diagnostic, blocking first, then by row. `None` when clean.
pub fn issues_table(result: &ParseResult) -> Option<Table> {
    if result.diagnostics.is_empty() {
        return None;
    }
    let mut lines: Vec<IssueLine<'_>> = result.diagnostics.iter().map(issue_line).collect();
    lines.sort_by_key(|line| (!line.blocking, line.row));

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Row"),
        header_cell("Location"),
        header_cell("Message"),
        header_cell("Suggestions"),
    ]);
    apply_report_table_style(&mut table);
    for line in lines {
        let severity = if line.blocking {
            Cell::new("error").fg(Color::Red).add_attribute(Attribute::Bold)
        } else {
            Cell::new("warning").fg(Color::Yellow)
        };
        let row = match line.row {
            Some(index) => Cell::new(index + 1),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            severity,
            row,
            Cell::new(line.location),
            Cell::new(line.message),
            Cell::new(line.suggestions),
        ]);
    }
    align_column(&mut table, 0, CellAlignment::Center);
    align_column(&mut table, 1, CellAlignment::Right);
    Some(table)
}

/// Values rewritten during parsing. `None` when nothing changed.
pub fn conversions_table(result: &ParseResult) -> Option<Table> {
    if result.conversions.is_empty() {
        return None;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Field"),
        header_cell("Original"),
        header_cell("Converted"),
    ]);
    apply_report_table_style(&mut table);
    for record in &result.conversions {
        let converted = if record.is_blanking() {
            dim_cell("(cleared)")
        } else {
            Cell::new(&record.converted_value)
        };
        table.add_row(vec![
            Cell::new(record.row_index + 1),
            Cell::new(&record.field_id),
            Cell::new(&record.original_value),
            converted,
        ]);
    }
    align_column(&mut table, 0, CellAlignment::Right);
    Some(table)
}
