use oli_cli::logging::{LogConfig, LogFormat, default_directives};
use oli_cli::render::{
    categories_table, chains_table, conversions_table, fields_table, issues_table, kind_label,
    summary_table,
};
use std::collections::BTreeMap;

use comfy_table::{Cell, Row, Table};
use oli_model::{
    ChainEntry, ConversionRecord, Diagnostic, FieldIssue, FieldKind, ParseResult, RowData,
    Vocabulary,
};
use oli_standards::{LABEL_SCHEMA, categories, chain_aliases, chains};
use tracing::level_filters::LevelFilter;

fn sample_result() -> ParseResult {
    let mut row = RowData::new();
    row.insert("chain_id", "");
    row.insert("usage_category", "defi");
    ParseResult {
        rows: vec![row],
        mapped_columns: LABEL_SCHEMA[1..=1].to_vec(),
        diagnostics: vec![
            Diagnostic::column_warning("notes", "Column 'notes' not recognized, ignored"),
            FieldIssue::warning(0, "usage_category", "'defi' is an alias")
                .with_suggestions(vec!["dex".to_string()])
                .as_conversion()
                .into(),
            FieldIssue::error(0, "chain_id", "Chain is required").into(),
        ],
        conversions: vec![ConversionRecord {
            row_index: 0,
            field_id: "chain_id".to_string(),
            original_value: "eip155:999999".to_string(),
            converted_value: String::new(),
        }],
    }
}

fn row_text(row: &Row) -> String {
    let cells: Vec<String> = row.cell_iter().map(Cell::content).collect();
    cells.join(" | ").trim_end().to_string()
}

/// Header and cell text, one line per row, without borders or styling.
fn cell_text(table: &Table) -> String {
    table
        .header()
        .into_iter()
        .chain(table.row_iter())
        .map(row_text)
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn kind_labels() {
    assert_eq!(kind_label(FieldKind::Enum(Vocabulary::Chain)), "enum (chain)");
    assert_eq!(kind_label(FieldKind::AddressLike), "address");
}

#[test]
fn reference_listings_include_entries() {
    let fields = fields_table(LABEL_SCHEMA).to_string();
    assert!(fields.contains("chain_id"));
    assert!(fields.contains("deployment_tx"));

    let chains = chains_table(&chains(), &chain_aliases()).to_string();
    assert!(chains.contains("eip155:8453"));

    let categories = categories_table(&categories()).to_string();
    assert!(categories.contains("lending"));
}

#[test]
fn report_tables() {
    let result = sample_result();
    let summary = summary_table(&result).to_string();
    assert!(summary.contains("chain_id"));
    assert!(summary.contains("no"));

    let issues = issues_table(&result).unwrap().to_string();
    assert!(issues.contains("convert to dex"));
    assert!(issues.contains("column 'notes'"));
    let error_at = issues.find("Chain is required").unwrap();
    let warning_at = issues.find("not recognized").unwrap();
    assert!(error_at < warning_at);

    let conversions = conversions_table(&result).unwrap().to_string();
    assert!(conversions.contains("(cleared)"));
}

#[test]
fn issues_table_snapshot() {
    let issues = issues_table(&sample_result()).unwrap();
    insta::assert_snapshot!(cell_text(&issues), @r"
    Severity | Row | Location | Message | Suggestions
    error | 1 | chain_id | Chain is required |
    warning | - | column 'notes' | Column 'notes' not recognized, ignored |
    warning | 1 | usage_category | 'defi' is an alias | convert to dex
    ");
}

#[test]
fn chains_table_groups_aliases() {
    let chains = vec![
        ChainEntry {
            caip2: "eip155:1".to_string(),
            short_id: "ethereum".to_string(),
            name: "Ethereum".to_string(),
        },
        ChainEntry {
            caip2: "eip155:42161".to_string(),
            short_id: "arbitrum".to_string(),
            name: "Arbitrum One".to_string(),
        },
    ];
    let aliases = BTreeMap::from([
        ("mainnet".to_string(), "eip155:1".to_string()),
        ("arb".to_string(), "eip155:42161".to_string()),
        ("eth".to_string(), "eip155:1".to_string()),
    ]);
    insta::assert_snapshot!(cell_text(&chains_table(&chains, &aliases)), @r"
    Chain ID | Short ID | Name | Aliases
    eip155:1 | ethereum | Ethereum | eth, mainnet
    eip155:42161 | arbitrum | Arbitrum One | arb
    ");
}

#[test]
fn clean_result_has_no_issue_table() {
    let result = ParseResult {
        rows: vec![RowData::new()],
        ..ParseResult::default()
    };
    assert!(issues_table(&result).is_none());
    assert!(conversions_table(&result).is_none());
}

#[test]
fn logging_defaults() {
    let config = LogConfig::default()
        .with_level(LevelFilter::INFO)
        .with_format(LogFormat::Json);
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.use_env_filter);
    assert!(default_directives(LevelFilter::TRACE).contains("oli_core=trace"));
}
