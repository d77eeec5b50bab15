use oli_core::{ImportPipeline, ImportReport, clean_csv, parse_csv, parse_csv_with};
use oli_model::{Diagnostic, ProjectRecord, ReferenceDataset, Severity};
use oli_standards::{LABEL_SCHEMA, PROJECT_SCHEMA, reference_dataset};
use proptest::prelude::*;

const ADDRESS: &str = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed";

fn reference() -> ReferenceDataset {
    reference_dataset(vec![ProjectRecord {
        owner_project: "uniswap".to_string(),
        display_name: Some("Uniswap".to_string()),
        website: Some("https://uniswap.org".to_string()),
        main_github: Some("https://github.com/Uniswap".to_string()),
    }])
}

#[test]
fn header_only_file_is_fatal() {
    let result = parse_csv("address,chain_id\n", LABEL_SCHEMA, &reference());
    assert!(result.rows.is_empty());
    assert_eq!(
        result.diagnostics,
        vec![Diagnostic::fatal("CSV must contain a header and at least one data row")]
    );
    assert!(!result.is_submittable());
}

#[test]
fn duplicate_mapping_yields_zero_rows() {
    let text = format!("address,chain,Chain ID\n{ADDRESS},base,base\n");
    let result = parse_csv(&text, LABEL_SCHEMA, &reference());
    assert!(result.has_fatal_errors());
    assert!(result.rows.is_empty());
    assert!(result.mapped_columns.is_empty());
}

#[test]
fn missing_required_column_yields_zero_rows() {
    let result = parse_csv("Address,notes\n0x1,hello\n", LABEL_SCHEMA, &reference());
    assert_eq!(result.fatal_errors(), vec!["Missing required columns: Chain"]);
    assert!(result.rows.is_empty());
}

#[test]
fn unmapped_header_warns_without_aborting() {
    let text = format!("address,chain_id,notes\n{ADDRESS},eip155:8453,hello\n");
    let result = parse_csv(&text, LABEL_SCHEMA, &reference());
    assert!(!result.has_fatal_errors());
    assert_eq!(result.rows.len(), 1);
    assert_eq!(result.mapped_field_ids(), vec!["address", "chain_id"]);
    assert!(matches!(
        result.diagnostics.as_slice(),
        [Diagnostic::ColumnWarning { header, .. }] if header == "notes"
    ));
    assert!(result.is_submittable());
}

#[test]
fn every_row_has_every_mapped_column() {
    let text = format!(
        "Address,Chain,Usage Category,Is Proxy\n{ADDRESS},1,dex,yes\n{ADDRESS}\n"
    );
    let result = parse_csv(&text, LABEL_SCHEMA, &reference());
    assert_eq!(result.rows.len(), 2);
    for row in &result.rows {
        assert_eq!(row.len(), 4);
    }
    assert_eq!(result.rows[0].value("chain_id"), "eip155:1");
    assert_eq!(result.rows[0].value("is_proxy"), "true");
    assert_eq!(result.rows[1].value("chain_id"), "");
}

#[test]
fn conversions_and_issues_are_collected_per_cell() {
    let text = format!(
        "address,chain_id,usage_category,owner_project\n\
         {ADDRESS},Base,defi,uniswap\n\
         {ADDRESS},eip155:999999,dex,unknownproj\n\
         0x12,eip155:10,dex,\n"
    );
    let result = parse_csv(&text, LABEL_SCHEMA, &reference());
    assert!(!result.has_fatal_errors());
    assert_eq!(result.rows.len(), 3);

    let converted: Vec<(usize, &str, &str)> = result
        .conversions
        .iter()
        .map(|record| {
            (
                record.row_index,
                record.original_value.as_str(),
                record.converted_value.as_str(),
            )
        })
        .collect();
    assert_eq!(
        converted,
        vec![(0, "Base", "eip155:8453"), (1, "eip155:999999", "")]
    );

    let issues = result.cell_issues();
    let alias = &issues["0-usage_category"][0];
    assert_eq!(alias.severity, Severity::Warning);
    assert!(alias.is_conversion);
    assert_eq!(alias.suggestions, vec!["dex"]);

    let chain = &issues["1-chain_id"][0];
    assert!(chain.is_blocking());
    assert!(chain.message.contains("eip155:999999"));

    assert!(issues["1-owner_project"][0].offers_add_new);
    assert!(issues["2-address"][0].is_blocking());
    assert!(!issues.contains_key("2-owner_project"));

    assert_eq!(result.blocking_count(), 3);
    assert!(!result.is_submittable());
}

#[test]
fn ragged_rows_warn() {
    let text = format!("address,chain_id\n{ADDRESS},eip155:1,extra\n");
    let result = parse_csv(&text, LABEL_SCHEMA, &reference());
    assert_eq!(result.rows.len(), 1);
    assert_eq!(
        result.diagnostics,
        vec![Diagnostic::row_warning(
            0,
            "Row 1 has more cells than header; extra cells ignored"
        )]
    );
}

#[test]
fn caller_supplied_address_validator() {
    let reject = |_: &str| Some("Bad checksum".to_string());
    let text = format!("address,chain_id\n{ADDRESS},eip155:1\n");
    let result = parse_csv_with(&text, LABEL_SCHEMA, &reference(), &reject);
    assert_eq!(result.blocking_count(), 1);
}

#[test]
fn project_schema_flags_near_duplicates() {
    let text = "owner_project,display_name,website\n\
                uniswap-v4,Uniswap,https://www.uniswap.io\n";
    let reference = reference();
    let result = ImportPipeline::new(PROJECT_SCHEMA, &reference).parse(text);
    assert_eq!(result.rows.len(), 1);
    assert_eq!(result.blocking_count(), 0);
    let issues = result.cell_issues();
    assert!(issues.contains_key("0-display_name"));
    assert!(issues.contains_key("0-website"));
    assert!(result.is_submittable());
}

#[test]
fn report_envelope_carries_summary() {
    let text = format!("address,chain_id\n{ADDRESS},base\n");
    let result = parse_csv(&text, LABEL_SCHEMA, &reference());
    let report = ImportReport::new("labels.csv", "labels", &result);
    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(json["schema"], "oli-import.report");
    assert_eq!(json["summary"]["rows"], 1);
    assert_eq!(json["summary"]["conversions"], 1);
    assert_eq!(json["summary"]["submittable"], true);
    assert_eq!(json["rows"][0]["chain_id"], "eip155:8453");
    assert!(json["generated_at"].as_str().is_some());
}

#[test]
fn clean_csv_uses_field_ids() {
    let text = format!("Chain,Address\nbase,{ADDRESS}\n");
    let result = parse_csv(&text, LABEL_SCHEMA, &reference());
    insta::assert_snapshot!(clean_csv(&result).unwrap().trim_end(), @r#"
    "chain_id","address"
    "eip155:8453","0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"
    "#);
}

fn cell() -> impl Strategy<Value = String> {
    prop_oneof![
        "[ -~]{0,12}",
        Just("1".to_string()),
        Just("Base".to_string()),
        Just("eip155:999999".to_string()),
        Just("YES".to_string()),
        Just("defi".to_string()),
    ]
}

proptest! {
    #[test]
    fn clean_rows_parse_back_identically(
        rows in prop::collection::vec(prop::collection::vec(cell(), 4), 1..6)
    ) {
        let reference = reference();
        let header = "address,chain_id,usage_category,is_proxy";
        let mut text = String::from(header);
        for row in &rows {
            text.push('\n');
            let quoted: Vec<String> = row
                .iter()
                .map(|cell| format!("\"{}\"", cell.replace('"', "\"\"")))
                .collect();
            text.push_str(&quoted.join(","));
        }
        let first = parse_csv(&text, LABEL_SCHEMA, &reference);
        prop_assert!(!first.has_fatal_errors());

        let second = parse_csv(&clean_csv(&first).unwrap(), LABEL_SCHEMA, &reference);
        prop_assert_eq!(&first.rows, &second.rows);
        prop_assert!(second.conversions.is_empty());
    }
}
