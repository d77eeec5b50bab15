use anyhow::Result;
use oli_core::{ImportPipeline, import_file, write_clean_csv};
use oli_model::ParseResult;
use oli_standards::{
    ProjectDirectory, SchemaKind, categories, chain_aliases, chains, load_reference_dataset,
    reference_dataset,
};
use tracing::{info, info_span, warn};

use oli_cli::render::{categories_table, chains_table, fields_table};

use crate::cli::{CheckArgs, FieldsArgs};

pub struct CheckOutcome {
    pub source: String,
    pub schema: SchemaKind,
    pub result: ParseResult,
    /// Why the project directory is empty, if its fetch failed.
    pub directory_error: Option<String>,
    pub clean_output: Option<std::path::PathBuf>,
}

pub fn run_check(args: &CheckArgs) -> Result<CheckOutcome> {
    let source = args.file.display().to_string();
    let span = info_span!("check", file = %source);
    let _guard = span.enter();

    let schema = SchemaKind::from(args.schema);
    let owned;
    let directory: &ProjectDirectory = if args.offline {
        owned = ProjectDirectory::offline(Vec::new());
        &owned
    } else if let Some(url) = &args.projects_url {
        owned = ProjectDirectory::http(url.clone());
        &owned
    } else {
        ProjectDirectory::global()
    };
    let reference = if schema.needs_project_directory() {
        load_reference_dataset(directory)
    } else {
        reference_dataset(Vec::new())
    };

    let pipeline = ImportPipeline::new(schema.fields(), &reference);
    let result = import_file(&args.file, &pipeline)?;

    let clean_output = match &args.write_clean {
        Some(path) if result.has_fatal_errors() => {
            warn!(path = %path.display(), "Import aborted; clean CSV not written");
            None
        }
        Some(path) => {
            write_clean_csv(path, &result)?;
            info!(path = %path.display(), rows = result.rows.len(), "Wrote clean CSV");
            Some(path.clone())
        }
        None => None,
    };

    Ok(CheckOutcome {
        source,
        schema,
        directory_error: directory.last_error(),
        result,
        clean_output,
    })
}

pub fn run_fields(args: &FieldsArgs) {
    let schema = SchemaKind::from(args.schema);
    println!("Schema: {schema}");
    println!("{}", fields_table(schema.fields()));
}

pub fn run_chains() {
    println!("{}", chains_table(&chains(), &chain_aliases()));
}

pub fn run_categories() {
    println!("{}", categories_table(&categories()));
}
