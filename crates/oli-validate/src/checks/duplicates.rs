//! Possible-duplicate detection against listed projects.

use oli_model::{FieldIssue, ProjectRecord, ReferenceDataset, SchemaField, Similarity};

use crate::similarity::{names_similar, urls_similar};

/// Most conflicting entries named in one message.
const MAX_LISTED: usize = 5;

/// Projects whose corresponding attribute resembles `value`.
pub fn similar_projects<'a>(
    field: &SchemaField,
    value: &str,
    reference: &'a ReferenceDataset,
) -> Vec<&'a ProjectRecord> {
    let Some(similarity) = field.similarity else {
        return Vec::new();
    };
    reference
        .projects
        .iter()
        .filter(|project| match similarity {
            Similarity::Name => {
                names_similar(value, &project.owner_project)
                    || project
                        .display_name
                        .as_deref()
                        .is_some_and(|name| names_similar(value, name))
            }
            Similarity::Url => existing_url(field.id, project)
                .is_some_and(|existing| urls_similar(value, existing)),
        })
        .collect()
}

fn existing_url<'a>(field_id: &str, project: &'a ProjectRecord) -> Option<&'a str> {
    match field_id {
        "main_github" => project.main_github.as_deref(),
        _ => project.website.as_deref(),
    }
}

/// Non-blocking warning listing projects that look like `value`.
pub fn check_duplicates(
    row_index: usize,
    field: &SchemaField,
    value: &str,
    reference: &ReferenceDataset,
) -> Option<FieldIssue> {
    let similar = similar_projects(field, value, reference);
    if similar.is_empty() {
        return None;
    }
    let mut listed: Vec<String> = similar
        .iter()
        .take(MAX_LISTED)
        .map(|project| project.describe())
        .collect();
    if similar.len() > MAX_LISTED {
        listed.push(format!("and {} more", similar.len() - MAX_LISTED));
    }
    Some(FieldIssue::warning(
        row_index,
        field.id,
        format!("Similar to existing project(s): {}", listed.join(", ")),
    ))
}
