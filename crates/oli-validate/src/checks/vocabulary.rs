//! Closed-vocabulary checks: chains, categories and projects.

use oli_model::{FieldIssue, ReferenceDataset};

use crate::similarity::{blended_score, rank};

/// Ranked category ids for an unknown value.
pub fn category_suggestions(value: &str, reference: &ReferenceDataset) -> Vec<String> {
    rank(reference.categories.iter().map(|category| {
        let score = blended_score(value, &category.id, Some(&category.description))
            .max(blended_score(value, &category.name, None));
        (category.id.as_str(), score)
    }))
}

/// Ranked project ids for an unknown value.
pub fn project_suggestions(value: &str, reference: &ReferenceDataset) -> Vec<String> {
    rank(reference.projects.iter().map(|project| {
        let by_name = project
            .display_name
            .as_deref()
            .map_or(0.0, |name| blended_score(value, name, None));
        let score = blended_score(value, &project.owner_project, None).max(by_name);
        (project.owner_project.as_str(), score)
    }))
}

/// Category cell not in the taxonomy.
pub fn check_category(
    row_index: usize,
    field_id: &str,
    value: &str,
    reference: &ReferenceDataset,
) -> Option<FieldIssue> {
    if reference.valid_category_ids.contains(value) {
        return None;
    }
    let lowered = value.to_lowercase();
    let alias = reference
        .category_aliases
        .get(&lowered)
        .map(String::as_str)
        .or_else(|| {
            reference
                .valid_category_ids
                .iter()
                .find(|id| id.to_lowercase() == lowered)
                .map(String::as_str)
        })
        .filter(|id| reference.valid_category_ids.contains(*id));
    if let Some(id) = alias {
        return Some(
            FieldIssue::warning(
                row_index,
                field_id,
                format!("'{value}' is an alias for category '{id}'"),
            )
            .with_suggestions(vec![id.to_string()])
            .as_conversion(),
        );
    }

    let suggestions = category_suggestions(value, reference);
    if !suggestions.is_empty() {
        return Some(
            FieldIssue::error(
                row_index,
                field_id,
                format!("Unknown category '{value}'; pick one of the suggestions"),
            )
            .with_suggestions(suggestions),
        );
    }
    let fallback = reference.default_category.iter().cloned().collect();
    Some(
        FieldIssue::error(
            row_index,
            field_id,
            format!("Unknown category '{value}' with no close match"),
        )
        .with_suggestions(fallback),
    )
}

/// Project cell not in the project directory.
pub fn check_project(
    row_index: usize,
    field_id: &str,
    value: &str,
    reference: &ReferenceDataset,
) -> Option<FieldIssue> {
    if reference.valid_project_ids.contains(value) {
        return None;
    }
    if let Some(id) = reference.project_id_ignoring_case(value) {
        return Some(
            FieldIssue::warning(
                row_index,
                field_id,
                format!("'{value}' matches project '{id}'"),
            )
            .with_suggestions(vec![id.to_string()])
            .as_conversion(),
        );
    }

    let suggestions = project_suggestions(value, reference);
    if !suggestions.is_empty() {
        return Some(
            FieldIssue::error(
                row_index,
                field_id,
                format!("Unknown project '{value}'; pick one of the suggestions"),
            )
            .with_suggestions(suggestions),
        );
    }
    Some(
        FieldIssue::error(
            row_index,
            field_id,
            format!("Project '{value}' is not in the project directory; register it as a new project"),
        )
        .offering_add_new(),
    )
}

/// Chain cell that is not a known CAIP-2 id.
pub fn check_chain(
    row_index: usize,
    field_id: &str,
    value: &str,
    reference: &ReferenceDataset,
) -> Option<FieldIssue> {
    (!reference.valid_chain_ids.contains(value)).then(|| {
        FieldIssue::error(
            row_index,
            field_id,
            format!("'{value}' is not a recognized chain id"),
        )
    })
}
