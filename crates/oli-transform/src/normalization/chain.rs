//! Chain identifier normalization to CAIP-2 ids.

use oli_model::ReferenceDataset;

/// Resolves a user-supplied chain identifier to a known CAIP-2 id.
///
/// Accepts the canonical id in any case, `namespace:number` when the namespace
/// matches the known chain, a bare chain number, and the short id, display
/// name or an alias in any case. Numbers are plain ASCII digits without a sign
/// or leading zero.
pub fn resolve_chain(value: &str, reference: &ReferenceDataset) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if reference.valid_chain_ids.contains(trimmed) {
        return Some(trimmed.to_string());
    }

    let (namespace, number) = match trimmed.split_once(':') {
        Some((namespace, number)) => (Some(namespace), number),
        None => (None, trimmed),
    };
    if let Some(caip2) = chain_by_number(namespace, number, reference) {
        return Some(caip2);
    }

    let lowered = trimmed.to_lowercase();
    if let Some(chain) = reference.chains.iter().find(|chain| {
        chain.short_id.to_lowercase() == lowered || chain.name.to_lowercase() == lowered
    }) {
        return Some(chain.caip2.clone());
    }
    reference
        .chain_aliases
        .get(&lowered)
        .filter(|caip2| reference.valid_chain_ids.contains(caip2.as_str()))
        .cloned()
}

fn chain_by_number(
    namespace: Option<&str>,
    number: &str,
    reference: &ReferenceDataset,
) -> Option<String> {
    if !is_chain_number(number) {
        return None;
    }
    reference
        .chains
        .iter()
        .filter(|chain| namespace.is_none_or(|ns| chain.namespace().eq_ignore_ascii_case(ns)))
        .find(|chain| chain.reference() == number)
        .map(|chain| chain.caip2.clone())
}

fn is_chain_number(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|b| b.is_ascii_digit())
        && (value == "0" || !value.starts_with('0'))
}
