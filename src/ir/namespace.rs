//! Groups dotted keys into namespaces for the generated enums.
//!
//! `settings.logout.title` belongs to namespace `settings.logout`, case
//! `title`. Each case carries the argument names found in its translation.

use std::collections::BTreeMap;

use crate::types::{
    TranslationRow,
    marker_names,
};

/// Case name → argument names, sorted by case name.
pub type CaseTable = BTreeMap<String, Vec<String>>;

/// Namespace → cases, sorted by namespace.
pub type EnumModel = BTreeMap<String, CaseTable>;

/// Splits a key into `(namespace, case)` at its last `.`.
///
/// Returns `None` for keys with a single segment or an empty namespace/case.
#[must_use]
pub fn split_key(key: &str) -> Option<(&str, &str)> {
    // `a.` and `.a` would render an empty Swift case or enum type name.
    key.rsplit_once('.').filter(|(namespace, case)| !namespace.is_empty() && !case.is_empty())
}

/// Argument names referenced by `${name}` markers, first occurrence order.
#[must_use]
pub fn argument_names(translation: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for name in marker_names(translation) {
        if !names.iter().any(|seen| seen == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Builds the namespace/case table from translation rows.
///
/// Rows are processed in the given order and the last row seen for a
/// (namespace, case) pair decides its argument list. Rows for the same key in
/// several languages therefore resolve to the last language supplied. Keys
/// that do not split into namespace and case are left out.
#[must_use]
pub fn build_enum_model(rows: &[TranslationRow]) -> EnumModel {
    let mut model = EnumModel::new();

    for row in rows {
        let Some((namespace, case)) = split_key(&row.key) else {
            tracing::debug!("Key '{}' has no namespace or case, skipping enum case", row.key);
            continue;
        };

        model
            .entry(namespace.to_string())
            .or_default()
            .insert(case.to_string(), argument_names(&row.translation));
    }

    model
}
