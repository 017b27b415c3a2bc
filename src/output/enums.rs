//! Swift enum rendering.
//!
//! Each namespace of the [`EnumModel`] becomes one `enum ...Localizable`
//! and each case carries `String` arguments named after its markers.

use std::path::PathBuf;

use super::artifact::RenderedFile;
use super::templates::{
    EnumBlock,
    EnumCase,
    Templates,
};
use crate::ir::namespace::{
    EnumModel,
    build_enum_model,
};
use crate::types::TranslationRow;

/// Longest type name, without the `Localizable` suffix, swiftlint accepts.
const MAX_TYPE_NAME_LEN: usize = 29;
/// Identifier length bounds enforced by swiftlint.
const MIN_IDENTIFIER_LEN: usize = 3;
const MAX_IDENTIFIER_LEN: usize = 40;

/// `enums/{Project}Localizations.swift`
#[must_use]
pub fn enum_file_path(project_name: &str) -> PathBuf {
    PathBuf::from("enums").join(enum_file_name(project_name))
}

#[must_use]
pub fn enum_file_name(project_name: &str) -> String {
    format!("{project_name}Localizations.swift")
}

/// `settings.logout` → `SettingsLogout`.
#[must_use]
pub fn type_name(namespace: &str) -> String {
    namespace.split('.').map(upper_first).collect()
}

/// `ice_cream_toppings` → `iceCreamToppings`.
///
/// Segments after the first are title-cased (first letter upper, rest
/// lower); the result starts lowercase.
#[must_use]
pub fn snake_to_lower_camel(value: &str) -> String {
    let joined: String = value
        .split('_')
        .enumerate()
        .map(|(index, word)| if index == 0 { word.to_string() } else { title_case(word) })
        .collect();
    lower_first(&joined)
}

/// `name` or `name(argOne: String, argTwo: String)`.
#[must_use]
pub fn case_declaration(case: &str, arguments: &[String]) -> String {
    if arguments.is_empty() {
        return case.to_string();
    }
    let labels: Vec<String> =
        arguments.iter().map(|arg| format!("{}: String", snake_to_lower_camel(arg))).collect();
    format!("{case}({})", labels.join(", "))
}

/// Template payloads for every namespace, namespaces and cases sorted.
#[must_use]
pub fn enum_blocks(model: &EnumModel) -> Vec<EnumBlock> {
    model
        .iter()
        .map(|(namespace, cases)| {
            let name = type_name(namespace);
            let cases = cases
                .iter()
                .map(|(case, arguments)| {
                    let len = case.chars().count();
                    EnumCase {
                        declaration: case_declaration(case, arguments),
                        identifier_lint: !(MIN_IDENTIFIER_LEN..=MAX_IDENTIFIER_LEN).contains(&len),
                    }
                })
                .collect();

            EnumBlock {
                type_name_lint: name.chars().count() > MAX_TYPE_NAME_LEN,
                name,
                namespace: namespace.clone(),
                cases,
            }
        })
        .collect()
}

/// The single Swift file for all rows.
#[must_use]
pub fn render_enum_file(
    rows: &[TranslationRow],
    templates: &Templates,
    project_name: &str,
) -> RenderedFile {
    let blocks = enum_blocks(&build_enum_model(rows));
    tracing::debug!("Rendering {} enums", blocks.len());

    let contents = templates.render_enums(&enum_file_name(project_name), project_name, &blocks);
    RenderedFile::new(enum_file_path(project_name), contents)
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
}

fn lower_first(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| first.to_lowercase().chain(chars).collect())
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}
