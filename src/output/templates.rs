//! Text templates for the generated files.
//!
//! Every render function is a pure function from a typed payload to text.
//! The only non-deterministic input, the generation date in the header, is
//! fixed when the [`Templates`] value is built.

use std::borrow::Cow;

use chrono::NaiveDate;

use crate::types::PluralCategory;

/// Module imported by the generated enum file unless configured otherwise.
pub const DEFAULT_IMPORT_MODULE: &str = "LocalizableGoogleSheets";

const INDENT: &str = "    ";

/// A `"key" = "value";` entry of a `.strings` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringEntry {
    pub key: String,
    pub value: String,
}

/// One plural argument of a stringsdict record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralVariable {
    /// Variable name referenced from the format string, e.g. `__count__`.
    pub name: String,
    /// Text per supplied category, CLDR order.
    pub forms: Vec<(PluralCategory, String)>,
}

/// One key of a stringsdict file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralRecord {
    pub key: String,
    /// Value of `NSStringLocalizedFormatKey`.
    pub format: String,
    pub variables: Vec<PluralVariable>,
}

/// One `case` line of a generated enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumCase {
    /// `name` or `name(arg: String, ...)`.
    pub declaration: String,
    pub identifier_lint: bool,
}

/// One generated enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumBlock {
    /// Type name without the `Localizable` suffix.
    pub name: String,
    pub namespace: String,
    pub type_name_lint: bool,
    pub cases: Vec<EnumCase>,
}

/// Renders the generated artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Templates {
    generated_on: NaiveDate,
    import_module: String,
}

impl Templates {
    /// Templates stamping `generated_on` into every header.
    #[must_use]
    pub fn new(generated_on: NaiveDate) -> Self {
        Self { generated_on, import_module: DEFAULT_IMPORT_MODULE.to_string() }
    }

    /// Templates stamped with the local date.
    #[must_use]
    pub fn today() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }

    #[must_use]
    pub fn with_import_module(mut self, import_module: impl Into<String>) -> Self {
        self.import_module = import_module.into();
        self
    }

    /// The `//` comment block opening every generated file.
    #[must_use]
    pub fn render_header(&self, filename: &str, project_name: &str) -> String {
        format!(
            "//\n//  {filename}\n//  {project_name}\n//\n//  THIS FILE IS GENERATED, DO NOT EDIT IT!\n//  Generated on {}\n//\n",
            self.generated_on.format("%Y-%m-%d")
        )
    }

    /// A `.strings` file: the header inside a block comment, then one line per entry.
    #[must_use]
    pub fn render_strings(
        &self,
        filename: &str,
        project_name: &str,
        entries: &[StringEntry],
    ) -> String {
        let mut out = format!("/*\n{}*/\n", self.render_header(filename, project_name));
        for entry in entries {
            out.push_str(&format!("\"{}\" = \"{}\";\n", entry.key, entry.value));
        }
        out
    }

    /// A complete stringsdict plist.
    #[must_use]
    pub fn render_stringsdict(
        &self,
        filename: &str,
        project_name: &str,
        records: &[PluralRecord],
    ) -> String {
        let mut out = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\" \"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">\n",
        );
        out.push_str(&format!("<!--\n{}-->\n", self.render_header(filename, project_name)));
        out.push_str("<plist version=\"1.0\">\n<dict>\n");
        for record in records {
            out.push_str(&Self::render_plural(record));
        }
        out.push_str("</dict>\n</plist>\n");
        out
    }

    /// The `<key>`/`<dict>` pair for one plural record, indented for the root dict.
    #[must_use]
    pub fn render_plural(record: &PluralRecord) -> String {
        let mut out = String::new();
        line(&mut out, 1, &element("key", &record.key));
        line(&mut out, 1, "<dict>");
        line(&mut out, 2, &element("key", "NSStringLocalizedFormatKey"));
        line(&mut out, 2, &element("string", &record.format));
        out.push_str(&Self::render_variables(&record.variables));
        line(&mut out, 1, "</dict>");
        out
    }

    /// The plural rule blocks of a record, one per variable.
    #[must_use]
    pub fn render_variables(variables: &[PluralVariable]) -> String {
        let mut out = String::new();
        for variable in variables {
            line(&mut out, 2, &element("key", &variable.name));
            line(&mut out, 2, "<dict>");
            line(&mut out, 3, &element("key", "NSStringFormatSpecTypeKey"));
            line(&mut out, 3, &element("string", "NSStringPluralRuleType"));
            line(&mut out, 3, &element("key", "NSStringFormatValueTypeKey"));
            line(&mut out, 3, &element("string", "d"));
            for (category, text) in &variable.forms {
                line(&mut out, 3, &element("key", category.as_str()));
                line(&mut out, 3, &element("string", text));
            }
            line(&mut out, 2, "</dict>");
        }
        out
    }

    /// The Swift file with one enum per namespace.
    #[must_use]
    pub fn render_enums(&self, filename: &str, project_name: &str, enums: &[EnumBlock]) -> String {
        let mut out = self.render_header(filename, project_name);
        out.push_str(&format!("\nimport {}\n", self.import_module));

        for block in enums {
            out.push('\n');
            if block.type_name_lint {
                out.push_str("//swiftlint:disable:next type_name\n");
            }
            out.push_str(&format!("enum {}Localizable: Localizable {{\n", block.name));
            line(
                &mut out,
                1,
                &format!("static let localizationNamespace = \"{}\"", block.namespace),
            );
            out.push('\n');
            for case in &block.cases {
                let lint =
                    if case.identifier_lint { " //swiftlint:disable:this identifier_name" } else { "" };
                line(&mut out, 1, &format!("case {}{lint}", case.declaration));
            }
            out.push_str("}\n");
        }

        out
    }
}

fn line(out: &mut String, depth: usize, text: &str) {
    out.push_str(&INDENT.repeat(depth));
    out.push_str(text);
    out.push('\n');
}

fn element(tag: &str, text: &str) -> String {
    let escaped: Cow<'_, str> = quick_xml::escape::partial_escape(text);
    format!("<{tag}>{escaped}</{tag}>")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[fixture]
    fn templates() -> Templates {
        Templates::new(NaiveDate::from_ymd_opt(2020, 1, 15).unwrap())
    }

    const MOCK_HEADER: &str = "//
//  MockFilename
//  MockProjectName
//
//  THIS FILE IS GENERATED, DO NOT EDIT IT!
//  Generated on 2020-01-15
//
";

    #[rstest]
    fn render_header(templates: Templates) {
        assert_eq!(templates.render_header("MockFilename", "MockProjectName"), MOCK_HEADER);
    }

    #[rstest]
    fn render_enums_with_lint_annotations(templates: Templates) {
        let enums = vec![
            EnumBlock {
                name: "Enum1".to_string(),
                namespace: "Namespace1".to_string(),
                type_name_lint: false,
                cases: vec![
                    EnumCase { declaration: "Enum1Case1".to_string(), identifier_lint: true },
                    EnumCase { declaration: "Enum1Case2".to_string(), identifier_lint: false },
                ],
            },
            EnumBlock {
                name: "AVeryLongNamespaceNameThatIsLong".to_string(),
                namespace: "aVeryLongNamespaceNameThatIsLong".to_string(),
                type_name_lint: true,
                cases: vec![EnumCase {
                    declaration: "title(count: String)".to_string(),
                    identifier_lint: false,
                }],
            },
        ];

        let rendered = templates
            .clone()
            .with_import_module("LocalizableSheets")
            .render_enums("MockFilename", "MockProjectName", &enums);

        let expected = format!(
            "{MOCK_HEADER}
import LocalizableSheets

enum Enum1Localizable: Localizable {{
    static let localizationNamespace = \"Namespace1\"

    case Enum1Case1 //swiftlint:disable:this identifier_name
    case Enum1Case2
}}

//swiftlint:disable:next type_name
enum AVeryLongNamespaceNameThatIsLongLocalizable: Localizable {{
    static let localizationNamespace = \"aVeryLongNamespaceNameThatIsLong\"

    case title(count: String)
}}
"
        );
        assert_eq!(rendered, expected);
    }

    #[rstest]
    fn render_strings_wraps_header_in_comment(templates: Templates) {
        let entries = vec![
            StringEntry { key: "key2".to_string(), value: "A or b __a__".to_string() },
            StringEntry { key: "key4".to_string(), value: "A or b a".to_string() },
        ];

        let rendered = templates.render_strings("MockFilename", "MockProjectName", &entries);

        let expected =
            format!("/*\n{MOCK_HEADER}*/\n\"key2\" = \"A or b __a__\";\n\"key4\" = \"A or b a\";\n");
        assert_eq!(rendered, expected);
    }

    #[rstest]
    fn render_stringsdict_record(templates: Templates) {
        let records = vec![PluralRecord {
            key: "cart.items".to_string(),
            format: "%#@__count__@ in cart".to_string(),
            variables: vec![PluralVariable {
                name: "__count__".to_string(),
                forms: vec![
                    (PluralCategory::One, "one item".to_string()),
                    (PluralCategory::Other, "%d items & more".to_string()),
                ],
            }],
        }];

        let rendered = templates.render_stringsdict("MockFilename", "MockProjectName", &records);

        let expected = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>
<!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\" \"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">
<!--
{MOCK_HEADER}-->
<plist version=\"1.0\">
<dict>
    <key>cart.items</key>
    <dict>
        <key>NSStringLocalizedFormatKey</key>
        <string>%#@__count__@ in cart</string>
        <key>__count__</key>
        <dict>
            <key>NSStringFormatSpecTypeKey</key>
            <string>NSStringPluralRuleType</string>
            <key>NSStringFormatValueTypeKey</key>
            <string>d</string>
            <key>one</key>
            <string>one item</string>
            <key>other</key>
            <string>%d items &amp; more</string>
        </dict>
    </dict>
</dict>
</plist>
"
        );
        assert_eq!(rendered, expected);
    }

    #[rstest]
    fn render_stringsdict_without_records(templates: Templates) {
        let rendered = templates.render_stringsdict("en.Localizable.stringsdict", "App", &[]);

        assert_that!(rendered, ends_with("<plist version=\"1.0\">\n<dict>\n</dict>\n</plist>\n"));
    }

    #[rstest]
    fn render_variables_empty_is_empty() {
        assert_that!(Templates::render_variables(&[]), eq(""));
    }
}
