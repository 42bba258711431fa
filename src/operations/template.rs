//! Output filename templating
//!
//! Templates are plain strings with `{placeholder}` tokens. Expansion is
//! simple sequential replacement; placeholder values in this domain are page
//! numbers and filename stems, which cannot themselves contain a
//! `{placeholder}`, so replacement order does not matter.

/// Replace every occurrence of each `{placeholder}` with its value.
///
/// Placeholders without a substitution are left verbatim.
pub fn expand_template(template: &str, substitutions: &[(&str, String)]) -> String {
    let mut name = template.to_string();
    for (placeholder, value) in substitutions {
        name = name.replace(&format!("{{{placeholder}}}"), value);
    }
    name
}

/// The `{base}` value: the source filename with its first literal `.pdf`
/// removed.
pub(crate) fn base_name(source_filename: &str) -> String {
    source_filename.replacen(".pdf", "", 1)
}
