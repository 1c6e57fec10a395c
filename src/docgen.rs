//! Documentation blocks for `with`
//!
//! Renders the named overrides a type's `with_named` accepts from its field
//! summaries, and places the block above the type's declaration in source
//! text. Finding and writing source files is left to the caller.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::schema::{FieldSummary, Schema};

const HEADER: &str = "Creates a modified copy of";

/// An existing generated block: consecutive `///` lines starting at the header
static EXISTING_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*/// Creates a modified copy of `(\w+)`.*\n(?:[ \t]*///.*\n)*")
        .expect("valid doc block pattern")
});

fn display_type(summary: &FieldSummary) -> String {
    if summary.nullable {
        format!("?{}", summary.type_name)
    } else {
        summary.type_name.clone()
    }
}

/// Doc comment lines describing the overrides accepted by `with_named`
///
/// ```rust
/// use carapace::docgen::render_with_doc;
/// use carapace::schema::{Field, Schema};
///
/// let schema = Schema::builder("User")
///     .field(Field::string("name"))
///     .field(Field::string("email").nullable())
///     .build();
///
/// assert_eq!(
///     render_with_doc(&schema),
///     "/// Creates a modified copy of `User` with overridden values.\n\
///      ///\n\
///      /// Named overrides:\n\
///      /// - `name: string`\n\
///      /// - `email: ?string`\n"
/// );
/// ```
pub fn render_with_doc(schema: &Schema) -> String {
    let mut doc = format!(
        "/// {} `{}` with overridden values.\n",
        HEADER,
        schema.name()
    );

    let summaries = schema.describe();
    if !summaries.is_empty() {
        doc.push_str("///\n/// Named overrides:\n");
        for summary in &summaries {
            doc.push_str(&format!("/// - `{}: {}`\n", summary.name, display_type(summary)));
        }
    }
    doc
}

/// Insert or refresh the `with` block for `schema` in `source`
///
/// A previously generated block for the same type is replaced. Otherwise the
/// block goes right above the type's `struct` declaration (and its derive
/// attributes). Source without that declaration is returned unchanged.
pub fn apply_with_doc(source: &str, schema: &Schema) -> String {
    let doc = render_with_doc(schema);

    if let Some(existing) = EXISTING_BLOCK
        .captures_iter(source)
        .find(|caps| &caps[1] == schema.name())
        .and_then(|caps| caps.get(0))
    {
        let mut updated = String::with_capacity(source.len() + doc.len());
        updated.push_str(&source[..existing.start()]);
        updated.push_str(&doc);
        updated.push_str(&source[existing.end()..]);
        return updated;
    }

    let declaration = match Regex::new(&format!(
        r"(?m)^(?:[ \t]*#\[.*\]\n)*[ \t]*(?:pub(?:\([^)]*\))?[ \t]+)?struct[ \t]+{}\b",
        regex::escape(schema.name())
    )) {
        Ok(pattern) => pattern,
        Err(err) => {
            tracing::warn!("Cannot locate {}: {}", schema.name(), err);
            return source.to_string();
        }
    };

    match declaration.find(source) {
        Some(found) => {
            let mut updated = String::with_capacity(source.len() + doc.len());
            updated.push_str(&source[..found.start()]);
            updated.push_str(&doc);
            updated.push_str(&source[found.start()..]);
            updated
        }
        None => source.to_string(),
    }
}
