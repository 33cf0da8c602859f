//! Inspection transforms
//!
//! Each transform runs the conversion pipeline up to a certain point and renders what it
//! has at that stage:
//!
//! - `detect`: the dialect recognized from the root element
//! - `ir-json`: the parsed intermediate representation, as JSON
//! - `stats-json`: book/chapter/verse/word counts of the parsed document, as JSON
//! - `zefania`: the final Zefania XML (same as `convert`)
//!
//! Example: `zefania inspect bible.xml ir-json --extra-fuzzy-book-names false`

use std::collections::HashMap;
use zefania_babel::{detect, generate_stats, pipeline, xml, ParseOptions};

/// All available CLI transforms
pub const AVAILABLE_TRANSFORMS: &[&str] = &["detect", "ir-json", "stats-json", "zefania"];

/// Execute a named transform on source text.
///
/// `output` holds Zefania metadata overrides; only the `zefania` transform reads it.
pub fn execute_transform(
    source: &str,
    transform_name: &str,
    options: &ParseOptions,
    output: &HashMap<String, String>,
) -> Result<String, String> {
    match transform_name {
        "detect" => {
            let tree = xml::decode(source).map_err(|e| e.to_string())?;
            Ok(format!("{}\n", detect(&tree)))
        }
        "ir-json" => {
            let (_, doc) =
                pipeline::parse_with_options(source, options).map_err(|e| e.to_string())?;
            to_json(&doc)
        }
        "stats-json" => {
            let (_, doc) =
                pipeline::parse_with_options(source, options).map_err(|e| e.to_string())?;
            to_json(&generate_stats(&doc))
        }
        "zefania" => pipeline::convert(source, options, output)
            .map(|conversion| conversion.xml)
            .map_err(|e| e.to_string()),
        other => Err(format!(
            "Unknown transform '{other}'. Available: {}",
            AVAILABLE_TRANSFORMS.join(", ")
        )),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value)
        .map(|json| json + "\n")
        .map_err(|e| format!("JSON serialization failed: {e}"))
}
