use order_record::Record;
use serde::Serialize;

/// A parsed record as written in JSON output.
#[derive(Serialize)]
struct JsonRecord<'a> {
    source: &'a str,
    record: &'a Record,
    fully_consumed: bool,
}

/// Formats the record on a single line, e.g. `100, hawaiian, 2 {{0, 0}, {1, 1.1}}`.
///
/// # Arguments
/// * `record` - The record to format.
pub fn format_text(record: &Record) -> String {
    let items: Vec<String> = record
        .get_items()
        .iter()
        .map(|pair| format!("{{{}, {}}}", pair.get_index(), pair.get_quantity()))
        .collect();

    format!(
        "{}, {}, {} {{{}}}",
        record.get_id(),
        record.get_name(),
        record.get_declared_count(),
        items.join(", ")
    )
}

/// Formats the record as a single JSON object.
///
/// # Arguments
/// * `source` - The name of the input the record was read from.
/// * `record` - The record to format.
/// * `fully_consumed` - Whether the record consumed the whole input.
pub fn format_json(
    source: &str,
    record: &Record,
    fully_consumed: bool,
) -> serde_json::Result<String> {
    serde_json::to_string(&JsonRecord {
        source,
        record,
        fully_consumed,
    })
}
