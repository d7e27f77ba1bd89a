use std::io::IsTerminal;

use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let options = table_options();

    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items, options)),
        Value::Object(map) => {
            let headers = ["key", "value"];
            let mut entries = map.into_iter().collect::<Vec<_>>();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let mut rows = Vec::with_capacity(entries.len());
            for (key, value) in entries {
                rows.push(vec![key, value_to_cell(&value)]);
            }
            Ok(table::render_entity_table(&headers, &rows, options))
        }
        scalar => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(&scalar)]];
            Ok(table::render_entity_table(&headers, &rows, options))
        }
    }
}

fn render_array_table(items: &[Value], options: table::TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    let all_objects = items.iter().all(Value::is_object);
    if !all_objects {
        let headers = ["value"];
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&headers, &rows, options);
    }

    let mut headers = Vec::<String>::new();
    for item in items {
        if let Some(map) = item.as_object() {
            for key in map.keys() {
                if !headers.contains(key) {
                    headers.push(key.clone());
                }
            }
        }
    }

    if headers.is_empty() {
        return String::from("(no columns)");
    }

    headers.sort_by(|a, b| column_rank(a).cmp(&column_rank(b)).then_with(|| a.cmp(b)));

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| {
                    map.get(header)
                        .map_or_else(|| String::from("-"), value_to_cell)
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, options)
}

/// Audit columns first, in reading order; anything else after, alphabetically.
const LEADING_COLUMNS: &[&str] = &[
    "id",
    "event_time",
    "entity_kind",
    "field_name",
    "before_value",
    "after_value",
    "actor_id",
];

fn column_rank(header: &str) -> usize {
    LEADING_COLUMNS
        .iter()
        .position(|column| *column == header)
        .unwrap_or(LEADING_COLUMNS.len())
}

/// Color only when writing a table to a terminal that has not opted out.
fn table_options() -> table::TableOptions {
    let color = std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
    let max_width = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok());
    table::TableOptions { max_width, color }
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;
    use serde_json::json;

    use super::{column_rank, render, render_array_table, table};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Row {
        id: i64,
        field_name: &'static str,
        before_value: Option<&'static str>,
    }

    const PLAIN: table::TableOptions = table::TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn json_render_is_valid_json() {
        let value = Row {
            id: 7,
            field_name: "pasture",
            before_value: Some("East Field"),
        };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["field_name"], "pasture");
        assert_eq!(parsed["id"], 7);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = vec![Row {
            id: 1,
            field_name: "name",
            before_value: None,
        }];
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert!(parsed[0]["before_value"].is_null());
    }

    #[test]
    fn audit_columns_lead_the_table() {
        let items = vec![json!({
            "after_value": "Barn Area",
            "actor_id": "4",
            "before_value": "East Field",
            "entity_kind": "horses",
            "event_time": "2025-01-02T00:00:00Z",
            "field_name": "pasture",
            "id": 1,
            "zzz": true
        })];

        let out = render_array_table(&items, PLAIN);
        let header: Vec<&str> = out.lines().next().unwrap().split_whitespace().collect();
        assert_eq!(
            header,
            vec![
                "id",
                "event_time",
                "entity_kind",
                "field_name",
                "before_value",
                "after_value",
                "actor_id",
                "zzz"
            ]
        );
    }

    #[test]
    fn null_cells_render_as_dash() {
        let items = vec![json!({"id": 1, "before_value": null})];
        let out = render_array_table(&items, PLAIN);
        let row = out.lines().nth(2).unwrap();
        assert!(row.contains('-'));
        assert!(!row.contains("null"));
    }

    #[test]
    fn empty_list_has_placeholder() {
        assert_eq!(render_array_table(&[], PLAIN), "(no rows)");
    }

    #[test]
    fn unknown_columns_rank_last() {
        assert!(column_rank("id") < column_rank("actor_id"));
        assert_eq!(column_rank("notes"), column_rank("other"));
    }
}
