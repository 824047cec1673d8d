//! Mapping between grid records and the flat exchange sheet

use serde::Serialize;
use serde_json::{Map, Value};

use crate::modules::vas::domain::{
    ColumnSpec, CuFlag, ImexSpec, ImexType, LookupOption, PendingPatch, VasRecord,
    DIRTY_FLAG_NAME,
};
use crate::modules::vas::traits::ImportRow;
use crate::shared::errors::AppResult;
use crate::shared::utils::{get_by_path_or_null, logger::LogContext};

/// Sheet handed to the exporter: column headers plus one row per record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportData {
    pub name: String,
    pub header: Vec<ImexSpec>,
    pub data: Vec<ImportRow>,
}

/// Flatten `records` into sheet rows keeping `id` plus every mapped column
pub fn export_records(
    name: &str,
    records: &[VasRecord],
    columns: &[&ImexSpec],
) -> AppResult<ExportData> {
    let data = records
        .iter()
        .map(|record| {
            let value = serde_json::to_value(record)?;
            let mut row = Map::new();
            row.insert("id".to_string(), Value::String(record.id.clone()));
            for imex in columns {
                row.insert(imex.key.clone(), get_by_path_or_null(&value, &imex.key));
            }
            Ok(row)
        })
        .collect::<AppResult<Vec<_>>>()?;

    LogContext::transfer("Export", data.len(), columns.len());

    Ok(ExportData {
        name: name.to_string(),
        header: columns.iter().map(|imex| (*imex).clone()).collect(),
        data,
    })
}

/// Turn approved sheet rows into patches for the mapped `columns`.
///
/// Rows with an `id` update that record; rows without one create a record.
pub fn rows_to_patches(rows: &[ImportRow], columns: &[ColumnSpec]) -> AppResult<Vec<PendingPatch>> {
    let mappings: Vec<&ImexSpec> = columns.iter().filter_map(ColumnSpec::imex).collect();

    let patches = rows
        .iter()
        .map(|row| row_to_patch(row, &mappings))
        .collect::<AppResult<Vec<_>>>()?;

    LogContext::transfer("Import", patches.len(), mappings.len());
    Ok(patches)
}

fn row_to_patch(row: &ImportRow, mappings: &[&ImexSpec]) -> AppResult<PendingPatch> {
    let id = row.get("id").and_then(cell_text).filter(|id| !id.is_empty());

    let mut fields = Map::new();
    for imex in mappings {
        let Some(cell) = row.get(&imex.key).filter(|cell| !cell.is_null()) else {
            continue;
        };
        let value = match &imex.value_type {
            ImexType::String => cell_text(cell).map(Value::String).unwrap_or(Value::Null),
            ImexType::Float => cell.clone(),
            ImexType::Array { arr_data } => resolve_lookup(cell, arr_data),
        };
        fields.insert(imex.key.clone(), value);
    }

    let flag = if id.is_some() {
        CuFlag::Modify
    } else {
        CuFlag::Create
    };
    if let Some(id) = id {
        fields.insert("id".to_string(), Value::String(id));
    }
    fields.insert(DIRTY_FLAG_NAME.to_string(), serde_json::to_value(flag)?);

    Ok(serde_json::from_value(Value::Object(fields))?)
}

/// Sheet cells may come back typed as numbers or booleans
fn cell_text(cell: &Value) -> Option<String> {
    match cell {
        Value::String(text) => Some(text.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Display name → id; unknown names pass through for the server to judge
fn resolve_lookup(cell: &Value, options: &[LookupOption]) -> Value {
    let Some(text) = cell_text(cell) else {
        return Value::Null;
    };
    let id = options
        .iter()
        .find(|option| option.name == text || option.id == text)
        .map(|option| option.id.clone())
        .unwrap_or(text);
    Value::String(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::vas::domain::{build_grid_config, CodeDetail, PriceInput};
    use serde_json::json;

    fn row(value: Value) -> ImportRow {
        match value {
            Value::Object(map) => map,
            _ => panic!("row must be an object"),
        }
    }

    #[test]
    fn export_reads_values_not_keys() {
        let config = build_grid_config(&[]);
        let mut record = VasRecord::new("v1", "Gift wrap");
        record.uom = Some("EA".to_string());
        record.default_price = Some(2.5);

        let export = export_records("title.vas", &[record], &config.exportable_columns()).unwrap();

        let first = &export.data[0];
        assert_eq!(first["id"], json!("v1"));
        assert_eq!(first["name"], json!("Gift wrap"));
        assert_eq!(first["uom"], json!("EA"));
        assert_eq!(first["defaultPrice"], json!(2.5));
        assert_eq!(first["description"], Value::Null);
        assert_eq!(first.len(), 8);
        assert_eq!(export.header.len(), 7);
    }

    #[test]
    fn import_rows_map_to_patches_with_flags() {
        let config = build_grid_config(&[CodeDetail::new("USD", None)]);
        let rows = vec![
            row(json!({ "id": "v1", "name": "Labeling", "currency": "USD", "defaultPrice": 3 })),
            row(json!({ "name": "Kitting", "uom": 12, "defaultPrice": "4.5" })),
        ];

        let patches = rows_to_patches(&rows, &config.imex_columns()).unwrap();

        assert_eq!(patches[0].id.as_deref(), Some("v1"));
        assert_eq!(patches[0].cu_flag, Some(CuFlag::Modify));
        assert_eq!(patches[0].currency.as_deref(), Some("USD"));
        assert_eq!(patches[0].default_price, Some(PriceInput::Number(3.0)));

        assert_eq!(patches[1].id, None);
        assert_eq!(patches[1].cu_flag, Some(CuFlag::Create));
        assert_eq!(patches[1].uom.as_deref(), Some("12"));
        assert_eq!(patches[1].default_price, Some(PriceInput::Text("4.5".to_string())));
    }

    #[test]
    fn unmapped_cells_are_ignored() {
        let config = build_grid_config(&[]);
        let rows = vec![row(json!({ "id": "v9", "updatedAt": "2020-01-01", "extra": 1 }))];

        let patches = rows_to_patches(&rows, &config.imex_columns()).unwrap();
        assert_eq!(patches, vec![PendingPatch::modify("v9")]);
    }
}
