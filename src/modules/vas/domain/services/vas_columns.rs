use crate::modules::vas::domain::{
    entities::{CodeDetail, CURRENCY_CODE_NAME},
    value_objects::{
        grid_config::{
            Align, ColumnSpec, FieldColumn, GridConfig, GutterColumn, ImexType,
            LookupOption, RecordSpec, RowsConfig, Selectable,
        },
        search::SearchField,
    },
};

/// Search form fields: case-insensitive "contains" on name and description
pub fn build_search_fields() -> Vec<SearchField> {
    vec![
        SearchField::contains_text("name", "field.name"),
        SearchField::contains_text("description", "field.description"),
    ]
}

/// Currency codes offered in the exchange sheet; display name doubles as id
pub fn currency_lookup(currencies: &[CodeDetail]) -> Vec<LookupOption> {
    currencies
        .iter()
        .map(|code| LookupOption {
            name: code.name.clone(),
            id: code.name.clone(),
        })
        .collect()
}

/// Full grid configuration for the VAS list.
///
/// An empty `currencies` slice still yields a complete config; the currency
/// column just offers no lookup values.
pub fn build_grid_config(currencies: &[CodeDetail]) -> GridConfig {
    let editable_left = RecordSpec::editable(Align::Left);
    let editable_center = RecordSpec::editable(Align::Center);
    let read_only = RecordSpec::read_only(Align::Center);

    let columns = vec![
        ColumnSpec::Gutter(GutterColumn::dirty()),
        ColumnSpec::Gutter(GutterColumn::sequence()),
        ColumnSpec::Gutter(GutterColumn::row_selector(true)),
        ColumnSpec::String(
            FieldColumn::new("name", "field.name", editable_left.clone(), 150)
                .with_imex(ImexType::String),
        ),
        ColumnSpec::String(
            FieldColumn::new("description", "field.description", editable_left.clone(), 200)
                .with_imex(ImexType::String),
        ),
        ColumnSpec::String(
            FieldColumn::new(
                "operationGuideType",
                "field.operation_guide_type",
                editable_center.clone(),
                160,
            )
            .with_imex(ImexType::String),
        ),
        ColumnSpec::String(
            FieldColumn::new(
                "operationGuide",
                "field.operation_guide",
                editable_center.clone(),
                160,
            )
            .with_imex(ImexType::String),
        ),
        ColumnSpec::String(
            FieldColumn::new("uom", "field.uom", editable_left, 160).with_imex(ImexType::String),
        ),
        ColumnSpec::Code(
            FieldColumn::new(
                "currency",
                "field.currency",
                editable_center.clone().with_code(CURRENCY_CODE_NAME),
                100,
            )
            .with_imex(ImexType::Array {
                arr_data: currency_lookup(currencies),
            }),
        ),
        ColumnSpec::Float(
            FieldColumn::new("defaultPrice", "field.default_price", editable_center, 60)
                .with_imex(ImexType::Float),
        ),
        ColumnSpec::Datetime(FieldColumn::new(
            "updatedAt",
            "field.updated_at",
            read_only.clone(),
            150,
        )),
        ColumnSpec::Object(FieldColumn::new("updater", "field.updater", read_only, 150)),
    ];

    GridConfig {
        rows: RowsConfig {
            selectable: Selectable { multiple: true },
        },
        columns,
    }
}
