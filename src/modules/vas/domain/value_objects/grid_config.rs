//! Typed column configuration consumed by the data grid
//!
//! Each column kind carries only what that kind needs; the serialized form is
//! the `type`-tagged JSON object the grid renders from.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GutterKind {
    Dirty,
    Sequence,
    RowSelector,
}

/// Row affordance column (dirty marker, sequence number, selection checkbox)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GutterColumn {
    pub gutter_name: GutterKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple: Option<bool>,
}

impl GutterColumn {
    pub fn dirty() -> Self {
        Self {
            gutter_name: GutterKind::Dirty,
            multiple: None,
        }
    }

    pub fn sequence() -> Self {
        Self {
            gutter_name: GutterKind::Sequence,
            multiple: None,
        }
    }

    pub fn row_selector(multiple: bool) -> Self {
        Self {
            gutter_name: GutterKind::RowSelector,
            multiple: Some(multiple),
        }
    }
}

/// How a cell is edited in place
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSpec {
    pub editable: bool,
    pub align: Align,
    /// Code table the cell editor offers values from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_name: Option<String>,
}

impl RecordSpec {
    pub fn editable(align: Align) -> Self {
        Self {
            editable: true,
            align,
            code_name: None,
        }
    }

    pub fn read_only(align: Align) -> Self {
        Self {
            editable: false,
            align,
            code_name: None,
        }
    }

    pub fn with_code(mut self, code_name: &str) -> Self {
        self.code_name = Some(code_name.to_string());
        self
    }
}

/// `{ name, id }` pair offered for coded cells in the exchange sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupOption {
    pub name: String,
    pub id: String,
}

/// Value type of a column in the import/export sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ImexType {
    String,
    Float,
    Array {
        #[serde(rename = "arrData")]
        arr_data: Vec<LookupOption>,
    },
}

/// Mapping between a grid column and a column of the flat exchange sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImexSpec {
    pub header: String,
    /// Dotted path into the record
    pub key: String,
    pub width: u32,
    #[serde(flatten)]
    pub value_type: ImexType,
}

impl ImexSpec {
    pub fn new(key: &str, header: &str, value_type: ImexType) -> Self {
        Self {
            header: header.to_string(),
            key: key.to_string(),
            width: 50,
            value_type,
        }
    }

    /// Lookup options for coded columns, empty otherwise
    pub fn lookup(&self) -> &[LookupOption] {
        match &self.value_type {
            ImexType::Array { arr_data } => arr_data,
            _ => &[],
        }
    }
}

/// Data column shared by every non-gutter kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldColumn {
    pub name: String,
    /// Translation key
    pub header: String,
    pub record: RecordSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imex: Option<ImexSpec>,
    pub sortable: bool,
    pub width: u32,
}

impl FieldColumn {
    pub fn new(name: &str, header: &str, record: RecordSpec, width: u32) -> Self {
        Self {
            name: name.to_string(),
            header: header.to_string(),
            record,
            imex: None,
            sortable: true,
            width,
        }
    }

    pub fn with_imex(mut self, value_type: ImexType) -> Self {
        self.imex = Some(ImexSpec::new(&self.name, &self.header, value_type));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ColumnSpec {
    Gutter(GutterColumn),
    String(FieldColumn),
    Float(FieldColumn),
    Datetime(FieldColumn),
    Object(FieldColumn),
    /// Values come from the code table named in `record.code_name`
    Code(FieldColumn),
}

impl ColumnSpec {
    pub fn field(&self) -> Option<&FieldColumn> {
        match self {
            ColumnSpec::Gutter(_) => None,
            ColumnSpec::String(field)
            | ColumnSpec::Float(field)
            | ColumnSpec::Datetime(field)
            | ColumnSpec::Object(field)
            | ColumnSpec::Code(field) => Some(field),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.field().map(|field| field.name.as_str())
    }

    pub fn imex(&self) -> Option<&ImexSpec> {
        self.field().and_then(|field| field.imex.as_ref())
    }

    /// Code table backing this column, if any
    pub fn code_name(&self) -> Option<&str> {
        self.field().and_then(|field| field.record.code_name.as_deref())
    }

    pub fn is_gutter(&self) -> bool {
        matches!(self, ColumnSpec::Gutter(_))
    }

    /// Data column with an exchange mapping
    pub fn is_exportable(&self) -> bool {
        self.imex().is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Selectable {
    pub multiple: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RowsConfig {
    pub selectable: Selectable,
}

/// Column/row configuration handed to the grid once per page activation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridConfig {
    pub rows: RowsConfig,
    pub columns: Vec<ColumnSpec>,
}

impl GridConfig {
    pub fn column(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|column| column.name() == Some(name))
    }

    /// Columns with an import/export mapping (offered by the import popup)
    pub fn imex_columns(&self) -> Vec<ColumnSpec> {
        self.columns
            .iter()
            .filter(|column| column.imex().is_some())
            .cloned()
            .collect()
    }

    /// Exchange mappings of exportable columns, in column order
    pub fn exportable_columns(&self) -> Vec<&ImexSpec> {
        self.columns
            .iter()
            .filter(|column| column.is_exportable())
            .filter_map(ColumnSpec::imex)
            .collect()
    }
}
