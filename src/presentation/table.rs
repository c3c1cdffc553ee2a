use serde_json::Value;

/// Tabular view over a list of JSON records.
///
/// History and financial-statement endpoints answer with arrays of
/// homogeneous objects; this reshapes them into columns so callers can work
/// per-series instead of per-record. Column order is first-appearance
/// order, records missing a key get `Value::Null` in that cell.
#[derive(Debug, Clone, PartialEq)]
pub struct DataTable {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl DataTable {
    /// Builds a table from JSON records.
    ///
    /// Non-object records land in a single `value` column.
    #[must_use]
    pub fn from_records(records: &[Value]) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for record in records {
            match record {
                Value::Object(map) => {
                    for key in map.keys() {
                        if !columns.iter().any(|c| c == key) {
                            columns.push(key.clone());
                        }
                    }
                }
                _ => {
                    if !columns.iter().any(|c| c == "value") {
                        columns.push(String::from("value"));
                    }
                }
            }
        }

        let rows = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|column| match record {
                        Value::Object(map) => map.get(column).cloned().unwrap_or(Value::Null),
                        other if column == "value" => other.clone(),
                        _ => Value::Null,
                    })
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    /// Column names in first-appearance order
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table contains no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterator over the rows, each a slice of cells in column order
    pub fn rows(&self) -> impl Iterator<Item = &[Value]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// All cells of one column, top to bottom
    #[must_use]
    pub fn column(&self, name: &str) -> Option<Vec<&Value>> {
        let index = self.columns.iter().position(|c| c == name)?;
        Some(self.rows.iter().map(|row| &row[index]).collect())
    }

    /// One column as floats, with non-numeric cells as NaN
    #[must_use]
    pub fn numeric_column(&self, name: &str) -> Option<Vec<f64>> {
        let cells = self.column(name)?;
        Some(
            cells
                .into_iter()
                .map(|cell| cell.as_f64().unwrap_or(f64::NAN))
                .collect(),
        )
    }
}

fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

impl std::fmt::Display for DataTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use prettytable::format;
        use prettytable::{Cell, Row, Table};

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        table.add_row(Row::new(
            self.columns
                .iter()
                .map(|column| Cell::new(&column.to_uppercase()))
                .collect(),
        ));

        for row in &self.rows {
            table.add_row(Row::new(
                row.iter().map(|cell| Cell::new(&render_cell(cell))).collect(),
            ));
        }

        write!(f, "{table}")
    }
}
