#![deny(unsafe_code)]

/// One drug product row, aligned positionally with the owning table's header.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    values: Vec<String>,
}

impl Record {
    pub fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Value at `index`, or `""` when the record is shorter than the header.
    pub fn get(&self, index: usize) -> &str {
        self.values.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn set(&mut self, index: usize, value: String) {
        if index >= self.values.len() {
            self.values.resize(index + 1, String::new());
        }
        self.values[index] = value;
    }

    fn fit_width(&mut self, width: usize) {
        self.values.resize(width, String::new());
    }
}

/// An in-memory drug table: ordered header plus records of the same width.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DrugTable {
    headers: Vec<String>,
    records: Vec<Record>,
}

impl DrugTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            records: Vec::new(),
        }
    }

    /// Builds a table, padding short records with `""` and truncating long ones.
    pub fn from_parts(headers: Vec<String>, records: Vec<Record>) -> Self {
        let mut table = Self::new(headers);
        for record in records {
            table.push_record(record);
        }
        table
    }

    pub fn push_record(&mut self, mut record: Record) {
        record.fit_width(self.headers.len());
        self.records.push(record);
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Position of the first column named exactly `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Appends each missing column at the end of the header and widens every
    /// record with `""`. Columns already present keep their position.
    ///
    /// Returns the index of every requested column, in request order.
    pub fn ensure_columns<S: AsRef<str>>(&mut self, names: &[S]) -> Vec<usize> {
        let mut indices = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            let index = match self.column_index(name) {
                Some(index) => index,
                None => {
                    self.headers.push(name.to_string());
                    self.headers.len() - 1
                }
            };
            indices.push(index);
        }
        let width = self.headers.len();
        for record in &mut self.records {
            record.fit_width(width);
        }
        indices
    }

    /// Overwrites the cell at (`row`, `column`). Out-of-range rows are ignored.
    pub fn set_value(&mut self, row: usize, column: usize, value: String) {
        if let Some(record) = self.records.get_mut(row) {
            record.set(column, value);
        }
    }

    /// Number of records whose value in `column` is non-blank.
    pub fn count_non_empty(&self, column: usize) -> usize {
        self.records
            .iter()
            .filter(|record| !record.get(column).trim().is_empty())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(values: &[&str]) -> Record {
        Record::new(values.iter().map(|value| (*value).to_string()).collect())
    }

    #[test]
    fn from_parts_fits_records_to_header() {
        let table = DrugTable::from_parts(
            vec!["A".to_string(), "B".to_string()],
            vec![record(&["1"]), record(&["1", "2", "3"])],
        );
        assert_eq!(table.records()[0].values(), ["1", ""]);
        assert_eq!(table.records()[1].values(), ["1", "2"]);
    }

    #[test]
    fn ensure_columns_keeps_existing_positions() {
        let mut table = DrugTable::from_parts(
            vec!["A".to_string(), "X".to_string()],
            vec![record(&["1", "x"])],
        );
        let indices = table.ensure_columns(&["X", "Y"]);
        assert_eq!(indices, vec![1, 2]);
        assert_eq!(table.headers(), ["A", "X", "Y"]);
        assert_eq!(table.records()[0].values(), ["1", "x", ""]);
    }

    #[test]
    fn count_non_empty_ignores_whitespace() {
        let table = DrugTable::from_parts(
            vec!["A".to_string()],
            vec![record(&["x"]), record(&["  "]), record(&[""])],
        );
        assert_eq!(table.count_non_empty(0), 1);
    }

    #[test]
    fn set_value_out_of_range_row_is_ignored() {
        let mut table = DrugTable::from_parts(vec!["A".to_string()], vec![record(&["1"])]);
        table.set_value(5, 0, "x".to_string());
        assert_eq!(table.records()[0].get(0), "1");
    }
}
