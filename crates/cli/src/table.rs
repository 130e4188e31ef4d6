use std::io::{self, Write};

/// Labeled numeric columns of equal length, written as CSV.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<(String, Vec<f64>)>,
}

impl Table {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column.
    ///
    /// # Panics
    ///
    /// Panics if `values` differs in length from the columns already present.
    #[must_use]
    pub fn column(mut self, label: impl Into<String>, values: Vec<f64>) -> Self {
        if let Some((first, existing)) = self.columns.first() {
            assert_eq!(
                existing.len(),
                values.len(),
                "column length must match `{first}`"
            );
        }
        self.columns.push((label.into(), values));
        self
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.columns.first().map_or(0, |(_, values)| values.len())
    }

    pub fn write_csv<W: Write>(&self, mut out: W) -> io::Result<()> {
        let header: Vec<&str> = self.columns.iter().map(|(label, _)| label.as_str()).collect();
        writeln!(out, "{}", header.join(","))?;

        for row in 0..self.rows() {
            let mut first = true;
            for (_, values) in &self.columns {
                if !first {
                    write!(out, ",")?;
                }
                write!(out, "{}", values[row])?;
                first = false;
            }
            writeln!(out)?;
        }
        out.flush()
    }
}
