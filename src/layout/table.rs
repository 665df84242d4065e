//! Bordered ASCII tables (`+ - |`) built from padded cells.

use serde::Deserialize;

use super::{Align, Cell, build_line, draw_separator};

/// Column definition: header text, width in half-width units, body alignment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Column {
    pub header: String,
    pub width: usize,
    #[serde(default)]
    pub align: Align,
}

impl Column {
    pub fn new(header: impl Into<String>, width: usize, align: Align) -> Self {
        Self {
            header: header.into(),
            width,
            align,
        }
    }
}

/// A bordered table.
///
/// ## Example
///
/// ```
/// use dotprint::layout::{Align, Column, Table};
///
/// let lines = Table::new(vec![
///     Column::new("Item", 6, Align::Left),
///     Column::new("Qty", 4, Align::Right),
/// ])
/// .row(["Bolt", "12"])
/// .lines();
///
/// assert_eq!(lines, vec![
///     "+------+----+",
///     "| Item |Qty |",
///     "+------+----+",
///     "|Bolt  |  12|",
///     "+------+----+",
/// ]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a body row. Missing cells print empty; extra cells are ignored.
    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    /// Total width of a rendered line, borders included.
    pub fn width(&self) -> usize {
        self.columns.iter().map(|c| c.width).sum::<usize>() + self.columns.len() + 1
    }

    /// `+----+---+` border line.
    pub fn border(&self) -> String {
        let mut line = String::from("+");
        for column in &self.columns {
            line.push_str(&draw_separator(column.width, '-'));
            line.push('+');
        }
        line
    }

    fn framed<'a>(&'a self, texts: impl Iterator<Item = (&'a str, Align)>) -> String {
        let mut cells = vec![Cell::new("|", 1, Align::Left)];
        for (column, (text, align)) in self.columns.iter().zip(texts) {
            cells.push(Cell::new(text, column.width, align));
            cells.push(Cell::new("|", 1, Align::Left));
        }
        build_line(&cells)
    }

    /// Render border, centered header, border, body rows, border.
    pub fn lines(&self) -> Vec<String> {
        let border = self.border();
        let mut out = Vec::with_capacity(self.rows.len() + 4);

        out.push(border.clone());
        out.push(self.framed(
            self.columns
                .iter()
                .map(|c| (c.header.as_str(), Align::Center)),
        ));
        out.push(border.clone());

        for row in &self.rows {
            out.push(self.framed(self.columns.iter().enumerate().map(|(i, c)| {
                (row.get(i).map(String::as_str).unwrap_or(""), c.align)
            })));
        }

        out.push(border);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::text_width;
    use pretty_assertions::assert_eq;

    fn sample() -> Table {
        Table::new(vec![
            Column::new("品名", 10, Align::Left),
            Column::new("数量", 6, Align::Right),
        ])
    }

    #[test]
    fn test_border() {
        assert_eq!(sample().border(), "+----------+------+");
        assert_eq!(sample().width(), 19);
    }

    #[test]
    fn test_cjk_rows_keep_alignment() {
        let lines = sample().row(["螺丝钉", "200"]).row(["Washer", "5"]).lines();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1], "|   品名   | 数量 |");
        assert_eq!(lines[3], "|螺丝钉    |   200|");
        assert_eq!(lines[4], "|Washer    |     5|");
        assert!(lines.iter().all(|l| text_width(l) == 19));
    }

    #[test]
    fn test_short_and_long_rows() {
        let lines = sample()
            .row(["only name"])
            .row(["a", "b", "ignored"])
            .lines();
        assert_eq!(lines[3], "|only name |      |");
        assert_eq!(lines[4], "|a         |     b|");
    }

    #[test]
    fn test_overlong_cell_truncated() {
        let lines = sample().row(["超长的商品名称描述", "1"]).lines();
        assert_eq!(lines[3], "|超长的商品|     1|");
    }

    #[test]
    fn test_column_deserialize_default_align() {
        let c: Column = serde_json::from_str(r#"{"header": "Qty", "width": 4}"#).unwrap();
        assert_eq!(c, Column::new("Qty", 4, Align::Left));
    }
}
