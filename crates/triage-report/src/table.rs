//! 等寬文字表格

use std::fmt::Write;

/// 等寬文字表格
#[derive(Debug, Clone, Default)]
pub struct TextTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    /// 以欄位標題創建表格
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// 加入一列（欄位不足時以空白補齊，多出的欄位忽略）
    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = cells.into_iter().map(Into::into).collect();
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// 輸出為字串：標題、分隔線、資料列
    pub fn render(&self) -> String {
        let widths: Vec<usize> = (0..self.headers.len())
            .map(|c| {
                self.rows
                    .iter()
                    .map(|row| row[c].chars().count())
                    .chain(std::iter::once(self.headers[c].chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        Self::write_line(&mut out, &self.headers, &widths);

        let separator_width = widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1);
        let _ = writeln!(out, "{:-<width$}", "", width = separator_width);

        for row in &self.rows {
            Self::write_line(&mut out, row, &widths);
        }

        out
    }

    fn write_line(out: &mut String, cells: &[String], widths: &[usize]) {
        let line = cells
            .iter()
            .zip(widths)
            .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join(" | ");
        let _ = writeln!(out, "{}", line.trim_end());
    }
}
