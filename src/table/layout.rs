use std::cmp::Ordering;

/// A table row of already-stringified cells
pub type Row = Vec<String>;

/// Literal width of a cell
fn cell_width(cell: &str) -> usize {
    cell.chars().count()
}

/// Per-column width: the widest cell of that column across all rows
pub fn column_widths(rows: &[Row]) -> Vec<usize> {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0; columns];

    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell_width(cell));
        }
    }

    widths
}

/// Format one row as `| a | b |`, cells padded to their column width
pub fn line_string(row: &[String], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (i, width) in widths.iter().enumerate() {
        let cell = row.get(i).map(String::as_str).unwrap_or("");
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(width.saturating_sub(cell_width(cell))));
        line.push_str(" |");
    }
    line
}

/// Header separator `| --- | - |`
pub fn separator_line(widths: &[usize]) -> String {
    let mut line = String::from("|");
    for width in widths {
        line.push(' ');
        line.push_str(&"-".repeat((*width).max(1)));
        line.push_str(" |");
    }
    line
}

/// Render rows as a Markdown table, one `\n`-terminated line per row.
///
/// With `first_line_header`, the first row becomes the header followed by a
/// separator line. Without it, every row's first cell is emphasized.
/// A table without columns renders as nothing.
pub fn render_list(rows: &[Row], first_line_header: bool) -> String {
    let rows: Vec<Row> = if first_line_header {
        rows.to_vec()
    } else {
        rows.iter()
            .map(|row| {
                let mut row = row.clone();
                if let Some(first) = row.first_mut() {
                    *first = format!("*{}*", first);
                }
                row
            })
            .collect()
    };

    let widths = column_widths(&rows);
    let mut output = String::new();
    if widths.is_empty() {
        return output;
    }
    let mut values = rows.iter();

    if first_line_header {
        let Some(header) = values.next() else {
            return output;
        };
        output.push_str(&line_string(header, &widths));
        output.push('\n');
        output.push_str(&separator_line(&widths));
        output.push('\n');
    }

    for row in values {
        output.push_str(&line_string(row, &widths));
        output.push('\n');
    }

    output
}

/// Turn key -> column values into a header row of keys plus value rows.
///
/// Produces one value row per list element; shorter lists leave empty cells.
pub fn transpose_dict(items: &[(String, Row)]) -> Vec<Row> {
    let height = items.iter().map(|(_, values)| values.len()).max().unwrap_or(0);

    let mut rows = Vec::with_capacity(height + 1);
    rows.push(items.iter().map(|(key, _)| key.clone()).collect());

    for i in 0..height {
        rows.push(
            items
                .iter()
                .map(|(_, values)| values.get(i).cloned().unwrap_or_default())
                .collect(),
        );
    }

    rows
}

/// One row per key: `[key, v1, v2, ...]`
pub fn dict_rows(items: &[(String, Row)]) -> Vec<Row> {
    items
        .iter()
        .map(|(key, values)| {
            let mut row = Vec::with_capacity(values.len() + 1);
            row.push(key.clone());
            row.extend(values.iter().cloned());
            row
        })
        .collect()
}

/// Order cells numerically when both parse as numbers, numbers first
fn compare_cells(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<f64>(), b.trim().parse::<f64>()) {
        (Ok(x), Ok(y)) => x.total_cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

fn compare_sequences(a: &[String], b: &[String]) -> Ordering {
    for (x, y) in a.iter().zip(b) {
        match compare_cells(x, y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    a.len().cmp(&b.len())
}

/// Reorder columns by their values read top to bottom
pub fn sort_columns(rows: &[Row]) -> Vec<Row> {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);

    let mut columns: Vec<Row> = (0..width)
        .map(|c| {
            rows.iter()
                .map(|row| row.get(c).cloned().unwrap_or_default())
                .collect()
        })
        .collect();
    columns.sort_by(|a, b| compare_sequences(a, b));

    (0..rows.len())
        .map(|r| columns.iter().map(|column| column[r].clone()).collect())
        .collect()
}

/// Sort key -> values pairs by key, then by values
pub fn sort_items(items: &[(String, Row)]) -> Vec<(String, Row)> {
    let mut items = items.to_vec();
    items.sort_by(|(ka, va), (kb, vb)| {
        compare_cells(ka, kb).then_with(|| compare_sequences(va, vb))
    });
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Row> {
        data.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    fn items(data: &[(&str, &[&str])]) -> Vec<(String, Row)> {
        data.iter()
            .map(|(k, v)| (k.to_string(), v.iter().map(|s| s.to_string()).collect()))
            .collect()
    }

    #[test]
    fn test_column_widths_use_longest_cell() {
        let table = rows(&[&["id", "name"], &["1", "alexandra"], &["1234", "bo"]]);
        assert_eq!(column_widths(&table), vec![4, 9]);
    }

    #[test]
    fn test_column_widths_count_characters() {
        let table = rows(&[&["größe"], &["ab"]]);
        assert_eq!(column_widths(&table), vec![5]);
    }

    #[test]
    fn test_column_widths_ragged_rows() {
        let table = rows(&[&["a"], &["b", "ccc"]]);
        assert_eq!(column_widths(&table), vec![1, 3]);
    }

    #[test]
    fn test_line_string_pads_cells() {
        assert_eq!(
            line_string(&["a".to_string(), "bb".to_string()], &[3, 2]),
            "| a   | bb |"
        );
        assert_eq!(line_string(&["a".to_string()], &[1, 2]), "| a |    |");
    }

    #[test]
    fn test_separator_line() {
        assert_eq!(separator_line(&[3, 1, 0]), "| --- | - | - |");
    }

    #[test]
    fn test_render_list_with_header() {
        let table = rows(&[&["3", "1", "2"], &["4", "5", "6"], &["10", "11", "12"]]);
        assert_eq!(
            render_list(&table, true),
            "| 3  | 1  | 2  |\n| -- | -- | -- |\n| 4  | 5  | 6  |\n| 10 | 11 | 12 |\n"
        );
    }

    #[test]
    fn test_render_list_without_header_emphasizes_first_cell() {
        let table = rows(&[&["a", "1"], &["bb", "2"]]);
        assert_eq!(render_list(&table, false), "| *a*  | 1 |\n| *bb* | 2 |\n");
    }

    #[test]
    fn test_render_list_empty() {
        assert_eq!(render_list(&[], true), "");
        assert_eq!(render_list(&[], false), "");
    }

    #[test]
    fn test_render_list_without_columns() {
        assert_eq!(render_list(&[vec![]], true), "");
        assert_eq!(render_list(&[vec![], vec![]], false), "");
        assert_eq!(render_list(&transpose_dict(&[]), true), "");
    }

    #[test]
    fn test_rendered_lines_match_column_widths() {
        let table = rows(&[&["key", "v"], &["k", "value"]]);
        let rendered = render_list(&table, true);
        let lengths: Vec<usize> = rendered.lines().map(|l| l.chars().count()).collect();
        assert!(lengths.iter().all(|&len| len == lengths[0]));
    }

    #[test]
    fn test_transpose_dict_shape() {
        let data = items(&[("x", &["1", "2", "3", "4"]), ("y", &["5", "6", "7", "8"])]);
        let table = transpose_dict(&data);
        assert_eq!(table[0], vec!["x", "y"]);
        assert_eq!(table[1..].len(), 4);
        assert!(table.iter().all(|row| row.len() == 2));
        assert_eq!(table[4], vec!["4", "8"]);
    }

    #[test]
    fn test_transpose_dict_pads_short_lists() {
        let data = items(&[("a", &["1", "2"]), ("b", &["3"])]);
        let table = transpose_dict(&data);
        assert_eq!(table, rows(&[&["a", "b"], &["1", "3"], &["2", ""]]));
    }

    #[test]
    fn test_dict_rows() {
        let data = items(&[("3", &["4", "7"]), ("1", &["5"])]);
        assert_eq!(dict_rows(&data), rows(&[&["3", "4", "7"], &["1", "5"]]));
    }

    #[test]
    fn test_sort_columns_by_header_then_values() {
        let table = rows(&[&["3", "1", "2"], &["4", "5", "6"]]);
        assert_eq!(
            sort_columns(&table),
            rows(&[&["1", "2", "3"], &["5", "6", "4"]])
        );
    }

    #[test]
    fn test_sort_columns_numeric_order() {
        let table = rows(&[&["10", "9", "b", "a"]]);
        assert_eq!(sort_columns(&table), rows(&[&["9", "10", "a", "b"]]));
    }

    #[test]
    fn test_sort_items() {
        let data = items(&[("3", &["4"]), ("1", &["5"]), ("2", &["6"])]);
        let sorted = sort_items(&data);
        let keys: Vec<&str> = sorted.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["1", "2", "3"]);
    }
}
