//! Table module
//!
//! Renders row-oriented data as pipe-delimited Markdown tables with
//! fixed-width columns, and reshapes key -> values mappings into rows.

mod json;
mod layout;

pub use json::{dict_from_json, list_from_json};
pub use layout::{
    column_widths, dict_rows, line_string, render_list, separator_line, sort_columns, sort_items,
    transpose_dict, Row,
};
