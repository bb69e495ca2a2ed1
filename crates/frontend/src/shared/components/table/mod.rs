pub mod table_cell_checkbox;

pub use table_cell_checkbox::TableCellCheckbox;
