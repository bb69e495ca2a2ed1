pub mod page_header;
pub mod table;
