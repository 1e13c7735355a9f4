pub mod error;
pub mod table;

pub use error::TableError;
pub use table::{
    Table, decode_legacy, parse_table, parse_table_bytes, parse_table_file, split_lines,
};
