pub mod csv;

pub use self::csv::{export_headers, export_file_name, render_csv, write_csv};
