pub mod constants;
pub mod logs;
pub mod mesalog_errors;

pub use constants::Column;
pub use logs::header_reader::Header;
pub use logs::log_file::LogFile;
pub use logs::table_reader::ColumnTable;
pub use logs::LogKind;
pub use mesalog_errors::MesaLogError;
