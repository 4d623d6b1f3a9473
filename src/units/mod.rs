pub mod conversions;
pub mod offline;
