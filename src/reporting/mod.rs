pub mod sink;
pub mod table;
