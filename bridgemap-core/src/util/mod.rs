pub mod parse;
pub mod table;
