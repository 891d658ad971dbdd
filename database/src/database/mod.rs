pub mod database;
pub mod options;
pub mod table;
