// fixtures/tables/mod.rs
//
// Each test table is a struct that implements the TestTable trait.

pub mod catalog;

pub use catalog::CatalogTables;
