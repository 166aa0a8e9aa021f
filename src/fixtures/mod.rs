// fixtures/mod.rs - Test fixtures module
//
// A fixture is reusable setup code: the schema plus a small catalog
// with known ids, written once and applied by every database test.
//
// Tests drop the `store` schema, run the fixture SQL in order, and can
// then assert against the data below by id.

pub mod tables;

/// A simple trait that all test tables must implement
pub trait TestTable {
    /// The SQL commands to create and populate this table
    /// Returns a slice of SQL strings that should be executed in order
    fn setup_sql() -> &'static [&'static str];
}
