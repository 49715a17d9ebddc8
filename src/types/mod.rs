mod row;
mod sql_value;

pub use row::{Fetched, RawQueryResult, Record, Row};
pub use sql_value::SqlValue;
