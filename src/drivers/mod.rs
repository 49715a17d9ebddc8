mod tokio_postgres;

pub use self::in_memory_test::{
    InMemoryResponseBuilder, InMemoryTestDriver, RecordedQuery, StatementKind,
};
pub use self::tokio_postgres::TokioPostgresDriver;
