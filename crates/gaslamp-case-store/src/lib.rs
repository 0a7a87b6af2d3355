//! PostgreSQL-backed case document store.
//!
//! Cases are stored whole as JSONB documents, one row per case. Roster and
//! scene appends are single `UPDATE` statements that concatenate onto the
//! stored array, so concurrent appends to the same case serialize on the
//! row lock instead of clobbering each other.

pub mod pg_case_repository;

pub use pg_case_repository::PgCaseRepository;
