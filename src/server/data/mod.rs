//! Database repository layer for all domain entities.
//!
//! One repository struct per table. Repositories use SeaORM entity models internally
//! and return domain models, so the conversion between the two happens here at the
//! infrastructure boundary. Business rules such as uniqueness checks live in the
//! service layer; a repository only reads and writes rows.

pub mod booking;
pub mod hotel;
pub mod user;

#[cfg(test)]
mod test;
