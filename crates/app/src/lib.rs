//! Basket pricing and promotion engine with PostgreSQL persistence.

pub mod context;
pub mod database;
pub mod domain;
pub mod numeric;

#[cfg(test)]
mod test;

mod uuids;
