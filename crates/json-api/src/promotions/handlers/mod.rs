//! Promotion Handlers

pub(crate) mod create;
pub(crate) mod examples;
pub(crate) mod index;
