//! Test support

mod db;

pub(crate) use context::TestContext;
