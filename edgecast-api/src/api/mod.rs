//! `EdgecastClient` implementations of the per-area API traits.

mod cname;
mod customer;
mod dns;
pub(crate) mod error;
mod origin;
mod rules_engine;
mod waf;
