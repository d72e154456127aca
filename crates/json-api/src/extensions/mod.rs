//! Extension traits and request helpers

mod depot;
mod request;

pub(crate) use depot::DepotExt as _;
pub(crate) use request::{INVALID_JSON_BODY, parse_json_body};
