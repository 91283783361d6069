extern crate rand;
extern crate serde;
extern crate serde_json;

pub mod common;
pub mod envs;
pub mod mdps;

pub use common::defs::*;
