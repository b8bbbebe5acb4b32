#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

pub mod cli;
pub mod core;
pub mod export;
pub mod fmt;
pub mod form;
pub mod prelude;
pub mod quantity;
pub mod tables;
pub mod utility;
