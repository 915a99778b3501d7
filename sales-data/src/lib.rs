#![deny(rust_2018_idioms)]
#![deny(clippy::correctness)]
#![deny(clippy::perf)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod channel;
pub mod customer;
pub mod dataset;
pub mod dates;
pub mod error;
pub mod gender;
pub mod identifier;
pub mod names;
pub mod order;
pub mod product;
