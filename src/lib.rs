//! Solve and play the NYT daily puzzle games

#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

#[macro_use]
extern crate log;

pub mod collections;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod file;
pub mod games;
pub mod menu;
pub mod solve;
