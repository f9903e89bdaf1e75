#![deny(clippy::all)]

pub mod page;
pub mod user;
