//! Route handlers organized by resource

pub mod entities;
pub mod health;
pub mod links;

pub use entities::{Exercises, Muscles, Resource};
