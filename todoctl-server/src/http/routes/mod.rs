//! Route handlers organized by resource

pub mod frontend;
pub mod health;
pub mod todos;
