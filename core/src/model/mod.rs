pub mod action;
pub mod batch;
pub mod pattern;
pub mod todo;
