pub mod batch_service;
pub mod todo_service;
