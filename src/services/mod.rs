pub mod access;
pub mod ordering;
pub mod sweeper;
pub mod tasks;

pub use sweeper::SessionSweeper;
pub use tasks::TaskService;
