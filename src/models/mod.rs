pub mod node;
pub mod task;
pub mod user;

pub use node::{DEFAULT_NODE_DESCRIPTION, DeleteNodeParams, InsertNodeRequest, TaskNode, UpdateNodeRequest};
pub use task::{CompleteTaskRequest, NewTaskRequest, Task, TaskWithNodes};
pub use user::{LoginRequest, LoginResponse, RegisterRequest, User};
