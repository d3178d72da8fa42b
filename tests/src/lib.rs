pub use memory::{ExecutorOp, FailingExecutor, MemoryExecutor};

pub use models::{Comment, User};
