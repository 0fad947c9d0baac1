//! Domain model for task records and their scheduled periods.
//!
//! The domain keeps record ownership and validation rules in one place while
//! leaving every wire concern to [`crate::wire`]: a [`Task`] owns its
//! [`Title`] text exclusively, carries exactly [`TASK_PERIOD_COUNT`]
//! [`Period`] values inline, and accepts any pair of [`Timestamp`] endpoints
//! without ordering checks.

mod error;
mod period;
mod task;

pub use error::TaskDomainError;
pub use period::{Period, Timestamp, render_period};
pub use task::{TASK_PERIOD_COUNT, Task, Title, render_task};
