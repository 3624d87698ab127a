//! Task lifecycle filter
//!
//! Turns a case's task list into the ordered "upcoming" view, keeps a single
//! current-task pointer valid, and advances it as tasks are completed.

pub mod board;
pub mod filter;
pub mod selection;
pub mod source;

// Re-export commonly used items
pub use board::{TaskBoard, WorkspaceTab};
pub use filter::{compare_tasks, is_upcoming, overdue_count, tasks_by_responsible, upcoming_tasks};
pub use selection::{mark_complete, reconcile_selection, select_initial_task};
pub use source::{DEMO_ROSTER, DemoTaskSource, DemoTaskTemplate, RealTaskSource, TaskSource, task_source_for};
