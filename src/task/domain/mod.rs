//! Domain model for the prioritised to-do board.
//!
//! The task domain models board entries — identity, text content,
//! completion state, priority, and the creation timestamp — along with the
//! display ordering rule, keeping transport and storage concerns outside
//! of the domain boundary. There is deliberately no input validation: the
//! board stores what it is given.

mod ids;
mod priority;
mod task;

pub use ids::TaskId;
pub use priority::Priority;
pub use task::{Task, sort_for_display};
