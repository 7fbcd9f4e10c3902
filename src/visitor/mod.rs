//! Dual-mode traversal over a documentation tree.
//!
//! A traversal walks the tree in document order and hands each node and
//! prose fragment to a consumer through a closed callback surface:
//!
//! - implement [`DocVisitor`] and call [`walk`] to traverse on the
//!   current thread;
//! - implement [`AsyncDocVisitor`] and call [`walk_async`] to traverse
//!   with a suspension point at every callback and cooperative
//!   cancellation via a [`CancellationToken`].
//!
//! The two modes are interchangeable: for the same tree they invoke the
//! identical callback sequence with identical arguments, because both
//! drivers dispatch from the one event stream produced by
//! [`tree_events`]. [`CallRecorder`] captures that stream as labels for
//! tests and debugging.
//!
//! [`CancellationToken`]: tokio_util::sync::CancellationToken

mod events;
mod recorder;
mod traits;
mod walk;

pub use events::{tree_events, DocEvent};
pub use recorder::CallRecorder;
pub use traits::{AsyncDocVisitor, DocVisitor};
pub use walk::{walk, walk_async};
