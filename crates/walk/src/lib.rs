#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `walk` provides the ordering engine used by ascii-rename to process
//! directory trees. Renaming a directory changes the path of everything below
//! it, so contents have to be renamed first. [`WorkQueue`] guarantees that
//! every directory is yielded after all of its descendants have been
//! completed.
//!
//! # Design
//!
//! - The queue does not touch the filesystem. Callers pop a [`WorkItem`],
//!   decide whether it is a directory, and either hand its children to
//!   [`WorkQueue::expand`] or finish it with [`WorkQueue::complete`].
//! - An expanded directory is parked with a count of outstanding children.
//!   Each completion decrements the count of its parent and the parent
//!   returns to the front of the queue when the count reaches zero.
//! - [`WorkItem`] is not [`Clone`] and is consumed by `expand` or `complete`,
//!   so a path cannot be expanded twice or finished twice by accident.
//!
//! # Invariants
//!
//! - Every pushed or discovered path is yielded exactly once unexpanded and,
//!   if expanded, exactly once more with [`WorkItem::is_expanded`] set.
//! - A directory is completed only after all of its children are completed,
//!   whatever order the children were enumerated in.
//! - Roots are visited in the order they were pushed.
//!
//! # Errors
//!
//! [`WalkError`] reports items handed back to the wrong queue and attempts to
//! expand a directory twice.
//!
//! # Examples
//!
//! ```
//! use std::path::PathBuf;
//! use walk::WorkQueue;
//!
//! let mut queue = WorkQueue::from_roots(["top"]);
//!
//! let top = queue.pop().unwrap();
//! queue.expand(top, [PathBuf::from("top/file")])?;
//!
//! let file = queue.pop().unwrap();
//! assert_eq!(file.path(), std::path::Path::new("top/file"));
//! queue.complete(file)?;
//!
//! let top = queue.pop().unwrap();
//! assert!(top.is_expanded());
//! queue.complete(top)?;
//! assert!(queue.is_empty());
//! # Ok::<(), walk::WalkError>(())
//! ```

mod error;
mod item;
mod queue;


pub use error::{WalkError, WalkErrorKind};
pub use item::WorkItem;
pub use queue::{QueueStats, WorkQueue};
