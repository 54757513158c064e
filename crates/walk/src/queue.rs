//! crates/walk/src/queue.rs
//! Children-first work queue.

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use logging::trace_walk;

use crate::error::WalkError;
use crate::item::WorkItem;

static NEXT_QUEUE_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum NodeState {
    /// Sitting in the ready list.
    Queued,
    /// Handed out as a [`WorkItem`].
    Active,
    /// Expanded and waiting for `pending` children to complete.
    Parked,
}

#[derive(Debug)]
struct Node {
    path: PathBuf,
    parent: Option<usize>,
    depth: usize,
    expanded: bool,
    pending: usize,
    state: NodeState,
}

/// Counters describing the work performed by a queue.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct QueueStats {
    /// Root operands pushed.
    pub roots: usize,
    /// Directory expansions performed.
    pub expansions: usize,
    /// Children discovered across all expansions.
    pub discovered: usize,
    /// Items completed.
    pub completed: usize,
}

/// Ordered work list that yields every directory after all of its
/// descendants.
///
/// Roots are processed in the order they were pushed. When a directory is
/// expanded its children move to the front of the queue, preserving the order
/// they were supplied in, and the directory itself is parked. The parked
/// directory returns to the front of the queue once its last child completes,
/// this time with [`WorkItem::is_expanded`] set. A directory with no children
/// is requeued straight away.
///
/// The post-order guarantee depends only on completion counting, so it holds
/// for any enumeration order the caller supplies.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use walk::WorkQueue;
///
/// let mut queue = WorkQueue::from_roots(["dir"]);
/// let mut order = Vec::new();
///
/// while let Some(item) = queue.pop() {
///     if item.path() == Path::new("dir") && !item.is_expanded() {
///         queue.expand(item, [PathBuf::from("dir/a"), PathBuf::from("dir/b")])?;
///         continue;
///     }
///     order.push(item.path().to_path_buf());
///     queue.complete(item)?;
/// }
///
/// assert_eq!(order, ["dir/a", "dir/b", "dir"].map(PathBuf::from));
/// # Ok::<(), walk::WalkError>(())
/// ```
#[derive(Debug)]
pub struct WorkQueue {
    id: u64,
    nodes: Vec<Option<Node>>,
    free: Vec<usize>,
    ready: VecDeque<usize>,
    live: usize,
    stats: QueueStats,
}

impl Default for WorkQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: NEXT_QUEUE_ID.fetch_add(1, Ordering::Relaxed),
            nodes: Vec::new(),
            free: Vec::new(),
            ready: VecDeque::new(),
            live: 0,
            stats: QueueStats::default(),
        }
    }

    /// Creates a queue seeded with `roots` in iteration order.
    pub fn from_roots<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut queue = Self::new();
        for root in roots {
            queue.push_root(root);
        }
        queue
    }

    /// Appends a root operand at the back of the queue.
    pub fn push_root(&mut self, path: impl Into<PathBuf>) {
        let slot = self.insert(Node {
            path: path.into(),
            parent: None,
            depth: 0,
            expanded: false,
            pending: 0,
            state: NodeState::Queued,
        });
        self.ready.push_back(slot);
        self.stats.roots += 1;
    }

    /// Takes the item at the front of the queue.
    ///
    /// Returns `None` when nothing is ready. Parked directories are never
    /// returned here until their children are done, so `None` with
    /// [`WorkQueue::is_empty`] returning `false` means items are still out.
    pub fn pop(&mut self) -> Option<WorkItem> {
        let slot = self.ready.pop_front()?;
        let node = self.nodes.get_mut(slot)?.as_mut()?;
        node.state = NodeState::Active;
        Some(WorkItem {
            queue: self.id,
            slot,
            path: node.path.clone(),
            depth: node.depth,
            expanded: node.expanded,
        })
    }

    /// Replaces a directory item with its children.
    ///
    /// Children are queued ahead of everything else, in the order given, and
    /// the directory is parked until all of them complete. Returns the number
    /// of children queued.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError`] when the item belongs to another queue, or when
    /// it was already expanded. In the latter case the item goes back to the
    /// front of the queue unchanged.
    pub fn expand<I>(&mut self, item: WorkItem, children: I) -> Result<usize, WalkError>
    where
        I: IntoIterator,
        I::Item: Into<PathBuf>,
    {
        self.check_owner(&item)?;
        if item.expanded {
            self.requeue(item.slot);
            return Err(WalkError::already_expanded(item.path));
        }

        let children: Vec<PathBuf> = children.into_iter().map(Into::into).collect();
        let count = children.len();
        let depth = item.depth + 1;

        let mut slots = Vec::with_capacity(count);
        for path in children {
            slots.push(self.insert(Node {
                path,
                parent: Some(item.slot),
                depth,
                expanded: false,
                pending: 0,
                state: NodeState::Queued,
            }));
        }
        for &slot in slots.iter().rev() {
            self.ready.push_front(slot);
        }

        if let Some(node) = self.node_mut(item.slot) {
            node.expanded = true;
            node.pending = count;
            node.state = NodeState::Parked;
        }
        self.stats.expansions += 1;
        self.stats.discovered += count;

        if count == 0 {
            trace_walk!("{:?} has no children, requeueing", item.path);
            self.requeue(item.slot);
        } else {
            trace_walk!("expanded {:?} into {} children", item.path, count);
        }
        Ok(count)
    }

    /// Marks an item as finished.
    ///
    /// When the item is the last outstanding child of a parked directory, the
    /// directory moves to the front of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError`] when the item belongs to another queue.
    pub fn complete(&mut self, item: WorkItem) -> Result<(), WalkError> {
        self.check_owner(&item)?;

        let parent = self
            .nodes
            .get_mut(item.slot)
            .and_then(Option::take)
            .and_then(|node| node.parent);
        self.free.push(item.slot);
        self.live -= 1;
        self.stats.completed += 1;

        let Some(parent) = parent else {
            return Ok(());
        };
        let released = match self.node_mut(parent) {
            Some(node) => {
                node.pending = node.pending.saturating_sub(1);
                node.pending == 0
            }
            None => false,
        };
        if released {
            if let Some(node) = self.node_mut(parent) {
                trace_walk!("all children of {:?} done", node.path);
            }
            self.requeue(parent);
        }
        Ok(())
    }

    /// Reports whether every pushed path has been completed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Number of paths pushed or discovered but not yet completed, including
    /// items currently handed out and parked directories.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.live
    }

    /// Number of items that [`WorkQueue::pop`] can return right now.
    #[must_use]
    pub fn ready_len(&self) -> usize {
        self.ready.len()
    }

    /// Returns the work counters accumulated so far.
    #[must_use]
    pub const fn stats(&self) -> QueueStats {
        self.stats
    }

    fn insert(&mut self, node: Node) -> usize {
        self.live += 1;
        if let Some(slot) = self.free.pop() {
            self.nodes[slot] = Some(node);
            slot
        } else {
            self.nodes.push(Some(node));
            self.nodes.len() - 1
        }
    }

    fn node_mut(&mut self, slot: usize) -> Option<&mut Node> {
        self.nodes.get_mut(slot).and_then(Option::as_mut)
    }

    fn requeue(&mut self, slot: usize) {
        if let Some(node) = self.node_mut(slot) {
            node.state = NodeState::Queued;
            self.ready.push_front(slot);
        }
    }

    fn check_owner(&self, item: &WorkItem) -> Result<(), WalkError> {
        let active = self
            .nodes
            .get(item.slot)
            .and_then(Option::as_ref)
            .is_some_and(|node| node.state == NodeState::Active);
        if item.queue == self.id && active {
            Ok(())
        } else {
            Err(WalkError::foreign_item(item.path.clone()))
        }
    }
}
