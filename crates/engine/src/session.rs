//! crates/engine/src/session.rs
//! Drives one rename run over a set of operands.

use std::io::Write;
use std::path::Path;

use logging::{InfoFlag, trace_walk};
use transliterate::{AnyAscii, NameTransliterator, NativeCodec, TextCodec, Transliterator};
use walk::{QueueStats, WorkItem, WorkQueue};

use crate::counters::RunCounters;
use crate::executor::RenameExecutor;
use crate::fs::{FilesystemProvider, LocalFilesystem};
use crate::operands::normalize_operand;
use crate::options::RenameOptions;
use crate::planner::{RenameDecision, RenamePlanner};
use crate::record::{RenameOutcome, RenameRecord, RenameRecordHandler};
use crate::report::{Diagnostics, quoted};

/// Result of a completed run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RunSummary {
    counters: RunCounters,
    queue: QueueStats,
}

impl RunSummary {
    /// Returns the run counters.
    #[must_use]
    pub const fn counters(&self) -> RunCounters {
        self.counters
    }

    /// Returns traversal statistics.
    #[must_use]
    pub const fn queue_stats(&self) -> QueueStats {
        self.queue
    }

    /// Process status: the number of skipped entries.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        self.counters.exit_code()
    }
}

/// A configured rename run.
///
/// # Examples
///
/// ```
/// use engine::{Diagnostics, RenameOptions, RenameSession};
///
/// let temp = tempfile::tempdir()?;
/// let source = temp.path().join("café.txt");
/// std::fs::write(&source, b"")?;
///
/// let options = RenameOptions::builder().build();
/// let mut diagnostics = Diagnostics::new(Vec::new(), Vec::new(), options.verbosity());
/// let summary = RenameSession::new(options).run([&source], &mut diagnostics);
///
/// assert_eq!(summary.exit_code(), 0);
/// assert!(temp.path().join("cafe.txt").exists());
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct RenameSession<F = LocalFilesystem, T = AnyAscii, C = NativeCodec> {
    fs: F,
    names: NameTransliterator<T, C>,
    options: RenameOptions,
}

impl RenameSession {
    /// Creates a session over the local filesystem with the built-in table.
    #[must_use]
    pub const fn new(options: RenameOptions) -> Self {
        Self {
            fs: LocalFilesystem,
            names: NameTransliterator::new(),
            options,
        }
    }
}

impl<F, T, C> RenameSession<F, T, C>
where
    F: FilesystemProvider,
    T: Transliterator,
    C: TextCodec,
{
    /// Creates a session from explicit collaborators.
    #[must_use]
    pub const fn with_parts(fs: F, names: NameTransliterator<T, C>, options: RenameOptions) -> Self {
        Self { fs, names, options }
    }

    /// Returns the session options.
    #[must_use]
    pub const fn options(&self) -> &RenameOptions {
        &self.options
    }

    /// Returns the filesystem the session works on.
    #[must_use]
    pub const fn filesystem(&self) -> &F {
        &self.fs
    }

    /// Processes `roots` in order and returns the run summary.
    pub fn run<I, P, Out, Err>(&self, roots: I, diagnostics: &mut Diagnostics<Out, Err>) -> RunSummary
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
        Out: Write,
        Err: Write,
    {
        self.run_with_handler(roots, diagnostics, &mut |_record: RenameRecord| {})
    }

    /// Processes `roots` in order, passing every record to `handler`.
    ///
    /// Every path reaches exactly one terminal record. Expanded directories
    /// additionally produce one [`RenameOutcome::Deferred`] record before
    /// their children are processed.
    pub fn run_with_handler<I, P, Out, Err, H>(
        &self,
        roots: I,
        diagnostics: &mut Diagnostics<Out, Err>,
        handler: &mut H,
    ) -> RunSummary
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
        Out: Write,
        Err: Write,
        H: RenameRecordHandler + ?Sized,
    {
        let mut queue =
            WorkQueue::from_roots(roots.into_iter().map(|root| normalize_operand(root.as_ref())));
        let planner = RenamePlanner::new(&self.fs, &self.names, &self.options);
        let executor = RenameExecutor::new(&self.fs, self.options.execution());
        let mut counters = RunCounters::new();

        while let Some(item) = queue.pop() {
            diagnostics.verbose(
                InfoFlag::Name,
                format!("Processing {}...", quoted(item.path())),
            );

            let Some(item) =
                self.try_expand(&mut queue, item, diagnostics, handler, &mut counters)
            else {
                continue;
            };

            let source = item.path().to_path_buf();
            let decision = planner.plan(&source);
            let record = executor.execute(source, decision, diagnostics, &mut counters);
            handler.handle(record);

            if let Err(error) = queue.complete(item) {
                diagnostics.error(error.to_string());
            }
        }

        diagnostics.verbose(InfoFlag::Stats, counters.to_string());
        diagnostics.flush();

        RunSummary {
            counters,
            queue: queue.stats(),
        }
    }

    /// Expands `item` when it is an unvisited directory in a recursive run.
    ///
    /// Returns the item back when it should be planned now. A directory that
    /// cannot be enumerated is reported and finished as skipped, without
    /// attempting to rename it.
    fn try_expand<Out, Err, H>(
        &self,
        queue: &mut WorkQueue,
        item: WorkItem,
        diagnostics: &mut Diagnostics<Out, Err>,
        handler: &mut H,
        counters: &mut RunCounters,
    ) -> Option<WorkItem>
    where
        Out: Write,
        Err: Write,
        H: RenameRecordHandler + ?Sized,
    {
        if !self.options.recursive() || item.is_expanded() || !self.fs.is_directory(item.path()) {
            return Some(item);
        }

        let path = item.path().to_path_buf();
        match self.fs.list_children(&path) {
            Ok(children) => {
                diagnostics.verbose(
                    InfoFlag::Name,
                    format!("Queueing children of {}...", quoted(&path)),
                );
                diagnostics.verbose(
                    InfoFlag::Name,
                    format!("Skipping {} for now...", quoted(&path)),
                );
                if let Err(error) = queue.expand(item, children) {
                    diagnostics.error(error.to_string());
                }
                handler.handle(RenameRecord::new(
                    path,
                    RenameDecision::Defer,
                    RenameOutcome::Deferred,
                ));
            }
            Err(error) => {
                trace_walk!("enumeration of {:?} failed: {}", path, error);
                diagnostics.error(error.to_string());
                diagnostics.verbose(InfoFlag::Skip, format!("Skipping {}...", quoted(&path)));
                counters.record_skipped();
                if let Err(walk_error) = queue.complete(item) {
                    diagnostics.error(walk_error.to_string());
                }
                handler.handle(RenameRecord::new(
                    path,
                    RenameDecision::Defer,
                    RenameOutcome::Failed(error),
                ));
            }
        }
        None
    }
}
