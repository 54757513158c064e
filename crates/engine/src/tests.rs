use super::*;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use logging::VerbosityConfig;
use transliterate::NameTransliterator;

/// Mutating call observed by [`RecordingFilesystem`].
#[derive(Clone, Debug, Eq, PartialEq)]
enum Mutation {
    Rename(PathBuf, PathBuf),
    Remove(PathBuf),
    CreateDirectories(PathBuf),
}

/// Local filesystem wrapper that logs every mutating call and can hand out
/// directory listings in reverse order.
#[derive(Default)]
struct RecordingFilesystem {
    mutations: RefCell<Vec<Mutation>>,
    reverse_listings: bool,
}

impl RecordingFilesystem {
    fn reversed() -> Self {
        Self {
            reverse_listings: true,
            ..Self::default()
        }
    }

    fn mutations(&self) -> Vec<Mutation> {
        self.mutations.borrow().clone()
    }
}

impl FilesystemProvider for RecordingFilesystem {
    fn exists(&self, path: &Path) -> bool {
        LocalFilesystem.exists(path)
    }

    fn is_directory(&self, path: &Path) -> bool {
        LocalFilesystem.is_directory(path)
    }

    fn list_children(&self, path: &Path) -> Result<Vec<PathBuf>, FsError> {
        let mut children = LocalFilesystem.list_children(path)?;
        if self.reverse_listings {
            children.reverse();
        }
        Ok(children)
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<(), FsError> {
        self.mutations
            .borrow_mut()
            .push(Mutation::Rename(from.to_path_buf(), to.to_path_buf()));
        LocalFilesystem.rename(from, to)
    }

    fn remove(&self, path: &Path) -> Result<(), FsError> {
        self.mutations
            .borrow_mut()
            .push(Mutation::Remove(path.to_path_buf()));
        LocalFilesystem.remove(path)
    }

    fn create_directories(&self, path: &Path) -> Result<(), FsError> {
        self.mutations
            .borrow_mut()
            .push(Mutation::CreateDirectories(path.to_path_buf()));
        LocalFilesystem.create_directories(path)
    }
}

struct Run {
    summary: RunSummary,
    stdout: String,
    stderr: String,
    records: Vec<(PathBuf, bool)>,
}

fn run_session<F: FilesystemProvider>(fs: &F, options: RenameOptions, roots: &[PathBuf]) -> Run {
    let session = RenameSession::with_parts(fs, NameTransliterator::new(), options);
    let mut diagnostics = Diagnostics::new(Vec::new(), Vec::new(), options.verbosity());
    let mut records = Vec::new();
    let summary = session.run_with_handler(roots, &mut diagnostics, &mut |record: RenameRecord| {
        records.push((record.source().to_path_buf(), record.is_terminal()));
    });
    let (stdout, stderr) = diagnostics.into_inner();
    Run {
        summary,
        stdout: String::from_utf8(stdout).expect("utf-8 stdout"),
        stderr: String::from_utf8(stderr).expect("utf-8 stderr"),
        records,
    }
}

fn run_local(options: RenameOptions, roots: &[PathBuf]) -> Run {
    run_session(&LocalFilesystem, options, roots)
}

fn touch(path: &Path) {
    fs::write(path, b"contents").expect("write file");
}

#[test]
fn single_file_is_renamed() {
    let temp = tempfile::tempdir().expect("tempdir");
    let source = temp.path().join("café.txt");
    touch(&source);

    let run = run_local(RenameOptions::default(), &[source.clone()]);

    assert!(!source.exists());
    assert!(temp.path().join("cafe.txt").exists());
    assert_eq!(run.summary.exit_code(), 0);
    assert_eq!(run.summary.counters().renamed(), 1);
    assert_eq!(
        run.stdout,
        format!(
            "Renaming \"{}\" to \"{}\"...\n",
            source.display(),
            temp.path().join("cafe.txt").display()
        )
    );
    assert!(run.stderr.is_empty());
}

#[test]
fn conflict_is_skipped_and_reported() {
    let temp = tempfile::tempdir().expect("tempdir");
    let source = temp.path().join("café.txt");
    let target = temp.path().join("cafe.txt");
    touch(&source);
    fs::write(&target, b"keep").expect("write target");

    let recorder = RecordingFilesystem::default();
    let run = run_session(&recorder, RenameOptions::default(), &[source.clone()]);

    assert!(source.exists());
    assert_eq!(fs::read(&target).expect("read target"), b"keep");
    assert!(recorder.mutations().is_empty());
    assert_eq!(run.summary.exit_code(), 1);
    assert_eq!(run.summary.counters().skipped(), 1);
    assert_eq!(
        run.stderr,
        format!(
            "ERROR: \"{}\" already exists.\nERROR: Specify --overwrite to overwrite.\n",
            target.display()
        )
    );
}

#[test]
fn overwrite_replaces_existing_target() {
    let temp = tempfile::tempdir().expect("tempdir");
    let source = temp.path().join("café.txt");
    let target = temp.path().join("cafe.txt");
    fs::write(&source, b"new").expect("write source");
    fs::write(&target, b"old").expect("write target");

    let options = RenameOptions::builder().overwrite(true).build();
    let recorder = RecordingFilesystem::default();
    let run = run_session(&recorder, options, &[source.clone()]);

    assert_eq!(run.summary.exit_code(), 0);
    assert_eq!(fs::read(&target).expect("read target"), b"new");
    assert_eq!(
        recorder.mutations(),
        vec![
            Mutation::Remove(target.clone()),
            Mutation::Rename(source, target),
        ]
    );
}

#[test]
fn recursive_run_renames_children_before_parent() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path().join("Déjà");
    fs::create_dir(&root).expect("mkdir");
    touch(&root.join("vu.txt"));
    touch(&root.join("ça.txt"));

    let options = RenameOptions::builder().recursive(true).verbose_level(1).build();
    let recorder = RecordingFilesystem::default();
    let run = run_session(
        &recorder,
        options,
        &[PathBuf::from(format!("{}/", root.display()))],
    );

    let renamed = temp.path().join("Deja");
    assert!(renamed.join("vu.txt").exists());
    assert!(renamed.join("ca.txt").exists());
    assert!(!root.exists());
    assert_eq!(
        recorder.mutations(),
        vec![
            Mutation::Rename(root.join("ça.txt"), root.join("ca.txt")),
            Mutation::Rename(root.clone(), renamed.clone()),
        ]
    );

    let expected = [
        format!("Processing \"{}\"...", root.display()),
        format!("Queueing children of \"{}\"...", root.display()),
        format!("Skipping \"{}\" for now...", root.display()),
        format!("Processing \"{}\"...", root.join("vu.txt").display()),
        format!("No need to rename \"{}\".", root.join("vu.txt").display()),
        format!("Processing \"{}\"...", root.join("ça.txt").display()),
        format!(
            "Renaming \"{}\" to \"{}\"...",
            root.join("ça.txt").display(),
            root.join("ca.txt").display()
        ),
        format!("Processing \"{}\"...", root.display()),
        format!("Renaming \"{}\" to \"{}\"...", root.display(), renamed.display()),
        "Renamed: 2, Skipped: 0, Total: 2".to_owned(),
    ];
    assert_eq!(run.stdout.lines().collect::<Vec<_>>(), expected);
    assert_eq!(run.summary.counters().unchanged(), 1);
}

#[test]
fn reversed_listing_keeps_post_order() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path().join("Ærø");
    let nested = root.join("Ñandú");
    fs::create_dir_all(&nested).expect("mkdir");
    touch(&nested.join("piñata.txt"));
    touch(&root.join("él.txt"));
    touch(&root.join("zoë.txt"));

    let options = RenameOptions::builder().recursive(true).build();
    let recorder = RecordingFilesystem::reversed();
    let run = run_session(&recorder, options, &[root.clone()]);

    assert_eq!(run.summary.exit_code(), 0);
    assert_eq!(run.summary.counters().renamed(), 5);

    let renames: Vec<(PathBuf, PathBuf)> = recorder
        .mutations()
        .into_iter()
        .filter_map(|mutation| match mutation {
            Mutation::Rename(from, to) => Some((from, to)),
            _ => None,
        })
        .collect();
    let position = |path: &Path| {
        renames
            .iter()
            .position(|(from, _)| from == path)
            .expect("renamed path")
    };
    assert!(position(&nested.join("piñata.txt")) < position(&nested));
    assert!(position(&nested) < position(&root));
    assert!(position(&root.join("él.txt")) < position(&root));
    assert!(position(&root.join("zoë.txt")) < position(&root));
    assert_eq!(renames.last().map(|(from, _)| from.clone()), Some(root));

    let names = NameTransliterator::new();
    let ascii = |name: &str| String::from_utf8(names.transliterate(name.as_bytes())).expect("ascii");
    let renamed = temp.path().join(ascii("Ærø"));
    assert_eq!(renamed, temp.path().join("Aero"));
    assert!(renamed.join("Nandu").join("pinata.txt").exists());
    assert!(renamed.join("el.txt").exists());
    assert!(renamed.join("zoe.txt").exists());
}

#[test]
fn names_that_become_dot_entries_never_touch_siblings() {
    let temp = tempfile::tempdir().expect("tempdir");
    let dir = temp.path().join("d");
    fs::create_dir(&dir).expect("mkdir");
    let keep = dir.join("keep.txt");
    touch(&keep);
    let current = dir.join("\u{3002}");
    let parent = dir.join("\u{2025}");
    touch(&current);
    touch(&parent);

    let options = RenameOptions::builder().overwrite(true).build();
    let recorder = RecordingFilesystem::default();
    let run = run_session(&recorder, options, &[current.clone(), parent.clone()]);

    assert!(recorder.mutations().is_empty());
    assert!(keep.exists());
    assert!(current.exists());
    assert!(parent.exists());
    assert_eq!(run.summary.counters().skipped(), 2);
    assert_eq!(run.summary.exit_code(), 2);
    assert_eq!(run.stderr.matches("special entry").count(), 2);
    assert!(run.stdout.is_empty());
}

#[test]
fn every_path_gets_one_terminal_record() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path().join("dir");
    fs::create_dir_all(root.join("empty")).expect("mkdir");
    touch(&root.join("file"));

    let options = RenameOptions::builder().recursive(true).build();
    let run = run_local(options, &[root.clone()]);

    let terminal: Vec<&PathBuf> = run
        .records
        .iter()
        .filter(|(_, terminal)| *terminal)
        .map(|(path, _)| path)
        .collect();
    assert_eq!(terminal, vec![&root.join("empty"), &root.join("file"), &root]);

    let deferred = run.records.iter().filter(|(_, terminal)| !*terminal).count();
    assert_eq!(deferred, 2);
    assert_eq!(run.summary.queue_stats().expansions, 2);
}

#[test]
fn second_run_renames_nothing() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path().join("Déjà");
    fs::create_dir(&root).expect("mkdir");
    touch(&root.join("ça.txt"));
    let options = RenameOptions::builder().recursive(true).build();

    let first = run_local(options, &[root]);
    assert_eq!(first.summary.counters().renamed(), 2);

    let recorder = RecordingFilesystem::default();
    let second = run_session(&recorder, options, &[temp.path().join("Deja")]);
    assert_eq!(second.summary.counters().renamed(), 0);
    assert_eq!(second.summary.counters().unchanged(), 2);
    assert_eq!(second.summary.exit_code(), 0);
    assert!(recorder.mutations().is_empty());
    assert!(second.stdout.is_empty());
}

#[test]
fn no_op_mode_never_mutates() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path().join("Déjà");
    fs::create_dir(&root).expect("mkdir");
    touch(&root.join("ça.txt"));
    touch(&root.join("日本語.txt"));
    let options = RenameOptions::builder()
        .no_op(true)
        .recursive(true)
        .overwrite(true)
        .parents(true)
        .build();

    let recorder = RecordingFilesystem::default();
    let run = run_session(&recorder, options, &[root.clone()]);

    assert!(recorder.mutations().is_empty());
    assert!(root.join("ça.txt").exists());
    assert!(root.join("日本語.txt").exists());
    assert_eq!(run.summary.counters().renamed(), 3);
    assert_eq!(run.stdout.matches("Would have renamed").count(), 3);
    assert!(!run.stdout.contains("Renaming"));
}

#[test]
fn no_op_verbose_reports_would_rename_and_summary() {
    let temp = tempfile::tempdir().expect("tempdir");
    let source = temp.path().join("日本語.txt");
    touch(&source);
    let names = NameTransliterator::new();
    let ascii = String::from_utf8(names.transliterate("日本語.txt".as_bytes())).expect("ascii");
    let target = temp.path().join(&ascii);

    let options = RenameOptions::builder().no_op(true).verbose_level(1).build();
    let run = run_local(options, &[source.clone()]);

    assert!(source.exists());
    assert!(!target.exists());
    assert_eq!(
        run.stdout,
        format!(
            "Processing \"{src}\"...\nWould have renamed \"{src}\" to \"{dst}\"...\nRenamed: 1, Skipped: 0, Total: 1\n",
            src = source.display(),
            dst = target.display(),
        )
    );
}

#[test]
fn missing_operand_is_counted() {
    let temp = tempfile::tempdir().expect("tempdir");
    let missing = temp.path().join("absent-é");
    let present = temp.path().join("présent");
    touch(&present);

    let run = run_local(RenameOptions::default(), &[missing.clone(), present]);

    assert_eq!(run.summary.exit_code(), 1);
    assert_eq!(run.summary.counters().renamed(), 1);
    assert_eq!(
        run.stderr,
        format!("ERROR: \"{}\" doesn't exist.\n", missing.display())
    );
    assert!(temp.path().join("present").exists());
}

#[test]
fn directories_are_plain_items_without_recursion() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path().join("Déjà");
    fs::create_dir(&root).expect("mkdir");
    touch(&root.join("ça.txt"));

    let run = run_local(RenameOptions::default(), &[root]);

    assert_eq!(run.summary.counters().renamed(), 1);
    assert!(temp.path().join("Deja").join("ça.txt").exists());
    assert_eq!(run.summary.queue_stats().expansions, 0);
}

#[test]
fn verbose_skip_lines_follow_errors() {
    let temp = tempfile::tempdir().expect("tempdir");
    let missing = temp.path().join("gone");

    let options = RenameOptions::builder().verbose_level(1).build();
    let run = run_local(options, &[missing.clone()]);

    assert_eq!(
        run.stdout,
        format!(
            "Processing \"{path}\"...\nSkipping \"{path}\"...\nRenamed: 0, Skipped: 1, Total: 1\n",
            path = missing.display()
        )
    );
}

#[cfg(unix)]
#[test]
fn malformed_name_drops_invalid_byte() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp = tempfile::tempdir().expect("tempdir");
    let source = temp.path().join(OsStr::from_bytes(b"file\xFFname.txt"));
    // Some filesystems refuse names that are not valid UTF-8.
    if fs::write(&source, b"").is_err() {
        return;
    }

    let run = run_local(RenameOptions::default(), &[source.clone()]);

    assert_eq!(run.summary.exit_code(), 0);
    assert!(temp.path().join("filename.txt").exists());
    assert!(!LocalFilesystem.exists(&source));
}

#[cfg(unix)]
#[test]
fn unreadable_directory_is_skipped() {
    use std::os::unix::fs::PermissionsExt;

    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path().join("Déjà");
    fs::create_dir(&root).expect("mkdir");
    touch(&root.join("ça.txt"));
    fs::set_permissions(&root, fs::Permissions::from_mode(0o000)).expect("chmod");

    // Privileged users can read the directory regardless of its mode.
    if fs::read_dir(&root).is_ok() {
        fs::set_permissions(&root, fs::Permissions::from_mode(0o755)).expect("chmod");
        return;
    }

    let options = RenameOptions::builder().recursive(true).build();
    let run = run_local(options, &[root.clone()]);
    fs::set_permissions(&root, fs::Permissions::from_mode(0o755)).expect("chmod");

    assert_eq!(run.summary.exit_code(), 1);
    assert!(root.exists());
    assert!(run.stderr.starts_with(&format!(
        "ERROR: failed to read directory '{}'",
        root.display()
    )));
}

#[test]
fn parents_flag_creates_missing_parent() {
    struct GoneParent;

    // Reports the source as present while its parent is missing.
    impl FilesystemProvider for GoneParent {
        fn exists(&self, path: &Path) -> bool {
            path == Path::new("gone/ça")
        }

        fn is_directory(&self, _path: &Path) -> bool {
            false
        }

        fn list_children(&self, _path: &Path) -> Result<Vec<PathBuf>, FsError> {
            Ok(Vec::new())
        }

        fn rename(&self, _from: &Path, _to: &Path) -> Result<(), FsError> {
            Ok(())
        }

        fn remove(&self, _path: &Path) -> Result<(), FsError> {
            Ok(())
        }

        fn create_directories(&self, path: &Path) -> Result<(), FsError> {
            assert_eq!(path, Path::new("gone"));
            Ok(())
        }
    }

    let roots = [PathBuf::from("gone/ça")];

    let run = run_session(&GoneParent, RenameOptions::default(), &roots);
    assert_eq!(run.summary.exit_code(), 1);
    assert_eq!(
        run.stderr,
        "ERROR: \"gone\" doesn't exist.\nERROR: Specify --parents to create it.\n"
    );

    let options = RenameOptions::builder().parents(true).build();
    let run = run_session(&GoneParent, options, &roots);
    assert_eq!(run.summary.exit_code(), 0);
    assert_eq!(run.stdout, "Renaming \"gone/ça\" to \"gone/ca\"...\n");
}

#[test]
fn verbosity_is_threaded_into_diagnostics() {
    let options = RenameOptions::builder().verbose_level(2).build();
    assert_eq!(options.verbosity(), VerbosityConfig::from_verbose_level(2));
}
