//! Static help and version text.

/// Program name used in usage lines and diagnostics.
pub const PROGRAM_NAME: &str = "ascii-rename";

/// Help text printed by `--help`.
pub const HELP_TEXT: &str = concat!(
    "Usage: ascii-rename [options...] [paths...]\n",
    "-h, --help       Show this help and exit\n",
    "-n, --no-op      Show what would happen but don't actually rename path(s)\n",
    "-o, --overwrite  Overwrite existing path(s)\n",
    "-p, --parents    Create missing parent directories of renamed path(s)\n",
    "-r, --recursive  Rename files and subdirectories recursively\n",
    "-v, --verbose    Make the output more verbose (repeat for debug traces)\n",
    "-V, --version    Show version number and exit\n",
    "\n",
    "Set ASCII_RENAME_LOG to a tracing filter such as 'ascii_rename=debug' to\n",
    "override the debug trace level.\n",
);

/// Line printed when the program runs without arguments.
pub const NO_ARGUMENTS_HINT: &str =
    "ascii-rename: try 'ascii-rename --help' for more information\n";

/// Renders the `--version` line.
#[must_use]
pub fn version_text() -> String {
    format!("{PROGRAM_NAME} {}\n", env!("CARGO_PKG_VERSION"))
}
