//! crates/cli/src/arguments.rs
//! Command-line parsing.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::{ContextKind, ContextValue};
use clap::{Arg, ArgAction, Command, builder::OsStringValueParser};
use engine::RenameOptions;

use crate::help::PROGRAM_NAME;

/// Flags and operands recognised on the command line.
///
/// **Warning**: This type is exposed via `cli::test_utils` for integration
/// tests and is not a stable API.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ParsedArgs {
    /// `-h`/`--help` was given.
    pub show_help: bool,
    /// `-V`/`--version` was given.
    pub show_version: bool,
    /// `-n`/`--no-op` was given.
    pub no_op: bool,
    /// `-o`/`--overwrite` was given.
    pub overwrite: bool,
    /// `-r`/`--recursive` was given.
    pub recursive: bool,
    /// `-p`/`--parents` was given.
    pub parents: bool,
    /// Number of `-v`/`--verbose` flags.
    pub verbose: u8,
    /// Path operands in the order they appeared.
    pub paths: Vec<PathBuf>,
    /// No token followed the program name.
    pub no_arguments: bool,
}

impl ParsedArgs {
    /// Builds the engine options described by the flags.
    #[must_use]
    pub fn rename_options(&self) -> RenameOptions {
        RenameOptions::builder()
            .no_op(self.no_op)
            .overwrite(self.overwrite)
            .recursive(self.recursive)
            .parents(self.parents)
            .verbose_level(self.verbose)
            .build()
    }
}

const LONG_FLAGS: [&[u8]; 7] = [
    b"--help",
    b"--version",
    b"--no-op",
    b"--overwrite",
    b"--recursive",
    b"--parents",
    b"--verbose",
];
const SHORT_FLAGS: &[u8] = b"hVnorpv";

/// Looks for `-h`/`--help` or `-V`/`--version` ahead of any unknown option.
///
/// Tokens are examined in order and the first help or version request ends
/// parsing, so `--help --bogus` prints help while `--bogus --help` is an error.
fn early_exit_request(args: &[OsString]) -> Option<ParsedArgs> {
    for arg in args.iter().skip(1) {
        match arg.as_encoded_bytes() {
            b"--" => return None,
            b"-h" | b"--help" => {
                return Some(ParsedArgs {
                    show_help: true,
                    ..ParsedArgs::default()
                });
            }
            b"-V" | b"--version" => {
                return Some(ParsedArgs {
                    show_version: true,
                    ..ParsedArgs::default()
                });
            }
            long if long.starts_with(b"--") => {
                if !LONG_FLAGS.contains(&long) {
                    return None;
                }
            }
            [b'-', cluster @ ..] if !cluster.is_empty() => {
                if !cluster.iter().all(|short| SHORT_FLAGS.contains(short)) {
                    return None;
                }
            }
            _ => {}
        }
    }
    None
}

fn flag(id: &'static str, short: char, help: &'static str) -> Arg {
    Arg::new(id)
        .long(id)
        .short(short)
        .help(help)
        .action(ArgAction::SetTrue)
}

fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(flag("help", 'h', "Show this help and exit"))
        .arg(flag("version", 'V', "Show version number and exit"))
        .arg(flag(
            "no-op",
            'n',
            "Show what would happen but don't actually rename path(s)",
        ))
        .arg(flag("overwrite", 'o', "Overwrite existing path(s)"))
        .arg(flag("recursive", 'r', "Rename files and subdirectories recursively"))
        .arg(flag("parents", 'p', "Create missing parent directories"))
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Make the output more verbose")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("paths")
                .action(ArgAction::Append)
                .num_args(0..)
                .value_parser(OsStringValueParser::new()),
        )
}

/// Parses the full argument vector, program name included.
///
/// **Warning**: This function is exposed via `cli::test_utils` for
/// integration tests and is not a stable API.
///
/// # Errors
///
/// Returns the `clap` error for unknown options or malformed input.
pub fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();
    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }
    let no_arguments = args.len() == 1;
    if let Some(parsed) = early_exit_request(&args) {
        return Ok(parsed);
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    let paths = matches
        .remove_many::<OsString>("paths")
        .map(|values| values.map(PathBuf::from).collect())
        .unwrap_or_default();

    Ok(ParsedArgs {
        show_help: matches.get_flag("help"),
        show_version: matches.get_flag("version"),
        no_op: matches.get_flag("no-op"),
        overwrite: matches.get_flag("overwrite"),
        recursive: matches.get_flag("recursive"),
        parents: matches.get_flag("parents"),
        verbose: matches.get_count("verbose"),
        paths,
        no_arguments,
    })
}

/// Renders a parse failure as the text of an `ERROR:` line.
pub(crate) fn describe_error(error: &clap::Error) -> String {
    if let Some(ContextValue::String(argument)) = error.get(ContextKind::InvalidArg) {
        return format!("\"{argument}\" option not recognized. Run with --help for usage info.");
    }
    let rendered = error.to_string();
    let first_line = rendered.lines().next().unwrap_or_default();
    let trimmed = first_line.strip_prefix("error: ").unwrap_or(first_line);
    format!("{trimmed}. Run with --help for usage info.")
}
