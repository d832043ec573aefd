//! Command-line options and parse error reporting.

use clap::Parser;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use std::ffi::OsString;
use std::fmt;
use std::io::Write;

use crate::provider::{DEFAULT_API_URL, RepoId};

/// ghstats - GitHub release download statistics
///
/// Lists every release of a repository with the download count of each asset,
/// followed by the total across all listed releases.
///
/// Examples:
///   ghstats owner repo            # All releases
///   ghstats owner repo -t v1.2.0  # A single release
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(author, version = env!("GHSTATS_VERSION"), about)]
pub struct Options {
    /// Name of the repository owner
    #[arg(value_name = "REPO_OWNER")]
    pub owner: String,

    /// Name of the repository
    #[arg(value_name = "REPO_NAME")]
    pub repo: String,

    /// Provide a tag to select one release
    #[arg(short = 't', long = "tag", value_name = "TAG")]
    pub tag: Option<String>,

    /// GitHub API URL
    #[arg(long = "api-url", value_name = "URL", default_value = DEFAULT_API_URL, hide = true)]
    pub api_url: String,
}

impl Options {
    /// Repository addressed by these options.
    pub fn repo_id(&self) -> RepoId {
        RepoId::new(&self.owner, &self.repo)
    }

    /// Tag filter, if one was given and is non-empty.
    pub fn tag_filter(&self) -> Option<&str> {
        self.tag.as_deref().filter(|t| !t.is_empty())
    }
}

/// Outcome of parsing the command line.
#[derive(Debug)]
pub enum Parsed {
    Options(Options),
    /// `--help` or `--version`; clap renders these itself.
    Display(clap::Error),
    Failed(ParseFailure),
}

/// Rejected command line: clap's rendered diagnostic and one descriptor per problem.
#[derive(Debug)]
pub struct ParseFailure {
    pub message: String,
    pub errors: Vec<ParseError>,
}

/// Kind of argument parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    MissingRequiredOption,
    MissingValueOption,
    UnknownOption,
    RepeatedOption,
    BadFormatConversion,
    Unknown,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            ParseErrorKind::MissingRequiredOption => "MissingRequiredOptionError",
            ParseErrorKind::MissingValueOption => "MissingValueOptionError",
            ParseErrorKind::UnknownOption => "UnknownOptionError",
            ParseErrorKind::RepeatedOption => "RepeatedOptionError",
            ParseErrorKind::BadFormatConversion => "BadFormatConversionError",
            ParseErrorKind::Unknown => "UnknownError",
        };
        f.write_str(tag)
    }
}

impl From<ErrorKind> for ParseErrorKind {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::MissingRequiredArgument => ParseErrorKind::MissingRequiredOption,
            ErrorKind::InvalidValue => ParseErrorKind::MissingValueOption,
            ErrorKind::UnknownArgument => ParseErrorKind::UnknownOption,
            ErrorKind::ArgumentConflict => ParseErrorKind::RepeatedOption,
            ErrorKind::ValueValidation | ErrorKind::InvalidUtf8 => {
                ParseErrorKind::BadFormatConversion
            }
            _ => ParseErrorKind::Unknown,
        }
    }
}

/// A single argument parse failure: what went wrong and, when known, on which token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub token: Option<String>,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.token {
            Some(token) => write!(f, "[{}] {}", self.kind, token),
            None => write!(f, "[{}]", self.kind),
        }
    }
}

impl ParseError {
    /// Splits a clap error into one descriptor per offending argument.
    pub fn from_clap(err: &clap::Error) -> Vec<ParseError> {
        let kind = ParseErrorKind::from(err.kind());
        let tokens = match err.get(ContextKind::InvalidArg) {
            Some(ContextValue::Strings(args)) => args.clone(),
            Some(ContextValue::String(arg)) => vec![arg.clone()],
            _ => Vec::new(),
        };

        if tokens.is_empty() {
            vec![ParseError { kind, token: None }]
        } else {
            tokens
                .into_iter()
                .map(|token| ParseError {
                    kind,
                    token: Some(token),
                })
                .collect()
        }
    }
}

/// Parses raw argument tokens (program name first).
pub fn parse_from<I, T>(args: I) -> Parsed
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Options::try_parse_from(args) {
        Ok(options) => Parsed::Options(options),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => Parsed::Display(err),
            _ => {
                log::debug!("Argument parsing failed: {}", err);
                Parsed::Failed(ParseFailure {
                    message: err.render().to_string(),
                    errors: ParseError::from_clap(&err),
                })
            }
        },
    }
}

/// Writes clap's diagnostic and usage to `diag`, then the parse error banner
/// followed by one line per error to `out`.
pub fn report_parse_errors<W: Write, D: Write>(
    failure: &ParseFailure,
    out: &mut W,
    diag: &mut D,
) -> std::io::Result<()> {
    write!(diag, "{}", failure.message)?;
    diag.flush()?;

    writeln!(out, "One or more parser error:\n")?;
    for error in &failure.errors {
        writeln!(out, "{}", error)?;
    }
    Ok(())
}
