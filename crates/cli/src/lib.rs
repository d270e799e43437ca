use std::{
    env, io,
    path::{Path, PathBuf},
};

use anyhow::{bail, Result};
use codespan_reporting::{
    diagnostic::{Diagnostic, Label},
    files::SimpleFiles,
    term::{
        self,
        termcolor::{ColorChoice, StandardStream},
    },
};
use parser::{position::LineIndex, ErrorHandler, ParserError};
use path_clean::PathClean;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Prints every parser error to stderr as soon as it is found.
pub struct PrettyErrorHandler<'a> {
    name: &'a str,
    source: &'a str,
    line_index: LineIndex,
}

impl<'a> PrettyErrorHandler<'a> {
    pub fn new(name: &'a str, source: &'a str) -> Self {
        Self {
            name,
            source,
            line_index: LineIndex::new(source),
        }
    }
}

impl<'a> ErrorHandler for PrettyErrorHandler<'a> {
    fn on_error(&self, err: ParserError) {
        let mut files = SimpleFiles::new();
        let file = files.add(self.name, self.source);
        let start = self.line_index.offset_at(err.range.start);
        let end = self.line_index.offset_at(err.range.end);
        let diagnostic = Diagnostic::error()
            .with_code(err.kind.code())
            .with_labels(vec![
                Label::primary(file, start..end).with_message(err.to_string())
            ]);

        let writer = StandardStream::stderr(ColorChoice::Auto);
        let config = term::Config::default();
        if let Err(e) = term::emit(&mut writer.lock(), &config, &files, &diagnostic) {
            warn!(error = %e, "unable to print diagnostic");
        };
    }
}

pub fn absolute_path(path: impl AsRef<Path>) -> io::Result<PathBuf> {
    let path = path.as_ref();
    let absolute_path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()?.join(path)
    }
    .clean();
    Ok(absolute_path)
}

pub fn get_delimiters(delimiters: &str) -> Result<(String, String)> {
    match delimiters.split_once(' ') {
        Some((open, close)) if !open.is_empty() && !close.is_empty() => {
            Ok((open.to_string(), close.to_string()))
        }
        _ => bail!("The delimiter argument should be split by one whitespace"),
    }
}

/// Logs go to stderr, filtered by `RUST_LOG`.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}
