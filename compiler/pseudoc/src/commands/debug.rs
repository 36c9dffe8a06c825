//! Debug commands: `lex` and `parse` for inspecting the front end.

use std::io::Write;

use pseudo_diagnostic::{Diagnostic, DiagnosticEmitter};
use pseudo_ir::{SourceFile, SourceMap};

use super::{read_file, report, stderr_emitter};
use crate::Options;

/// Lex a file and print the token stream.
pub fn lex_file(path: &str, options: &Options) -> bool {
    let Some(text) = read_file(path) else {
        return false;
    };
    lex_source(path, &text, &mut std::io::stdout(), &mut stderr_emitter(options.color))
}

pub fn lex_source<W: Write, E: DiagnosticEmitter>(
    name: &str,
    text: &str,
    out: &mut W,
    emitter: &mut E,
) -> bool {
    let mut sources = SourceMap::new();
    let source = sources.add(SourceFile::new(name, text));
    match pseudo_lexer::lex(source, text) {
        Ok(tokens) => {
            let _ = writeln!(out, "Tokens for '{name}' ({} tokens):", tokens.len());
            for token in &tokens {
                let _ = writeln!(out, "  {token:?}");
            }
            true
        }
        Err(err) => {
            report(emitter, &Diagnostic::from(err), &sources);
            false
        }
    }
}

/// Parse a file and print the syntax tree.
pub fn parse_file(path: &str, options: &Options) -> bool {
    let Some(text) = read_file(path) else {
        return false;
    };
    parse_source(path, &text, &mut std::io::stdout(), &mut stderr_emitter(options.color))
}

pub fn parse_source<W: Write, E: DiagnosticEmitter>(
    name: &str,
    text: &str,
    out: &mut W,
    emitter: &mut E,
) -> bool {
    let mut sources = SourceMap::new();
    let source = sources.add(SourceFile::new(name, text));
    let tree = pseudo_lexer::lex(source, text)
        .map_err(Diagnostic::from)
        .and_then(|tokens| pseudo_parse::parse(&tokens).map_err(Diagnostic::from));
    match tree {
        Ok(tree) => {
            let _ = writeln!(out, "Parse result for '{name}':");
            let _ = writeln!(out, "{tree:#?}");
            true
        }
        Err(diagnostic) => {
            report(emitter, &diagnostic, &sources);
            false
        }
    }
}
