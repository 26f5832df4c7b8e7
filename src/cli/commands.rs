//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;

use miette::{NamedSource, Report};

use crate::config::FrontendConfig;
use vbfront_syntax::ast::{ExternalDeclaration, TranslationUnit};
use vbfront_syntax::diagnostics::FrontendError;
use vbfront_syntax::parser::{self, ParseContext};
use vbfront_syntax::{lexer, lexer::Token};

use super::{CliError, CliResult, ExitCode};

/// Read a source file, rejecting files above the configured size limit.
pub fn read_source(file_path: &str, config: &FrontendConfig) -> CliResult<String> {
    // Check file size before reading
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > config.max_source_size {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            config.max_source_size
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

/// Render a front-end error against its source with `miette`.
pub fn render_error(file_path: &str, source: &str, err: impl Into<FrontendError>) -> String {
    let report = Report::new(err.into()).with_source_code(NamedSource::new(file_path, source.to_string()));
    format!("{report:?}")
}

fn lex_source(file_path: &str, source: &str) -> CliResult<Vec<Token>> {
    lexer::lex(source).map_err(|err| CliError::failure(render_error(file_path, source, err).trim_end()))
}

fn parse_tokens(
    file_path: &str,
    source: &str,
    tokens: &[Token],
    context: &mut ParseContext,
) -> CliResult<TranslationUnit> {
    parser::parse_with_context(tokens, context)
        .map_err(|err| CliError::failure(render_error(file_path, source, err).trim_end()))
}

/// Tokenize and display tokens.
pub fn lex_file(file_path: &str, config: &FrontendConfig) -> CliResult<ExitCode> {
    let source = read_source(file_path, config)?;
    let tokens = lex_source(file_path, &source)?;

    for tok in &tokens {
        println!("{:?}", tok);
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse and display AST.
pub fn parse_file(file_path: &str, config: &FrontendConfig) -> CliResult<ExitCode> {
    let source = read_source(file_path, config)?;
    let tokens = lex_source(file_path, &source)?;
    let mut context = config.parse_context();
    let unit = parse_tokens(file_path, &source, &tokens, &mut context)?;

    println!("{:#?}", unit);
    Ok(ExitCode::SUCCESS)
}

/// Lex and parse a file, printing one summary line per declaration.
pub fn check_file(file_path: &str, config: &FrontendConfig) -> CliResult<ExitCode> {
    let source = read_source(file_path, config)?;
    let tokens = lex_source(file_path, &source)?;
    let mut context = config.parse_context();
    let unit = parse_tokens(file_path, &source, &tokens, &mut context)?;

    tracing::info!(
        file = file_path,
        tokens = tokens.len(),
        declarations = unit.declarations.len(),
        forward_declarations = context.forward_declarations().len(),
        "parsed translation unit"
    );

    for line in summarize(&unit, &context, config) {
        println!("{line}");
    }
    println!(
        "✓ {} declaration(s), {} forward declaration(s)",
        unit.declarations.len(),
        context.forward_declarations().len()
    );
    Ok(ExitCode::SUCCESS)
}

/// One line per external declaration, then (optionally) one per forward declaration.
pub fn summarize(unit: &TranslationUnit, context: &ParseContext, config: &FrontendConfig) -> Vec<String> {
    let mut lines = Vec::new();

    for decl in &unit.declarations {
        let range = format!("{}..{}", decl.span.start, decl.span.end);
        let line = match &decl.node {
            ExternalDeclaration::FunctionDefinition(func) => {
                let kind = func
                    .declarator
                    .procedure
                    .map_or_else(|| "function".to_string(), |p| p.to_string().to_lowercase());
                let returns = func
                    .declarator
                    .type_name
                    .as_ref()
                    .map(|t| format!(" As {t}"))
                    .unwrap_or_default();
                format!(
                    "{range} {kind} {}({} parameter(s)){returns}, {} statement(s)",
                    func.declarator.name,
                    func.declarator.parameters().len(),
                    func.body.statements.len()
                )
            }
            ExternalDeclaration::Declaration(data) => {
                let names: Vec<&str> = data
                    .initializers
                    .iter()
                    .map(|init| init.declarator.name.as_str())
                    .collect();
                format!("{range} declaration {}", names.join(", "))
            }
        };
        lines.push(line);
    }

    if config.report_forward_declarations {
        for forward in context.forward_declarations() {
            lines.push(format!(
                "{}..{} forward {}",
                forward.span.start, forward.span.end, forward.name
            ));
        }
    }

    lines
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn summary(source: &str, config: &FrontendConfig) -> Vec<String> {
        let tokens = lexer::lex(source).unwrap();
        let mut context = config.parse_context();
        let unit = parser::parse_with_context(&tokens, &mut context).unwrap();
        summarize(&unit, &context, config)
    }

    #[test]
    fn test_summary_lines() {
        let source = "Dim a, b\nDeclare Sub Beep Lib \"k\" ()\nFunction F(x) As Long (\n  F = x\nEnd Function\n";
        let lines = summary(source, &FrontendConfig::default());
        assert_eq!(
            lines,
            vec![
                "0..8 declaration a, b",
                "37..81 function F(1 parameter(s)) As Long, 1 statement(s)",
                "9..36 forward Beep",
            ]
        );
    }

    #[test]
    fn test_summary_can_hide_forward_declarations() {
        let config = FrontendConfig::new().with_report_forward_declarations(false);
        let lines = summary("Declare Sub Beep Lib \"k\" ()\n", &config);
        assert!(lines.is_empty());
    }

    #[test]
    fn test_render_error_includes_message_and_code() {
        let source = "Dim x As\n";
        let tokens = lexer::lex(source).unwrap();
        let err = parser::parse(&tokens).unwrap_err();
        let rendered = render_error("demo.bas", source, err);
        assert!(rendered.contains("could not parse declarator"), "{rendered}");
        assert!(rendered.contains("vbfront::parse"), "{rendered}");
    }

    #[test]
    fn test_read_source_rejects_large_files() {
        let path = std::env::temp_dir().join(format!("vbfront_large_{}.bas", std::process::id()));
        fs::write(&path, "Dim x As Integer\n").unwrap();

        let config = FrontendConfig::new().with_max_source_size(4);
        let err = read_source(&path.to_string_lossy(), &config).unwrap_err();
        assert!(err.message.contains("too large"));

        let source = read_source(&path.to_string_lossy(), &FrontendConfig::default()).unwrap();
        assert_eq!(source, "Dim x As Integer\n");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source("definitely/not/here.bas", &FrontendConfig::default()).unwrap_err();
        assert!(err.message.starts_with("Cannot access file"));
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }
}
