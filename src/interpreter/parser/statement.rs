use crate::{
    ast::{FunctionDef, Statement},
    error::StatementError,
    interpreter::{lexer::is_identifier, parser::core::parse_source},
};

/// Keyword that starts a `print` statement.
const PRINT_KEYWORD: &str = "print";

/// Classifies a single input line.
///
/// The line is trimmed and one trailing `;` is removed. The statement forms
/// are then tried in this order, and the first match wins:
///
/// 1. `print` or `print name`
/// 2. a line containing `:` is a function definition `name(a, b): body`
/// 3. a line containing `)=` is a typed initialization `name(i)=expr`
/// 4. a line containing `=` is an assignment `name=expr`
///
/// Anything else is unrecognized.
///
/// # Parameters
/// - `text`: The raw input line.
/// - `line`: Its line number, for error messages.
/// - `max_nesting`: Nesting limit for the right-hand expression.
///
/// # Example
/// ```
/// use linecalc::{ast::Statement, interpreter::parser::statement::parse_statement};
///
/// assert_eq!(parse_statement("  ", 1, 16).unwrap(), Statement::Empty);
/// assert_eq!(parse_statement("print x;", 1, 16).unwrap(),
///            Statement::Print { name: Some("x".to_string()) });
/// assert!(matches!(parse_statement("sq(n): n*n", 1, 16).unwrap(),
///                  Statement::FunctionDefinition(_)));
/// assert!(parse_statement("hello", 1, 16).is_err());
/// ```
pub fn parse_statement(text: &str,
                       line: usize,
                       max_nesting: usize)
                       -> Result<Statement, StatementError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Statement::Empty);
    }
    let statement = trimmed.strip_suffix(';').unwrap_or(trimmed).trim();

    if let Some(rest) = strip_print_keyword(statement) {
        return Ok(parse_print(rest));
    }
    if let Some((header, body)) = statement.split_once(':') {
        return parse_function_definition(statement, header, body, line);
    }
    if let Some((target, value)) = statement.split_once(")=") {
        return parse_typed_initialization(statement, target, value, line, max_nesting);
    }
    if let Some((name, value)) = statement.split_once('=') {
        return parse_assignment(name, value, line, max_nesting);
    }

    Err(StatementError::Unrecognized { text: statement.to_string(),
                                       line })
}

/// Returns the text after `print` when the statement starts with the keyword.
///
/// The keyword must stand alone: it has to be followed by the end of the
/// line, whitespace or `=`, so `printer = 1` stays an assignment.
fn strip_print_keyword(statement: &str) -> Option<&str> {
    let rest = statement.strip_prefix(PRINT_KEYWORD)?;
    match rest.chars().next() {
        None => Some(rest),
        Some(c) if c.is_whitespace() || c == '=' => Some(rest),
        Some(_) => None,
    }
}

/// Builds a `print` statement from the text after the keyword.
///
/// A single stray `=` before the name is tolerated and dropped.
fn parse_print(rest: &str) -> Statement {
    let rest = rest.trim();
    if rest.is_empty() {
        return Statement::Print { name: None };
    }
    let name = rest.strip_prefix('=').unwrap_or(rest).trim();

    Statement::Print { name: Some(name.to_string()) }
}

/// Parses `name(param, ...): body`.
///
/// The header must contain a `(` followed by a `)`, with nothing after the
/// closing parenthesis. The parameter list may be empty. The body is kept as
/// text and only parsed when the function is called.
///
/// # Errors
/// - `InvalidFunctionDefinition` if the header is malformed.
/// - `InvalidName` if the function or a parameter name is not an identifier.
fn parse_function_definition(statement: &str,
                             header: &str,
                             body: &str,
                             line: usize)
                             -> Result<Statement, StatementError> {
    let header = header.trim();
    let malformed = || StatementError::InvalidFunctionDefinition { text: statement.to_string(),
                                                                   line };

    let (Some(open), Some(close)) = (header.find('('), header.find(')')) else {
        return Err(malformed());
    };
    if close < open || !header[close + 1..].trim().is_empty() {
        return Err(malformed());
    }

    let name = validate_name(header[..open].trim(), line)?;

    let param_list = header[open + 1..close].trim();
    let params = if param_list.is_empty() {
        Vec::new()
    } else {
        param_list.split(',')
                  .map(|param| validate_name(param.trim(), line))
                  .collect::<Result<Vec<_>, _>>()?
    };

    Ok(Statement::FunctionDefinition(FunctionDef { name,
                                                   params,
                                                   body: body.trim().to_string() }))
}

/// Parses `name(tag)=expr`.
///
/// The tag is kept as written; it is checked once the expression has been
/// evaluated, so an invalid expression is reported ahead of an invalid tag.
///
/// # Errors
/// - `InvalidTypedInitialization` if there is no `(` before `)=`.
/// - `InvalidName` if the variable name is not an identifier.
/// - Parse errors of the right-hand expression.
fn parse_typed_initialization(statement: &str,
                              target: &str,
                              value: &str,
                              line: usize,
                              max_nesting: usize)
                              -> Result<Statement, StatementError> {
    let Some(open) = target.find('(') else {
        return Err(StatementError::InvalidTypedInitialization { text: statement.to_string(),
                                                                line });
    };

    let name = validate_name(target[..open].trim(), line)?;
    let tag = target[open + 1..].trim().to_string();
    let value = parse_source(value.trim(), line, max_nesting)?;

    Ok(Statement::TypedInitialization { name, tag, value })
}

/// Parses `name=expr`.
///
/// # Errors
/// - `InvalidName` if the variable name is not an identifier.
/// - Parse errors of the right-hand expression.
fn parse_assignment(name: &str,
                    value: &str,
                    line: usize,
                    max_nesting: usize)
                    -> Result<Statement, StatementError> {
    let name = validate_name(name.trim(), line)?;
    let value = parse_source(value.trim(), line, max_nesting)?;

    Ok(Statement::Assignment { name, value })
}

/// Checks that a statement-level name can be referenced from expressions.
fn validate_name(name: &str, line: usize) -> Result<String, StatementError> {
    if is_identifier(name) {
        Ok(name.to_string())
    } else {
        Err(StatementError::InvalidName { name: name.to_string(),
                                          line })
    }
}
