mod highlighter;
mod lexer;

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use reckon::{
    CalculationRequest, DEFAULT_MAX_DEPTH, EvaluatorOptions, render_validation_error_to,
};
use reedline::{
    DefaultPrompt, DefaultPromptSegment, EditCommand, Emacs, FileBackedHistory, KeyCode,
    KeyModifiers, Keybindings, Reedline, ReedlineEvent, Signal, ValidationResult, Validator,
    default_emacs_keybindings,
};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, warn};

const HISTORY_CAPACITY: usize = 1000;

/// Reckon - an arithmetic expression calculator
#[derive(Parser, Debug)]
#[command(name = "reckon")]
#[command(about = "Evaluate arithmetic expressions", long_about = None)]
struct Args {
    /// Maximum nesting depth of parentheses and function calls
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Print results and errors as JSON response bodies
    #[arg(long)]
    json: bool,

    /// Operator for a two-operand calculation (add, subtract, multiply, divide)
    #[arg(long)]
    operator: Option<String>,

    /// First operand for a two-operand calculation
    #[arg(long, allow_negative_numbers = true)]
    operand_a: Option<f64>,

    /// Second operand for a two-operand calculation
    #[arg(long, allow_negative_numbers = true)]
    operand_b: Option<f64>,

    /// Expression to evaluate (if not provided, reads from stdin)
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,
}

impl Args {
    fn options(&self) -> EvaluatorOptions {
        EvaluatorOptions {
            max_depth: self.max_depth,
        }
    }

    fn has_operands(&self) -> bool {
        self.operator.is_some() || self.operand_a.is_some() || self.operand_b.is_some()
    }

    fn request(&self) -> CalculationRequest {
        CalculationRequest {
            expression: self.expression.clone(),
            operand_a: self.operand_a,
            operand_b: self.operand_b,
            operator: self.operator.clone(),
        }
    }
}

/// Lines with unclosed parentheses continue on the next line.
struct BracketValidator;

impl Validator for BracketValidator {
    fn validate(&self, line: &str) -> ValidationResult {
        match lexer::calculate_depth(line) {
            Some(depth) if depth > 0 => ValidationResult::Incomplete,
            _ => ValidationResult::Complete,
        }
    }
}

fn add_keybindings(keybindings: &mut Keybindings) {
    keybindings.add_binding(
        KeyModifiers::ALT,
        KeyCode::Enter,
        ReedlineEvent::Edit(vec![EditCommand::InsertNewline]),
    );
}

fn history_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("reckon").join("history.txt"))
}

fn setup_reedline() -> (Reedline, DefaultPrompt) {
    let mut keybindings = default_emacs_keybindings();
    add_keybindings(&mut keybindings);

    let mut line_editor = Reedline::create()
        .with_highlighter(Box::new(highlighter::Highlighter))
        .with_validator(Box::new(BracketValidator))
        .with_edit_mode(Box::new(Emacs::new(keybindings)));

    if let Some(path) = history_path() {
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!(path = %parent.display(), error = %e, "cannot create history directory");
            }
        }
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
            Ok(history) => line_editor = line_editor.with_history(Box::new(history)),
            Err(e) => warn!(path = %path.display(), error = %e, "history disabled"),
        }
    }

    let prompt = DefaultPrompt::new(DefaultPromptSegment::Empty, DefaultPromptSegment::Empty);

    (line_editor, prompt)
}

fn format_number(value: f64) -> String {
    value.to_string()
}

/// Resolve one request and print the outcome. Returns whether it succeeded.
fn interpret_request(
    request: &CalculationRequest,
    options: &EvaluatorOptions,
    json: bool,
) -> Result<bool> {
    let source = request
        .operator
        .is_none()
        .then_some(request.expression.as_deref())
        .flatten();

    match request.resolve(options) {
        Ok(calculation) => {
            if json {
                println!("{}", serde_json::to_string(&calculation).into_diagnostic()?);
            } else {
                println!("{}", format_number(calculation.result));
            }
            Ok(true)
        }
        Err(err) => {
            debug!(status = err.status(), message = %err.message, "request rejected");
            if json {
                println!("{}", serde_json::to_string(&err).into_diagnostic()?);
            } else {
                let stderr = std::io::stderr();
                let mut stderr = stderr.lock();
                let use_color = atty::is(atty::Stream::Stderr);
                render_validation_error_to(source, &err, &mut stderr, use_color)
                    .into_diagnostic()?;
                stderr.flush().into_diagnostic()?;
            }
            Ok(false)
        }
    }
}

fn interpret_input(input: &str, options: &EvaluatorOptions, json: bool) -> Result<bool> {
    interpret_request(&CalculationRequest::expression(input), options, json)
}

fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    // RECKON_LOG takes precedence over RUST_LOG; default to WARN.
    let filter = EnvFilter::try_from_env("RECKON_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<bool> {
    let options = args.options();

    if args.expression.is_some() || args.has_operands() {
        return interpret_request(&args.request(), &options, args.json);
    }

    let is_interactive = atty::is(atty::Stream::Stdin);

    if is_interactive {
        let (mut line_editor, prompt) = setup_reedline();

        println!("Reckon - Type expressions to evaluate (Ctrl+D or Ctrl+C to exit)");

        loop {
            let sig = line_editor.read_line(&prompt).into_diagnostic()?;

            match sig {
                Signal::Success(buffer) => {
                    if !buffer.trim().is_empty() {
                        interpret_input(&buffer, &options, args.json)?;
                    }
                }
                Signal::CtrlD | Signal::CtrlC => {
                    println!("\nGoodbye!");
                    return Ok(true);
                }
            }
        }
    }

    let stdin = std::io::stdin();
    let reader = BufReader::new(stdin.lock());
    let mut all_ok = true;

    for line in reader.lines() {
        let line = line.into_diagnostic()?;
        if line.trim().is_empty() {
            continue;
        }
        all_ok &= interpret_input(&line, &options, args.json)?;
    }

    Ok(all_ok)
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging();

    if run(args)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_expression() {
        let args = Args::parse_from(["reckon", "2 + 3"]);
        assert_eq!(args.expression.as_deref(), Some("2 + 3"));
        assert_eq!(args.max_depth, DEFAULT_MAX_DEPTH);
        assert!(!args.has_operands());
    }

    #[test]
    fn test_args_operands() {
        let args = Args::parse_from([
            "reckon",
            "--operator",
            "subtract",
            "--operand-a",
            "-4",
            "--operand-b",
            "2.5",
        ]);
        let calculation = args.request().resolve(&args.options()).unwrap();
        assert_eq!(calculation.result, -6.5);
        assert_eq!(calculation.expression, "-4 - 2.5");
    }

    #[test]
    fn test_incomplete_operands_are_rejected() {
        let args = Args::parse_from(["reckon", "--operator", "add", "--operand-a", "1"]);
        assert!(args.has_operands());
        let err = args.request().resolve(&args.options()).unwrap_err();
        assert!(err.errors.contains_key("mode"));
    }

    #[test]
    fn test_leading_minus_expression() {
        let args = Args::parse_from(["reckon", "-2+3"]);
        assert_eq!(args.expression.as_deref(), Some("-2+3"));
    }

    #[test]
    fn test_max_depth_flag() {
        let args = Args::parse_from(["reckon", "--max-depth", "2", "((1))"]);
        assert!(args.request().resolve(&args.options()).is_err());
    }

    #[test]
    fn test_validator() {
        assert!(matches!(
            BracketValidator.validate("sqrt((1 + 2)"),
            ValidationResult::Incomplete
        ));
        assert!(matches!(
            BracketValidator.validate("sqrt(1 + 2)"),
            ValidationResult::Complete
        ));
        assert!(matches!(
            BracketValidator.validate("(x"),
            ValidationResult::Complete
        ));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-0.125), "-0.125");
    }
}
