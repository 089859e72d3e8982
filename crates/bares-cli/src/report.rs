use crate::config::Config;
use bares::{Diagnostic, Evaluation, SolveError};
use colored::*;

/// Renders what the user sees for one evaluated expression.
///
/// A valid expression prints its value. A syntax error prints the message,
/// the input text and a caret under the offending column. Token and
/// postfix listings follow when enabled.
pub fn render(evaluation: &Evaluation, config: &Config) -> String {
    let mut output = String::new();

    match &evaluation.result {
        Ok(value) => {
            output.push_str(&format!("{}\n", value.to_string().green().bold()));
        }
        Err(SolveError::Syntax(err)) => {
            let diagnostic = Diagnostic::new(&evaluation.expression, *err);
            output.push_str(&format!("{} {}\n", ">>>".red().bold(), err.to_string().bold()));
            output.push_str(&format!("\"{}\"\n", evaluation.expression));
            output.push_str(&format!(" {}\n", diagnostic.marker_line().red().bold()));
        }
        Err(SolveError::Convert(err)) => {
            output.push_str(&format!("{} {}\n", ">>> Malformed token sequence:".red().bold(), err));
        }
        Err(SolveError::Eval(err)) => {
            output.push_str(&format!("{} {}\n", ">>> Runtime error:".red().bold(), err));
        }
    }

    if config.show_tokens {
        let tokens: Vec<String> = evaluation.tokens.iter().map(ToString::to_string).collect();
        output.push_str(&format!("    {} {{ {} }}\n", "tokens:".dimmed(), tokens.join(" ")));
    }
    if config.show_postfix
        && let Some(postfix) = &evaluation.postfix
    {
        output.push_str(&format!("    {} {}\n", "postfix:".dimmed(), postfix));
    }

    output
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub failed: usize,
}

impl Summary {
    pub fn record(&mut self, evaluation: &Evaluation) {
        self.total += 1;
        if !evaluation.is_ok() {
            self.failed += 1;
        }
    }

    pub fn exit_code(&self) -> i32 {
        if self.failed == 0 { 0 } else { 1 }
    }

    pub fn render(&self) -> String {
        if self.failed == 0 {
            format!(
                "{} {}",
                "Passed".green().bold(),
                format!("{} expressions", self.total).dimmed()
            )
        } else {
            format!(
                "{} {}",
                "Failed".red().bold(),
                format!("{} of {} expressions", self.failed, self.total).dimmed()
            )
        }
    }
}
