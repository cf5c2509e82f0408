//! Output formatting for CLI responses.
//!
//! Everything here writes to stderr: stdout belongs to the protocol.

use crewsync_types::DiagnosticError;

/// Prints an error with its hint and fix, when it has them.
pub fn print_diagnostic<E>(error: &E)
where
    E: std::fmt::Display + DiagnosticError,
{
    eprint!("{}", render_diagnostic(error));
}

/// The `[ERROR]` line followed by optional `hint:` and `fix:` lines.
pub fn render_diagnostic<E>(error: &E) -> String
where
    E: std::fmt::Display + DiagnosticError,
{
    let mut out = format!("[ERROR] {error}\n");
    if let Some(hint) = error.hint() {
        out.push_str(&format!("  hint: {hint}\n"));
    }
    if let Some(fix) = error.fix() {
        out.push_str(&format!("  fix:  {fix}\n"));
    }
    out
}
