/// Destination for everything the interpreter shows to the user.
///
/// `print` results and diagnostics share one ordered channel, so both go
/// through the same sink.
pub trait Output {
    /// Emits one line of `print` output.
    fn print(&mut self, line: &str);

    /// Emits one diagnostic line.
    fn diagnostic(&mut self, line: &str);
}

/// Writes every line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stdout;

impl Output for Stdout {
    fn print(&mut self, line: &str) {
        println!("{line}");
    }

    fn diagnostic(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Collects emitted lines in memory.
///
/// # Example
/// ```
/// use linecalc::interpreter::output::{Captured, Output};
///
/// let mut out = Captured::default();
/// out.print("x = 1 (int)");
/// out.diagnostic("Error on line 2: Cannot parse statement: ?");
///
/// assert_eq!(out.lines().len(), 2);
/// assert_eq!(out.diagnostics().count(), 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Captured {
    lines:       Vec<String>,
    diagnostics: Vec<usize>,
}

impl Captured {
    /// All emitted lines in order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Only the diagnostic lines, in order.
    pub fn diagnostics(&self) -> impl Iterator<Item = &str> {
        self.diagnostics.iter().map(|&i| self.lines[i].as_str())
    }

    /// Consumes the sink and returns all emitted lines.
    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl Output for Captured {
    fn print(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn diagnostic(&mut self, line: &str) {
        self.diagnostics.push(self.lines.len());
        self.lines.push(line.to_string());
    }
}
