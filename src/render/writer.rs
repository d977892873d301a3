//! Line-oriented Markdown writer
//!
//! Markdown is assembled line by line; the writer keeps blank-line separation between blocks consistent.

/// Writer that builds Markdown output one line at a time
#[derive(Debug, Default)]
pub struct MarkdownWriter {
    output: String,
}

impl MarkdownWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the rendered output
    pub fn finish(self) -> String {
        self.output
    }

    /// Write a line followed by a newline
    pub fn line(&mut self, text: &str) {
        self.output.push_str(text);
        self.output.push('\n');
    }

    /// Write an empty line
    pub fn blank(&mut self) {
        self.output.push('\n');
    }

    /// Write a line and an empty line after it
    pub fn paragraph(&mut self, text: &str) {
        self.line(text);
        self.blank();
    }

    /// Write a fenced code block
    pub fn fenced<I, S>(&mut self, language: &str, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.line(&format!("```{language}"));
        for line in lines {
            self.line(line.as_ref());
        }
        self.line("```");
    }

    /// Write a bullet list, or `- _none_` if it is empty
    pub fn bullets_or_none<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = String>,
    {
        let mut any = false;
        for item in items {
            any = true;
            self.line(&format!("- {item}"));
        }
        if !any {
            self.line("- _none_");
        }
    }
}
