//! Line-oriented TypeScript writer
//!
//! Knows the three multi-line shapes a declaration can take: a `{ }` body, a JSDoc comment and a list of `|`
//! union members. Everything else is a single [`CodeWriter::line`].

use std::fmt::Display;

/// Builds TypeScript source one line at a time
pub struct CodeWriter {
    output: String,
    /// Current nesting depth
    depth: usize,
    /// Spaces per depth level
    indent_width: usize,
}

impl CodeWriter {
    pub fn new(indent_width: usize) -> Self {
        Self {
            output: String::new(),
            depth: 0,
            indent_width,
        }
    }

    /// Get the generated output
    pub fn finish(self) -> String {
        self.output
    }

    /// Write `text` as one line at the current depth.
    pub fn line(&mut self, text: impl Display) {
        self.output.push_str(&" ".repeat(self.depth * self.indent_width));
        self.output.push_str(&text.to_string());
        self.output.push('\n');
    }

    /// `head {`, one nested entry per item, then `}`. No items gives `head {}`.
    pub fn block<T>(&mut self, head: &str, items: &[T], mut entry: impl FnMut(&mut Self, &T)) {
        if items.is_empty() {
            self.line(format!("{head} {{}}"));
            return;
        }
        self.line(format!("{head} {{"));
        self.depth += 1;
        for item in items {
            entry(self, item);
        }
        self.depth -= 1;
        self.line("}");
    }

    /// `head =` followed by one `| member` line per member, the last ending in `;`.
    ///
    /// A union with no members is `head = never;`.
    pub fn union<T: Display>(&mut self, head: &str, members: &[T]) {
        let Some((last, rest)) = members.split_last() else {
            self.line(format!("{head} = never;"));
            return;
        };
        self.line(format!("{head} ="));
        self.depth += 1;
        for member in rest {
            self.line(format!("| {member}"));
        }
        self.line(format!("| {last};"));
        self.depth -= 1;
    }

    /// JSDoc for `docs`: `/** text */` on one line, or a ` * ` gutter block for several lines.
    pub fn jsdoc(&mut self, docs: &str) {
        // A literal `*/` would close the comment early
        let docs = docs.replace("*/", "*\\/");
        let lines: Vec<&str> = docs.split('\n').collect();
        if let [only] = lines.as_slice() {
            self.line(format!("/** {only} */"));
            return;
        }

        self.line("/**");
        for line in lines {
            if line.is_empty() {
                self.line(" *");
            } else {
                self.line(format!(" * {line}"));
            }
        }
        self.line(" */");
    }
}
