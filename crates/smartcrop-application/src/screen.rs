//! Text screen model produced by views.

/// One rendered line. Presentation (colour, indentation) is up to the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Heading(String),
    Text(String),
    Bullet(String),
    /// Secondary text such as placeholders and hints.
    Muted(String),
    /// Preformatted block, e.g. pretty-printed JSON.
    Code(String),
    /// Navigation affordance to another route.
    Link { label: String, path: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    pub title: String,
    pub lines: Vec<Line>,
}

impl Screen {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    pub fn heading(mut self, text: impl Into<String>) -> Self {
        self.lines.push(Line::Heading(text.into()));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.lines.push(Line::Text(text.into()));
        self
    }

    pub fn bullet(mut self, text: impl Into<String>) -> Self {
        self.lines.push(Line::Bullet(text.into()));
        self
    }

    pub fn muted(mut self, text: impl Into<String>) -> Self {
        self.lines.push(Line::Muted(text.into()));
        self
    }

    pub fn code(mut self, text: impl Into<String>) -> Self {
        self.lines.push(Line::Code(text.into()));
        self
    }

    pub fn link(mut self, label: impl Into<String>, path: impl Into<String>) -> Self {
        self.lines.push(Line::Link {
            label: label.into(),
            path: path.into(),
        });
        self
    }

    /// Appends the lines of an embedded component.
    pub fn extend(mut self, other: Screen) -> Self {
        if !other.title.is_empty() {
            self.lines.push(Line::Heading(other.title));
        }
        self.lines.extend(other.lines);
        self
    }

    /// True if any line carries exactly `text`.
    pub fn contains(&self, text: &str) -> bool {
        self.title == text
            || self.lines.iter().any(|line| match line {
                Line::Heading(t)
                | Line::Text(t)
                | Line::Bullet(t)
                | Line::Muted(t)
                | Line::Code(t) => t == text,
                Line::Link { label, .. } => label == text,
            })
    }
}
