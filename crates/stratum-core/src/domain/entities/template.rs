//! Template bodies and the rendering rules applied before a file is written.
//!
//! ## Rendering pipeline
//!
//! ```text
//! TemplateBody ──► RenderContext::render ──► normalize_body ──► file content
//!  (raw text)       ({{PROJECT_NAME}} only)   (dedent + trim)
//! ```
//!
//! ### Body kinds
//!
//! Only the README carries the project name. `Literal` bodies skip the
//! substitution step, and the manifest alone shows which files depend on
//! user input.
//!
//! ### Normalization
//!
//! Bodies are authored as indented text blocks. Normalization runs on every
//! body, literal or not, so embedding indentation and blank-line padding never
//! reach the generated project.

use std::fmt;

/// The placeholder replaced by the project name.
pub const PROJECT_NAME_PLACEHOLDER: &str = "{{PROJECT_NAME}}";

/// Raw text of a template body.
///
/// `Static` references compile-time strings (`include_str!`) without
/// allocation; `Owned` is used for bodies assembled at runtime (tests).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Static(&'static str),
    Owned(String),
}

impl TemplateSource {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Owned(s) => s.as_str(),
        }
    }

    /// Check whether the source mentions the project-name placeholder.
    pub fn contains_placeholder(&self) -> bool {
        self.as_str().contains(PROJECT_NAME_PLACEHOLDER)
    }
}

impl From<&'static str> for TemplateSource {
    fn from(s: &'static str) -> Self {
        Self::Static(s)
    }
}

impl From<String> for TemplateSource {
    fn from(s: String) -> Self {
        Self::Owned(s)
    }
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of a manifest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateBody {
    /// Written verbatim (after normalization).
    Literal(TemplateSource),
    /// `{{PROJECT_NAME}}` is substituted before normalization.
    Parameterized(TemplateSource),
}

impl TemplateBody {
    pub fn source(&self) -> &TemplateSource {
        match self {
            Self::Literal(s) | Self::Parameterized(s) => s,
        }
    }

    pub fn is_parameterized(&self) -> bool {
        matches!(self, Self::Parameterized(_))
    }

    /// Produce the exact bytes that end up on disk.
    pub fn render(&self, ctx: &RenderContext) -> String {
        match self {
            Self::Literal(source) => normalize_body(source.as_str()),
            Self::Parameterized(source) => normalize_body(&ctx.render(source.as_str())),
        }
    }
}

/// Context for rendering parameterized bodies.
///
/// Immutable value object. The project name is the only variable: the
/// generated project is not otherwise customized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    project_name: String,
}

impl RenderContext {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
        }
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Replace every `{{PROJECT_NAME}}` occurrence.
    ///
    /// Other `{{...}}` sequences are left untouched; they are part of the
    /// generated text, not placeholders.
    pub fn render(&self, template: &str) -> String {
        template.replace(PROJECT_NAME_PLACEHOLDER, &self.project_name)
    }
}

/// Strip authoring noise from a body.
///
/// 1. The longest whitespace prefix shared by all non-blank lines is removed;
///    whitespace-only lines become empty.
/// 2. Leading and trailing blank lines are dropped.
/// 3. A non-empty result ends with exactly one `\n`; an empty body stays empty.
///
/// Trailing whitespace on content lines is preserved.
pub fn normalize_body(raw: &str) -> String {
    let lines: Vec<&str> = raw.lines().collect();
    let indent = common_indent(&lines);

    let dedented: Vec<&str> = lines
        .iter()
        .map(|line| {
            if line.trim().is_empty() {
                ""
            } else {
                line.strip_prefix(indent).unwrap_or(line)
            }
        })
        .collect();

    let first = dedented.iter().position(|l| !l.is_empty());
    let last = dedented.iter().rposition(|l| !l.is_empty());

    match (first, last) {
        (Some(first), Some(last)) => {
            let mut out = dedented[first..=last].join("\n");
            out.push('\n');
            out
        }
        _ => String::new(),
    }
}

/// Longest leading-whitespace prefix common to every non-blank line.
fn common_indent<'a>(lines: &[&'a str]) -> &'a str {
    let mut prefix: Option<&'a str> = None;

    for line in lines.iter().filter(|l| !l.trim().is_empty()) {
        let ws = &line[..line.len() - line.trim_start().len()];
        prefix = Some(match prefix {
            None => ws,
            Some(p) => {
                let shared = p
                    .char_indices()
                    .zip(ws.chars())
                    .take_while(|((_, a), b)| a == b)
                    .last()
                    .map_or(0, |((i, c), _)| i + c.len_utf8());
                &p[..shared]
            }
        });
    }

    prefix.unwrap_or("")
}
