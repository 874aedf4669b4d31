use crate::model::Student;

/// Heading of the student document export.
pub const DOCUMENT_HEADING: &str = "Liste des Étudiants";

/// Paragraph used when there are no students to list.
pub const EMPTY_PLACEHOLDER: &str = "Aucun étudiant n'est enregistré.";

/// A format-neutral document: a heading and a run of paragraphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub heading: String,
    pub paragraphs: Vec<String>,
}

/// Turns a [`Document`] into the bytes of a concrete file format.
pub trait DocumentRenderer {
    /// File extension for rendered documents, without the dot.
    fn extension(&self) -> &'static str;

    /// Renders the heading and paragraphs.
    fn render(&self, document: &Document) -> String;
}

/// Renders documents as Markdown: a level-one heading and blank-line
/// separated paragraphs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl DocumentRenderer for MarkdownRenderer {
    fn extension(&self) -> &'static str {
        "md"
    }

    fn render(&self, document: &Document) -> String {
        let mut out = format!("# {}\n", document.heading);
        for paragraph in &document.paragraphs {
            out.push('\n');
            out.push_str(&escape_markdown(paragraph));
            out.push('\n');
        }
        out
    }
}

// Keeps a paragraph from being read as a heading, list item, quote, or
// inline markup.
fn escape_markdown(paragraph: &str) -> String {
    let mut out = String::with_capacity(paragraph.len());
    for c in paragraph.chars() {
        if matches!(c, '\\' | '*' | '_' | '`' | '[' | ']' | '<') {
            out.push('\\');
        }
        out.push(c);
    }
    if matches!(out.chars().next(), Some('#' | '-' | '+' | '>')) {
        out.insert(0, '\\');
    }
    // Ordered list marker: digits followed by `.` or `)`.
    let digits = out.bytes().take_while(u8::is_ascii_digit).count();
    if digits > 0 && matches!(out.as_bytes().get(digits), Some(b'.' | b')')) {
        out.insert(digits, '\\');
    }
    out
}

/// Builds the student list document: one paragraph per student, or a
/// placeholder paragraph when there are none.
pub fn to_document(students: &[Student]) -> Document {
    let paragraphs = if students.is_empty() {
        vec![EMPTY_PLACEHOLDER.to_string()]
    } else {
        students.iter().map(Student::to_string).collect()
    };
    Document {
        heading: DOCUMENT_HEADING.to_string(),
        paragraphs,
    }
}
