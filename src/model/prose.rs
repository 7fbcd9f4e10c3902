//! Prose data model: externally parsed documentation content.
//!
//! Prose records arrive from a doc-comment parser (out of scope here)
//! already structured: block-level content (paragraphs, lists, tables,
//! code blocks) over inline leaves (text runs, inline code, symbol
//! references). Records are keyed by canonical name and matched to
//! structural nodes by [`crate::matcher::ProseCollection`].
//!
//! Every ordered field defaults to an empty sequence. Absence of content is
//! always represented as emptiness, never as a missing field, so consumers
//! can iterate unconditionally.

use serde::{Deserialize, Serialize};

/// Inline (leaf) prose content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "inline", content = "value")]
pub enum ProseInline {
    /// A plain text run.
    Text(String),
    /// Inline code (`<c>` in doc-comment markup).
    InlineCode(String),
    /// A reference to another symbol by canonical name (`<see cref>`).
    SymbolRef(String),
    /// A reference to a parameter of the documented member.
    ParamRef(String),
    /// A reference to a generic parameter in scope.
    TypeParamRef(String),
}

/// List flavors. Definition lists give their items a term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    Unordered,
    Ordered,
    Definition,
}

/// One list item: an optional term (definition lists) plus body blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    #[serde(default)]
    pub term: Vec<ProseInline>,
    #[serde(default)]
    pub description: Vec<ProseBlock>,
}

/// One table row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    #[serde(default)]
    pub cells: Vec<TableCell>,
}

/// One table cell, holding block content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    #[serde(default)]
    pub blocks: Vec<ProseBlock>,
}

/// Block-level prose content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "block")]
pub enum ProseBlock {
    Paragraph {
        #[serde(default)]
        inlines: Vec<ProseInline>,
    },
    List {
        kind: ListKind,
        #[serde(default)]
        items: Vec<ListItem>,
    },
    Table {
        #[serde(default)]
        heading: Vec<TableRow>,
        #[serde(default)]
        body: Vec<TableRow>,
    },
    /// A multi-line code sample (`<code>`); a leaf at the block level.
    CodeBlock { text: String },
}

/// Documentation for one exception a member can raise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExceptionDoc {
    /// Canonical name of the exception type.
    pub exception_type: String,
    #[serde(default)]
    pub description: Vec<ProseBlock>,
}

/// Documentation for a named child: a parameter or generic parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamedDoc {
    pub name: String,
    #[serde(default)]
    pub description: Vec<ProseBlock>,
}

/// The prose sections attachable to one structural node.
///
/// This is both the payload of a [`ProseRecord`] and the always-present
/// prose attachment on built nodes: an unmatched node carries
/// `ProseContent::default()`, with every section present but empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProseContent {
    #[serde(default)]
    pub summary: Vec<ProseBlock>,
    #[serde(default)]
    pub remarks: Vec<ProseBlock>,
    /// Each example is one block sequence.
    #[serde(default)]
    pub examples: Vec<Vec<ProseBlock>>,
    /// Property/field value description.
    #[serde(default)]
    pub value: Vec<ProseBlock>,
    /// Return-value descriptions, in document order.
    #[serde(default)]
    pub returns: Vec<Vec<ProseBlock>>,
    #[serde(default)]
    pub exceptions: Vec<ExceptionDoc>,
    /// Generic-parameter descriptions; the builder redistributes these
    /// onto the matching generic-parameter nodes.
    #[serde(default)]
    pub type_params: Vec<NamedDoc>,
    /// Parameter descriptions; redistributed onto parameter nodes.
    #[serde(default)]
    pub params: Vec<NamedDoc>,
    /// Canonical names of related members (`<seealso>`).
    #[serde(default)]
    pub see_also: Vec<String>,
}

impl ProseContent {
    /// True when every section is empty.
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty()
            && self.remarks.is_empty()
            && self.examples.is_empty()
            && self.value.is_empty()
            && self.returns.is_empty()
            && self.exceptions.is_empty()
            && self.type_params.is_empty()
            && self.params.is_empty()
            && self.see_also.is_empty()
    }

    /// Take the description for a named child, removing it from the list.
    pub(crate) fn take_param_doc(&mut self, name: &str) -> Vec<ProseBlock> {
        take_named(&mut self.params, name)
    }

    /// Take the description for a named generic parameter.
    pub(crate) fn take_type_param_doc(&mut self, name: &str) -> Vec<ProseBlock> {
        take_named(&mut self.type_params, name)
    }
}

fn take_named(docs: &mut Vec<NamedDoc>, name: &str) -> Vec<ProseBlock> {
    match docs.iter().position(|d| d.name == name) {
        Some(i) => docs.remove(i).description,
        None => Vec::new(),
    }
}

/// One externally supplied prose record, keyed by canonical name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProseRecord {
    /// Canonical name of the symbol this record documents.
    pub name: String,
    #[serde(flatten)]
    pub content: ProseContent,
}

impl ProseRecord {
    /// An empty record for the given canonical name.
    pub fn new(name: impl Into<String>) -> Self {
        ProseRecord {
            name: name.into(),
            content: ProseContent::default(),
        }
    }
}

/// Convenience constructor for a single-paragraph block sequence.
pub fn paragraph(text: impl Into<String>) -> ProseBlock {
    ProseBlock::Paragraph {
        inlines: vec![ProseInline::Text(text.into())],
    }
}
