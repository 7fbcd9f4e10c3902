//! Flattened traversal events.
//!
//! The whole tree walk lives here, once: [`tree_events`] turns a
//! [`DocTree`] into the ordered event sequence both traversal modes
//! dispatch from. Driving the blocking and the suspension-capable entry
//! points from one shared sequence is what guarantees they invoke the
//! identical ordered callbacks with identical arguments.
//!
//! Order contract per structural node:
//! 1. the structural enter event;
//! 2. prose sections in document order: summary, exceptions, remarks,
//!    examples, value, returns, related members;
//! 3. structural children in declaration order.
//!
//! Structural nodes have no exit event; composite prose events are always
//! properly paired. Empty prose sections emit nothing at all.

use crate::model::prose::{ExceptionDoc, ListKind, ProseBlock, ProseContent, ProseInline, TableRow};
use crate::model::{
    AssemblyNode, ClassNode, ConstantNode, ConstructorNode, DelegateNode, DocTree, EnumNode,
    EventNode, FieldNode, GenericParameterNode, InterfaceNode, MethodNode, NamespaceNode,
    ParameterNode, PropertyNode, StructNode, TypeNode,
};

/// One traversal callback, in dispatch order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DocEvent<'a> {
    // Structural entries
    Assembly(&'a AssemblyNode),
    Namespace(&'a NamespaceNode),
    Class(&'a ClassNode),
    Struct(&'a StructNode),
    Interface(&'a InterfaceNode),
    Enum(&'a EnumNode),
    Delegate(&'a DelegateNode),
    Constant(&'a ConstantNode),
    Field(&'a FieldNode),
    Constructor(&'a ConstructorNode),
    Event(&'a EventNode),
    Property(&'a PropertyNode),
    Method(&'a MethodNode),
    Parameter(&'a ParameterNode),
    GenericParameter(&'a GenericParameterNode),

    // Composite prose sections
    BeginSummary,
    EndSummary,
    BeginRemarks,
    EndRemarks,
    BeginExample,
    EndExample,
    BeginValue,
    EndValue,
    BeginReturns,
    EndReturns,
    BeginException(&'a str),
    EndException,
    BeginSeeAlso,
    EndSeeAlso,

    // Composite prose blocks
    BeginParagraph,
    EndParagraph,
    BeginUnorderedList,
    EndUnorderedList,
    BeginOrderedList,
    EndOrderedList,
    BeginDefinitionList,
    EndDefinitionList,
    BeginListItem,
    EndListItem,
    BeginTerm,
    EndTerm,
    BeginTable,
    EndTable,
    BeginTableHeading,
    EndTableHeading,
    BeginTableBody,
    EndTableBody,
    BeginTableRow,
    EndTableRow,
    BeginTableCell,
    EndTableCell,

    // Prose leaves
    Text(&'a str),
    InlineCode(&'a str),
    SymbolRef(&'a str),
    ParamRef(&'a str),
    TypeParamRef(&'a str),
    CodeBlock(&'a str),
}

/// Flatten a tree into its complete ordered event sequence.
pub fn tree_events(tree: &DocTree) -> Vec<DocEvent<'_>> {
    let mut events = Vec::new();
    push_assembly(&mut events, &tree.assembly);
    events
}

fn push_assembly<'a>(events: &mut Vec<DocEvent<'a>>, node: &'a AssemblyNode) {
    events.push(DocEvent::Assembly(node));
    for namespace in &node.namespaces {
        push_namespace(events, namespace);
    }
}

fn push_namespace<'a>(events: &mut Vec<DocEvent<'a>>, node: &'a NamespaceNode) {
    events.push(DocEvent::Namespace(node));
    for ty in &node.types {
        push_type(events, ty);
    }
}

fn push_type<'a>(events: &mut Vec<DocEvent<'a>>, node: &'a TypeNode) {
    match node {
        TypeNode::Enum(n) => {
            events.push(DocEvent::Enum(n));
            push_prose(events, &n.prose);
            for constant in &n.constants {
                push_constant(events, constant);
            }
        }
        TypeNode::Delegate(n) => {
            events.push(DocEvent::Delegate(n));
            push_prose(events, &n.prose);
            for param in &n.generic_params {
                push_generic_param(events, param);
            }
            for param in &n.parameters {
                push_parameter(events, param);
            }
        }
        TypeNode::Interface(n) => {
            events.push(DocEvent::Interface(n));
            push_prose(events, &n.prose);
            for param in &n.generic_params {
                push_generic_param(events, param);
            }
            push_shared_members(events, &n.events, &n.properties, &n.methods);
        }
        TypeNode::Class(n) => {
            events.push(DocEvent::Class(n));
            push_prose(events, &n.prose);
            push_composite_children(events, CompositeChildren {
                generic_params: &n.generic_params,
                constants: &n.constants,
                fields: &n.fields,
                constructors: &n.constructors,
                events: &n.events,
                properties: &n.properties,
                methods: &n.methods,
            });
        }
        TypeNode::Struct(n) => {
            events.push(DocEvent::Struct(n));
            push_prose(events, &n.prose);
            push_composite_children(events, CompositeChildren {
                generic_params: &n.generic_params,
                constants: &n.constants,
                fields: &n.fields,
                constructors: &n.constructors,
                events: &n.events,
                properties: &n.properties,
                methods: &n.methods,
            });
        }
    }
}

/// Child collections shared by class and struct nodes.
struct CompositeChildren<'a> {
    generic_params: &'a [GenericParameterNode],
    constants: &'a [ConstantNode],
    fields: &'a [FieldNode],
    constructors: &'a [ConstructorNode],
    events: &'a [EventNode],
    properties: &'a [PropertyNode],
    methods: &'a [MethodNode],
}

fn push_composite_children<'a>(events: &mut Vec<DocEvent<'a>>, children: CompositeChildren<'a>) {
    for param in children.generic_params {
        push_generic_param(events, param);
    }
    for constant in children.constants {
        push_constant(events, constant);
    }
    for field in children.fields {
        events.push(DocEvent::Field(field));
        push_prose(events, &field.prose);
    }
    for ctor in children.constructors {
        events.push(DocEvent::Constructor(ctor));
        push_prose(events, &ctor.prose);
        for param in &ctor.parameters {
            push_parameter(events, param);
        }
    }
    push_shared_members(events, children.events, children.properties, children.methods);
}

fn push_shared_members<'a>(
    events: &mut Vec<DocEvent<'a>>,
    event_members: &'a [EventNode],
    properties: &'a [PropertyNode],
    methods: &'a [MethodNode],
) {
    for member in event_members {
        events.push(DocEvent::Event(member));
        push_prose(events, &member.prose);
    }
    for property in properties {
        events.push(DocEvent::Property(property));
        push_prose(events, &property.prose);
    }
    for method in methods {
        events.push(DocEvent::Method(method));
        push_prose(events, &method.prose);
        for param in &method.generic_params {
            push_generic_param(events, param);
        }
        for param in &method.parameters {
            push_parameter(events, param);
        }
    }
}

fn push_constant<'a>(events: &mut Vec<DocEvent<'a>>, node: &'a ConstantNode) {
    events.push(DocEvent::Constant(node));
    push_prose(events, &node.prose);
}

fn push_parameter<'a>(events: &mut Vec<DocEvent<'a>>, node: &'a ParameterNode) {
    events.push(DocEvent::Parameter(node));
    push_section(events, DocEvent::BeginSummary, DocEvent::EndSummary, &node.description);
}

fn push_generic_param<'a>(events: &mut Vec<DocEvent<'a>>, node: &'a GenericParameterNode) {
    events.push(DocEvent::GenericParameter(node));
    push_section(events, DocEvent::BeginSummary, DocEvent::EndSummary, &node.description);
}

/// Emit one node's prose sections in document order.
fn push_prose<'a>(events: &mut Vec<DocEvent<'a>>, prose: &'a ProseContent) {
    push_section(events, DocEvent::BeginSummary, DocEvent::EndSummary, &prose.summary);
    for exception in &prose.exceptions {
        push_exception(events, exception);
    }
    push_section(events, DocEvent::BeginRemarks, DocEvent::EndRemarks, &prose.remarks);
    for example in &prose.examples {
        push_section(events, DocEvent::BeginExample, DocEvent::EndExample, example);
    }
    push_section(events, DocEvent::BeginValue, DocEvent::EndValue, &prose.value);
    for returns in &prose.returns {
        push_section(events, DocEvent::BeginReturns, DocEvent::EndReturns, returns);
    }
    if !prose.see_also.is_empty() {
        events.push(DocEvent::BeginSeeAlso);
        for related in &prose.see_also {
            events.push(DocEvent::SymbolRef(related));
        }
        events.push(DocEvent::EndSeeAlso);
    }
}

fn push_exception<'a>(events: &mut Vec<DocEvent<'a>>, exception: &'a ExceptionDoc) {
    events.push(DocEvent::BeginException(&exception.exception_type));
    push_blocks(events, &exception.description);
    events.push(DocEvent::EndException);
}

/// Emit `begin`, the blocks, `end` — or nothing when the section is empty.
fn push_section<'a>(
    events: &mut Vec<DocEvent<'a>>,
    begin: DocEvent<'a>,
    end: DocEvent<'a>,
    blocks: &'a [ProseBlock],
) {
    if blocks.is_empty() {
        return;
    }
    events.push(begin);
    push_blocks(events, blocks);
    events.push(end);
}

fn push_blocks<'a>(events: &mut Vec<DocEvent<'a>>, blocks: &'a [ProseBlock]) {
    for block in blocks {
        push_block(events, block);
    }
}

fn push_block<'a>(events: &mut Vec<DocEvent<'a>>, block: &'a ProseBlock) {
    match block {
        ProseBlock::Paragraph { inlines } => {
            events.push(DocEvent::BeginParagraph);
            for inline in inlines {
                push_inline(events, inline);
            }
            events.push(DocEvent::EndParagraph);
        }
        ProseBlock::List { kind, items } => {
            let (begin, end) = match kind {
                ListKind::Unordered => (DocEvent::BeginUnorderedList, DocEvent::EndUnorderedList),
                ListKind::Ordered => (DocEvent::BeginOrderedList, DocEvent::EndOrderedList),
                ListKind::Definition => {
                    (DocEvent::BeginDefinitionList, DocEvent::EndDefinitionList)
                }
            };
            events.push(begin);
            for item in items {
                events.push(DocEvent::BeginListItem);
                if !item.term.is_empty() {
                    events.push(DocEvent::BeginTerm);
                    for inline in &item.term {
                        push_inline(events, inline);
                    }
                    events.push(DocEvent::EndTerm);
                }
                push_blocks(events, &item.description);
                events.push(DocEvent::EndListItem);
            }
            events.push(end);
        }
        ProseBlock::Table { heading, body } => {
            events.push(DocEvent::BeginTable);
            if !heading.is_empty() {
                events.push(DocEvent::BeginTableHeading);
                push_rows(events, heading);
                events.push(DocEvent::EndTableHeading);
            }
            if !body.is_empty() {
                events.push(DocEvent::BeginTableBody);
                push_rows(events, body);
                events.push(DocEvent::EndTableBody);
            }
            events.push(DocEvent::EndTable);
        }
        ProseBlock::CodeBlock { text } => events.push(DocEvent::CodeBlock(text)),
    }
}

fn push_rows<'a>(events: &mut Vec<DocEvent<'a>>, rows: &'a [TableRow]) {
    for row in rows {
        events.push(DocEvent::BeginTableRow);
        for cell in &row.cells {
            events.push(DocEvent::BeginTableCell);
            push_blocks(events, &cell.blocks);
            events.push(DocEvent::EndTableCell);
        }
        events.push(DocEvent::EndTableRow);
    }
}

fn push_inline<'a>(events: &mut Vec<DocEvent<'a>>, inline: &'a ProseInline) {
    let event = match inline {
        ProseInline::Text(text) => DocEvent::Text(text),
        ProseInline::InlineCode(code) => DocEvent::InlineCode(code),
        ProseInline::SymbolRef(name) => DocEvent::SymbolRef(name),
        ProseInline::ParamRef(name) => DocEvent::ParamRef(name),
        ProseInline::TypeParamRef(name) => DocEvent::TypeParamRef(name),
    };
    events.push(event);
}
