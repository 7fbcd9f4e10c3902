//! Traversal drivers.
//!
//! Both entry points flatten the tree into the same ordered event
//! sequence ([`tree_events`]) and dispatch each event to the matching
//! visitor callback. The dispatch table itself is shared: [`dispatch!`]
//! is expanded once per driver, differing only in whether the callback
//! result is awaited before `?`. This keeps the blocking and
//! suspension-capable traversals equivalent by construction rather than
//! by parallel maintenance.

use tokio_util::sync::CancellationToken;

use crate::error::{DocError, Result};
use crate::model::DocTree;
use crate::visitor::events::{tree_events, DocEvent};
use crate::visitor::traits::{AsyncDocVisitor, DocVisitor};

/// Maps one [`DocEvent`] to its visitor callback.
///
/// `$suffix` is the token run appended to every call: `?` for the
/// blocking driver, `.await?` for the suspension-capable one.
macro_rules! dispatch {
    ($visitor:expr, $event:expr, $($suffix:tt)+) => {
        match $event {
            DocEvent::Assembly(node) => { $visitor.enter_assembly(node)$($suffix)+ }
            DocEvent::Namespace(node) => { $visitor.enter_namespace(node)$($suffix)+ }
            DocEvent::Class(node) => { $visitor.enter_class(node)$($suffix)+ }
            DocEvent::Struct(node) => { $visitor.enter_struct(node)$($suffix)+ }
            DocEvent::Interface(node) => { $visitor.enter_interface(node)$($suffix)+ }
            DocEvent::Enum(node) => { $visitor.enter_enum(node)$($suffix)+ }
            DocEvent::Delegate(node) => { $visitor.enter_delegate(node)$($suffix)+ }
            DocEvent::Constant(node) => { $visitor.enter_constant(node)$($suffix)+ }
            DocEvent::Field(node) => { $visitor.enter_field(node)$($suffix)+ }
            DocEvent::Constructor(node) => { $visitor.enter_constructor(node)$($suffix)+ }
            DocEvent::Event(node) => { $visitor.enter_event(node)$($suffix)+ }
            DocEvent::Property(node) => { $visitor.enter_property(node)$($suffix)+ }
            DocEvent::Method(node) => { $visitor.enter_method(node)$($suffix)+ }
            DocEvent::Parameter(node) => { $visitor.enter_parameter(node)$($suffix)+ }
            DocEvent::GenericParameter(node) => {
                $visitor.enter_generic_parameter(node)$($suffix)+
            }
            DocEvent::BeginSummary => { $visitor.begin_summary()$($suffix)+ }
            DocEvent::EndSummary => { $visitor.end_summary()$($suffix)+ }
            DocEvent::BeginRemarks => { $visitor.begin_remarks()$($suffix)+ }
            DocEvent::EndRemarks => { $visitor.end_remarks()$($suffix)+ }
            DocEvent::BeginExample => { $visitor.begin_example()$($suffix)+ }
            DocEvent::EndExample => { $visitor.end_example()$($suffix)+ }
            DocEvent::BeginValue => { $visitor.begin_value()$($suffix)+ }
            DocEvent::EndValue => { $visitor.end_value()$($suffix)+ }
            DocEvent::BeginReturns => { $visitor.begin_returns()$($suffix)+ }
            DocEvent::EndReturns => { $visitor.end_returns()$($suffix)+ }
            DocEvent::BeginException(ty) => { $visitor.begin_exception(ty)$($suffix)+ }
            DocEvent::EndException => { $visitor.end_exception()$($suffix)+ }
            DocEvent::BeginSeeAlso => { $visitor.begin_see_also()$($suffix)+ }
            DocEvent::EndSeeAlso => { $visitor.end_see_also()$($suffix)+ }
            DocEvent::BeginParagraph => { $visitor.begin_paragraph()$($suffix)+ }
            DocEvent::EndParagraph => { $visitor.end_paragraph()$($suffix)+ }
            DocEvent::BeginUnorderedList => { $visitor.begin_unordered_list()$($suffix)+ }
            DocEvent::EndUnorderedList => { $visitor.end_unordered_list()$($suffix)+ }
            DocEvent::BeginOrderedList => { $visitor.begin_ordered_list()$($suffix)+ }
            DocEvent::EndOrderedList => { $visitor.end_ordered_list()$($suffix)+ }
            DocEvent::BeginDefinitionList => { $visitor.begin_definition_list()$($suffix)+ }
            DocEvent::EndDefinitionList => { $visitor.end_definition_list()$($suffix)+ }
            DocEvent::BeginListItem => { $visitor.begin_list_item()$($suffix)+ }
            DocEvent::EndListItem => { $visitor.end_list_item()$($suffix)+ }
            DocEvent::BeginTerm => { $visitor.begin_term()$($suffix)+ }
            DocEvent::EndTerm => { $visitor.end_term()$($suffix)+ }
            DocEvent::BeginTable => { $visitor.begin_table()$($suffix)+ }
            DocEvent::EndTable => { $visitor.end_table()$($suffix)+ }
            DocEvent::BeginTableHeading => { $visitor.begin_table_heading()$($suffix)+ }
            DocEvent::EndTableHeading => { $visitor.end_table_heading()$($suffix)+ }
            DocEvent::BeginTableBody => { $visitor.begin_table_body()$($suffix)+ }
            DocEvent::EndTableBody => { $visitor.end_table_body()$($suffix)+ }
            DocEvent::BeginTableRow => { $visitor.begin_table_row()$($suffix)+ }
            DocEvent::EndTableRow => { $visitor.end_table_row()$($suffix)+ }
            DocEvent::BeginTableCell => { $visitor.begin_table_cell()$($suffix)+ }
            DocEvent::EndTableCell => { $visitor.end_table_cell()$($suffix)+ }
            DocEvent::Text(text) => { $visitor.visit_text(text)$($suffix)+ }
            DocEvent::InlineCode(code) => { $visitor.visit_inline_code(code)$($suffix)+ }
            DocEvent::SymbolRef(canonical) => { $visitor.visit_symbol_ref(canonical)$($suffix)+ }
            DocEvent::ParamRef(name) => { $visitor.visit_param_ref(name)$($suffix)+ }
            DocEvent::TypeParamRef(name) => { $visitor.visit_type_param_ref(name)$($suffix)+ }
            DocEvent::CodeBlock(text) => { $visitor.visit_code_block(text)$($suffix)+ }
        }
    };
}

/// Drives `visitor` over `tree` in document order, blocking.
///
/// Stops at the first callback error and propagates it.
pub fn walk<V: DocVisitor + ?Sized>(tree: &DocTree, visitor: &mut V) -> Result<()> {
    let events = tree_events(tree);
    tracing::trace!(events = events.len(), "walking documentation tree");
    for event in events {
        dispatch!(visitor, event, ?);
    }
    Ok(())
}

/// Drives `visitor` over `tree` in document order, suspendable at every
/// callback.
///
/// `cancel` is polled before each callback; once it fires the traversal
/// returns [`DocError::Cancelled`] without invoking further callbacks.
/// For an untriggered token the callback sequence is identical to
/// [`walk`].
pub async fn walk_async<V: AsyncDocVisitor + ?Sized>(
    tree: &DocTree,
    visitor: &mut V,
    cancel: CancellationToken,
) -> Result<()> {
    let events = tree_events(tree);
    tracing::trace!(events = events.len(), "walking documentation tree");
    for event in events {
        if cancel.is_cancelled() {
            return Err(DocError::Cancelled);
        }
        dispatch!(visitor, event, .await?);
    }
    Ok(())
}
