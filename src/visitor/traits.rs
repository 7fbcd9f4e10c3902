//! Visitor trait definitions.
//!
//! Both traits expose the same closed callback surface over the
//! documentation tree:
//!
//! - one `enter_*` callback per structural node kind (no exit callback);
//! - a `begin_*`/`end_*` pair per composite prose kind;
//! - one `visit_*` callback per leaf prose kind.
//!
//! Every callback defaults to a no-op returning `Ok(())`; a consumer
//! overrides only what it needs. Returning an error from any callback
//! aborts the traversal and propagates to the caller.
//!
//! [`DocVisitor`] drives a single blocking call stack;
//! [`AsyncDocVisitor`] is the suspension-capable twin, suspendable at
//! every callback boundary. For any given tree the two entry points in
//! [`super::walk`] invoke the identical ordered callback sequence with
//! identical arguments.

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{
    AssemblyNode, ClassNode, ConstantNode, ConstructorNode, DelegateNode, EnumNode, EventNode,
    FieldNode, GenericParameterNode, InterfaceNode, MethodNode, NamespaceNode, ParameterNode,
    PropertyNode, StructNode,
};

/// Blocking visitor over a documentation tree.
#[allow(unused_variables)]
pub trait DocVisitor {
    // ========================================================================
    // Structural entries
    // ========================================================================

    fn enter_assembly(&mut self, node: &AssemblyNode) -> Result<()> {
        Ok(())
    }
    fn enter_namespace(&mut self, node: &NamespaceNode) -> Result<()> {
        Ok(())
    }
    fn enter_class(&mut self, node: &ClassNode) -> Result<()> {
        Ok(())
    }
    fn enter_struct(&mut self, node: &StructNode) -> Result<()> {
        Ok(())
    }
    fn enter_interface(&mut self, node: &InterfaceNode) -> Result<()> {
        Ok(())
    }
    fn enter_enum(&mut self, node: &EnumNode) -> Result<()> {
        Ok(())
    }
    fn enter_delegate(&mut self, node: &DelegateNode) -> Result<()> {
        Ok(())
    }
    fn enter_constant(&mut self, node: &ConstantNode) -> Result<()> {
        Ok(())
    }
    fn enter_field(&mut self, node: &FieldNode) -> Result<()> {
        Ok(())
    }
    fn enter_constructor(&mut self, node: &ConstructorNode) -> Result<()> {
        Ok(())
    }
    fn enter_event(&mut self, node: &EventNode) -> Result<()> {
        Ok(())
    }
    fn enter_property(&mut self, node: &PropertyNode) -> Result<()> {
        Ok(())
    }
    fn enter_method(&mut self, node: &MethodNode) -> Result<()> {
        Ok(())
    }
    fn enter_parameter(&mut self, node: &ParameterNode) -> Result<()> {
        Ok(())
    }
    fn enter_generic_parameter(&mut self, node: &GenericParameterNode) -> Result<()> {
        Ok(())
    }

    // ========================================================================
    // Composite prose sections
    // ========================================================================

    fn begin_summary(&mut self) -> Result<()> {
        Ok(())
    }
    fn end_summary(&mut self) -> Result<()> {
        Ok(())
    }
    fn begin_remarks(&mut self) -> Result<()> {
        Ok(())
    }
    fn end_remarks(&mut self) -> Result<()> {
        Ok(())
    }
    fn begin_example(&mut self) -> Result<()> {
        Ok(())
    }
    fn end_example(&mut self) -> Result<()> {
        Ok(())
    }
    fn begin_value(&mut self) -> Result<()> {
        Ok(())
    }
    fn end_value(&mut self) -> Result<()> {
        Ok(())
    }
    fn begin_returns(&mut self) -> Result<()> {
        Ok(())
    }
    fn end_returns(&mut self) -> Result<()> {
        Ok(())
    }
    fn begin_exception(&mut self, exception_type: &str) -> Result<()> {
        Ok(())
    }
    fn end_exception(&mut self) -> Result<()> {
        Ok(())
    }
    fn begin_see_also(&mut self) -> Result<()> {
        Ok(())
    }
    fn end_see_also(&mut self) -> Result<()> {
        Ok(())
    }

    // ========================================================================
    // Composite prose blocks
    // ========================================================================

    fn begin_paragraph(&mut self) -> Result<()> {
        Ok(())
    }
    fn end_paragraph(&mut self) -> Result<()> {
        Ok(())
    }
    fn begin_unordered_list(&mut self) -> Result<()> {
        Ok(())
    }
    fn end_unordered_list(&mut self) -> Result<()> {
        Ok(())
    }
    fn begin_ordered_list(&mut self) -> Result<()> {
        Ok(())
    }
    fn end_ordered_list(&mut self) -> Result<()> {
        Ok(())
    }
    fn begin_definition_list(&mut self) -> Result<()> {
        Ok(())
    }
    fn end_definition_list(&mut self) -> Result<()> {
        Ok(())
    }
    fn begin_list_item(&mut self) -> Result<()> {
        Ok(())
    }
    fn end_list_item(&mut self) -> Result<()> {
        Ok(())
    }
    fn begin_term(&mut self) -> Result<()> {
        Ok(())
    }
    fn end_term(&mut self) -> Result<()> {
        Ok(())
    }
    fn begin_table(&mut self) -> Result<()> {
        Ok(())
    }
    fn end_table(&mut self) -> Result<()> {
        Ok(())
    }
    fn begin_table_heading(&mut self) -> Result<()> {
        Ok(())
    }
    fn end_table_heading(&mut self) -> Result<()> {
        Ok(())
    }
    fn begin_table_body(&mut self) -> Result<()> {
        Ok(())
    }
    fn end_table_body(&mut self) -> Result<()> {
        Ok(())
    }
    fn begin_table_row(&mut self) -> Result<()> {
        Ok(())
    }
    fn end_table_row(&mut self) -> Result<()> {
        Ok(())
    }
    fn begin_table_cell(&mut self) -> Result<()> {
        Ok(())
    }
    fn end_table_cell(&mut self) -> Result<()> {
        Ok(())
    }

    // ========================================================================
    // Prose leaves
    // ========================================================================

    fn visit_text(&mut self, text: &str) -> Result<()> {
        Ok(())
    }
    fn visit_inline_code(&mut self, code: &str) -> Result<()> {
        Ok(())
    }
    fn visit_symbol_ref(&mut self, canonical: &str) -> Result<()> {
        Ok(())
    }
    fn visit_param_ref(&mut self, name: &str) -> Result<()> {
        Ok(())
    }
    fn visit_type_param_ref(&mut self, name: &str) -> Result<()> {
        Ok(())
    }
    fn visit_code_block(&mut self, text: &str) -> Result<()> {
        Ok(())
    }
}

/// Suspension-capable visitor over a documentation tree.
///
/// Callback-for-callback identical to [`DocVisitor`]; each callback is a
/// suspension point. `async_trait` keeps the trait object-safe.
#[allow(unused_variables)]
#[async_trait]
pub trait AsyncDocVisitor: Send {
    // Structural entries

    async fn enter_assembly(&mut self, node: &AssemblyNode) -> Result<()> {
        Ok(())
    }
    async fn enter_namespace(&mut self, node: &NamespaceNode) -> Result<()> {
        Ok(())
    }
    async fn enter_class(&mut self, node: &ClassNode) -> Result<()> {
        Ok(())
    }
    async fn enter_struct(&mut self, node: &StructNode) -> Result<()> {
        Ok(())
    }
    async fn enter_interface(&mut self, node: &InterfaceNode) -> Result<()> {
        Ok(())
    }
    async fn enter_enum(&mut self, node: &EnumNode) -> Result<()> {
        Ok(())
    }
    async fn enter_delegate(&mut self, node: &DelegateNode) -> Result<()> {
        Ok(())
    }
    async fn enter_constant(&mut self, node: &ConstantNode) -> Result<()> {
        Ok(())
    }
    async fn enter_field(&mut self, node: &FieldNode) -> Result<()> {
        Ok(())
    }
    async fn enter_constructor(&mut self, node: &ConstructorNode) -> Result<()> {
        Ok(())
    }
    async fn enter_event(&mut self, node: &EventNode) -> Result<()> {
        Ok(())
    }
    async fn enter_property(&mut self, node: &PropertyNode) -> Result<()> {
        Ok(())
    }
    async fn enter_method(&mut self, node: &MethodNode) -> Result<()> {
        Ok(())
    }
    async fn enter_parameter(&mut self, node: &ParameterNode) -> Result<()> {
        Ok(())
    }
    async fn enter_generic_parameter(&mut self, node: &GenericParameterNode) -> Result<()> {
        Ok(())
    }

    // Composite prose sections

    async fn begin_summary(&mut self) -> Result<()> {
        Ok(())
    }
    async fn end_summary(&mut self) -> Result<()> {
        Ok(())
    }
    async fn begin_remarks(&mut self) -> Result<()> {
        Ok(())
    }
    async fn end_remarks(&mut self) -> Result<()> {
        Ok(())
    }
    async fn begin_example(&mut self) -> Result<()> {
        Ok(())
    }
    async fn end_example(&mut self) -> Result<()> {
        Ok(())
    }
    async fn begin_value(&mut self) -> Result<()> {
        Ok(())
    }
    async fn end_value(&mut self) -> Result<()> {
        Ok(())
    }
    async fn begin_returns(&mut self) -> Result<()> {
        Ok(())
    }
    async fn end_returns(&mut self) -> Result<()> {
        Ok(())
    }
    async fn begin_exception(&mut self, exception_type: &str) -> Result<()> {
        Ok(())
    }
    async fn end_exception(&mut self) -> Result<()> {
        Ok(())
    }
    async fn begin_see_also(&mut self) -> Result<()> {
        Ok(())
    }
    async fn end_see_also(&mut self) -> Result<()> {
        Ok(())
    }

    // Composite prose blocks

    async fn begin_paragraph(&mut self) -> Result<()> {
        Ok(())
    }
    async fn end_paragraph(&mut self) -> Result<()> {
        Ok(())
    }
    async fn begin_unordered_list(&mut self) -> Result<()> {
        Ok(())
    }
    async fn end_unordered_list(&mut self) -> Result<()> {
        Ok(())
    }
    async fn begin_ordered_list(&mut self) -> Result<()> {
        Ok(())
    }
    async fn end_ordered_list(&mut self) -> Result<()> {
        Ok(())
    }
    async fn begin_definition_list(&mut self) -> Result<()> {
        Ok(())
    }
    async fn end_definition_list(&mut self) -> Result<()> {
        Ok(())
    }
    async fn begin_list_item(&mut self) -> Result<()> {
        Ok(())
    }
    async fn end_list_item(&mut self) -> Result<()> {
        Ok(())
    }
    async fn begin_term(&mut self) -> Result<()> {
        Ok(())
    }
    async fn end_term(&mut self) -> Result<()> {
        Ok(())
    }
    async fn begin_table(&mut self) -> Result<()> {
        Ok(())
    }
    async fn end_table(&mut self) -> Result<()> {
        Ok(())
    }
    async fn begin_table_heading(&mut self) -> Result<()> {
        Ok(())
    }
    async fn end_table_heading(&mut self) -> Result<()> {
        Ok(())
    }
    async fn begin_table_body(&mut self) -> Result<()> {
        Ok(())
    }
    async fn end_table_body(&mut self) -> Result<()> {
        Ok(())
    }
    async fn begin_table_row(&mut self) -> Result<()> {
        Ok(())
    }
    async fn end_table_row(&mut self) -> Result<()> {
        Ok(())
    }
    async fn begin_table_cell(&mut self) -> Result<()> {
        Ok(())
    }
    async fn end_table_cell(&mut self) -> Result<()> {
        Ok(())
    }

    // Prose leaves

    async fn visit_text(&mut self, text: &str) -> Result<()> {
        Ok(())
    }
    async fn visit_inline_code(&mut self, code: &str) -> Result<()> {
        Ok(())
    }
    async fn visit_symbol_ref(&mut self, canonical: &str) -> Result<()> {
        Ok(())
    }
    async fn visit_param_ref(&mut self, name: &str) -> Result<()> {
        Ok(())
    }
    async fn visit_type_param_ref(&mut self, name: &str) -> Result<()> {
        Ok(())
    }
    async fn visit_code_block(&mut self, text: &str) -> Result<()> {
        Ok(())
    }
}
