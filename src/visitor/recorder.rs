//! A visitor that records every callback as a flat label sequence.
//!
//! [`CallRecorder`] implements both traversal traits; the asynchronous
//! implementation delegates to the blocking one, so a recorder driven
//! through either entry point yields a directly comparable transcript.
//! Used by the traversal tests to assert the two modes invoke identical
//! sequences, and handy when debugging a renderer's event stream.

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{
    AssemblyNode, ClassNode, ConstantNode, ConstructorNode, DelegateNode, EnumNode, EventNode,
    FieldNode, GenericParameterNode, InterfaceNode, MethodNode, NamespaceNode, ParameterNode,
    PropertyNode, StructNode,
};
use crate::visitor::traits::{AsyncDocVisitor, DocVisitor};

/// Records one label per callback, in invocation order.
#[derive(Debug, Default)]
pub struct CallRecorder {
    calls: Vec<String>,
}

impl CallRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded labels, in invocation order.
    pub fn calls(&self) -> &[String] {
        &self.calls
    }

    /// Consume the recorder, yielding the transcript.
    pub fn into_calls(self) -> Vec<String> {
        self.calls
    }

    fn record(&mut self, label: impl Into<String>) -> Result<()> {
        self.calls.push(label.into());
        Ok(())
    }
}

impl DocVisitor for CallRecorder {
    fn enter_assembly(&mut self, node: &AssemblyNode) -> Result<()> {
        self.record(format!("assembly {}", node.name))
    }
    fn enter_namespace(&mut self, node: &NamespaceNode) -> Result<()> {
        self.record(format!("namespace {}", node.name))
    }
    fn enter_class(&mut self, node: &ClassNode) -> Result<()> {
        self.record(format!("class {}", node.name))
    }
    fn enter_struct(&mut self, node: &StructNode) -> Result<()> {
        self.record(format!("struct {}", node.name))
    }
    fn enter_interface(&mut self, node: &InterfaceNode) -> Result<()> {
        self.record(format!("interface {}", node.name))
    }
    fn enter_enum(&mut self, node: &EnumNode) -> Result<()> {
        self.record(format!("enum {}", node.name))
    }
    fn enter_delegate(&mut self, node: &DelegateNode) -> Result<()> {
        self.record(format!("delegate {}", node.name))
    }
    fn enter_constant(&mut self, node: &ConstantNode) -> Result<()> {
        self.record(format!("constant {}", node.name))
    }
    fn enter_field(&mut self, node: &FieldNode) -> Result<()> {
        self.record(format!("field {}", node.name))
    }
    fn enter_constructor(&mut self, node: &ConstructorNode) -> Result<()> {
        self.record(format!("constructor {}", node.name))
    }
    fn enter_event(&mut self, node: &EventNode) -> Result<()> {
        self.record(format!("event {}", node.name))
    }
    fn enter_property(&mut self, node: &PropertyNode) -> Result<()> {
        self.record(format!("property {}", node.name))
    }
    fn enter_method(&mut self, node: &MethodNode) -> Result<()> {
        self.record(format!("method {}", node.name))
    }
    fn enter_parameter(&mut self, node: &ParameterNode) -> Result<()> {
        self.record(format!("parameter {}", node.name))
    }
    fn enter_generic_parameter(&mut self, node: &GenericParameterNode) -> Result<()> {
        self.record(format!("generic_parameter {}", node.name))
    }

    fn begin_summary(&mut self) -> Result<()> {
        self.record("begin summary")
    }
    fn end_summary(&mut self) -> Result<()> {
        self.record("end summary")
    }
    fn begin_remarks(&mut self) -> Result<()> {
        self.record("begin remarks")
    }
    fn end_remarks(&mut self) -> Result<()> {
        self.record("end remarks")
    }
    fn begin_example(&mut self) -> Result<()> {
        self.record("begin example")
    }
    fn end_example(&mut self) -> Result<()> {
        self.record("end example")
    }
    fn begin_value(&mut self) -> Result<()> {
        self.record("begin value")
    }
    fn end_value(&mut self) -> Result<()> {
        self.record("end value")
    }
    fn begin_returns(&mut self) -> Result<()> {
        self.record("begin returns")
    }
    fn end_returns(&mut self) -> Result<()> {
        self.record("end returns")
    }
    fn begin_exception(&mut self, exception_type: &str) -> Result<()> {
        self.record(format!("begin exception {exception_type}"))
    }
    fn end_exception(&mut self) -> Result<()> {
        self.record("end exception")
    }
    fn begin_see_also(&mut self) -> Result<()> {
        self.record("begin see_also")
    }
    fn end_see_also(&mut self) -> Result<()> {
        self.record("end see_also")
    }

    fn begin_paragraph(&mut self) -> Result<()> {
        self.record("begin paragraph")
    }
    fn end_paragraph(&mut self) -> Result<()> {
        self.record("end paragraph")
    }
    fn begin_unordered_list(&mut self) -> Result<()> {
        self.record("begin unordered_list")
    }
    fn end_unordered_list(&mut self) -> Result<()> {
        self.record("end unordered_list")
    }
    fn begin_ordered_list(&mut self) -> Result<()> {
        self.record("begin ordered_list")
    }
    fn end_ordered_list(&mut self) -> Result<()> {
        self.record("end ordered_list")
    }
    fn begin_definition_list(&mut self) -> Result<()> {
        self.record("begin definition_list")
    }
    fn end_definition_list(&mut self) -> Result<()> {
        self.record("end definition_list")
    }
    fn begin_list_item(&mut self) -> Result<()> {
        self.record("begin list_item")
    }
    fn end_list_item(&mut self) -> Result<()> {
        self.record("end list_item")
    }
    fn begin_term(&mut self) -> Result<()> {
        self.record("begin term")
    }
    fn end_term(&mut self) -> Result<()> {
        self.record("end term")
    }
    fn begin_table(&mut self) -> Result<()> {
        self.record("begin table")
    }
    fn end_table(&mut self) -> Result<()> {
        self.record("end table")
    }
    fn begin_table_heading(&mut self) -> Result<()> {
        self.record("begin table_heading")
    }
    fn end_table_heading(&mut self) -> Result<()> {
        self.record("end table_heading")
    }
    fn begin_table_body(&mut self) -> Result<()> {
        self.record("begin table_body")
    }
    fn end_table_body(&mut self) -> Result<()> {
        self.record("end table_body")
    }
    fn begin_table_row(&mut self) -> Result<()> {
        self.record("begin table_row")
    }
    fn end_table_row(&mut self) -> Result<()> {
        self.record("end table_row")
    }
    fn begin_table_cell(&mut self) -> Result<()> {
        self.record("begin table_cell")
    }
    fn end_table_cell(&mut self) -> Result<()> {
        self.record("end table_cell")
    }

    fn visit_text(&mut self, text: &str) -> Result<()> {
        self.record(format!("text {text}"))
    }
    fn visit_inline_code(&mut self, code: &str) -> Result<()> {
        self.record(format!("inline_code {code}"))
    }
    fn visit_symbol_ref(&mut self, canonical: &str) -> Result<()> {
        self.record(format!("symbol_ref {canonical}"))
    }
    fn visit_param_ref(&mut self, name: &str) -> Result<()> {
        self.record(format!("param_ref {name}"))
    }
    fn visit_type_param_ref(&mut self, name: &str) -> Result<()> {
        self.record(format!("type_param_ref {name}"))
    }
    fn visit_code_block(&mut self, text: &str) -> Result<()> {
        self.record(format!("code_block {text}"))
    }
}

#[async_trait]
impl AsyncDocVisitor for CallRecorder {
    async fn enter_assembly(&mut self, node: &AssemblyNode) -> Result<()> {
        DocVisitor::enter_assembly(self, node)
    }
    async fn enter_namespace(&mut self, node: &NamespaceNode) -> Result<()> {
        DocVisitor::enter_namespace(self, node)
    }
    async fn enter_class(&mut self, node: &ClassNode) -> Result<()> {
        DocVisitor::enter_class(self, node)
    }
    async fn enter_struct(&mut self, node: &StructNode) -> Result<()> {
        DocVisitor::enter_struct(self, node)
    }
    async fn enter_interface(&mut self, node: &InterfaceNode) -> Result<()> {
        DocVisitor::enter_interface(self, node)
    }
    async fn enter_enum(&mut self, node: &EnumNode) -> Result<()> {
        DocVisitor::enter_enum(self, node)
    }
    async fn enter_delegate(&mut self, node: &DelegateNode) -> Result<()> {
        DocVisitor::enter_delegate(self, node)
    }
    async fn enter_constant(&mut self, node: &ConstantNode) -> Result<()> {
        DocVisitor::enter_constant(self, node)
    }
    async fn enter_field(&mut self, node: &FieldNode) -> Result<()> {
        DocVisitor::enter_field(self, node)
    }
    async fn enter_constructor(&mut self, node: &ConstructorNode) -> Result<()> {
        DocVisitor::enter_constructor(self, node)
    }
    async fn enter_event(&mut self, node: &EventNode) -> Result<()> {
        DocVisitor::enter_event(self, node)
    }
    async fn enter_property(&mut self, node: &PropertyNode) -> Result<()> {
        DocVisitor::enter_property(self, node)
    }
    async fn enter_method(&mut self, node: &MethodNode) -> Result<()> {
        DocVisitor::enter_method(self, node)
    }
    async fn enter_parameter(&mut self, node: &ParameterNode) -> Result<()> {
        DocVisitor::enter_parameter(self, node)
    }
    async fn enter_generic_parameter(&mut self, node: &GenericParameterNode) -> Result<()> {
        DocVisitor::enter_generic_parameter(self, node)
    }

    async fn begin_summary(&mut self) -> Result<()> {
        DocVisitor::begin_summary(self)
    }
    async fn end_summary(&mut self) -> Result<()> {
        DocVisitor::end_summary(self)
    }
    async fn begin_remarks(&mut self) -> Result<()> {
        DocVisitor::begin_remarks(self)
    }
    async fn end_remarks(&mut self) -> Result<()> {
        DocVisitor::end_remarks(self)
    }
    async fn begin_example(&mut self) -> Result<()> {
        DocVisitor::begin_example(self)
    }
    async fn end_example(&mut self) -> Result<()> {
        DocVisitor::end_example(self)
    }
    async fn begin_value(&mut self) -> Result<()> {
        DocVisitor::begin_value(self)
    }
    async fn end_value(&mut self) -> Result<()> {
        DocVisitor::end_value(self)
    }
    async fn begin_returns(&mut self) -> Result<()> {
        DocVisitor::begin_returns(self)
    }
    async fn end_returns(&mut self) -> Result<()> {
        DocVisitor::end_returns(self)
    }
    async fn begin_exception(&mut self, exception_type: &str) -> Result<()> {
        DocVisitor::begin_exception(self, exception_type)
    }
    async fn end_exception(&mut self) -> Result<()> {
        DocVisitor::end_exception(self)
    }
    async fn begin_see_also(&mut self) -> Result<()> {
        DocVisitor::begin_see_also(self)
    }
    async fn end_see_also(&mut self) -> Result<()> {
        DocVisitor::end_see_also(self)
    }

    async fn begin_paragraph(&mut self) -> Result<()> {
        DocVisitor::begin_paragraph(self)
    }
    async fn end_paragraph(&mut self) -> Result<()> {
        DocVisitor::end_paragraph(self)
    }
    async fn begin_unordered_list(&mut self) -> Result<()> {
        DocVisitor::begin_unordered_list(self)
    }
    async fn end_unordered_list(&mut self) -> Result<()> {
        DocVisitor::end_unordered_list(self)
    }
    async fn begin_ordered_list(&mut self) -> Result<()> {
        DocVisitor::begin_ordered_list(self)
    }
    async fn end_ordered_list(&mut self) -> Result<()> {
        DocVisitor::end_ordered_list(self)
    }
    async fn begin_definition_list(&mut self) -> Result<()> {
        DocVisitor::begin_definition_list(self)
    }
    async fn end_definition_list(&mut self) -> Result<()> {
        DocVisitor::end_definition_list(self)
    }
    async fn begin_list_item(&mut self) -> Result<()> {
        DocVisitor::begin_list_item(self)
    }
    async fn end_list_item(&mut self) -> Result<()> {
        DocVisitor::end_list_item(self)
    }
    async fn begin_term(&mut self) -> Result<()> {
        DocVisitor::begin_term(self)
    }
    async fn end_term(&mut self) -> Result<()> {
        DocVisitor::end_term(self)
    }
    async fn begin_table(&mut self) -> Result<()> {
        DocVisitor::begin_table(self)
    }
    async fn end_table(&mut self) -> Result<()> {
        DocVisitor::end_table(self)
    }
    async fn begin_table_heading(&mut self) -> Result<()> {
        DocVisitor::begin_table_heading(self)
    }
    async fn end_table_heading(&mut self) -> Result<()> {
        DocVisitor::end_table_heading(self)
    }
    async fn begin_table_body(&mut self) -> Result<()> {
        DocVisitor::begin_table_body(self)
    }
    async fn end_table_body(&mut self) -> Result<()> {
        DocVisitor::end_table_body(self)
    }
    async fn begin_table_row(&mut self) -> Result<()> {
        DocVisitor::begin_table_row(self)
    }
    async fn end_table_row(&mut self) -> Result<()> {
        DocVisitor::end_table_row(self)
    }
    async fn begin_table_cell(&mut self) -> Result<()> {
        DocVisitor::begin_table_cell(self)
    }
    async fn end_table_cell(&mut self) -> Result<()> {
        DocVisitor::end_table_cell(self)
    }

    async fn visit_text(&mut self, text: &str) -> Result<()> {
        DocVisitor::visit_text(self, text)
    }
    async fn visit_inline_code(&mut self, code: &str) -> Result<()> {
        DocVisitor::visit_inline_code(self, code)
    }
    async fn visit_symbol_ref(&mut self, canonical: &str) -> Result<()> {
        DocVisitor::visit_symbol_ref(self, canonical)
    }
    async fn visit_param_ref(&mut self, name: &str) -> Result<()> {
        DocVisitor::visit_param_ref(self, name)
    }
    async fn visit_type_param_ref(&mut self, name: &str) -> Result<()> {
        DocVisitor::visit_type_param_ref(self, name)
    }
    async fn visit_code_block(&mut self, text: &str) -> Result<()> {
        DocVisitor::visit_code_block(self, text)
    }
}
