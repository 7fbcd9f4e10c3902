//! Documentation element builder.
//!
//! [`build`] walks one assembly's fact snapshot in declaration order
//! (assembly, namespaces, types, members, then parameters, generic
//! parameters, and attributes), resolving every symbol reference through
//! the [`crate::resolver::Resolver`] and attaching prose through the
//! [`crate::matcher::ProseCollection`]. Nodes whose canonical name has no
//! record get an empty-but-present prose attachment.
//!
//! The builder fails fast: inconsistent facts (a delegate without a
//! signature, an enum carrying methods, a default-value flag that
//! disagrees with the value) raise [`DocError::Integrity`] immediately.
//! Missing structural facts are never papered over with defaults.

use crate::error::{DocError, Result};
use crate::facts::{
    AssemblyFacts, AttributeFacts, ConstantFacts, ConstructorFacts, EventFacts, FieldFacts,
    GenericParamFacts, MemberFacts, MethodFacts, ParameterFacts, PropertyFacts, TypeFacts,
    TypeKind, TypeRefFacts,
};
use crate::identity::{
    self, constructor_canonical, event_canonical, field_canonical, method_canonical,
    property_canonical, type_canonical, type_doc_id, SigContext,
};
use crate::matcher::ProseCollection;
use crate::model::prose::ProseContent;
use crate::model::{
    AssemblyNode, AttributeArgument, AttributeNode, ClassNode, ConstantNode, ConstructorNode,
    DelegateNode, DocTree, EnumNode, EventNode, FieldNode, GenericParameterNode, InterfaceNode,
    MethodNode, NamespaceNode, ParameterNode, PropertyNode, StructNode, TypeNode, TypeRefId,
};
use crate::resolver::Resolver;

/// Build the immutable documentation tree for one assembly snapshot.
pub fn build(assembly: &AssemblyFacts, prose: &ProseCollection) -> Result<DocTree> {
    tracing::debug!(
        assembly = %assembly.identity.name,
        namespaces = assembly.namespaces.len(),
        "building documentation tree"
    );
    let mut builder = Builder {
        resolver: Resolver::new(),
        prose,
    };
    let root = builder.build_assembly(assembly)?;
    let refs = builder.resolver.into_arena();
    tracing::debug!(references = refs.len(), "documentation tree built");
    Ok(DocTree {
        assembly: root,
        refs,
    })
}

struct Builder<'a> {
    resolver: Resolver,
    prose: &'a ProseCollection,
}

impl Builder<'_> {
    fn build_assembly(&mut self, facts: &AssemblyFacts) -> Result<AssemblyNode> {
        let namespaces = facts
            .namespaces
            .iter()
            .map(|ns| self.build_namespace(facts, ns))
            .collect::<Result<Vec<_>>>()?;
        Ok(AssemblyNode {
            name: facts.identity.name.clone(),
            identity: facts.identity.clone(),
            namespaces,
            dependencies: facts.dependencies.clone(),
            attributes: self.build_attributes(&facts.attributes)?,
        })
    }

    fn build_namespace(
        &mut self,
        assembly: &AssemblyFacts,
        facts: &crate::facts::NamespaceFacts,
    ) -> Result<NamespaceNode> {
        let types = facts
            .types
            .iter()
            .map(|t| self.build_type(assembly, t))
            .collect::<Result<Vec<_>>>()?;
        Ok(NamespaceNode {
            name: facts.name.clone(),
            types,
        })
    }

    fn build_type(&mut self, assembly: &AssemblyFacts, facts: &TypeFacts) -> Result<TypeNode> {
        validate_type_shape(facts)?;

        let doc_id = type_doc_id(facts)?;
        tracing::trace!(type_id = %doc_id, "building type node");
        let mut content = self.lookup(&type_canonical(facts)?);

        // Register this type's own reference before its members so every
        // declaring back-reference lands on the same node.
        let self_ref = self_reference(assembly, facts, &doc_id);
        let self_id = self.resolver.resolve(&self_ref)?;
        let declaring_type = facts
            .declaring_type
            .as_ref()
            .map(|d| self.resolver.resolve(d))
            .transpose()?;

        let generic_params =
            self.build_generic_params(&doc_id, &facts.generic_params, &mut content)?;
        let attributes = self.build_attributes(&facts.attributes)?;
        let type_param_names = param_names(&facts.generic_params);

        let mut constants = Vec::new();
        let mut fields = Vec::new();
        let mut constructors = Vec::new();
        let mut events = Vec::new();
        let mut properties = Vec::new();
        let mut methods = Vec::new();
        for member in &facts.members {
            match member {
                MemberFacts::Constant(m) => {
                    constants.push(self.build_constant(&doc_id, self_id, m)?)
                }
                MemberFacts::Field(m) => fields.push(self.build_field(&doc_id, self_id, m)?),
                MemberFacts::Constructor(m) => {
                    constructors.push(self.build_constructor(
                        &doc_id,
                        self_id,
                        m,
                        &type_param_names,
                    )?)
                }
                MemberFacts::Event(m) => events.push(self.build_event(&doc_id, self_id, m)?),
                MemberFacts::Property(m) => {
                    properties.push(self.build_property(&doc_id, self_id, m)?)
                }
                MemberFacts::Method(m) => {
                    methods.push(self.build_method(&doc_id, self_id, m, &type_param_names)?)
                }
            }
        }

        let node = match facts.kind {
            TypeKind::Enum => TypeNode::Enum(EnumNode {
                name: facts.name.clone(),
                namespace: facts.namespace.clone(),
                access: facts.access,
                declaring_type,
                attributes,
                constants,
                prose: content,
            }),
            TypeKind::Delegate => {
                // Shape validation guarantees the signature is present.
                let signature = facts.delegate_signature.as_ref().ok_or_else(|| {
                    DocError::integrity(format!("delegate {doc_id} has no signature"))
                })?;
                let return_type = self.resolver.resolve(&signature.return_type)?;
                let parameters = self.build_parameters(&signature.parameters, &mut content)?;
                TypeNode::Delegate(DelegateNode {
                    name: facts.name.clone(),
                    namespace: facts.namespace.clone(),
                    access: facts.access,
                    declaring_type,
                    generic_params,
                    attributes,
                    return_type,
                    parameters,
                    prose: content,
                })
            }
            TypeKind::Interface => TypeNode::Interface(InterfaceNode {
                name: facts.name.clone(),
                namespace: facts.namespace.clone(),
                access: facts.access,
                declaring_type,
                generic_params,
                attributes,
                events,
                properties,
                methods,
                prose: content,
            }),
            TypeKind::Class => TypeNode::Class(ClassNode {
                name: facts.name.clone(),
                namespace: facts.namespace.clone(),
                access: facts.access,
                declaring_type,
                generic_params,
                attributes,
                constants,
                fields,
                constructors,
                events,
                properties,
                methods,
                prose: content,
            }),
            TypeKind::Struct => TypeNode::Struct(StructNode {
                name: facts.name.clone(),
                namespace: facts.namespace.clone(),
                access: facts.access,
                declaring_type,
                generic_params,
                attributes,
                constants,
                fields,
                constructors,
                events,
                properties,
                methods,
                prose: content,
            }),
        };
        Ok(node)
    }

    fn build_generic_params(
        &mut self,
        owner: &str,
        facts: &[GenericParamFacts],
        content: &mut ProseContent,
    ) -> Result<Vec<GenericParameterNode>> {
        facts
            .iter()
            .map(|p| {
                let (reference, constraints) = self.resolver.resolve_generic_param(owner, p)?;
                Ok(GenericParameterNode {
                    name: p.name.clone(),
                    variance: p.variance,
                    reference_type_constraint: p.reference_type_constraint,
                    value_type_constraint: p.value_type_constraint,
                    default_constructor_constraint: p.default_constructor_constraint,
                    constraints,
                    reference,
                    description: content.take_type_param_doc(&p.name),
                })
            })
            .collect()
    }

    fn build_parameters(
        &mut self,
        facts: &[ParameterFacts],
        content: &mut ProseContent,
    ) -> Result<Vec<ParameterNode>> {
        facts
            .iter()
            .map(|p| {
                if p.has_default != p.default.is_some() {
                    return Err(DocError::integrity(format!(
                        "parameter {} default-value flag disagrees with its value",
                        p.name
                    )));
                }
                Ok(ParameterNode {
                    name: p.name.clone(),
                    param_type: self.resolver.resolve(&p.param_type)?,
                    default: p.default.clone(),
                    attributes: self.build_attributes(&p.attributes)?,
                    description: content.take_param_doc(&p.name),
                })
            })
            .collect()
    }

    fn build_constant(
        &mut self,
        doc_id: &str,
        declaring: TypeRefId,
        facts: &ConstantFacts,
    ) -> Result<ConstantNode> {
        Ok(ConstantNode {
            name: facts.name.clone(),
            access: facts.access,
            declaring_type: declaring,
            attributes: self.build_attributes(&facts.attributes)?,
            const_type: self.resolver.resolve(&facts.const_type)?,
            value: facts.value.clone(),
            prose: self.lookup(&field_canonical(doc_id, &facts.name)),
        })
    }

    fn build_field(
        &mut self,
        doc_id: &str,
        declaring: TypeRefId,
        facts: &FieldFacts,
    ) -> Result<FieldNode> {
        Ok(FieldNode {
            name: facts.name.clone(),
            access: facts.access,
            declaring_type: declaring,
            attributes: self.build_attributes(&facts.attributes)?,
            field_type: self.resolver.resolve(&facts.field_type)?,
            prose: self.lookup(&field_canonical(doc_id, &facts.name)),
        })
    }

    fn build_constructor(
        &mut self,
        doc_id: &str,
        declaring: TypeRefId,
        facts: &ConstructorFacts,
        type_params: &[String],
    ) -> Result<ConstructorNode> {
        let ctx = SigContext {
            type_params,
            method_params: &[],
        };
        let mut content = self.lookup(&constructor_canonical(doc_id, facts, ctx)?);
        let parameters = self.build_parameters(&facts.parameters, &mut content)?;
        Ok(ConstructorNode {
            name: facts.name.clone(),
            access: facts.access,
            declaring_type: declaring,
            attributes: self.build_attributes(&facts.attributes)?,
            parameters,
            prose: content,
        })
    }

    fn build_event(
        &mut self,
        doc_id: &str,
        declaring: TypeRefId,
        facts: &EventFacts,
    ) -> Result<EventNode> {
        Ok(EventNode {
            name: facts.name.clone(),
            access: facts.access,
            declaring_type: declaring,
            attributes: self.build_attributes(&facts.attributes)?,
            handler_type: self.resolver.resolve(&facts.handler_type)?,
            prose: self.lookup(&event_canonical(doc_id, facts)),
        })
    }

    fn build_property(
        &mut self,
        doc_id: &str,
        declaring: TypeRefId,
        facts: &PropertyFacts,
    ) -> Result<PropertyNode> {
        Ok(PropertyNode {
            name: facts.name.clone(),
            access: facts.access,
            declaring_type: declaring,
            attributes: self.build_attributes(&facts.attributes)?,
            property_type: self.resolver.resolve(&facts.property_type)?,
            has_getter: facts.has_getter,
            has_setter: facts.has_setter,
            prose: self.lookup(&property_canonical(doc_id, facts)),
        })
    }

    fn build_method(
        &mut self,
        doc_id: &str,
        declaring: TypeRefId,
        facts: &MethodFacts,
        type_params: &[String],
    ) -> Result<MethodNode> {
        let method_param_names = param_names(&facts.generic_params);
        let ctx = SigContext {
            type_params,
            method_params: &method_param_names,
        };
        let mut content = self.lookup(&method_canonical(doc_id, facts, ctx)?);
        let owner = identity::method_owner(doc_id, facts);
        let generic_params = self.build_generic_params(&owner, &facts.generic_params, &mut content)?;
        let parameters = self.build_parameters(&facts.parameters, &mut content)?;
        Ok(MethodNode {
            name: facts.name.clone(),
            access: facts.access,
            declaring_type: declaring,
            attributes: self.build_attributes(&facts.attributes)?,
            return_type: self.resolver.resolve(&facts.return_type)?,
            generic_params,
            parameters,
            prose: content,
        })
    }

    fn build_attributes(&mut self, facts: &[AttributeFacts]) -> Result<Vec<AttributeNode>> {
        facts
            .iter()
            .map(|a| {
                if !matches!(a.attribute_type, TypeRefFacts::Instance { .. }) {
                    return Err(DocError::integrity(format!(
                        "attribute type must be an instance type, found {:?}",
                        a.attribute_type
                    )));
                }
                Ok(AttributeNode {
                    attribute_type: self.resolver.resolve(&a.attribute_type)?,
                    positional: self.build_attribute_args(&a.positional)?,
                    named: self.build_attribute_args(&a.named)?,
                })
            })
            .collect()
    }

    fn build_attribute_args(
        &mut self,
        facts: &[crate::facts::AttributeArgFacts],
    ) -> Result<Vec<AttributeArgument>> {
        facts
            .iter()
            .map(|arg| {
                Ok(AttributeArgument {
                    name: arg.name.clone(),
                    // The declared parameter/property type, which may
                    // diverge from the boxed runtime type of the value.
                    declared_type: self.resolver.resolve(&arg.declared_type)?,
                    value: arg.value.clone(),
                })
            })
            .collect()
    }

    /// Matcher query: a hit clones the record's content, a miss yields the
    /// empty-but-present attachment.
    fn lookup(&self, canonical: &str) -> ProseContent {
        match self.prose.try_find(canonical) {
            Some(record) => record.content.clone(),
            None => ProseContent::default(),
        }
    }
}

/// Reject member sets that cannot occur for the declared type kind.
fn validate_type_shape(facts: &TypeFacts) -> Result<()> {
    let describe = |facts: &TypeFacts| format!("{}.{}", facts.namespace, facts.name);
    match facts.kind {
        TypeKind::Delegate => {
            if facts.delegate_signature.is_none() {
                return Err(DocError::integrity(format!(
                    "delegate {} has no invocation signature",
                    describe(facts)
                )));
            }
            if !facts.members.is_empty() {
                return Err(DocError::integrity(format!(
                    "delegate {} must not declare members",
                    describe(facts)
                )));
            }
        }
        TypeKind::Enum => {
            if facts
                .members
                .iter()
                .any(|m| !matches!(m, MemberFacts::Constant(_)))
            {
                return Err(DocError::integrity(format!(
                    "enum {} may only declare constants",
                    describe(facts)
                )));
            }
            if !facts.generic_params.is_empty() {
                return Err(DocError::integrity(format!(
                    "enum {} cannot be generic",
                    describe(facts)
                )));
            }
        }
        TypeKind::Interface => {
            if facts.members.iter().any(|m| {
                matches!(
                    m,
                    MemberFacts::Constant(_) | MemberFacts::Field(_) | MemberFacts::Constructor(_)
                )
            }) {
                return Err(DocError::integrity(format!(
                    "interface {} may only declare events, properties, and methods",
                    describe(facts)
                )));
            }
        }
        TypeKind::Class | TypeKind::Struct => {}
    }
    if facts.kind != TypeKind::Delegate && facts.delegate_signature.is_some() {
        return Err(DocError::integrity(format!(
            "non-delegate {} carries a delegate signature",
            describe(facts)
        )));
    }
    Ok(())
}

/// The fact reference describing the type being built, used to register
/// its own arena node for declaring back-references.
fn self_reference(assembly: &AssemblyFacts, facts: &TypeFacts, doc_id: &str) -> TypeRefFacts {
    TypeRefFacts::Instance {
        name: facts.name.clone(),
        namespace: facts.namespace.clone(),
        generic_args: facts
            .generic_params
            .iter()
            .map(|p| TypeRefFacts::GenericParam {
                name: p.name.clone(),
                owner: doc_id.to_string(),
            })
            .collect(),
        declaring: facts.declaring_type.clone().map(Box::new),
        assembly: assembly.identity.clone(),
    }
}

fn param_names(params: &[GenericParamFacts]) -> Vec<String> {
    params.iter().map(|p| p.name.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::{Access, AssemblyIdentity, ConstantValue, Variance};
    use crate::model::prose::paragraph;
    use crate::model::TypeRef;

    fn assembly_identity() -> AssemblyIdentity {
        AssemblyIdentity {
            name: "Example".to_string(),
            version: "1.0.0.0".to_string(),
            culture: "neutral".to_string(),
            public_key_token: "0123456789abcdef".to_string(),
        }
    }

    fn string_ref() -> TypeRefFacts {
        TypeRefFacts::Instance {
            name: "String".to_string(),
            namespace: "System".to_string(),
            generic_args: Vec::new(),
            declaring: None,
            assembly: assembly_identity(),
        }
    }

    fn int_ref() -> TypeRefFacts {
        TypeRefFacts::Instance {
            name: "Int32".to_string(),
            namespace: "System".to_string(),
            generic_args: Vec::new(),
            declaring: None,
            assembly: assembly_identity(),
        }
    }

    fn empty_class(name: &str) -> TypeFacts {
        TypeFacts {
            kind: TypeKind::Class,
            name: name.to_string(),
            namespace: "Example".to_string(),
            access: Access::Public,
            declaring_type: None,
            generic_params: Vec::new(),
            attributes: Vec::new(),
            members: Vec::new(),
            delegate_signature: None,
        }
    }

    fn assembly_with(types: Vec<TypeFacts>) -> AssemblyFacts {
        AssemblyFacts {
            identity: assembly_identity(),
            namespaces: vec![crate::facts::NamespaceFacts {
                name: "Example".to_string(),
                types,
            }],
            dependencies: Vec::new(),
            attributes: Vec::new(),
        }
    }

    fn empty_prose() -> ProseCollection {
        ProseCollection::from_records(Vec::new())
    }

    #[test]
    fn matched_summary_is_attached_to_the_type_node() {
        let facts = assembly_with(vec![empty_class("Widget")]);
        let mut record = crate::model::prose::ProseRecord::new("T:Example.Widget");
        record.content.summary.push(paragraph("A widget."));
        let prose = ProseCollection::from_records(vec![record]);

        let tree = build(&facts, &prose).unwrap();
        let TypeNode::Class(class) = &tree.assembly.namespaces[0].types[0] else {
            panic!("expected a class node");
        };
        assert_eq!(class.prose.summary, vec![paragraph("A widget.")]);
    }

    #[test]
    fn differently_cased_record_still_matches() {
        let facts = assembly_with(vec![empty_class("Widget")]);
        let mut record = crate::model::prose::ProseRecord::new("t:example.widget");
        record.content.summary.push(paragraph("A widget."));
        let prose = ProseCollection::from_records(vec![record]);

        let tree = build(&facts, &prose).unwrap();
        let TypeNode::Class(class) = &tree.assembly.namespaces[0].types[0] else {
            panic!("expected a class node");
        };
        assert_eq!(class.prose.summary, vec![paragraph("A widget.")]);
    }

    #[test]
    fn unmatched_nodes_carry_empty_but_present_prose() {
        let facts = assembly_with(vec![empty_class("Widget")]);
        let tree = build(&facts, &empty_prose()).unwrap();
        let TypeNode::Class(class) = &tree.assembly.namespaces[0].types[0] else {
            panic!("expected a class node");
        };
        assert!(class.prose.is_empty());
    }

    #[test]
    fn recursive_constraint_reuses_the_parameter_reference() {
        // class Ordered<T> where T : IComparable<T>
        let mut ordered = empty_class("Ordered");
        ordered.generic_params.push(GenericParamFacts {
            name: "T".to_string(),
            variance: Variance::Invariant,
            reference_type_constraint: false,
            value_type_constraint: false,
            default_constructor_constraint: false,
            constraints: vec![TypeRefFacts::Instance {
                name: "IComparable".to_string(),
                namespace: "System".to_string(),
                generic_args: vec![TypeRefFacts::GenericParam {
                    name: "T".to_string(),
                    owner: "Example.Ordered`1".to_string(),
                }],
                declaring: None,
                assembly: assembly_identity(),
            }],
        });
        let facts = assembly_with(vec![ordered]);

        let tree = build(&facts, &empty_prose()).unwrap();
        let TypeNode::Class(class) = &tree.assembly.namespaces[0].types[0] else {
            panic!("expected a class node");
        };
        let param = &class.generic_params[0];
        let TypeRef::Instance { generic_args, .. } = tree.refs.get(param.constraints[0]) else {
            panic!("expected instance constraint");
        };
        assert_eq!(generic_args, &vec![param.reference]);
    }

    #[test]
    fn member_declaring_references_share_the_type_node() {
        let mut widget = empty_class("Widget");
        widget.members.push(MemberFacts::Field(FieldFacts {
            name: "count".to_string(),
            access: Access::Internal,
            field_type: int_ref(),
            attributes: Vec::new(),
        }));
        widget.members.push(MemberFacts::Method(MethodFacts {
            name: "Clear".to_string(),
            access: Access::Public,
            return_type: TypeRefFacts::Void,
            generic_params: Vec::new(),
            parameters: Vec::new(),
            attributes: Vec::new(),
        }));
        let facts = assembly_with(vec![widget]);

        let tree = build(&facts, &empty_prose()).unwrap();
        let TypeNode::Class(class) = &tree.assembly.namespaces[0].types[0] else {
            panic!("expected a class node");
        };
        assert_eq!(
            class.fields[0].declaring_type,
            class.methods[0].declaring_type
        );
    }

    #[test]
    fn method_prose_is_distributed_onto_parameters() {
        let mut widget = empty_class("Widget");
        widget.members.push(MemberFacts::Method(MethodFacts {
            name: "Rename".to_string(),
            access: Access::Public,
            return_type: TypeRefFacts::Void,
            generic_params: Vec::new(),
            parameters: vec![ParameterFacts {
                name: "name".to_string(),
                param_type: string_ref(),
                has_default: false,
                default: None,
                attributes: Vec::new(),
            }],
            attributes: Vec::new(),
        }));
        let facts = assembly_with(vec![widget]);

        let mut record =
            crate::model::prose::ProseRecord::new("M:Example.Widget.Rename(System.String)");
        record.content.summary.push(paragraph("Renames the widget."));
        record
            .content
            .params
            .push(crate::model::prose::NamedDoc {
                name: "name".to_string(),
                description: vec![paragraph("The new name.")],
            });
        let prose = ProseCollection::from_records(vec![record]);

        let tree = build(&facts, &prose).unwrap();
        let TypeNode::Class(class) = &tree.assembly.namespaces[0].types[0] else {
            panic!("expected a class node");
        };
        let method = &class.methods[0];
        assert_eq!(method.prose.summary, vec![paragraph("Renames the widget.")]);
        assert!(method.prose.params.is_empty());
        assert_eq!(
            method.parameters[0].description,
            vec![paragraph("The new name.")]
        );
    }

    #[test]
    fn default_flag_mismatch_is_an_integrity_error() {
        let mut widget = empty_class("Widget");
        widget.members.push(MemberFacts::Method(MethodFacts {
            name: "Resize".to_string(),
            access: Access::Public,
            return_type: TypeRefFacts::Void,
            generic_params: Vec::new(),
            parameters: vec![ParameterFacts {
                name: "scale".to_string(),
                param_type: int_ref(),
                has_default: true,
                default: None,
                attributes: Vec::new(),
            }],
            attributes: Vec::new(),
        }));
        let facts = assembly_with(vec![widget]);
        let err = build(&facts, &empty_prose()).unwrap_err();
        assert!(matches!(err, DocError::Integrity { .. }));
    }

    #[test]
    fn enum_with_methods_is_an_integrity_error() {
        let mut bad = empty_class("Mode");
        bad.kind = TypeKind::Enum;
        bad.members.push(MemberFacts::Method(MethodFacts {
            name: "Oops".to_string(),
            access: Access::Public,
            return_type: TypeRefFacts::Void,
            generic_params: Vec::new(),
            parameters: Vec::new(),
            attributes: Vec::new(),
        }));
        let facts = assembly_with(vec![bad]);
        let err = build(&facts, &empty_prose()).unwrap_err();
        assert!(matches!(err, DocError::Integrity { .. }));
    }

    #[test]
    fn delegate_without_signature_is_an_integrity_error() {
        let mut bad = empty_class("Callback");
        bad.kind = TypeKind::Delegate;
        let facts = assembly_with(vec![bad]);
        let err = build(&facts, &empty_prose()).unwrap_err();
        assert!(matches!(err, DocError::Integrity { .. }));
    }

    #[test]
    fn attribute_arguments_keep_their_declared_type() {
        // An enum-typed attribute argument arrives as its underlying i32
        // value but must keep the enum as its declared type.
        let mode_ref = TypeRefFacts::Instance {
            name: "Mode".to_string(),
            namespace: "Example".to_string(),
            generic_args: Vec::new(),
            declaring: None,
            assembly: assembly_identity(),
        };
        let mut widget = empty_class("Widget");
        widget.attributes.push(AttributeFacts {
            attribute_type: TypeRefFacts::Instance {
                name: "UsageAttribute".to_string(),
                namespace: "Example".to_string(),
                generic_args: Vec::new(),
                declaring: None,
                assembly: assembly_identity(),
            },
            positional: vec![crate::facts::AttributeArgFacts {
                name: "mode".to_string(),
                declared_type: mode_ref.clone(),
                value: ConstantValue::I32(2),
            }],
            named: Vec::new(),
        });
        let facts = assembly_with(vec![widget]);

        let tree = build(&facts, &empty_prose()).unwrap();
        let TypeNode::Class(class) = &tree.assembly.namespaces[0].types[0] else {
            panic!("expected a class node");
        };
        let arg = &class.attributes[0].positional[0];
        assert_eq!(arg.value, ConstantValue::I32(2));
        let TypeRef::Instance { name, .. } = tree.refs.get(arg.declared_type) else {
            panic!("expected instance declared type");
        };
        assert_eq!(name, "Mode");
    }

    #[test]
    fn constant_values_are_preserved() {
        let mut mode = empty_class("Mode");
        mode.kind = TypeKind::Enum;
        mode.members.push(MemberFacts::Constant(ConstantFacts {
            name: "Fast".to_string(),
            access: Access::Public,
            const_type: int_ref(),
            value: ConstantValue::I32(1),
            attributes: Vec::new(),
        }));
        let facts = assembly_with(vec![mode]);
        let tree = build(&facts, &empty_prose()).unwrap();
        let TypeNode::Enum(node) = &tree.assembly.namespaces[0].types[0] else {
            panic!("expected an enum node");
        };
        assert_eq!(node.constants[0].value, ConstantValue::I32(1));
    }
}
