//! End-to-end construction tests: fact snapshot plus prose records in,
//! fully resolved documentation tree out.

use netdoc::facts::{
    Access, AssemblyFacts, AssemblyIdentity, ConstantFacts, ConstantValue, ConstructorFacts,
    DelegateSignatureFacts, EventFacts, GenericParamFacts, MemberFacts, MethodFacts,
    NamespaceFacts, ParameterFacts, PropertyFacts, TypeFacts, TypeKind, TypeRefFacts, Variance,
};
use netdoc::model::prose::{paragraph, NamedDoc, ProseRecord};
use netdoc::model::{TypeNode, TypeRef};
use netdoc::{build, DocTree, ProseCollection};

fn identity() -> AssemblyIdentity {
    AssemblyIdentity {
        name: "Example".to_string(),
        version: "2.1.0.0".to_string(),
        culture: "neutral".to_string(),
        public_key_token: "b77a5c561934e089".to_string(),
    }
}

fn instance(namespace: &str, name: &str) -> TypeRefFacts {
    TypeRefFacts::Instance {
        name: name.to_string(),
        namespace: namespace.to_string(),
        generic_args: Vec::new(),
        declaring: None,
        assembly: identity(),
    }
}

fn string_ref() -> TypeRefFacts {
    instance("System", "String")
}

fn plain_param(name: &str, param_type: TypeRefFacts) -> ParameterFacts {
    ParameterFacts {
        name: name.to_string(),
        param_type,
        has_default: false,
        default: None,
        attributes: Vec::new(),
    }
}

/// One namespace exercising every type kind: an enum, a delegate, an
/// interface, and a class with each member kind.
fn fixture_assembly() -> AssemblyFacts {
    let mode = TypeFacts {
        kind: TypeKind::Enum,
        name: "Mode".to_string(),
        namespace: "Example.Core".to_string(),
        access: Access::Public,
        declaring_type: None,
        generic_params: Vec::new(),
        attributes: Vec::new(),
        members: vec![MemberFacts::Constant(ConstantFacts {
            name: "Fast".to_string(),
            access: Access::Public,
            const_type: instance("System", "Int32"),
            value: ConstantValue::I32(1),
            attributes: Vec::new(),
        })],
        delegate_signature: None,
    };

    let renamer = TypeFacts {
        kind: TypeKind::Delegate,
        name: "Renamer".to_string(),
        namespace: "Example.Core".to_string(),
        access: Access::Public,
        declaring_type: None,
        generic_params: Vec::new(),
        attributes: Vec::new(),
        members: Vec::new(),
        delegate_signature: Some(DelegateSignatureFacts {
            return_type: TypeRefFacts::Void,
            parameters: vec![plain_param("name", string_ref())],
        }),
    };

    let store = TypeFacts {
        kind: TypeKind::Interface,
        name: "IStore".to_string(),
        namespace: "Example.Core".to_string(),
        access: Access::Public,
        declaring_type: None,
        generic_params: Vec::new(),
        attributes: Vec::new(),
        members: vec![MemberFacts::Method(MethodFacts {
            name: "Save".to_string(),
            access: Access::Public,
            return_type: TypeRefFacts::Void,
            generic_params: Vec::new(),
            parameters: vec![plain_param("widget", instance("Example.Core", "Widget"))],
            attributes: Vec::new(),
        })],
        delegate_signature: None,
    };

    let widget = TypeFacts {
        kind: TypeKind::Class,
        name: "Widget".to_string(),
        namespace: "Example.Core".to_string(),
        access: Access::Public,
        declaring_type: None,
        generic_params: Vec::new(),
        attributes: Vec::new(),
        members: vec![
            MemberFacts::Constructor(ConstructorFacts {
                name: ".ctor".to_string(),
                access: Access::Public,
                parameters: vec![plain_param("name", string_ref())],
                attributes: Vec::new(),
            }),
            MemberFacts::Property(PropertyFacts {
                name: "Name".to_string(),
                access: Access::Public,
                property_type: string_ref(),
                has_getter: true,
                has_setter: false,
                attributes: Vec::new(),
            }),
            MemberFacts::Event(EventFacts {
                name: "Changed".to_string(),
                access: Access::Public,
                handler_type: instance("System", "EventHandler"),
                attributes: Vec::new(),
            }),
            MemberFacts::Method(MethodFacts {
                name: "Tag".to_string(),
                access: Access::Public,
                return_type: TypeRefFacts::Void,
                generic_params: vec![GenericParamFacts {
                    name: "T".to_string(),
                    variance: Variance::Invariant,
                    reference_type_constraint: false,
                    value_type_constraint: false,
                    default_constructor_constraint: false,
                    constraints: Vec::new(),
                }],
                parameters: vec![plain_param(
                    "value",
                    TypeRefFacts::GenericParam {
                        name: "T".to_string(),
                        owner: "Example.Core.Widget.Tag``1".to_string(),
                    },
                )],
                attributes: Vec::new(),
            }),
        ],
        delegate_signature: None,
    };

    AssemblyFacts {
        identity: identity(),
        namespaces: vec![NamespaceFacts {
            name: "Example.Core".to_string(),
            types: vec![mode, renamer, store, widget],
        }],
        dependencies: vec![AssemblyIdentity {
            name: "System.Runtime".to_string(),
            version: "8.0.0.0".to_string(),
            culture: "neutral".to_string(),
            public_key_token: "b03f5f7f11d50a3a".to_string(),
        }],
        attributes: Vec::new(),
    }
}

fn fixture_prose() -> ProseCollection {
    let mut widget = ProseRecord::new("T:Example.Core.Widget");
    widget.content.summary.push(paragraph("A widget."));

    let mut ctor = ProseRecord::new("M:Example.Core.Widget.#ctor(System.String)");
    ctor.content.summary.push(paragraph("Creates a widget."));
    ctor.content.params.push(NamedDoc {
        name: "name".to_string(),
        description: vec![paragraph("Display name.")],
    });

    let mut name_prop = ProseRecord::new("P:Example.Core.Widget.Name");
    name_prop.content.value.push(paragraph("The display name."));

    let mut tag = ProseRecord::new("M:Example.Core.Widget.Tag``1(``0)");
    tag.content.summary.push(paragraph("Tags the widget."));
    tag.content.type_params.push(NamedDoc {
        name: "T".to_string(),
        description: vec![paragraph("Tag payload type.")],
    });

    let mut fast = ProseRecord::new("F:Example.Core.Mode.Fast");
    fast.content.summary.push(paragraph("Prefer speed."));

    ProseCollection::from_records(vec![widget, ctor, name_prop, tag, fast])
}

fn widget_of(tree: &DocTree) -> &netdoc::model::ClassNode {
    let TypeNode::Class(class) = &tree.assembly.namespaces[0].types[3] else {
        panic!("expected Widget at index 3");
    };
    class
}

#[test]
fn every_type_kind_builds() {
    let tree = build(&fixture_assembly(), &fixture_prose()).unwrap();
    let types = &tree.assembly.namespaces[0].types;
    assert!(matches!(types[0], TypeNode::Enum(_)));
    assert!(matches!(types[1], TypeNode::Delegate(_)));
    assert!(matches!(types[2], TypeNode::Interface(_)));
    assert!(matches!(types[3], TypeNode::Class(_)));
}

#[test]
fn prose_attaches_across_member_kinds() {
    let tree = build(&fixture_assembly(), &fixture_prose()).unwrap();
    let widget = widget_of(&tree);

    assert_eq!(widget.prose.summary, vec![paragraph("A widget.")]);
    assert_eq!(
        widget.constructors[0].prose.summary,
        vec![paragraph("Creates a widget.")]
    );
    assert_eq!(
        widget.constructors[0].parameters[0].description,
        vec![paragraph("Display name.")]
    );
    assert_eq!(
        widget.properties[0].prose.value,
        vec![paragraph("The display name.")]
    );

    let TypeNode::Enum(mode) = &tree.assembly.namespaces[0].types[0] else {
        panic!("expected Mode enum");
    };
    assert_eq!(
        mode.constants[0].prose.summary,
        vec![paragraph("Prefer speed.")]
    );
}

#[test]
fn generic_method_record_matches_by_arity_signature() {
    let tree = build(&fixture_assembly(), &fixture_prose()).unwrap();
    let method = &widget_of(&tree).methods[0];
    assert_eq!(method.prose.summary, vec![paragraph("Tags the widget.")]);
    // The T description moved from the record onto the parameter node.
    assert!(method.prose.type_params.is_empty());
    assert_eq!(
        method.generic_params[0].description,
        vec![paragraph("Tag payload type.")]
    );
    // The value parameter's type is the method's own generic parameter.
    assert_eq!(
        method.parameters[0].param_type,
        method.generic_params[0].reference
    );
}

#[test]
fn structurally_identical_references_share_one_arena_node() {
    let tree = build(&fixture_assembly(), &fixture_prose()).unwrap();
    let widget = widget_of(&tree);
    let TypeNode::Delegate(renamer) = &tree.assembly.namespaces[0].types[1] else {
        panic!("expected Renamer delegate");
    };
    // System.String appears as a ctor parameter, a property type, and a
    // delegate parameter; all three resolve to the same id.
    let ctor_param = widget.constructors[0].parameters[0].param_type;
    assert_eq!(ctor_param, widget.properties[0].property_type);
    assert_eq!(ctor_param, renamer.parameters[0].param_type);
}

#[test]
fn interface_method_parameter_references_the_class_node() {
    let tree = build(&fixture_assembly(), &fixture_prose()).unwrap();
    let TypeNode::Interface(store) = &tree.assembly.namespaces[0].types[2] else {
        panic!("expected IStore interface");
    };
    let param_ref = store.methods[0].parameters[0].param_type;
    let TypeRef::Instance { name, namespace, .. } = tree.refs.get(param_ref) else {
        panic!("expected instance reference");
    };
    assert_eq!(name, "Widget");
    assert_eq!(namespace, "Example.Core");
}

#[test]
fn built_tree_round_trips_through_serde() {
    let tree = build(&fixture_assembly(), &fixture_prose()).unwrap();
    let json = serde_json::to_string(&tree).unwrap();
    let back: DocTree = serde_json::from_str(&json).unwrap();
    assert_eq!(tree, back);
}

#[test]
fn assembly_metadata_is_preserved() {
    let tree = build(&fixture_assembly(), &fixture_prose()).unwrap();
    assert_eq!(tree.assembly.name, "Example");
    assert_eq!(tree.assembly.identity.version, "2.1.0.0");
    assert_eq!(tree.assembly.dependencies.len(), 1);
    assert_eq!(tree.assembly.dependencies[0].name, "System.Runtime");
}

#[test]
fn absent_record_list_is_rejected_at_the_boundary() {
    let err = ProseCollection::new(None).unwrap_err();
    assert_eq!(err.to_string(), "missing required input: records");
}

#[test]
fn null_record_entry_is_rejected_at_the_boundary() {
    let records = vec![Some(ProseRecord::new("T:Example.Core.Widget")), None];
    let err = ProseCollection::new(Some(records)).unwrap_err();
    assert_eq!(err.to_string(), "records must not contain null entries");
}
