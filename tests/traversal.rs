//! Traversal tests: the blocking and suspension-capable walks must invoke
//! identical callback sequences, and the async walk must stop cleanly at
//! cancellation.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use netdoc::facts::{
    Access, AssemblyFacts, AssemblyIdentity, ConstructorFacts, MemberFacts, MethodFacts,
    NamespaceFacts, ParameterFacts, PropertyFacts, TypeFacts, TypeKind, TypeRefFacts,
};
use netdoc::model::prose::{paragraph, NamedDoc, ProseRecord};
use netdoc::visitor::{walk, walk_async, AsyncDocVisitor, CallRecorder};
use netdoc::{build, DocError, DocTree, ProseCollection};

fn identity() -> AssemblyIdentity {
    AssemblyIdentity {
        name: "Example".to_string(),
        version: "1.0.0.0".to_string(),
        culture: "neutral".to_string(),
        public_key_token: "b77a5c561934e089".to_string(),
    }
}

fn string_ref() -> TypeRefFacts {
    TypeRefFacts::Instance {
        name: "String".to_string(),
        namespace: "System".to_string(),
        generic_args: Vec::new(),
        declaring: None,
        assembly: identity(),
    }
}

fn documented_tree() -> DocTree {
    let widget = TypeFacts {
        kind: TypeKind::Class,
        name: "Widget".to_string(),
        namespace: "Example".to_string(),
        access: Access::Public,
        declaring_type: None,
        generic_params: Vec::new(),
        attributes: Vec::new(),
        members: vec![
            MemberFacts::Constructor(ConstructorFacts {
                name: ".ctor".to_string(),
                access: Access::Public,
                parameters: vec![ParameterFacts {
                    name: "name".to_string(),
                    param_type: string_ref(),
                    has_default: false,
                    default: None,
                    attributes: Vec::new(),
                }],
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
            MemberFacts::Method(MethodFacts {
                name: "Clear".to_string(),
                access: Access::Public,
                return_type: TypeRefFacts::Void,
                generic_params: Vec::new(),
                parameters: Vec::new(),
                attributes: Vec::new(),
            }),
        ],
        delegate_signature: None,
    };
    let facts = AssemblyFacts {
        identity: identity(),
        namespaces: vec![NamespaceFacts {
            name: "Example".to_string(),
            types: vec![widget],
        }],
        dependencies: Vec::new(),
        attributes: Vec::new(),
    };

    let mut widget_record = ProseRecord::new("T:Example.Widget");
    widget_record.content.summary.push(paragraph("A widget."));
    widget_record
        .content
        .see_also
        .push("T:Example.Gadget".to_string());

    let mut ctor = ProseRecord::new("M:Example.Widget.#ctor(System.String)");
    ctor.content.params.push(NamedDoc {
        name: "name".to_string(),
        description: vec![paragraph("Display name.")],
    });

    let prose = ProseCollection::from_records(vec![widget_record, ctor]);
    build(&facts, &prose).unwrap()
}

#[tokio::test]
async fn both_modes_invoke_the_identical_callback_sequence() {
    let tree = documented_tree();

    let mut blocking = CallRecorder::new();
    walk(&tree, &mut blocking).unwrap();

    let mut suspending = CallRecorder::new();
    walk_async(&tree, &mut suspending, CancellationToken::new())
        .await
        .unwrap();

    assert!(!blocking.calls().is_empty());
    assert_eq!(blocking.calls(), suspending.calls());
}

#[test]
fn summary_fires_between_type_entry_and_members() {
    let tree = documented_tree();
    let mut recorder = CallRecorder::new();
    walk(&tree, &mut recorder).unwrap();

    let calls = recorder.into_calls();
    assert_eq!(
        &calls[..8],
        &[
            "assembly Example",
            "namespace Example",
            "class Widget",
            "begin summary",
            "begin paragraph",
            "text A widget.",
            "end paragraph",
            "end summary",
        ]
    );
    let ctor = calls.iter().position(|c| c == "constructor .ctor").unwrap();
    assert!(calls[..ctor].contains(&"end see_also".to_string()));
}

#[test]
fn parameter_description_follows_its_parameter_entry() {
    let tree = documented_tree();
    let mut recorder = CallRecorder::new();
    walk(&tree, &mut recorder).unwrap();

    let calls = recorder.into_calls();
    let param = calls.iter().position(|c| c == "parameter name").unwrap();
    assert_eq!(calls[param + 1], "begin summary");
    assert_eq!(calls[param + 3], "text Display name.");
}

/// Counts callbacks and trips the shared token partway through.
struct TrippingVisitor {
    calls: usize,
    trip_at: usize,
    token: CancellationToken,
}

#[async_trait]
impl AsyncDocVisitor for TrippingVisitor {
    async fn enter_namespace(
        &mut self,
        _node: &netdoc::model::NamespaceNode,
    ) -> netdoc::Result<()> {
        self.calls += 1;
        if self.calls == self.trip_at {
            self.token.cancel();
        }
        Ok(())
    }
    async fn enter_class(&mut self, _node: &netdoc::model::ClassNode) -> netdoc::Result<()> {
        self.calls += 1;
        if self.calls == self.trip_at {
            self.token.cancel();
        }
        Ok(())
    }
    async fn enter_assembly(&mut self, _node: &netdoc::model::AssemblyNode) -> netdoc::Result<()> {
        self.calls += 1;
        if self.calls == self.trip_at {
            self.token.cancel();
        }
        Ok(())
    }
}

#[tokio::test]
async fn cancellation_stops_the_walk_between_callbacks() {
    let tree = documented_tree();
    let token = CancellationToken::new();
    let mut visitor = TrippingVisitor {
        calls: 0,
        trip_at: 2,
        token: token.clone(),
    };

    let err = walk_async(&tree, &mut visitor, token).await.unwrap_err();
    assert!(matches!(err, DocError::Cancelled));
    // The tripping callback itself completed; nothing ran after it.
    assert_eq!(visitor.calls, 2);
}

#[tokio::test]
async fn async_callback_error_propagates() {
    struct Failing;
    #[async_trait]
    impl AsyncDocVisitor for Failing {
        async fn begin_summary(&mut self) -> netdoc::Result<()> {
            Err(DocError::visitor("sink closed"))
        }
    }

    let tree = documented_tree();
    let err = walk_async(&tree, &mut Failing, CancellationToken::new())
        .await
        .unwrap_err();
    assert!(matches!(err, DocError::Visitor(_)));
}
