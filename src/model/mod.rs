//! Structural documentation node model.
//!
//! The output of a build is a [`DocTree`]: one [`AssemblyNode`] owning its
//! namespaces, types, and members, plus the [`RefArena`] holding every
//! symbol reference the tree mentions. The tree is built once from an
//! immutable fact snapshot, then read-only for the rest of its lifetime;
//! it is `Send + Sync` and may be traversed concurrently by any number of
//! independent visitors.
//!
//! Back-references (a member's declaring type, a nested type's enclosing
//! type) are [`TypeRefId`]s into the arena rather than owning links, so the
//! ownership graph stays a strict tree while lookups stay cheap. Reference
//! identity is meaningful: each distinct symbol identity maps to exactly
//! one id per build.

pub mod prose;

use serde::{Deserialize, Serialize};

use crate::facts::{Access, AssemblyIdentity, ConstantValue, TypeKind, Variance};
use prose::{ProseBlock, ProseContent};

// ============================================================================
// Reference arena
// ============================================================================

/// Index of a [`TypeRef`] in a tree's [`RefArena`].
///
/// Ids are only meaningful within the tree that produced them. Id equality
/// is reference equality: two equal ids denote the same symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TypeRefId(pub u32);

impl std::fmt::Display for TypeRefId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ref_{}", self.0)
    }
}

/// A resolved symbol reference: a lightweight pointer-like node identifying
/// a type without re-describing its full definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "variant")]
pub enum TypeRef {
    /// A concrete (possibly constructed, possibly nested) type.
    Instance {
        name: String,
        namespace: String,
        generic_args: Vec<TypeRefId>,
        declaring: Option<TypeRefId>,
        assembly: AssemblyIdentity,
    },
    /// A generic parameter in scope, identified by name within its owner.
    GenericParam { name: String },
    /// The `void` pseudo-type.
    Void,
    /// `dynamic`.
    Dynamic,
}

/// Arena of every [`TypeRef`] one tree mentions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RefArena {
    refs: Vec<TypeRef>,
}

impl RefArena {
    /// Append a node, returning its id.
    pub(crate) fn push(&mut self, node: TypeRef) -> TypeRefId {
        let id = TypeRefId(self.refs.len() as u32);
        self.refs.push(node);
        id
    }

    /// Replace the node registered under `id`. Used by the resolver to
    /// fill a reference after early registration.
    pub(crate) fn fill(&mut self, id: TypeRefId, node: TypeRef) {
        self.refs[id.0 as usize] = node;
    }

    /// Look up a reference node.
    pub fn get(&self, id: TypeRefId) -> &TypeRef {
        &self.refs[id.0 as usize]
    }

    /// Number of distinct registered references.
    pub fn len(&self) -> usize {
        self.refs.len()
    }

    /// True when no references have been registered.
    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }
}

// ============================================================================
// Structural nodes
// ============================================================================

/// The immutable documentation tree: the sole build output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocTree {
    pub assembly: AssemblyNode,
    pub refs: RefArena,
}

/// The root node: one documented assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssemblyNode {
    pub name: String,
    pub identity: AssemblyIdentity,
    pub namespaces: Vec<NamespaceNode>,
    pub dependencies: Vec<AssemblyIdentity>,
    pub attributes: Vec<AttributeNode>,
}

/// One namespace and its types, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamespaceNode {
    pub name: String,
    pub types: Vec<TypeNode>,
}

/// The closed taxonomy of type nodes. Every consumer matches exhaustively;
/// adding a variant is a breaking change by design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum TypeNode {
    Enum(EnumNode),
    Delegate(DelegateNode),
    Interface(InterfaceNode),
    Class(ClassNode),
    Struct(StructNode),
}

impl TypeNode {
    /// The node's declared name.
    pub fn name(&self) -> &str {
        match self {
            TypeNode::Enum(n) => &n.name,
            TypeNode::Delegate(n) => &n.name,
            TypeNode::Interface(n) => &n.name,
            TypeNode::Class(n) => &n.name,
            TypeNode::Struct(n) => &n.name,
        }
    }

    /// The kind tag for this node.
    pub fn kind(&self) -> TypeKind {
        match self {
            TypeNode::Enum(_) => TypeKind::Enum,
            TypeNode::Delegate(_) => TypeKind::Delegate,
            TypeNode::Interface(_) => TypeKind::Interface,
            TypeNode::Class(_) => TypeKind::Class,
            TypeNode::Struct(_) => TypeKind::Struct,
        }
    }

    /// Declaring-type back-reference; `None` for top-level types.
    pub fn declaring_type(&self) -> Option<TypeRefId> {
        match self {
            TypeNode::Enum(n) => n.declaring_type,
            TypeNode::Delegate(n) => n.declaring_type,
            TypeNode::Interface(n) => n.declaring_type,
            TypeNode::Class(n) => n.declaring_type,
            TypeNode::Struct(n) => n.declaring_type,
        }
    }
}

/// An enum type: constants only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumNode {
    pub name: String,
    pub namespace: String,
    pub access: Access,
    pub declaring_type: Option<TypeRefId>,
    pub attributes: Vec<AttributeNode>,
    pub constants: Vec<ConstantNode>,
    pub prose: ProseContent,
}

/// A delegate type: an invocation signature with generic parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelegateNode {
    pub name: String,
    pub namespace: String,
    pub access: Access,
    pub declaring_type: Option<TypeRefId>,
    pub generic_params: Vec<GenericParameterNode>,
    pub attributes: Vec<AttributeNode>,
    pub return_type: TypeRefId,
    pub parameters: Vec<ParameterNode>,
    pub prose: ProseContent,
}

/// An interface type: events, properties, and methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceNode {
    pub name: String,
    pub namespace: String,
    pub access: Access,
    pub declaring_type: Option<TypeRefId>,
    pub generic_params: Vec<GenericParameterNode>,
    pub attributes: Vec<AttributeNode>,
    pub events: Vec<EventNode>,
    pub properties: Vec<PropertyNode>,
    pub methods: Vec<MethodNode>,
    pub prose: ProseContent,
}

/// A class type: the full member surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassNode {
    pub name: String,
    pub namespace: String,
    pub access: Access,
    pub declaring_type: Option<TypeRefId>,
    pub generic_params: Vec<GenericParameterNode>,
    pub attributes: Vec<AttributeNode>,
    pub constants: Vec<ConstantNode>,
    pub fields: Vec<FieldNode>,
    pub constructors: Vec<ConstructorNode>,
    pub events: Vec<EventNode>,
    pub properties: Vec<PropertyNode>,
    pub methods: Vec<MethodNode>,
    pub prose: ProseContent,
}

/// A struct type: same member surface as a class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructNode {
    pub name: String,
    pub namespace: String,
    pub access: Access,
    pub declaring_type: Option<TypeRefId>,
    pub generic_params: Vec<GenericParameterNode>,
    pub attributes: Vec<AttributeNode>,
    pub constants: Vec<ConstantNode>,
    pub fields: Vec<FieldNode>,
    pub constructors: Vec<ConstructorNode>,
    pub events: Vec<EventNode>,
    pub properties: Vec<PropertyNode>,
    pub methods: Vec<MethodNode>,
    pub prose: ProseContent,
}

/// One generic parameter declaration.
///
/// `reference` is the parameter's own entry in the arena; a constraint that
/// mentions the parameter (directly or through a constructed generic)
/// resolves to this same id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericParameterNode {
    pub name: String,
    pub variance: Variance,
    pub reference_type_constraint: bool,
    pub value_type_constraint: bool,
    pub default_constructor_constraint: bool,
    pub constraints: Vec<TypeRefId>,
    pub reference: TypeRefId,
    /// Description prose, redistributed from the owner's record.
    pub description: Vec<ProseBlock>,
}

/// A constant member (including enum members).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstantNode {
    pub name: String,
    pub access: Access,
    pub declaring_type: TypeRefId,
    pub attributes: Vec<AttributeNode>,
    pub const_type: TypeRefId,
    pub value: ConstantValue,
    pub prose: ProseContent,
}

/// A field member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldNode {
    pub name: String,
    pub access: Access,
    pub declaring_type: TypeRefId,
    pub attributes: Vec<AttributeNode>,
    pub field_type: TypeRefId,
    pub prose: ProseContent,
}

/// A constructor member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructorNode {
    pub name: String,
    pub access: Access,
    pub declaring_type: TypeRefId,
    pub attributes: Vec<AttributeNode>,
    pub parameters: Vec<ParameterNode>,
    pub prose: ProseContent,
}

/// An event member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventNode {
    pub name: String,
    pub access: Access,
    pub declaring_type: TypeRefId,
    pub attributes: Vec<AttributeNode>,
    pub handler_type: TypeRefId,
    pub prose: ProseContent,
}

/// A property member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyNode {
    pub name: String,
    pub access: Access,
    pub declaring_type: TypeRefId,
    pub attributes: Vec<AttributeNode>,
    pub property_type: TypeRefId,
    pub has_getter: bool,
    pub has_setter: bool,
    pub prose: ProseContent,
}

/// A method member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodNode {
    pub name: String,
    pub access: Access,
    pub declaring_type: TypeRefId,
    pub attributes: Vec<AttributeNode>,
    pub return_type: TypeRefId,
    pub generic_params: Vec<GenericParameterNode>,
    pub parameters: Vec<ParameterNode>,
    pub prose: ProseContent,
}

/// One parameter of a constructor, method, or delegate signature.
///
/// A present `default` means the parameter declares a default value; the
/// builder guarantees this agrees with the provider's default-value flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterNode {
    pub name: String,
    pub param_type: TypeRefId,
    pub default: Option<ConstantValue>,
    pub attributes: Vec<AttributeNode>,
    /// Description prose, redistributed from the owner's record.
    pub description: Vec<ProseBlock>,
}

/// One applied attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeNode {
    pub attribute_type: TypeRefId,
    pub positional: Vec<AttributeArgument>,
    pub named: Vec<AttributeArgument>,
}

/// One attribute argument, carrying its declared (not boxed) type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeArgument {
    pub name: String,
    pub declared_type: TypeRefId,
    pub value: ConstantValue,
}
