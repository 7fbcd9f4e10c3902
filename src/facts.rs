//! Reflection-provider fact surface.
//!
//! These types are the read-only input contract of the crate: a snapshot of
//! structural facts about one compiled assembly, produced by whatever reads
//! the binary metadata (out of scope here). The builder walks these facts in
//! declaration order and never mutates them.
//!
//! All ordered collections are plain `Vec`s; a provider that has nothing to
//! report supplies an empty vector, never an absent one. The only optional
//! fields are those that are genuinely optional in the metadata model
//! (declaring types, parameter default values).

use serde::{Deserialize, Serialize};

/// Identity of an assembly or an assembly dependency.
///
/// The public-key token is a lowercase-or-uppercase hex string; equality
/// compares it case-insensitively, matching how the runtime compares
/// assembly identities.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct AssemblyIdentity {
    pub name: String,
    pub version: String,
    pub culture: String,
    pub public_key_token: String,
}

impl PartialEq for AssemblyIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.version == other.version
            && self.culture == other.culture
            && self
                .public_key_token
                .eq_ignore_ascii_case(&other.public_key_token)
    }
}

/// Facts about one assembly: the root of the fact snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssemblyFacts {
    pub identity: AssemblyIdentity,
    /// Namespaces in declaration order.
    pub namespaces: Vec<NamespaceFacts>,
    /// Identities of referenced assemblies, in declaration order.
    pub dependencies: Vec<AssemblyIdentity>,
    pub attributes: Vec<AttributeFacts>,
}

/// Facts about one namespace.
///
/// `types` lists every type declared in the namespace, including nested
/// types (which carry a `declaring_type` back-reference). Top-level types
/// have `declaring_type == None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamespaceFacts {
    pub name: String,
    pub types: Vec<TypeFacts>,
}

/// The closed set of type kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Enum,
    Delegate,
    Interface,
    Class,
    Struct,
}

/// Access level surfaced in documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Access {
    Public,
    /// `internal` in C# terms: visible within the assembly only.
    Internal,
}

/// Facts about one type declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeFacts {
    pub kind: TypeKind,
    /// Bare metadata name without arity suffix (`List`, not "List\`1");
    /// arity annotations are derived from `generic_params`.
    pub name: String,
    pub namespace: String,
    pub access: Access,
    /// Reference to the enclosing type for nested types; `None` for
    /// top-level types.
    pub declaring_type: Option<TypeRefFacts>,
    pub generic_params: Vec<GenericParamFacts>,
    pub attributes: Vec<AttributeFacts>,
    /// Members in declaration order. Which member kinds are legal depends
    /// on `kind`; the builder rejects inconsistent combinations.
    pub members: Vec<MemberFacts>,
    /// Delegate invocation signature; present iff `kind == Delegate`.
    pub delegate_signature: Option<DelegateSignatureFacts>,
}

/// Invocation signature of a delegate type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelegateSignatureFacts {
    pub return_type: TypeRefFacts,
    pub parameters: Vec<ParameterFacts>,
}

/// Variance of a generic parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variance {
    Invariant,
    /// `out` in C#.
    Covariant,
    /// `in` in C#.
    Contravariant,
}

/// Facts about one generic parameter declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericParamFacts {
    pub name: String,
    pub variance: Variance,
    /// `where T : class`.
    pub reference_type_constraint: bool,
    /// `where T : struct` (non-nullable value type).
    pub value_type_constraint: bool,
    /// `where T : new()`.
    pub default_constructor_constraint: bool,
    /// Type constraints. These may reference the parameter's own declaring
    /// generic context, including the parameter itself.
    pub constraints: Vec<TypeRefFacts>,
}

/// A reference to a type, as reported by the provider.
///
/// This is the polymorphic input mirrored by the resolver's arena-resident
/// [`crate::model::TypeRef`]. Fact references form finite trees; cycles
/// arise only indirectly, through generic-parameter constraints, and are
/// handled by the resolver's early registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "variant")]
pub enum TypeRefFacts {
    /// A concrete (possibly constructed generic, possibly nested) type.
    Instance {
        /// Bare metadata name without arity suffix.
        name: String,
        namespace: String,
        generic_args: Vec<TypeRefFacts>,
        declaring: Option<Box<TypeRefFacts>>,
        assembly: AssemblyIdentity,
    },
    /// A reference to a generic parameter in scope.
    GenericParam {
        name: String,
        /// Identity of the declaring generic context: the arity-annotated
        /// fully qualified type name (see [`crate::identity::generic_owner`])
        /// or the method owner id for method parameters.
        owner: String,
    },
    /// The `void` pseudo-type. Legal only as a return type.
    Void,
    /// `dynamic`: `System.Object` at runtime, kept distinct in docs.
    Dynamic,
}

/// The closed set of constant kinds that can appear as member constants,
/// parameter defaults, and attribute argument values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum ConstantValue {
    Bool(bool),
    Char(char),
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
    String(String),
    Null,
}

/// Facts about one member, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "member")]
pub enum MemberFacts {
    Constant(ConstantFacts),
    Field(FieldFacts),
    Constructor(ConstructorFacts),
    Event(EventFacts),
    Property(PropertyFacts),
    Method(MethodFacts),
}

impl MemberFacts {
    /// Member name as declared.
    pub fn name(&self) -> &str {
        match self {
            MemberFacts::Constant(m) => &m.name,
            MemberFacts::Field(m) => &m.name,
            MemberFacts::Constructor(m) => &m.name,
            MemberFacts::Event(m) => &m.name,
            MemberFacts::Property(m) => &m.name,
            MemberFacts::Method(m) => &m.name,
        }
    }
}

/// A `const` (or enum member) with its compile-time value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstantFacts {
    pub name: String,
    pub access: Access,
    pub const_type: TypeRefFacts,
    pub value: ConstantValue,
    pub attributes: Vec<AttributeFacts>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldFacts {
    pub name: String,
    pub access: Access,
    pub field_type: TypeRefFacts,
    pub attributes: Vec<AttributeFacts>,
}

/// Constructor facts. `name` is the metadata name (`.ctor`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructorFacts {
    pub name: String,
    pub access: Access,
    pub parameters: Vec<ParameterFacts>,
    pub attributes: Vec<AttributeFacts>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventFacts {
    pub name: String,
    pub access: Access,
    pub handler_type: TypeRefFacts,
    pub attributes: Vec<AttributeFacts>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyFacts {
    pub name: String,
    pub access: Access,
    pub property_type: TypeRefFacts,
    pub has_getter: bool,
    pub has_setter: bool,
    pub attributes: Vec<AttributeFacts>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodFacts {
    pub name: String,
    pub access: Access,
    pub return_type: TypeRefFacts,
    pub generic_params: Vec<GenericParamFacts>,
    pub parameters: Vec<ParameterFacts>,
    pub attributes: Vec<AttributeFacts>,
}

/// Facts about one parameter.
///
/// `has_default` and `default` travel separately because providers report
/// them separately; the builder treats a mismatch between the two as an
/// integrity error rather than guessing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterFacts {
    pub name: String,
    pub param_type: TypeRefFacts,
    pub has_default: bool,
    pub default: Option<ConstantValue>,
    pub attributes: Vec<AttributeFacts>,
}

/// One applied attribute with its arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeFacts {
    pub attribute_type: TypeRefFacts,
    pub positional: Vec<AttributeArgFacts>,
    pub named: Vec<AttributeArgFacts>,
}

/// One attribute argument.
///
/// `declared_type` is the type of the constructor parameter or named
/// property as declared, not the runtime type of the boxed value. The two
/// diverge for enum-typed arguments, which providers surface as their
/// underlying integral value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeArgFacts {
    /// Constructor parameter name for positional arguments, property or
    /// field name for named arguments.
    pub name: String,
    pub declared_type: TypeRefFacts,
    pub value: ConstantValue,
}
