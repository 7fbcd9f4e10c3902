//! Canonical symbol names.
//!
//! A canonical name is the kind-prefixed, fully qualified string identity
//! used to join externally authored prose to a structural node. The format
//! is the .NET documentation-comment ID convention, bit-exact:
//!
//! - `T:` types, `F:` fields and constants, `M:` methods and constructors,
//!   `P:` properties, `E:` events.
//! - Generic types carry a backtick arity suffix per nesting level
//!   ("T:System.Collections.Generic.List\`1", "T:Ns.Outer\`1.Inner").
//! - Constructors are named `#ctor`; dots in member names (explicit
//!   interface implementations) become `#`.
//! - Method parameter lists are comma-separated full type names in
//!   parentheses, omitted entirely for empty lists. Generic parameter
//!   references appear positionally: \`n for type parameters, \`\`n for
//!   method parameters. Constructed generic arguments use braces:
//!   "List{System.String}".

use crate::error::{DocError, Result};
use crate::facts::{
    ConstructorFacts, EventFacts, MethodFacts, ParameterFacts, PropertyFacts, TypeFacts,
    TypeRefFacts,
};

/// The arity-annotated fully qualified name of a generic context, used as
/// the `owner` field of generic-parameter references.
///
/// `generic_owner("Example", "Node", 1)` is "Example.Node\`1".
pub fn generic_owner(namespace: &str, name: &str, arity: usize) -> String {
    let mut owner = String::new();
    if !namespace.is_empty() {
        owner.push_str(namespace);
        owner.push('.');
    }
    owner.push_str(name);
    if arity > 0 {
        owner.push('`');
        owner.push_str(&arity.to_string());
    }
    owner
}

/// Owner id for a method's own generic parameters.
pub fn method_owner(type_doc_id: &str, method: &MethodFacts) -> String {
    let mut owner = format!("{}.{}", type_doc_id, method.name);
    if !method.generic_params.is_empty() {
        owner.push_str("``");
        owner.push_str(&method.generic_params.len().to_string());
    }
    owner
}

/// Positional context for signature rendering: the names of the generic
/// parameters in scope, declaring type first, then method.
#[derive(Debug, Default, Clone, Copy)]
pub struct SigContext<'a> {
    pub type_params: &'a [String],
    pub method_params: &'a [String],
}

/// The doc id of a type declaration (no `T:` prefix): namespace, nesting
/// chain, and arity suffixes.
pub fn type_doc_id(facts: &TypeFacts) -> Result<String> {
    let own = append_arity(&facts.name, facts.generic_params.len());
    match &facts.declaring_type {
        None => Ok(qualify(&facts.namespace, &own)),
        Some(declaring) => {
            let chain = instance_doc_id(declaring)?;
            Ok(format!("{chain}.{own}"))
        }
    }
}

/// Canonical name of a type declaration.
pub fn type_canonical(facts: &TypeFacts) -> Result<String> {
    Ok(format!("T:{}", type_doc_id(facts)?))
}

/// Canonical name of a field or constant.
pub fn field_canonical(type_doc_id: &str, name: &str) -> String {
    format!("F:{}.{}", type_doc_id, escape_member_name(name))
}

/// Canonical name of an event.
pub fn event_canonical(type_doc_id: &str, facts: &EventFacts) -> String {
    format!("E:{}.{}", type_doc_id, escape_member_name(&facts.name))
}

/// Canonical name of a property.
pub fn property_canonical(type_doc_id: &str, facts: &PropertyFacts) -> String {
    format!("P:{}.{}", type_doc_id, escape_member_name(&facts.name))
}

/// Canonical name of a constructor: `M:{type}.#ctor(params)`.
pub fn constructor_canonical(
    type_doc_id: &str,
    facts: &ConstructorFacts,
    ctx: SigContext<'_>,
) -> Result<String> {
    let mut id = format!("M:{type_doc_id}.#ctor");
    id.push_str(&parameter_list(&facts.parameters, ctx)?);
    Ok(id)
}

/// Canonical name of a method, with method-generic arity and parameters.
pub fn method_canonical(
    type_doc_id: &str,
    facts: &MethodFacts,
    ctx: SigContext<'_>,
) -> Result<String> {
    let mut id = format!("M:{}.{}", type_doc_id, escape_member_name(&facts.name));
    if !facts.generic_params.is_empty() {
        id.push_str("``");
        id.push_str(&facts.generic_params.len().to_string());
    }
    id.push_str(&parameter_list(&facts.parameters, ctx)?);
    Ok(id)
}

/// Render a parameter list; empty lists render as nothing at all.
fn parameter_list(parameters: &[ParameterFacts], ctx: SigContext<'_>) -> Result<String> {
    if parameters.is_empty() {
        return Ok(String::new());
    }
    let rendered: Vec<String> = parameters
        .iter()
        .map(|p| param_signature(&p.param_type, ctx))
        .collect::<Result<_>>()?;
    Ok(format!("({})", rendered.join(",")))
}

/// The signature form of a type reference inside a parameter list.
pub fn param_signature(r: &TypeRefFacts, ctx: SigContext<'_>) -> Result<String> {
    match r {
        TypeRefFacts::Instance {
            name,
            namespace,
            generic_args,
            declaring,
            ..
        } => {
            let mut sig = match declaring {
                Some(declaring) => {
                    format!("{}.{}", instance_signature_chain(declaring, ctx)?, name)
                }
                None => qualify(namespace, name),
            };
            if !generic_args.is_empty() {
                let args: Vec<String> = generic_args
                    .iter()
                    .map(|a| param_signature(a, ctx))
                    .collect::<Result<_>>()?;
                sig.push('{');
                sig.push_str(&args.join(","));
                sig.push('}');
            }
            Ok(sig)
        }
        TypeRefFacts::GenericParam { name, .. } => {
            if let Some(i) = ctx.method_params.iter().position(|p| p == name) {
                Ok(format!("``{i}"))
            } else if let Some(i) = ctx.type_params.iter().position(|p| p == name) {
                Ok(format!("`{i}"))
            } else {
                Err(DocError::integrity(format!(
                    "generic parameter {name} is not in scope for this signature"
                )))
            }
        }
        TypeRefFacts::Void => Err(DocError::integrity("void is not a legal parameter type")),
        TypeRefFacts::Dynamic => Ok("System.Object".to_string()),
    }
}

/// Doc-id form of a declaring-type reference chain (arity-suffixed).
fn instance_doc_id(r: &TypeRefFacts) -> Result<String> {
    match r {
        TypeRefFacts::Instance {
            name,
            namespace,
            generic_args,
            declaring,
            ..
        } => {
            let own = append_arity(name, generic_args.len());
            match declaring {
                Some(declaring) => Ok(format!("{}.{}", instance_doc_id(declaring)?, own)),
                None => Ok(qualify(namespace, &own)),
            }
        }
        other => Err(DocError::integrity(format!(
            "declaring-type reference must be an instance type, found {other:?}"
        ))),
    }
}

/// Signature form of a declaring chain inside a parameter list (no arity
/// suffix when the declaring type is constructed with explicit arguments).
fn instance_signature_chain(r: &TypeRefFacts, ctx: SigContext<'_>) -> Result<String> {
    match r {
        TypeRefFacts::Instance { .. } => param_signature(r, ctx),
        other => Err(DocError::integrity(format!(
            "declaring-type reference must be an instance type, found {other:?}"
        ))),
    }
}

fn qualify(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{namespace}.{name}")
    }
}

fn append_arity(name: &str, arity: usize) -> String {
    if arity == 0 {
        name.to_string()
    } else {
        format!("{name}`{arity}")
    }
}

/// `#`-escape dots in member names (explicit interface implementations).
fn escape_member_name(name: &str) -> String {
    name.replace('.', "#")
}
