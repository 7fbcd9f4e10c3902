//! Symbol reference resolver.
//!
//! The resolver memoizes one [`TypeRef`] per distinct symbol identity for
//! the lifetime of one tree build. Resolving a reference registers its
//! arena slot *before* resolving anything the symbol depends on (generic
//! arguments, declaring types, constraint lists); a repeat encounter,
//! including a re-entrant one from inside that dependency resolution,
//! returns the already-registered id even if the slot is still being
//! filled. This early registration is what makes mutually referential
//! generics (`T : IComparable<T>`) terminate without duplicating nodes.
//!
//! The registry is scoped to one build; the [`crate::builder`] consumes
//! the resolver and hands the finished arena to the tree.

use std::collections::HashMap;

use crate::error::Result;
use crate::facts::{AssemblyIdentity, GenericParamFacts, TypeRefFacts};
use crate::model::{RefArena, TypeRef, TypeRefId};

/// Structural identity of a symbol, used to deduplicate reference nodes.
///
/// Identity is computed over the fact reference alone, so lookup never
/// recurses into anything not already present in the fact tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum SymbolKey {
    Instance {
        namespace: String,
        name: String,
        assembly: AssemblyKey,
        args: Vec<SymbolKey>,
        declaring: Option<Box<SymbolKey>>,
    },
    GenericParam {
        owner: String,
        name: String,
    },
    Void,
    Dynamic,
}

/// Hashable form of an assembly identity. The public-key token is folded
/// to lower case so key equality agrees with [`AssemblyIdentity`]'s
/// case-insensitive token comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct AssemblyKey {
    name: String,
    version: String,
    culture: String,
    token: String,
}

impl AssemblyKey {
    fn of(identity: &AssemblyIdentity) -> AssemblyKey {
        AssemblyKey {
            name: identity.name.clone(),
            version: identity.version.clone(),
            culture: identity.culture.clone(),
            token: identity.public_key_token.to_ascii_lowercase(),
        }
    }
}

impl SymbolKey {
    fn of(facts: &TypeRefFacts) -> SymbolKey {
        match facts {
            TypeRefFacts::Instance {
                name,
                namespace,
                generic_args,
                declaring,
                assembly,
            } => SymbolKey::Instance {
                namespace: namespace.clone(),
                name: name.clone(),
                assembly: AssemblyKey::of(assembly),
                args: generic_args.iter().map(SymbolKey::of).collect(),
                declaring: declaring.as_ref().map(|d| Box::new(SymbolKey::of(d))),
            },
            TypeRefFacts::GenericParam { name, owner } => SymbolKey::GenericParam {
                owner: owner.clone(),
                name: name.clone(),
            },
            TypeRefFacts::Void => SymbolKey::Void,
            TypeRefFacts::Dynamic => SymbolKey::Dynamic,
        }
    }
}

/// Per-build reference resolver over one [`RefArena`].
#[derive(Debug, Default)]
pub struct Resolver {
    arena: RefArena,
    registry: HashMap<SymbolKey, TypeRefId>,
}

impl Resolver {
    pub fn new() -> Self {
        Resolver::default()
    }

    /// Resolve a fact reference to its unique id, registering it first if
    /// this identity has not been seen in this build.
    pub fn resolve(&mut self, facts: &TypeRefFacts) -> Result<TypeRefId> {
        let key = SymbolKey::of(facts);
        if let Some(&id) = self.registry.get(&key) {
            return Ok(id);
        }

        // Register under a placeholder before touching dependents, so any
        // re-entrant resolution of this same identity lands on this id.
        let placeholder = match facts {
            TypeRefFacts::Instance {
                name,
                namespace,
                assembly,
                ..
            } => TypeRef::Instance {
                name: name.clone(),
                namespace: namespace.clone(),
                generic_args: Vec::new(),
                declaring: None,
                assembly: assembly.clone(),
            },
            TypeRefFacts::GenericParam { name, .. } => TypeRef::GenericParam {
                name: name.clone(),
            },
            TypeRefFacts::Void => TypeRef::Void,
            TypeRefFacts::Dynamic => TypeRef::Dynamic,
        };
        let id = self.arena.push(placeholder);
        self.registry.insert(key, id);
        tracing::trace!(id = %id, "registered symbol reference");

        if let TypeRefFacts::Instance {
            generic_args,
            declaring,
            ..
        } = facts
        {
            let args = generic_args
                .iter()
                .map(|a| self.resolve(a))
                .collect::<Result<Vec<_>>>()?;
            let declaring = declaring
                .as_ref()
                .map(|d| self.resolve(d))
                .transpose()?;
            self.fill_instance(id, args, declaring);
        }
        Ok(id)
    }

    /// Resolve a generic parameter declaration: register the parameter's
    /// own reference first, then resolve its constraint list. A constraint
    /// mentioning the parameter resolves to the id returned here.
    pub fn resolve_generic_param(
        &mut self,
        owner: &str,
        facts: &GenericParamFacts,
    ) -> Result<(TypeRefId, Vec<TypeRefId>)> {
        let own = self.resolve(&TypeRefFacts::GenericParam {
            name: facts.name.clone(),
            owner: owner.to_string(),
        })?;
        let constraints = facts
            .constraints
            .iter()
            .map(|c| self.resolve(c))
            .collect::<Result<Vec<_>>>()?;
        Ok((own, constraints))
    }

    /// Consume the resolver, yielding the finished arena.
    pub fn into_arena(self) -> RefArena {
        self.arena
    }

    /// Complete a registered instance placeholder with its resolved
    /// arguments and declaring reference.
    fn fill_instance(&mut self, id: TypeRefId, args: Vec<TypeRefId>, declaring: Option<TypeRefId>) {
        if let TypeRef::Instance {
            name,
            namespace,
            assembly,
            ..
        } = self.arena.get(id).clone()
        {
            self.arena.fill(
                id,
                TypeRef::Instance {
                    name,
                    namespace,
                    generic_args: args,
                    declaring,
                    assembly,
                },
            );
        }
    }
}
