//! netdoc builds immutable documentation trees for .NET assemblies.
//!
//! Input comes from two independent surfaces: reflection-style metadata
//! facts ([`facts`]) describing an assembly's namespaces, types, and
//! members, and parsed documentation prose ([`ProseCollection`]) keyed
//! by canonical member names. [`build`] merges the two into a single
//! [`DocTree`] in one pass:
//!
//! - every type reference is resolved through an arena ([`model::RefArena`])
//!   so that structurally identical references share one id and cyclic
//!   references (`T : IComparable<T>`) resolve without recursion blowups;
//! - every type and member gets the canonical documentation id the .NET
//!   doc-comment format assigns it ([`identity`]), which is the key used
//!   to match prose onto nodes (exact first, then case-insensitive);
//! - parameter and type-parameter prose is redistributed from the owning
//!   member's record onto the individual parameter nodes.
//!
//! The built tree is passive data: consumers either navigate it directly
//! or drive a [`visitor`] traversal over it, in blocking or
//! suspension-capable mode, with identical callback sequences either way.
//!
//! ```no_run
//! use netdoc::{build, matcher::ProseCollection, visitor};
//!
//! # fn demo(facts: netdoc::facts::AssemblyFacts) -> netdoc::Result<()> {
//! let prose = ProseCollection::from_records(Vec::new());
//! let tree = build(&facts, &prose)?;
//! let mut recorder = visitor::CallRecorder::new();
//! visitor::walk(&tree, &mut recorder)?;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod error;
pub mod facts;
pub mod identity;
pub mod matcher;
pub mod model;
pub mod resolver;
pub mod visitor;

pub use builder::build;
pub use error::{DocError, Result};
pub use matcher::ProseCollection;
pub use model::DocTree;
