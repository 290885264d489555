//! The DomainModel - immutable structural lookup.

use crate::TypeDecl;
use chassis_core::TypeId;
use chassis_marker::MarkerRegistry;
use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};

/// The DomainModel provides runtime lookup of type declarations.
/// It is immutable after construction.
#[derive(Debug)]
pub struct DomainModel {
    /// Type declarations by ID, in declaration order.
    types: IndexMap<TypeId, TypeDecl>,
    /// Type ID lookup by name.
    type_names: FxHashMap<String, TypeId>,
    /// Marker definitions referenced by the declarations.
    markers: MarkerRegistry,
    /// Precomputed subtype relationships.
    subtypes: SubtypeIndex,
}

impl DomainModel {
    /// Create a model (use DomainModelBuilder for construction).
    pub(crate) fn new(
        types: IndexMap<TypeId, TypeDecl>,
        type_names: FxHashMap<String, TypeId>,
        markers: MarkerRegistry,
        subtypes: SubtypeIndex,
    ) -> Self {
        Self {
            types,
            type_names,
            markers,
            subtypes,
        }
    }

    /// Get a type declaration by id.
    pub fn decl(&self, id: TypeId) -> Option<&TypeDecl> {
        self.types.get(&id)
    }

    /// Get a type declaration by name.
    pub fn decl_by_name(&self, name: &str) -> Option<&TypeDecl> {
        self.type_names.get(name).and_then(|id| self.types.get(id))
    }

    /// Resolve a type name to its id.
    pub fn type_id(&self, name: &str) -> Option<TypeId> {
        self.type_names.get(name).copied()
    }

    /// The marker registry the declarations refer to.
    pub fn markers(&self) -> &MarkerRegistry {
        &self.markers
    }

    /// Iterate all type declarations in declaration order.
    pub fn types(&self) -> impl Iterator<Item = &TypeDecl> {
        self.types.values()
    }

    /// Number of declared types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if no types are declared.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Returns true if `sub` is `sup` or reaches it over supertype and
    /// interface edges.
    pub fn is_assignable(&self, sub: TypeId, sup: TypeId) -> bool {
        sub == sup || self.subtypes.is_strict_supertype(sub, sup)
    }

    /// All transitive supertypes (including interfaces) of a type.
    pub fn supertypes_of(&self, id: TypeId) -> impl Iterator<Item = TypeId> + '_ {
        self.subtypes.supertypes_of(id)
    }
}

/// Precomputed transitive supertype relationships.
///
/// Declarations can only reference earlier declarations, so a single pass
/// in declaration order closes the relation; no fixpoint loop is needed.
#[derive(Debug, Default)]
pub struct SubtypeIndex {
    /// For each type, the set of all its supertypes (transitive, including
    /// implemented interfaces and their supertypes).
    supertypes: FxHashMap<TypeId, FxHashSet<TypeId>>,
}

impl SubtypeIndex {
    /// Build the index from type declarations.
    pub fn build(types: &IndexMap<TypeId, TypeDecl>) -> Self {
        let mut supertypes: FxHashMap<TypeId, FxHashSet<TypeId>> = FxHashMap::default();

        for (id, decl) in types {
            let mut supers: FxHashSet<TypeId> = FxHashSet::default();
            let direct = decl
                .supertype
                .into_iter()
                .chain(decl.interfaces.iter().copied());
            for parent in direct {
                supers.insert(parent);
                if let Some(transitive) = supertypes.get(&parent) {
                    supers.extend(transitive.iter().copied());
                }
            }
            supertypes.insert(*id, supers);
        }

        Self { supertypes }
    }

    /// Returns true if `sup` is a strict supertype of `sub`.
    pub fn is_strict_supertype(&self, sub: TypeId, sup: TypeId) -> bool {
        self.supertypes
            .get(&sub)
            .is_some_and(|supers| supers.contains(&sup))
    }

    /// Iterate the transitive supertypes of a type.
    pub fn supertypes_of(&self, id: TypeId) -> impl Iterator<Item = TypeId> + '_ {
        self.supertypes
            .get(&id)
            .into_iter()
            .flat_map(|s| s.iter().copied())
    }
}
