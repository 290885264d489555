//! Catalog assembly for one type.

use crate::metamodel::{BuildCtx, Metamodel, MixinEntry};
use crate::{CatalogError, Feature, FeatureProvenance, ObjectSpec};
use chassis_core::{FeatureSort, TypeId, Violation, Violations};
use chassis_facet::FacetRegistry;
use chassis_model::{FieldDecl, MethodDecl, TypeDecl};
use chassis_pipeline::{support, FactoryContext, FeatureSite};
use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use std::sync::Arc;
use tracing::debug;

/// Builds the catalog of a single type.
///
/// Merge order is fixed: supertype members first, then interface members,
/// then local declarations, then mixin contributions. A local redeclaration
/// replaces the inherited feature but keeps its catalog slot.
pub(crate) struct CatalogBuilder<'a> {
    metamodel: &'a Metamodel,
}

impl<'a> CatalogBuilder<'a> {
    pub fn new(metamodel: &'a Metamodel) -> Self {
        Self { metamodel }
    }

    pub fn build(&self, id: TypeId, ctx: &BuildCtx) -> Result<Arc<ObjectSpec>, CatalogError> {
        let model = self.metamodel.model();
        let decl = model
            .decl(id)
            .ok_or_else(|| CatalogError::UnknownType(id.to_string()))?;

        let fctx = FactoryContext {
            model,
            config: self.metamodel.config(),
            consumed: self.metamodel.consumed(),
        };
        let mut violations = Violations::new();

        let mut object_facets = FacetRegistry::new();
        self.metamodel.programming().run(
            &fctx,
            &FeatureSite::object(decl),
            &mut object_facets,
            &mut violations,
        )?;

        let locals = self.local_features(decl, &fctx, &mut violations)?;

        // Inherited members come first, in the parents' catalog order.
        let mut members: IndexMap<String, Feature> = IndexMap::new();
        if let Some(sup) = decl.supertype {
            let parent = self.metamodel.spec_with_ctx(sup, ctx)?;
            self.merge_inherited(decl, &parent, &mut members, &mut violations);
        }
        for &iface in &decl.interfaces {
            let parent = self.metamodel.spec_with_ctx(iface, ctx)?;
            self.merge_inherited(decl, &parent, &mut members, &mut violations);
        }

        // Local declarations override inherited ones slot-for-slot.
        for feature in locals {
            let name = feature.name().to_string();
            if let Some(existing) = members.get(&name) {
                if !compatible(existing, &feature) {
                    let parent = match existing.provenance() {
                        FeatureProvenance::Inherited { from } => from.clone(),
                        _ => decl.name.clone(),
                    };
                    if existing.sort() == FeatureSort::Action
                        && feature.sort() == FeatureSort::Action
                    {
                        violations.push(Violation::overloaded_inherited(
                            &decl.name, &name, &parent,
                        ));
                    } else {
                        violations.push(Violation::incompatible_override(
                            &decl.name, &name, &parent,
                        ));
                    }
                }
            }
            members.insert(name, feature);
        }

        self.splice_mixins(decl, &fctx, &mut members, &mut violations)?;

        // Deterministic catalog order: group, then dewey sequence, then the
        // stable merge order for ties.
        let mut entries: Vec<(String, Feature)> = members.into_iter().collect();
        entries.sort_by_cached_key(|(_, f)| f.order_key());
        let members: IndexMap<String, Feature> = entries.into_iter().collect();

        debug!(
            type_name = %decl.name,
            members = members.len(),
            violations = violations.len(),
            "catalog built"
        );
        Ok(Arc::new(ObjectSpec::new(
            id,
            &decl.name,
            object_facets,
            members,
            violations,
        )))
    }

    /// Resolve the type's own declarations into features, in declaration
    /// order: fields first, then action methods. Support methods are not
    /// members; the companion factories reach them through the site owner.
    fn local_features(
        &self,
        decl: &TypeDecl,
        fctx: &FactoryContext<'_>,
        violations: &mut Violations,
    ) -> Result<Vec<Feature>, CatalogError> {
        let mut locals = Vec::new();

        for field in &decl.fields {
            locals.push(self.field_feature(decl, field, fctx, violations)?);
        }

        let actions: Vec<&MethodDecl> = decl
            .methods
            .iter()
            .filter(|m| !support::is_support_name(&m.name))
            .collect();
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for method in &actions {
            if !seen.insert(method.name.as_str()) {
                // First declaration wins; the violation was already recorded.
                continue;
            }
            let count = actions.iter().filter(|m| m.name == method.name).count()
                + decl.has_field(&method.name) as usize;
            if count > 1 {
                violations.push(Violation::overloaded_member(&decl.name, &method.name, count));
                if decl.has_field(&method.name) {
                    // The field keeps the member id.
                    continue;
                }
            }
            locals.push(self.action_feature(decl, method, fctx, violations)?);
        }

        Ok(locals)
    }

    fn field_feature(
        &self,
        decl: &TypeDecl,
        field: &FieldDecl,
        fctx: &FactoryContext<'_>,
        violations: &mut Violations,
    ) -> Result<Feature, CatalogError> {
        let site = FeatureSite::field(decl, field);
        let mut facets = FacetRegistry::new();
        self.metamodel
            .programming()
            .run(fctx, &site, &mut facets, violations)?;
        Ok(Feature::new(
            &field.name,
            site.sort(),
            field.ty.clone(),
            facets,
            Vec::new(),
        ))
    }

    fn action_feature(
        &self,
        decl: &TypeDecl,
        method: &MethodDecl,
        fctx: &FactoryContext<'_>,
        violations: &mut Violations,
    ) -> Result<Feature, CatalogError> {
        let mut params = Vec::with_capacity(method.params.len());
        for (index, param) in method.params.iter().enumerate() {
            let site = FeatureSite::parameter(decl, method, index, param);
            let mut facets = FacetRegistry::new();
            self.metamodel
                .programming()
                .run(fctx, &site, &mut facets, violations)?;
            params.push(Feature::new(
                &param.name,
                FeatureSort::Parameter,
                param.ty.clone(),
                facets,
                Vec::new(),
            ));
        }

        let site = FeatureSite::method(decl, method);
        let mut facets = FacetRegistry::new();
        self.metamodel
            .programming()
            .run(fctx, &site, &mut facets, violations)?;
        Ok(Feature::new(
            &method.name,
            FeatureSort::Action,
            method.returns.clone(),
            facets,
            params,
        ))
    }

    /// Carry a parent catalog's members forward.
    ///
    /// Mixed-in members are never inherited; mixins re-splice per type so a
    /// subtype gets the contribution directly. Declared members become
    /// inherited; already-inherited ones keep their original declarer. The
    /// supertype runs before interfaces, so on a same-name clash the
    /// earlier parent keeps the member.
    fn merge_inherited(
        &self,
        decl: &TypeDecl,
        parent: &ObjectSpec,
        members: &mut IndexMap<String, Feature>,
        violations: &mut Violations,
    ) {
        for feature in parent.members() {
            if matches!(feature.provenance(), FeatureProvenance::MixedIn { .. }) {
                continue;
            }
            match members.get(feature.name()) {
                Some(existing) => {
                    if !compatible(existing, feature)
                        && existing.sort() == FeatureSort::Action
                        && feature.sort() == FeatureSort::Action
                    {
                        violations.push(Violation::overloaded_inherited(
                            &decl.name,
                            feature.name(),
                            parent.name(),
                        ));
                    }
                }
                None => {
                    let provenance = match feature.provenance() {
                        FeatureProvenance::Declared => FeatureProvenance::Inherited {
                            from: parent.name().to_string(),
                        },
                        other => other.clone(),
                    };
                    members.insert(
                        feature.name().to_string(),
                        feature.clone().with_provenance(provenance),
                    );
                }
            }
        }
    }

    /// Splice every mixin whose target this type is assignable to.
    fn splice_mixins(
        &self,
        decl: &TypeDecl,
        fctx: &FactoryContext<'_>,
        members: &mut IndexMap<String, Feature>,
        violations: &mut Violations,
    ) -> Result<(), CatalogError> {
        let model = self.metamodel.model();
        for entry in self.metamodel.mixins() {
            if entry.mixin == decl.id || !model.is_assignable(decl.id, entry.target) {
                continue;
            }
            let Some(mixin_decl) = model.decl(entry.mixin) else {
                continue;
            };

            if let Some(existing) = members.get(&entry.member_id) {
                match existing.provenance() {
                    FeatureProvenance::MixedIn { mixin } => {
                        violations.push(Violation::ambiguous_mixin_member(
                            &decl.name,
                            &entry.member_id,
                            mixin,
                            &mixin_decl.name,
                        ));
                    }
                    _ => {
                        violations.push(Violation::mixin_collision(
                            &decl.name,
                            &entry.member_id,
                            &mixin_decl.name,
                        ));
                    }
                }
                continue;
            }

            if let Some(feature) = self.mixin_feature(entry, mixin_decl, fctx, violations)? {
                members.insert(entry.member_id.clone(), feature);
            }
        }
        Ok(())
    }

    /// Resolve the mixin's single contributable member against the mixin's
    /// own declaration, then rename it to the derived member id. Companion
    /// methods on the mixin bind through the site owner as usual.
    fn mixin_feature(
        &self,
        entry: &MixinEntry,
        mixin_decl: &TypeDecl,
        fctx: &FactoryContext<'_>,
        violations: &mut Violations,
    ) -> Result<Option<Feature>, CatalogError> {
        let provenance = FeatureProvenance::MixedIn {
            mixin: mixin_decl.name.clone(),
        };
        if let Some(field) = mixin_decl.fields.first() {
            let feature = self.field_feature(mixin_decl, field, fctx, violations)?;
            return Ok(Some(
                feature.renamed(&entry.member_id).with_provenance(provenance),
            ));
        }
        if let Some(method) = mixin_decl
            .methods
            .iter()
            .find(|m| !support::is_support_name(&m.name))
        {
            let feature = self.action_feature(mixin_decl, method, fctx, violations)?;
            return Ok(Some(
                feature.renamed(&entry.member_id).with_provenance(provenance),
            ));
        }
        // Shape was checked at loader construction; nothing to contribute.
        Ok(None)
    }
}

/// Returns true if a redeclaration is shape-compatible with the member it
/// replaces: same sort, and for actions the same parameter list.
fn compatible(existing: &Feature, local: &Feature) -> bool {
    if existing.sort() != local.sort() {
        return false;
    }
    match existing.sort() {
        FeatureSort::Action => {
            existing.params().len() == local.params().len()
                && existing
                    .params()
                    .iter()
                    .zip(local.params())
                    .all(|(a, b)| a.value_ty() == b.value_ty())
        }
        _ => existing.value_ty() == local.value_ty(),
    }
}
