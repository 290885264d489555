//! The lazy, memoizing catalog loader.

use crate::{builder::CatalogBuilder, CatalogError, ObjectSpec};
use chassis_core::{MetamodelConfig, TypeId, Violation, Violations};
use chassis_model::DomainModel;
use chassis_pipeline::{support, vocab, ConsumedMethods, ProgrammingModel};
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// One registered mixin contribution, precomputed at loader construction.
#[derive(Debug, Clone)]
pub(crate) struct MixinEntry {
    /// The contributing mixin type.
    pub mixin: TypeId,
    /// The declared target type; the mixin contributes to the target and
    /// every subtype of it.
    pub target: TypeId,
    /// Derived member id: the mixin type name after its last `_`, or the
    /// full name.
    pub member_id: String,
}

/// The metamodel: per-type catalogs over one immutable domain model.
///
/// Catalog construction is lazy, per type, and memoized for the process
/// lifetime. Concurrent first requests for one type coalesce into exactly
/// one build; afterwards every request reads the single published
/// `Arc<ObjectSpec>`. Builds of independent types may run in parallel.
pub struct Metamodel {
    model: Arc<DomainModel>,
    config: MetamodelConfig,
    programming: ProgrammingModel,
    consumed: ConsumedMethods,
    mixins: Vec<MixinEntry>,
    model_violations: Violations,
    specs: RwLock<FxHashMap<TypeId, Arc<OnceCell<Arc<ObjectSpec>>>>>,
}

impl Metamodel {
    /// Create a metamodel with the standard programming model.
    pub fn new(model: Arc<DomainModel>, config: MetamodelConfig) -> Self {
        Self::with_programming(model, config, ProgrammingModel::standard())
    }

    /// Create a metamodel with a caller-supplied factory order.
    pub fn with_programming(
        model: Arc<DomainModel>,
        config: MetamodelConfig,
        programming: ProgrammingModel,
    ) -> Self {
        let (mixins, model_violations) = scan_mixins(&model);
        Self {
            model,
            config,
            programming,
            consumed: ConsumedMethods::new(),
            mixins,
            model_violations,
            specs: RwLock::new(FxHashMap::default()),
        }
    }

    /// The domain model under introspection.
    pub fn model(&self) -> &DomainModel {
        &self.model
    }

    /// The resolved configuration.
    pub fn config(&self) -> &MetamodelConfig {
        &self.config
    }

    /// The method-consumption side-channel.
    pub fn consumed(&self) -> &ConsumedMethods {
        &self.consumed
    }

    /// Model-level violations found at loader construction (ill-formed
    /// mixin declarations).
    pub fn model_violations(&self) -> &Violations {
        &self.model_violations
    }

    pub(crate) fn programming(&self) -> &ProgrammingModel {
        &self.programming
    }

    pub(crate) fn mixins(&self) -> &[MixinEntry] {
        &self.mixins
    }

    /// Get (building if necessary) the catalog of a type by name.
    pub fn spec(&self, name: &str) -> Result<Arc<ObjectSpec>, CatalogError> {
        let id = self
            .model
            .type_id(name)
            .ok_or_else(|| CatalogError::UnknownType(name.to_string()))?;
        self.spec_by_id(id)
    }

    /// Get (building if necessary) the catalog of a type by id.
    pub fn spec_by_id(&self, id: TypeId) -> Result<Arc<ObjectSpec>, CatalogError> {
        self.spec_with_ctx(id, &BuildCtx::default())
    }

    /// Build every registered type's catalog.
    pub fn all_specs(&self) -> Result<Vec<Arc<ObjectSpec>>, CatalogError> {
        self.model
            .types()
            .map(|decl| self.spec_by_id(decl.id))
            .collect()
    }

    /// Memoized entry point; `ctx` carries the in-progress build chain so
    /// a re-entrant request is a cycle error, never unbounded recursion.
    pub(crate) fn spec_with_ctx(
        &self,
        id: TypeId,
        ctx: &BuildCtx,
    ) -> Result<Arc<ObjectSpec>, CatalogError> {
        if ctx.contains(id) {
            return Err(CatalogError::BuildCycle {
                chain: self.render_chain(ctx, id),
            });
        }

        let cell = {
            let specs = self.specs.read();
            match specs.get(&id) {
                Some(cell) => Arc::clone(cell),
                None => {
                    drop(specs);
                    let mut specs = self.specs.write();
                    Arc::clone(specs.entry(id).or_insert_with(|| Arc::new(OnceCell::new())))
                }
            }
        };

        let spec = cell.get_or_try_init(|| {
            let inner = ctx.push(id);
            CatalogBuilder::new(self).build(id, &inner)
        })?;
        Ok(Arc::clone(spec))
    }

    fn render_chain(&self, ctx: &BuildCtx, id: TypeId) -> String {
        ctx.chain
            .iter()
            .chain(std::iter::once(&id))
            .map(|t| {
                self.model
                    .decl(*t)
                    .map(|d| d.name.clone())
                    .unwrap_or_else(|| t.to_string())
            })
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

/// The chain of types whose builds are in progress on this call stack.
#[derive(Debug, Clone, Default)]
pub(crate) struct BuildCtx {
    chain: Vec<TypeId>,
}

impl BuildCtx {
    pub fn contains(&self, id: TypeId) -> bool {
        self.chain.contains(&id)
    }

    pub fn push(&self, id: TypeId) -> BuildCtx {
        let mut chain = self.chain.clone();
        chain.push(id);
        BuildCtx { chain }
    }
}

/// Scan the model for mixin declarations and precompute contributions.
fn scan_mixins(model: &DomainModel) -> (Vec<MixinEntry>, Violations) {
    let mut entries = Vec::new();
    let mut violations = Violations::new();

    for decl in model.types() {
        let synthesis = model.markers().synthesize_named(&decl.markers, vocab::MIXIN);
        if !synthesis.is_present() {
            continue;
        }

        // Missing or unknown targets are reported by the mixin type's own
        // catalog build; the scan just skips the entry.
        let Some(target) = synthesis
            .effective("target")
            .and_then(|v| v.as_str())
            .and_then(|name| model.type_id(name))
        else {
            continue;
        };

        let contributable = decl.fields.len()
            + decl
                .methods
                .iter()
                .filter(|m| !support::is_support_name(&m.name))
                .count();
        if contributable != 1 {
            violations.push(Violation::mixin_shape(
                &decl.name,
                &format!(
                    "expected exactly one contributable member, found {}",
                    contributable
                ),
            ));
            continue;
        }

        entries.push(MixinEntry {
            mixin: decl.id,
            target,
            member_id: derive_member_id(&decl.name),
        });
    }

    (entries, violations)
}

/// Derive the contributed member id from the mixin type name.
fn derive_member_id(mixin_name: &str) -> String {
    match mixin_name.rsplit_once('_') {
        Some((_, tail)) if !tail.is_empty() => tail.to_string(),
        _ => mixin_name.to_string(),
    }
}
