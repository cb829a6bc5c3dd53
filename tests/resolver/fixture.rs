use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use component_resolver::{source_origin, NamespaceRegistry, NamespaceUnit};

/// Stand-in for a component implementation type.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ComponentType {
    pub(crate) name: &'static str,
    pub(crate) kind: ComponentKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ComponentKind {
    Model,
    LossHead,
    Evaluator,
    Constant,
}

impl ComponentType {
    fn new(name: &'static str, kind: ComponentKind) -> Self {
        Self { name, kind }
    }
}

static LOSSES_BUILDS: AtomicUsize = AtomicUsize::new(0);

pub(crate) fn losses_builds() -> usize {
    LOSSES_BUILDS.load(Ordering::SeqCst)
}

fn build_registry() -> NamespaceRegistry<ComponentType> {
    let mut registry = NamespaceRegistry::new();

    registry
        .register("models.urm.urm", || {
            NamespaceUnit::new("models.urm.urm")
                .with_origin(source_origin!())
                .with_symbol("URM", ComponentType::new("URM", ComponentKind::Model))
                .with_symbol("URMConfig", ComponentType::new("URMConfig", ComponentKind::Constant))
        })
        .expect("register models.urm.urm");

    registry
        .register("models.losses", || {
            LOSSES_BUILDS.fetch_add(1, Ordering::SeqCst);
            NamespaceUnit::new("models.losses")
                .with_origin(source_origin!())
                .with_symbol("ACTLossHead", ComponentType::new("ACTLossHead", ComponentKind::LossHead))
                .with_symbol("IGNORE_LABEL_ID", ComponentType::new("IGNORE_LABEL_ID", ComponentKind::Constant))
                .with_symbol("_log_stablemax", ComponentType::new("_log_stablemax", ComponentKind::Constant))
        })
        .expect("register models.losses");

    registry
        .register("models.arc", || {
            NamespaceUnit::new("models.arc")
                .with_symbol("ARC", ComponentType::new("ARC", ComponentKind::Model))
        })
        .expect("register models.arc");

    registry
        .register("evaluators.arc", || {
            NamespaceUnit::new("evaluators.arc")
                .with_origin("evaluators/arc.rs")
                .with_symbol("ARC", ComponentType::new("ARC", ComponentKind::Evaluator))
        })
        .expect("register evaluators.arc");

    registry
}

static REGISTRY: OnceLock<NamespaceRegistry<ComponentType>> = OnceLock::new();

/// Process-wide registry, populated once like a host's startup registration.
pub(crate) fn registry() -> &'static NamespaceRegistry<ComponentType> {
    REGISTRY.get_or_init(build_registry)
}
