use std::path::{Path, PathBuf};

use component_resolver::{Resolver, ResolverConfig, SourceLocation, EVALUATORS_PREFIX};

use crate::fixture::{registry, ComponentType};

#[test]
fn test_source_location_of_real_file() {
    let resolver = Resolver::new(registry());

    let location = resolver.resolve_source_location::<ComponentType>("urm.urm@URM");
    let path = location.path().expect("urm unit has an origin");

    assert!(path.is_absolute());
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("rs"));
    assert!(path.ends_with("tests/resolver/fixture.rs"));
}

#[test]
fn test_source_location_skips_symbol_lookup() {
    let resolver = Resolver::new(registry());

    let location = resolver.resolve_source_location::<ComponentType>("losses@NoSuchClass");
    assert!(matches!(location, SourceLocation::File(_)));
}

#[test]
fn test_source_location_missing_namespace() {
    let resolver = Resolver::new(registry());

    let location =
        resolver.resolve_source_location_with_prefix::<ComponentType>("missing@X", "models.");
    assert_eq!(location, SourceLocation::Absent);
    assert_eq!(location.into_path(), None);
}

#[test]
fn test_source_location_without_origin() {
    let resolver = Resolver::new(registry());

    let location = resolver.resolve_source_location::<ComponentType>("ARC");
    assert_eq!(location, SourceLocation::Synthetic);
    assert!(location.path().is_none());
}

#[test]
fn test_source_location_relative_origin() {
    let config = ResolverConfig {
        default_prefix: EVALUATORS_PREFIX.to_string(),
        origin_root: Some(PathBuf::from("/srv/components")),
    };
    let resolver = Resolver::with_config(registry(), config);

    let location = resolver.resolve_source_location::<ComponentType>("arc@ARC");
    assert_eq!(
        location.path(),
        Some(Path::new("/srv/components/evaluators/arc.rs"))
    );
}
