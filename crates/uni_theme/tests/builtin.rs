//! Shape checks for the built-in design system catalog.

use uni_theme::{
    AssetToken, BuiltinSystem, ColorToken, DesignSystemRegistry, DesignToken, DurationToken,
    FontFamily, FontToken, GradientToken, RadiusToken, SpacingToken,
};

#[test]
fn catalog_contains_expected_systems() {
    let names: Vec<&str> = BuiltinSystem::all().iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["Default", "Documentation"]);

    let registry = DesignSystemRegistry::builtin();
    assert_eq!(registry.names().collect::<Vec<_>>(), names);
    assert_eq!(registry.default_system().name(), "Default");
}

#[test]
fn builtin_systems_define_every_known_token() {
    for builtin in BuiltinSystem::all() {
        let system = builtin.build();

        for token in ColorToken::all() {
            assert!(
                system.lookup_token(&token.key()).is_some(),
                "{} is missing {}",
                system.name(),
                token.key()
            );
        }
        for token in SpacingToken::all() {
            assert!(system.lookup_token(&token.key()).is_some());
        }
        for token in RadiusToken::all() {
            assert!(system.lookup_token(&token.key()).is_some());
        }
        for token in DurationToken::all() {
            assert!(system.lookup_token(&token.key()).is_some());
        }
        for token in AssetToken::all() {
            assert!(system.lookup_token(&token.key()).is_some());
        }
        for token in GradientToken::all() {
            assert!(system.lookup_token(&token.key()).is_some());
        }
        for token in FontToken::all() {
            assert!(
                system.lookup_font(&token.key()).is_some(),
                "{} is missing {}",
                system.name(),
                token.key()
            );
        }
    }
}

#[test]
fn systems_have_distinct_primaries() {
    let default = BuiltinSystem::Default.build();
    let docs = BuiltinSystem::Documentation.build();
    assert_ne!(
        default.lookup_token(&ColorToken::Primary.key()),
        docs.lookup_token(&ColorToken::Primary.key())
    );
}

#[test]
fn documentation_is_denser_than_default() {
    let default = BuiltinSystem::Default.build();
    let docs = BuiltinSystem::Documentation.build();

    let medium = |system: &uni_theme::DesignSystem| match system
        .lookup_token(&SpacingToken::Medium.key())
    {
        Some(DesignToken::Spacing(points)) => *points,
        other => panic!("unexpected medium spacing entry: {other:?}"),
    };

    assert_eq!(medium(&default), 16.0);
    assert_eq!(medium(&docs), 10.0);
}

#[test]
fn documentation_uses_serif_headings() {
    let docs = BuiltinSystem::Documentation.build();
    let headline = docs.lookup_font(&FontToken::Headline.key()).unwrap();
    assert_eq!(headline.family, FontFamily::Serif);

    let default = BuiltinSystem::Default.build();
    let headline = default.lookup_font(&FontToken::Headline.key()).unwrap();
    assert_eq!(headline.family, FontFamily::SansSerif);
}

#[test]
fn durations_are_sub_second() {
    for builtin in BuiltinSystem::all() {
        let system = builtin.build();
        for token in DurationToken::all() {
            match system.lookup_token(&token.key()) {
                Some(DesignToken::Duration(seconds)) => {
                    assert!(*seconds > 0.0 && *seconds < 1.0, "{}", token.key())
                }
                other => panic!("unexpected duration entry: {other:?}"),
            }
        }
    }
}
