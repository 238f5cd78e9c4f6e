//! End-to-end engine behavior: manager initialization, theme switching,
//! persistence, and resolution under both failure policies.

use std::sync::Arc;

use uni_core::Color;
use uni_theme::appearance::UnknownAppearance;
use uni_theme::{
    Appearance, AssetToken, ColorToken, DesignSystem, DesignSystemRegistry, DesignToken,
    FixedAppearance, FontToken, GradientToken, MemorySettingsStore, RadiusToken, ResolvePolicy,
    SemanticColor, SettingsStore, SpacingToken, ThemeManager, TokenResolver, SELECTED_SYSTEM_KEY,
};

/// The two-system registry from the library's reference scenario.
fn scenario_registry() -> DesignSystemRegistry {
    DesignSystemRegistry::new(vec![
        DesignSystem::builder("Default")
            .color(ColorToken::Primary, Color::from_hex(0x0A84FF))
            .spacing(SpacingToken::Medium, 16.0)
            .build(),
        DesignSystem::builder("Documentation")
            .color(ColorToken::Primary, Color::from_hex(0xBF5AF2))
            .spacing(SpacingToken::Medium, 10.0)
            .build(),
    ])
}

fn resolver(manager: &Arc<ThemeManager>, policy: ResolvePolicy) -> TokenResolver {
    TokenResolver::new(Arc::clone(manager), policy)
        .with_appearance_provider(Box::new(FixedAppearance(Appearance::Light)))
}

#[test]
fn end_to_end_switching_scenario() {
    let store = Arc::new(MemorySettingsStore::new());
    let manager = Arc::new(ThemeManager::new(
        scenario_registry(),
        Box::new(Arc::clone(&store)),
    ));
    let tokens = resolver(&manager, ResolvePolicy::FailFast);

    // Fresh manager with no persisted setting selects the default.
    assert_eq!(manager.current().name(), "Default");
    assert_eq!(tokens.color(ColorToken::Primary), Color::from_hex(0x0A84FF));
    assert_eq!(tokens.spacing(SpacingToken::Medium), 16.0);

    manager.apply("Documentation");
    assert_eq!(tokens.color(ColorToken::Primary), Color::from_hex(0xBF5AF2));
    assert_eq!(tokens.spacing(SpacingToken::Medium), 10.0);
    assert_eq!(
        store.get_string(SELECTED_SYSTEM_KEY),
        Some("Documentation".to_string())
    );
}

#[test]
fn persisted_choice_survives_restart() {
    let store = Arc::new(MemorySettingsStore::new());

    let manager = ThemeManager::new(scenario_registry(), Box::new(Arc::clone(&store)));
    manager.apply("Documentation");
    drop(manager);

    // Simulated app restart: a fresh manager over the same store.
    let restarted = ThemeManager::new(scenario_registry(), Box::new(Arc::clone(&store)));
    assert_eq!(restarted.current().name(), "Documentation");
}

#[test]
fn persisted_choice_survives_restart_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs").join("uni.toml");

    let manager = ThemeManager::new(
        scenario_registry(),
        Box::new(uni_theme::TomlSettingsStore::load(&path)),
    );
    manager.apply("Documentation");
    drop(manager);

    let restarted = ThemeManager::new(
        scenario_registry(),
        Box::new(uni_theme::TomlSettingsStore::load(&path)),
    );
    assert_eq!(restarted.current().name(), "Documentation");
}

#[test]
fn rejected_apply_leaves_everything_unchanged() {
    let store = Arc::new(MemorySettingsStore::new());
    let manager = Arc::new(ThemeManager::new(
        scenario_registry(),
        Box::new(Arc::clone(&store)),
    ));
    let tokens = resolver(&manager, ResolvePolicy::FailFast);
    manager.apply("Documentation");

    manager.apply("NoSuchTheme");
    assert_eq!(manager.current().name(), "Documentation");
    assert_eq!(tokens.spacing(SpacingToken::Medium), 10.0);
    assert_eq!(
        store.get_string(SELECTED_SYSTEM_KEY),
        Some("Documentation".to_string())
    );
}

// ========== Policy behavior ==========

/// A system with a deliberately mistyped token: the `spacing.medium` key
/// holds a radius value.
fn mistyped_registry() -> DesignSystemRegistry {
    DesignSystemRegistry::new(vec![DesignSystem::builder("Broken")
        .token(SpacingToken::Medium.key(), DesignToken::Radius(12.0))
        .build()])
}

#[test]
fn mismatched_kind_degrades_to_zero() {
    let manager = Arc::new(ThemeManager::new(
        mistyped_registry(),
        Box::new(MemorySettingsStore::new()),
    ));
    let tokens = resolver(&manager, ResolvePolicy::Degrade);

    // Never the radius value mislabeled as spacing.
    assert_eq!(tokens.spacing(SpacingToken::Medium), 0.0);
}

#[test]
#[should_panic(expected = "spacing.medium")]
fn mismatched_kind_fails_fast_in_dev() {
    let manager = Arc::new(ThemeManager::new(
        mistyped_registry(),
        Box::new(MemorySettingsStore::new()),
    ));
    let tokens = resolver(&manager, ResolvePolicy::FailFast);
    tokens.spacing(SpacingToken::Medium);
}

#[test]
fn missing_tokens_degrade_to_documented_sentinels() {
    let manager = Arc::new(ThemeManager::new(
        DesignSystemRegistry::new(vec![DesignSystem::builder("Empty").build()]),
        Box::new(MemorySettingsStore::new()),
    ));
    let tokens = resolver(&manager, ResolvePolicy::Degrade);

    assert_eq!(tokens.color(ColorToken::Primary), Color::MAGENTA);
    assert_eq!(tokens.spacing(SpacingToken::Small), 0.0);
    assert_eq!(tokens.radius(RadiusToken::Medium), 0.0);
    assert_eq!(tokens.asset(AssetToken::Logo), "");
    assert_eq!(
        tokens.font(FontToken::Body),
        uni_theme::FontDescription::fallback()
    );
    let gradient = tokens.gradient(GradientToken::Hero);
    assert!(gradient.stops.iter().all(|stop| stop.color == Color::MAGENTA));
}

#[test]
#[should_panic(expected = "not found")]
fn missing_token_fails_fast_in_dev() {
    let manager = Arc::new(ThemeManager::new(
        DesignSystemRegistry::new(vec![DesignSystem::builder("Empty").build()]),
        Box::new(MemorySettingsStore::new()),
    ));
    let tokens = resolver(&manager, ResolvePolicy::FailFast);
    tokens.color(ColorToken::Primary);
}

// ========== Semantic colors ==========

fn semantic_registry() -> DesignSystemRegistry {
    DesignSystemRegistry::new(vec![DesignSystem::builder("Semantic")
        .semantic_color(ColorToken::TextPrimary, SemanticColor::Label)
        .build()])
}

#[test]
fn semantic_tokens_track_the_appearance() {
    let manager = Arc::new(ThemeManager::new(
        semantic_registry(),
        Box::new(MemorySettingsStore::new()),
    ));

    let light = TokenResolver::new(Arc::clone(&manager), ResolvePolicy::FailFast)
        .with_appearance_provider(Box::new(FixedAppearance(Appearance::Light)));
    let dark = TokenResolver::new(Arc::clone(&manager), ResolvePolicy::FailFast)
        .with_appearance_provider(Box::new(FixedAppearance(Appearance::Dark)));

    assert_eq!(light.color(ColorToken::TextPrimary), Color::BLACK);
    assert_eq!(dark.color(ColorToken::TextPrimary), Color::WHITE);
}

#[test]
fn unresolvable_semantic_color_uses_the_role_fallback() {
    let manager = Arc::new(ThemeManager::new(
        semantic_registry(),
        Box::new(MemorySettingsStore::new()),
    ));
    let tokens = TokenResolver::new(Arc::clone(&manager), ResolvePolicy::Degrade)
        .with_appearance_provider(Box::new(UnknownAppearance));

    // Per-role fallback, not the global magenta sentinel: text must stay
    // readable even when the platform query fails.
    assert_eq!(
        tokens.color(ColorToken::TextPrimary),
        SemanticColor::Label.fallback()
    );
}

#[test]
#[should_panic(expected = "label")]
fn unresolvable_semantic_color_fails_fast_in_dev() {
    let manager = Arc::new(ThemeManager::new(
        semantic_registry(),
        Box::new(MemorySettingsStore::new()),
    ));
    let tokens = TokenResolver::new(Arc::clone(&manager), ResolvePolicy::FailFast)
        .with_appearance_provider(Box::new(UnknownAppearance));
    tokens.color(ColorToken::TextPrimary);
}

// ========== Escape hatch ==========

#[test]
fn raw_lookup_returns_tokens_unresolved() {
    let manager = Arc::new(ThemeManager::new(
        semantic_registry(),
        Box::new(MemorySettingsStore::new()),
    ));
    let tokens = resolver(&manager, ResolvePolicy::FailFast);

    assert_eq!(
        tokens.lookup_raw(&ColorToken::TextPrimary.key()),
        Some(DesignToken::SemanticColor(SemanticColor::Label))
    );
    assert_eq!(tokens.lookup_raw(&ColorToken::Accent.key()), None);
}
