//! End-to-end resolution over the shared `Topic` fixture: declaration,
//! localized reads and writes across locales, and validation through a
//! host-style error bag.

use translatable::{prelude::*, resolve};
use translatable_testing_fixtures::{ErrorBag, TOPIC_MODEL, Topic};

fn declare(config: &Config) -> Bindings {
    Bindings::declare(
        &TOPIC_MODEL,
        &["title", "body"],
        DeclareOptions::default(),
        config,
    )
}

#[test]
fn resolves_across_locales_with_default_fallback() {
    let config = Config::default();
    let locales = LocaleContext::new("nl-NL", "en-US");
    let bindings = declare(&config);
    let catalog = bindings.catalog();

    assert!(TOPIC_MODEL.has_column("title_nl"));
    assert_eq!(
        resolve::resolve_column(catalog, "title", &Locale::new("nl-NL"), &config, &locales),
        "title_nl"
    );
    // No title_jp column exists; the default locale's column is named.
    assert_eq!(
        resolve::resolve_column(catalog, "title", &Locale::new("jp-JP"), &config, &locales),
        "title_en"
    );

    assert_eq!(
        resolve::localized_column("title", &Locale::new("nl-BE"), &config),
        "title_nl"
    );
    let full = Config {
        full_locale: true,
        ..Config::default()
    };
    assert_eq!(
        resolve::localized_column("title", &Locale::new("nl-BE"), &full),
        "title_nl_be"
    );
}

#[test]
fn writes_land_in_the_current_locale_and_reads_fall_back() {
    let config = Config::default();
    let bindings = declare(&config);
    let mut topic = Topic::new();

    let mut locales = LocaleContext::new("nl-NL", "en-US");
    bindings
        .write(&mut topic, "title", Some("Kaas".into()), &config, &locales)
        .unwrap();
    assert_eq!(topic.raw("title_nl"), Some("Kaas"));

    // Reading under a locale with no column of its own falls back to the
    // default locale's column, then to any translation.
    locales.set_current("jp-JP");
    let value = bindings.read(&topic, "title", &config, &locales).unwrap();
    assert_eq!(value.as_deref(), Some("Kaas"));

    bindings
        .write(&mut topic, "title", Some("Cheese".into()), &config, &locales)
        .unwrap();
    assert_eq!(topic.raw("title_en"), Some("Cheese"));

    let value = bindings.read(&topic, "title", &config, &locales).unwrap();
    assert_eq!(value.as_deref(), Some("Cheese"));
}

#[test]
fn direct_mode_exposes_the_missing_translation() {
    let config = Config::default();
    let bindings = Bindings::declare(
        &TOPIC_MODEL,
        &["title"],
        DeclareOptions {
            use_default: Some(false),
        },
        &config,
    );
    let topic = Topic::with(&[("title_fr", "Fromage")]);
    let locales = LocaleContext::new("nl-NL", "en-US");

    let value = bindings.read(&topic, "title", &config, &locales).unwrap();

    assert_eq!(value, None);
}

#[test]
fn validation_reports_into_the_error_bag() {
    let rule = RequiredTranslations::declare(
        &TOPIC_MODEL,
        &["title", "body"],
        ValidateOptions::default(),
    );

    let empty = Topic::new();
    let mut bag = ErrorBag::new();
    rule.run(&empty, ValidationEvent::Save, &mut bag);

    let entries = bag.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].field, "title");
    assert_eq!(entries[0].kind, IssueKind::MustHaveTranslation);
    assert_eq!(entries[0].kind.as_str(), "must_have_translation");

    let translated = Topic::with(&[("title_de", "Käse"), ("body_fr", "corps")]);
    let mut bag = ErrorBag::new();
    rule.run(&translated, ValidationEvent::Save, &mut bag);
    assert!(bag.is_empty());
}
