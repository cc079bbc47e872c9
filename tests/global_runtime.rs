//! Integration tests for the process-wide runtime.
//!
//! These share one global instance, so every test runs serially and starts
//! from a reset.

use herb::runtime::global;
use herb::{AggregateKind, Config, HerbError, Mode, Rule, Selector, StyleHost, StyleUnit};
use serial_test::serial;

fn production() {
    global::reset();
    global::init(Config::new().with_mode(Mode::Production));
}

#[test]
#[serial]
fn test_button_example() {
    production();

    let record = global::inject_style(
        "ns/button",
        &Selector::class("ns/button"),
        &StyleUnit::new().add("color", "red"),
        Some("ns/button"),
        false,
    )
    .unwrap();

    assert_eq!(record.css, r".ns\/button{color:red}");
    assert_eq!(record.data.len(), 1);
    global::with_runtime(|runtime| {
        assert_eq!(runtime.host().element_count(), 1);
        assert_eq!(runtime.host().text(record.element), Some(record.css.as_str()));
    });
}

#[test]
#[serial]
fn test_state_persists_between_calls() {
    production();

    let variant = Selector::class("a");
    global::inject_style("ns/a", &variant, &StyleUnit::new().add("margin", 0), None, false)
        .unwrap();

    let stored = global::style("ns/a").unwrap();
    assert_eq!(stored.css, ".a{margin:0}");
    assert!(global::style("ns/missing").is_none());
}

#[test]
#[serial]
fn test_init_changes_later_renders_only() {
    production();

    let first = global::inject_style(
        "ns/one",
        &Selector::class("one"),
        &StyleUnit::new().add("color", "red"),
        None,
        false,
    )
    .unwrap();

    global::init(Config::default());
    let second = global::inject_style(
        "ns/two",
        &Selector::class("two"),
        &StyleUnit::new().add("color", "red"),
        Some("ns/two"),
        false,
    )
    .unwrap();

    assert_eq!(first.css, ".one{color:red}");
    assert_eq!(second.css, ".two {\n  color: red;\n}");
    assert_eq!(second.data_string.as_deref(), Some("ns/two"));
    assert_eq!(global::style("ns/one").unwrap().css, ".one{color:red}");
}

#[test]
#[serial]
fn test_aggregates_through_global() {
    production();

    let reset = [Rule::new("*", StyleUnit::new().add("box-sizing", "border-box"))];
    global::inject_aggregate("ns/reset", AggregateKind::Global, &reset).unwrap();
    global::inject_aggregate("ns/reset", AggregateKind::Global, &reset).unwrap();

    global::with_runtime(|runtime| {
        let globals = runtime.host().elements_with_attribute("global");
        assert_eq!(globals.len(), 1);
        assert_eq!(runtime.host().text(globals[0]), Some("*{box-sizing:border-box}"));
        assert_eq!(runtime.host().write_count(), 1);
    });
}

#[test]
#[serial]
fn test_reset_clears_everything() {
    production();
    global::inject_style(
        "ns/a",
        &Selector::class("a"),
        &StyleUnit::new().add("color", "red"),
        None,
        false,
    )
    .unwrap();

    global::reset();

    assert!(global::style("ns/a").is_none());
    global::with_runtime(|runtime| {
        assert_eq!(runtime.host().element_count(), 0);
        assert_eq!(runtime.config(), &Config::default());
    });
}

#[test]
#[serial]
fn test_errors_surface_through_global() {
    production();

    let broken = StyleUnit::new().combinator(herb::CombinatorKey::new("%", ["b"]), [("margin", 0)]);
    let err = global::inject_style("ns/bad", &Selector::class("bad"), &broken, None, false)
        .unwrap_err();

    assert!(matches!(err, HerbError::Render(_)));
    assert!(err.to_string().contains('%'));
    assert!(global::style("ns/bad").is_none());
}

#[test]
#[serial]
fn test_concurrent_injection_creates_one_element() {
    production();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let variant = Selector::class(format!("v{}", i % 2));
                global::inject_style(
                    "ns/shared",
                    &variant,
                    &StyleUnit::new().add("color", "red"),
                    None,
                    true,
                )
                .unwrap()
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let record = global::style("ns/shared").unwrap();
    assert_eq!(record.data.len(), 2);
    global::with_runtime(|runtime| {
        assert_eq!(runtime.host().element_count(), 1);
        assert_eq!(runtime.host().text(record.element), Some(record.css.as_str()));
    });
}
