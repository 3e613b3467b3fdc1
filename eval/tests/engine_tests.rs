use std::sync::{Arc, Mutex};

use flagline_core::{FlagSpec, Registry};
use flagline_eval::{EvalError, Evaluator, evaluate};

/// Helper to build a registry from a list of declarations.
fn registry(specs: Vec<FlagSpec>) -> Registry {
    let mut registry = Registry::new();
    for spec in specs {
        registry.register(spec).expect("valid spec");
    }
    registry
}

#[test]
fn untouched_flags_keep_their_defaults() {
    let registry = registry(vec![
        FlagSpec::new("verbose").with_tag("v", "-"),
        FlagSpec::new("mode")
            .with_tag("mode", "--")
            .consumes(1)
            .default_state(true)
            .default_values(["fast"]),
    ]);

    let eval = evaluate(&registry, &["-v"]).unwrap();
    assert!(eval.state("verbose"));
    assert!(eval.state("mode"));
    assert_eq!(eval.values("mode"), ["fast"]);
}

#[test]
fn first_capture_replaces_defaults_instead_of_appending() {
    let registry = registry(vec![
        FlagSpec::new("mode")
            .with_tag("mode", "--")
            .consumes(1)
            .default_values(["fast"]),
    ]);

    let eval = evaluate(&registry, &["--mode", "slow"]).unwrap();
    assert_eq!(eval.values("mode"), ["slow"]);
}

#[test]
fn matching_is_exact_per_prefix() {
    let registry = registry(vec![
        FlagSpec::new("short").with_tag("v", "-"),
        FlagSpec::new("long").with_tag("v", "--"),
    ]);

    let eval = evaluate(&registry, &["-v"]).unwrap();
    assert!(eval.state("short"));
    assert!(!eval.state("long"));

    let eval = evaluate(&registry, &["--v"]).unwrap();
    assert!(!eval.state("short"));
    assert!(eval.state("long"));
}

#[test]
fn longer_tag_never_shadowed_by_shorter() {
    let registry = registry(vec![
        FlagSpec::new("verbose").with_tag("v", "-"),
        FlagSpec::new("version").with_tag("version", "-"),
    ]);

    let eval = evaluate(&registry, &["-version"]).unwrap();
    assert!(eval.state("version"));
    assert!(!eval.state("verbose"));
}

#[test]
fn repeated_non_multiple_flag_is_redundant() {
    let registry = registry(vec![FlagSpec::new("x").with_tag("x", "-")]);

    assert!(evaluate(&registry, &["-x"]).is_ok());
    let err = evaluate(&registry, &["-x", "-x"]).unwrap_err();
    assert_eq!(
        err,
        EvalError::RedundantArgument {
            id: "x".to_string()
        }
    );
}

#[test]
fn multiple_flag_appends_across_occurrences() {
    let registry = registry(vec![
        FlagSpec::new("define").with_tag("D", "-").consumes(1).multiple(),
    ]);

    let eval = evaluate(&registry, &["-D", "a", "-D", "b"]).unwrap();
    assert_eq!(eval.values("define"), ["a", "b"]);
}

#[test]
fn consume_two_round_trip() {
    let registry = registry(vec![FlagSpec::new("p").with_tag("p", "-").consumes(2)]);

    let eval = evaluate(&registry, &["-p", "a", "b"]).unwrap();
    assert_eq!(eval.values("p"), ["a", "b"]);
    assert_eq!(eval.last_value("p"), Some("b"));
    assert!(eval.captured("p"));
}

#[test]
fn abort_short_circuits_and_skips_required_checks() {
    let registry = registry(vec![
        FlagSpec::new("help").with_tag("h", "-").abort(),
        FlagSpec::new("name").with_tag("n", "-").consumes(1).required(),
    ]);

    let eval = evaluate(&registry, &["-h"]).unwrap();
    assert!(eval.aborted());
    assert_eq!(eval.aborted_by(), Some("help"));
    assert!(eval.state("help"));
}

#[test]
fn abort_is_found_anywhere_in_the_sequence() {
    let registry = registry(vec![
        FlagSpec::new("help").with_tag("help", "--").abort(),
        FlagSpec::new("name").with_tag("n", "-").consumes(1).required(),
    ]);

    // The pre-scan wins even though -n would fail on a missing value.
    let eval = evaluate(&registry, &["-n", "--help"]).unwrap();
    assert_eq!(eval.aborted_by(), Some("help"));
}

#[test]
fn multiple_positional_absorbs_a_run() {
    let registry = registry(vec![
        FlagSpec::new("files").multiple(),
        FlagSpec::new("verbose").with_tag("v", "-"),
    ]);

    let eval = evaluate(&registry, &["a.txt", "b.txt", "-v"]).unwrap();
    assert_eq!(eval.values("files"), ["a.txt", "b.txt"]);
    assert!(eval.state("verbose"));
    assert!(eval.state("files"));
}

#[test]
fn multiple_positional_resumes_after_tagged_flag() {
    let registry = registry(vec![
        FlagSpec::new("files").multiple(),
        FlagSpec::new("verbose").with_tag("v", "-"),
    ]);

    let eval = evaluate(&registry, &["a.txt", "-v", "b.txt"]).unwrap();
    assert_eq!(eval.values("files"), ["a.txt", "b.txt"]);
}

#[test]
fn positionals_fill_in_declaration_order() {
    let registry = registry(vec![
        FlagSpec::new("source").consumes(1),
        FlagSpec::new("dest").consumes(1),
    ]);

    let eval = evaluate(&registry, &["in.txt", "out.txt"]).unwrap();
    assert_eq!(eval.values("source"), ["in.txt"]);
    assert_eq!(eval.values("dest"), ["out.txt"]);
}

#[test]
fn fixed_arity_positional_consumes_a_pair() {
    let registry = registry(vec![FlagSpec::new("pair").consumes(2)]);

    let eval = evaluate(&registry, &["a", "b"]).unwrap();
    assert_eq!(eval.values("pair"), ["a", "b"]);
}

#[test]
fn unplaceable_token_is_unexpected() {
    let registry = registry(vec![FlagSpec::new("verbose").with_tag("v", "-")]);

    let err = evaluate(&registry, &["stray"]).unwrap_err();
    assert_eq!(
        err,
        EvalError::UnexpectedArgument {
            token: "stray".to_string()
        }
    );
}

#[test]
fn allow_list_rejects_outside_values() {
    let registry = registry(vec![
        FlagSpec::new("mode")
            .with_tag("mode", "--")
            .consumes(1)
            .allow(["fast", "slow"]),
    ]);

    let err = evaluate(&registry, &["--mode", "medium"]).unwrap_err();
    assert_eq!(
        err,
        EvalError::InvalidValue {
            id: "mode".to_string(),
            value: "medium".to_string()
        }
    );
}

#[test]
fn allow_list_applies_to_positional_runs() {
    let registry = registry(vec![
        FlagSpec::new("levels").multiple().allow(["low", "high"]),
    ]);

    assert!(evaluate(&registry, &["low", "high"]).is_ok());
    let err = evaluate(&registry, &["low", "mid"]).unwrap_err();
    assert!(matches!(err, EvalError::InvalidValue { .. }));
}

#[test]
fn overwrite_keeps_only_the_last_capture() {
    let registry = registry(vec![
        FlagSpec::new("out").with_tag("o", "-").consumes(1).overwrite(),
    ]);

    let eval = evaluate(&registry, &["-o", "a", "-o", "b"]).unwrap();
    assert_eq!(eval.values("out"), ["b"]);
}

#[test]
fn value_slot_never_swallows_a_tag() {
    let registry = registry(vec![
        FlagSpec::new("p").with_tag("p", "-").consumes(2),
        FlagSpec::new("verbose").with_tag("v", "-"),
    ]);

    let err = evaluate(&registry, &["-p", "a", "-v"]).unwrap_err();
    assert_eq!(
        err,
        EvalError::TokenMismatch {
            id: "p".to_string(),
            token: "-v".to_string()
        }
    );
}

#[test]
fn starved_flag_reports_missing_value() {
    let registry = registry(vec![FlagSpec::new("p").with_tag("p", "-").consumes(2)]);

    let err = evaluate(&registry, &["-p", "a"]).unwrap_err();
    assert_eq!(
        err,
        EvalError::MissingValue {
            id: "p".to_string(),
            expected: 2,
            found: 1
        }
    );
}

#[test]
fn absent_required_flag_reports_missing_argument() {
    let registry = registry(vec![
        FlagSpec::new("name").with_tag("n", "-").consumes(1).required(),
        FlagSpec::new("files").multiple(),
    ]);

    let err = evaluate(&registry, &["a.txt"]).unwrap_err();
    assert_eq!(
        err,
        EvalError::MissingArgument {
            id: "name".to_string()
        }
    );
}

#[test]
fn false_toggle_records_negative_state() {
    let registry = registry(vec![
        FlagSpec::new("color")
            .with_tag("color", "--")
            .with_toggle("no-color", "--", false)
            .default_state(true),
    ]);

    let eval = evaluate(&registry, &["--no-color"]).unwrap();
    assert!(!eval.state("color"));

    let eval = evaluate(&registry, &[] as &[&str]).unwrap();
    assert!(eval.state("color"));
}

#[test]
fn actions_observe_accepted_values_in_token_order() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let registry = registry(vec![
        FlagSpec::new("define")
            .with_tag("D", "-")
            .consumes(1)
            .multiple()
            .on_value(move |v| sink.lock().unwrap().push(v.to_string())),
        FlagSpec::new("verbose").with_tag("v", "-"),
    ]);

    evaluate(&registry, &["-D", "one", "-v", "-D", "two"]).unwrap();
    assert_eq!(*seen.lock().unwrap(), ["one", "two"]);
}

#[test]
fn abort_action_fires_once_with_empty_value() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let registry = registry(vec![
        FlagSpec::new("help")
            .with_tag("help", "--")
            .abort()
            .on_value(move |v| sink.lock().unwrap().push(v.to_string())),
    ]);

    evaluate(&registry, &["--help", "--help"]).unwrap();
    assert_eq!(*seen.lock().unwrap(), [""]);
}

#[test]
fn rejected_value_fires_no_action() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let registry = registry(vec![
        FlagSpec::new("mode")
            .with_tag("mode", "--")
            .consumes(1)
            .allow(["fast"])
            .on_value(move |v| sink.lock().unwrap().push(v.to_string())),
    ]);

    assert!(evaluate(&registry, &["--mode", "slow"]).is_err());
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn evaluator_is_reusable_across_calls() {
    let registry = registry(vec![
        FlagSpec::new("verbose").with_tag("v", "-"),
        FlagSpec::new("files").multiple(),
    ]);
    let evaluator = Evaluator::new(&registry);

    let first = evaluator.evaluate(&["-v"]).unwrap();
    let second = evaluator.evaluate(&["a.txt"]).unwrap();

    assert!(first.state("verbose"));
    assert!(first.values("files").is_empty());
    assert!(!second.state("verbose"));
    assert_eq!(second.values("files"), ["a.txt"]);
}

#[test]
fn empty_input_is_fine_without_required_flags() {
    let registry = registry(vec![FlagSpec::new("verbose").with_tag("v", "-")]);

    let eval = evaluate(&registry, &[] as &[&str]).unwrap();
    assert!(!eval.state("verbose"));
    assert!(!eval.aborted());
}

#[test]
fn tagless_pure_toggle_passes_the_token_onward() {
    // A tagless declaration with no arity acts as a positional pure
    // toggle: the triggering token marks it provided and is then
    // offered to the next eligible positional.
    let registry = registry(vec![
        FlagSpec::new("seen"),
        FlagSpec::new("files").multiple(),
    ]);

    let eval = evaluate(&registry, &["a.txt", "b.txt"]).unwrap();
    assert!(eval.state("seen"));
    assert!(eval.values("seen").is_empty());
    assert_eq!(eval.values("files"), ["a.txt", "b.txt"]);
}
