//! Property tests for field extraction and policy parsing

use super::strategies::file_representable_config;
use nodeconf::config::{extract, RECOGNIZED_KEYS};
use nodeconf::policy::{Entry, Policy};
use proptest::collection::{btree_set, vec};
use proptest::prelude::*;
use std::path::Path;

#[test]
fn test_source_table_round_trip() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&file_representable_config(), |config| {
            let table = config.to_source_table();
            let reextracted = extract(&table, Path::new("/nonexistent")).unwrap();
            prop_assert_eq!(reextracted, config);
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_unknown_keys_are_all_reported_sorted() {
    let mut runner = proptest::test_runner::TestRunner::default();
    let unknown = btree_set(
        "[a-z_]{1,12}".prop_filter("must not be a recognised key", |key| {
            !RECOGNIZED_KEYS.contains(&key.as_str())
        }),
        1..5,
    );

    runner
        .run(&(file_representable_config(), unknown), |(config, unknown)| {
            let mut table = config.to_source_table();
            for key in &unknown {
                table.insert(key.clone(), toml::Value::Integer(1));
            }

            let err = extract(&table, Path::new("/nonexistent")).unwrap_err();
            let expected: Vec<&str> = unknown.iter().map(String::as_str).collect();
            prop_assert_eq!(
                err.to_string(),
                format!("Invalid keys in validator config: {}", expected.join(", "))
            );
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_policy_parse_keeps_rule_order() {
    let mut runner = proptest::test_runner::TestRunner::default();
    let rules = vec(("[a-zA-Z0-9*]{1,10}", 0u8..3), 0..12);

    runner
        .run(&rules, |rules| {
            let mut text = String::new();
            let mut expected = Vec::new();
            for (key, kind) in &rules {
                match *kind {
                    0 => {
                        text.push_str(&format!("PERMIT_KEY {}\n", key));
                        expected.push(Entry::permit(key.as_str()));
                    }
                    1 => {
                        text.push_str(&format!("DENY_KEY {}\n", key));
                        expected.push(Entry::deny(key.as_str()));
                    }
                    _ => text.push_str(&format!("IGNORED {}\n\n", key)),
                }
            }

            let policy = Policy::parse("generated.rules", &text);
            prop_assert_eq!(policy.entries, expected);
            Ok(())
        })
        .unwrap();
}
