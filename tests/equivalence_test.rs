//! Integration tests for generator determinism and cross-strategy
//! equivalence of the formatted output.

use iterbench::dataset::{self, DatasetVariant};
use iterbench::sink::CaptureSink;
use iterbench::strategy::Strategy;
use std::collections::HashSet;

fn captured_output(strategy: Strategy, names: &[String]) -> Vec<String> {
    let mut sink = CaptureSink::new();
    strategy.run(names, &mut sink);
    sink.into_entries()
}

#[test]
fn five_names_list_is_fixed() {
    let names = dataset::generate(DatasetVariant::FiveNames);
    assert_eq!(names, ["Java", "Node", "JavaScript", "Rust", "Go"]);
}

#[test]
fn auto_generated_list_has_expected_shape() {
    let names = dataset::generate(DatasetVariant::AutoGeneratedNames);

    assert_eq!(names.len(), 1000);
    assert_eq!(names[0], "Alice Kim Underhill");
    assert_eq!(names[999], "Janice Taylen Diaz");

    let unique: HashSet<&String> = names.iter().collect();
    assert_eq!(unique.len(), 1000, "generated names must be distinct");
}

#[test]
fn generation_is_deterministic() {
    for variant in DatasetVariant::ALL {
        let first = dataset::generate(variant);
        let second = dataset::generate(variant);
        assert_eq!(first, second);
        assert_eq!(first.len(), dataset::expected_len(variant));
    }
}

#[test]
fn entries_pair_index_with_name() {
    for variant in DatasetVariant::ALL {
        let names = dataset::generate(variant);
        let entries = captured_output(Strategy::SinglePhase, &names);

        assert_eq!(entries.len(), names.len());
        for (i, name) in names.iter().enumerate() {
            assert_eq!(entries[i], format!("{i}: {name}"));
        }
    }
}

#[test]
fn all_strategies_produce_identical_sequences() {
    for variant in DatasetVariant::ALL {
        let names = dataset::generate(variant);
        let reference = captured_output(Strategy::TwoPhase, &names);

        for strategy in Strategy::ALL {
            assert_eq!(
                captured_output(strategy, &names),
                reference,
                "{strategy} diverged from reference output on {variant}"
            );
        }
    }
}

#[test]
fn variant_names_parse_back() {
    for variant in DatasetVariant::ALL {
        let parsed: DatasetVariant = variant.name().parse().unwrap();
        assert_eq!(parsed, variant);
    }

    assert!("no_such_variant".parse::<DatasetVariant>().is_err());
}
