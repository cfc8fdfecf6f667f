use super::*;

// =============================================================================
// LEVEL A: EXHAUSTIVE DATA TYPE TESTING
// =============================================================================

macro_rules! test_enum_completeness {
    ($enum_type:ty, $test_name:ident) => {
        #[test]
        fn $test_name() {
            for variant in <$enum_type>::value_variants() {
                let possible_value = variant.to_possible_value();
                assert!(
                    possible_value.is_some(),
                    "PossibleValue should exist for all variants"
                );

                // Round-trip through the primary name
                let possible_val = possible_value.unwrap();
                let primary_name = possible_val.get_name();
                let parsed: Result<$enum_type, _> = primary_name.parse();
                assert_eq!(
                    parsed.unwrap(),
                    *variant,
                    "Round-trip should preserve variant"
                );
            }
        }
    };
}

macro_rules! test_fromstr_aliases {
    ($enum_type:ty, $test_name:ident, $expected_mappings:expr) => {
        #[test]
        fn $test_name() {
            let mappings: &[(&str, $enum_type)] = &$expected_mappings;

            for (input, expected) in mappings {
                let parsed: Result<$enum_type, _> = input.parse();
                assert!(
                    parsed.is_ok(),
                    "Failed to parse '{}' for {}",
                    input,
                    stringify!($enum_type)
                );
                assert_eq!(
                    parsed.unwrap(),
                    *expected,
                    "Wrong variant for input '{}', expected {:?}",
                    input,
                    expected
                );
            }
        }
    };
}

test_enum_completeness!(LogLevel, test_log_level_completeness);
test_enum_completeness!(LogFormat, test_log_format_completeness);
test_enum_completeness!(LogOutput, test_log_output_completeness);
test_enum_completeness!(ColorIntent, test_color_intent_completeness);
test_enum_completeness!(GraphDirection, test_graph_direction_completeness);
test_enum_completeness!(ReductionAction, test_reduction_action_completeness);
test_enum_completeness!(GraphMode, test_graph_mode_completeness);

test_fromstr_aliases!(
    LogLevel,
    test_log_level_aliases,
    [
        ("error", LogLevel::Error),
        ("err", LogLevel::Error),
        ("warn", LogLevel::Warning),
        ("warning", LogLevel::Warning),
        ("info", LogLevel::Info),
        ("debug", LogLevel::Debug),
        ("trace", LogLevel::Trace),
        ("verbose", LogLevel::Trace),
    ]
);

test_fromstr_aliases!(
    GraphDirection,
    test_graph_direction_case_insensitive,
    [
        ("LR", GraphDirection::LR),
        ("lr", GraphDirection::LR),
        ("TD", GraphDirection::TD),
        ("tb", GraphDirection::TD),
        ("Rl", GraphDirection::RL),
        ("bt", GraphDirection::BT),
    ]
);

test_fromstr_aliases!(
    ReductionAction,
    test_reduction_action_case_insensitive,
    [
        ("Color", ReductionAction::Color),
        ("color", ReductionAction::Color),
        ("REMOVE", ReductionAction::Remove),
        ("none", ReductionAction::None),
    ]
);

test_fromstr_aliases!(
    ColorIntent,
    test_color_intent_aliases,
    [
        ("auto", ColorIntent::Auto),
        ("always", ColorIntent::Always),
        ("on", ColorIntent::Always),
        ("never", ColorIntent::Never),
        ("off", ColorIntent::Never),
    ]
);

// =============================================================================
// LEVEL B: BEHAVIOR
// =============================================================================

#[test]
fn test_log_level_from_verbosity_boundary_conditions() {
    assert_eq!(LogLevel::from_verbosity(0), LogLevel::Error);
    assert_eq!(LogLevel::from_verbosity(1), LogLevel::Warning);
    assert_eq!(LogLevel::from_verbosity(2), LogLevel::Info);
    assert_eq!(LogLevel::from_verbosity(3), LogLevel::Debug);
    assert_eq!(LogLevel::from_verbosity(4), LogLevel::Trace);
    assert_eq!(LogLevel::from_verbosity(u8::MAX), LogLevel::Trace);
}

#[test]
fn test_invalid_graph_mode_reports_value() {
    let err = "Everything".parse::<GraphMode>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failed to parse configuration value 'Everything': invalid graph mode"
    );
}

#[test]
fn test_direction_display_matches_mermaid_keyword() {
    assert_eq!(GraphDirection::LR.to_string(), "LR");
    assert_eq!(GraphDirection::TD.to_string(), "TD");
    assert_eq!(GraphDirection::RL.to_string(), "RL");
    assert_eq!(GraphDirection::BT.to_string(), "BT");
}

#[test]
fn test_color_intent_resolution_is_explicit_when_forced() {
    assert!(ColorIntent::Always.resolve());
    assert!(!ColorIntent::Never.resolve());
}
