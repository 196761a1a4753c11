use proptest::prelude::*;
use richcontext::{ConfigLoader, ExperimentConfig};

const KEYS: [&str; 10] = [
    "cross_validation_num_folds",
    "topn_n",
    "topn_num_items",
    "rival_relevance_threshold",
    "rival_seed",
    "rival_evaluation_strategy",
    "topic_model_num_topics",
    "fm_num_factors",
    "context_format",
    "business_type",
];

fn arb_config() -> impl Strategy<Value = ExperimentConfig> {
    (
        (any::<u32>(), any::<u32>(), any::<u32>()),
        -1.0e6f64..1.0e6,
        any::<i64>(),
        "[a-zA-Z][a-zA-Z0-9_]{0,11}",
        (any::<u32>(), any::<u32>()),
        "[a-z]{0,8}",
        "[a-z]{1,8}",
    )
        .prop_map(
            |((folds, top_n, items), threshold, seed, strategy, (topics, factors), format, dataset)| {
                ExperimentConfig::builder()
                    .with_cross_validation_num_folds(folds)
                    .with_top_n(top_n)
                    .with_topn_num_items(items)
                    .with_relevance_threshold(threshold)
                    .with_seed(seed)
                    .with_strategy(strategy)
                    .with_num_topics(topics)
                    .with_fm_num_factors(factors)
                    .with_context_format(format)
                    .with_dataset(dataset)
                    .build()
            },
        )
}

/// Render one YAML line per recognized key, using the record's own listing.
fn yaml_lines(config: &ExperimentConfig) -> Vec<(&'static str, String)> {
    let yaml = ConfigLoader::to_yaml(config).expect("record should render");
    let rendered: Vec<String> = yaml.lines().map(str::to_string).collect();
    KEYS.iter()
        .map(|key| {
            let line = rendered
                .iter()
                .find(|line| line.starts_with(&format!("{key}:")))
                .unwrap_or_else(|| panic!("{key} missing from:\n{yaml}"))
                .clone();
            (*key, line)
        })
        .collect()
}

proptest! {
    /// Property: writing a record out and reading it back is lossless
    #[test]
    fn prop_round_trip_preserves_record(config in arb_config()) {
        let yaml = ConfigLoader::to_yaml(&config).unwrap();
        let reloaded = ConfigLoader::load_from_str(&yaml, "round-trip").unwrap();
        prop_assert_eq!(reloaded, config);
    }

    /// Property: a document with any subset of keys binds exactly those keys
    #[test]
    fn prop_subset_binds_present_keys_only(
        config in arb_config(),
        mask in proptest::collection::vec(any::<bool>(), 10),
    ) {
        let lines = yaml_lines(&config);
        let document: String = lines
            .iter()
            .zip(&mask)
            .filter(|(_, keep)| **keep)
            .map(|((_, line), _)| format!("{line}\n"))
            .collect();

        let loaded = ConfigLoader::load_from_str(&document, "subset").unwrap();
        let zero = ExperimentConfig::default();
        let loaded_fields = loaded.fields();
        let full_fields = config.fields();
        let zero_fields = zero.fields();

        for (i, keep) in mask.iter().enumerate() {
            let expected = if *keep { &full_fields[i] } else { &zero_fields[i] };
            prop_assert_eq!(&loaded_fields[i], expected);
        }
    }

    /// Property: keys outside the recognized set never change the record
    #[test]
    fn prop_unknown_keys_are_ignored(
        config in arb_config(),
        extras in proptest::collection::btree_map("x_[a-z]{1,10}", any::<i32>(), 0..5),
    ) {
        let mut yaml = ConfigLoader::to_yaml(&config).unwrap();
        for (key, value) in &extras {
            yaml.push_str(&format!("{key}: {value}\n"));
        }

        let loaded = ConfigLoader::load_from_str(&yaml, "extras").unwrap();
        prop_assert_eq!(loaded, config);
    }
}
