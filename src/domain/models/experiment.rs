use serde::{Deserialize, Serialize};
use std::fmt;

/// Experiment parameters for a recommender evaluation run.
///
/// Every field maps to one top-level key of the experiment YAML file. Keys
/// that are missing (or explicitly `null`) leave the field at its zero value,
/// and keys the record does not know about are ignored.
///
/// The record has no setters: once loaded it stays as it was read. Use
/// [`ExperimentConfig::builder`] to assemble one in code.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Number of folds used for cross-validation
    #[serde(default, deserialize_with = "lenient::integer")]
    cross_validation_num_folds: u32,

    /// Length of each top-N recommendation list
    #[serde(rename = "topn_n", default, deserialize_with = "lenient::integer")]
    top_n: u32,

    /// Number of candidate items ranked for top-N evaluation
    #[serde(default, deserialize_with = "lenient::integer")]
    topn_num_items: u32,

    /// Rating at or above which an item counts as relevant
    #[serde(
        rename = "rival_relevance_threshold",
        default,
        deserialize_with = "lenient::float"
    )]
    relevance_threshold: f64,

    /// Random seed shared by the evaluation tooling
    #[serde(rename = "rival_seed", default, deserialize_with = "lenient::integer")]
    seed: i64,

    /// Name of the evaluation strategy, passed through untouched
    #[serde(
        rename = "rival_evaluation_strategy",
        default,
        deserialize_with = "lenient::text"
    )]
    strategy: String,

    #[serde(
        rename = "topic_model_num_topics",
        default,
        deserialize_with = "lenient::integer"
    )]
    num_topics: u32,

    #[serde(default, deserialize_with = "lenient::integer")]
    fm_num_factors: u32,

    #[serde(default, deserialize_with = "lenient::text")]
    context_format: String,

    /// Dataset identifier (`business_type` in the YAML file)
    #[serde(rename = "business_type", default, deserialize_with = "lenient::text")]
    dataset: String,
}

impl ExperimentConfig {
    /// Start building a record with every field at its zero value.
    pub fn builder() -> ExperimentConfigBuilder {
        ExperimentConfigBuilder::default()
    }

    pub const fn cross_validation_num_folds(&self) -> u32 {
        self.cross_validation_num_folds
    }

    pub const fn top_n(&self) -> u32 {
        self.top_n
    }

    pub const fn topn_num_items(&self) -> u32 {
        self.topn_num_items
    }

    pub const fn relevance_threshold(&self) -> f64 {
        self.relevance_threshold
    }

    pub const fn seed(&self) -> i64 {
        self.seed
    }

    pub fn strategy(&self) -> &str {
        &self.strategy
    }

    pub const fn num_topics(&self) -> u32 {
        self.num_topics
    }

    pub const fn fm_num_factors(&self) -> u32 {
        self.fm_num_factors
    }

    pub fn context_format(&self) -> &str {
        &self.context_format
    }

    pub fn dataset(&self) -> &str {
        &self.dataset
    }

    /// List every field as `(yaml key, rendered value)`, in file order.
    ///
    /// Used for diagnostics and for the CLI table, so the external key names
    /// are what operators see.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                "cross_validation_num_folds",
                self.cross_validation_num_folds.to_string(),
            ),
            ("topn_n", self.top_n.to_string()),
            ("topn_num_items", self.topn_num_items.to_string()),
            (
                "rival_relevance_threshold",
                format!("{:?}", self.relevance_threshold),
            ),
            ("rival_seed", self.seed.to_string()),
            ("rival_evaluation_strategy", self.strategy.clone()),
            ("topic_model_num_topics", self.num_topics.to_string()),
            ("fm_num_factors", self.fm_num_factors.to_string()),
            ("context_format", self.context_format.clone()),
            ("business_type", self.dataset.clone()),
        ]
    }
}

impl fmt::Display for ExperimentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ExperimentConfig{{cross_validation_num_folds={}, topn_n={}, topn_num_items={}, \
             rival_relevance_threshold={:?}, rival_seed={}, rival_evaluation_strategy='{}', \
             topic_model_num_topics={}, fm_num_factors={}, context_format='{}', business_type='{}'}}",
            self.cross_validation_num_folds,
            self.top_n,
            self.topn_num_items,
            self.relevance_threshold,
            self.seed,
            self.strategy,
            self.num_topics,
            self.fm_num_factors,
            self.context_format,
            self.dataset,
        )
    }
}

// Thresholds compare by bit pattern so a `.nan` threshold still equals itself
// after a save and reload.
impl PartialEq for ExperimentConfig {
    fn eq(&self, other: &Self) -> bool {
        self.cross_validation_num_folds == other.cross_validation_num_folds
            && self.top_n == other.top_n
            && self.topn_num_items == other.topn_num_items
            && self.relevance_threshold.to_bits() == other.relevance_threshold.to_bits()
            && self.seed == other.seed
            && self.strategy == other.strategy
            && self.num_topics == other.num_topics
            && self.fm_num_factors == other.fm_num_factors
            && self.context_format == other.context_format
            && self.dataset == other.dataset
    }
}

/// Builder for [`ExperimentConfig`].
#[derive(Debug, Clone, Default)]
pub struct ExperimentConfigBuilder {
    config: ExperimentConfig,
}

impl ExperimentConfigBuilder {
    #[must_use]
    pub fn with_cross_validation_num_folds(mut self, folds: u32) -> Self {
        self.config.cross_validation_num_folds = folds;
        self
    }

    #[must_use]
    pub fn with_top_n(mut self, top_n: u32) -> Self {
        self.config.top_n = top_n;
        self
    }

    #[must_use]
    pub fn with_topn_num_items(mut self, num_items: u32) -> Self {
        self.config.topn_num_items = num_items;
        self
    }

    #[must_use]
    pub fn with_relevance_threshold(mut self, threshold: f64) -> Self {
        self.config.relevance_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: i64) -> Self {
        self.config.seed = seed;
        self
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.config.strategy = strategy.into();
        self
    }

    #[must_use]
    pub fn with_num_topics(mut self, num_topics: u32) -> Self {
        self.config.num_topics = num_topics;
        self
    }

    #[must_use]
    pub fn with_fm_num_factors(mut self, num_factors: u32) -> Self {
        self.config.fm_num_factors = num_factors;
        self
    }

    #[must_use]
    pub fn with_context_format(mut self, context_format: impl Into<String>) -> Self {
        self.config.context_format = context_format.into();
        self
    }

    #[must_use]
    pub fn with_dataset(mut self, dataset: impl Into<String>) -> Self {
        self.config.dataset = dataset.into();
        self
    }

    pub fn build(self) -> ExperimentConfig {
        self.config
    }
}

/// Scalar coercion for experiment fields.
///
/// YAML `null` maps to the zero value. Integers also accept whole floats
/// (`8.0`) and strings holding either, floats accept integers and numeric
/// strings, and text fields accept any scalar.
mod lenient {
    use serde::de::{self, Deserializer, Unexpected, Visitor};
    use std::fmt;
    use std::marker::PhantomData;
    use std::str::FromStr;

    pub fn integer<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + TryFrom<i64> + TryFrom<u64> + FromStr,
    {
        deserializer.deserialize_any(IntegerVisitor(PhantomData))
    }

    pub fn float<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FloatVisitor)
    }

    pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TextVisitor)
    }

    struct IntegerVisitor<T>(PhantomData<T>);

    impl<'de, T> Visitor<'de> for IntegerVisitor<T>
    where
        T: Default + TryFrom<i64> + TryFrom<u64> + FromStr,
    {
        type Value = T;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a whole number in range, or a string holding one")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<T, E> {
            <T as TryFrom<i64>>::try_from(v)
                .map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<T, E> {
            <T as TryFrom<u64>>::try_from(v)
                .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<T, E> {
            whole_number::<T>(v).ok_or_else(|| E::invalid_value(Unexpected::Float(v), &self))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
            let trimmed = v.trim();
            trimmed
                .parse()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().and_then(whole_number::<T>))
                .ok_or_else(|| E::invalid_value(Unexpected::Str(v), &self))
        }

        fn visit_unit<E: de::Error>(self) -> Result<T, E> {
            Ok(T::default())
        }

        fn visit_none<E: de::Error>(self) -> Result<T, E> {
            Ok(T::default())
        }

        fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<T, D::Error> {
            deserializer.deserialize_any(self)
        }
    }

    /// Convert a float with no fractional part; fractions are rejected
    /// rather than truncated.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn whole_number<T: TryFrom<i64>>(v: f64) -> Option<T> {
        let whole = v.is_finite()
            && v.fract() == 0.0
            && v >= i64::MIN as f64
            && v < i64::MAX as f64;
        if !whole {
            return None;
        }
        <T as TryFrom<i64>>::try_from(v as i64).ok()
    }

    struct FloatVisitor;

    impl<'de> Visitor<'de> for FloatVisitor {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number, or a string holding one")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
            Ok(v)
        }

        #[allow(clippy::cast_precision_loss)]
        fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
            Ok(v as f64)
        }

        #[allow(clippy::cast_precision_loss)]
        fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
            v.trim()
                .parse()
                .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
        }

        fn visit_unit<E: de::Error>(self) -> Result<f64, E> {
            Ok(0.0)
        }

        fn visit_none<E: de::Error>(self) -> Result<f64, E> {
            Ok(0.0)
        }

        fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<f64, D::Error> {
            deserializer.deserialize_any(self)
        }
    }

    struct TextVisitor;

    impl<'de> Visitor<'de> for TextVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a scalar value")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_owned())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i128<E: de::Error>(self, v: i128) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u128<E: de::Error>(self, v: u128) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            Ok(format!("{v:?}"))
        }

        fn visit_unit<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }

        fn visit_none<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }

        fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<String, D::Error> {
            deserializer.deserialize_any(self)
        }
    }
}
