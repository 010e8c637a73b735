use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Environment variable consulted by [`EngineConfig::from_env`].
pub const CASE_POLICY_ENV: &str = "TERMDEX_CASE_POLICY";

/// How term casing is treated by ingestion and queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CasePolicy {
    /// Store terms as written. Lookup and IDF match ignoring case, while term
    /// frequency and ranking candidates match the exact spelling.
    #[default]
    Preserve,
    /// Case fold terms at ingestion and every query term before use.
    Fold,
}

impl CasePolicy {
    pub fn folds(self) -> bool {
        matches!(self, CasePolicy::Fold)
    }
}

impl FromStr for CasePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preserve" => Ok(CasePolicy::Preserve),
            "fold" | "lowercase" => Ok(CasePolicy::Fold),
            other => Err(format!("unknown case policy '{other}' (expected 'preserve' or 'fold')")),
        }
    }
}

impl fmt::Display for CasePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CasePolicy::Preserve => f.write_str("preserve"),
            CasePolicy::Fold => f.write_str("fold"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub case_policy: CasePolicy,
}

impl EngineConfig {
    /// Defaults, overridden by `TERMDEX_CASE_POLICY` when it holds a valid value.
    pub fn from_env() -> Self {
        Self::from_var(CASE_POLICY_ENV)
    }

    fn from_var(name: &str) -> Self {
        let mut cfg = Self::default();
        if let Ok(raw) = std::env::var(name) {
            match raw.parse::<CasePolicy>() {
                Ok(policy) => cfg.case_policy = policy,
                Err(err) => tracing::warn!(env = name, %err, "ignoring invalid value"),
            }
        }
        tracing::debug!(case_policy = %cfg.case_policy, "loaded engine config");
        cfg
    }

    /// Apply the case policy to a term coming from a query.
    pub(crate) fn normalize<'a>(&self, term: &'a str) -> std::borrow::Cow<'a, str> {
        if self.case_policy.folds() {
            std::borrow::Cow::Owned(crate::tokenizer::fold_case(term))
        } else {
            std::borrow::Cow::Borrowed(term)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_policies() {
        assert_eq!("preserve".parse::<CasePolicy>(), Ok(CasePolicy::Preserve));
        assert_eq!(" FOLD ".parse::<CasePolicy>(), Ok(CasePolicy::Fold));
        assert!("upper".parse::<CasePolicy>().is_err());
        assert_eq!(CasePolicy::Fold.to_string(), "fold");
    }

    #[test]
    fn deserializes_from_json() {
        let cfg: EngineConfig = serde_json::from_str(r#"{"case_policy":"fold"}"#).unwrap();
        assert_eq!(cfg.case_policy, CasePolicy::Fold);
        let cfg: EngineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, EngineConfig::default());
    }

    #[test]
    fn env_overrides_only_valid_values() {
        let name = "TERMDEX_TEST_CASE_POLICY";
        std::env::remove_var(name);
        assert_eq!(EngineConfig::from_var(name), EngineConfig::default());

        std::env::set_var(name, "fold");
        assert_eq!(EngineConfig::from_var(name).case_policy, CasePolicy::Fold);

        std::env::set_var(name, "sideways");
        assert_eq!(EngineConfig::from_var(name), EngineConfig::default());

        std::env::remove_var(name);
    }

    #[test]
    fn normalize_follows_policy() {
        let keep = EngineConfig::default();
        assert_eq!(keep.normalize("Cat"), "Cat");
        let fold = EngineConfig { case_policy: CasePolicy::Fold };
        assert_eq!(fold.normalize("Cat"), "cat");
    }
}
