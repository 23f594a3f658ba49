use serde::{Deserialize, Serialize};

/// API ingress configuration, read from `modules.api_ingress`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ApiIngressConfig {
    /// Mount `/openapi.json` and `/docs`.
    #[serde(default = "default_enable_docs")]
    pub enable_docs: bool,
    #[serde(default)]
    pub cors_enabled: bool,
}

impl Default for ApiIngressConfig {
    fn default() -> Self {
        Self {
            enable_docs: default_enable_docs(),
            cors_enabled: false,
        }
    }
}

fn default_enable_docs() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn docs_are_on_by_default() {
        let cfg: ApiIngressConfig = serde_json::from_str("{}").unwrap();
        assert!(cfg.enable_docs);
        assert!(!cfg.cors_enabled);
        assert!(ApiIngressConfig::default().enable_docs);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let res: Result<ApiIngressConfig, _> = serde_json::from_str(r#"{"bind_addr":"x"}"#);
        assert!(res.is_err());
    }
}
