//! Page Configuration
//!
//! Element ids, selectors and timings used by the form behaviors. Defaults
//! match the policy templates; a page may override any key with a JSON block:
//!
//! ```html
//! <script type="application/json" id="policy-form-config">
//!   { "bannerDismissMs": 8000, "stalePolicy": "last_resolved_wins" }
//! </script>
//! ```

use std::time::Duration;

use serde::Deserialize;

use crate::dropdown::StalePolicy;
use crate::error::FormError;

/// Id of the optional JSON override element
pub const CONFIG_ELEMENT_ID: &str = "policy-form-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormConfig {
    /// Parent selector (TypeBien)
    pub parent_select_id: String,
    /// Dependent selector (SousTypeBien)
    pub child_select_id: String,
    /// Label of the empty-value first option of the dependent selector
    pub placeholder_label: String,
    /// Base path; the parent id is appended as one path segment
    pub sous_types_endpoint: String,
    pub digit_input_selector: String,
    pub banner_selector: String,
    pub banner_dismiss_ms: u64,
    pub stale_policy: StalePolicy,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            parent_select_id: "TypeBienID".to_string(),
            child_select_id: "SousTypeBienID".to_string(),
            placeholder_label: "Select Sous Type Bien".to_string(),
            sous_types_endpoint: "/api/sous-types".to_string(),
            digit_input_selector: r#"input[type="tel"], input[type="number"]"#.to_string(),
            banner_selector: ".alert".to_string(),
            banner_dismiss_ms: 5000,
            stale_policy: StalePolicy::default(),
        }
    }
}

impl FormConfig {
    pub fn from_json(text: &str) -> Result<Self, FormError> {
        serde_json::from_str(text).map_err(|e| FormError::Config(e.to_string()))
    }

    pub fn banner_dismiss_delay(&self) -> Duration {
        Duration::from_millis(self.banner_dismiss_ms)
    }
}
