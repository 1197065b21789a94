use std::time::Duration;

use eyre::{Result, WrapErr};

use crate::error::Error;

pub const HELPER_DELAY_ENV: &str = "MENTAL_AUTH_HELPER_DELAY_MS";
pub const BRAND_ENV: &str = "MENTAL_AUTH_BRAND";

#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    /// How long the signup helper stays up after a failed submission.
    pub helper_hide_delay: Duration,
    pub brand: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            helper_hide_delay: Duration::from_millis(4000),
            brand: "MentalHealth".to_string(),
        }
    }
}

impl PageConfig {
    /// Reads overrides from the environment, keeping defaults for unset variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(raw) = lookup(HELPER_DELAY_ENV) {
            let millis = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| Error::InvalidConfig {
                    name: HELPER_DELAY_ENV,
                    value: raw.clone(),
                })
                .wrap_err("failed to read page config")?;
            config.helper_hide_delay = Duration::from_millis(millis);
        }
        if let Some(brand) = lookup(BRAND_ENV).filter(|brand| !brand.trim().is_empty()) {
            config.brand = brand;
        }
        Ok(config)
    }

    pub fn signup_success_message(&self) -> String {
        format!("Account created — welcome to {} (demo).", self.brand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_without_env() -> Result<()> {
        let config = PageConfig::from_lookup(lookup_from(&[]))?;
        assert_eq!(config, PageConfig::default());
        assert_eq!(config.helper_hide_delay, Duration::from_millis(4000));
        assert_eq!(
            config.signup_success_message(),
            "Account created — welcome to MentalHealth (demo)."
        );
        Ok(())
    }

    #[test]
    fn test_overrides() -> Result<()> {
        let config = PageConfig::from_lookup(lookup_from(&[
            (HELPER_DELAY_ENV, " 250 "),
            (BRAND_ENV, "Calm"),
        ]))?;
        assert_eq!(config.helper_hide_delay, Duration::from_millis(250));
        assert_eq!(config.brand, "Calm");
        Ok(())
    }

    #[test]
    fn test_blank_brand_keeps_default() -> Result<()> {
        let config = PageConfig::from_lookup(lookup_from(&[(BRAND_ENV, "   ")]))?;
        assert_eq!(config.brand, "MentalHealth");
        Ok(())
    }

    #[test]
    fn test_malformed_delay() {
        let report = PageConfig::from_lookup(lookup_from(&[(HELPER_DELAY_ENV, "soon")]))
            .unwrap_err();
        assert_eq!(
            report.downcast_ref::<Error>(),
            Some(&Error::InvalidConfig {
                name: HELPER_DELAY_ENV,
                value: "soon".to_string(),
            })
        );
    }
}
