use crate::data::persistence::Persistable;
use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppSettings {
    pub user_name: String,
    pub user_role: String,
    pub quote: Quote,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            user_name: "Suman".to_string(),
            user_role: "Team Lead".to_string(),
            quote: Quote {
                text: "When it comes to luck, you make your own.".to_string(),
                author: "Bruce Springsteen".to_string(),
            },
        }
    }
}

/// Wrapper that reads the `settings` key from config.yaml, so the file
/// stays extensible — serde ignores unknown sibling keys by default.
#[derive(Serialize, Deserialize, Default, Debug)]
struct SettingsWrapper {
    #[serde(default)]
    settings: AppSettings,
}

impl Persistable for SettingsWrapper {
    fn filename() -> &'static str {
        "config.yaml"
    }
    fn is_json() -> bool {
        false
    }
}

impl AppSettings {
    pub fn load() -> Result<Self> {
        Ok(SettingsWrapper::load()?.settings)
    }

    pub fn save_to(&self, dir: &std::path::Path) -> Result<()> {
        let wrapper = SettingsWrapper {
            settings: self.clone(),
        };
        Persistable::save_to(&wrapper, dir)
    }
}
