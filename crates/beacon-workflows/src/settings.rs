//! Conversions from `beacon-config` sections into publisher settings.

use beacon_config::{AccountsSection, Config, DocumentsSection};

use crate::account::AccountSettings;
use crate::document::DocumentSettings;

impl From<&AccountsSection> for AccountSettings {
    fn from(section: &AccountsSection) -> Self {
        Self {
            test_mode: section.test_mode,
        }
    }
}

impl From<&DocumentsSection> for DocumentSettings {
    fn from(section: &DocumentsSection) -> Self {
        Self {
            spell_check: section.spell_check,
            auto_backup: section.auto_backup,
            save_on_close: section.save_on_close,
        }
    }
}

impl From<&Config> for AccountSettings {
    fn from(config: &Config) -> Self {
        Self::from(&config.accounts)
    }
}

impl From<&Config> for DocumentSettings {
    fn from(config: &Config) -> Self {
        Self::from(&config.documents)
    }
}
