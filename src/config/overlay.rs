//! Allow-list overlay of bootstrap values onto a file-sourced configuration.
//!
//! When a configuration document is used, only the fields listed in
//! [`FLAG_OVERLAY`] are carried over from flags and environment, and only
//! when non-empty. Every other field keeps its document value.

use super::model::Config;

/// One field copied by the overlay.
#[derive(Debug, Clone, Copy)]
pub struct OverlayRule {
    /// Field name, for logs and tests
    pub field: &'static str,
    get: fn(&Config) -> &String,
    get_mut: fn(&mut Config) -> &mut String,
}

impl OverlayRule {
    /// Copies the field from `from` to `onto` if it is non-empty in `from`.
    ///
    /// Returns true if a value was copied.
    pub fn apply(&self, from: &Config, onto: &mut Config) -> bool {
        let value = (self.get)(from);
        if value.is_empty() {
            return false;
        }
        value.clone_into((self.get_mut)(onto));
        true
    }
}

/// Fields that flags and environment may override on top of a document.
pub static FLAG_OVERLAY: &[OverlayRule] = &[
    OverlayRule {
        field: "dev_login",
        get: |c| &c.dev_login,
        get_mut: |c| &mut c.dev_login,
    },
    OverlayRule {
        field: "listen",
        get: |c| &c.listen,
        get_mut: |c| &mut c.listen,
    },
    OverlayRule {
        field: "dev_pass",
        get: |c| &c.dev_pass,
        get_mut: |c| &mut c.dev_pass,
    },
];

/// Applies every rule in `rules` from `from` onto `onto`.
pub fn apply(rules: &[OverlayRule], from: &Config, onto: &mut Config) {
    for rule in rules {
        if rule.apply(from, onto) {
            tracing::debug!(field = rule.field, "Bootstrap value overrides document");
        }
    }
}
