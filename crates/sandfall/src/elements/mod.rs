//! Per-element update functions and the table that dispatches to them.

mod sand;

use std::fmt;

use crate::api::SandApi;
use crate::cell::Material;

/// Movement rule for one material, run once per occupied cell per tick.
pub type UpdateFn = fn(&mut SandApi);

/// Material tag → movement rule.
///
/// Materials without an entry are inert: the tick loop leaves them where
/// they are. Water, Stone and Fire ship without rules.
#[derive(Clone, Copy)]
pub struct RuleTable {
    rules: [Option<UpdateFn>; Material::COUNT],
}

impl RuleTable {
    /// A table with no rules; every material is inert.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            rules: [None; Material::COUNT],
        }
    }

    pub fn register(&mut self, material: Material, rule: UpdateFn) {
        self.rules[material as usize] = Some(rule);
    }

    #[must_use]
    pub fn with(mut self, material: Material, rule: UpdateFn) -> Self {
        self.register(material, rule);
        self
    }

    /// Empty never moves, even if a rule was registered for it.
    #[must_use]
    pub fn rule(&self, material: Material) -> Option<UpdateFn> {
        match material {
            Material::Empty => None,
            _ => self.rules[material as usize],
        }
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::empty().with(Material::Sand, sand::update_sand)
    }
}

impl fmt::Debug for RuleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let active = Material::ALL
            .iter()
            .filter(|material| self.rule(**material).is_some());
        f.debug_set().entries(active).finish()
    }
}
