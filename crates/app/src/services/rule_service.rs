//! Rule service — use-cases for managing SmartLaunch rules.
//!
//! The rule store has whole-list semantics, so every mutation loads the
//! list, edits it in memory, and writes the entire list back.

use smartlaunch_domain::error::{NotFoundError, SmartLaunchError};
use smartlaunch_domain::id::RuleId;
use smartlaunch_domain::rule::SmartLaunchRule;

use crate::ports::RuleStore;

/// Application service for SmartLaunch rule CRUD.
pub struct RuleService<S> {
    store: S,
}

impl<S: RuleStore> RuleService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// List all rules in stored order.
    ///
    /// Order matters: the launch engine resolves overlapping geofences by
    /// list position.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn list_rules(&self) -> Result<Vec<SmartLaunchRule>, SmartLaunchError> {
        self.store.load().await
    }

    /// Look up a rule by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`SmartLaunchError::NotFound`] when no rule with `id`
    /// exists, or a storage error from the store.
    pub async fn get_rule(&self, id: RuleId) -> Result<SmartLaunchRule, SmartLaunchError> {
        let rules = self.store.load().await?;
        rules
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| not_found(id).into())
    }

    /// Create a new rule after validating domain invariants.
    ///
    /// When the rule has no name, it gets the rider app's default label.
    /// The new rule is appended at the end of the list, giving existing
    /// rules precedence when geofences overlap.
    ///
    /// # Errors
    ///
    /// Returns [`SmartLaunchError::Validation`] if invariants fail, or a
    /// storage error propagated from the store.
    #[tracing::instrument(skip(self, rule), fields(stop_id = %rule.stop_id))]
    pub async fn create_rule(
        &self,
        mut rule: SmartLaunchRule,
    ) -> Result<SmartLaunchRule, SmartLaunchError> {
        rule.validate()?;
        if rule.name.is_none() {
            rule.name = Some(SmartLaunchRule::default_name(&rule.stop_id));
        }

        let mut rules = self.store.load().await?;
        rules.push(rule.clone());
        self.store.save(&rules).await?;
        Ok(rule)
    }

    /// Replace an existing rule, keeping its position in the list.
    ///
    /// # Errors
    ///
    /// Returns [`SmartLaunchError::Validation`] if invariants fail,
    /// [`SmartLaunchError::NotFound`] when the id is unknown, or a
    /// storage error from the store.
    #[tracing::instrument(skip(self, rule), fields(rule_id = %rule.id))]
    pub async fn update_rule(
        &self,
        rule: SmartLaunchRule,
    ) -> Result<SmartLaunchRule, SmartLaunchError> {
        rule.validate()?;

        let mut rules = self.store.load().await?;
        let slot = rules
            .iter_mut()
            .find(|r| r.id == rule.id)
            .ok_or_else(|| not_found(rule.id))?;
        *slot = rule.clone();
        self.store.save(&rules).await?;
        Ok(rule)
    }

    /// Flip a rule's enabled flag, returning the new state.
    ///
    /// # Errors
    ///
    /// Returns [`SmartLaunchError::NotFound`] when the id is unknown, or a
    /// storage error from the store.
    #[tracing::instrument(skip(self))]
    pub async fn toggle_enabled(&self, id: RuleId) -> Result<SmartLaunchRule, SmartLaunchError> {
        let mut rules = self.store.load().await?;
        let rule = rules
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| not_found(id))?;
        rule.enabled = !rule.enabled;
        let toggled = rule.clone();
        self.store.save(&rules).await?;
        Ok(toggled)
    }

    /// Delete a rule by id.
    ///
    /// # Errors
    ///
    /// Returns [`SmartLaunchError::NotFound`] when the id is unknown, or a
    /// storage error from the store.
    #[tracing::instrument(skip(self))]
    pub async fn delete_rule(&self, id: RuleId) -> Result<(), SmartLaunchError> {
        let mut rules = self.store.load().await?;
        let before = rules.len();
        rules.retain(|r| r.id != id);
        if rules.len() == before {
            return Err(not_found(id).into());
        }
        self.store.save(&rules).await?;
        Ok(())
    }
}

fn not_found(id: RuleId) -> NotFoundError {
    NotFoundError {
        entity: "SmartLaunchRule",
        id: id.to_string(),
    }
}
