//! SmartLaunch rule — geofence + optional time window that triggers
//! automatic navigation to a stop.
//!
//! Rules are value objects with no identity beyond their id. They are
//! persisted and exchanged as whole lists, serialized with the camelCase
//! field names the original rider app stored (`stopId`, `radiusMeters`, …).

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{SmartLaunchError, ValidationError};
use crate::geo::{self, Point};
use crate::id::{RuleId, StopId};
use crate::time::parse_hhmm;

/// A geofence + time-window rule that auto-opens a stop page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartLaunchRule {
    pub id: RuleId,
    /// Optional display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Stop to navigate to when the rule matches.
    pub stop_id: StopId,
    /// Geofence circle center, decimal degrees.
    pub center: Point,
    /// Geofence circle radius, meters. Always positive.
    pub radius_meters: f64,
    /// Start of the active window, `"HH:MM"` 24-hour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// End of the active window, `"HH:MM"` 24-hour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Disabled rules are never matched. Absent in stored data means enabled.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl SmartLaunchRule {
    /// Create a builder for constructing a [`SmartLaunchRule`].
    #[must_use]
    pub fn builder() -> SmartLaunchRuleBuilder {
        SmartLaunchRuleBuilder::default()
    }

    /// Display label the rider app assigns when none is given.
    #[must_use]
    pub fn default_name(stop_id: &StopId) -> String {
        format!("SmartLaunch for stop {stop_id}")
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SmartLaunchError::Validation`] when:
    /// - `stop_id` is empty ([`ValidationError::EmptyStopId`])
    /// - `radius_meters` is not a positive finite number
    ///   ([`ValidationError::NonPositiveRadius`])
    /// - `center` has a non-finite coordinate ([`ValidationError::NonFiniteCenter`])
    pub fn validate(&self) -> Result<(), SmartLaunchError> {
        if self.stop_id.is_empty() {
            return Err(ValidationError::EmptyStopId.into());
        }
        if !(self.radius_meters.is_finite() && self.radius_meters > 0.0) {
            return Err(ValidationError::NonPositiveRadius.into());
        }
        if !self.center.is_finite() {
            return Err(ValidationError::NonFiniteCenter.into());
        }
        Ok(())
    }

    /// Whether the rule's time window includes the given time of day.
    ///
    /// Policy:
    /// - no window (either bound absent) → always active
    /// - malformed `"HH:MM"` in either bound → fail open, active
    /// - `start <= end` → active iff `now` within `[start, end]` inclusive
    /// - `start > end` → window wraps midnight; active iff
    ///   `now >= start` or `now <= end`
    #[must_use]
    pub fn is_active_at(&self, now: NaiveTime) -> bool {
        let (Some(start_raw), Some(end_raw)) = (&self.start_time, &self.end_time) else {
            return true;
        };
        let (Some(start), Some(end)) = (parse_hhmm(start_raw), parse_hhmm(end_raw)) else {
            // Malformed stored data counts as "always active" rather than
            // silently dropping the rule.
            return true;
        };

        let now = now.hour() * 60 + now.minute();
        if start <= end {
            now >= start && now <= end
        } else {
            now >= start || now <= end
        }
    }

    /// Whether a location fix falls inside the geofence circle.
    #[must_use]
    pub fn contains(&self, fix: Point) -> bool {
        geo::haversine_meters(self.center, fix) <= self.radius_meters
    }

    /// Whether the rule matches a fix at a given time of day.
    ///
    /// Does not consider `enabled`; filtering disabled rules is the
    /// caller's job so list-order precedence stays visible there.
    #[must_use]
    pub fn matches(&self, fix: Point, now: NaiveTime) -> bool {
        self.is_active_at(now) && self.contains(fix)
    }
}

/// Step-by-step builder for [`SmartLaunchRule`].
#[derive(Debug, Default)]
pub struct SmartLaunchRuleBuilder {
    id: Option<RuleId>,
    name: Option<String>,
    stop_id: Option<StopId>,
    center: Option<Point>,
    radius_meters: Option<f64>,
    start_time: Option<String>,
    end_time: Option<String>,
    enabled: Option<bool>,
}

impl SmartLaunchRuleBuilder {
    #[must_use]
    pub fn id(mut self, id: RuleId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn stop_id(mut self, stop_id: impl Into<StopId>) -> Self {
        self.stop_id = Some(stop_id.into());
        self
    }

    #[must_use]
    pub fn center(mut self, center: Point) -> Self {
        self.center = Some(center);
        self
    }

    #[must_use]
    pub fn radius_meters(mut self, radius_meters: f64) -> Self {
        self.radius_meters = Some(radius_meters);
        self
    }

    /// Set both bounds of the active window.
    #[must_use]
    pub fn window(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_time = Some(start.into());
        self.end_time = Some(end.into());
        self
    }

    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Consume the builder, validate, and return a [`SmartLaunchRule`].
    ///
    /// # Errors
    ///
    /// Returns [`SmartLaunchError::Validation`] if required fields are
    /// missing or invalid.
    pub fn build(self) -> Result<SmartLaunchRule, SmartLaunchError> {
        let rule = SmartLaunchRule {
            id: self.id.unwrap_or_default(),
            name: self.name,
            stop_id: self.stop_id.unwrap_or_else(|| StopId::new("")),
            center: self.center.unwrap_or(Point { lat: 0.0, lon: 0.0 }),
            radius_meters: self.radius_meters.unwrap_or(0.0),
            start_time: self.start_time,
            end_time: self.end_time,
            enabled: self.enabled.unwrap_or(true),
        };
        rule.validate()?;
        Ok(rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(hours: u32, minutes: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hours, minutes, 0).unwrap()
    }

    fn campus_rule() -> SmartLaunchRule {
        SmartLaunchRule::builder()
            .stop_id("10070")
            .center(Point::new(43.0731, -89.4012))
            .radius_meters(200.0)
            .build()
            .unwrap()
    }

    #[test]
    fn should_build_valid_rule_with_defaults() {
        let rule = campus_rule();
        assert!(rule.enabled);
        assert!(rule.name.is_none());
        assert!(rule.start_time.is_none());
        assert!(rule.end_time.is_none());
    }

    #[test]
    fn should_reject_empty_stop_id() {
        let result = SmartLaunchRule::builder()
            .center(Point::new(43.0, -89.0))
            .radius_meters(100.0)
            .build();
        assert!(matches!(
            result,
            Err(SmartLaunchError::Validation(ValidationError::EmptyStopId))
        ));
    }

    #[test]
    fn should_reject_non_positive_radius() {
        for radius in [0.0, -5.0, f64::NAN] {
            let result = SmartLaunchRule::builder()
                .stop_id("10070")
                .center(Point::new(43.0, -89.0))
                .radius_meters(radius)
                .build();
            assert!(matches!(
                result,
                Err(SmartLaunchError::Validation(
                    ValidationError::NonPositiveRadius
                ))
            ));
        }
    }

    #[test]
    fn should_reject_non_finite_center() {
        let result = SmartLaunchRule::builder()
            .stop_id("10070")
            .center(Point::new(f64::NAN, -89.0))
            .radius_meters(100.0)
            .build();
        assert!(matches!(
            result,
            Err(SmartLaunchError::Validation(
                ValidationError::NonFiniteCenter
            ))
        ));
    }

    #[test]
    fn should_be_active_at_all_times_without_a_window() {
        let rule = campus_rule();
        assert!(rule.is_active_at(hm(0, 0)));
        assert!(rule.is_active_at(hm(12, 30)));
        assert!(rule.is_active_at(hm(23, 59)));
    }

    #[test]
    fn should_treat_window_bounds_as_inclusive() {
        let mut rule = campus_rule();
        rule.start_time = Some("07:00".to_string());
        rule.end_time = Some("12:00".to_string());

        assert!(rule.is_active_at(hm(7, 0)));
        assert!(rule.is_active_at(hm(12, 0)));
        assert!(!rule.is_active_at(hm(6, 59)));
        assert!(!rule.is_active_at(hm(12, 1)));
    }

    #[test]
    fn should_wrap_window_across_midnight() {
        let mut rule = campus_rule();
        rule.start_time = Some("22:00".to_string());
        rule.end_time = Some("02:00".to_string());

        assert!(rule.is_active_at(hm(23, 30)));
        assert!(rule.is_active_at(hm(1, 0)));
        assert!(rule.is_active_at(hm(22, 0)));
        assert!(rule.is_active_at(hm(2, 0)));
        assert!(!rule.is_active_at(hm(10, 0)));
    }

    #[test]
    fn should_fail_open_when_time_strings_are_malformed() {
        let mut rule = campus_rule();
        rule.start_time = Some("ab:cd".to_string());
        rule.end_time = Some("12:00".to_string());

        assert!(rule.is_active_at(hm(3, 0)));
        assert!(rule.is_active_at(hm(15, 0)));
    }

    #[test]
    fn should_be_always_active_when_only_one_bound_is_set() {
        let mut rule = campus_rule();
        rule.start_time = Some("07:00".to_string());
        assert!(rule.is_active_at(hm(3, 0)));
    }

    #[test]
    fn should_contain_points_within_the_radius() {
        let rule = campus_rule();
        assert!(rule.contains(rule.center));
        // ~111 m north of center, inside the 200 m circle.
        assert!(rule.contains(Point::new(43.0741, -89.4012)));
        // ~1.1 km north, outside.
        assert!(!rule.contains(Point::new(43.0831, -89.4012)));
    }

    #[test]
    fn should_deserialize_stored_camel_case_json() {
        // Shape written by the original rider app, `enabled` absent.
        let json = serde_json::json!({
            "id": uuid::Uuid::new_v4(),
            "stopId": "10070",
            "center": { "lat": 43.0731, "lon": -89.4012 },
            "radiusMeters": 150.0,
            "startTime": "07:00",
            "endTime": "12:00"
        });
        let rule: SmartLaunchRule = serde_json::from_value(json).unwrap();
        assert!(rule.enabled);
        assert_eq!(rule.stop_id.as_str(), "10070");
        assert_eq!(rule.start_time.as_deref(), Some("07:00"));
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let mut rule = campus_rule();
        rule.name = Some(SmartLaunchRule::default_name(&rule.stop_id));
        let json = serde_json::to_string(&rule).unwrap();
        let parsed: SmartLaunchRule = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, rule.id);
        assert_eq!(parsed.name.as_deref(), Some("SmartLaunch for stop 10070"));
        assert_eq!(parsed.stop_id, rule.stop_id);
    }
}
