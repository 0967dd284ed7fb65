//! Launch engine — evaluates SmartLaunch rules against a location fix and
//! sequences the cancelable auto-navigation.
//!
//! The engine runs once per page entry: it loads the rule list, requests a
//! single coarse position fix, picks the **first** stored rule that is both
//! time-active and geometrically matching, and hands back a
//! [`PendingLaunch`] — the short-lived, cancelable notice. Navigation only
//! fires after the notice delay, and only if nobody canceled in the
//! meantime.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use smartlaunch_domain::error::SmartLaunchError;
use smartlaunch_domain::event::{LaunchEvent, LaunchEventKind};
use smartlaunch_domain::id::StopId;
use smartlaunch_domain::rule::SmartLaunchRule;

use crate::ports::{EventPublisher, FixOptions, Locator, NavigationSink, RuleStore};

/// How long the notice is shown before navigation fires.
pub const NOTICE_DELAY: Duration = Duration::from_millis(1100);

/// Evaluates rules on page entry and produces pending launches.
pub struct LaunchEngine<RS, L, N, P> {
    rules: RS,
    locator: L,
    navigator: Arc<N>,
    publisher: Arc<P>,
    notice_delay: Duration,
}

/// Result of a single launch check.
pub enum CheckOutcome<N, P> {
    /// No enabled rules exist; no fix was requested.
    NoRules,
    /// The locator could not produce a fix; nothing further happens.
    NoFix,
    /// A fix was obtained but no rule matched.
    NoMatch,
    /// A rule matched; the pending launch is the cancelable notice.
    Matched(PendingLaunch<N, P>),
}

impl<RS, L, N, P> LaunchEngine<RS, L, N, P>
where
    RS: RuleStore,
    L: Locator,
    N: NavigationSink + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    /// Create a new engine with the default notice delay.
    pub fn new(rules: RS, locator: L, navigator: N, publisher: P) -> Self {
        Self {
            rules,
            locator,
            navigator: Arc::new(navigator),
            publisher: Arc::new(publisher),
            notice_delay: NOTICE_DELAY,
        }
    }

    /// Override the notice delay (tests, demos).
    #[must_use]
    pub fn with_notice_delay(mut self, notice_delay: Duration) -> Self {
        self.notice_delay = notice_delay;
        self
    }

    /// Run one launch check for a page entry.
    ///
    /// Geolocation failure is not an error: it quietly suppresses the
    /// feature for this visit. Only storage failures propagate.
    ///
    /// # Errors
    ///
    /// Returns a storage error if loading the rule list fails.
    pub async fn check(&self) -> Result<CheckOutcome<N, P>, SmartLaunchError> {
        let rules = self.rules.load().await?;
        let enabled: Vec<SmartLaunchRule> = rules.into_iter().filter(|r| r.enabled).collect();
        if enabled.is_empty() {
            return Ok(CheckOutcome::NoRules);
        }

        let fix = match self.locator.locate(FixOptions::default()).await {
            Ok(fix) => fix,
            Err(err) => {
                tracing::debug!(error = %err, "no location fix, skipping launch check");
                return Ok(CheckOutcome::NoFix);
            }
        };

        // First match in stored list order wins; overlapping circles are
        // resolved by list position, not by distance.
        let now = chrono::Local::now().time();
        let Some(rule) = enabled.into_iter().find(|r| r.matches(fix.point(), now)) else {
            return Ok(CheckOutcome::NoMatch);
        };

        tracing::info!(rule_id = %rule.id, stop_id = %rule.stop_id, "smartlaunch rule matched");
        let _ = self
            .publisher
            .publish(LaunchEvent::new(
                LaunchEventKind::RuleMatched,
                rule.id,
                rule.stop_id.clone(),
            ))
            .await;

        Ok(CheckOutcome::Matched(PendingLaunch {
            rule,
            navigator: Arc::clone(&self.navigator),
            publisher: Arc::clone(&self.publisher),
            canceled: Arc::new(AtomicBool::new(false)),
            delay: self.notice_delay,
        }))
    }
}

/// A matched rule waiting out its notice delay before navigating.
///
/// Dropping a pending launch without running it never navigates, which is
/// what a page teardown does.
pub struct PendingLaunch<N, P> {
    rule: SmartLaunchRule,
    navigator: Arc<N>,
    publisher: Arc<P>,
    canceled: Arc<AtomicBool>,
    delay: Duration,
}

/// Terminal state of a pending launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchResult {
    /// The delay elapsed uncanceled and navigation was performed.
    Navigated,
    /// Cancellation won; no navigation happened.
    Canceled,
}

impl<N, P> PendingLaunch<N, P> {
    /// The rule that matched.
    #[must_use]
    pub fn rule(&self) -> &SmartLaunchRule {
        &self.rule
    }

    /// The stop the launch will navigate to.
    #[must_use]
    pub fn stop_id(&self) -> &StopId {
        &self.rule.stop_id
    }

    /// A clonable handle the notice UI uses to cancel the launch.
    #[must_use]
    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle {
            canceled: Arc::clone(&self.canceled),
        }
    }
}

impl<N, P> PendingLaunch<N, P>
where
    N: NavigationSink + Send + Sync,
    P: EventPublisher + Send + Sync,
{
    /// Wait out the notice delay, then navigate unless canceled.
    ///
    /// The canceled flag is read *after* the sleep, at the moment of
    /// firing, so a cancellation that races the timer still suppresses
    /// the navigation.
    ///
    /// # Errors
    ///
    /// Propagates the navigation sink's error if the transition fails.
    pub async fn run(self) -> Result<LaunchResult, SmartLaunchError> {
        tokio::time::sleep(self.delay).await;

        if self.canceled.load(Ordering::SeqCst) {
            tracing::debug!(rule_id = %self.rule.id, "pending launch canceled");
            let _ = self
                .publisher
                .publish(LaunchEvent::new(
                    LaunchEventKind::NavigationCanceled,
                    self.rule.id,
                    self.rule.stop_id.clone(),
                ))
                .await;
            return Ok(LaunchResult::Canceled);
        }

        self.navigator.go_to(&self.rule.stop_id).await?;
        let _ = self
            .publisher
            .publish(LaunchEvent::new(
                LaunchEventKind::NavigationCompleted,
                self.rule.id,
                self.rule.stop_id.clone(),
            ))
            .await;
        Ok(LaunchResult::Navigated)
    }
}

/// Cancels a [`PendingLaunch`]. Clonable; cancellation is monotonic and
/// idempotent.
#[derive(Clone)]
pub struct CancelHandle {
    canceled: Arc<AtomicBool>,
}

impl CancelHandle {
    /// Suppress the pending navigation. Safe to call any number of times,
    /// before or after the notice delay elapses.
    pub fn cancel(&self) {
        self.canceled.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation has been requested.
    #[must_use]
    pub fn is_canceled(&self) -> bool {
        self.canceled.load(Ordering::SeqCst)
    }
}
