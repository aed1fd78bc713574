//! In-process registry of recurring cart reminder jobs.
//!
//! Each job runs on its own tokio task that sleeps until the next daily trigger, runs, and
//! goes back to sleep. Jobs are keyed by user, so registering twice for the same user replaces
//! the running job instead of leaving two behind.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Local, NaiveDateTime, NaiveTime};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info};
use uuid::Uuid;

use crate::constants::REMINDER_JOB_SUFFIX;
use crate::error::ServerError;
use crate::ports::ReminderScheduler;

pub(crate) type JobFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// The body of a reminder, invoked once per firing.
pub(crate) type ReminderJob = Arc<dyn Fn() -> JobFuture + Send + Sync>;

/// Identity of a user's reminder job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ReminderKey(Uuid);

impl ReminderKey {
    pub(crate) fn for_user(user_id: Uuid) -> Self {
        ReminderKey(user_id)
    }
}

impl fmt::Display for ReminderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0, REMINDER_JOB_SUFFIX)
    }
}

/// Fires once a day at a fixed server-local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DailyTrigger {
    at: NaiveTime,
}

impl DailyTrigger {
    pub(crate) fn new(at: NaiveTime) -> Self {
        DailyTrigger { at }
    }

    /// The first firing strictly after `now`.
    pub(crate) fn next_after(&self, now: NaiveDateTime) -> NaiveDateTime {
        let today = now.date().and_time(self.at);
        if today > now {
            today
        } else {
            today + Duration::days(1)
        }
    }
}

/// A named job bound to a trigger. Dropping it stops it.
pub(crate) struct ScheduledJob {
    name: String,
    trigger: DailyTrigger,
    job: ReminderJob,
    handle: Option<JoinHandle<()>>,
}

impl ScheduledJob {
    pub(crate) fn new(key: ReminderKey, trigger: DailyTrigger, job: ReminderJob) -> Self {
        ScheduledJob {
            name: key.to_string(),
            trigger,
            job,
            handle: None,
        }
    }

    pub(crate) fn start(&mut self) {
        if self.is_running() {
            return;
        }
        let name = self.name.clone();
        let trigger = self.trigger;
        let job = Arc::clone(&self.job);
        self.handle = Some(tokio::spawn(run_trigger_loop(name, trigger, job)));
    }

    pub(crate) fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub(crate) fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .map_or(false, |handle| !handle.is_finished())
    }
}

impl Drop for ScheduledJob {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn run_trigger_loop(name: String, trigger: DailyTrigger, job: ReminderJob) {
    let mut next = trigger.next_after(Local::now().naive_local());
    loop {
        // a negative gap means we overslept; fire right away
        let wait = (next - Local::now().naive_local())
            .to_std()
            .unwrap_or_default();
        tokio::time::sleep(wait).await;

        info!("Running scheduled job {}", name);
        job().await;

        next = trigger.next_after(next);
    }
}

/// Process-wide registry of running reminder jobs.
#[derive(Default)]
pub(crate) struct CronRegistry {
    jobs: Mutex<HashMap<ReminderKey, ScheduledJob>>,
}

#[async_trait]
impl ReminderScheduler for CronRegistry {
    async fn schedule(
        &self,
        key: ReminderKey,
        trigger: DailyTrigger,
        job: ReminderJob,
    ) -> Result<(), ServerError> {
        let mut scheduled = ScheduledJob::new(key, trigger, job);
        scheduled.start();

        let mut jobs = self.jobs.lock().await;
        if let Some(mut previous) = jobs.insert(key, scheduled) {
            previous.stop();
            debug!("Replaced existing job {}", key);
        }
        Ok(())
    }

    async fn is_scheduled(&self, key: &ReminderKey) -> bool {
        self.jobs.lock().await.contains_key(key)
    }

    async fn cancel(&self, key: &ReminderKey) -> bool {
        match self.jobs.lock().await.remove(key) {
            Some(mut job) => {
                job.stop();
                true
            }
            None => false,
        }
    }
}
