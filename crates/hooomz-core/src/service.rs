//! The operations service
//!
//! `OpsService` is what the UI talks to: every operation checks permissions,
//! validates against the domain rules, writes through the store, and lands
//! an event in the project's activity feed. A mutation whose feed append
//! fails is compensated, removing inserted records and restoring updated
//! ones, so the store never holds a mutation the feed doesn't know about.

use crate::config::OpsConfig;
use crate::error::OpsError;
use crate::intake::{IntakeOutcome, IntakeSession};
use chrono::{NaiveDate, Utc};
use hooomz_auth::{PermissionGate, User};
use hooomz_catalog::RoomTemplates;
use hooomz_domain::{
    ActivityEvent, ActivityKind, CategoryCode, Contact, ContactId, DailyLog, Expense, Loop,
    LoopId, LoopStatus, Project, ProjectId, ProjectStatus, Task, TaskId, TaskStatus, TimeEntry,
};
use hooomz_estimate::{calculate_range, Estimate, EstimateInput};
use hooomz_match::TaskMatcher;
use hooomz_store::OpsStore;

/// The service facade over a store
#[derive(Debug)]
pub struct OpsService<S> {
    store: S,
    matcher: TaskMatcher,
    gate: PermissionGate,
    templates: RoomTemplates,
    feed_limit: usize,
}

impl<S: OpsStore> OpsService<S> {
    /// Create a service with default matcher rules and templates
    ///
    /// # Errors
    /// Construction only fails on invalid matcher rules, which the default
    /// set never has.
    pub fn new(store: S) -> Result<Self, OpsError> {
        Self::with_config(store, &OpsConfig::default())
    }

    /// Create a service from configuration
    ///
    /// # Errors
    /// Fails when a configured matcher rule has an invalid pattern or code.
    pub fn with_config(store: S, config: &OpsConfig) -> Result<Self, OpsError> {
        let mut matcher = TaskMatcher::with_defaults()?;
        for rule in &config.matcher_rules {
            matcher = matcher.with_rule(rule.clone())?;
        }
        Ok(Self {
            store,
            matcher,
            gate: PermissionGate::new(),
            templates: RoomTemplates::with_defaults(),
            feed_limit: config.feed_limit,
        })
    }

    /// The underlying store
    #[inline]
    pub fn store(&self) -> &S {
        &self.store
    }

    // ---- Intake ----

    /// Submit a completed intake wizard session
    ///
    /// Creates the customer contact and a project in Intake status, computes
    /// the estimate range, and records the intake and estimate in the feed.
    ///
    /// # Errors
    /// `OpsError::IntakeIncomplete` names the first missing wizard step.
    pub async fn submit_intake(
        &self,
        user: &User,
        session: IntakeSession,
    ) -> Result<IntakeOutcome, OpsError> {
        self.gate.require(user, "intake.submit")?;
        if let Some(step) = session.missing_step() {
            return Err(OpsError::IntakeIncomplete(step));
        }

        let estimate = calculate_range(&session.estimate_input(), &self.templates)?;

        let Some(info) = session.customer.clone() else {
            return Err(OpsError::IntakeIncomplete(crate::intake::IntakeStep::Customer));
        };
        let Some(address) = session.address.clone() else {
            return Err(OpsError::IntakeIncomplete(crate::intake::IntakeStep::Address));
        };
        let mut contact = Contact::new(info.name.clone()).with_role("customer");
        if let Some(email) = info.email {
            contact = contact.with_email(email);
        }
        if let Some(phone) = info.phone {
            contact = contact.with_phone(phone);
        }

        self.store.insert_contact(contact.clone()).await?;

        let project = Project::new(format!("{} - {address}", info.name), address)
            .with_contact(contact.id);
        if let Err(err) = self.store.insert_project(project.clone()).await {
            let _ = self.store.delete_contact(contact.id).await;
            return Err(err.into());
        }

        tracing::info!(project = %project.id, customer = %info.name, "intake submitted");

        let intake_event =
            ActivityEvent::new(project.id, ActivityKind::IntakeReceived, "intake received")
                .with_actor(user.id);
        let intake_event_id = intake_event.id;
        if let Err(err) = self.store.append_event(intake_event).await {
            let _ = self.store.delete_project(project.id).await;
            let _ = self.store.delete_contact(contact.id).await;
            return Err(err.into());
        }

        let estimate_event = ActivityEvent::new(
            project.id,
            ActivityKind::EstimateProduced,
            format!(
                "estimate range ${:.2} - ${:.2}",
                estimate.range.low_cents as f64 / 100.0,
                estimate.range.high_cents as f64 / 100.0,
            ),
        )
        .with_actor(user.id);
        if let Err(err) = self.store.append_event(estimate_event).await {
            // Undo the whole intake, feed entry included.
            let _ = self.store.delete_event(intake_event_id).await;
            let _ = self.store.delete_project(project.id).await;
            let _ = self.store.delete_contact(contact.id).await;
            return Err(err.into());
        }

        Ok(IntakeOutcome {
            project,
            contact,
            estimate,
        })
    }

    /// Compute an estimate without creating a project
    ///
    /// # Errors
    /// Requires `estimates.create`.
    pub fn estimate_rooms(&self, user: &User, input: &EstimateInput) -> Result<Estimate, OpsError> {
        self.gate.require(user, "estimates.create")?;
        Ok(calculate_range(input, &self.templates)?)
    }

    // ---- Projects and loops ----

    /// All projects
    ///
    /// # Errors
    /// Requires `projects.read`.
    pub async fn projects(&self, user: &User) -> Result<Vec<Project>, OpsError> {
        self.gate.require(user, "projects.read")?;
        Ok(self.store.list_projects().await?)
    }

    /// Change a project's status, validating the transition
    ///
    /// # Errors
    /// `DomainError::InvalidProjectTransition` for disallowed moves.
    pub async fn update_project_status(
        &self,
        user: &User,
        project_id: ProjectId,
        status: ProjectStatus,
    ) -> Result<Project, OpsError> {
        self.gate.require(user, "projects.write")?;
        let mut project = self.store.get_project(project_id).await?;
        if !project.status.can_transition_to(status) {
            return Err(hooomz_domain::DomainError::InvalidProjectTransition {
                from: project.status,
                to: status,
            }
            .into());
        }
        let previous = project.status;
        let original = project.clone();
        project.status = status;
        project.touch();
        self.store.update_project(project.clone()).await?;

        tracing::info!(project = %project_id, ?previous, ?status, "project status changed");

        let event = ActivityEvent::new(
            project_id,
            ActivityKind::ProjectUpdated,
            format!("status {previous:?} -> {status:?}"),
        )
        .with_actor(user.id);
        if let Err(err) = self.store.append_event(event).await {
            let _ = self.store.update_project(original).await;
            return Err(err.into());
        }
        Ok(project)
    }

    /// Create a loop in a project
    ///
    /// # Errors
    /// Requires `projects.write`; the project must exist.
    pub async fn create_loop(
        &self,
        user: &User,
        project_id: ProjectId,
        name: &str,
    ) -> Result<Loop, OpsError> {
        self.gate.require(user, "projects.write")?;
        // Fail before writing anything if the project is gone.
        let _ = self.store.get_project(project_id).await?;

        let lp = Loop::new(project_id, name);
        self.store.insert_loop(lp.clone()).await?;

        let event = ActivityEvent::new(
            project_id,
            ActivityKind::LoopUpdated,
            format!("loop {name:?} created"),
        )
        .with_actor(user.id);
        if let Err(err) = self.store.append_event(event).await {
            let _ = self.store.delete_loop(lp.id).await;
            return Err(err.into());
        }
        Ok(lp)
    }

    /// Close a loop
    ///
    /// # Errors
    /// `DomainError::InvalidLoopTransition` when the loop is already closed;
    /// requires `projects.write`.
    pub async fn close_loop(&self, user: &User, loop_id: LoopId) -> Result<Loop, OpsError> {
        self.gate.require(user, "projects.write")?;
        let mut lp = self.store.get_loop(loop_id).await?;
        if !lp.status.can_transition_to(LoopStatus::Closed) {
            return Err(hooomz_domain::DomainError::InvalidLoopTransition {
                from: lp.status,
                to: LoopStatus::Closed,
            }
            .into());
        }
        let original = lp.clone();
        lp.status = LoopStatus::Closed;
        self.store.update_loop(lp.clone()).await?;

        let event = ActivityEvent::new(
            lp.project_id,
            ActivityKind::LoopUpdated,
            format!("loop {:?} closed", lp.name),
        )
        .with_actor(user.id);
        if let Err(err) = self.store.append_event(event).await {
            let _ = self.store.update_loop(original).await;
            return Err(err.into());
        }
        Ok(lp)
    }

    /// Loops of a project
    ///
    /// # Errors
    /// Requires `projects.read`.
    pub async fn loops_of_project(
        &self,
        user: &User,
        project_id: ProjectId,
    ) -> Result<Vec<Loop>, OpsError> {
        self.gate.require(user, "projects.read")?;
        Ok(self.store.loops_by_project(project_id).await?)
    }

    // ---- Tasks ----

    /// Create a task, auto-classifying its name through the matcher
    ///
    /// Unmatched names are stored unclassified with `needs_review` set so
    /// the UI prompts for manual selection. If the feed append fails, the
    /// task write is rolled back.
    ///
    /// # Errors
    /// Requires `tasks.write`; the loop must exist.
    pub async fn create_task(
        &self,
        user: &User,
        loop_id: LoopId,
        name: &str,
    ) -> Result<Task, OpsError> {
        self.gate.require(user, "tasks.write")?;
        let lp = self.store.get_loop(loop_id).await?;

        let mut task = Task::new(loop_id, name);
        match self.matcher.match_name(name) {
            Some(m) => {
                tracing::debug!(
                    task = %task.id,
                    category = %m.category_code,
                    stage = %m.stage_code,
                    "task classified"
                );
                task = task.with_classification(m.category_code, Some(m.stage_code));
                if let Some(subcategory) = m.subcategory {
                    task = task.with_subcategory(subcategory);
                }
            }
            None => {
                tracing::debug!(task = %task.id, name, "task needs manual classification");
            }
        }

        self.store.insert_task(task.clone()).await?;

        let event = ActivityEvent::new(
            lp.project_id,
            ActivityKind::TaskCreated,
            format!("task {name:?} created"),
        )
        .with_category(task.category_code.clone())
        .with_actor(user.id);

        if let Err(err) = self.store.append_event(event).await {
            // Roll the optimistic write back so the feed and the task list
            // never disagree.
            let _ = self.store.delete_task(task.id).await;
            return Err(err.into());
        }
        Ok(task)
    }

    /// Change a task's status, validating the transition
    ///
    /// # Errors
    /// `DomainError::InvalidTaskTransition` for disallowed moves.
    pub async fn update_task_status(
        &self,
        user: &User,
        task_id: TaskId,
        status: TaskStatus,
    ) -> Result<Task, OpsError> {
        self.gate.require(user, "tasks.write")?;
        let mut task = self.store.get_task(task_id).await?;
        if !task.status.can_transition_to(status) {
            return Err(hooomz_domain::DomainError::InvalidTaskTransition {
                from: task.status,
                to: status,
            }
            .into());
        }
        let lp = self.store.get_loop(task.loop_id).await?;

        let previous = task.status;
        let original = task.clone();
        task.status = status;
        task.touch();
        self.store.update_task(task.clone()).await?;

        // A task starting work moves its loop out of Open.
        let mut loop_before_bump = None;
        if status == TaskStatus::InProgress && lp.status == LoopStatus::Open {
            let mut started = lp.clone();
            started.status = LoopStatus::InProgress;
            if let Err(err) = self.store.update_loop(started).await {
                let _ = self.store.update_task(original).await;
                return Err(err.into());
            }
            loop_before_bump = Some(lp.clone());
        }

        let event = ActivityEvent::new(
            lp.project_id,
            ActivityKind::TaskUpdated,
            format!("task {:?} {previous:?} -> {status:?}", task.name),
        )
        .with_category(task.category_code.clone())
        .with_actor(user.id);
        if let Err(err) = self.store.append_event(event).await {
            if let Some(open_loop) = loop_before_bump {
                let _ = self.store.update_loop(open_loop).await;
            }
            let _ = self.store.update_task(original).await;
            return Err(err.into());
        }
        Ok(task)
    }

    /// Assign a task to a contact
    ///
    /// # Errors
    /// Requires `tasks.write`; task and contact must exist.
    pub async fn assign_task(
        &self,
        user: &User,
        task_id: TaskId,
        contact_id: ContactId,
    ) -> Result<Task, OpsError> {
        self.gate.require(user, "tasks.write")?;
        let contact = self.store.get_contact(contact_id).await?;
        let mut task = self.store.get_task(task_id).await?;
        let lp = self.store.get_loop(task.loop_id).await?;
        let original = task.clone();
        task.assignee = Some(contact_id);
        task.touch();
        self.store.update_task(task.clone()).await?;

        let event = ActivityEvent::new(
            lp.project_id,
            ActivityKind::TaskUpdated,
            format!("task {:?} assigned to {}", task.name, contact.name),
        )
        .with_actor(user.id);
        if let Err(err) = self.store.append_event(event).await {
            let _ = self.store.update_task(original).await;
            return Err(err.into());
        }
        Ok(task)
    }

    /// Tasks of a loop
    ///
    /// # Errors
    /// Requires `tasks.read`.
    pub async fn tasks_of_loop(&self, user: &User, loop_id: LoopId) -> Result<Vec<Task>, OpsError> {
        self.gate.require(user, "tasks.read")?;
        Ok(self.store.tasks_by_loop(loop_id).await?)
    }

    // ---- Time tracking ----

    /// Clock the user in on a project
    ///
    /// # Errors
    /// `OpsError::AlreadyClockedIn` if the user already has a running clock.
    pub async fn clock_in(&self, user: &User, project_id: ProjectId) -> Result<TimeEntry, OpsError> {
        self.gate.require(user, "time.clock")?;
        if self.store.open_entry_for(user.id).await?.is_some() {
            return Err(OpsError::AlreadyClockedIn(user.id));
        }

        let entry = TimeEntry::start(project_id, user.id);
        self.store.insert_time_entry(entry.clone()).await?;

        let event = ActivityEvent::new(project_id, ActivityKind::ClockIn, "clocked in")
            .with_actor(user.id);
        if let Err(err) = self.store.append_event(event).await {
            let _ = self.store.delete_time_entry(entry.id).await;
            return Err(err.into());
        }
        tracing::info!(contact = %user.id, project = %project_id, "clock in");
        Ok(entry)
    }

    /// Clock the user out of their running entry
    ///
    /// # Errors
    /// `OpsError::NotClockedIn` when no clock is running.
    pub async fn clock_out(&self, user: &User) -> Result<TimeEntry, OpsError> {
        self.gate.require(user, "time.clock")?;
        let Some(mut entry) = self.store.open_entry_for(user.id).await? else {
            return Err(OpsError::NotClockedIn(user.id));
        };

        let open_entry = entry.clone();
        entry.close(Utc::now())?;
        self.store.update_time_entry(entry.clone()).await?;

        let event = ActivityEvent::new(entry.project_id, ActivityKind::ClockOut, "clocked out")
            .with_actor(user.id);
        if let Err(err) = self.store.append_event(event).await {
            // Leave the clock running if the feed didn't record the punch.
            let _ = self.store.update_time_entry(open_entry).await;
            return Err(err.into());
        }
        tracing::info!(contact = %user.id, project = %entry.project_id, "clock out");
        Ok(entry)
    }

    /// File a daily log
    ///
    /// # Errors
    /// Requires `time.clock`.
    pub async fn log_day(
        &self,
        user: &User,
        project_id: ProjectId,
        date: NaiveDate,
        summary: &str,
        hours_hundredths: u32,
    ) -> Result<DailyLog, OpsError> {
        self.gate.require(user, "time.clock")?;
        let log = DailyLog::new(project_id, date, user.id, summary)
            .with_hours_hundredths(hours_hundredths);
        self.store.insert_daily_log(log.clone()).await?;

        let event = ActivityEvent::new(
            project_id,
            ActivityKind::DailyLogged,
            format!("daily log for {date}"),
        )
        .with_actor(user.id);
        if let Err(err) = self.store.append_event(event).await {
            let _ = self.store.delete_daily_log(log.id).await;
            return Err(err.into());
        }
        Ok(log)
    }

    /// Record a job expense
    ///
    /// # Errors
    /// `DomainError::NegativeAmount` for negative cents; requires
    /// `expenses.write`.
    pub async fn add_expense(
        &self,
        user: &User,
        project_id: ProjectId,
        date: NaiveDate,
        vendor: &str,
        amount_cents: i64,
        category: Option<CategoryCode>,
    ) -> Result<Expense, OpsError> {
        self.gate.require(user, "expenses.write")?;
        let mut expense = Expense::new(project_id, date, vendor, amount_cents)?;
        if let Some(category) = category {
            expense = expense.with_category(category);
        }
        self.store.insert_expense(expense.clone()).await?;

        let mut event = ActivityEvent::new(
            project_id,
            ActivityKind::ExpenseRecorded,
            format!("expense {vendor:?} ${:.2}", amount_cents as f64 / 100.0),
        )
        .with_actor(user.id);
        if let Some(category) = &expense.category_code {
            event = event.with_category(category.clone());
        }
        if let Err(err) = self.store.append_event(event).await {
            let _ = self.store.delete_expense(expense.id).await;
            return Err(err.into());
        }
        Ok(expense)
    }

    // ---- Feed ----

    /// A project's activity feed, newest first, one configured page
    ///
    /// # Errors
    /// Requires `feed.read`.
    pub async fn activity_feed(
        &self,
        user: &User,
        project_id: ProjectId,
    ) -> Result<Vec<ActivityEvent>, OpsError> {
        self.gate.require(user, "feed.read")?;
        Ok(self
            .store
            .events_by_project(project_id, self.feed_limit)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::IntakeStep;
    use hooomz_auth::Role;
    use hooomz_catalog::{BuildTier, RoomKind};
    use hooomz_store::MemoryStore;

    fn service() -> OpsService<MemoryStore> {
        OpsService::new(MemoryStore::new()).unwrap()
    }

    fn pm() -> User {
        User::new("Jo", Role::ProjectManager)
    }

    fn complete_session() -> IntakeSession {
        IntakeSession::new()
            .with_customer("Dana Miller")
            .with_email("dana@example.com")
            .with_address("12 Oak St")
            .with_room(RoomKind::Kitchen, BuildTier::Better)
            .with_room(RoomKind::FullBath, BuildTier::Good)
    }

    #[tokio::test]
    async fn intake_creates_project_contact_and_events() {
        let service = service();
        let user = pm();

        let outcome = service.submit_intake(&user, complete_session()).await.unwrap();
        assert_eq!(outcome.project.status, ProjectStatus::Intake);
        assert_eq!(outcome.project.contact_ids, vec![outcome.contact.id]);
        assert!(outcome.estimate.range.low_cents > 0);

        let feed = service.activity_feed(&user, outcome.project.id).await.unwrap();
        assert_eq!(feed.len(), 2);
        // Newest first: the estimate event follows the intake event.
        assert_eq!(feed[0].kind, ActivityKind::EstimateProduced);
        assert_eq!(feed[1].kind, ActivityKind::IntakeReceived);
    }

    #[tokio::test]
    async fn incomplete_intake_names_missing_step() {
        let service = service();
        let session = IntakeSession::new().with_customer("Dana Miller");
        let err = service.submit_intake(&pm(), session).await.unwrap_err();
        assert!(matches!(err, OpsError::IntakeIncomplete(IntakeStep::Address)));
        assert!(err.is_user_error());
    }

    #[tokio::test]
    async fn intake_requires_permission() {
        let service = service();
        let crew = User::new("Sam", Role::Crew);
        let err = service.submit_intake(&crew, complete_session()).await.unwrap_err();
        assert!(matches!(err, OpsError::Auth(_)));
    }

    #[tokio::test]
    async fn task_creation_classifies_and_feeds() {
        let service = service();
        let user = pm();
        let outcome = service.submit_intake(&user, complete_session()).await.unwrap();
        let lp = service
            .create_loop(&user, outcome.project.id, "Finish work")
            .await
            .unwrap();

        let task = service
            .create_task(&user, lp.id, "Install Floor Tile")
            .await
            .unwrap();
        assert_eq!(task.category_code.as_str(), "TL");
        assert_eq!(task.stage_code.as_ref().unwrap().as_str(), "ST-FN");
        assert!(!task.needs_review);

        let feed = service.activity_feed(&user, outcome.project.id).await.unwrap();
        assert_eq!(feed[0].kind, ActivityKind::TaskCreated);
        assert_eq!(feed[0].category_code.as_ref().unwrap().as_str(), "TL");
    }

    #[tokio::test]
    async fn unmatched_task_needs_review() {
        let service = service();
        let user = pm();
        let outcome = service.submit_intake(&user, complete_session()).await.unwrap();
        let lp = service
            .create_loop(&user, outcome.project.id, "Misc")
            .await
            .unwrap();

        let task = service
            .create_task(&user, lp.id, "Talk through change order")
            .await
            .unwrap();
        assert!(task.needs_review);
        assert!(task.category_code.is_unclassified());
        assert!(task.stage_code.is_none());
    }

    #[tokio::test]
    async fn task_transition_validation() {
        let service = service();
        let user = pm();
        let outcome = service.submit_intake(&user, complete_session()).await.unwrap();
        let lp = service
            .create_loop(&user, outcome.project.id, "Finish work")
            .await
            .unwrap();
        let task = service.create_task(&user, lp.id, "paint walls").await.unwrap();

        let task = service
            .update_task_status(&user, task.id, TaskStatus::InProgress)
            .await
            .unwrap();
        let task = service
            .update_task_status(&user, task.id, TaskStatus::Done)
            .await
            .unwrap();

        // Done is terminal.
        let err = service
            .update_task_status(&user, task.id, TaskStatus::Todo)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            OpsError::Domain(hooomz_domain::DomainError::InvalidTaskTransition { .. })
        ));
    }

    #[tokio::test]
    async fn loop_lifecycle_follows_task_work() {
        let service = service();
        let user = pm();
        let outcome = service.submit_intake(&user, complete_session()).await.unwrap();
        let lp = service
            .create_loop(&user, outcome.project.id, "Tile & Finish")
            .await
            .unwrap();
        assert_eq!(lp.status, LoopStatus::Open);

        let task = service.create_task(&user, lp.id, "paint walls").await.unwrap();
        service
            .update_task_status(&user, task.id, TaskStatus::InProgress)
            .await
            .unwrap();
        let loops = service
            .loops_of_project(&user, outcome.project.id)
            .await
            .unwrap();
        assert_eq!(loops[0].status, LoopStatus::InProgress);

        let closed = service.close_loop(&user, lp.id).await.unwrap();
        assert_eq!(closed.status, LoopStatus::Closed);
        let feed = service.activity_feed(&user, outcome.project.id).await.unwrap();
        assert_eq!(feed[0].kind, ActivityKind::LoopUpdated);

        // Closed is terminal.
        let err = service.close_loop(&user, lp.id).await.unwrap_err();
        assert!(matches!(
            err,
            OpsError::Domain(hooomz_domain::DomainError::InvalidLoopTransition { .. })
        ));
    }

    #[tokio::test]
    async fn double_clock_in_rejected() {
        let service = service();
        let user = pm();
        let outcome = service.submit_intake(&user, complete_session()).await.unwrap();

        service.clock_in(&user, outcome.project.id).await.unwrap();
        let err = service.clock_in(&user, outcome.project.id).await.unwrap_err();
        assert!(matches!(err, OpsError::AlreadyClockedIn(_)));

        let entry = service.clock_out(&user).await.unwrap();
        assert!(!entry.is_open());

        // And a second clock-out has nothing to close.
        let err = service.clock_out(&user).await.unwrap_err();
        assert!(matches!(err, OpsError::NotClockedIn(_)));
    }

    #[tokio::test]
    async fn expense_rejects_negative_and_feeds() {
        let service = service();
        let user = pm();
        let outcome = service.submit_intake(&user, complete_session()).await.unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();

        let err = service
            .add_expense(&user, outcome.project.id, date, "Supply House", -1, None)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            OpsError::Domain(hooomz_domain::DomainError::NegativeAmount(-1))
        ));

        service
            .add_expense(&user, outcome.project.id, date, "Supply House", 12_550, None)
            .await
            .unwrap();
        let feed = service.activity_feed(&user, outcome.project.id).await.unwrap();
        assert_eq!(feed[0].kind, ActivityKind::ExpenseRecorded);
    }

    #[tokio::test]
    async fn custom_matcher_rule_from_config() {
        let config = OpsConfig {
            matcher_rules: vec![hooomz_match::RuleConfig {
                pattern: "pool".to_string(),
                category_code: "EX".to_string(),
                stage_code: "ST-FN".to_string(),
                subcategory: None,
            }],
            ..OpsConfig::default()
        };
        let service = OpsService::with_config(MemoryStore::new(), &config).unwrap();
        let user = pm();
        let outcome = service.submit_intake(&user, complete_session()).await.unwrap();
        let lp = service
            .create_loop(&user, outcome.project.id, "Outdoor")
            .await
            .unwrap();

        let task = service
            .create_task(&user, lp.id, "Dig pool footing")
            .await
            .unwrap();
        assert_eq!(task.category_code.as_str(), "EX");
    }
}
