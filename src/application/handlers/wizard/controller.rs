//! WizardController - drives the five-step wizard and its submission.
//!
//! The controller owns the in-progress form and the step pointer. Form
//! edits and navigation are synchronous; `submit` is the only async
//! operation and runs strictly in this order:
//!
//! 1. Validate the whole form
//! 2. Create (or fully update) the decision record
//! 3. Set status to `analyzing`
//! 4. Run the analysis, relaying progress messages
//! 5. Save the result and set status to `done`
//!
//! Any failure after step 2 reverts the status to `draft`, and a result
//! that cannot be rendered counts as a failure. The form is never
//! discarded, so the user can retry. Archived decisions are read-only.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use super::WizardError;
use crate::domain::analysis::AnalysisResult;
use crate::domain::decision::{Decision, DecisionFormData, FormCommand};
use crate::domain::foundation::{DecisionId, DecisionStatus, DomainError, Session};
use crate::domain::wizard::{Advance, StepValidator, WizardNavigator, WizardStep};
use crate::ports::{
    AnalysisService, AnalysisServiceError, AuthProvider, DecisionRepository,
    NotificationService, ProgressCallback, TemplateProvider,
};

/// Default deadline for one analysis call.
pub const DEFAULT_ANALYSIS_TIMEOUT: Duration = Duration::from_secs(120);

/// External collaborators used by the controller.
#[derive(Clone)]
pub struct WizardDeps {
    pub repository: Arc<dyn DecisionRepository>,
    pub analysis: Arc<dyn AnalysisService>,
    pub notifications: Option<Arc<dyn NotificationService>>,
    pub analysis_timeout: Duration,
}

impl WizardDeps {
    pub fn new(
        repository: Arc<dyn DecisionRepository>,
        analysis: Arc<dyn AnalysisService>,
    ) -> Self {
        Self {
            repository,
            analysis,
            notifications: None,
            analysis_timeout: DEFAULT_ANALYSIS_TIMEOUT,
        }
    }

    pub fn with_notifications(mut self, notifications: Arc<dyn NotificationService>) -> Self {
        self.notifications = Some(notifications);
        self
    }

    pub fn with_analysis_timeout(mut self, timeout: Duration) -> Self {
        self.analysis_timeout = timeout;
        self
    }
}

/// Whether the wizard started from a blank form or an existing decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardMode {
    Create,
    Edit,
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub decision_id: DecisionId,
    pub result: AnalysisResult,
}

enum AnalysisOutcome {
    Finished(Result<AnalysisResult, AnalysisServiceError>),
    TimedOut,
    Cancelled,
}

pub struct WizardController {
    session: Session,
    form: DecisionFormData,
    navigator: WizardNavigator,
    mode: WizardMode,
    decision_id: Option<DecisionId>,
    last_result: Option<AnalysisResult>,
    deps: WizardDeps,
}

impl WizardController {
    /// Starts a fresh wizard for `session`.
    pub fn new(session: Session, deps: WizardDeps) -> Self {
        Self {
            session,
            form: DecisionFormData::initial(),
            navigator: WizardNavigator::new(),
            mode: WizardMode::Create,
            decision_id: None,
            last_result: None,
            deps,
        }
    }

    /// Starts a fresh wizard for whoever the auth provider says is signed in.
    pub async fn start(auth: &dyn AuthProvider, deps: WizardDeps) -> Result<Self, WizardError> {
        let session = auth.current_session().await?;
        Ok(Self::new(session, deps))
    }

    /// Opens an existing decision for editing and re-analysis.
    pub fn for_existing(
        session: Session,
        decision: Decision,
        deps: WizardDeps,
    ) -> Result<Self, WizardError> {
        if !decision.is_owned_by(&session.user_id) {
            return Err(WizardError::Unauthorized(
                "decision belongs to another user".to_string(),
            ));
        }
        if decision.status == DecisionStatus::Archived {
            return Err(WizardError::NotEditable(decision.status));
        }

        debug!(decision_id = %decision.id, user_id = %session.user_id, "Editing existing decision");
        Ok(Self {
            form: DecisionFormData::initial().load_template(decision.form.into()),
            navigator: WizardNavigator::new(),
            mode: WizardMode::Edit,
            decision_id: Some(decision.id),
            last_result: decision.result,
            session,
            deps,
        })
    }

    pub fn form(&self) -> &DecisionFormData {
        &self.form
    }

    pub fn current_step(&self) -> WizardStep {
        self.navigator.current()
    }

    pub fn mode(&self) -> WizardMode {
        self.mode
    }

    /// Id of the persisted record, once one exists.
    pub fn decision_id(&self) -> Option<DecisionId> {
        self.decision_id
    }

    pub fn last_result(&self) -> Option<&AnalysisResult> {
        self.last_result.as_ref()
    }

    /// True if the current step's gate is open.
    pub fn can_advance(&self) -> bool {
        StepValidator::can_advance(self.current_step(), &self.form)
    }

    /// Applies a form edit.
    pub fn dispatch(&mut self, command: FormCommand) {
        self.form = self.form.apply(command);
    }

    pub fn next(&mut self) -> Advance {
        let from = self.current_step();
        let outcome = self.navigator.next(&self.form);
        match &outcome {
            Advance::Moved(to) => debug!(step = %to, "Advanced from {}", from),
            Advance::Blocked(issues) => {
                debug!(step = %from, issues = issues.len(), "Advance blocked")
            }
            Advance::AtEnd => debug!(step = %from, "Already at last step"),
        }
        outcome
    }

    pub fn back(&mut self) -> WizardStep {
        let step = self.navigator.back();
        debug!(step = %step, "Moved back");
        step
    }

    pub fn jump_to(&mut self, step: WizardStep) -> WizardStep {
        debug!(step = %step, "Jumped to step");
        self.navigator.jump_to(step)
    }

    /// Loads a preset template into the form.
    pub fn apply_template(
        &mut self,
        provider: &dyn TemplateProvider,
        template_id: &str,
    ) -> Result<(), WizardError> {
        let template = provider
            .get_template_by_id(template_id)
            .ok_or_else(|| WizardError::TemplateNotFound(template_id.to_string()))?;
        debug!(template_id, "Applied template");
        self.dispatch(FormCommand::LoadTemplate(template.template));
        Ok(())
    }

    /// Submits the form for analysis.
    pub async fn submit(
        &mut self,
        on_progress: ProgressCallback<'_>,
    ) -> Result<SubmitOutcome, WizardError> {
        self.run_submit(on_progress, None).await
    }

    /// Submits the form; flipping `cancel` to `true` aborts the analysis.
    pub async fn submit_with_cancel(
        &mut self,
        on_progress: ProgressCallback<'_>,
        cancel: watch::Receiver<bool>,
    ) -> Result<SubmitOutcome, WizardError> {
        self.run_submit(on_progress, Some(cancel)).await
    }

    async fn run_submit(
        &mut self,
        on_progress: ProgressCallback<'_>,
        cancel: Option<watch::Receiver<bool>>,
    ) -> Result<SubmitOutcome, WizardError> {
        if !self.navigator.is_at_review() {
            return Err(WizardError::NotAtReview);
        }

        StepValidator::validate_form(&self.form).map_err(|issues| {
            debug!(issues = issues.len(), "Submission rejected by validation");
            WizardError::ValidationFailed(issues)
        })?;

        let id = self.persist_form().await?;
        let user_id = &self.session.user_id;

        if let Err(err) = self
            .deps
            .repository
            .update_decision_status(&self.session, &id, DecisionStatus::Analyzing)
            .await
        {
            error!(decision_id = %id, user_id = %user_id, error = %err, "Failed to mark decision analyzing");
            return Err(err.into());
        }
        info!(decision_id = %id, user_id = %user_id, status = %DecisionStatus::Analyzing, "Analysis started");

        let result = match self.run_analysis(on_progress, cancel).await {
            AnalysisOutcome::Finished(Ok(result)) => result,
            AnalysisOutcome::Finished(Err(err)) => {
                warn!(decision_id = %id, error = %err, "Analysis failed");
                self.revert_to_draft(&id).await;
                return Err(err.into());
            }
            AnalysisOutcome::TimedOut => {
                let timeout_secs = self.deps.analysis_timeout.as_secs();
                warn!(decision_id = %id, timeout_secs, "Analysis timed out");
                self.revert_to_draft(&id).await;
                return Err(AnalysisServiceError::Timeout { timeout_secs }.into());
            }
            AnalysisOutcome::Cancelled => {
                info!(decision_id = %id, "Analysis cancelled");
                self.revert_to_draft(&id).await;
                return Err(WizardError::Cancelled);
            }
        };

        if let Err(err) = result.ensure_renderable() {
            warn!(decision_id = %id, error = %err, "Analysis returned an unusable result");
            self.revert_to_draft(&id).await;
            return Err(AnalysisServiceError::invalid_response(err.to_string()).into());
        }

        if let Err(err) = self.store_result(&id, &result).await {
            error!(decision_id = %id, error = %err, "Failed to store analysis result");
            self.revert_to_draft(&id).await;
            return Err(err.into());
        }
        info!(decision_id = %id, user_id = %self.session.user_id, status = %DecisionStatus::Done, "Analysis complete");

        if self.mode == WizardMode::Create {
            self.notify_complete(id);
        }

        self.last_result = Some(result.clone());
        Ok(SubmitOutcome {
            decision_id: id,
            result,
        })
    }

    /// Creates the record on first submit; later submits update it in place.
    async fn persist_form(&mut self) -> Result<DecisionId, WizardError> {
        let repository = &self.deps.repository;
        match self.decision_id {
            Some(id) => {
                self.prepare_for_update(&id).await?;
                repository
                    .update_decision_full(&self.session, &id, &self.form)
                    .await
                    .map_err(|err| {
                        error!(decision_id = %id, error = %err, "Failed to update decision");
                        WizardError::from(err)
                    })?;
                debug!(decision_id = %id, "Decision updated");
                Ok(id)
            }
            None => {
                let decision = repository
                    .create_decision(&self.session, &self.session.user_id, &self.form)
                    .await
                    .map_err(|err| {
                        error!(user_id = %self.session.user_id, error = %err, "Failed to create decision");
                        WizardError::from(err)
                    })?;
                info!(decision_id = %decision.id, user_id = %self.session.user_id, "Decision created");
                self.decision_id = Some(decision.id);
                Ok(decision.id)
            }
        }
    }

    /// Checks the stored status before the form is overwritten.
    ///
    /// Archived records are read-only. A record left in `analyzing` by a
    /// failed revert is put back to `draft` so the run can start again.
    async fn prepare_for_update(&self, id: &DecisionId) -> Result<(), WizardError> {
        let repository = &self.deps.repository;
        let stored = repository
            .get_decision(&self.session, id)
            .await
            .map_err(|err| {
                error!(decision_id = %id, error = %err, "Failed to load decision");
                WizardError::from(err)
            })?;

        match stored.status {
            DecisionStatus::Archived => Err(WizardError::NotEditable(stored.status)),
            DecisionStatus::Analyzing => {
                warn!(decision_id = %id, "Recovering decision stuck in analyzing");
                repository
                    .update_decision_status(&self.session, id, DecisionStatus::Draft)
                    .await
                    .map_err(|err| {
                        error!(decision_id = %id, error = %err, "Failed to revert decision to draft");
                        WizardError::from(err)
                    })
            }
            DecisionStatus::Draft | DecisionStatus::Done => Ok(()),
        }
    }

    async fn run_analysis(
        &self,
        on_progress: ProgressCallback<'_>,
        cancel: Option<watch::Receiver<bool>>,
    ) -> AnalysisOutcome {
        let analysis = tokio::time::timeout(
            self.deps.analysis_timeout,
            self.deps.analysis.analyze(&self.form, on_progress),
        );

        let finished = match cancel {
            Some(mut cancel) => {
                tokio::select! {
                    finished = analysis => finished,
                    _ = cancelled(&mut cancel) => return AnalysisOutcome::Cancelled,
                }
            }
            None => analysis.await,
        };

        match finished {
            Ok(result) => AnalysisOutcome::Finished(result),
            Err(_) => AnalysisOutcome::TimedOut,
        }
    }

    async fn store_result(
        &self,
        id: &DecisionId,
        result: &AnalysisResult,
    ) -> Result<(), DomainError> {
        self.deps
            .repository
            .save_analysis_result(&self.session, id, result)
            .await?;
        self.deps
            .repository
            .update_decision_status(&self.session, id, DecisionStatus::Done)
            .await
    }

    async fn revert_to_draft(&self, id: &DecisionId) {
        match self
            .deps
            .repository
            .update_decision_status(&self.session, id, DecisionStatus::Draft)
            .await
        {
            Ok(()) => info!(decision_id = %id, status = %DecisionStatus::Draft, "Decision reverted"),
            Err(err) => error!(decision_id = %id, error = %err, "Failed to revert decision to draft"),
        }
    }

    /// Fire-and-forget completion notice.
    fn notify_complete(&self, id: DecisionId) {
        let Some(notifications) = self.deps.notifications.clone() else {
            return;
        };
        let user_id = self.session.user_id.clone();
        let title = self.form.title.clone();

        tokio::spawn(async move {
            if let Err(err) = notifications
                .notify_decision_complete(&user_id, &title, &id)
                .await
            {
                warn!(decision_id = %id, user_id = %user_id, error = %err, "Completion notification failed");
            }
        });
    }
}

/// Resolves once the flag reads `true`. Never resolves if the sender is
/// dropped without cancelling.
async fn cancelled(cancel: &mut watch::Receiver<bool>) {
    loop {
        if *cancel.borrow_and_update() {
            return;
        }
        if cancel.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
