//! Decision Wizard demo binary.
//!
//! Runs one decision through the wizard using a template, in-memory
//! persistence and either the configured remote analysis function or the
//! mock service. The rendered result is printed to stdout as JSON; logs
//! go to stderr. Ctrl-C during analysis cancels the run.
//!
//! ```text
//! decision-wizard [TEMPLATE_ID]
//! ```

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

use decision_wizard::adapters::{
    BuiltinTemplateProvider, HttpAnalysisConfig, HttpAnalysisService, InMemoryDecisionRepository,
    LogNotificationService, MockAnalysisService, StaticAuthProvider, YamlTemplateProvider,
};
use decision_wizard::application::{
    ListDecisionsHandler, ListDecisionsQuery, WizardController, WizardDeps,
};
use decision_wizard::config::AppConfig;
use decision_wizard::domain::analysis::ResultRenderer;
use decision_wizard::domain::foundation::{DecisionStatus, UserId};
use decision_wizard::domain::wizard::Advance;
use decision_wizard::ports::{AnalysisService, AuthProvider, TemplateProvider};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

const DEFAULT_TEMPLATE: &str = "programming-language";

#[tokio::main]
async fn main() {
    let config = match AppConfig::load_validated() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    init_tracing(config.logging.json);

    let template_id = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_TEMPLATE.to_string());

    if let Err(e) = run(&config, &template_id).await {
        tracing::error!("Wizard run failed: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn analysis_service(config: &AppConfig) -> Result<Arc<dyn AnalysisService>, BoxError> {
    match HttpAnalysisConfig::from_app_config(&config.analysis) {
        Some(http) => {
            tracing::info!(endpoint = %http.endpoint, "Using remote analysis service");
            Ok(Arc::new(HttpAnalysisService::new(http)?))
        }
        None => {
            tracing::info!("No analysis endpoint configured, using mock analysis");
            Ok(Arc::new(
                MockAnalysisService::new().with_delay(Duration::from_millis(900)),
            ))
        }
    }
}

fn template_provider(config: &AppConfig) -> Result<Box<dyn TemplateProvider>, BoxError> {
    match &config.templates.path {
        Some(path) => Ok(Box::new(YamlTemplateProvider::from_path(path)?)),
        None => Ok(Box::new(BuiltinTemplateProvider::new())),
    }
}

async fn run(config: &AppConfig, template_id: &str) -> Result<(), BoxError> {
    let repository = Arc::new(InMemoryDecisionRepository::new());
    let mut deps = WizardDeps::new(repository.clone(), analysis_service(config)?)
        .with_analysis_timeout(config.analysis.timeout());
    if config.notifications.enabled {
        deps = deps.with_notifications(Arc::new(LogNotificationService::new()));
    }

    let auth = StaticAuthProvider::for_user(UserId::new("demo-user")?);
    let mut wizard = WizardController::start(&auth, deps).await?;
    let templates = template_provider(config)?;
    wizard.apply_template(templates.as_ref(), template_id)?;

    loop {
        match wizard.next() {
            Advance::Moved(step) => tracing::info!(step = %step, "{}", step.description()),
            Advance::AtEnd => break,
            Advance::Blocked(issues) => {
                for issue in &issues {
                    tracing::warn!(step = %issue.step, field = %issue.field, "{}", issue.message);
                }
                return Err(format!("template {template_id} does not complete the wizard").into());
            }
        }
    }

    let (cancel_tx, cancel_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = cancel_tx.send(true);
        }
    });

    let on_progress = |message: &str| tracing::info!("{message}");
    let outcome = wizard.submit_with_cancel(&on_progress, cancel_rx).await?;

    let renderer = ResultRenderer::new(config.presentation.thresholds());
    let rendered = renderer.render(&outcome.result)?;
    println!("{}", serde_json::to_string_pretty(&rendered)?);

    let session = auth.current_session().await?;
    let list = ListDecisionsHandler::new(repository)
        .handle(&session, ListDecisionsQuery::default())
        .await?;
    tracing::info!(
        total = list.counts.total(),
        complete = list.counts.get(DecisionStatus::Done),
        "Dashboard updated"
    );

    Ok(())
}
