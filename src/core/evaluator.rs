use crate::config::toml_config::Evaluation;
use crate::domain::model::Output;
use crate::domain::ports::Function;
use crate::utils::error::AddTimeError;
use serde::Serialize;

/// Outcome of one named call. Errors are kept per entry so one bad line
/// doesn't hide the others.
#[derive(Debug, Serialize)]
pub struct EvaluationResult {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Output>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EvaluationResult {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

pub struct Evaluator<F: Function> {
    function: F,
}

impl<F: Function> Evaluator<F> {
    pub fn new(function: F) -> Self {
        Self { function }
    }

    pub fn function(&self) -> &F {
        &self.function
    }

    pub fn evaluate(&self, evaluation: &Evaluation) -> EvaluationResult {
        let span = tracing::debug_span!("evaluate", name = %evaluation.name);
        let _guard = span.enter();

        match self.function.call(&evaluation.args) {
            Ok(value) => {
                tracing::debug!("{} => {}", evaluation.name, value);
                EvaluationResult {
                    name: evaluation.name.clone(),
                    value: Some(value),
                    error: None,
                }
            }
            Err(e) => {
                tracing::warn!("{} failed: {}", evaluation.name, e);
                EvaluationResult {
                    name: evaluation.name.clone(),
                    value: None,
                    error: Some(self.describe(&e)),
                }
            }
        }
    }

    pub fn run(&self, evaluations: &[Evaluation]) -> Vec<EvaluationResult> {
        tracing::info!("Evaluating {} call(s) of {}()", evaluations.len(), self.function.name());
        let results: Vec<_> = evaluations.iter().map(|e| self.evaluate(e)).collect();

        let failed = results.iter().filter(|r| !r.is_ok()).count();
        if failed > 0 {
            tracing::warn!("{} of {} evaluation(s) failed", failed, results.len());
        } else {
            tracing::info!("All {} evaluation(s) succeeded", results.len());
        }
        results
    }

    fn describe(&self, error: &AddTimeError) -> String {
        error.user_friendly_message(self.function.name())
    }
}
