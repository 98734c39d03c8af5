//! Workflow plan types: resolved, not-yet-executed invocation steps.
//!
//! The function-calling bridge only ever produces single-step workflows;
//! the type stays an ordered sequence so an orchestration layer can compose
//! longer plans.

use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowStep {
    pub action: String,
    pub input: Option<Value>,
}

impl WorkflowStep {
    pub fn nullary(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            input: None,
        }
    }

    pub fn unary(action: impl Into<String>, input: Value) -> Self {
        Self {
            action: action.into(),
            input: Some(input),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Workflow {
    steps: Vec<WorkflowStep>,
}

impl Workflow {
    pub fn new(steps: Vec<WorkflowStep>) -> Self {
        Self { steps }
    }

    pub fn single(step: WorkflowStep) -> Self {
        Self::new(vec![step])
    }

    pub fn push(&mut self, step: WorkflowStep) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[WorkflowStep] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<WorkflowStep> {
        self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl IntoIterator for Workflow {
    type Item = WorkflowStep;
    type IntoIter = std::vec::IntoIter<WorkflowStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}
