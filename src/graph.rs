//! The build graph: build steps registered by the output they produce.

use crate::error::BuildError;
use std::collections::HashMap;

/// One build action: an external command or an in-process callback.
pub enum Action {
    /// An argument vector, spawned directly (no shell).
    Process(Vec<String>),
    /// Invoked in-process with no arguments; any result is ignored, only
    /// its filesystem side effects matter.
    Callback(Box<dyn Fn()>),
}

impl std::fmt::Debug for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Process(argv) => f.debug_tuple("Process").field(argv).finish(),
            Action::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct StepId(usize);
impl StepId {
    fn index(&self) -> usize {
        self.0
    }
}

/// A registered build rule: the actions that produce `output`, and the
/// targets that must be brought up to date first.
#[derive(Debug)]
pub struct Step {
    /// Unique identifier; also the path the actions are expected to
    /// produce, unless the step is phony.
    pub output: String,
    pub actions: Vec<Action>,
    pub deps: Vec<String>,
    /// Phony steps are always considered stale; their actions run on
    /// every refresh regardless of any mtime.
    pub phony: bool,
}

impl Step {
    pub fn new(output: impl Into<String>) -> Self {
        Step {
            output: output.into(),
            actions: Vec::new(),
            deps: Vec::new(),
            phony: false,
        }
    }

    /// Append an external command, given as an argument vector.
    pub fn command<I, S>(mut self, argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.actions
            .push(Action::Process(argv.into_iter().map(|s| s.into()).collect()));
        self
    }

    /// Append an in-process action.
    pub fn callback(mut self, f: impl Fn() + 'static) -> Self {
        self.actions.push(Action::Callback(Box::new(f)));
        self
    }

    pub fn dep(mut self, dep: impl Into<String>) -> Self {
        self.deps.push(dep.into());
        self
    }

    pub fn deps<I, S>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.deps.extend(deps.into_iter().map(|s| s.into()));
        self
    }

    pub fn phony(mut self) -> Self {
        self.phony = true;
        self
    }
}

/// The registry of steps.  Append-only: populated once by the embedding
/// build script, then only read during refreshes.
#[derive(Debug, Default)]
pub struct Graph {
    steps: Vec<Step>,
    by_output: HashMap<String, StepId>,
}

impl Graph {
    pub fn new() -> Graph {
        Graph::default()
    }

    /// Register a step.  Registering the same output twice is a build
    /// script bug and fails rather than silently overwriting.
    pub fn add_step(&mut self, step: Step) -> Result<StepId, BuildError> {
        if self.by_output.contains_key(&step.output) {
            return Err(BuildError::DuplicateStep(step.output));
        }
        let id = StepId(self.steps.len());
        self.by_output.insert(step.output.clone(), id);
        self.steps.push(step);
        Ok(id)
    }

    pub fn lookup(&self, output: &str) -> Option<&Step> {
        self.by_output.get(output).map(|id| &self.steps[id.index()])
    }

    /// Registered outputs, in registration order.
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|s| s.output.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_registered() {
        let mut graph = Graph::new();
        graph
            .add_step(Step::new("out.o").command(vec!["cc", "-c", "out.c"]).dep("out.c"))
            .unwrap();
        let step = graph.lookup("out.o").unwrap();
        assert_eq!(step.deps, vec!["out.c"]);
        assert!(!step.phony);
        assert!(graph.lookup("other").is_none());
    }

    #[test]
    fn duplicate_output_rejected() {
        let mut graph = Graph::new();
        graph.add_step(Step::new("out")).unwrap();
        match graph.add_step(Step::new("out")) {
            Err(BuildError::DuplicateStep(name)) => assert_eq!(name, "out"),
            other => panic!("expected DuplicateStep, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn targets_in_registration_order() {
        let mut graph = Graph::new();
        for name in ["b", "a", "c"] {
            graph.add_step(Step::new(name)).unwrap();
        }
        let names: Vec<_> = graph.targets().collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }
}
