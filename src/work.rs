//! The refresh engine: decides by mtime comparison which targets are
//! stale and runs their actions, depth-first over dependencies.
//!
//! The graph is assumed acyclic, as in Make; a cycle recurses without
//! bound.

use crate::error::BuildError;
use crate::fs::{self, MTime};
use crate::graph::Graph;
use crate::progress::Console;
use crate::task;

pub struct Work<'a> {
    graph: &'a Graph,
    console: &'a Console,
    /// Count of steps whose actions ran, for the end-of-run summary.
    pub ran: usize,
}

impl<'a> Work<'a> {
    pub fn new(graph: &'a Graph, console: &'a Console) -> Self {
        Work {
            graph,
            console,
            ran: 0,
        }
    }

    /// Bring `target` and, transitively, its dependencies up to date,
    /// running actions only for stale steps.  Returns the target's
    /// resulting mtime.
    pub fn refresh(&mut self, target: &str) -> Result<MTime, BuildError> {
        let graph = self.graph;
        let target_time = stat(target)?;
        let step = match graph.lookup(target) {
            Some(step) => step,
            None => {
                if target_time == MTime::Missing {
                    return Err(BuildError::MissingRule(target.to_owned()));
                }
                // A plain source file: its mtime is the whole answer.
                return Ok(target_time);
            }
        };

        // Seed the watermark just below the target's own time, so a step
        // with no newer dependency is up to date by default.  Phony steps
        // seed just above it and are stale no matter what.
        let ttime = target_time.units();
        let mut watermark = if step.phony { ttime + 1 } else { ttime - 1 };
        let mut cause: Option<&str> = None;

        for dep in &step.deps {
            let dtime = self.refresh(dep)?.units();
            if dtime > watermark {
                watermark = dtime;
                cause = Some(dep);
            }
        }

        // Equal times count as stale: with whole-second stamps we can't
        // tell which write happened first, so rebuild rather than risk a
        // stale output.
        if watermark < ttime {
            self.console
                .explain(&format!("{} ({}) is up to date", target, ttime));
            return Ok(target_time);
        }
        match cause {
            Some(dep) => self.console.explain(&format!(
                "{} ({}) is outdated because {} ({}) is newer",
                target, ttime, dep, watermark
            )),
            None => self
                .console
                .explain(&format!("{} is outdated: phony target", target)),
        }

        task::execute(step, self.console)?;
        self.ran += 1;

        // Phony steps normally leave no file behind; for real steps, not
        // touching the output is a build script smell worth a warning.
        let new_time = stat(target)?;
        if watermark > new_time.units() && !step.phony {
            self.console
                .warning(&format!("file {:?} was not updated by its step", target));
        }
        self.console
            .explain(&format!("{} new time is {}", target, new_time.units()));
        Ok(new_time)
    }
}

fn stat(path: &str) -> Result<MTime, BuildError> {
    fs::stat(path).map_err(|source| BuildError::Stat {
        path: path.to_owned(),
        source,
    })
}
