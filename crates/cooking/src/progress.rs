use std::collections::BTreeSet;
use std::fmt;

use cookmate_shared::Step;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Current,
    Completed,
    Pending,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encouragement {
    Start,
    Midway,
    Final,
}

impl fmt::Display for Encouragement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Encouragement::Start => "Let's go! Something tasty is on its way",
            Encouragement::Midway => "Nice work, keep it up",
            Encouragement::Final => "Last step, almost there",
        };

        f.write_str(text)
    }
}

/// Step-by-step cooking state for one recipe.
///
/// Time is counted in seconds. Nothing here schedules ticks, the caller
/// drives [`CookingProgress::tick`] from whatever clock it has.
#[derive(Clone, Debug)]
pub struct CookingProgress {
    steps: Vec<Step>,
    current_index: usize,
    time_left: u64,
    is_running: bool,
    completed: BTreeSet<usize>,
    show_completion: bool,
}

impl CookingProgress {
    pub fn new(steps: Vec<Step>) -> cookmate_shared::Result<Self> {
        let Some(first) = steps.first() else {
            cookmate_shared::bail!("recipe has no steps to cook");
        };

        let time_left = first.duration;

        Ok(Self {
            steps,
            current_index: 0,
            time_left,
            is_running: false,
            completed: BTreeSet::new(),
            show_completion: false,
        })
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_step(&self) -> &Step {
        &self.steps[self.current_index]
    }

    pub fn time_left(&self) -> u64 {
        self.time_left
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn completed(&self) -> &BTreeSet<usize> {
        &self.completed
    }

    pub fn show_completion(&self) -> bool {
        self.show_completion
    }

    pub fn toggle_running(&mut self) {
        self.is_running = !self.is_running;
    }

    /// Counts one second down, only while running.
    pub fn tick(&mut self) {
        if self.is_running && self.time_left > 0 {
            self.time_left -= 1;
        }
    }

    pub fn restart_timer_for_current_step(&mut self) {
        self.time_left = self.current_step().duration;
    }

    pub fn next(&mut self) {
        self.completed.insert(self.current_index);

        if self.is_last_step() {
            self.show_completion = true;
            tracing::debug!(steps = self.steps.len(), "all cooking steps completed");
            return;
        }

        self.current_index += 1;
        self.restart_timer_for_current_step();
        self.is_running = false;
    }

    pub fn previous(&mut self) {
        if self.current_index == 0 {
            return;
        }

        self.current_index -= 1;
        self.restart_timer_for_current_step();
        self.is_running = false;
    }

    pub fn progress(&self) -> f64 {
        (self.current_index + 1) as f64 / self.steps.len() as f64
    }

    pub fn is_last_step(&self) -> bool {
        self.current_index == self.steps.len() - 1
    }

    pub fn step_status(&self, index: usize) -> StepStatus {
        if index == self.current_index {
            StepStatus::Current
        } else if self.completed.contains(&index) {
            StepStatus::Completed
        } else {
            StepStatus::Pending
        }
    }

    pub fn encouragement(&self) -> Encouragement {
        if self.current_index == 0 {
            Encouragement::Start
        } else if self.is_last_step() {
            Encouragement::Final
        } else {
            Encouragement::Midway
        }
    }
}
