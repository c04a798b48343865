//! A wizard session: explicit ownership of answers, steps, and the deferred
//! results handshake.
//!
//! Sessions are independent values; two concurrent wizards never share
//! state. The view layer forwards raw input notifications through
//! [`WizardSession::apply`] and drives navigation through
//! [`WizardSession::dispatch`].

use uuid::Uuid;

use crate::errors::WizardError;
use crate::state::{AnswerStore, StateManager};
use crate::steps::{StepsManager, ValidationFailure, WidgetBinding};

/// Raw input-change notifications forwarded by the view layer, applied in
/// arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    CheckboxToggled {
        field_id: String,
        group: Option<String>,
        checked: bool,
    },
    TextChanged {
        field_id: String,
        value: String,
    },
}

/// Step-transition commands. The view layer maps its buttons onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardCommand {
    Next,
    Previous,
    JumpTo(usize),
    Finish,
}

/// Outcome of a dispatched command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardReply {
    /// HTML for the step now current.
    Step(String),
    /// The jump target was out of range; nothing changed.
    Rejected,
    /// Finish was accepted; redeem the ticket once the reveal delay elapsed.
    Finished(ResultsTicket),
}

/// Claim check for the deferred results view. Tickets issued before a
/// restart are void, so a delayed reveal cannot resurrect a dismissed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultsTicket {
    generation: u64,
}

/// One running wizard.
pub struct WizardSession {
    id: Uuid,
    state: StateManager,
    steps: StepsManager,
    generation: u64,
}

impl WizardSession {
    pub fn new(steps: StepsManager) -> Self {
        Self {
            id: Uuid::new_v4(),
            state: StateManager::new(),
            steps,
            generation: 0,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Forwards an input notification into the answer store.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::CheckboxToggled {
                field_id,
                group,
                checked,
            } => self
                .state
                .record_checkbox_change(&field_id, group.as_deref(), checked),
            InputEvent::TextChanged { field_id, value } => {
                self.state.record_text_change(&field_id, &value)
            }
        }
    }

    /// Executes a navigation command. `Next` and `Finish` validate the
    /// current step first; a failure blocks the transition and mutates
    /// neither answers nor cursor.
    pub fn dispatch(&mut self, command: WizardCommand) -> Result<WizardReply, WizardError> {
        match command {
            WizardCommand::Next => {
                self.steps.validate(self.state.store())?;
                Ok(WizardReply::Step(self.steps.next()?))
            }
            WizardCommand::Previous => Ok(WizardReply::Step(self.steps.previous()?)),
            WizardCommand::JumpTo(index) => {
                if self.steps.set_index(index) {
                    Ok(WizardReply::Step(self.steps.current()?))
                } else {
                    Ok(WizardReply::Rejected)
                }
            }
            WizardCommand::Finish => Ok(WizardReply::Finished(self.finish()?)),
        }
    }

    /// Renders the current step.
    pub fn current_step(&mut self) -> Result<String, WizardError> {
        Ok(self.steps.current()?)
    }

    /// Validates the current step against the answers recorded so far.
    pub fn validate(&self) -> Result<(), ValidationFailure> {
        self.steps.validate(self.state.store())
    }

    /// Validates the current step and issues a claim check for the results
    /// view. The caller owns the reveal delay.
    pub fn finish(&mut self) -> Result<ResultsTicket, WizardError> {
        self.steps.validate(self.state.store())?;
        Ok(ResultsTicket {
            generation: self.generation,
        })
    }

    /// Renders the results view for a ticket, or `None` when the session was
    /// restarted after the ticket was issued.
    pub fn claim_results(&self, ticket: ResultsTicket) -> Result<Option<String>, WizardError> {
        if ticket.generation != self.generation {
            return Ok(None);
        }
        Ok(Some(self.steps.results(self.state.store())?))
    }

    /// Renders the results view directly, bypassing the ticket handshake.
    pub fn results(&self) -> Result<String, WizardError> {
        Ok(self.steps.results(self.state.store())?)
    }

    /// Resets the cursor, discards all answers, and voids outstanding
    /// results tickets.
    pub fn restart(&mut self) {
        self.generation += 1;
        self.state.clear();
        self.steps.set_index(0);
        tracing::debug!(session = %self.id, "wizard session restarted");
    }

    /// Snapshot of the answers recorded so far.
    pub fn state(&self) -> AnswerStore {
        self.state.state()
    }

    pub fn has_next(&self) -> bool {
        self.steps.has_next()
    }

    pub fn has_previous(&self) -> bool {
        self.steps.has_previous()
    }

    /// Widget bindings for the current step, for post-render initialization.
    pub fn current_widgets(&self) -> &[WidgetBinding] {
        self.steps.current_widgets()
    }

    /// Widget bindings registered under a specific template id.
    pub fn widget_bindings(&self, template_id: &str) -> &[WidgetBinding] {
        self.steps.widget_bindings(template_id)
    }
}
