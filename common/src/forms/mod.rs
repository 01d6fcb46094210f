//! Add/edit form lifecycle.
//!
//! Each form moves through `Hidden -> Visible -> Pending` and settles back to
//! `Hidden` (reset) on success or `Visible` (values intact) on failure. The
//! draft holds raw input strings; [`Draft::validate`] turns it into a request
//! payload or rejects it before anything is sent. Edits of an existing
//! record go through [`RecordEdit`], which ties the form to that record.

mod drafts;
mod edit;

pub use drafts::{
    CourseDraft, CourseField, EnrollmentDraft, EnrollmentField, StudentDraft, StudentField,
};
pub use edit::RecordEdit;

use crate::error::ValidationError;

/// Raw form input that can be validated into a request payload.
pub trait Draft: Default {
    type Payload;

    fn validate(&self) -> Result<Self::Payload, ValidationError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Hidden,
    Visible,
    /// Submitted; waiting for the request and its reloads to settle.
    Pending,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Form<D: Draft> {
    phase: FormPhase,
    draft: D,
}

impl<D: Draft> Form<D> {
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_hidden(&self) -> bool {
        self.phase == FormPhase::Hidden
    }

    pub fn is_pending(&self) -> bool {
        self.phase == FormPhase::Pending
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    /// Shows the form with an empty draft.
    pub fn open(&mut self) {
        self.open_with(D::default());
    }

    /// Shows the form seeded with `draft` (defaults, or a record being edited).
    pub fn open_with(&mut self, draft: D) {
        self.phase = FormPhase::Visible;
        self.draft = draft;
    }

    /// Hides and resets the form. Ignored while a submission is pending.
    pub fn close(&mut self) {
        if self.phase != FormPhase::Pending {
            self.reset();
        }
    }

    /// Mutable access to the draft, only while the user may edit it.
    pub fn draft_mut(&mut self) -> Option<&mut D> {
        match self.phase {
            FormPhase::Visible => Some(&mut self.draft),
            _ => None,
        }
    }

    /// Validates the draft and, if it passes, moves to `Pending`.
    ///
    /// Returns `Ok(None)` when the form is not accepting submissions (hidden
    /// or already pending). A validation error leaves the form `Visible`.
    pub fn submit(&mut self) -> Result<Option<D::Payload>, ValidationError> {
        if self.phase != FormPhase::Visible {
            return Ok(None);
        }
        let payload = self.draft.validate()?;
        self.phase = FormPhase::Pending;
        Ok(Some(payload))
    }

    /// Resolves a pending submission: success hides and resets, failure
    /// returns to `Visible` with the entered values.
    pub fn settle(&mut self, succeeded: bool) {
        if self.phase != FormPhase::Pending {
            return;
        }
        if succeeded {
            self.reset();
        } else {
            self.phase = FormPhase::Visible;
        }
    }

    fn reset(&mut self) {
        self.phase = FormPhase::Hidden;
        self.draft = D::default();
    }
}
