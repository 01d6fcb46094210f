use crate::error::ValidationError;
use crate::forms::{Draft, Form};
use crate::model::Id;

/// A [`Form`] bound to the record it was opened for.
///
/// Every operation takes the id of the record currently on screen and does
/// nothing for any other id, so a draft (or a late response to its
/// submission) never lands on a different record. [`RecordEdit::discard`]
/// drops the draft even while its submission is outstanding.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordEdit<D: Draft> {
    target: Option<Id>,
    form: Form<D>,
}

impl<D: Draft> RecordEdit<D> {
    pub fn target(&self) -> Option<Id> {
        self.target
    }

    pub fn form(&self) -> &Form<D> {
        &self.form
    }

    /// Whether an edit of `id` is showing, editable or pending.
    pub fn is_open_for(&self, id: Id) -> bool {
        self.target == Some(id) && !self.form.is_hidden()
    }

    /// Starts editing `id` from `draft`, replacing any earlier edit.
    pub fn open(&mut self, id: Id, draft: D) {
        self.target = Some(id);
        self.form = Form::default();
        self.form.open_with(draft);
    }

    /// Closes an editable form. Ignored while pending.
    pub fn close(&mut self) {
        self.form.close();
        if self.form.is_hidden() {
            self.target = None;
        }
    }

    /// Forgets the edit outright, pending or not.
    pub fn discard(&mut self) {
        self.target = None;
        self.form = Form::default();
    }

    pub fn draft_mut(&mut self) -> Option<&mut D> {
        self.form.draft_mut()
    }

    /// Validates the draft for `id`. `Ok(None)` when the edit belongs to
    /// another record or is not accepting submissions.
    pub fn submit(&mut self, id: Id) -> Result<Option<(Id, D::Payload)>, ValidationError> {
        if self.target != Some(id) {
            return Ok(None);
        }
        Ok(self.form.submit()?.map(|payload| (id, payload)))
    }

    /// Resolves the submission for `id`; a response for any other record is
    /// dropped.
    pub fn settle(&mut self, id: Id, succeeded: bool) {
        if self.target != Some(id) {
            return;
        }
        self.form.settle(succeeded);
        if self.form.is_hidden() {
            self.target = None;
        }
    }
}
