//! Simulated publish/archive actions and the dialog seam.
//!
//! The view-model never prompts. An action is first turned into an
//! [`ActionPlan`]: either a notice explaining there is nothing to do, or a
//! confirmation prompt. Only after the host has confirmed (and shown the
//! completion notice) does it call [`RowAction::complete`], which applies the
//! simulated effect to the selection.

use serde::Serialize;
use tracing::info;

use crate::error::TableError;
use crate::fmt::plural_suffix;
use crate::model::ArticleTable;

/// Kind of simulated action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Publish,
    Archive,
}

/// Rows an action applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionTarget {
    /// Every selected row.
    Selected,
    /// A single row.
    Row(u64),
}

/// Severity of a notice, mirrors the dialog icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Info,
    Success,
    Warning,
}

/// Message shown to the user with a single dismiss button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub text: String,
    pub dismiss_label: &'static str,
}

/// Yes/no question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub title: String,
    pub text: String,
    pub confirm_label: &'static str,
    pub cancel_label: &'static str,
    /// Archive prompts are rendered as warnings.
    pub destructive: bool,
}

/// What the host should do for an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionPlan {
    /// Nothing to act on; show the notice and stop.
    NothingToDo(Notice),
    /// Ask the user first.
    Confirm(Prompt),
}

/// Result of driving an action through a [`Dialog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    NothingToDo,
    Cancelled,
    /// Number of selection entries the action removed.
    Completed { affected: usize },
}

/// A publish or archive request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowAction {
    pub kind: ActionKind,
    pub target: ActionTarget,
}

impl RowAction {
    pub fn bulk_publish() -> Self {
        Self {
            kind: ActionKind::Publish,
            target: ActionTarget::Selected,
        }
    }

    pub fn publish(id: u64) -> Self {
        Self {
            kind: ActionKind::Publish,
            target: ActionTarget::Row(id),
        }
    }

    pub fn archive(id: u64) -> Self {
        Self {
            kind: ActionKind::Archive,
            target: ActionTarget::Row(id),
        }
    }

    pub fn bulk_archive() -> Self {
        Self {
            kind: ActionKind::Archive,
            target: ActionTarget::Selected,
        }
    }

    fn row_title(table: &ArticleTable, id: u64) -> Result<&str, TableError> {
        table
            .row(id)
            .map(|row| row.title.as_str())
            .ok_or(TableError::UnknownRow(id))
    }

    /// Decides whether to prompt or to report that there is nothing to do.
    pub fn plan(&self, table: &ArticleTable) -> Result<ActionPlan, TableError> {
        let plan = match (self.kind, self.target) {
            (kind, ActionTarget::Selected) if table.selected_count() == 0 => {
                let verb = match kind {
                    ActionKind::Publish => "publish",
                    ActionKind::Archive => "archive",
                };
                ActionPlan::NothingToDo(Notice {
                    kind: NoticeKind::Warning,
                    title: "No articles selected".to_string(),
                    text: format!("Select one or more rows first to bulk {}.", verb),
                    dismiss_label: "Ok",
                })
            }
            (ActionKind::Publish, ActionTarget::Selected) => {
                let count = table.selected_count();
                ActionPlan::Confirm(Prompt {
                    title: "Bulk publish".to_string(),
                    text: format!(
                        "Publish {} selected article{} to WordPress?",
                        count,
                        plural_suffix(count)
                    ),
                    confirm_label: "Yes, publish",
                    cancel_label: "Cancel",
                    destructive: false,
                })
            }
            (ActionKind::Publish, ActionTarget::Row(id)) => {
                let title = Self::row_title(table, id)?;
                ActionPlan::Confirm(Prompt {
                    title: "Publish to WordPress?".to_string(),
                    text: format!("Publish \"{}\" to your connected WordPress site?", title),
                    confirm_label: "Yes, publish",
                    cancel_label: "Cancel",
                    destructive: false,
                })
            }
            (ActionKind::Archive, ActionTarget::Selected) => {
                let count = table.selected_count();
                ActionPlan::Confirm(Prompt {
                    title: format!("Archive {} article{}?", count, plural_suffix(count)),
                    text: "Archiving will remove the article from your active lists.".to_string(),
                    confirm_label: "Archive",
                    cancel_label: "Keep it",
                    destructive: true,
                })
            }
            (ActionKind::Archive, ActionTarget::Row(id)) => {
                Self::row_title(table, id)?;
                ActionPlan::Confirm(Prompt {
                    title: "Archive article?".to_string(),
                    text: "Archiving will remove the article from your active lists.".to_string(),
                    confirm_label: "Archive",
                    cancel_label: "Keep it",
                    destructive: true,
                })
            }
        };
        Ok(plan)
    }

    /// Notice shown once the user confirmed.
    pub fn completion_notice(&self, table: &ArticleTable) -> Result<Notice, TableError> {
        let notice = match (self.kind, self.target) {
            (ActionKind::Publish, ActionTarget::Selected) => Notice {
                kind: NoticeKind::Success,
                title: "Queued for publishing".to_string(),
                text: "The selected articles have been added to your publishing queue."
                    .to_string(),
                dismiss_label: "Great",
            },
            (ActionKind::Publish, ActionTarget::Row(id)) => Notice {
                kind: NoticeKind::Success,
                title: "Queued for publishing".to_string(),
                text: format!(
                    "\"{}\" has been added to your WordPress publishing queue.",
                    Self::row_title(table, id)?
                ),
                dismiss_label: "Great",
            },
            (ActionKind::Archive, ActionTarget::Selected) => Notice {
                kind: NoticeKind::Success,
                title: "Archive requested".to_string(),
                text: "The selected articles will be moved to your archive.".to_string(),
                dismiss_label: "Nice",
            },
            (ActionKind::Archive, ActionTarget::Row(id)) => Notice {
                kind: NoticeKind::Success,
                title: "Archive requested".to_string(),
                text: format!(
                    "\"{}\" will be moved to your archive.",
                    Self::row_title(table, id)?
                ),
                dismiss_label: "Nice",
            },
        };
        Ok(notice)
    }

    /// Applies the simulated effect: bulk actions clear the selection, single
    /// row actions deselect that row. Returns the number of ids removed.
    pub fn complete(&self, table: &mut ArticleTable) -> usize {
        let affected = match self.target {
            ActionTarget::Selected => {
                let count = table.selected_count();
                table.clear_selection();
                count
            }
            ActionTarget::Row(id) => usize::from(table.deselect(id)),
        };
        info!(kind = ?self.kind, target = ?self.target, affected, "action completed");
        affected
    }
}

/// Dialog collaborator for synchronous hosts.
pub trait Dialog {
    /// Asks a yes/no question. Returns true when confirmed.
    fn confirm(&mut self, prompt: &Prompt) -> bool;

    fn notify(&mut self, notice: &Notice);
}

/// Drives an action end to end: plan, confirm, notify, complete.
pub fn run_action(
    table: &mut ArticleTable,
    action: RowAction,
    dialog: &mut dyn Dialog,
) -> Result<ActionOutcome, TableError> {
    match action.plan(table)? {
        ActionPlan::NothingToDo(notice) => {
            dialog.notify(&notice);
            Ok(ActionOutcome::NothingToDo)
        }
        ActionPlan::Confirm(prompt) => {
            if !dialog.confirm(&prompt) {
                return Ok(ActionOutcome::Cancelled);
            }
            let notice = action.completion_notice(table)?;
            dialog.notify(&notice);
            let affected = action.complete(table);
            Ok(ActionOutcome::Completed { affected })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed_rows;
    use crate::table::TableConfig;

    /// Answers prompts from a script and records everything shown.
    struct ScriptedDialog {
        answers: Vec<bool>,
        prompts: Vec<Prompt>,
        notices: Vec<Notice>,
    }

    impl ScriptedDialog {
        fn answering(answers: &[bool]) -> Self {
            Self {
                answers: answers.to_vec(),
                prompts: Vec::new(),
                notices: Vec::new(),
            }
        }
    }

    impl Dialog for ScriptedDialog {
        fn confirm(&mut self, prompt: &Prompt) -> bool {
            self.prompts.push(prompt.clone());
            if self.answers.is_empty() {
                false
            } else {
                self.answers.remove(0)
            }
        }

        fn notify(&mut self, notice: &Notice) {
            self.notices.push(notice.clone());
        }
    }

    fn table() -> ArticleTable {
        ArticleTable::new(seed_rows(), TableConfig::default()).unwrap()
    }

    #[test]
    fn bulk_publish_without_selection_is_nothing_to_do() {
        let mut t = table();
        let mut dialog = ScriptedDialog::answering(&[true]);
        let outcome = run_action(&mut t, RowAction::bulk_publish(), &mut dialog).unwrap();
        assert_eq!(outcome, ActionOutcome::NothingToDo);
        assert!(dialog.prompts.is_empty());
        assert_eq!(dialog.notices.len(), 1);
        assert_eq!(dialog.notices[0].kind, NoticeKind::Warning);
        assert_eq!(dialog.notices[0].title, "No articles selected");
    }

    #[test]
    fn confirmed_bulk_publish_clears_selection() {
        let mut t = table();
        t.toggle_row_selected(1).unwrap();
        t.toggle_row_selected(2).unwrap();
        let mut dialog = ScriptedDialog::answering(&[true]);
        let outcome = run_action(&mut t, RowAction::bulk_publish(), &mut dialog).unwrap();
        assert_eq!(outcome, ActionOutcome::Completed { affected: 2 });
        assert_eq!(
            dialog.prompts[0].text,
            "Publish 2 selected articles to WordPress?"
        );
        assert_eq!(dialog.notices[0].title, "Queued for publishing");
        assert_eq!(t.selected_count(), 0);
    }

    #[test]
    fn cancelled_publish_keeps_selection() {
        let mut t = table();
        t.toggle_row_selected(3).unwrap();
        let mut dialog = ScriptedDialog::answering(&[false]);
        let outcome = run_action(&mut t, RowAction::bulk_publish(), &mut dialog).unwrap();
        assert_eq!(outcome, ActionOutcome::Cancelled);
        assert_eq!(dialog.prompts[0].text, "Publish 1 selected article to WordPress?");
        assert!(dialog.notices.is_empty());
        assert_eq!(t.selected_ids(), vec![3]);
    }

    #[test]
    fn single_publish_deselects_only_that_row() {
        let mut t = table();
        t.toggle_row_selected(4).unwrap();
        t.toggle_row_selected(5).unwrap();
        let mut dialog = ScriptedDialog::answering(&[true]);
        let outcome = run_action(&mut t, RowAction::publish(4), &mut dialog).unwrap();
        assert_eq!(outcome, ActionOutcome::Completed { affected: 1 });
        assert!(dialog.prompts[0].text.contains("Top Virtual Executive Assistant"));
        assert!(dialog.notices[0].text.starts_with("\"Top Virtual"));
        assert_eq!(t.selected_ids(), vec![5]);
    }

    #[test]
    fn single_publish_of_unselected_row_affects_nothing() {
        let mut t = table();
        let mut dialog = ScriptedDialog::answering(&[true]);
        let outcome = run_action(&mut t, RowAction::publish(1), &mut dialog).unwrap();
        assert_eq!(outcome, ActionOutcome::Completed { affected: 0 });
    }

    #[test]
    fn unknown_row_is_rejected() {
        let t = table();
        assert_eq!(
            RowAction::publish(42).plan(&t),
            Err(TableError::UnknownRow(42))
        );
        assert_eq!(
            RowAction::archive(42).plan(&t),
            Err(TableError::UnknownRow(42))
        );
    }

    #[test]
    fn archive_prompt_is_destructive() {
        let t = table();
        let ActionPlan::Confirm(prompt) = RowAction::archive(1).plan(&t).unwrap() else {
            panic!("expected a confirmation prompt");
        };
        assert!(prompt.destructive);
        assert_eq!(prompt.confirm_label, "Archive");
        assert_eq!(prompt.cancel_label, "Keep it");
    }

    #[test]
    fn bulk_archive_counts_selection() {
        let mut t = table();
        t.toggle_select_all_visible();
        let ActionPlan::Confirm(prompt) = RowAction::bulk_archive().plan(&t).unwrap() else {
            panic!("expected a confirmation prompt");
        };
        assert_eq!(prompt.title, "Archive 5 articles?");
        assert_eq!(RowAction::bulk_archive().complete(&mut t), 5);
        assert_eq!(t.selected_count(), 0);
    }
}
