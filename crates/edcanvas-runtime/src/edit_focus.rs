#![forbid(unsafe_code)]

//! Edit focus switching between a post and its template.
//!
//! The site editor can focus either the post being edited or the template
//! that wraps it. [`EditFocusSwitcher`] reads the current focus from an
//! [`EditSiteStore`], renders a two-button toggle once the post record or the
//! template has loaded, and raises a one-time snackbar when the template is
//! focused.
//!
//! Stores and the notice service are collaborator traits; this module keeps
//! no data of its own beyond "has the template notice been shown".
//!
//! # Invariants
//!
//! 1. The template notice is created at most once per switcher.
//! 2. `render()` is `None` until the post record resolves or the template
//!    loads.
//! 3. Exactly one button is active, the one matching the store's focus.

use std::fmt;

use tracing::{debug, info};

/// What the editor canvas is currently editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EditFocus {
    /// The post's own content.
    #[default]
    Post,
    /// The template wrapping the post.
    Template,
}

impl fmt::Display for EditFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Post => "post",
            Self::Template => "template",
        })
    }
}

/// Identifies the post being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContext {
    pub post_type: String,
    pub post_id: String,
}

/// The subset of an edited post record the switcher displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRecord {
    /// Post type label, e.g. `"page"`.
    pub post_type: String,
}

/// Resolution state of an entity record lookup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordState {
    /// Whether the lookup has finished (successfully or not).
    pub has_resolved: bool,
    /// The record, once available.
    pub record: Option<PostRecord>,
}

// ---------------------------------------------------------------------------
// Collaborators
// ---------------------------------------------------------------------------

/// The site editor's state store.
pub trait EditSiteStore {
    /// The post currently open in the editor.
    fn edited_post_context(&self) -> PostContext;
    /// Current edit focus.
    fn edit_focus(&self) -> EditFocus;
    /// Dispatch a focus change.
    fn set_edit_focus(&self, focus: EditFocus);
}

/// Access to entity records.
pub trait EntityRecords {
    /// Look up an edited post record.
    fn post_record(&self, post_type: &str, post_id: &str) -> RecordState;
    /// Whether the template for the edited post has loaded.
    fn is_template_loaded(&self) -> bool;
}

/// The editor's notice service.
pub trait Notices {
    /// Show an informational notice.
    fn create_info_notice(&self, notice: InfoNotice);
}

/// Presentation of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Transient toast at the bottom of the screen.
    Snackbar,
}

/// What a notice action button does when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeAction {
    /// Switch the edit focus.
    SetEditFocus(EditFocus),
}

/// A labelled action on a notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeActionButton {
    pub label: String,
    pub action: NoticeAction,
}

/// An informational notice request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoNotice {
    pub message: String,
    pub kind: NoticeKind,
    pub actions: Vec<NoticeActionButton>,
}

/// Message shown when the template gains focus.
pub const TEMPLATE_NOTICE_MESSAGE: &str = "You are editing a template";
/// Label of the notice action returning to the post.
pub const BACK_TO_PAGE_LABEL: &str = "Back to page";
/// Label of the template toggle button.
pub const TEMPLATE_BUTTON_LABEL: &str = "Template";

impl InfoNotice {
    fn editing_template() -> Self {
        Self {
            message: TEMPLATE_NOTICE_MESSAGE.to_string(),
            kind: NoticeKind::Snackbar,
            actions: vec![NoticeActionButton {
                label: BACK_TO_PAGE_LABEL.to_string(),
                action: NoticeAction::SetEditFocus(EditFocus::Post),
            }],
        }
    }
}

// ---------------------------------------------------------------------------
// View
// ---------------------------------------------------------------------------

/// One toggle button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusButton {
    pub label: String,
    pub focus: EditFocus,
    pub active: bool,
}

/// The rendered switcher: post button then template button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitcherView {
    pub buttons: [FocusButton; 2],
}

impl SwitcherView {
    /// The active button.
    #[must_use]
    pub fn active(&self) -> Option<&FocusButton> {
        self.buttons.iter().find(|b| b.active)
    }
}

// ---------------------------------------------------------------------------
// Switcher
// ---------------------------------------------------------------------------

/// Toggle between editing the post and its template.
pub struct EditFocusSwitcher<'a, S: ?Sized, R: ?Sized, N: ?Sized> {
    store: &'a S,
    records: &'a R,
    notices: &'a N,
    shown_notification: bool,
}

impl<S: ?Sized, R: ?Sized, N: ?Sized> fmt::Debug for EditFocusSwitcher<'_, S, R, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditFocusSwitcher")
            .field("shown_notification", &self.shown_notification)
            .finish_non_exhaustive()
    }
}

impl<'a, S, R, N> EditFocusSwitcher<'a, S, R, N>
where
    S: EditSiteStore + ?Sized,
    R: EntityRecords + ?Sized,
    N: Notices + ?Sized,
{
    #[must_use]
    pub fn new(store: &'a S, records: &'a R, notices: &'a N) -> Self {
        Self {
            store,
            records,
            notices,
            shown_notification: false,
        }
    }

    /// React to the current focus. Call after every store change.
    ///
    /// Returns whether a notice was created by this call.
    pub fn sync(&mut self) -> bool {
        if self.store.edit_focus() != EditFocus::Template || self.shown_notification {
            return false;
        }
        self.shown_notification = true;
        info!("template focused; showing notice");
        self.notices.create_info_notice(InfoNotice::editing_template());
        true
    }

    /// Whether the template notice has been shown.
    #[must_use]
    pub fn notice_shown(&self) -> bool {
        self.shown_notification
    }

    /// Build the toggle view, or `None` while nothing has loaded.
    #[must_use]
    pub fn render(&self) -> Option<SwitcherView> {
        let ctx = self.store.edited_post_context();
        let post = self.records.post_record(&ctx.post_type, &ctx.post_id);
        if !post.has_resolved && !self.records.is_template_loaded() {
            return None;
        }

        let focus = self.store.edit_focus();
        let post_label = post.record.map(|r| r.post_type).unwrap_or_default();
        Some(SwitcherView {
            buttons: [
                FocusButton {
                    label: post_label,
                    focus: EditFocus::Post,
                    active: focus == EditFocus::Post,
                },
                FocusButton {
                    label: TEMPLATE_BUTTON_LABEL.to_string(),
                    focus: EditFocus::Template,
                    active: focus == EditFocus::Template,
                },
            ],
        })
    }

    /// A toggle button was pressed.
    pub fn select(&self, focus: EditFocus) {
        debug!(%focus, "edit focus selected");
        self.store.set_edit_focus(focus);
    }

    /// A notice action button was pressed.
    pub fn activate(&self, action: &NoticeAction) {
        match *action {
            NoticeAction::SetEditFocus(focus) => self.select(focus),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
