/// One step the host must perform to converge staged state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StagingAction {
    /// Mount the overlay content, detached and invisible.
    Stage,
    /// Run the presentation for already-staged content.
    Promote,
    /// Run the dismissal, leaving the content staged.
    Dismiss,
    /// Unmount staged content.
    Unstage,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mount {
    Unmounted,
    Staged,
    Presented,
}

/// Debounced bridge between a declarative "should be presented" flag and
/// the imperative presentation machinery.
///
/// Mutators only record intent; [`StagedPresentation::flush`] emits the
/// next action needed to converge, one per call, and `None` once settled.
/// Because nothing happens until the host pumps, rapid present/dismiss
/// churn within one pump collapses to the net state change.
///
/// Content requested while the host is detached is staged rather than
/// presented and promoted when the host attaches; detaching mid
/// presentation demotes back to staged so reattachment can promote again.
#[derive(Clone, Copy, Debug)]
pub struct StagedPresentation {
    requested: bool,
    attached: bool,
    mount: Mount,
}

impl Default for StagedPresentation {
    fn default() -> Self {
        Self::new()
    }
}

impl StagedPresentation {
    /// A settled, unmounted, detached presentation.
    pub fn new() -> Self {
        Self {
            requested: false,
            attached: false,
            mount: Mount::Unmounted,
        }
    }

    /// Record that the overlay should be on screen.
    pub fn request_present(&mut self) {
        self.requested = true;
    }

    /// Record that the overlay should be off screen.
    pub fn request_dismiss(&mut self) {
        self.requested = false;
    }

    /// Record whether the host is attached to a live window.
    pub fn set_attached(&mut self, attached: bool) {
        self.attached = attached;
    }

    /// Whether the overlay is currently presented.
    pub fn is_presented(&self) -> bool {
        self.mount == Mount::Presented
    }

    /// Whether content is mounted but not presented.
    pub fn is_staged(&self) -> bool {
        self.mount == Mount::Staged
    }

    /// Whether the declarative state asks for presentation.
    pub fn wants_presentation(&self) -> bool {
        self.requested
    }

    /// Emit the next convergence step, or `None` when settled.
    ///
    /// Callers pump this until it returns `None`, performing each action
    /// as it comes out.
    pub fn flush(&mut self) -> Option<StagingAction> {
        let action = match (self.requested, self.attached, self.mount) {
            (true, _, Mount::Unmounted) => {
                self.mount = Mount::Staged;
                StagingAction::Stage
            }
            (true, true, Mount::Staged) => {
                self.mount = Mount::Presented;
                StagingAction::Promote
            }
            (true, false, Mount::Presented) => {
                self.mount = Mount::Staged;
                StagingAction::Dismiss
            }
            (false, _, Mount::Presented) => {
                self.mount = Mount::Staged;
                StagingAction::Dismiss
            }
            (false, _, Mount::Staged) => {
                self.mount = Mount::Unmounted;
                StagingAction::Unstage
            }
            (true, false, Mount::Staged) | (true, true, Mount::Presented) | (false, _, Mount::Unmounted) => {
                return None;
            }
        };
        tracing::debug!(?action, requested = self.requested, attached = self.attached, "staging flush");
        Some(action)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/controller/staging.rs"]
mod tests;
