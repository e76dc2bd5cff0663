//! Exclusive pointer engagement shared by all widgets.

use crate::widget::WidgetId;

/// Process-wide interaction flags for the GUI.
///
/// At most one widget owns the engagement at a time. Only the owner can
/// release it. The "used this frame" flag is reset by [`begin_frame`] and
/// lets the host skip world interaction (camera drags, picking) on frames
/// where the pointer was consumed by the GUI.
///
/// The owner is also recorded when the frame begins. Click-only widgets test
/// that snapshot, so a release that ends another widget's drag is never a
/// click, whatever the update order.
///
/// [`begin_frame`]: EngagementArbiter::begin_frame
#[derive(Debug, Clone, Default)]
pub struct EngagementArbiter {
    owner: Option<WidgetId>,
    owner_at_frame_start: Option<WidgetId>,
    used_this_frame: bool,
}

impl EngagementArbiter {
    /// Create an arbiter with no engaged widget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset per-frame flags. Engagement carries over to the next frame.
    pub fn begin_frame(&mut self) {
        self.used_this_frame = false;
        self.owner_at_frame_start = self.owner;
    }

    /// Whether any widget is engaged.
    pub fn is_engaged(&self) -> bool {
        self.owner.is_some()
    }

    /// The widget currently holding engagement.
    pub fn owner(&self) -> Option<WidgetId> {
        self.owner
    }

    /// Whether `id` holds engagement.
    pub fn is_engaged_by(&self, id: WidgetId) -> bool {
        self.owner == Some(id)
    }

    /// Whether a widget other than `id` holds engagement.
    pub fn is_blocked(&self, id: WidgetId) -> bool {
        self.owner.is_some_and(|owner| owner != id)
    }

    /// Whether a widget other than `id` was engaged when the frame began.
    pub fn was_blocked_at_frame_start(&self, id: WidgetId) -> bool {
        self.owner_at_frame_start.is_some_and(|owner| owner != id)
    }

    /// Try to take engagement for `id`.
    ///
    /// Succeeds when nobody is engaged, or when `id` already is.
    pub fn try_engage(&mut self, id: WidgetId) -> bool {
        match self.owner {
            None => {
                log::debug!("Widget {} engaged", id);
                self.owner = Some(id);
                true
            }
            Some(owner) => owner == id,
        }
    }

    /// Release engagement held by `id`. Returns false if `id` was not the owner.
    pub fn release(&mut self, id: WidgetId) -> bool {
        if self.owner == Some(id) {
            log::debug!("Widget {} released engagement", id);
            self.owner = None;
            true
        } else {
            false
        }
    }

    /// Record that the GUI consumed pointer input this frame.
    pub fn mark_used(&mut self) {
        self.used_this_frame = true;
    }

    /// Whether the GUI consumed pointer input this frame.
    pub fn was_used(&self) -> bool {
        self.used_this_frame
    }
}
