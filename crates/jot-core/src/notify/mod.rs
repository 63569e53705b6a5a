//! Toast notification engine.
//!
//! Owns the ordered queue of live notifications and the vertical stacking
//! math. Rendering, timers, and input handling belong to the desktop
//! shell; this module only tracks what is mounted and where it sits.
//!
//! Invariant: a notification's top offset equals the base offset plus the
//! heights (and one gap each) of every notification inserted before it
//! that is still mounted. Removing an entry recomputes the offsets of
//! everything after it so the stack closes the gap.

use std::fmt;
use std::time::Duration;

/// Vertical gap between stacked notifications, in pixels.
pub const STACK_GAP_PX: f64 = 12.0;

/// Top offset of the first notification, in pixels.
pub const BASE_OFFSET_PX: f64 = 20.0;

/// Height assumed for an entry until the host reports a measurement.
pub const ESTIMATED_HEIGHT_PX: f64 = 64.0;

/// Delay before the entrance transition starts.
pub const ENTER_DELAY: Duration = Duration::from_millis(10);

/// How long the exit transition runs before the element is unmounted.
pub const EXIT_DURATION: Duration = Duration::from_millis(300);

/// Viewport width at or below which the mobile layout applies.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Monotonic notification handle. Ids are never reused within a center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Visual category of a notification, also selecting its default duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl NotificationKind {
    /// How long a notification of this kind stays up before auto-dismiss.
    #[must_use]
    pub const fn default_duration(self) -> Duration {
        match self {
            Self::Error => Duration::from_millis(6000),
            Self::Warning => Duration::from_millis(5000),
            Self::Success => Duration::from_millis(4000),
            Self::Info => Duration::from_millis(3500),
        }
    }

    /// Stable name used for CSS hooks (`data-kind`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Parses a kind name. Unknown names fall back to `Info` rather than
    /// erroring; a toast is best-effort UI, not a system of record.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "error" => Self::Error,
            "warning" => Self::Warning,
            _ => Self::Info,
        }
    }
}

/// Per-call options for [`NotificationCenter::show`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowOptions {
    /// Override the kind's default auto-dismiss duration.
    pub duration: Option<Duration>,
    /// Schedule automatic dismissal after the duration elapses.
    pub auto_hide: bool,
    /// Clicking the notification dismisses it early.
    pub click_to_dismiss: bool,
}

impl Default for ShowOptions {
    fn default() -> Self {
        Self {
            duration: None,
            auto_hide: true,
            click_to_dismiss: true,
        }
    }
}

/// A mounted notification and its computed layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub message: String,
    /// Unix timestamp (ms) when the notification was created.
    pub created_at: i64,
    pub duration: Duration,
    pub auto_hide: bool,
    pub click_to_dismiss: bool,
    /// Rendered height in pixels; estimated until the host measures it.
    pub height: f64,
    /// Distance from the top of the viewport, in pixels.
    pub top_offset: f64,
    /// Entrance transition has started (set by the host after
    /// [`ENTER_DELAY`]).
    pub entered: bool,
    /// Exit transition is running; still mounted until removed.
    pub dismissing: bool,
}

/// Ordered queue of live notifications. Insertion order is visual
/// stacking order, earliest on top. One instance is owned by the app
/// state and injected into consumers.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    entries: Vec<Notification>,
    next_id: u64,
}

impl NotificationCenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a notification, assigns the next id, and stacks it below
    /// everything currently mounted.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        options: ShowOptions,
    ) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;

        let top_offset = BASE_OFFSET_PX
            + self
                .entries
                .iter()
                .map(|entry| entry.height + STACK_GAP_PX)
                .sum::<f64>();

        self.entries.push(Notification {
            id,
            kind,
            message: message.into(),
            created_at: chrono::Utc::now().timestamp_millis(),
            duration: options.duration.unwrap_or_else(|| kind.default_duration()),
            auto_hide: options.auto_hide,
            click_to_dismiss: options.click_to_dismiss,
            height: ESTIMATED_HEIGHT_PX,
            top_offset,
            entered: false,
            dismissing: false,
        });

        id
    }

    /// Marks the entrance transition as started. Safe no-op for unknown ids.
    pub fn mark_entered(&mut self, id: NotificationId) -> bool {
        match self.entry_mut(id) {
            Some(entry) => {
                entry.entered = true;
                true
            }
            None => false,
        }
    }

    /// Starts the exit transition. Idempotent: returns `false` when the
    /// entry is unknown or already dismissing, so a manual dismiss races
    /// harmlessly with a pending auto-dismiss timer.
    pub fn begin_dismiss(&mut self, id: NotificationId) -> bool {
        match self.entry_mut(id) {
            Some(entry) if !entry.dismissing => {
                entry.dismissing = true;
                true
            }
            _ => false,
        }
    }

    /// Unmounts the entry and closes the gap it occupied. Idempotent.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        if self.entries.len() == before {
            return false;
        }
        self.relayout();
        true
    }

    /// Records the rendered height reported by the host and relayouts so
    /// later entries stack below the real extent.
    pub fn set_height(&mut self, id: NotificationId, height: f64) {
        if let Some(entry) = self.entry_mut(id) {
            entry.height = height;
        }
        self.relayout();
    }

    /// Snapshot of every mounted id. Dismissal mutates the queue, so
    /// callers iterate over this rather than the live list.
    #[must_use]
    pub fn ids(&self) -> Vec<NotificationId> {
        self.entries.iter().map(|entry| entry.id).collect()
    }

    /// Count of notifications still mounted, including mid-exit ones.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn has_active(&self) -> bool {
        !self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    fn entry_mut(&mut self, id: NotificationId) -> Option<&mut Notification> {
        self.entries.iter_mut().find(|entry| entry.id == id)
    }

    fn relayout(&mut self) {
        let mut offset = BASE_OFFSET_PX;
        for entry in &mut self.entries {
            entry.top_offset = offset;
            offset += entry.height + STACK_GAP_PX;
        }
    }
}

/// Horizontal placement of the toast stack for a given viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastLayout {
    pub mobile: bool,
}

impl ToastLayout {
    /// Widths at or below [`MOBILE_BREAKPOINT_PX`] stretch toasts across
    /// the viewport; wider viewports anchor a fixed column to the right.
    #[must_use]
    pub fn for_viewport_width(width: f64) -> Self {
        Self {
            mobile: width <= MOBILE_BREAKPOINT_PX,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn center_with_heights(heights: &[f64]) -> (NotificationCenter, Vec<NotificationId>) {
        let mut center = NotificationCenter::new();
        let mut ids = Vec::new();
        for height in heights {
            let id = center.show("msg", NotificationKind::Info, ShowOptions::default());
            center.set_height(id, *height);
            ids.push(id);
        }
        (center, ids)
    }

    #[test]
    fn ids_are_monotonic() {
        let mut center = NotificationCenter::new();
        let first = center.show("a", NotificationKind::Info, ShowOptions::default());
        let second = center.show("b", NotificationKind::Info, ShowOptions::default());
        assert!(second > first);
    }

    #[test]
    fn offsets_accumulate_heights_and_gaps() {
        let (center, ids) = center_with_heights(&[50.0, 70.0, 40.0]);

        let offsets: Vec<f64> = ids
            .iter()
            .map(|id| center.get(*id).unwrap().top_offset)
            .collect();
        assert_eq!(offsets[0], BASE_OFFSET_PX);
        assert_eq!(offsets[1], BASE_OFFSET_PX + 50.0 + STACK_GAP_PX);
        assert_eq!(offsets[2], BASE_OFFSET_PX + 50.0 + STACK_GAP_PX + 70.0 + STACK_GAP_PX);
    }

    #[test]
    fn new_entry_uses_estimated_height_until_measured() {
        let mut center = NotificationCenter::new();
        center.show("a", NotificationKind::Info, ShowOptions::default());
        let second = center.show("b", NotificationKind::Info, ShowOptions::default());

        assert_eq!(
            center.get(second).unwrap().top_offset,
            BASE_OFFSET_PX + ESTIMATED_HEIGHT_PX + STACK_GAP_PX
        );
    }

    #[test]
    fn removal_shifts_later_entries_up_by_height_plus_gap() {
        let (mut center, ids) = center_with_heights(&[50.0, 70.0, 40.0]);
        let third_before = center.get(ids[2]).unwrap().top_offset;

        assert!(center.remove(ids[1]));

        let third_after = center.get(ids[2]).unwrap().top_offset;
        assert_eq!(third_before - third_after, 70.0 + STACK_GAP_PX);
        // Entry before the removed one does not move.
        assert_eq!(center.get(ids[0]).unwrap().top_offset, BASE_OFFSET_PX);
    }

    #[test]
    fn info_then_error_scenario_closes_gap_to_base_offset() {
        let mut center = NotificationCenter::new();
        let first = center.show("A", NotificationKind::Info, ShowOptions::default());
        center.set_height(first, 48.0);
        let second = center.show("B", NotificationKind::Error, ShowOptions::default());

        assert_eq!(
            center.get(second).unwrap().top_offset,
            BASE_OFFSET_PX + 48.0 + STACK_GAP_PX
        );

        center.remove(first);
        assert_eq!(center.get(second).unwrap().top_offset, BASE_OFFSET_PX);
    }

    #[test]
    fn dismissing_entry_still_occupies_space_until_removed() {
        let mut center = NotificationCenter::new();
        let first = center.show("a", NotificationKind::Info, ShowOptions::default());
        center.set_height(first, 48.0);
        center.begin_dismiss(first);

        let second = center.show("b", NotificationKind::Info, ShowOptions::default());
        assert_eq!(
            center.get(second).unwrap().top_offset,
            BASE_OFFSET_PX + 48.0 + STACK_GAP_PX
        );
        assert_eq!(center.active_count(), 2);
    }

    #[test]
    fn begin_dismiss_is_idempotent() {
        let mut center = NotificationCenter::new();
        let id = center.show("a", NotificationKind::Info, ShowOptions::default());

        assert!(center.begin_dismiss(id));
        assert!(!center.begin_dismiss(id));
        // Still mounted until the exit delay elapses and remove is called.
        assert_eq!(center.active_count(), 1);
    }

    #[test]
    fn remove_unknown_id_is_a_no_op() {
        let mut center = NotificationCenter::new();
        let id = center.show("a", NotificationKind::Info, ShowOptions::default());

        assert!(center.remove(id));
        assert!(!center.remove(id));
        assert_eq!(center.active_count(), 0);
    }

    #[test]
    fn snapshot_survives_dismiss_all_iteration() {
        let (mut center, _ids) = center_with_heights(&[50.0, 60.0, 70.0]);

        for id in center.ids() {
            center.begin_dismiss(id);
            center.remove(id);
        }

        assert_eq!(center.active_count(), 0);
        assert!(!center.has_active());
    }

    #[test]
    fn default_durations_by_kind() {
        assert_eq!(
            NotificationKind::Error.default_duration(),
            Duration::from_millis(6000)
        );
        assert_eq!(
            NotificationKind::Warning.default_duration(),
            Duration::from_millis(5000)
        );
        assert_eq!(
            NotificationKind::Success.default_duration(),
            Duration::from_millis(4000)
        );
        assert_eq!(
            NotificationKind::Info.default_duration(),
            Duration::from_millis(3500)
        );
    }

    #[test]
    fn unknown_kind_behaves_as_info() {
        let kind = NotificationKind::parse("banana");
        assert_eq!(kind, NotificationKind::Info);
        assert_eq!(kind.default_duration(), Duration::from_millis(3500));
    }

    #[test]
    fn parse_accepts_mixed_case_names() {
        assert_eq!(NotificationKind::parse(" Error "), NotificationKind::Error);
        assert_eq!(NotificationKind::parse("SUCCESS"), NotificationKind::Success);
    }

    #[test]
    fn show_honors_duration_and_flag_overrides() {
        let mut center = NotificationCenter::new();
        let id = center.show(
            "sticky",
            NotificationKind::Warning,
            ShowOptions {
                duration: Some(Duration::from_millis(9000)),
                auto_hide: false,
                click_to_dismiss: false,
            },
        );

        let entry = center.get(id).unwrap();
        assert_eq!(entry.duration, Duration::from_millis(9000));
        assert!(!entry.auto_hide);
        assert!(!entry.click_to_dismiss);
    }

    #[test]
    fn viewport_breakpoint_selects_layout() {
        assert!(ToastLayout::for_viewport_width(480.0).mobile);
        assert!(ToastLayout::for_viewport_width(768.0).mobile);
        assert!(!ToastLayout::for_viewport_width(769.0).mobile);
        assert!(!ToastLayout::for_viewport_width(1280.0).mobile);
    }
}
