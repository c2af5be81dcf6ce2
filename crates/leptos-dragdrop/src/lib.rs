//! Leptos DragDrop Utilities
//!
//! Simple list drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//! A drop reports source and destination as indices into the rendered list.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Default movement threshold in pixels to start dragging
pub const DEFAULT_DRAG_THRESHOLD_PX: i32 = 5;

/// Position of a draggable within the list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DraggableLocation {
    pub index: usize,
}

/// Why a drag ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropReason {
    Drop,
    Cancel,
}

/// Outcome of a finished drag.
///
/// `destination` is `None` when the pointer was released outside any list item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropResult {
    pub draggable_id: String,
    pub source: DraggableLocation,
    pub destination: Option<DraggableLocation>,
    pub reason: DropReason,
}

/// The item grabbed by mousedown
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragSource {
    pub draggable_id: String,
    pub index: usize,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_read: ReadSignal<Option<DragSource>>,
    pub dragging_write: WriteSignal<Option<DragSource>>,
    /// Index of the item currently under the pointer while dragging
    pub over_index_read: ReadSignal<Option<usize>>,
    pub over_index_write: WriteSignal<Option<usize>>,
    /// Pending source (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<DragSource>>,
    pub pending_write: WriteSignal<Option<DragSource>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
    pub threshold_px: i32,
}

pub fn create_dnd_signals(threshold_px: i32) -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<DragSource>);
    let (over_index_read, over_index_write) = signal(None::<usize>);
    let (pending_read, pending_write) = signal(None::<DragSource>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_read,
        dragging_write,
        over_index_read,
        over_index_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
        threshold_px: threshold_px.max(0),
    }
}

/// Whether the pointer moved far enough from the mousedown point to start a drag
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32), threshold_px: i32) -> bool {
    let dx = (current.0 - start.0).abs();
    let dy = (current.1 - start.1).abs();
    dx > threshold_px || dy > threshold_px
}

/// Build the drop result for a released drag.
/// Hovering item `i` means the dragged item lands at index `i`.
pub fn resolve_drop(source: DragSource, over_index: Option<usize>) -> DropResult {
    let destination = over_index.map(|index| DraggableLocation { index });
    DropResult {
        draggable_id: source.draggable_id,
        source: DraggableLocation { index: source.index },
        reason: if destination.is_some() { DropReason::Drop } else { DropReason::Cancel },
        destination,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_write.set(None);
    dnd.over_index_write.set(None);
    dnd.pending_write.set(None);
}

/// Whether a press on an element with this tag may start a drag.
/// Form controls keep their own mouse behaviour (clicks, text selection).
pub fn starts_drag_from(tag_name: &str) -> bool {
    const INTERACTIVE: [&str; 4] = ["INPUT", "BUTTON", "TEXTAREA", "SELECT"];
    !INTERACTIVE.iter().any(|tag| tag.eq_ignore_ascii_case(tag_name))
}

/// Create mousedown handler for draggable items
/// Records pending drag with start position. The index is read at press
/// time, so it follows the item as the list reorders.
pub fn make_on_mousedown(
    dnd: DndSignals,
    draggable_id: String,
    index: Signal<Option<usize>>,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        if let Some(el) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
            if !starts_drag_from(&el.tag_name()) { return; }
        }
        let Some(index) = index.get_untracked() else { return };
        dnd.pending_write.set(Some(DragSource { draggable_id: draggable_id.clone(), index }));
        dnd.start_x_write.set(ev.client_x());
        dnd.start_y_write.set(ev.client_y());
    }
}

/// Bind document mousemove - starts drag if moved enough
pub fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            return;
        }
        let Some(pending) = dnd.pending_read.get_untracked() else { return };

        let start = (dnd.start_x_read.get_untracked(), dnd.start_y_read.get_untracked());
        if exceeds_threshold(start, (ev.client_x(), ev.client_y()), dnd.threshold_px) {
            tracing::debug!(draggable_id = %pending.draggable_id, index = pending.index, "drag started");
            dnd.over_index_write.set(Some(pending.index));
            dnd.dragging_write.set(Some(pending));
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for list items (become drop target)
pub fn make_on_item_mouseenter(dnd: DndSignals, index: Signal<Option<usize>>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            if let Some(index) = index.get_untracked() {
                dnd.over_index_write.set(Some(index));
            }
        }
    }
}

/// Where the dragged item will land relative to the hovered one
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropSide {
    Above,
    Below,
}

/// Marker side for hovering `over` while dragging from `source`.
/// Removing then inserting puts the item below the hovered one when moving down.
pub fn drop_side(source: usize, over: usize) -> Option<DropSide> {
    match over.cmp(&source) {
        std::cmp::Ordering::Less => Some(DropSide::Above),
        std::cmp::Ordering::Greater => Some(DropSide::Below),
        std::cmp::Ordering::Equal => None,
    }
}

/// Create mouseleave handler for the list container (leaving it cancels the target)
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.over_index_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection.
///
/// `on_drag_end` runs for every real drag, including cancelled ones
/// (released outside the list), in which case `destination` is `None`.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drag_end: F)
where
    F: Fn(DropResult) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        let over_index = dnd.over_index_read.get_untracked();

        end_drag(&dnd);

        // A plain click never became a drag
        if let Some(source) = dragging {
            on_drag_end(resolve_drop(source, over_index));
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(index: usize) -> DragSource {
        DragSource { draggable_id: format!("item-{}", index), index }
    }

    #[test]
    fn test_threshold_not_exceeded_for_small_moves() {
        assert!(!exceeds_threshold((100, 100), (103, 95), 5));
        assert!(!exceeds_threshold((100, 100), (105, 105), 5));
    }

    #[test]
    fn test_threshold_exceeded_on_either_axis() {
        assert!(exceeds_threshold((100, 100), (106, 100), 5));
        assert!(exceeds_threshold((100, 100), (100, 94), 5));
    }

    #[test]
    fn test_zero_threshold_starts_on_any_move() {
        assert!(!exceeds_threshold((10, 10), (10, 10), 0));
        assert!(exceeds_threshold((10, 10), (11, 10), 0));
    }

    #[test]
    fn test_form_controls_do_not_start_drag() {
        assert!(!starts_drag_from("INPUT"));
        assert!(!starts_drag_from("BUTTON"));
        assert!(!starts_drag_from("TEXTAREA"));
        assert!(!starts_drag_from("textarea"));
        assert!(!starts_drag_from("SELECT"));
    }

    #[test]
    fn test_plain_elements_start_drag() {
        assert!(starts_drag_from("LI"));
        assert!(starts_drag_from("SPAN"));
        assert!(starts_drag_from("P"));
        assert!(starts_drag_from("LABEL"));
    }

    #[test]
    fn test_drop_side_follows_direction() {
        assert_eq!(drop_side(0, 2), Some(DropSide::Below));
        assert_eq!(drop_side(3, 1), Some(DropSide::Above));
        assert_eq!(drop_side(2, 2), None);
    }

    #[test]
    fn test_resolve_drop_onto_item() {
        let result = resolve_drop(source(0), Some(2));
        assert_eq!(result.draggable_id, "item-0");
        assert_eq!(result.source, DraggableLocation { index: 0 });
        assert_eq!(result.destination, Some(DraggableLocation { index: 2 }));
        assert_eq!(result.reason, DropReason::Drop);
    }

    #[test]
    fn test_resolve_drop_outside_list_is_cancel() {
        let result = resolve_drop(source(3), None);
        assert_eq!(result.source.index, 3);
        assert_eq!(result.destination, None);
        assert_eq!(result.reason, DropReason::Cancel);
    }
}
