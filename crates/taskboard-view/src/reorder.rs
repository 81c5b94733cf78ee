//! Drag-and-drop gesture to id order.

use taskboard_store::TaskId;

/// Move `active` to the slot currently held by `over`.
///
/// Returns the new order, or `None` when the gesture is a no-op: the two ids
/// are equal or either is absent from `ids`. Items between the two slots shift
/// by one toward the vacated slot.
#[must_use]
pub fn move_id(ids: &[TaskId], active: &TaskId, over: &TaskId) -> Option<Vec<TaskId>> {
    if active == over {
        return None;
    }
    let from = ids.iter().position(|id| id == active)?;
    let to = ids.iter().position(|id| id == over)?;
    let mut moved = ids.to_vec();
    let item = moved.remove(from);
    moved.insert(to, item);
    Some(moved)
}
