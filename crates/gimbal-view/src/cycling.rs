use crate::gesture::CLICK_EPSILON;
use gimbal_base::OrbitAngles;
use gimbal_geometry::{PREDEFINED_VIEWS, PredefinedView, nearest_view};
use serde::Serialize;

/// How close (per axis, wraparound-aware) an orbit has to be to a catalog
/// entry to count as already sitting on it.
pub const ANGULAR_EPSILON: f64 = 0.1;

pub const NOTICE_DURATION_MS: u64 = 1000;

/// Transient notification shown after a view selection, in the payload shape
/// the hosting UI's toast expects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewNotice {
    pub message: String,
    pub display_duration_ms: u64,
}

impl ViewNotice {
    pub fn for_view(view: &PredefinedView) -> Self {
        Self {
            message: format!("{} view", view.name),
            display_duration_ms: NOTICE_DURATION_MS,
        }
    }
}

/// Picks the catalog view a qualifying gizmo click should land on.
///
/// A first click from an arbitrary orbit snaps to the nearest entry; clicking
/// while already on an entry advances to the next one, wrapping at the end.
/// "Current view" is always re-derived from the live angles, so free-dragging
/// away from a named view cannot leave a stale index behind.
pub fn select_view(current: OrbitAngles) -> (usize, &'static PredefinedView) {
    let hit = nearest_view(current);
    let index = if hit.euclidean < CLICK_EPSILON && hit.angular < ANGULAR_EPSILON {
        (hit.index + 1) % PREDEFINED_VIEWS.len()
    } else {
        hit.index
    };
    (index, &PREDEFINED_VIEWS[index])
}
