use crate::viewer::ViewerId;
use gimbal_geometry::{SpherePoint, euclidean_distance};

/// Maximum sphere-point travel between press and release for the interaction
/// to still count as a click.
pub const CLICK_EPSILON: f64 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    Click,
    Drag,
}

/// Tracks press/release orbit positions per endpoint and classifies the
/// interaction. A release without a matching press is never a click.
#[derive(Clone, Copy, Debug, Default)]
pub struct GestureClassifier {
    pending: [Option<SpherePoint>; 2],
}

impl GestureClassifier {
    pub fn press(&mut self, viewer: ViewerId, point: SpherePoint) {
        self.pending[viewer.index()] = Some(point);
    }

    pub fn release(&mut self, viewer: ViewerId, point: SpherePoint) -> Gesture {
        let travel = self.pending[viewer.index()]
            .take()
            .map(|down| euclidean_distance(down, point))
            .unwrap_or(f64::INFINITY);
        if travel <= CLICK_EPSILON {
            Gesture::Click
        } else {
            Gesture::Drag
        }
    }
}
