use crate::{SpherePoint, sphere_point};
use gimbal_base::OrbitAngles;
use serde::Serialize;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

/// A named camera orbit. Catalog indices are stable identifiers; "next view"
/// cycling walks them in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PredefinedView {
    pub name: &'static str,
    pub theta: f64,
    pub phi: f64,
}

impl PredefinedView {
    const fn new(name: &'static str, theta: f64, phi: f64) -> Self {
        Self { name, theta, phi }
    }

    pub const fn angles(&self) -> OrbitAngles {
        OrbitAngles::new(self.theta, self.phi)
    }

    pub fn sphere_point(&self) -> SpherePoint {
        sphere_point(self.theta, self.phi)
    }
}

/// The six axis-aligned views plus the diagonal default, in cycling order.
pub static PREDEFINED_VIEWS: [PredefinedView; 7] = [
    PredefinedView::new("Diagonal", FRAC_PI_4, FRAC_PI_4),
    PredefinedView::new("Front", 0.0, FRAC_PI_2),
    PredefinedView::new("Right", FRAC_PI_2, FRAC_PI_2),
    PredefinedView::new("Back", PI, FRAC_PI_2),
    PredefinedView::new("Left", -FRAC_PI_2, FRAC_PI_2),
    PredefinedView::new("Top", 0.0, 0.0),
    PredefinedView::new("Bottom", 0.0, PI),
];

pub fn default_view() -> &'static PredefinedView {
    &PREDEFINED_VIEWS[0]
}
