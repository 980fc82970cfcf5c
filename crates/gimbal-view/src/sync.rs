use crate::cycling::{ViewNotice, select_view};
use crate::gesture::{Gesture, GestureClassifier};
use crate::subscription::CameraChangeSubscription;
use crate::viewer::{CameraChange, CameraEvents, ChangeSource, OrbitViewer, ViewerId};
use gimbal_base::{CameraOrbit, OrbitAngles};
use gimbal_geometry::SpherePoint;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use tracing::{debug, info};

/// Idle-nudge animation state of the main viewer, mirroring the widget's
/// `interaction-prompt` attribute values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionPrompt {
    Auto,
    Suppressed,
}

/// Keeps two viewer widgets angularly locked while each retains its own zoom.
///
/// Camera-change deliveries from either widget land in an inbox and are
/// mirrored onto the other endpoint by [`process_camera_changes`]. Only
/// changes attributed to direct user interaction are mirrored, and a mirror
/// write is skipped when the target already holds the composed orbit, so a
/// widget that fires events on programmatic writes cannot start a feedback
/// loop: any echo arrives carrying exactly the state the originating viewer
/// already has.
///
/// [`process_camera_changes`]: DualViewerSync::process_camera_changes
pub struct DualViewerSync<V: OrbitViewer + CameraEvents> {
    main: Rc<RefCell<V>>,
    gizmo: Rc<RefCell<V>>,
    inbox: Rc<RefCell<VecDeque<CameraChange>>>,
    gestures: GestureClassifier,
    interaction_prompt: InteractionPrompt,
    _subscriptions: [CameraChangeSubscription<V>; 2],
}

impl<V: OrbitViewer + CameraEvents> DualViewerSync<V> {
    pub fn attach(main: Rc<RefCell<V>>, gizmo: Rc<RefCell<V>>) -> Self {
        let inbox = Rc::new(RefCell::new(VecDeque::new()));
        let subscriptions = ViewerId::ALL.map(|viewer| {
            let handle = match viewer {
                ViewerId::Main => &main,
                ViewerId::Gizmo => &gizmo,
            };
            let inbox = Rc::clone(&inbox);
            CameraChangeSubscription::subscribe(
                handle,
                Box::new(move |source| {
                    inbox.borrow_mut().push_back(CameraChange { viewer, source });
                }),
            )
        });
        Self {
            main,
            gizmo,
            inbox,
            gestures: GestureClassifier::default(),
            interaction_prompt: InteractionPrompt::Auto,
            _subscriptions: subscriptions,
        }
    }

    fn handle(&self, viewer: ViewerId) -> &Rc<RefCell<V>> {
        match viewer {
            ViewerId::Main => &self.main,
            ViewerId::Gizmo => &self.gizmo,
        }
    }

    /// Drains pending `camera-change` deliveries, copying the angular orbit
    /// of each user-driven change onto the other endpoint. The target's own
    /// radius is preserved.
    pub fn process_camera_changes(&mut self) {
        loop {
            let change = self.inbox.borrow_mut().pop_front();
            let Some(change) = change else { break };
            if change.source == ChangeSource::UserInteraction {
                self.mirror(change.viewer);
            }
        }
    }

    fn mirror(&self, from: ViewerId) {
        let Some(origin) = self.handle(from).borrow().camera_orbit() else {
            return;
        };
        let to = from.other();
        debug!(?from, ?to, orbit = %origin, "mirroring user camera change");
        self.apply(to, origin.angles);
    }

    /// Writes the given angles onto one endpoint, keeping that endpoint's
    /// current radius. No-op while the widget is unmounted or when it already
    /// holds the composed orbit (the dirty check that breaks echo chains).
    fn apply(&self, viewer: ViewerId, angles: OrbitAngles) {
        let handle = self.handle(viewer);
        let Some(current) = handle.borrow().camera_orbit() else {
            return;
        };
        let composed = current.with_angles(angles);
        if composed == current {
            return;
        }
        handle.borrow_mut().set_camera_orbit(&composed);
    }

    /// Mouse press routed from the host, tagged with the viewer element that
    /// received it (`None` when the press landed elsewhere).
    pub fn mouse_down(&mut self, target: Option<ViewerId>) {
        let Some(viewer) = target else { return };
        let Some(orbit) = self.handle(viewer).borrow().camera_orbit() else {
            return;
        };
        self.gestures.press(viewer, SpherePoint::from(orbit.angles));
    }

    /// Mouse release routed from the host. A stationary click on the gizmo
    /// selects the next predefined view and reports the notice to surface;
    /// drags and releases elsewhere do nothing (camera dragging is the
    /// widget's own business, mirrored via `process_camera_changes`).
    pub fn mouse_up(&mut self, target: Option<ViewerId>) -> Option<ViewNotice> {
        if target != Some(ViewerId::Gizmo) {
            return None;
        }
        let Some(up_orbit) = self.gizmo.borrow().camera_orbit() else {
            return None;
        };
        let gesture = self
            .gestures
            .release(ViewerId::Gizmo, SpherePoint::from(up_orbit.angles));
        if gesture != Gesture::Click {
            return None;
        }

        let (index, view) = select_view(up_orbit.angles);
        for viewer in ViewerId::ALL {
            self.apply(viewer, view.angles());
        }
        self.interaction_prompt = InteractionPrompt::Suppressed;
        info!(view = view.name, index, "predefined view selected");
        Some(ViewNotice::for_view(view))
    }

    pub fn interaction_prompt(&self) -> InteractionPrompt {
        self.interaction_prompt
    }

    /// Reaction to "a new model became available": the idle nudge may show
    /// again until the next deliberate view selection.
    pub fn model_loaded(&mut self) {
        self.interaction_prompt = InteractionPrompt::Auto;
    }

    pub fn camera_orbit(&self, viewer: ViewerId) -> Option<CameraOrbit> {
        self.handle(viewer).borrow().camera_orbit()
    }
}
