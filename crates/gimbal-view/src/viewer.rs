use gimbal_base::CameraOrbit;

/// The two synchronized viewer endpoints: the main model view and the small
/// orientation gizmo view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewerId {
    Main,
    Gizmo,
}

impl ViewerId {
    pub const ALL: [Self; 2] = [Self::Main, Self::Gizmo];

    pub fn other(self) -> Self {
        match self {
            Self::Main => Self::Gizmo,
            Self::Gizmo => Self::Main,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Main => 0,
            Self::Gizmo => 1,
        }
    }
}

/// What caused a `camera-change` event on a viewer widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeSource {
    UserInteraction,
    Programmatic,
}

/// A `camera-change` delivery, tagged with the endpoint it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CameraChange {
    pub viewer: ViewerId,
    pub source: ChangeSource,
}

/// Camera-orbit read/write capability of an external viewer widget.
///
/// A widget that is not mounted yet reports `None`; every consumer in this
/// crate turns that into a no-op rather than an error.
pub trait OrbitViewer {
    fn camera_orbit(&self) -> Option<CameraOrbit>;
    fn set_camera_orbit(&mut self, orbit: &CameraOrbit);
}

pub type CameraChangeListener = Box<dyn FnMut(ChangeSource)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Explicit `camera-change` listener registration. Consumers hold a
/// [`CameraChangeSubscription`](crate::CameraChangeSubscription) so the
/// listener is removed again when the consumer goes away.
pub trait CameraEvents {
    fn add_camera_change_listener(&mut self, listener: CameraChangeListener) -> ListenerId;
    fn remove_camera_change_listener(&mut self, id: ListenerId);
}
