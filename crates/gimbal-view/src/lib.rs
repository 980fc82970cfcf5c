mod cycling;
mod gesture;
mod subscription;
mod sync;
mod viewer;

pub use cycling::{ANGULAR_EPSILON, NOTICE_DURATION_MS, ViewNotice, select_view};
pub use gesture::{CLICK_EPSILON, Gesture, GestureClassifier};
pub use subscription::CameraChangeSubscription;
pub use sync::{DualViewerSync, InteractionPrompt};
pub use viewer::{
    CameraChange, CameraChangeListener, CameraEvents, ChangeSource, ListenerId, OrbitViewer,
    ViewerId,
};
