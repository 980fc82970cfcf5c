use crate::viewer::{CameraChangeListener, CameraEvents, ListenerId};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// RAII handle for a registered `camera-change` listener. Dropping the
/// subscription removes the listener from the widget; a widget that has
/// already gone away makes removal a no-op.
pub struct CameraChangeSubscription<V: CameraEvents> {
    viewer: Weak<RefCell<V>>,
    id: ListenerId,
}

impl<V: CameraEvents> CameraChangeSubscription<V> {
    pub fn subscribe(viewer: &Rc<RefCell<V>>, listener: CameraChangeListener) -> Self {
        let id = viewer.borrow_mut().add_camera_change_listener(listener);
        Self {
            viewer: Rc::downgrade(viewer),
            id,
        }
    }
}

impl<V: CameraEvents> Drop for CameraChangeSubscription<V> {
    fn drop(&mut self) {
        if let Some(viewer) = self.viewer.upgrade() {
            viewer.borrow_mut().remove_camera_change_listener(self.id);
        }
    }
}
