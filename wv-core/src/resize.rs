//! Viewport resize handling.
//!
//! A [`ResizeSubscription`] holds one resize listener on a [`Viewport`] and
//! removes it when dropped, so the listener can never outlive the chart
//! that owns it. [`ResizeController`] ties such a subscription to the
//! rebuild callback of a chart.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

/// Handle of a registered resize listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

pub type ResizeHandler = Box<dyn FnMut(ViewportSize)>;

/// Source of resize notifications (the browser window, or a fake in tests).
pub trait Viewport {
    fn size(&self) -> ViewportSize;
    fn subscribe(&self, handler: ResizeHandler) -> ListenerId;
    fn unsubscribe(&self, id: ListenerId);
}

impl<V: Viewport + ?Sized> Viewport for Rc<V> {
    fn size(&self) -> ViewportSize {
        (**self).size()
    }

    fn subscribe(&self, handler: ResizeHandler) -> ListenerId {
        (**self).subscribe(handler)
    }

    fn unsubscribe(&self, id: ListenerId) {
        (**self).unsubscribe(id)
    }
}

/// A live resize listener, released on drop.
pub struct ResizeSubscription<V: Viewport> {
    viewport: V,
    id: Option<ListenerId>,
}

impl<V: Viewport> ResizeSubscription<V> {
    pub fn acquire(viewport: V, handler: ResizeHandler) -> Self {
        let id = viewport.subscribe(handler);
        log::debug!("[WV] resize: acquired listener {:?}", id);
        Self {
            viewport,
            id: Some(id),
        }
    }

    pub fn is_active(&self) -> bool {
        self.id.is_some()
    }

    /// Remove the listener now rather than at drop. Idempotent.
    pub fn release(&mut self) {
        if let Some(id) = self.id.take() {
            self.viewport.unsubscribe(id);
            log::debug!("[WV] resize: released listener {:?}", id);
        }
    }
}

impl<V: Viewport> Drop for ResizeSubscription<V> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Rebuilds a chart whenever the viewport changes size, for as long as the
/// controller is alive.
///
/// `rebuild` receives the new size; it is expected to skip the rebuild when
/// there is nothing to draw.
pub struct ResizeController<V: Viewport> {
    subscription: ResizeSubscription<V>,
    events: Rc<Cell<u64>>,
}

impl<V: Viewport> ResizeController<V> {
    pub fn attach(viewport: V, mut rebuild: impl FnMut(ViewportSize) + 'static) -> Self {
        let events = Rc::new(Cell::new(0u64));
        let counter = events.clone();
        let subscription = ResizeSubscription::acquire(
            viewport,
            Box::new(move |size| {
                counter.set(counter.get() + 1);
                rebuild(size);
            }),
        );
        Self {
            subscription,
            events,
        }
    }

    /// Number of resize notifications handled so far.
    pub fn events(&self) -> u64 {
        self.events.get()
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_active()
    }

    pub fn detach(&mut self) {
        self.subscription.release();
    }
}


#[cfg(test)]
mod tests {
    use super::fake::FakeViewport;
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_subscription_released_on_drop() {
        let viewport = Rc::new(FakeViewport::default());
        {
            let subscription = ResizeSubscription::acquire(viewport.clone(), Box::new(|_| {}));
            assert!(subscription.is_active());
            assert_eq!(viewport.listener_count(), 1);
        }
        assert_eq!(viewport.listener_count(), 0);
    }

    #[test]
    fn test_explicit_release_is_idempotent() {
        let viewport = Rc::new(FakeViewport::default());
        let mut subscription = ResizeSubscription::acquire(viewport.clone(), Box::new(|_| {}));
        subscription.release();
        subscription.release();
        assert!(!subscription.is_active());
        assert_eq!(viewport.listener_count(), 0);
    }

    #[test]
    fn test_controller_forwards_sizes_until_detached() {
        let viewport = Rc::new(FakeViewport::default());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut controller = ResizeController::attach(viewport.clone(), move |size| {
            sink.borrow_mut().push(size.width);
        });

        viewport.resize_to(1024.0, 768.0);
        viewport.resize_to(640.0, 480.0);
        assert_eq!(*seen.borrow(), vec![1024.0, 640.0]);
        assert_eq!(controller.events(), 2);
        assert_eq!(viewport.size().height, 480.0);

        controller.detach();
        assert!(!controller.is_attached());
        viewport.resize_to(320.0, 240.0);
        assert_eq!(seen.borrow().len(), 2);
    }
}
