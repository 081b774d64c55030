use crate::widget::ReelInput;
use std::fmt;

/// Something that can be asked to start a spin.
pub trait SpinTarget {
    fn request_spin(&self);
}

impl SpinTarget for relm4::Sender<ReelInput> {
    fn request_spin(&self) {
        self.emit(ReelInput::Spin);
    }
}

/// Reference to a reel held by its owner. Starts detached; `spin` only
/// reaches the reel after `attach`, and is ignored before that.
pub struct ReelHandle<T = relm4::Sender<ReelInput>> {
    target: Option<T>,
}

impl<T> Default for ReelHandle<T> {
    fn default() -> Self {
        Self { target: None }
    }
}

impl<T> fmt::Debug for ReelHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReelHandle")
            .field("attached", &self.is_attached())
            .finish()
    }
}

impl<T> ReelHandle<T> {
    pub fn attach(&mut self, target: T) {
        self.target = Some(target);
    }

    pub fn is_attached(&self) -> bool {
        self.target.is_some()
    }
}

impl<T: SpinTarget> ReelHandle<T> {
    /// Returns whether the request was forwarded.
    pub fn spin(&self) -> bool {
        match &self.target {
            Some(target) => {
                target.request_spin();
                true
            }
            None => {
                log::debug!("Spin requested before the reel was attached");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Default, Clone)]
    struct Counter(Rc<Cell<u32>>);

    impl SpinTarget for Counter {
        fn request_spin(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_spin_before_attach_is_ignored() {
        let handle = ReelHandle::<Counter>::default();
        assert!(!handle.is_attached());
        assert!(!handle.spin());
    }

    #[test]
    fn test_spin_after_attach_reaches_target() {
        let counter = Counter::default();
        let mut handle = ReelHandle::default();
        handle.attach(counter.clone());

        assert!(handle.spin());
        assert!(handle.spin());
        assert_eq!(counter.0.get(), 2);
    }
}
