use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};
use yew::Callback;

/// "Tell me when this element becomes visible."
pub trait VisibilityWatch {
    /// What the items are rendered into.
    type Container: ?Sized;
    type Target;

    /// The item currently rendered last in `container`, if any.
    fn last_item(container: &Self::Container) -> Option<Self::Target>;

    /// Watches `target`, replacing whatever was watched before.
    fn watch(&mut self, target: &Self::Target, on_visible: Callback<()>);

    fn disconnect(&mut self);
}

/// Points `watch` at the last item of `container` while the list can still
/// grow, and detaches it otherwise. Call after every render.
pub fn rearm<W: VisibilityWatch>(
    watch: &mut W,
    container: Option<&W::Container>,
    armed: bool,
    on_visible: Callback<()>,
) {
    match container.and_then(|container| W::last_item(container)) {
        Some(target) if armed => watch.watch(&target, on_visible),
        _ => watch.disconnect(),
    }
}

/// [`VisibilityWatch`] over the browser's `IntersectionObserver`.
#[derive(Default)]
pub struct IntersectionWatch {
    observer: Option<IntersectionObserver>,
    callback: Option<Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>>,
}

impl VisibilityWatch for IntersectionWatch {
    type Container = Element;
    type Target = Element;

    fn last_item(container: &Element) -> Option<Element> {
        container.last_element_child()
    }

    fn watch(&mut self, target: &Element, on_visible: Callback<()>) {
        self.disconnect();

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let visible = entries.iter().any(|entry| {
                    entry
                        .unchecked_into::<IntersectionObserverEntry>()
                        .is_intersecting()
                });
                if visible {
                    on_visible.emit(());
                }
            },
        );

        match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => {
                observer.observe(target);
                self.observer = Some(observer);
                self.callback = Some(callback);
            }
            Err(e) => log::warn!("IntersectionObserver unavailable: {e:?}"),
        }
    }

    fn disconnect(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        self.callback = None;
    }
}

impl Drop for IntersectionWatch {
    fn drop(&mut self) {
        self.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Default)]
    struct FakeWatch {
        target: Option<String>,
        on_visible: Option<Callback<()>>,
    }

    impl FakeWatch {
        fn scroll_into_view(&self) {
            if let Some(on_visible) = &self.on_visible {
                on_visible.emit(());
            }
        }
    }

    impl VisibilityWatch for FakeWatch {
        type Container = [String];
        type Target = String;

        fn last_item(container: &[String]) -> Option<String> {
            container.last().cloned()
        }

        fn watch(&mut self, target: &String, on_visible: Callback<()>) {
            self.target = Some(target.clone());
            self.on_visible = Some(on_visible);
        }

        fn disconnect(&mut self) {
            self.target = None;
            self.on_visible = None;
        }
    }

    fn counter() -> (Rc<Cell<u32>>, Callback<()>) {
        let count = Rc::new(Cell::new(0));
        let callback = {
            let count = count.clone();
            Callback::from(move |_| count.set(count.get() + 1))
        };
        (count, callback)
    }

    fn grid(len: usize) -> Vec<String> {
        (0..len).map(|i| format!("card-{i}")).collect()
    }

    #[test]
    fn follows_the_last_item() {
        let mut watch = FakeWatch::default();
        let (count, callback) = counter();

        rearm(&mut watch, Some(grid(24).as_slice()), true, callback.clone());
        assert_eq!(watch.target.as_deref(), Some("card-23"));

        rearm(&mut watch, Some(grid(48).as_slice()), true, callback);
        assert_eq!(watch.target.as_deref(), Some("card-47"));

        watch.scroll_into_view();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn stays_armed_across_appended_pages() {
        let mut watch = FakeWatch::default();
        let (count, callback) = counter();
        let mut items = grid(24);

        for expected in ["card-23", "card-47", "card-71"] {
            rearm(&mut watch, Some(items.as_slice()), true, callback.clone());
            assert_eq!(watch.target.as_deref(), Some(expected));
            watch.scroll_into_view();
            let next = items.len();
            items.extend((next..next + 24).map(|i| format!("card-{i}")));
        }
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn detaches_when_disarmed_or_empty() {
        let mut watch = FakeWatch::default();
        let (count, callback) = counter();

        rearm(&mut watch, Some(grid(24).as_slice()), false, callback.clone());
        assert_eq!(watch.target, None);

        rearm(&mut watch, Some(grid(0).as_slice()), true, callback.clone());
        assert_eq!(watch.target, None);

        rearm(&mut watch, None, true, callback);
        assert_eq!(watch.target, None);

        watch.scroll_into_view();
        assert_eq!(count.get(), 0);
    }
}
