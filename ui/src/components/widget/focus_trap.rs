use std::rc::Rc;

use consent::{FocusRing, TabDirection};
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

/// Keeps Tab and Shift+Tab inside one dialog.
///
/// Controls register themselves by slot index through `onmounted` and report
/// focus through `onfocus`. The number of slots is fixed when the surface
/// mounts.
#[derive(Clone, Copy, PartialEq)]
pub struct FocusTrap {
    nodes: Signal<Vec<Option<Rc<MountedData>>>>,
    current: Signal<Option<usize>>,
}

pub fn use_focus_trap(len: usize) -> FocusTrap {
    let nodes = use_signal(move || vec![None; len]);
    let current = use_signal(|| None);
    FocusTrap { nodes, current }
}

impl FocusTrap {
    pub fn mounted(mut self, slot: usize, event: MountedEvent) {
        if let Some(node) = self.nodes.write().get_mut(slot) {
            *node = Some(event.data());
        }
    }

    pub fn focused(mut self, slot: usize) {
        self.current.set(Some(slot));
    }

    pub fn focus(self, slot: usize) {
        let Some(node) = self.nodes.peek().get(slot).cloned().flatten() else {
            return;
        };
        spawn(async move {
            if let Err(e) = node.set_focus(true).await {
                debug!("could not move focus: {e:?}");
            }
        });
    }

    /// Wraps focus at either end of the ring. Returns whether the key was handled.
    pub fn handle_keydown(self, event: &KeyboardEvent) -> bool {
        if event.key() != Key::Tab {
            return false;
        }
        let direction = TabDirection::from_shift(event.modifiers().contains(Modifiers::SHIFT));
        let ring = FocusRing::new(self.nodes.peek().len());
        match ring.wrap(*self.current.peek(), direction) {
            Some(target) => {
                event.prevent_default();
                self.focus(target);
                true
            }
            None => false,
        }
    }
}
