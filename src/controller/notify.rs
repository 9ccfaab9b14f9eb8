use std::rc::Rc;

use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "notification-success",
            NotificationKind::Error => "notification-error",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            NotificationKind::Success => "#28a745",
            NotificationKind::Error => "#dc3545",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub text: String,
}

pub enum NotificationAction {
    Push(NotificationKind, String),
    Dismiss(u32),
}

/// Live notifications. Each toast dismisses itself after its lifetime, so
/// the stack only holds what is on screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationStack {
    next_id: u32,
    items: Vec<Notification>,
}

impl NotificationStack {
    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

impl Reducible for NotificationStack {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NotificationAction::Push(kind, text) => {
                let id = next.next_id;
                next.next_id = next.next_id.wrapping_add(1);
                next.items.push(Notification { id, kind, text });
            }
            NotificationAction::Dismiss(id) => {
                next.items.retain(|n| n.id != id);
            }
        }
        Rc::new(next)
    }
}
