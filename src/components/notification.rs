use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::NOTIFICATION_LIFETIME_MS;
use crate::controller::notify::{Notification, NotificationStack};

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notification: Notification,
    pub on_expire: Callback<u32>,
}

/// A single overlay message. Removes itself after its lifetime.
#[function_component(NotificationToast)]
pub fn notification_toast(props: &ToastProps) -> Html {
    let Notification { id, kind, text } = props.notification.clone();

    {
        let on_expire = props.on_expire.clone();
        use_effect_with_deps(
            move |id| {
                let id = *id;
                let timeout = Timeout::new(NOTIFICATION_LIFETIME_MS, move || on_expire.emit(id));
                timeout.forget();
                || ()
            },
            id,
        );
    }

    let style = format!(
        "position: fixed; top: 100px; right: 20px; padding: 1rem 2rem; border-radius: 8px; \
         color: white; font-weight: 500; z-index: 2000; max-width: 400px; \
         box-shadow: 0 4px 12px rgba(0,0,0,0.3); animation: slideIn 0.3s ease; background: {};",
        kind.background()
    );

    html! {
        <div class={classes!("notification", kind.class())} {style}>
            {text}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationsProps {
    pub stack: NotificationStack,
    pub on_expire: Callback<u32>,
}

#[function_component(Notifications)]
pub fn notifications(props: &NotificationsProps) -> Html {
    html! {
        <>
            { for props.stack.items().iter().map(|n| html! {
                <NotificationToast key={n.id} notification={n.clone()} on_expire={props.on_expire.clone()} />
            }) }
        </>
    }
}
