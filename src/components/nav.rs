use yew::prelude::*;

use crate::controller::sections::LANDING_SECTIONS;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub active: usize,
    pub scrolled: bool,
    pub on_navigate: Callback<usize>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { active, scrolled, on_navigate } = props;
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let links = LANDING_SECTIONS.iter().enumerate().map(|(index, (id, label))| {
        let onclick = {
            let menu_open = menu_open.clone();
            let on_navigate = on_navigate.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                menu_open.set(false);
                on_navigate.emit(index);
            })
        };
        html! {
            <li>
                <a href={format!("#{}", id)} class={classes!((index == *active).then(|| "active"))} {onclick}>
                    {*label}
                </a>
            </li>
        }
    });

    html! {
        <nav id="navbar" class={classes!("navbar", scrolled.then(|| "scrolled"))}>
            <div class="nav-container">
                <a href="#home" class="nav-logo">
                    <i class="fas fa-gem"></i>
                    {" Diamond Trucking School"}
                </a>
                <ul class={classes!("nav-menu", menu_open.then(|| "active"))}>
                    { for links }
                </ul>
                <button class={classes!("hamburger", menu_open.then(|| "active"))} onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </nav>
    }
}
