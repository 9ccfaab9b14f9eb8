use yew::prelude::*;

const IDLE_STYLE: &str = "animation: truck-move 3s ease-in-out infinite; color: #007bff;";
const SPECIAL_STYLE: &str = "animation: truck-special 2s ease; color: #FFD700;";

#[derive(Properties, PartialEq)]
pub struct TruckProps {
    #[prop_or_default]
    pub special: bool,
}

#[function_component(Truck)]
pub fn truck(props: &TruckProps) -> Html {
    let style = if props.special { SPECIAL_STYLE } else { IDLE_STYLE };
    html! {
        <div class="truck-animation">
            <i class="fas fa-truck" {style}></i>
        </div>
    }
}
