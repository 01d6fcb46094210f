use uuid::Uuid;
use yew::{classes, html, AttrValue, Callback, Component, Context, Html, MouseEvent, Properties};

/// Modal sheet that slides in over the page while `open` is set.
///
/// Clicking the backdrop or the close button emits `on_close`; clicks inside
/// the content never reach the backdrop.
pub struct DetailTopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub title: AttrValue,
    pub open: bool,
    pub on_close: Callback<()>,
}

impl Component for DetailTopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let title_id = format!("{}-title", self.id);
        let on_backdrop = {
            let on_close = props.on_close.clone();
            Callback::from(move |_: MouseEvent| on_close.emit(()))
        };
        let on_close_button = {
            let on_close = props.on_close.clone();
            Callback::from(move |_: MouseEvent| on_close.emit(()))
        };
        let keep_inside = Callback::from(|event: MouseEvent| event.stop_propagation());

        html! {
            <div
                class={classes!("top-sheet", props.open.then_some("show"))}
                id={self.id.clone()}
                role="dialog"
                aria-modal="true"
                aria-labelledby={title_id.clone()}
                onclick={on_backdrop}
            >
                <div class="top-sheet-content" onclick={keep_inside}>
                    <div class="top-sheet-header">
                        <h2 id={title_id}>{ props.title.clone() }</h2>
                        <button class="close" onclick={on_close_button}>{ "×" }</button>
                    </div>
                    { if props.open { props.children.clone() } else { html! {} } }
                </div>
            </div>
        }
    }
}
