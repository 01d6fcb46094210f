use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct CardGridProps {
    /// Narrowest a card may get before the grid drops a column.
    #[prop_or(280)]
    pub min_card_px: u32,
    pub children: Children,
}

pub struct CardGrid;

impl Component for CardGrid {
    type Message = ();
    type Properties = CardGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CardGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: grid;
             grid-template-columns: repeat(auto-fill, minmax({}px, 1fr));
             gap: 20px;",
            props.min_card_px
        );

        html! {
            <div class="cards-grid" style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
