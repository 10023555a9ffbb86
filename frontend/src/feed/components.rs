use crate::models::Category;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CategoryBarProps {
    pub categories: Vec<Category>,
    pub selected: String,
    pub on_select: Callback<String>,
}

#[function_component(CategoryBar)]
pub fn category_bar(props: &CategoryBarProps) -> Html {
    html! {
        <div class="flex gap-2 overflow-x-auto pb-4">
            { for props.categories.iter().map(|category| {
                let is_selected = category.id == props.selected;
                let onclick = {
                    let on_select = props.on_select.clone();
                    let id = category.id.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(id.clone()))
                };
                let class = if is_selected {
                    "px-4 py-1.5 rounded-full text-xs font-medium bg-gradient-to-r from-cyan-500 to-purple-500 text-white"
                } else {
                    "px-4 py-1.5 rounded-full text-xs font-medium bg-white/5 text-white/70 hover:bg-white/10"
                };
                let style = if is_selected {
                    format!("border-bottom: 2px solid {};", category.color)
                } else {
                    String::new()
                };
                html! {
                    <button key={category.id.clone()} onclick={onclick} class={class} style={style}>
                        { &category.title }
                    </button>
                }
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NoResultsProps {
    pub query: String,
}

#[function_component(NoResults)]
pub fn no_results(props: &NoResultsProps) -> Html {
    html! {
        <p class="text-center text-white/50 my-8">{ format!("No results found for \"{}\".", props.query) }</p>
    }
}
