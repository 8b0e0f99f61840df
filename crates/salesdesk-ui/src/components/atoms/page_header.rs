use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PageHeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    /// Action buttons on the right.
    #[prop_or_default]
    pub children: Children,
}

#[function_component(PageHeader)]
pub(crate) fn page_header(props: &PageHeaderProps) -> Html {
    html! {
        <div class="mb-6 flex flex-wrap items-center justify-between gap-3">
            <div>
                <h1 class="text-2xl font-semibold">{props.title.clone()}</h1>
                {props.subtitle.clone().map(|text| html! {
                    <p class="text-base-content/60 text-sm">{text}</p>
                }).unwrap_or_default()}
            </div>
            <div class="flex gap-2">{ for props.children.iter() }</div>
        </div>
    }
}
