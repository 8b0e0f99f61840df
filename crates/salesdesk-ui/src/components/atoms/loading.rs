//! Loading indicators.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct FullPageLoaderProps {
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

/// Centered spinner that replaces a whole page while it loads.
#[function_component(FullPageLoader)]
pub(crate) fn full_page_loader(props: &FullPageLoaderProps) -> Html {
    html! {
        <div class="flex min-h-96 items-center justify-center">
            <span class="loading loading-spinner loading-lg text-primary" role="status" aria-label={props.label.clone()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ProgressLineProps {
    pub label: AttrValue,
}

/// Indeterminate progress bar with a caption, used inside cards.
#[function_component(ProgressLine)]
pub(crate) fn progress_line(props: &ProgressLineProps) -> Html {
    html! {
        <div class="p-4">
            <p class="mb-3 text-center">{props.label.clone()}</p>
            <progress class="progress progress-primary w-full"></progress>
        </div>
    }
}
