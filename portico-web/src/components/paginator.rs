use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

/// Page sizes offered by the selector.
const PAGE_SIZES: [u32; 4] = [5, 10, 25, 50];

#[derive(Properties, PartialEq)]
pub struct PaginatorProps {
    pub total: u64,
    pub page_index: u32,
    pub page_size: u32,
    /// Emits `(page_index, page_size)`; a size change always lands on
    /// page 0.
    pub on_change: Callback<(u32, u32)>,
}

#[function_component(Paginator)]
pub fn paginator(props: &PaginatorProps) -> Html {
    let last_index = last_page_index(props.total, props.page_size);
    let at_first = props.page_index == 0;
    let at_last = props.page_index >= last_index;

    let on_prev = {
        let on_change = props.on_change.clone();
        let page_index = props.page_index;
        let page_size = props.page_size;
        Callback::from(move |_: MouseEvent| {
            if page_index > 0 {
                on_change.emit((page_index - 1, page_size));
            }
        })
    };

    let on_next = {
        let on_change = props.on_change.clone();
        let page_index = props.page_index;
        let page_size = props.page_size;
        Callback::from(move |_: MouseEvent| {
            if page_index < last_index {
                on_change.emit((page_index + 1, page_size));
            }
        })
    };

    // Changing the size resets to the first page, always.
    let on_size = {
        let on_change = props.on_change.clone();
        let page_size = props.page_size;
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                let new_size = select.value().parse().unwrap_or(page_size);
                on_change.emit((0, new_size));
            }
        })
    };

    html! {
        <div class="flex items-center justify-end gap-2 p-2 text-sm">
            <span class="text-base-content/70">
                { format!("{} rows", props.total) }
            </span>
            <select class="select select-bordered select-sm" onchange={on_size}>
                { for PAGE_SIZES.iter().map(|size| html! {
                    <option value={size.to_string()} selected={*size == props.page_size}>
                        {size.to_string()}
                    </option>
                }) }
            </select>
            <button class="btn btn-ghost btn-sm" onclick={on_prev} disabled={at_first} aria-label="previous page">
                <Icon icon_id={IconId::HeroiconsOutlineChevronLeft} class="h-4 w-4" />
            </button>
            <span>
                { format!("Page {} of {}", props.page_index + 1, last_index + 1) }
            </span>
            <button class="btn btn-ghost btn-sm" onclick={on_next} disabled={at_last} aria-label="next page">
                <Icon icon_id={IconId::HeroiconsOutlineChevronRight} class="h-4 w-4" />
            </button>
        </div>
    }
}

/// Zero-based index of the last page covering `total` rows.
fn last_page_index(total: u64, page_size: u32) -> u32 {
    if page_size == 0 || total == 0 {
        return 0;
    }
    let pages = total.div_ceil(u64::from(page_size));
    u32::try_from(pages.saturating_sub(1)).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Page;

    #[test]
    fn last_page_index_rounds_up() {
        assert_eq!(last_page_index(0, 10), 0);
        assert_eq!(last_page_index(1, 10), 0);
        assert_eq!(last_page_index(10, 10), 0);
        assert_eq!(last_page_index(11, 10), 1);
        assert_eq!(last_page_index(57, 10), 5);
    }

    #[test]
    fn degenerate_page_size_stays_on_page_zero() {
        assert_eq!(last_page_index(100, 0), 0);
    }

    #[test]
    fn page_model_and_paginator_agree_on_page_count() {
        let page = Page {
            items: vec![0_i64; 10],
            total: 57,
            page_index: 0,
            page_size: 10,
        };
        assert_eq!(u64::from(last_page_index(page.total, page.page_size)) + 1, u64::from(page.page_count()));
    }
}
