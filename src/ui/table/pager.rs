use dioxus::prelude::*;

use crate::domain::entities::page::PageState;

/// Window of page numbers rendered around the current page.
pub fn page_window(current: u64, total_pages: u64, width: u64) -> Vec<u64> {
    let half = width / 2;
    let start = current.saturating_sub(half).max(1);
    let end = (start + width - 1).min(total_pages);
    let start = end.saturating_sub(width - 1).max(1);
    (start..=end).collect()
}

#[component]
pub fn Pager(page: PageState, busy: bool, on_page: EventHandler<u64>) -> Element {
    let total_pages = page.total_pages();
    let current = page.current_page;
    let numbers = page_window(current, total_pages, 5);

    rsx! {
        div {
            style: "display: flex; gap: 6px; align-items: center; justify-content: flex-end; margin-top: 16px;",
            span { style: "color: #888; margin-right: 8px;", "共 {page.total} 条" }
            button {
                style: "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;",
                disabled: busy || current <= 1,
                onclick: move |_| on_page.call(current - 1),
                "上一页"
            }
            for number in numbers {
                button {
                    style: if number == current {
                        "border: 1px solid #4c6ef5; background: #eef4ff; padding: 4px 10px; border-radius: 6px; cursor: pointer;"
                    } else {
                        "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;"
                    },
                    disabled: busy,
                    onclick: move |_| on_page.call(number),
                    "{number}"
                }
            }
            button {
                style: "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;",
                disabled: busy || current >= total_pages,
                onclick: move |_| on_page.call(current + 1),
                "下一页"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_centers_on_the_current_page() {
        assert_eq!(page_window(5, 10, 5), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn window_clamps_at_both_ends() {
        assert_eq!(page_window(1, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(10, 10, 5), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(1, 2, 5), vec![1, 2]);
    }
}
