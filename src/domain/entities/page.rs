use serde::Deserialize;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Pagination snapshot. The values always come from the most recently
/// applied server response; a requested page is not truth until echoed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current_page: u64,
    pub page_size: u64,
    pub total: u64,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            total: 0,
        }
    }
}

impl PageState {
    /// Missing envelope fields fall back to defaults instead of erroring.
    pub fn from_envelope<T>(envelope: &PageEnvelope<T>) -> Self {
        Self {
            current_page: envelope.page.unwrap_or(DEFAULT_PAGE),
            page_size: envelope.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            total: envelope.total.unwrap_or(0),
        }
    }

    pub fn total_pages(&self) -> u64 {
        if self.total == 0 {
            1
        } else {
            self.total.div_ceil(self.page_size.max(1))
        }
    }
}

/// Shape of a successful list response: `{list, total, page, pageSize}`.
/// Every field is optional on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEnvelope<T> {
    #[serde(default = "none")]
    pub list: Option<Vec<T>>,
    #[serde(default = "none")]
    pub total: Option<u64>,
    #[serde(default = "none")]
    pub page: Option<u64>,
    #[serde(default = "none")]
    pub page_size: Option<u64>,
}

fn none<T>() -> Option<T> {
    None
}

impl<T> PageEnvelope<T> {
    pub fn empty() -> Self {
        Self {
            list: None,
            total: None,
            page: None,
            page_size: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_state_defaults_when_envelope_fields_missing() {
        let envelope = PageEnvelope::<()>::empty();
        let page = PageState::from_envelope(&envelope);

        assert_eq!(
            page,
            PageState {
                current_page: 1,
                page_size: 10,
                total: 0,
            }
        );
    }

    #[test]
    fn page_state_takes_envelope_values_when_present() {
        let envelope = PageEnvelope::<()> {
            list: Some(Vec::new()),
            total: Some(42),
            page: Some(3),
            page_size: Some(20),
        };
        let page = PageState::from_envelope(&envelope);

        assert_eq!(page.current_page, 3);
        assert_eq!(page.page_size, 20);
        assert_eq!(page.total, 42);
    }

    #[test]
    fn total_pages_rounds_up_and_never_hits_zero() {
        let mut page = PageState::default();
        assert_eq!(page.total_pages(), 1, "empty table still has one page");

        page.total = 21;
        page.page_size = 10;
        assert_eq!(page.total_pages(), 3);

        page.total = 20;
        assert_eq!(page.total_pages(), 2);
    }

    #[test]
    fn envelope_tolerates_missing_fields_on_the_wire() {
        let envelope: PageEnvelope<serde_json::Value> =
            serde_json::from_str(r#"{"list":[{"id":1}]}"#).expect("envelope should deserialize");

        assert_eq!(envelope.list.as_ref().map(Vec::len), Some(1));
        assert_eq!(envelope.total, None);
        assert_eq!(envelope.page, None);
        assert_eq!(envelope.page_size, None);
    }
}
