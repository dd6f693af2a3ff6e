//! Photo view helpers
//!
//! The photo view lays events out as a grid of image tiles. It adds its own
//! CSS class to every event, tags the view header so the front-end script
//! knows which view is active, and reports a notice when nothing matches.

use std::collections::BTreeMap;

use crate::dialog::FilterChain;

/// CSS class added to every event rendered in the photo view
pub const PHOTO_EVENT_CLASS: &str = "tribe-events-photo-event";

/// Asset packages the photo view needs on the page
pub const PHOTO_ASSET_PACKAGES: &[&str] = &["ajax-photoview"];

/// Notice key used when no events match
pub const EVENTS_NOT_FOUND: &str = "events-not-found";

/// HTML attributes on the view header
pub type HeaderAttributes = BTreeMap<String, String>;

/// What the current events query looks like
#[derive(Debug, Clone, Default)]
pub struct QueryState {
    /// Free-text search term, if any
    pub search_term: Option<String>,
    /// Whether the query returned any events
    pub has_events: bool,
    /// Display name of the event category being browsed, if any
    pub category: Option<String>,
}

/// A message shown above the event listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub key: String,
    pub message: String,
}

/// The photo view
#[derive(Debug, Default)]
pub struct PhotoView {
    base_url: String,
    header_filters: FilterChain<HeaderAttributes, PhotoView>,
}

impl PhotoView {
    /// Create a photo view whose permalink is `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            header_filters: FilterChain::new(),
        }
    }

    /// Register a callback that rewrites the header attributes
    pub fn on_header_attributes<F>(mut self, filter: F) -> Self
    where
        F: Fn(HeaderAttributes, &PhotoView) -> HeaderAttributes + 'static,
    {
        self.header_filters.add(filter);
        self
    }

    /// Permalink of the photo view
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Add the photo view's class to an event's classes
    pub fn event_classes(&self, mut classes: Vec<String>) -> Vec<String> {
        classes.push(PHOTO_EVENT_CLASS.to_string());
        classes
    }

    /// Tag the view header with the view name and base URL
    pub fn header_attributes(&self, mut attrs: HeaderAttributes) -> HeaderAttributes {
        attrs.insert("data-view".to_string(), "photo".to_string());
        attrs.insert("data-baseurl".to_string(), self.base_url.clone());
        self.header_filters.apply(attrs, self)
    }

    /// The notice to show for `query`, if any
    pub fn notice(&self, query: &QueryState) -> Option<Notice> {
        let searching = query
            .search_term
            .as_deref()
            .is_some_and(|term| !term.is_empty());
        if searching || query.has_events {
            return None;
        }

        let mut message = String::from("No matching events ");
        if let Some(category) = query.category.as_deref().filter(|c| !c.is_empty()) {
            message.push_str(&format!(
                "listed under {}. Check out events for this category or view the full calendar.",
                category
            ));
        }

        Some(Notice {
            key: EVENTS_NOT_FOUND.to_string(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_event_classes_appends() {
        let view = PhotoView::new("/events/photo/");
        let classes = view.event_classes(vec!["type-tribe_events".to_string()]);
        assert_eq!(
            classes,
            vec![
                "type-tribe_events".to_string(),
                PHOTO_EVENT_CLASS.to_string()
            ]
        );
    }

    #[test]
    fn test_header_attributes() {
        let view = PhotoView::new("/events/photo/");
        let attrs = view.header_attributes(HeaderAttributes::new());
        assert_eq!(attrs["data-view"], "photo");
        assert_eq!(attrs["data-baseurl"], "/events/photo/");
    }

    #[test]
    fn test_header_attribute_filter_runs_last() {
        let view = PhotoView::new("/photo/").on_header_attributes(|mut attrs, view| {
            attrs.insert("data-view".into(), "photo-grid".into());
            attrs.insert("data-len".into(), view.base_url().len().to_string());
            attrs
        });
        let attrs = view.header_attributes(HeaderAttributes::new());
        assert_eq!(attrs["data-view"], "photo-grid");
        assert_eq!(attrs["data-len"], "7");
    }

    #[test]
    fn test_notice_when_nothing_found() {
        let view = PhotoView::default();
        let notice = view.notice(&QueryState::default()).unwrap();
        assert_eq!(notice.key, EVENTS_NOT_FOUND);
        assert_eq!(notice.message, "No matching events ");
    }

    #[test]
    fn test_notice_mentions_category() {
        let view = PhotoView::default();
        let query = QueryState {
            category: Some("Concerts".into()),
            ..Default::default()
        };
        let notice = view.notice(&query).unwrap();
        assert_eq!(
            notice.message,
            "No matching events listed under Concerts. Check out events for this category or view the full calendar."
        );
    }

    #[test]
    fn test_notice_ignores_empty_category() {
        let view = PhotoView::default();
        let query = QueryState {
            category: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(view.notice(&query).unwrap().message, "No matching events ");
    }

    #[test]
    fn test_no_notice_with_events_or_search() {
        let view = PhotoView::default();
        let with_events = QueryState {
            has_events: true,
            ..Default::default()
        };
        let searching = QueryState {
            search_term: Some("jazz".into()),
            ..Default::default()
        };
        assert_eq!(view.notice(&with_events), None);
        assert_eq!(view.notice(&searching), None);
    }
}
