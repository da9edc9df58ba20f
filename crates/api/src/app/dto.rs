use serde::{Deserialize, Serialize};

use partnerdesk_catalog::{
    parse_sort, CategoryFilter, Product, ProductQuery, ProductStatus, Segment, StatusFilter,
};
use partnerdesk_notifications::{Notification, NotificationKind, NotificationQuery};

// -------------------------
// Request params
// -------------------------

/// Query-string shape of `GET /products`. Every field is optional; unknown
/// values fail soft to the default rather than producing a 400, matching the
/// portal's behavior for malformed sort fields.
#[derive(Debug, Default, Deserialize)]
pub struct ProductListParams {
    pub q: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
    pub segment: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub page: Option<usize>,
}

impl ProductListParams {
    pub fn into_query(self) -> ProductQuery {
        let status_filter = match self.status.as_deref() {
            None | Some("all") => StatusFilter::All,
            Some(label) => match ProductStatus::parse(label) {
                Some(status) => StatusFilter::Only(status),
                None => StatusFilter::All,
            },
        };

        let category_filter = match self.category {
            None => CategoryFilter::All,
            Some(label) if label == "all" || label.is_empty() => CategoryFilter::All,
            Some(label) => CategoryFilter::Only(label),
        };

        let segment = match self.segment.as_deref() {
            None => Segment::All,
            Some(label) => match ProductStatus::parse(label) {
                Some(ProductStatus::Active) => Segment::Active,
                Some(ProductStatus::Inactive) => Segment::Inactive,
                Some(ProductStatus::Draft) => Segment::Draft,
                Some(ProductStatus::Archived) => Segment::Archived,
                None => Segment::All,
            },
        };

        // Field and direction fall back as a pair: an unknown sort field
        // means name ascending, whatever direction was asked for.
        let (sort_key, sort_order) = parse_sort(
            self.sort.as_deref().unwrap_or("name"),
            self.order.as_deref().unwrap_or("asc"),
        );

        ProductQuery {
            search_term: self.q.unwrap_or_default(),
            status_filter,
            category_filter,
            segment,
            sort_key,
            sort_order,
            page: self.page.unwrap_or(0),
        }
    }
}

/// Query-string shape of `GET /notifications`.
#[derive(Debug, Default, Deserialize)]
pub struct NotificationListParams {
    pub q: Option<String>,
    pub kind: Option<String>,
    pub unread_only: Option<bool>,
}

impl NotificationListParams {
    pub fn into_query(self) -> NotificationQuery {
        let kind_filter = match self.kind.as_deref() {
            Some("order") => Some(NotificationKind::Order),
            Some("billing") => Some(NotificationKind::Billing),
            Some("marketing") => Some(NotificationKind::Marketing),
            Some("system") => Some(NotificationKind::System),
            _ => None,
        };

        NotificationQuery {
            search: self.q.unwrap_or_default(),
            kind_filter,
            unread_only: self.unread_only.unwrap_or(false),
        }
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub items: Vec<Product>,
    pub total: usize,
    pub page: usize,
    pub page_count: usize,
}

#[derive(Debug, Serialize)]
pub struct NotificationListResponse {
    pub items: Vec<Notification>,
    pub unread: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use partnerdesk_catalog::{SortKey, SortOrder};

    #[test]
    fn defaults_when_no_params_given() {
        let query = ProductListParams::default().into_query();
        assert_eq!(query, ProductQuery::default());
    }

    #[test]
    fn maps_filters_and_sorting() {
        let params = ProductListParams {
            q: Some("jacket".to_string()),
            status: Some("draft".to_string()),
            category: Some("Outdoor".to_string()),
            sort: Some("price".to_string()),
            order: Some("desc".to_string()),
            page: Some(2),
            ..ProductListParams::default()
        };
        let query = params.into_query();
        assert_eq!(query.search_term, "jacket");
        assert_eq!(query.status_filter, StatusFilter::Only(ProductStatus::Draft));
        assert_eq!(
            query.category_filter,
            CategoryFilter::Only("Outdoor".to_string())
        );
        assert_eq!(query.sort_key, SortKey::Price);
        assert_eq!(query.sort_order, SortOrder::Desc);
        assert_eq!(query.page, 2);
    }

    #[test]
    fn unknown_values_fail_soft_to_defaults() {
        let params = ProductListParams {
            status: Some("banana".to_string()),
            segment: Some("banana".to_string()),
            sort: Some("banana".to_string()),
            order: Some("banana".to_string()),
            ..ProductListParams::default()
        };
        let query = params.into_query();
        assert_eq!(query.status_filter, StatusFilter::All);
        assert_eq!(query.segment, Segment::All);
        assert_eq!(query.sort_key, SortKey::Name);
        assert_eq!(query.sort_order, SortOrder::Asc);
    }

    #[test]
    fn unknown_sort_field_forces_ascending_despite_desc_order() {
        let params = ProductListParams {
            sort: Some("banana".to_string()),
            order: Some("desc".to_string()),
            ..ProductListParams::default()
        };
        let query = params.into_query();
        assert_eq!(query.sort_key, SortKey::Name);
        assert_eq!(query.sort_order, SortOrder::Asc);
    }

    #[test]
    fn segment_param_maps_to_segment_enum() {
        let params = ProductListParams {
            segment: Some("archived".to_string()),
            ..ProductListParams::default()
        };
        assert_eq!(params.into_query().segment, Segment::Archived);
    }

    #[test]
    fn notification_params_map_kind_and_unread() {
        let params = NotificationListParams {
            kind: Some("billing".to_string()),
            unread_only: Some(true),
            ..NotificationListParams::default()
        };
        let query = params.into_query();
        assert_eq!(query.kind_filter, Some(NotificationKind::Billing));
        assert!(query.unread_only);
    }
}
