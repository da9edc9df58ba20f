//! Deterministic in-memory seed data.
//!
//! Fixed ids and timestamps so the facade serves identical responses on every
//! start; the mock arrays a real backend will eventually replace.

use chrono::{DateTime, TimeZone, Utc};

use partnerdesk_catalog::{Product, ProductStatus};
use partnerdesk_notifications::{Notification, NotificationKind};

fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, d, 9, 0, 0).unwrap()
}

pub fn products() -> Vec<Product> {
    let row = |id: &str,
               name: &str,
               category: &str,
               status: ProductStatus,
               price: u64,
               inventory: i64,
               views: u64,
               sales: u64,
               d: u32| Product {
        id: id.parse().expect("seed ids are non-empty"),
        name: name.to_string(),
        category: category.to_string(),
        status,
        price,
        inventory,
        views,
        sales,
        created_at: day(d),
    };

    vec![
        row("prod_001", "Alpine Jacket", "Outdoor", ProductStatus::Active, 12900, 34, 812, 41, 1),
        row("prod_002", "Trail Running Shoes", "Outdoor", ProductStatus::Active, 8900, 52, 1204, 97, 2),
        row("prod_003", "Titanium Trekking Poles", "Outdoor", ProductStatus::Draft, 4900, 0, 58, 0, 3),
        row("prod_004", "Espresso Grinder", "Kitchen", ProductStatus::Active, 19900, 12, 640, 23, 4),
        row("prod_005", "Chef Knife 20cm", "Kitchen", ProductStatus::Inactive, 6900, 7, 311, 15, 5),
        row("prod_006", "Cast Iron Skillet", "Kitchen", ProductStatus::Active, 4500, 63, 955, 120, 6),
        row("prod_007", "Standing Desk Frame", "Office", ProductStatus::Active, 32900, 9, 402, 12, 7),
        row("prod_008", "Ergonomic Desk Lamp", "Office", ProductStatus::Archived, 3900, 0, 188, 44, 8),
        row("prod_009", "Monitor Arm Duo", "Office", ProductStatus::Draft, 11900, 0, 21, 0, 9),
        row("prod_010", "Wool Throw Blanket", "Home", ProductStatus::Active, 7400, 28, 530, 66, 10),
    ]
}

pub fn notifications() -> Vec<Notification> {
    let row = |id: &str, title: &str, body: &str, kind: NotificationKind, read: bool, d: u32| {
        Notification {
            id: id.parse().expect("seed ids are non-empty"),
            title: title.to_string(),
            body: body.to_string(),
            kind,
            read,
            created_at: day(d),
        }
    };

    vec![
        row(
            "ntf_001",
            "Order #4211 shipped",
            "Your fulfillment partner confirmed shipment of order #4211.",
            NotificationKind::Order,
            true,
            11,
        ),
        row(
            "ntf_002",
            "June invoice available",
            "The invoice for your June subscription is ready for download.",
            NotificationKind::Billing,
            false,
            12,
        ),
        row(
            "ntf_003",
            "Summer campaign ended",
            "Your summer campaign finished with 1,204 clicks.",
            NotificationKind::Marketing,
            false,
            13,
        ),
        row(
            "ntf_004",
            "Scheduled maintenance",
            "The portal will be briefly unavailable on Sunday 02:00 UTC.",
            NotificationKind::System,
            false,
            14,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_unique() {
        let products = products();
        let mut ids: Vec<_> = products.iter().map(|p| p.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn seed_is_deterministic() {
        assert_eq!(products(), products());
        assert_eq!(notifications(), notifications());
    }

    #[test]
    fn seed_covers_every_status() {
        let products = products();
        for status in [
            ProductStatus::Active,
            ProductStatus::Inactive,
            ProductStatus::Draft,
            ProductStatus::Archived,
        ] {
            assert!(products.iter().any(|p| p.status == status));
        }
    }
}
