//! Property tests for identifier keys and list edits

use proptest::prelude::*;

use rewatch::shared::{ItemId, WatchItem, Watchlist};

proptest! {
    #[test]
    fn numeric_and_string_ids_share_a_key(n in any::<i64>()) {
        prop_assert_eq!(ItemId::from(n).key(), ItemId::from(n.to_string()).key());
    }

    #[test]
    fn integral_floats_share_the_integer_key(n in -1_000_000i64..1_000_000) {
        let float = serde_json::Number::from_f64(n as f64).map(ItemId::Number).unwrap();
        prop_assert_eq!(float.key(), ItemId::from(n).key());
    }

    #[test]
    fn without_removes_every_match_and_nothing_else(
        ids in prop::collection::vec(0i64..5, 0..16),
        target in 0i64..5
    ) {
        let list: Watchlist = ids.iter().map(|&n| WatchItem::new(n, format!("t{n}"))).collect();
        let key = ItemId::from(target).key();

        let trimmed = list.without(&key);

        prop_assert!(!trimmed.contains(&key));
        prop_assert_eq!(trimmed.len(), ids.iter().filter(|&&n| n != target).count());
    }
}
