//! Property-based tests

mod watch_item_proptest;
