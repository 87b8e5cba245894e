//! Snapshot of the category listing shown by `pxgen categories --json`.

use pxgen::cli::categories::listing;

#[test]
fn test_categories_listing() {
    insta::assert_json_snapshot!("categories", listing());
}
