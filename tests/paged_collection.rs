use admin_pager::pagination::{ColumnSort, FieldValue, PageEntry, PagedCollection};

#[derive(Debug, Clone)]
struct Item {
    name: String,
    rank: Option<i64>,
}

fn items(count: usize) -> Vec<Item> {
    (0..count)
        .map(|i| Item {
            name: format!("item{i}"),
            rank: i64::try_from(i).ok().filter(|rank| rank % 4 != 0),
        })
        .collect()
}

fn collection(count: usize, per_page: usize) -> PagedCollection<Item> {
    let mut collection = PagedCollection::new(Some(items(count)), per_page);
    collection.set_search_matcher(|item: &Item, key: &str| item.name.contains(key));
    collection.set_field_accessor("name", |item: &Item| Some(FieldValue::from(item.name.as_str())));
    collection.set_field_accessor("rank", |item: &Item| item.rank.map(FieldValue::Int));
    collection
}

fn names(collection: &PagedCollection<Item>) -> Vec<&str> {
    collection.page_items().map(|item| item.name.as_str()).collect()
}

#[test]
fn pages_partition_all_items() {
    for count in [0, 1, 9, 10, 11, 99, 100, 101] {
        for per_page in [1, 3, 10, 20] {
            let mut collection = collection(count, per_page);
            assert_eq!(collection.pages(), count.div_ceil(per_page).max(1));

            let mut total = 0;
            for page in 1..=collection.pages() {
                collection.set_page(page);
                total += collection.page_item_count();
            }
            assert_eq!(total, count, "{count} items, {per_page} per page");
        }
    }
}

#[test]
fn twenty_five_items_example() {
    let mut collection = collection(25, 10);
    assert_eq!(collection.pages(), 3);
    assert_eq!(names(&collection).len(), 10);
    assert_eq!(names(&collection)[0], "item0");
    assert_eq!(names(&collection)[9], "item9");
    assert_eq!((collection.start_row(), collection.end_row()), (1, 10));

    collection.set_page(3);
    assert_eq!(names(&collection), ["item20", "item21", "item22", "item23", "item24"]);
    assert_eq!(collection.end_row(), 25);
}

#[test]
fn search_example() {
    let mut collection = collection(25, 10);
    collection.set_page(2);
    collection.search("5");
    assert_eq!(names(&collection), ["item5", "item15"]);
    assert_eq!(collection.pages(), 1);
    assert_eq!(collection.page(), 1);
}

#[test]
fn missing_ranks_sort_last_both_ways() {
    let mut collection = collection(12, 20);
    for descending in [false, true] {
        collection.sort(Some("rank"), descending);
        let ranks: Vec<Option<i64>> = collection.items().map(|item| item.rank).collect();
        let first_missing = ranks.iter().position(Option::is_none).unwrap_or(ranks.len());
        assert!(ranks[first_missing..].iter().all(Option::is_none));
        assert_eq!(first_missing, 9);
    }
}

#[test]
fn float_field_with_nan_sorts_without_losing_items() {
    let mut collection = collection(120, 10);
    // every third item scores NaN, every rank-less item has no score
    collection.set_field_accessor("score", |item: &Item| {
        let rank = item.rank?;
        let score = if rank % 3 == 0 { f64::NAN } else { rank as f64 / 2.0 };
        Some(FieldValue::Float(score))
    });

    for descending in [false, true] {
        collection.sort(Some("score"), descending);
        assert_eq!(collection.item_count(), 120);

        let mut seen: Vec<&str> = collection.items().map(|item| item.name.as_str()).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 120);

        let ranks: Vec<Option<i64>> = collection.items().map(|item| item.rank).collect();
        let present = ranks.iter().take_while(|rank| rank.is_some()).count();
        assert_eq!(present, 90);
        assert!(ranks[present..].iter().all(Option::is_none));

        let nan_block = ranks[..present].iter().map(|rank| rank.is_some_and(|r| r % 3 == 0));
        let nan_block: Vec<bool> = nan_block.collect();
        let nan_count = nan_block.iter().filter(|&&nan| nan).count();
        if descending {
            assert!(nan_block[..nan_count].iter().all(|&nan| nan));
        } else {
            assert!(nan_block[present - nan_count..].iter().all(|&nan| nan));
        }
    }
}

#[test]
fn idempotent_search_and_sort() {
    let mut collection = collection(40, 10);
    collection.search("1");
    collection.sort(Some("name"), true);
    let revision = collection.revision();
    let before: Vec<String> = collection.items().map(|item| item.name.clone()).collect();

    collection.search("1");
    collection.sort(Some("name"), true);

    assert_eq!(collection.revision(), revision);
    let after: Vec<String> = collection.items().map(|item| item.name.clone()).collect();
    assert_eq!(before, after);
}

#[test]
fn pager_windows() {
    let collection = collection(5, 10);
    assert_eq!(
        collection.page_entries(),
        &[PageEntry::Page {
            page: 1,
            is_current: true
        }]
    );

    let mut collection = collection_with_pages(20);
    let first: Vec<Option<usize>> = collection.page_entries().iter().map(PageEntry::page).collect();
    assert_eq!(first, [Some(1), Some(2), Some(3), Some(4), None, Some(20)]);

    collection.set_page(10);
    let middle: Vec<Option<usize>> = collection.page_entries().iter().map(PageEntry::page).collect();
    assert_eq!(
        middle,
        [
            Some(1),
            None,
            Some(7),
            Some(8),
            Some(9),
            Some(10),
            Some(11),
            Some(12),
            Some(13),
            None,
            Some(20)
        ]
    );
    assert!(collection.page_entries()[5].is_current());
}

fn collection_with_pages(pages: usize) -> PagedCollection<Item> {
    collection(pages * 10, 10)
}

#[test]
fn reload_after_removal() {
    let mut collection = collection(11, 10);
    assert_eq!(collection.pages(), 2);

    let source = collection.source_items_mut();
    let index = source.iter().position(|item| item.name == "item4");
    if let Some(index) = index {
        source.remove(index);
    }
    collection.reload();

    assert_eq!(collection.item_count(), 10);
    assert_eq!(collection.pages(), 1);
    assert!(collection.items().all(|item| item.name != "item4"));
}

#[test]
fn navigation_at_boundaries() {
    let mut collection = collection(30, 10);
    collection.previous_page();
    assert_eq!(collection.page(), 1);
    collection.last_page();
    collection.next_page();
    assert_eq!(collection.page(), 3);
}

#[test]
fn header_clicks_cycle_sort() {
    let mut collection = collection(3, 10);
    let mut header = ColumnSort::new();

    header.click_and_apply("rank", &mut collection);
    assert_eq!(collection.sort_field(), Some("rank"));
    assert!(!collection.is_sort_descending());

    header.click_and_apply("rank", &mut collection);
    assert!(collection.is_sort_descending());
    assert_eq!(names(&collection), ["item2", "item1", "item0"]);

    header.click_and_apply("rank", &mut collection);
    assert_eq!(collection.sort_field(), None);
    assert_eq!(names(&collection), ["item0", "item1", "item2"]);
}
