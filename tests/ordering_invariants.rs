use std::cmp::Ordering;

use media_search::catalog::Catalog;
use media_search::document::{compare_media, compare_with_absent, Book, Media};
use media_search::types::MediaId;
use proptest::prelude::*;

fn book(title: &str, contributors: usize, scores: &[i32]) -> Book {
    let names = (0..contributors).map(|i| format!("Author {i}")).collect();
    let mut book = Book::new(title, names, "shared words").unwrap();
    for score in scores {
        book.add_rating(*score).unwrap();
    }
    book
}

fn titles(catalog: &Catalog, ids: &[MediaId]) -> Vec<String> {
    ids.iter()
        .map(|id| catalog.get(*id).unwrap().title().to_string())
        .collect()
}

fn all_ids(catalog: &Catalog) -> Vec<MediaId> {
    catalog.iter().map(|(id, _)| id).collect()
}

#[test]
fn golden_higher_average_first() {
    let low = book("Low", 1, &[2, 2]);
    let high = book("High", 1, &[5]);
    assert_eq!(compare_media(&high, &low), Ordering::Less);
    assert_eq!(compare_media(&low, &high), Ordering::Greater);
}

#[test]
fn golden_more_ratings_first_on_equal_average() {
    let few = book("Few", 1, &[4]);
    let many = book("Many", 1, &[4, 4, 4]);
    assert_eq!(compare_media(&many, &few), Ordering::Less);
}

#[test]
fn golden_title_tie_break_is_case_insensitive() {
    let scores = [5, 4, 5, 4, 5, 4, 5, 4, 5, 4];
    let catalog =
        Catalog::from_media(vec![book("Zeta", 1, &scores), book("Alpha", 1, &scores)]).unwrap();
    assert_eq!(catalog.get(MediaId::new(0)).unwrap().average_rating(), 4.5);

    let mut ids = all_ids(&catalog);
    catalog.sort_ids(&mut ids);
    assert_eq!(titles(&catalog, &ids), ["Alpha", "Zeta"]);

    let upper = book("BETA", 1, &[]);
    let lower = book("alpha", 1, &[]);
    assert_eq!(compare_media(&lower, &upper), Ordering::Less);
}

#[test]
fn golden_fewer_contributors_first() {
    let scores = [3, 3, 3, 3, 3];
    let catalog =
        Catalog::from_media(vec![book("Same", 2, &scores), book("Same", 1, &scores)]).unwrap();

    let mut ids = all_ids(&catalog);
    catalog.sort_ids(&mut ids);
    assert_eq!(ids, [MediaId::new(1), MediaId::new(0)]);
}

#[test]
fn invariant_identical_documents_ordered_by_insertion() {
    let catalog =
        Catalog::from_media(vec![book("Twin", 1, &[3]), book("Twin", 1, &[3])]).unwrap();
    let (a, b) = (MediaId::new(0), MediaId::new(1));

    let ma = catalog.get(a).unwrap();
    let mb = catalog.get(b).unwrap();
    assert_eq!(compare_media(ma, mb), Ordering::Equal);
    assert_eq!(catalog.compare(a, b), Ordering::Less);
    assert_eq!(catalog.compare(b, a), Ordering::Greater);
    assert_eq!(catalog.compare(a, a), Ordering::Equal);
}

#[test]
fn invariant_absent_partner_sorts_last() {
    let present = book("Any", 1, &[]);
    assert_eq!(compare_with_absent(&present, None), Ordering::Less);
    assert_eq!(
        compare_with_absent(&present, Some(&present as &dyn Media)),
        Ordering::Equal
    );

    let catalog = Catalog::from_media(vec![present]).unwrap();
    assert_eq!(catalog.compare(MediaId::new(0), MediaId::new(9)), Ordering::Less);
}

#[test]
fn invariant_ranked_listing_matches_sort() {
    let catalog = Catalog::from_media(vec![
        book("C", 1, &[1]),
        book("B", 1, &[5, 5]),
        book("A", 1, &[5]),
        book("D", 1, &[]),
    ])
    .unwrap();

    let ranked: Vec<String> = catalog.ranked().into_iter().map(|l| l.title).collect();
    assert_eq!(ranked, ["B", "A", "C", "D"]);

    // Insertion order is untouched by ranking.
    let listing: Vec<String> = catalog.listing().into_iter().map(|l| l.title).collect();
    assert_eq!(listing, ["C", "B", "A", "D"]);
}

fn arb_book() -> impl Strategy<Value = Book> {
    (
        prop::sample::select(vec!["alpha", "Alpha", "beta", "Gamma", "gamma"]),
        1usize..4,
        prop::collection::vec(0i32..6, 0..5),
    )
        .prop_map(|(title, contributors, scores)| book(title, contributors, &scores))
}

proptest! {
    #[test]
    fn invariant_strict_total_order(books in prop::collection::vec(arb_book(), 1..12)) {
        let catalog = Catalog::from_media(books).unwrap();
        let ids = all_ids(&catalog);

        for &a in &ids {
            for &b in &ids {
                let ab = catalog.compare(a, b);
                prop_assert_eq!(ab, catalog.compare(b, a).reverse());
                prop_assert_eq!(ab == Ordering::Equal, a == b);
                for &c in &ids {
                    if ab.is_lt() && catalog.compare(b, c).is_lt() {
                        prop_assert!(catalog.compare(a, c).is_lt());
                    }
                }
            }
        }
    }

    #[test]
    fn invariant_sorting_is_idempotent(books in prop::collection::vec(arb_book(), 0..12)) {
        let catalog = Catalog::from_media(books).unwrap();
        let mut once = all_ids(&catalog);
        catalog.sort_ids(&mut once);
        let mut twice = once.clone();
        catalog.sort_ids(&mut twice);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn invariant_sort_independent_of_input_order(
        books in prop::collection::vec(arb_book(), 0..12),
        seed in any::<u64>(),
    ) {
        let catalog = Catalog::from_media(books).unwrap();
        let mut forward = all_ids(&catalog);
        let mut shuffled = forward.clone();
        shuffled.rotate_left((seed as usize) % forward.len().max(1));
        shuffled.reverse();

        catalog.sort_ids(&mut forward);
        catalog.sort_ids(&mut shuffled);
        prop_assert_eq!(forward, shuffled);
    }
}
