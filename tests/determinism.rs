use media_search::catalog::Catalog;
use media_search::document::Book;
use media_search::index::{InvertedIndex, Searcher};
use media_search::types::{MediaId, Query, SearchResult};

fn make_book(title: &str, author: &str, content: &str) -> Book {
    Book::new(title, vec![author.to_string()], content).unwrap()
}

fn catalog() -> Catalog {
    let mut catalog = Catalog::from_media(vec![
        make_book("Moby Dick", "Herman Melville", "Call me Ishmael the whale"),
        make_book("Emma", "Jane Austen", "Emma Woodhouse handsome clever and rich"),
        make_book("Persuasion", "Jane Austen", "Sir Walter Elliot the vain"),
    ])
    .unwrap();
    catalog.rate(MediaId::new(0), 4).unwrap();
    catalog.rate(MediaId::new(2), 4).unwrap();
    catalog
}

#[test]
fn invariant_entries_sorted_by_token() {
    let index = InvertedIndex::build(&catalog());
    let tokens: Vec<&str> = index.entries().map(|(t, _)| t).collect();
    let mut sorted = tokens.clone();
    sorted.sort();
    assert_eq!(tokens, sorted);
    assert_eq!(tokens.first(), Some(&"and"));
}

#[test]
fn invariant_same_content_same_version() {
    let a = InvertedIndex::build(&catalog());
    let b = InvertedIndex::build(&catalog());
    assert_eq!(a.version(), b.version());
    assert!(a.version().as_str().starts_with("sha256:"));
    assert_eq!(a.version().as_str().len(), "sha256:".len() + 64);
}

#[test]
fn invariant_different_content_different_version() {
    let a = InvertedIndex::build(&catalog());

    let mut other = catalog();
    let extra = other.push(Box::new(make_book("Extra", "Someone", "whale"))).unwrap();
    assert_eq!(extra, MediaId::new(3));
    let b = InvertedIndex::build(&other);

    assert_ne!(a.version(), b.version());
}

#[test]
fn invariant_version_ignores_ratings() {
    let mut c = catalog();
    let before = InvertedIndex::build(&c).version();
    c.rate(MediaId::new(1), 5).unwrap();
    assert_eq!(InvertedIndex::build(&c).version(), before);
}

#[test]
fn golden_manifest_counts() {
    let index = InvertedIndex::build(&catalog());
    let manifest = index.manifest();

    assert_eq!(manifest.documents_indexed, 3);
    assert_eq!(manifest.distinct_tokens, index.distinct_tokens());
    // "the" appears in two books, "emma" twice in one book.
    assert_eq!(manifest.distinct_tokens, 15);
    assert_eq!(manifest.postings, 16);
    assert_eq!(manifest.index_version, index.version());

    let json = serde_json::to_value(&manifest).unwrap();
    assert!(json["index_version"].as_str().unwrap().starts_with("sha256:"));
    assert_eq!(json["postings"], 16);
}

#[test]
fn invariant_repeated_search_identical_output() {
    let c = catalog();
    let index = InvertedIndex::build(&c);
    let searcher = Searcher::new(&c, &index);

    let first = searcher.search(Query::new("the emma"));
    for _ in 0..5 {
        assert_eq!(searcher.search(Query::new("the emma")), first);
    }

    let titles: Vec<&str> = first.documents.iter().map(|d| d.title.as_str()).collect();
    assert_eq!(titles, ["Moby Dick", "Persuasion", "Emma"]);
}

#[test]
fn golden_search_result_serialization() {
    let c = catalog();
    let index = InvertedIndex::build(&c);
    let result = Searcher::new(&c, &index).search(Query::new("Ishmael"));

    let json_str = serde_json::to_string_pretty(&result).unwrap();

    const EXPECTED_JSON: &str = r#"{
      "documents": [
        {
          "id": 0,
          "title": "Moby Dick",
          "contributors": ["Herman Melville"],
          "average_rating": 4.0,
          "num_ratings": 1,
          "display": "Moby Dick by [Herman Melville]: 4.00 (1 ratings)"
        }
      ],
      "search": {
        "query": "Ishmael",
        "terms": ["ishmael"],
        "terms_matched": ["ishmael"],
        "documents_indexed": 3,
        "documents_matched": 1
      }
    }"#;

    let actual: serde_json::Value = serde_json::from_str(&json_str).unwrap();
    let expected: serde_json::Value = serde_json::from_str(EXPECTED_JSON).unwrap();
    assert_eq!(actual, expected);

    let roundtrip: SearchResult = serde_json::from_str(&json_str).unwrap();
    assert_eq!(roundtrip, result);
}

#[test]
fn invariant_ids_follow_insertion_and_fit_u32() {
    assert_eq!(MediaId::try_from(7usize), Ok(MediaId::new(7)));
    assert_eq!(MediaId::try_from(u32::MAX as usize), Ok(MediaId::new(u32::MAX)));
    #[cfg(target_pointer_width = "64")]
    assert!(MediaId::try_from(u32::MAX as usize + 1).is_err());

    let mut catalog = Catalog::from_media(Vec::<Book>::new()).unwrap();
    for expected in 0..3 {
        let id = catalog
            .push(Box::new(make_book("T", "A", "word")))
            .unwrap();
        assert_eq!(id, MediaId::new(expected));
    }
    assert_eq!(catalog.len(), 3);
}
