// Integration tests for the browse pipeline

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use rewear_economics::RewardCalculator;
use rewear_marketplace::{
    catalog::demo_items, BrowseSession, FilterCriteria, Item, ItemDiscoveryEngine, Selector,
    SortStrategy,
};
use rewear_primitives::{Category, Condition, Gender, ItemId};

fn scenario_items() -> Vec<Item> {
    demo_items().into_iter().take(2).collect()
}

fn ids(items: &[Item]) -> Vec<&str> {
    items.iter().map(|item| item.id.as_str()).collect()
}

#[test]
fn scenario_a_points_high_splits_featured() {
    let engine = ItemDiscoveryEngine::new();

    let result = engine.discover(
        &scenario_items(),
        &FilterCriteria::default(),
        SortStrategy::PointsHigh,
    );

    assert_eq!(ids(&result.featured), vec!["1"]);
    assert_eq!(ids(&result.regular), vec!["2"]);
    assert_eq!(result.total(), 2);
}

#[test]
fn scenario_b_category_filter() {
    let engine = ItemDiscoveryEngine::new();
    let criteria = FilterCriteria::default().with_category(Category::Shoes);

    let filtered = engine.filter(&scenario_items(), &criteria);
    assert_eq!(ids(&filtered), vec!["2"]);

    let result = engine.discover(&scenario_items(), &criteria, SortStrategy::Latest);
    assert!(result.featured.is_empty());
    assert_eq!(ids(&result.regular), vec!["2"]);
    assert_eq!(result.total(), 1);
}

#[test]
fn scenario_c_search_is_case_insensitive() {
    let engine = ItemDiscoveryEngine::new();
    let criteria = FilterCriteria::default().with_search("denim");

    let filtered = engine.filter(&scenario_items(), &criteria);

    assert_eq!(ids(&filtered), vec!["1"]);
    assert_eq!(filtered[0].title, "Vintage Denim Jacket");
}

#[test]
fn scenario_d_nearby_ascending() {
    let engine = ItemDiscoveryEngine::new();
    let mut items = scenario_items();
    items.reverse();

    let sorted = engine.sort(&items, SortStrategy::Nearby);
    let distances: Vec<f64> = sorted.iter().map(|item| item.distance).collect();

    assert_eq!(distances, vec![1.2, 2.5]);
}

#[test]
fn scenario_e_empty_collection() {
    let engine = ItemDiscoveryEngine::new();
    let criteria = FilterCriteria::default()
        .with_search("anything")
        .with_gender(Gender::Female);

    let result = engine.discover(&[], &criteria, SortStrategy::Popular);

    assert!(result.featured.is_empty());
    assert!(result.regular.is_empty());
    assert_eq!(result.total(), 0);
    assert!(result.is_empty());
}

#[test]
fn unknown_sort_name_behaves_like_latest() {
    let engine = ItemDiscoveryEngine::new();
    let items = demo_items();

    let fallback = engine.sort(&items, SortStrategy::from("distance-desc"));
    let latest = engine.sort(&items, SortStrategy::Latest);

    assert_eq!(fallback, latest);
}

#[test]
fn session_reset_actions_differ_only_in_sort() {
    let engine = ItemDiscoveryEngine::new();
    let items = demo_items();

    let mut panel = BrowseSession::new();
    panel.set_category(Selector::parse("Pant"));
    panel.set_strategy(SortStrategy::PointsLow);
    let mut prompt = panel.clone();

    panel.clear_all();
    prompt.clear_filters();

    assert_eq!(panel.criteria(), prompt.criteria());
    assert_eq!(panel.strategy(), SortStrategy::Latest);
    assert_eq!(prompt.strategy(), SortStrategy::PointsLow);

    let first = |session: &BrowseSession| session.results(&engine, &items).regular[0].id.clone();
    assert_eq!(first(&panel), ItemId::from("2"));
    assert_eq!(first(&prompt), ItemId::from("2"));
    assert_eq!(prompt.results(&engine, &items).featured[0].id, ItemId::from("3"));
}

// Property tests

const TITLES: [&str; 6] = [
    "Denim Jacket",
    "Running Shoes",
    "Cotton Tee",
    "Formal Pants",
    "denim shorts",
    "Rain Coat",
];
const SIZES: [&str; 5] = ["XS", "S", "M", "L", "9"];

fn arb_item() -> impl Strategy<Value = Item> {
    (
        prop::sample::select(TITLES.to_vec()),
        prop::option::of(prop::sample::select(TITLES.to_vec())),
        prop::sample::select(Category::all().to_vec()),
        prop::sample::select(SIZES.to_vec()),
        prop::sample::select(Gender::all().to_vec()),
        prop::sample::select(Condition::all().to_vec()),
        0u32..4,
        0i64..4,
        any::<bool>(),
        0u32..4,
    )
        .prop_map(
            |(title, description, category, size, gender, condition, distance, day, featured, requests)| {
                Item {
                    id: ItemId::from("pending"),
                    title: title.to_string(),
                    description: description.map(|d| format!("Lovely {}", d)),
                    category,
                    size: size.to_string(),
                    gender,
                    condition,
                    image: None,
                    location: "Downtown".to_string(),
                    distance: f64::from(distance) * 0.5,
                    donor_name: "Tester".to_string(),
                    donor_rating: 4.0,
                    uploaded_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
                        + chrono::Duration::days(day),
                    is_featured: featured,
                    points: RewardCalculator::default().points_for(category),
                    requests_count: requests,
                }
            },
        )
}

fn arb_items() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(arb_item(), 0..24).prop_map(|mut items| {
        for (index, item) in items.iter_mut().enumerate() {
            item.id = ItemId::new(index.to_string());
        }
        items
    })
}

fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
    (
        prop::sample::select(vec!["", "denim", "DENIM", "coat", "lovely running", "zzz"]),
        prop::option::of(prop::sample::select(Category::all().to_vec())),
        prop::option::of(prop::sample::select(SIZES.to_vec())),
        prop::option::of(prop::sample::select(Gender::all().to_vec())),
        prop::option::of(prop::sample::select(Condition::all().to_vec())),
    )
        .prop_map(|(search, category, size, gender, condition)| FilterCriteria {
            search: search.to_string(),
            category: category.map_or(Selector::Any, Selector::Only),
            size: size.map_or(Selector::Any, |s| Selector::Only(s.to_string())),
            gender: gender.map_or(Selector::Any, Selector::Only),
            condition: condition.map_or(Selector::Any, Selector::Only),
        })
}

fn arb_strategy() -> impl Strategy<Value = SortStrategy> {
    prop::sample::select(SortStrategy::all().to_vec())
}

proptest! {
    #[test]
    fn unconstrained_filter_is_identity(items in arb_items()) {
        let engine = ItemDiscoveryEngine::new();
        prop_assert_eq!(engine.filter(&items, &FilterCriteria::default()), items);
    }

    #[test]
    fn filter_returns_ordered_subset_of_matches(items in arb_items(), criteria in arb_criteria()) {
        let engine = ItemDiscoveryEngine::new();
        let filtered = engine.filter(&items, &criteria);

        let expected: Vec<Item> = items.iter().filter(|i| criteria.matches(i)).cloned().collect();
        prop_assert_eq!(&filtered, &expected);

        for item in &filtered {
            prop_assert!(criteria.matches_search(item));
            prop_assert!(criteria.category.matches(&item.category));
            prop_assert!(criteria.size.matches(&item.size));
            prop_assert!(criteria.gender.matches(&item.gender));
            prop_assert!(criteria.condition.matches(&item.condition));
        }
    }

    #[test]
    fn sort_is_idempotent(items in arb_items(), strategy in arb_strategy()) {
        let engine = ItemDiscoveryEngine::new();
        let once = engine.sort(&items, strategy);
        let twice = engine.sort(&once, strategy);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn sort_is_stable(items in arb_items(), strategy in arb_strategy()) {
        let engine = ItemDiscoveryEngine::new();
        let sorted = engine.sort(&items, strategy);

        for pair in sorted.windows(2) {
            let order = strategy.compare(&pair[0], &pair[1]);
            prop_assert_ne!(order, std::cmp::Ordering::Greater);
            if order == std::cmp::Ordering::Equal {
                // ids are input positions
                let a: usize = pair[0].id.as_str().parse().unwrap();
                let b: usize = pair[1].id.as_str().parse().unwrap();
                prop_assert!(a < b);
            }
        }
    }

    #[test]
    fn partition_is_complete_and_disjoint(
        items in arb_items(),
        criteria in arb_criteria(),
        strategy in arb_strategy(),
    ) {
        let engine = ItemDiscoveryEngine::new();
        let sorted = engine.sort(&engine.filter(&items, &criteria), strategy);
        let result = engine.discover(&items, &criteria, strategy);

        prop_assert_eq!(result.total(), sorted.len());
        prop_assert!(result.featured.iter().all(|i| i.is_featured));
        prop_assert!(result.regular.iter().all(|i| !i.is_featured));

        let featured: Vec<&Item> = sorted.iter().filter(|i| i.is_featured).collect();
        let regular: Vec<&Item> = sorted.iter().filter(|i| !i.is_featured).collect();
        prop_assert_eq!(result.featured.iter().collect::<Vec<_>>(), featured);
        prop_assert_eq!(result.regular.iter().collect::<Vec<_>>(), regular);
    }

    #[test]
    fn discover_is_deterministic(
        items in arb_items(),
        criteria in arb_criteria(),
        strategy in arb_strategy(),
    ) {
        let engine = ItemDiscoveryEngine::new();
        prop_assert_eq!(
            engine.discover(&items, &criteria, strategy),
            engine.discover(&items, &criteria, strategy)
        );
    }
}
