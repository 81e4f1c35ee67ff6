//! Menu filtering behaviour over hand-built and fixture catalogs.

use testresult::TestResult;

use dining_menu::prelude::*;

fn entrees() -> Catalog {
    Catalog::new([Category::new(
        "Entrees",
        [
            MenuItem::new("Burger", &["Milk", "Nuts"]),
            MenuItem::new("Salad", &["Veggie"]),
        ],
    )])
}

#[test]
fn empty_filters_show_every_item_in_catalog_order() -> TestResult {
    let payload = Fixture::new().load_menu("lunch")?;
    let visible = compute_visible_items(&payload.menu, &FilterState::new());

    let expected: Vec<(&str, Vec<&str>)> = payload
        .menu
        .categories()
        .iter()
        .map(|category| {
            (
                category.name(),
                category.items().iter().map(MenuItem::name).collect(),
            )
        })
        .collect();

    assert_eq!(visible.names(), expected);
    assert_eq!(visible.item_count(), payload.menu.item_count());

    Ok(())
}

#[test]
fn whitelist_keeps_only_items_with_the_tag() {
    let catalog = entrees();
    let mut state = FilterState::new();
    state.toggle("Veggie");

    let visible = compute_visible_items(&catalog, &state);

    assert_eq!(visible.names(), [("Entrees", vec!["Salad"])]);
}

#[test]
fn blacklist_drops_items_with_the_tag() {
    let catalog = entrees();
    let mut state = FilterState::new();
    state.toggle("Milk");

    let visible = compute_visible_items(&catalog, &state);

    assert_eq!(visible.names(), [("Entrees", vec!["Salad"])]);
}

#[test]
fn excluded_tags_never_appear_regardless_of_whitelist() -> TestResult {
    let payload = Fixture::new().load_menu("lunch")?;
    let tags = payload.menu.tags_in_use();

    for excluded in tags.iter() {
        for included in tags.iter() {
            let mut state = FilterState::new();
            state.toggle_as(excluded, FilterKind::Blacklist);
            state.toggle_as(included, FilterKind::Whitelist);

            let visible = compute_visible_items(&payload.menu, &state);

            for category in visible.categories() {
                for item in &category.items {
                    assert!(
                        !item.tags().iter().any(|tag| tag == excluded),
                        "{} carries excluded {excluded}",
                        item.name()
                    );
                }
            }
        }
    }

    Ok(())
}

#[test]
fn whitelist_uses_and_semantics() -> TestResult {
    let payload = Fixture::new().load_menu("lunch")?;
    let vegan = payload.filters.icon("Vegan").ok_or("missing Vegan icon")?;
    let healthy = payload.filters.icon("Healthy").ok_or("missing Healthy icon")?;

    let mut state = FilterState::new();
    state.toggle_as(vegan, FilterKind::Whitelist);
    state.toggle_as(healthy, FilterKind::Whitelist);

    let visible = compute_visible_items_with(&payload.menu, &state, EmptyCategories::Omit);

    assert_eq!(visible.names(), [("Salad Bar", vec!["Garden Salad"])]);

    for category in visible.categories() {
        for item in &category.items {
            assert!(state.included().is_covered_by(item.tags()));
        }
    }

    Ok(())
}

#[test]
fn toggle_round_trip_restores_state() {
    let mut state = FilterState::new();
    state.toggle("Vegan");
    state.toggle("Eggs");

    for tag in ["Veggie", "Vegan", "Healthy", "Gluten", "Milk", "Nuts", "Eggs", "Soy"] {
        let before = state.clone();

        state.toggle(tag);
        assert_ne!(state, before, "{tag} had no effect");

        state.toggle(tag);
        assert_eq!(state, before, "{tag} did not round trip");
    }
}

#[test]
fn classification_is_a_fixed_partition() {
    let whitelist = ["Veggie", "Vegan", "Healthy", "Gluten"];

    for tag in whitelist {
        assert_eq!(classify(tag), FilterKind::Whitelist);
    }

    for tag in ["Milk", "Nuts", "Eggs", "Soy", "Fish", "VEGAN"] {
        assert_eq!(classify(tag), FilterKind::Blacklist);
    }
}

#[test]
fn display_names_for_buttons() {
    assert_eq!(display_name("Nuts"), "NUT-FREE");
    assert_eq!(display_name("Veggie"), "VEGETARIAN");
    assert_eq!(display_name("Vegan"), "VEGAN");
}

#[test]
fn fixture_with_key_tags_matches_hand_built_catalog() -> TestResult {
    let payload = Fixture::new().load_menu("entrees")?;

    assert_eq!(payload.menu, entrees());

    Ok(())
}
