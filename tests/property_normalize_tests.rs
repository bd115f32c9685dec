use c3plot::{build_chart, normalize, ChartRequest, Colors, Datum, Grouping};
use proptest::prelude::*;
use std::collections::HashSet;

fn group_names() -> impl Strategy<Value = Vec<String>> {
    // Includes names that collide with generated x tags.
    prop::collection::hash_set(
        prop_oneof![
            "[a-z]{1,6}",
            Just("x0".to_string()),
            Just("x1".to_string()),
            Just("x0_".to_string()),
            Just("xCol".to_string()),
        ],
        1..6,
    )
    .prop_map(|names| names.into_iter().collect())
}

fn grouped_request(names: Vec<String>, len: usize, colored: bool) -> ChartRequest {
    let values = |offset: f64| -> Vec<Datum> {
        (0..len).map(|i| Datum::Number(i as f64 + offset)).collect()
    };
    let colors = names.iter().map(|_| "#336699".to_string()).collect();
    let grouping = Grouping {
        x: names.iter().map(|_| values(0.0)).collect(),
        y: names.iter().map(|_| values(1.0)).collect(),
        group_names: names,
    };
    let req = ChartRequest::grouped(grouping);
    if colored {
        req.with_colors(Colors::Many(colors))
    } else {
        req
    }
}

proptest! {
    #[test]
    fn grouped_layout_holds_for_any_group_count(
        names in group_names(),
        len in 0usize..8,
        colored in any::<bool>(),
    ) {
        let g = names.len();
        let set = normalize(&grouped_request(names, len, colored)).unwrap();

        prop_assert_eq!(set.columns().len(), 2 * g);
        prop_assert_eq!(set.xs().unwrap().len(), g);
        prop_assert_eq!(set.colors.len(), if colored { g } else { 0 });

        let tags: HashSet<&str> = set.columns().iter().map(|c| c.tag.as_str()).collect();
        prop_assert_eq!(tags.len(), 2 * g);

        // Every mapping points from a y column to an x column that exists.
        for (y_tag, x_tag) in set.xs().unwrap() {
            prop_assert!(tags.contains(y_tag.as_str()));
            prop_assert!(tags.contains(x_tag.as_str()));
        }
    }

    #[test]
    fn ungrouped_tags_never_collide(ylab in prop_oneof!["[a-zA-Z_]{1,8}", Just("xCol".to_string()), Just("xCol_".to_string())]) {
        let req = ChartRequest::scatter([1.0, 2.0], [3.0, 4.0]).with_ylab(ylab.clone());
        let set = normalize(&req).unwrap();
        prop_assert_eq!(set.columns().len(), 2);
        prop_assert_ne!(&set.columns()[0].tag, &set.columns()[1].tag);
        prop_assert_eq!(&set.columns()[1].tag, &ylab);
    }

    #[test]
    fn build_chart_is_idempotent(
        names in group_names(),
        len in 0usize..5,
        colored in any::<bool>(),
    ) {
        let req = grouped_request(names, len, colored);
        let first = build_chart(&req).unwrap();
        let second = build_chart(&req).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn pie_preserves_label_order(values in prop::collection::vec(0.0f64..1000.0, 1..10)) {
        let labels: Vec<String> = (0..values.len()).map(|i| format!("slice{}", values.len() - i)).collect();
        let set = normalize(&ChartRequest::pie(labels.clone(), values.clone())).unwrap();
        let slices = set.labeled_values().unwrap();
        let keys: Vec<&String> = slices.keys().collect();
        prop_assert_eq!(keys, labels.iter().collect::<Vec<_>>());
        prop_assert!(set.colors.is_empty());
    }
}
