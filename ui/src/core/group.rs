//! Order-preserving grouping of metrics by category.

use super::document::Metric;

/// One display tab: a category name and its metrics in original order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    pub name: String,
    pub metrics: Vec<Metric>,
}

/// Group metrics by category. Group order is the encounter order of each
/// category's first metric; within a group the original metric order is
/// kept. A category with no metrics never appears.
pub fn group_by_category(metrics: &[Metric]) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();

    for metric in metrics {
        match groups.iter_mut().find(|group| group.name == metric.category) {
            Some(group) => group.metrics.push(metric.clone()),
            None => groups.push(CategoryGroup {
                name: metric.category.clone(),
                metrics: vec![metric.clone()],
            }),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn metric(name: &str, category: &str) -> Metric {
        Metric {
            name: name.into(),
            description: String::new(),
            category: category.into(),
            unit: String::new(),
            value: json!(1),
        }
    }

    #[test]
    fn groups_preserve_encounter_and_relative_order() {
        let metrics = [
            metric("first", "A"),
            metric("second", "B"),
            metric("third", "A"),
        ];
        let groups = group_by_category(&metrics);

        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);

        let in_a: Vec<&str> = groups[0].metrics.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(in_a, vec!["first", "third"]);
    }

    #[test]
    fn defaulted_categories_share_one_other_group() {
        // The document loader defaults an absent category to "Other"; both
        // metrics must land in the same single group.
        let metrics = [metric("one", "Other"), metric("two", "Other")];
        let groups = group_by_category(&metrics);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "Other");
        assert_eq!(groups[0].metrics.len(), 2);
    }

    #[test]
    fn no_metrics_means_no_groups() {
        assert!(group_by_category(&[]).is_empty());
    }
}
