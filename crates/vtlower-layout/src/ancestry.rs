//! Parent-chain walks over the class map.

use rustc_hash::FxHashSet;
use vtlower_ast::{ClassMap, ClassSignature};
use vtlower_common::{Result, TranslateError};

/// The inheritance chain of `class`, root first, ending with `class` itself.
///
/// Ancestors are looked up by name in `classes`; `class` need not be in the map.
pub fn ancestry<'a>(class: &'a ClassSignature, classes: &'a ClassMap) -> Result<Vec<&'a ClassSignature>> {
    let mut chain = vec![class];
    let mut seen = FxHashSet::default();
    seen.insert(class.class_name.as_str());

    let mut current = class;
    while let Some(parent_name) = current.parent() {
        let parent = classes
            .get(parent_name)
            .ok_or_else(|| TranslateError::UnresolvedParent {
                class: current.class_name.to_string(),
                parent: parent_name.to_string(),
            })?;
        if !seen.insert(parent.class_name.as_str()) {
            return Err(TranslateError::CyclicHierarchy {
                class: parent.class_name.to_string(),
            });
        }
        chain.push(parent);
        current = parent;
    }

    chain.reverse();
    Ok(chain)
}

/// Every class of the map, parents before children.
///
/// Classes at the same depth keep their map order.
pub fn hierarchy_order(classes: &ClassMap) -> Result<Vec<&ClassSignature>> {
    let mut ordered = classes
        .values()
        .map(|class| ancestry(class, classes).map(|chain| (chain.len(), class)))
        .collect::<Result<Vec<_>>>()?;
    ordered.sort_by_key(|(depth, _)| *depth);
    Ok(ordered.into_iter().map(|(_, class)| class).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vtlower_ast::Hierarchy;

    fn names(chain: &[&ClassSignature]) -> Vec<String> {
        chain.iter().map(|c| c.class_name.to_string()).collect()
    }

    #[test]
    fn test_chain_is_root_first() {
        let hierarchy = Hierarchy::new(
            [
                ClassSignature::new("C", "B"),
                ClassSignature::root("A"),
                ClassSignature::new("B", "A"),
            ],
            vec![],
        );
        let c = &hierarchy.classes["C"];
        assert_eq!(names(&ancestry(c, &hierarchy.classes).unwrap()), ["A", "B", "C"]);
    }

    #[test]
    fn test_order_puts_parents_first() {
        let hierarchy = Hierarchy::new(
            [
                ClassSignature::new("Circle", "Shape"),
                ClassSignature::root("Shape"),
                ClassSignature::root("Point"),
            ],
            vec![],
        );
        let order = hierarchy_order(&hierarchy.classes).unwrap();
        assert_eq!(names(&order), ["Shape", "Point", "Circle"]);
    }

    #[test]
    fn test_missing_parent() {
        let hierarchy = Hierarchy::new([ClassSignature::new("Circle", "Shape")], vec![]);
        let err = ancestry(&hierarchy.classes["Circle"], &hierarchy.classes).unwrap_err();
        assert!(matches!(
            err,
            TranslateError::UnresolvedParent { ref class, ref parent } if class == "Circle" && parent == "Shape"
        ));
    }

    #[test]
    fn test_cycle() {
        let hierarchy = Hierarchy::new(
            [ClassSignature::new("A", "B"), ClassSignature::new("B", "A")],
            vec![],
        );
        let err = ancestry(&hierarchy.classes["A"], &hierarchy.classes).unwrap_err();
        assert!(matches!(err, TranslateError::CyclicHierarchy { .. }));
    }
}
