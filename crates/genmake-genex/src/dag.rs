//! Cycle detection for recursive property evaluation.
//!
//! Every in-flight `$<TARGET_PROPERTY:...>` query pushes one frame. Frames
//! borrow their parent and live entirely on the call stack of the recursive
//! evaluation — there is no heap chain to maintain and nothing to clean up.

use crate::errors::CycleError;

/// One in-progress (target, property) evaluation.
#[derive(Debug)]
pub struct DagChecker<'a> {
    target: &'a str,
    property: &'a str,
    parent: Option<&'a DagChecker<'a>>,
}

impl<'a> DagChecker<'a> {
    /// Opens a frame for `(target, property)`, or reports a cycle if the same
    /// pair is already being evaluated anywhere up the ancestor chain. Both
    /// components must match: two properties of one target, or one property
    /// on two targets, may legitimately be in flight at once.
    pub fn check(
        target: &'a str,
        property: &'a str,
        parent: Option<&'a DagChecker<'a>>,
    ) -> Result<DagChecker<'a>, CycleError> {
        let frame = DagChecker {
            target,
            property,
            parent,
        };

        let mut ancestor = parent;
        while let Some(above) = ancestor {
            if above.target == target && above.property == property {
                return Err(CycleError {
                    chain: frame.chain(),
                });
            }
            ancestor = above.parent;
        }

        Ok(frame)
    }

    pub fn target(&self) -> &str {
        self.target
    }

    pub fn property(&self) -> &str {
        self.property
    }

    /// The frame chain outermost first, each entry as `target[PROPERTY]`.
    fn chain(&self) -> Vec<String> {
        let mut chain = Vec::new();
        let mut frame = Some(self);
        while let Some(current) = frame {
            chain.push(format!("{}[{}]", current.target, current.property));
            frame = current.parent;
        }
        chain.reverse();
        chain
    }
}

#[cfg(test)]
mod tests {
    use super::DagChecker;

    #[test]
    fn distinct_pairs_nest() {
        let a = DagChecker::check("lib", "COMPILE_DEFINITIONS", None).unwrap();
        let b = DagChecker::check("lib", "INCLUDE_DIRECTORIES", Some(&a)).unwrap();
        let c = DagChecker::check("other", "COMPILE_DEFINITIONS", Some(&b)).unwrap();
        assert_eq!(c.target(), "other");
    }

    #[test]
    fn direct_self_reference_is_a_cycle() {
        let a = DagChecker::check("lib", "P", None).unwrap();
        let err = DagChecker::check("lib", "P", Some(&a)).unwrap_err();
        assert_eq!(err.chain, vec!["lib[P]".to_owned(), "lib[P]".to_owned()]);
    }

    #[test]
    fn indirect_cycle_reports_the_full_chain() {
        let a = DagChecker::check("a", "P", None).unwrap();
        let b = DagChecker::check("b", "Q", Some(&a)).unwrap();
        let err = DagChecker::check("a", "P", Some(&b)).unwrap_err();
        assert_eq!(err.chain, vec!["a[P]", "b[Q]", "a[P]"]);
    }

    #[test]
    fn same_target_different_property_is_not_a_cycle() {
        let a = DagChecker::check("t", "P", None).unwrap();
        assert!(DagChecker::check("t", "Q", Some(&a)).is_ok());
        assert!(DagChecker::check("u", "P", Some(&a)).is_ok());
    }
}
