//! Page layout policy
//!
//! Decides single/double/split mode from the orientation, the user's
//! preference and the chapter length. Evaluation is pure: equal inputs give
//! equal directives.

use crate::constants::MIN_PAGES_FOR_DOUBLE;
use crate::types::{Orientation, PageLayout};

use super::{LayoutDirective, LayoutInputs};

/// Evaluate the layout policy.
///
/// Chapters with fewer than two pages never get double pages, whatever the
/// preference or orientation says.
pub fn evaluate(inputs: &LayoutInputs) -> LayoutDirective {
    let can_pair = inputs.page_count >= MIN_PAGES_FOR_DOUBLE;
    match inputs.preference {
        PageLayout::Single => LayoutDirective::single(),
        PageLayout::Double => LayoutDirective {
            double_pages: can_pair,
            split_pages: false,
            auto_double_pages: false,
        },
        PageLayout::Split => LayoutDirective {
            double_pages: false,
            split_pages: true,
            auto_double_pages: false,
        },
        PageLayout::Automatic => {
            let double_pages = can_pair && inputs.orientation == Orientation::Landscape;
            automatic(double_pages, inputs.automatic_splits)
        }
    }
}

/// Directive after the user flips double pages by hand.
///
/// Automatic mode stays automatic and re-derives the split flag; explicit
/// modes never gain split pages from a toggle.
pub fn toggle_double_pages(
    current: &LayoutDirective,
    automatic_splits: bool,
    page_count: usize,
) -> LayoutDirective {
    let double_pages = !current.double_pages && page_count >= MIN_PAGES_FOR_DOUBLE;
    if current.auto_double_pages {
        automatic(double_pages, automatic_splits)
    } else {
        LayoutDirective {
            double_pages,
            split_pages: false,
            auto_double_pages: false,
        }
    }
}

fn automatic(double_pages: bool, automatic_splits: bool) -> LayoutDirective {
    LayoutDirective {
        double_pages,
        split_pages: automatic_splits && !double_pages,
        auto_double_pages: true,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(orientation: Orientation, preference: PageLayout, pages: usize) -> LayoutInputs {
        LayoutInputs {
            orientation,
            preference,
            automatic_splits: false,
            page_count: pages,
        }
    }

    #[test]
    fn test_explicit_preference_is_used_as_is() {
        let directive = evaluate(&inputs(Orientation::Landscape, PageLayout::Single, 10));
        assert_eq!(directive, LayoutDirective::single());

        let directive = evaluate(&inputs(Orientation::Portrait, PageLayout::Double, 10));
        assert!(directive.double_pages);
        assert!(!directive.auto_double_pages);

        let directive = evaluate(&inputs(Orientation::Landscape, PageLayout::Split, 10));
        assert!(directive.split_pages);
        assert!(!directive.double_pages);
    }

    #[test]
    fn test_automatic_follows_orientation() {
        let mut input = inputs(Orientation::Landscape, PageLayout::Automatic, 10);
        input.automatic_splits = true;
        let landscape = evaluate(&input);
        assert!(landscape.double_pages);
        assert!(!landscape.split_pages);
        assert!(landscape.auto_double_pages);

        input.orientation = Orientation::Portrait;
        let portrait = evaluate(&input);
        assert!(!portrait.double_pages);
        assert!(portrait.split_pages);
    }

    #[test]
    fn test_toggle_keeps_explicit_mode_unsplit() {
        let directive = evaluate(&inputs(Orientation::Portrait, PageLayout::Single, 10));
        let toggled = toggle_double_pages(&directive, true, 10);
        assert!(toggled.double_pages);
        let back = toggle_double_pages(&toggled, true, 10);
        assert_eq!(back, LayoutDirective::single());
    }
}
