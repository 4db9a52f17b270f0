#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PageSlot {
    Page(u32),
    Gap,
}

/// Page buttons for a pager: first and last pages always, `radius` pages
/// either side of `current`, and a gap marker wherever pages are skipped.
pub(crate) fn page_window(current: u32, total: u32, radius: u32) -> Vec<PageSlot> {
    if total == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total);
    let lo = current.saturating_sub(radius).max(1);
    let hi = current.saturating_add(radius).min(total);

    let mut out = Vec::new();
    if lo > 1 {
        out.push(PageSlot::Page(1));
        if lo > 2 {
            out.push(PageSlot::Gap);
        }
    }
    out.extend((lo..=hi).map(PageSlot::Page));
    if hi < total {
        if hi + 1 < total {
            out.push(PageSlot::Gap);
        }
        out.push(PageSlot::Page(total));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::PageSlot::{Gap, Page};
    use super::*;

    #[test]
    fn test_small_totals_show_every_page() {
        assert_eq!(page_window(1, 3, 2), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(page_window(1, 1, 2), vec![Page(1)]);
        assert!(page_window(1, 0, 2).is_empty());
    }

    #[test]
    fn test_gaps_on_both_sides() {
        assert_eq!(
            page_window(10, 20, 1),
            vec![Page(1), Gap, Page(9), Page(10), Page(11), Gap, Page(20)]
        );
    }

    #[test]
    fn test_no_gap_for_adjacent_edge() {
        assert_eq!(page_window(3, 5, 1), vec![Page(1), Page(2), Page(3), Page(4), Page(5)]);
    }

    #[test]
    fn test_current_clamped() {
        assert_eq!(page_window(9, 3, 1), vec![Page(1), Page(2), Page(3)]);
    }
}
