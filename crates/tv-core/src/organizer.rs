//! Channel organizer — pure derivations over the catalog and preferences.
//!
//! Nothing here holds state: the same inputs always produce the same output,
//! so callers recompute on every change instead of caching.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::catalog::{Catalog, Channel, ALL_CATEGORY};
use crate::preferences::{Favorites, RecentlyWatched};

/// Category and search predicate from the filter step.
pub fn matches_filter(channel: &Channel, category: &str, search: &str) -> bool {
    let category_ok = category == ALL_CATEGORY || channel.category == category;
    category_ok && (search.is_empty() || contains_ignore_case(&channel.name, search))
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Display-name collation in three levels: base letters (accents and case
/// folded away), then accents, then case.  "Écran" sorts among the E's.
pub fn collate(a: &str, b: &str) -> Ordering {
    base_key(a)
        .cmp(&base_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// NFD-decompose, drop combining marks, lowercase.
fn base_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Favorites, then recently watched (most recent first), then by name.
pub fn compare_channels(
    a: &Channel,
    b: &Channel,
    favorites: &Favorites,
    recent: &RecentlyWatched,
) -> Ordering {
    let fav_a = favorites.contains(&a.id);
    let fav_b = favorites.contains(&b.id);
    if fav_a != fav_b {
        return fav_b.cmp(&fav_a);
    }

    if !fav_a {
        match (recent.position(&a.id), recent.position(&b.id)) {
            (Some(ra), Some(rb)) if ra != rb => return ra.cmp(&rb),
            (Some(_), None) => return Ordering::Less,
            (None, Some(_)) => return Ordering::Greater,
            _ => {}
        }
    }

    collate(&a.name, &b.name).then_with(|| a.id.cmp(&b.id))
}

/// Filter `channels` by category and search term, then order them.
pub fn organize<'a>(
    channels: &'a [Channel],
    category: &str,
    search: &str,
    favorites: &Favorites,
    recent: &RecentlyWatched,
) -> Vec<&'a Channel> {
    let mut out: Vec<&Channel> = channels
        .iter()
        .filter(|c| matches_filter(c, category, search))
        .collect();
    out.sort_by(|a, b| compare_channels(a, b, favorites, recent));
    out
}

/// Favorite channels in catalog order.  Ids no longer in the catalog are skipped.
pub fn favorites_view<'a>(catalog: &'a Catalog, favorites: &Favorites) -> Vec<&'a Channel> {
    catalog
        .channels()
        .iter()
        .filter(|c| favorites.contains(&c.id))
        .collect()
}

/// Recently-watched channels in history order, skipping unresolvable ids.
pub fn recent_view<'a>(catalog: &'a Catalog, recent: &RecentlyWatched) -> Vec<&'a Channel> {
    recent.iter().filter_map(|id| catalog.channel(id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(id: &str, name: &str, category: &str) -> Channel {
        Channel {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            url: format!("https://example.test/{}", id),
        }
    }

    fn ids(channels: &[&Channel]) -> Vec<String> {
        channels.iter().map(|c| c.id.clone()).collect()
    }

    fn sample() -> Vec<Channel> {
        vec![
            channel("espn", "ESPN", "sports"),
            channel("history", "History Channel", "documentaries"),
            channel("sportv", "SporTV", "sports"),
            channel("discovery", "Discovery Channel", "documentaries"),
            channel("espn2", "ESPN 2", "sports"),
        ]
    }

    #[test]
    fn category_filter_keeps_exactly_matching_channels() {
        let catalog = vec![
            channel("espn", "ESPN", "sports"),
            channel("history", "History Channel", "documentaries"),
        ];
        let out = organize(
            &catalog,
            "sports",
            "",
            &Favorites::new(),
            &RecentlyWatched::new(),
        );
        assert_eq!(ids(&out), vec!["espn"]);
    }

    #[test]
    fn favorite_sorts_before_alphabetical_rest() {
        let catalog = vec![
            channel("espn", "ESPN", "sports"),
            channel("history", "History Channel", "documentaries"),
        ];
        let favorites: Favorites = ["history"].into_iter().collect();
        let out = organize(&catalog, ALL_CATEGORY, "", &favorites, &RecentlyWatched::new());
        assert_eq!(ids(&out), vec!["history", "espn"]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let catalog = sample();
        let none = Favorites::new();
        let recent = RecentlyWatched::new();
        let out = organize(&catalog, ALL_CATEGORY, "channel", &none, &recent);
        assert_eq!(ids(&out), vec!["discovery", "history"]);

        let out = organize(&catalog, "sports", "EsPn", &none, &recent);
        assert_eq!(ids(&out), vec!["espn", "espn2"]);

        let out = organize(&catalog, "news", "", &none, &recent);
        assert!(out.is_empty());
    }

    #[test]
    fn recent_orders_non_favorites() {
        let catalog = sample();
        let favorites: Favorites = ["sportv"].into_iter().collect();
        let mut recent = RecentlyWatched::new();
        recent.record("history");
        recent.record("sportv");
        recent.record("espn2");

        let out = organize(&catalog, ALL_CATEGORY, "", &favorites, &recent);
        // sportv: favorite. espn2, history: recent order. Then alphabetical.
        assert_eq!(
            ids(&out),
            vec!["sportv", "espn2", "history", "discovery", "espn"]
        );
    }

    #[test]
    fn favorites_are_ordered_by_name_not_recency() {
        let catalog = sample();
        let favorites: Favorites = ["sportv", "espn"].into_iter().collect();
        let mut recent = RecentlyWatched::new();
        recent.record("espn");
        recent.record("sportv");
        let out = organize(&catalog, ALL_CATEGORY, "", &favorites, &recent);
        assert_eq!(ids(&out)[..2].to_vec(), vec!["espn", "sportv"]);
    }

    #[test]
    fn output_satisfies_predicate_and_is_complete() {
        let catalog = sample();
        let favorites: Favorites = ["discovery", "espn2"].into_iter().collect();
        let mut recent = RecentlyWatched::new();
        recent.record("espn");
        for category in [ALL_CATEGORY, "sports", "documentaries", "news"] {
            for search in ["", "e", "channel", "SPORTV", "xyz"] {
                let out = organize(&catalog, category, search, &favorites, &recent);
                assert!(out.iter().all(|c| matches_filter(c, category, search)));
                let expected = catalog
                    .iter()
                    .filter(|c| matches_filter(c, category, search))
                    .count();
                assert_eq!(out.len(), expected);

                let again = organize(&catalog, category, search, &favorites, &recent);
                assert_eq!(out, again);

                if let Some(first_plain) = out.iter().position(|c| !favorites.contains(&c.id)) {
                    assert!(out[first_plain..]
                        .iter()
                        .all(|c| !favorites.contains(&c.id)));
                }
            }
        }
    }

    #[test]
    fn collation_ignores_case_and_is_total() {
        assert_eq!(collate("espn", "ESPN 2"), Ordering::Less);
        assert_eq!(collate("abc", "ABD"), Ordering::Less);
        assert_ne!(collate("abc", "ABC"), Ordering::Equal);
    }

    #[test]
    fn accented_names_sort_with_their_base_letter() {
        let catalog = vec![
            channel("zoo", "Zoo TV", "kids"),
            channel("ecran", "Écran", "movies"),
            channel("eclipse", "Eclipse", "movies"),
            channel("arte", "Ärte", "movies"),
        ];
        let out = organize(
            &catalog,
            ALL_CATEGORY,
            "",
            &Favorites::new(),
            &RecentlyWatched::new(),
        );
        assert_eq!(ids(&out), vec!["arte", "eclipse", "ecran", "zoo"]);
    }

    #[test]
    fn accent_and_case_only_break_ties() {
        assert_eq!(collate("Ecran", "Écran"), Ordering::Less);
        assert_eq!(collate("écran", "Ecrans"), Ordering::Less);
        assert_eq!(collate("ecran", "Ecran"), Ordering::Greater);
        // Precomposed and decomposed forms share a base key.
        assert_eq!(base_key("E\u{301}cran"), base_key("\u{c9}cran"));
    }

    #[test]
    fn views_resolve_and_skip_missing_ids() {
        let catalog = crate::catalog::Catalog::builtin();
        let favorites: Favorites = ["history", "gone", "espn"].into_iter().collect();
        let view = favorites_view(&catalog, &favorites);
        assert_eq!(ids(&view), vec!["espn", "history"]);

        let mut recent = RecentlyWatched::new();
        recent.record("espn");
        recent.record("gone");
        recent.record("multishow");
        let view = recent_view(&catalog, &recent);
        assert_eq!(ids(&view), vec!["multishow", "espn"]);
    }
}
