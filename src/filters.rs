use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::post::Post;

/// Owner colors, handed out by rank.
pub const OWNER_PALETTE: [&str; 6] = [
    "#F97316",
    "#0EA5E9",
    "#22C55E",
    "#A855F7",
    "#EF4444",
    "#EAB308",
];

/// Platforms offered by the grid. The list is fixed so the UI doesn't
/// reshuffle when a platform has no posts in the current page.
pub const PLATFORMS: [&str; 6] = [
    "Instagram",
    "TikTok",
    "Facebook",
    "LinkedIn",
    "YouTube",
    "X",
];

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct OwnerFacet {
    pub name: String,
    pub count: usize,
    pub color: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct FilterSet {
    pub clients: Vec<String>,
    pub projects: Vec<String>,
    pub brands: Vec<String>,
    pub platforms: Vec<String>,
    pub statuses: Vec<String>,
    pub owners: Vec<OwnerFacet>,
}

pub fn owner_color(rank: usize) -> &'static str {
    OWNER_PALETTE[rank % OWNER_PALETTE.len()]
}

pub fn build_filters(posts: &[Post]) -> FilterSet {
    let mut clients = BTreeSet::new();
    let mut projects = BTreeSet::new();
    let mut brands = BTreeSet::new();
    let mut statuses = BTreeSet::new();

    // Counts are kept in first-seen order so equal counts keep that order after the sort
    let mut owner_index: HashMap<&str, usize> = HashMap::new();
    let mut owner_counts: Vec<(&str, usize)> = vec![];

    for post in posts {
        clients.extend(post.client.as_deref());
        projects.extend(post.project.as_deref());
        brands.extend(post.brand.as_deref());
        if !post.status.is_empty() {
            statuses.insert(post.status.as_str());
        }

        if let Some(ref owner) = post.owner {
            match owner_index.get(owner.as_str()) {
                Some(&idx) => owner_counts[idx].1 += 1,
                None => {
                    owner_index.insert(owner.as_str(), owner_counts.len());
                    owner_counts.push((owner.as_str(), 1));
                }
            }
        }
    }

    // Most active owners first
    owner_counts.sort_by(|a, b| b.1.cmp(&a.1));
    let owners = owner_counts.into_iter()
        .enumerate()
        .map(|(rank, (name, count))| OwnerFacet {
            name: name.to_string(),
            count,
            color: owner_color(rank).to_string(),
        })
        .collect();

    let to_vec = |set: BTreeSet<&str>| set.into_iter().map(str::to_string).collect::<Vec<_>>();

    FilterSet {
        clients: to_vec(clients),
        projects: to_vec(projects),
        brands: to_vec(brands),
        platforms: PLATFORMS.iter().map(|p| p.to_string()).collect(),
        statuses: to_vec(statuses),
        owners,
    }
}

#[cfg(test)]
mod tests {
    use crate::notion::model::RawPage;
    use crate::post::normalize_post;
    use crate::test_data::sample_pages;

    use super::*;

    fn post_owned_by(owner: &str) -> Post {
        let mut post = normalize_post(&RawPage::default());
        post.owner = Some(owner.to_string());
        post
    }

    #[test]
    fn test_owner_ranking() {
        let posts: Vec<Post> = ["A", "A", "A", "B", "B", "C"].iter().map(|o| post_owned_by(o)).collect();
        let filters = build_filters(&posts);
        assert_eq!(filters.owners, vec![
            OwnerFacet { name: "A".to_string(), count: 3, color: OWNER_PALETTE[0].to_string() },
            OwnerFacet { name: "B".to_string(), count: 2, color: OWNER_PALETTE[1].to_string() },
            OwnerFacet { name: "C".to_string(), count: 1, color: OWNER_PALETTE[2].to_string() },
        ]);
    }

    #[test]
    fn test_owner_ties_keep_first_seen_order() {
        let posts: Vec<Post> = ["C", "B", "A", "B", "C", "A"].iter().map(|o| post_owned_by(o)).collect();
        let names: Vec<String> = build_filters(&posts).owners.into_iter().map(|o| o.name).collect();
        assert_eq!(names, ["C", "B", "A"]);
    }

    #[test]
    fn test_palette_wraps() {
        let posts: Vec<Post> = ["1", "2", "3", "4", "5", "6", "7"].iter().map(|o| post_owned_by(o)).collect();
        let owners = build_filters(&posts).owners;
        assert_eq!(owners.len(), 7);
        assert_eq!(owners[6].color, owners[0].color);
        assert_ne!(owners[5].color, owners[0].color);
    }

    #[test]
    fn test_facets_sorted_and_deduplicated() {
        let posts: Vec<Post> = sample_pages().iter().map(normalize_post).collect();
        let filters = build_filters(&posts);

        assert_eq!(filters.clients, ["Acme", "Zeta"]);
        assert_eq!(filters.projects, ["Campaign X"]);
        assert_eq!(filters.brands, ["Northwind"]);
        assert_eq!(filters.statuses, ["Draft"]);
        assert_eq!(filters.platforms, PLATFORMS);
        assert_eq!(filters.owners.iter().map(|o| (o.name.as_str(), o.count)).collect::<Vec<_>>(),
                   [("Ana", 2), ("Luis", 1)]);
    }

    #[test]
    fn test_empty_posts() {
        let filters = build_filters(&[]);
        assert!(filters.clients.is_empty());
        assert!(filters.owners.is_empty());
        assert_eq!(filters.platforms.len(), 6);
    }
}
