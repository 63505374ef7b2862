//! Pure catalog query functions: filtering, sorting, related-item ranking.
//!
//! All functions are side-effect free and operate on borrowed slices,
//! returning fresh vectors. Filters are AND-combined when present, with one
//! exception: the `tags` filter matches an item sharing AT LEAST ONE tag
//! with the filter list. Sorts are stable, so ties (and the no-sort case)
//! preserve the snapshot's insertion order.

use suiteprompt_core::item::{FilterOptions, Prompt, Skill, SortBy};

/// Default number of related items returned by the API layer.
pub const DEFAULT_RELATED_LIMIT: usize = 6;

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Case-insensitive substring match against title, description, or any tag.
fn matches_search(title: &str, description: &str, tags: &[String], search: &str) -> bool {
    let needle = search.to_lowercase();
    title.to_lowercase().contains(&needle)
        || description.to_lowercase().contains(&needle)
        || tags.iter().any(|t| t.to_lowercase().contains(&needle))
}

/// Whether the item's tags intersect the filter's tag list.
fn shares_any_tag(item_tags: &[String], filter_tags: &[String]) -> bool {
    filter_tags.iter().any(|t| item_tags.contains(t))
}

/// Count of tags the candidate shares with the seed.
fn shared_tag_count(candidate: &[String], seed: &[String]) -> usize {
    candidate.iter().filter(|t| seed.contains(t)).count()
}

/// Query prompts: apply every present filter, then the sort policy.
pub fn query_prompts(items: &[Prompt], filters: &FilterOptions) -> Vec<Prompt> {
    let mut prompts: Vec<Prompt> = items
        .iter()
        .filter(|p| filters.format.map_or(true, |f| p.format == f))
        .filter(|p| {
            filters
                .business_area
                .as_ref()
                .map_or(true, |area| &p.business_area == area)
        })
        .filter(|p| {
            filters
                .target_platform
                .map_or(true, |platform| p.target_platform == Some(platform))
        })
        .filter(|p| {
            filters.search.as_ref().map_or(true, |search| {
                matches_search(&p.title, &p.description, &p.tags, search)
            })
        })
        .filter(|p| {
            filters
                .min_rating
                .map_or(true, |min| p.rating.average >= min)
        })
        .filter(|p| {
            filters
                .tags
                .as_ref()
                .map_or(true, |tags| tags.is_empty() || shares_any_tag(&p.tags, tags))
        })
        .cloned()
        .collect();

    if let Some(sort_by) = filters.sort_by {
        sort_prompts(&mut prompts, sort_by);
    }

    prompts
}

/// Query skills: same semantics as [`query_prompts`], minus the format and
/// target-platform filters (skills have neither).
pub fn query_skills(items: &[Skill], filters: &FilterOptions) -> Vec<Skill> {
    let mut skills: Vec<Skill> = items
        .iter()
        .filter(|s| {
            filters
                .business_area
                .as_ref()
                .map_or(true, |area| &s.business_area == area)
        })
        .filter(|s| {
            filters.search.as_ref().map_or(true, |search| {
                matches_search(&s.title, &s.description, &s.tags, search)
            })
        })
        .filter(|s| {
            filters
                .min_rating
                .map_or(true, |min| s.rating.average >= min)
        })
        .filter(|s| {
            filters
                .tags
                .as_ref()
                .map_or(true, |tags| tags.is_empty() || shares_any_tag(&s.tags, tags))
        })
        .cloned()
        .collect();

    if let Some(sort_by) = filters.sort_by {
        sort_skills(&mut skills, sort_by);
    }

    skills
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

fn sort_prompts(prompts: &mut [Prompt], sort_by: SortBy) {
    match sort_by {
        // Popularity and downloads are intentionally the same ordering.
        SortBy::Popularity | SortBy::Downloads => {
            prompts.sort_by(|a, b| b.downloads.cmp(&a.downloads));
        }
        SortBy::Rating => {
            prompts.sort_by(|a, b| b.rating.average.total_cmp(&a.rating.average));
        }
        SortBy::Newest => {
            prompts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
    }
}

fn sort_skills(skills: &mut [Skill], sort_by: SortBy) {
    match sort_by {
        SortBy::Popularity | SortBy::Downloads => {
            skills.sort_by(|a, b| b.downloads.cmp(&a.downloads));
        }
        SortBy::Rating => {
            skills.sort_by(|a, b| b.rating.average.total_cmp(&a.rating.average));
        }
        SortBy::Newest => {
            skills.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
    }
}

// ---------------------------------------------------------------------------
// Related items
// ---------------------------------------------------------------------------

/// Prompts related to `seed`: any other prompt sharing a tag, business
/// area, format, or author, ranked by shared-tag count then downloads.
pub fn related_prompts(items: &[Prompt], seed: &Prompt, limit: usize) -> Vec<Prompt> {
    let mut related: Vec<Prompt> = items
        .iter()
        .filter(|p| p.id != seed.id)
        .filter(|p| {
            shared_tag_count(&p.tags, &seed.tags) > 0
                || p.business_area == seed.business_area
                || p.format == seed.format
                || p.author.id == seed.author.id
        })
        .cloned()
        .collect();

    related.sort_by(|a, b| {
        let a_shared = shared_tag_count(&a.tags, &seed.tags);
        let b_shared = shared_tag_count(&b.tags, &seed.tags);
        b_shared
            .cmp(&a_shared)
            .then_with(|| b.downloads.cmp(&a.downloads))
    });
    related.truncate(limit);
    related
}

/// Skills related to `seed`: any other skill sharing a tag, business area,
/// or author, ranked by shared-tag count then downloads.
pub fn related_skills(items: &[Skill], seed: &Skill, limit: usize) -> Vec<Skill> {
    let mut related: Vec<Skill> = items
        .iter()
        .filter(|s| s.id != seed.id)
        .filter(|s| {
            shared_tag_count(&s.tags, &seed.tags) > 0
                || s.business_area == seed.business_area
                || s.author.id == seed.author.id
        })
        .cloned()
        .collect();

    related.sort_by(|a, b| {
        let a_shared = shared_tag_count(&a.tags, &seed.tags);
        let b_shared = shared_tag_count(&b.tags, &seed.tags);
        b_shared
            .cmp(&a_shared)
            .then_with(|| b.downloads.cmp(&a.downloads))
    });
    related.truncate(limit);
    related
}

// ---------------------------------------------------------------------------
// Business areas
// ---------------------------------------------------------------------------

/// Sorted, de-duplicated business areas from an item iterator.
pub fn business_areas<'a>(areas: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut unique: Vec<String> = areas.map(|a| a.to_string()).collect();
    unique.sort();
    unique.dedup();
    unique
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
