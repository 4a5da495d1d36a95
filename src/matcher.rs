//! Profile-to-catalog matching.

use crate::catalog::{Catalog, Listing};
use crate::store::UserProfile;

/// Listings relevant to a profile.
///
/// A listing qualifies if the profile's non-empty location occurs
/// case-insensitively as a substring of the listing's location, or if any
/// profile skill equals any listing skill case-insensitively. Catalog order
/// is preserved; an empty result is a valid outcome, not an error.
pub fn matching_listings<'a>(profile: &UserProfile, catalog: &'a Catalog) -> Vec<&'a Listing> {
    let location = profile.location.to_lowercase();
    let skills: Vec<String> = profile.skills.iter().map(|s| s.to_lowercase()).collect();

    catalog
        .listings()
        .iter()
        .filter(|listing| {
            let by_location =
                !location.is_empty() && listing.location.to_lowercase().contains(&location);
            let by_skill = listing
                .skills
                .iter()
                .any(|ls| skills.contains(&ls.to_lowercase()));
            by_location || by_skill
        })
        .collect()
}
