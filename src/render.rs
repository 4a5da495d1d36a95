//! Formatting of match results for the narration prompt.

use crate::catalog::Listing;

/// Fixed reply when nothing in the catalog fits the profile.
pub const NO_MATCHES: &str = "⚠️ Sorry, no internships found matching your skills/location.";

/// Format matches as a numbered list in catalog order, or the fixed
/// no-results line when there are none.
pub fn matches_text(matches: &[&Listing]) -> String {
    if matches.is_empty() {
        return NO_MATCHES.to_string();
    }

    let mut out = String::from("Based on your profile, these internships are available:\n\n");
    for (i, listing) in matches.iter().enumerate() {
        out.push_str(&format!(
            "{}. {} at {} ({})\n   🔗 Apply: {}\n\n",
            i + 1,
            listing.title,
            listing.company,
            listing.location,
            listing.link
        ));
    }
    out
}
