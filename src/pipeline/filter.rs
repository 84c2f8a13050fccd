use crate::candidates::RankedCandidate;

/// Case-insensitive substring match against name, skill names or
/// certifications. An empty term matches everything.
pub fn matches_search(candidate: &RankedCandidate, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    let contains = |field: &str| field.to_lowercase().contains(&term);

    let c = &candidate.candidate;
    contains(c.name.as_str())
        || c.skills.iter().any(|s| contains(s.name.as_str()))
        || c.certifications.iter().any(|cert| contains(cert.as_str()))
}

/// Keep the candidates matching `term`, preserving their relative order.
pub fn filter_candidates<'a, I>(candidates: I, term: &str) -> Vec<&'a RankedCandidate>
where
    I: IntoIterator<Item = &'a RankedCandidate>,
{
    candidates
        .into_iter()
        .filter(|c| matches_search(c, term))
        .collect()
}
