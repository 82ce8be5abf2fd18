use crate::models::{SchemeRecord, UserProfile};
use crate::core::filters::first_failed_condition;

/// Result of the matching process
///
/// Holds references into the scanned catalog, in catalog order.
#[derive(Debug)]
pub struct MatchResult<'a> {
    pub schemes: Vec<&'a SchemeRecord>,
    pub total_schemes: usize,
}

impl<'a> MatchResult<'a> {
    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    /// Clone the matched records out of the catalog
    pub fn to_owned_schemes(&self) -> Vec<SchemeRecord> {
        self.schemes.iter().map(|s| (*s).clone()).collect()
    }
}

/// Eligibility matcher - a single pass over the catalog
///
/// Every scheme whose declared conditions all hold for the profile is kept;
/// the catalog is never reordered or modified.
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher;

impl Matcher {
    pub fn new() -> Self {
        Self
    }

    /// Find the schemes a profile is eligible for
    ///
    /// # Arguments
    /// * `profile` - The citizen's demographic profile
    /// * `schemes` - The scheme catalog, in display order
    ///
    /// # Returns
    /// MatchResult with the eligible schemes in catalog order
    pub fn find_schemes<'a>(
        &self,
        profile: &UserProfile,
        schemes: &'a [SchemeRecord],
    ) -> MatchResult<'a> {
        let matched: Vec<&SchemeRecord> = schemes
            .iter()
            .filter(|scheme| match first_failed_condition(profile, &scheme.conditions) {
                None => true,
                Some(condition) => {
                    tracing::trace!("Scheme '{}' rejected on {:?}", scheme.name, condition);
                    false
                }
            })
            .collect();

        MatchResult {
            schemes: matched,
            total_schemes: schemes.len(),
        }
    }

    /// Match several profiles against the same catalog
    pub fn find_schemes_batch<'a>(
        &self,
        profiles: &[UserProfile],
        schemes: &'a [SchemeRecord],
    ) -> Vec<MatchResult<'a>> {
        profiles
            .iter()
            .map(|profile| self.find_schemes(profile, schemes))
            .collect()
    }
}
