use crate::models::{eq_ignore_case, Condition, SchemeConditions, UserProfile};

/// Find the first declared condition the profile fails
///
/// Conditions are checked in a fixed order and evaluation stops at the
/// first failure. Returns `None` when the profile satisfies every declared
/// condition, including the case where none are declared.
pub fn first_failed_condition(
    profile: &UserProfile,
    conditions: &SchemeConditions,
) -> Option<Condition> {
    // Age range (inclusive)
    if let Some(min_age) = conditions.min_age {
        if profile.age < min_age {
            return Some(Condition::MinAge);
        }
    }
    if let Some(max_age) = conditions.max_age {
        if profile.age > max_age {
            return Some(Condition::MaxAge);
        }
    }

    // Income ceiling (inclusive)
    if let Some(max_income) = conditions.max_income {
        if profile.income > max_income {
            return Some(Condition::MaxIncome);
        }
    }

    if let Some(gender) = &conditions.gender {
        if !eq_ignore_case(gender, &profile.gender) {
            return Some(Condition::Gender);
        }
    }

    if let Some(state) = &conditions.state {
        if !eq_ignore_case(state, &profile.state) {
            return Some(Condition::State);
        }
    }

    if let Some(min_disability) = conditions.min_disability {
        if profile.disability_percent < min_disability {
            return Some(Condition::MinDisability);
        }
    }

    if let Some(occupation) = &conditions.occupation {
        if !occupation.accepts(&profile.occupation) {
            return Some(Condition::Occupation);
        }
    }

    None
}
