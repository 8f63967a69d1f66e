//! Canonical cache-key construction.
//!
//! Every builder here is a pure function: structurally equal inputs produce
//! byte-identical strings, and any change to a parameter changes the key. Variable-length
//! inputs are comma-joined in caller order; two role lists with the same elements in a
//! different order are distinct keys. That costs an extra population, not correctness,
//! since the lookup result is order-independent either way.

use crate::types::{ActiveFilter, FilterCriterion, ResourceQuery};

const WITH_PARENTS_TAG: &str = "withParents";

/// Marker for an absent year bound; the wire key has always carried this literal.
const ABSENT_BOUND: &str = "undefined";

/// Key for a resource lookup, upper-cased so equivalent spellings of the type or role
/// names collapse into one entry:
///
/// `"STORE.ACTIVE.WITHPARENTS:[ROLE1,ROLE2]:[VAL1,VAL2]"`
pub fn resource_key(
    resource_type: &str,
    filter: ActiveFilter,
    load_parents: bool,
    roles: &[String],
    criteria: &[FilterCriterion],
) -> String {
    let parents = if load_parents { WITH_PARENTS_TAG } else { "" };
    let criteria = criteria.iter().map(|c| c.criteria.as_str()).collect::<Vec<_>>().join(",");
    format!(
        "{resource_type}.{filter}.{parents}:[{roles}]:[{criteria}]",
        roles = roles.join(","),
    )
    .to_uppercase()
}

/// [`resource_key`] over an assembled query.
pub fn resource_query_key(query: &ResourceQuery) -> String {
    resource_key(
        &query.resource_type,
        query.filter,
        query.load_parents,
        &query.roles,
        &query.criteria,
    )
}

/// Key for a vehicle model lookup: `"{makeId}.{yearStart}.{yearEnd}"`, with the literal
/// `undefined` standing in for an open year bound.
pub fn vehicle_make_key(make_id: &str, year_start: Option<u16>, year_end: Option<u16>) -> String {
    format!("{make_id}.{}.{}", year_part(year_start), year_part(year_end))
}

/// Key for a service category lookup.
pub fn service_category_key(filter: ActiveFilter) -> String {
    format!("CATEGORY.{filter}")
}

fn year_part(year: Option<u16>) -> String {
    year.map_or_else(|| ABSENT_BOUND.to_string(), |y| y.to_string())
}

#[cfg(test)]
mod test {
    use super::*;

    fn roles(names: &[&str]) -> Vec<String> {
        names.iter().map(|r| r.to_string()).collect()
    }

    #[test]
    fn resource_key_shape() {
        let key = resource_key(
            "store",
            ActiveFilter::Active,
            true,
            &roles(&["ROLE1"]),
            &[FilterCriterion::new("VAL")],
        );
        assert_eq!(key, "STORE.ACTIVE.WITHPARENTS:[ROLE1]:[VAL]");
    }

    #[test]
    fn resource_key_without_parents_or_criteria() {
        let key = resource_key("region", ActiveFilter::All, false, &roles(&["A", "B"]), &[]);
        assert_eq!(key, "REGION.ALL.:[A,B]:[]");
    }

    #[test]
    fn resource_key_is_case_insensitive() {
        let lower = resource_key("store", ActiveFilter::Active, false, &roles(&["admin"]), &[]);
        let upper = resource_key("STORE", ActiveFilter::Active, false, &roles(&["ADMIN"]), &[]);
        assert_eq!(lower, upper);
    }

    #[test]
    fn resource_key_is_deterministic() {
        let build = || {
            resource_key(
                "offer",
                ActiveFilter::Inactive,
                true,
                &roles(&["R2", "R1"]),
                &[FilterCriterion::new("C1"), FilterCriterion::new("C2")],
            )
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn every_parameter_is_significant() {
        let base = || ("store", ActiveFilter::Active, false, roles(&["R1"]), vec![FilterCriterion::new("C")]);

        let (t, f, p, r, c) = base();
        let reference = resource_key(t, f, p, &r, &c);

        let (_, f, p, r, c) = base();
        assert_ne!(resource_key("region", f, p, &r, &c), reference);

        let (t, _, p, r, c) = base();
        assert_ne!(resource_key(t, ActiveFilter::All, p, &r, &c), reference);

        let (t, f, _, r, c) = base();
        assert_ne!(resource_key(t, f, true, &r, &c), reference);

        let (t, f, p, _, c) = base();
        assert_ne!(resource_key(t, f, p, &roles(&["R1", "R2"]), &c), reference);

        let (t, f, p, r, _) = base();
        assert_ne!(resource_key(t, f, p, &r, &[]), reference);
    }

    #[test]
    fn role_order_is_significant() {
        // Known caveat of the original key construction; kept as-is.
        let ab = resource_key("store", ActiveFilter::Active, false, &roles(&["A", "B"]), &[]);
        let ba = resource_key("store", ActiveFilter::Active, false, &roles(&["B", "A"]), &[]);
        assert_ne!(ab, ba);
    }

    #[test]
    fn vehicle_key_substitutes_absent_bounds() {
        assert_eq!(vehicle_make_key("M100", None, None), "M100.undefined.undefined");
        assert_eq!(vehicle_make_key("M100", Some(1999), None), "M100.1999.undefined");
        assert_eq!(vehicle_make_key("M100", Some(1999), Some(2024)), "M100.1999.2024");
    }

    #[test]
    fn service_category_key_tracks_filter() {
        assert_eq!(service_category_key(ActiveFilter::Active), "CATEGORY.ACTIVE");
        assert_ne!(
            service_category_key(ActiveFilter::Active),
            service_category_key(ActiveFilter::All)
        );
    }
}
