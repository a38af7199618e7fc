// SPDX-License-Identifier: MPL-2.0

use itertools::Itertools as _;

use super::schema::Named;
use crate::error::{ResolutionError, ResourceKind};

/// Finds the id of the single candidate whose name is exactly `name`.
///
/// The listing endpoints filter by substring (and sometimes not at all), so the
/// candidates may contain near-misses like "Training (old)".  Only exact,
/// case-sensitive matches count.  No match, or more than one, is an error.
pub fn resolve<'a, I>(
    kind: ResourceKind,
    name: &str,
    candidates: I,
) -> Result<String, ResolutionError>
where
    I: IntoIterator<Item = &'a Named>,
{
    candidates
        .into_iter()
        .filter(|candidate| candidate.name == name)
        .exactly_one()
        .map(|candidate| candidate.id.clone())
        .map_err(|matches| match matches.count() {
            0 => ResolutionError::Missing {
                kind,
                name: name.to_owned(),
            },
            count => ResolutionError::Ambiguous {
                kind,
                name: name.to_owned(),
                count,
            },
        })
}
