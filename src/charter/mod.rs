pub mod charter;
pub mod group;
pub mod person;
pub mod seal;

pub use charter::{Charter, CharterBuilder};
pub use group::CharterGroup;
pub use person::PersonRef;
pub use seal::{Seal, SealDesc, SealLegend};

/// Empty strings passed for optional text fields count as absent.
pub(crate) fn opt_text(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Collect a list of text values, dropping empty entries.
pub(crate) fn text_list<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values
        .into_iter()
        .map(Into::into)
        .filter(|value| !value.is_empty())
        .collect()
}
