//! State container for the generic resource manager.
//!
//! One instance backs one admin page. The fetched list is the page's only
//! copy of the data; it is replaced wholesale on every successful fetch and
//! left intact when a fetch fails. The open form, the pending delete
//! confirmation, and the client-side filter/pagination are all part of the
//! same state so `update` can drive the whole page through one message enum.

use super::{FieldErrors, ManagedResource, ResourceDraft};
use crate::forms;

/// Rows shown per list page; filtering and pagination are client-side over
/// the fetched list.
pub const PAGE_SIZE: usize = 10;

pub struct ResourceManager<R: ManagedResource> {
    /// In-memory copy of the fetched list; mutated only by refetching.
    pub list: Vec<R>,
    /// True from mount until the first fetch resolves.
    pub loading: bool,
    /// The open create/edit form, if any.
    pub form: Option<FormState<R>>,
    /// Identifier awaiting delete confirmation.
    pub pending_delete: Option<u64>,
    /// True while a DELETE is outstanding; locks the confirm control.
    pub deleting: bool,
    pub filter: String,
    pub page: usize,
}

pub struct FormState<R: ManagedResource> {
    /// `Some(id)` when the draft was opened from an existing resource;
    /// decides between the create and update endpoints at submit time.
    pub origin: Option<u64>,
    pub draft: R::Draft,
    /// Submit-level error shown in the form footer.
    pub error: Option<String>,
    pub field_errors: FieldErrors,
    /// True while the submit request is outstanding; locks the save control.
    pub submitting: bool,
    /// Payload fingerprint captured when the form opened, for dirty checks.
    baseline: String,
}

impl<R: ManagedResource> FormState<R> {
    pub fn open(origin: Option<u64>, draft: R::Draft) -> Self {
        let baseline = forms::fingerprint(&draft.body());
        Self {
            origin,
            draft,
            error: None,
            field_errors: FieldErrors::new(),
            submitting: false,
            baseline,
        }
    }

    /// Whether the draft differs from what the form opened with.
    pub fn dirty(&self) -> bool {
        forms::fingerprint(&self.draft.body()) != self.baseline
    }
}

impl<R: ManagedResource> ResourceManager<R> {
    pub fn new() -> Self {
        Self {
            list: Vec::new(),
            loading: true,
            form: None,
            pending_delete: None,
            deleting: false,
            filter: String::new(),
            page: 0,
        }
    }

    /// The list as shown: filter applied, order preserved.
    pub fn filtered(&self) -> Vec<&R> {
        let needle = self.filter.trim().to_lowercase();
        self.list
            .iter()
            .filter(|resource| needle.is_empty() || resource.matches(&needle))
            .collect()
    }

    pub fn page_count(&self) -> usize {
        page_count(self.filtered().len())
    }
}

pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE).max(1)
}

/// Start/end indexes of one page over a filtered list of `total` rows.
pub fn page_bounds(total: usize, page: usize) -> (usize, usize) {
    let start = (page * PAGE_SIZE).min(total);
    let end = (start + PAGE_SIZE).min(total);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_bounds_clamp_to_total() {
        assert_eq!(page_bounds(0, 0), (0, 0));
        assert_eq!(page_bounds(3, 0), (0, 3));
        assert_eq!(page_bounds(25, 1), (10, 20));
        assert_eq!(page_bounds(25, 2), (20, 25));
        assert_eq!(page_bounds(25, 9), (25, 25));
    }

    #[test]
    fn page_count_never_zero() {
        assert_eq!(page_count(0), 1);
        assert_eq!(page_count(10), 1);
        assert_eq!(page_count(11), 2);
    }
}
