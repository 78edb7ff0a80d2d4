//! Dependent Dropdown
//!
//! Keeps the SousTypeBien selector in step with the TypeBien selector:
//! clearing the parent resets the child to its placeholder, choosing a parent
//! fetches that parent's sous-types and rebuilds the child's options.
//!
//! Lookups are never aborted. Each one carries a sequence number so a response
//! that resolves after a newer change can be recognised; whether it is then
//! dropped or still applied is decided by [`StalePolicy`].

use std::cell::Cell;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use serde::Deserialize;

use crate::error::FormError;
use crate::models::{ChildOption, ChildOptionList, ParentSelection};

/// The dependent selector
pub trait ChildSelect {
    /// Replace every option with `placeholder` (empty value) followed by `options`
    fn replace_options(&self, placeholder: &str, options: &[ChildOption]) -> Result<(), FormError>;
}

/// Pending sous-type request; owns everything it needs
pub type SousTypeRequest = Pin<Box<dyn Future<Output = Result<ChildOptionList, FormError>>>>;

/// Where sous-types come from (the `/api/sous-types/{id}` endpoint in the browser)
pub trait SousTypeSource {
    /// Start the request now; the returned future only waits for it
    fn fetch(&self, parent: &ParentSelection) -> SousTypeRequest;
}

/// What to do with a response that resolves after a newer parent change
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StalePolicy {
    /// Only the most recently issued change may touch the child selector
    #[default]
    DiscardStale,
    /// Every response is applied; whichever resolves last wins
    LastResolvedWins,
}

/// Result of one lookup
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// Child selector rebuilt with this many fetched options (plus placeholder)
    Applied { options: usize },
    /// A newer change was issued first; the child selector was not touched
    Stale,
    /// Request or rebuild failed (superseded or not); child selector left as it was
    Failed(FormError),
}

/// Whether the feature was wired up on this page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attachment {
    Attached,
    NotAttached(MissingElement),
}

/// Selector id that was not found on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingElement(pub String);

impl fmt::Display for MissingElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} not found", self.0)
    }
}

/// Both selectors, or the first id that is missing (parent checked first)
pub fn require_pair<P, C>(
    parent: Option<P>,
    child: Option<C>,
    parent_id: &str,
    child_id: &str,
) -> Result<(P, C), MissingElement> {
    match (parent, child) {
        (Some(parent), Some(child)) => Ok((parent, child)),
        (None, _) => Err(MissingElement(parent_id.to_string())),
        (_, None) => Err(MissingElement(child_id.to_string())),
    }
}

struct Inner<C, S> {
    child: C,
    source: S,
    placeholder: String,
    policy: StalePolicy,
    /// Sequence number of the latest change (reset or lookup)
    latest: Cell<u64>,
}

/// Loader driving the child selector; cheap to clone into event handlers
pub struct DependentDropdown<C, S> {
    inner: Rc<Inner<C, S>>,
}

impl<C, S> Clone for DependentDropdown<C, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<C, S> DependentDropdown<C, S>
where
    C: ChildSelect + 'static,
    S: SousTypeSource + 'static,
{
    pub fn new(child: C, source: S, placeholder: impl Into<String>, policy: StalePolicy) -> Self {
        Self {
            inner: Rc::new(Inner {
                child,
                source,
                placeholder: placeholder.into(),
                policy,
                latest: Cell::new(0),
            }),
        }
    }

    pub fn policy(&self) -> StalePolicy {
        self.inner.policy
    }

    /// Handle a change of the parent selector.
    ///
    /// An empty selection resets the child before returning and yields `None`.
    /// Otherwise the returned future performs the lookup; the caller spawns it.
    pub fn on_parent_change(
        &self,
        selection: ParentSelection,
    ) -> Option<impl Future<Output = LookupOutcome> + 'static> {
        let ticket = self.next_ticket();

        if selection.is_empty() {
            if let Err(err) = self.inner.child.replace_options(&self.inner.placeholder, &[]) {
                log::error!("[DROPDOWN] Could not reset sous types: {err}");
            }
            return None;
        }

        let request = self.inner.source.fetch(&selection);
        let this = self.clone();
        Some(async move {
            let result = request.await;
            this.apply(ticket, &selection, result)
        })
    }

    fn next_ticket(&self) -> u64 {
        let ticket = self.inner.latest.get() + 1;
        self.inner.latest.set(ticket);
        ticket
    }

    fn is_stale(&self, ticket: u64) -> bool {
        self.inner.policy == StalePolicy::DiscardStale && ticket != self.inner.latest.get()
    }

    fn apply(
        &self,
        ticket: u64,
        selection: &ParentSelection,
        result: Result<ChildOptionList, FormError>,
    ) -> LookupOutcome {
        // failures are reported even when superseded; nothing is touched either way
        let options = match result {
            Ok(options) => options,
            Err(err) => {
                log::error!("[DROPDOWN] Error loading sous types for {selection}: {err}");
                return LookupOutcome::Failed(err);
            }
        };

        if self.is_stale(ticket) {
            log::debug!("[DROPDOWN] Ignoring sous types for {selection}: superseded");
            return LookupOutcome::Stale;
        }

        match self.inner.child.replace_options(&self.inner.placeholder, &options) {
            Ok(()) => LookupOutcome::Applied {
                options: options.len(),
            },
            Err(err) => {
                log::error!("[DROPDOWN] Could not fill sous types for {selection}: {err}");
                LookupOutcome::Failed(err)
            }
        }
    }
}
