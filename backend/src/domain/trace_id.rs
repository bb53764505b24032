//! Request correlation identifier.
//!
//! The active `TraceId` lives in Tokio task-local storage for the duration of
//! a request, so errors built deep inside the service pick it up without it
//! being passed around. Work moved onto another task must be wrapped in
//! [`TraceId::scope`] again; task-locals are not inherited.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use tokio::task_local;
use uuid::Uuid;

/// Header used to exchange the trace identifier with clients.
pub const TRACE_ID_HEADER: &str = "trace-id";

task_local! {
    static ACTIVE: TraceId;
}

/// UUID identifying one request across logs, error bodies and headers.
///
/// # Examples
/// ```
/// use loanapp::TraceId;
///
/// let supplied = TraceId::resolve(Some("6f9619ff-8b86-d011-b42d-00c04fc964ff"));
/// assert_eq!(supplied.to_string(), "6f9619ff-8b86-d011-b42d-00c04fc964ff");
///
/// let fresh = TraceId::resolve(Some("not a uuid"));
/// assert_ne!(fresh.to_string(), "not a uuid");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceId(Uuid);

impl TraceId {
    /// A fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Reuse a caller-supplied identifier when it parses, otherwise mint one.
    #[must_use]
    pub fn resolve(supplied: Option<&str>) -> Self {
        supplied
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or_else(Self::generate)
    }

    /// The identifier of the request currently being handled, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        ACTIVE.try_with(|id| *id).ok()
    }

    /// Run `fut` with `trace_id` as the active identifier.
    pub async fn scope<Fut>(trace_id: Self, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        ACTIVE.scope(trace_id, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[tokio::test]
    async fn scope_sets_the_active_identifier() {
        let id = TraceId::generate();
        assert_eq!(TraceId::scope(id, async { TraceId::current() }).await, Some(id));
    }

    #[tokio::test]
    async fn nothing_is_active_outside_a_scope() {
        assert_eq!(TraceId::current(), None);
    }

    #[rstest]
    #[case(" 6f9619ff-8b86-d011-b42d-00c04fc964ff ")]
    #[case("6F9619FF-8B86-D011-B42D-00C04FC964FF")]
    fn resolve_keeps_supplied_uuids(#[case] supplied: &str) {
        let id = TraceId::resolve(Some(supplied));
        assert_eq!(id.to_string(), "6f9619ff-8b86-d011-b42d-00c04fc964ff");
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("loan-42"))]
    fn resolve_generates_when_supplied_value_is_unusable(#[case] supplied: Option<&str>) {
        let first = TraceId::resolve(supplied);
        let second = TraceId::resolve(supplied);
        assert_ne!(first, second);
    }
}
