//! State-resolving element locator
//!
//! Some controls have no fixed identity: which accessibility id exists
//! depends on invisible application state (the angle-mode button is one of
//! `degButton`/`radButton`/`gradButton`, exactly one present at a time).
//! These are resolved by taking a single UI-tree snapshot and scanning an
//! ordered candidate set, rather than by a fixed lookup.

use tracing::debug;

use crate::session::CalculatorSession;
use crate::{Error, Result};

/// Check whether an accessibility id occurs in a serialized UI tree.
///
/// Ids are matched as whole attribute values: `sinButton` must not match
/// the `invsinButton` entry of a shifted flyout.
pub fn source_has_id(source: &str, automation_id: &str) -> bool {
    source.contains(&format!("\"{}\"", automation_id))
}

/// Resolve which of a mutually-exclusive candidate set is present in a
/// UI-tree snapshot.
///
/// The candidates are exclusive by contract: zero present means the view
/// is not the expected one (or the snapshot was taken mid-transition), and
/// more than one present means the application violated the protocol.
/// Both fail with [`Error::ElementNotFound`].
pub fn resolve_in_source<'a>(source: &str, candidates: &[&'a str]) -> Result<&'a str> {
    let present: Vec<&str> = candidates
        .iter()
        .copied()
        .filter(|id| source_has_id(source, id))
        .collect();

    match present.as_slice() {
        [only] => Ok(*only),
        [] => Err(Error::element_not_found(format!(
            "none of [{}] present in UI tree",
            candidates.join(", ")
        ))),
        _ => Err(Error::element_not_found(format!(
            "ambiguous UI state, [{}] simultaneously present",
            present.join(", ")
        ))),
    }
}

/// Take one UI-tree snapshot from the session and resolve the candidate
/// set against it.
pub async fn resolve_present<'a>(
    session: &CalculatorSession,
    candidates: &[&'a str],
) -> Result<&'a str> {
    let source = session.page_source().await?;
    let resolved = resolve_in_source(&source, candidates)?;
    debug!("Resolved state-dependent control: {}", resolved);
    Ok(resolved)
}
