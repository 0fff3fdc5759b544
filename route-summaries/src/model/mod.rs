pub mod catalog;
pub mod direction;
mod negative_load_policy;
pub mod route;
pub mod stop;

pub use catalog::RidershipCatalog;
pub use direction::Direction;
pub use negative_load_policy::NegativeLoadPolicy;
pub use route::Route;
pub use stop::{Stop, StopObservation};

/// report label of the form "<descriptor> <direction code>", truncated to
/// `width` characters. the direction code is always kept whole; the
/// descriptor gives up the space.
pub(crate) fn truncated_label(descriptor: &str, direction: Direction, width: usize) -> String {
    let code = direction.code();
    let keep = width.saturating_sub(code.len() + 1);
    let head: String = descriptor.chars().take(keep).collect();
    format!("{} {}", head, code)
}
