//! Behavioural Archetype Classifier — the one module allowed to turn DISC
//! scores into display text.
//!
//! ARCHITECTURAL RULE: no handler, view, or export path may re-implement
//! archetype selection, thresholds, or narrative text. Live dashboards and
//! print/PDF snapshots both call `narrative::narrate`, which is pure and
//! deterministic, so the two surfaces cannot drift apart.

pub mod archetype;
pub mod narrative;
pub mod pronouns;
pub mod score;
pub mod text_bank;

pub use archetype::{classify, describe};
pub use narrative::{narrate, ArchetypeProfile};
pub use pronouns::PronounContext;
pub use score::DiscScore;
