//! Static narrative banks, keyed by dominant axis.
//!
//! All display text for strengths, work style, and motivators lives here as
//! data, not in page code. Templates carry pronoun tokens and are rendered
//! by `pronouns::fill` in a single pass. `None` selects the balanced bank
//! used when no axis clearly dominates.
//!
//! Bank arity is part of the contract: downstream card layouts assume
//! exactly 3 strengths, 4 motivators, and 3 work-style strengths, so the
//! arrays are fixed-size.

use crate::behavioural::score::Axis;

/// Title/body template pair for one strength card.
#[derive(Debug, Clone, Copy)]
pub struct StrengthTemplate {
    pub title: &'static str,
    pub body: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Strength cards
// ────────────────────────────────────────────────────────────────────────────

const DOMINANCE_STRENGTHS: [StrengthTemplate; 3] = [
    StrengthTemplate {
        title: "Drives results",
        body: "{Subject} set{s} ambitious targets and push{s_es} through obstacles that stall others.",
    },
    StrengthTemplate {
        title: "Decides under pressure",
        body: "{Subject} {is} comfortable making tough calls quickly, even with incomplete information.",
    },
    StrengthTemplate {
        title: "Takes ownership",
        body: "When something needs doing, {subject} step{s} up without waiting to be asked.",
    },
];

const INFLUENCE_STRENGTHS: [StrengthTemplate; 3] = [
    StrengthTemplate {
        title: "Connects with people",
        body: "{Subject} build{s} rapport fast and make{s} colleagues and clients feel heard.",
    },
    StrengthTemplate {
        title: "Communicates with energy",
        body: "{Subject} present{s} ideas with enthusiasm that gets others genuinely on board.",
    },
    StrengthTemplate {
        title: "Lifts team morale",
        body: "{Possessive} optimism is contagious; teams around {object} stay motivated through rough patches.",
    },
];

const STEADINESS_STRENGTHS: [StrengthTemplate; 3] = [
    StrengthTemplate {
        title: "Delivers consistently",
        body: "{Subject} {is} the person colleagues rely on to finish what {subject} start{s}, every time.",
    },
    StrengthTemplate {
        title: "Listens first",
        body: "{Subject} give{s} people room to speak and pick{s} up on concerns others miss.",
    },
    StrengthTemplate {
        title: "Keeps calm",
        body: "Under deadline pressure {subject} stay{s} composed and keep{s} the team grounded.",
    },
];

const CONSCIENTIOUSNESS_STRENGTHS: [StrengthTemplate; 3] = [
    StrengthTemplate {
        title: "Masters the details",
        body: "{Subject} catch{s_es} the edge cases and inconsistencies that slip past everyone else.",
    },
    StrengthTemplate {
        title: "Plans thoroughly",
        body: "{Subject} think{s} several steps ahead, so {possessive} work rarely needs rework.",
    },
    StrengthTemplate {
        title: "Holds a high bar",
        body: "{Subject} hold{s} {possessive} own output to exacting standards and raise{s} the quality around {object}.",
    },
];

const BALANCED_STRENGTHS: [StrengthTemplate; 3] = [
    StrengthTemplate {
        title: "Adapts to the situation",
        body: "{Subject} read{s} what a task needs and adjust{s} {possessive} approach accordingly.",
    },
    StrengthTemplate {
        title: "Bridges styles",
        body: "{Subject} work{s} as comfortably with big-picture thinkers as with detail-focused colleagues.",
    },
    StrengthTemplate {
        title: "Stays dependable",
        body: "{Subject} bring{s} a steady, even-handed presence to whatever team {subject} join{s}.",
    },
];

pub fn strengths(axis: Option<Axis>) -> &'static [StrengthTemplate; 3] {
    match axis {
        Some(Axis::Dominance) => &DOMINANCE_STRENGTHS,
        Some(Axis::Influence) => &INFLUENCE_STRENGTHS,
        Some(Axis::Steadiness) => &STEADINESS_STRENGTHS,
        Some(Axis::Conscientiousness) => &CONSCIENTIOUSNESS_STRENGTHS,
        None => &BALANCED_STRENGTHS,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Work style: communication and decision-making
// ────────────────────────────────────────────────────────────────────────────

/// (title, body) for the communication-style card.
pub fn communication(axis: Option<Axis>) -> (&'static str, &'static str) {
    match axis {
        Some(Axis::Dominance) => (
            "Direct and to the point",
            "{Subject} say{s} what {subject} mean{s} and prefer{s} short, decision-oriented conversations over long alignment meetings.",
        ),
        Some(Axis::Influence) => (
            "Warm and expressive",
            "{Subject} communicate{s} openly and persuasively, and {subject} {is} at {possessive} best talking things through with people face to face.",
        ),
        Some(Axis::Steadiness) => (
            "Patient and attentive",
            "{Subject} listen{s} more than {subject} talk{s}, ask{s} considerate questions, and make{s} space for quieter voices.",
        ),
        Some(Axis::Conscientiousness) => (
            "Precise and well-prepared",
            "{Subject} prefer{s} written, well-structured communication and back{s} {possessive} points with evidence.",
        ),
        None => (
            "Flexible and even-handed",
            "{Subject} match{s_es} {possessive} communication style to the audience, equally at home in quick chats and structured reviews.",
        ),
    }
}

/// (title, body) for the decision-making card.
pub fn decision_making(axis: Option<Axis>) -> (&'static str, &'static str) {
    match axis {
        Some(Axis::Dominance) => (
            "Fast and decisive",
            "{Subject} weigh{s} the options quickly, commit{s}, and course-correct{s} later rather than waiting for certainty.",
        ),
        Some(Axis::Influence) => (
            "Collaborative and optimistic",
            "{Subject} like{s} to talk decisions through and {is} energized by finding an option the whole group can get behind.",
        ),
        Some(Axis::Steadiness) => (
            "Considered and consensus-minded",
            "{Subject} prefer{s} to sleep on big calls, gather the team's view, and change course gradually rather than abruptly.",
        ),
        Some(Axis::Conscientiousness) => (
            "Evidence-driven",
            "{Subject} gather{s} the data first; {possessive} decisions are deliberate, documented, and rarely reversed.",
        ),
        None => (
            "Balanced and pragmatic",
            "{Subject} size{s} each decision on its own terms, moving fast when stakes are low and carefully when they are not.",
        ),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Career motivators and work-style strengths
// ────────────────────────────────────────────────────────────────────────────

pub fn motivators(axis: Option<Axis>) -> &'static [&'static str; 4] {
    match axis {
        Some(Axis::Dominance) => &[
            "Ownership of ambitious, high-visibility goals",
            "Autonomy to decide how the work gets done",
            "Competitive environments that keep score",
            "Rapid advancement tied to results",
        ],
        Some(Axis::Influence) => &[
            "Working closely with energizing people",
            "Recognition for ideas and contributions",
            "Variety and new faces over routine",
            "A culture that celebrates wins together",
        ],
        Some(Axis::Steadiness) => &[
            "Stable teams with long-term relationships",
            "Clear expectations and predictable priorities",
            "Time to do the job properly",
            "A manager who values loyalty and consistency",
        ],
        Some(Axis::Conscientiousness) => &[
            "Problems that reward deep expertise",
            "Quality standards taken seriously",
            "Well-defined processes and clean handoffs",
            "Time and space for focused work",
        ],
        None => &[
            "Varied work that uses a broad skill set",
            "Teams that value flexibility",
            "A healthy balance of pace and polish",
            "Growth across disciplines, not just one track",
        ],
    }
}

pub fn work_style_strengths(axis: Option<Axis>) -> &'static [&'static str; 3] {
    match axis {
        Some(Axis::Dominance) => &[
            "Thrives under pressure and tight deadlines",
            "Comfortable with conflict and hard conversations",
            "Keeps momentum when direction is ambiguous",
        ],
        Some(Axis::Influence) => &[
            "Natural presenter and relationship-builder",
            "Quickly integrates into new teams",
            "Turns setbacks into rallying points",
        ],
        Some(Axis::Steadiness) => &[
            "Reliable through long, sustained projects",
            "De-escalates tension within teams",
            "Maintains quality when priorities churn",
        ],
        Some(Axis::Conscientiousness) => &[
            "Produces accurate work with little oversight",
            "Strong documentation and process discipline",
            "Spots risks before they become incidents",
        ],
        None => &[
            "Moves comfortably between roles and contexts",
            "Keeps an even keel in changing conditions",
            "Complements any dominant team style",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_axis_has_three_strengths() {
        for axis in Axis::ALL {
            assert_eq!(strengths(Some(axis)).len(), 3);
        }
        assert_eq!(strengths(None).len(), 3);
    }

    #[test]
    fn test_every_axis_has_four_motivators() {
        for axis in Axis::ALL {
            assert_eq!(motivators(Some(axis)).len(), 4);
        }
        assert_eq!(motivators(None).len(), 4);
    }

    #[test]
    fn test_no_bank_entry_is_empty() {
        let axes = [None, Some(Axis::Dominance), Some(Axis::Influence),
                    Some(Axis::Steadiness), Some(Axis::Conscientiousness)];
        for axis in axes {
            for s in strengths(axis) {
                assert!(!s.title.is_empty());
                assert!(!s.body.is_empty());
            }
            let (ct, cb) = communication(axis);
            let (dt, db) = decision_making(axis);
            assert!(!ct.is_empty() && !cb.is_empty());
            assert!(!dt.is_empty() && !db.is_empty());
            for m in motivators(axis) {
                assert!(!m.is_empty());
            }
            for w in work_style_strengths(axis) {
                assert!(!w.is_empty());
            }
        }
    }
}
