//! Regular German verb conjugation and irregularity highlighting.
//!
//! Conjugation tables come from somewhere else (usually a language model), and the forms in them are compared against the
//! forms the verb would have if it were completely regular. Any part of an actual form that differs from its regular form gets
//! highlighted, so learners can see at a glance where a verb is irregular.

mod diff;
pub use diff::compute_highlight_ranges;

mod highlight_range;
pub use highlight_range::HighlightRange;

mod highlights;
pub use highlights::attach_highlights;
pub use highlights::clear_highlights;
pub use highlights::conjugable_infinitive;
pub use highlights::set_highlights;
pub use highlights::HighlightError;

mod person;
pub use person::*;

pub mod segments;
pub use segments::HighlightSegment;

mod table;
pub use table::*;

mod tense;
pub use tense::VerbTense;
pub use tense::ALL_TENSES;

mod verb_forms;
pub use verb_forms::*;
