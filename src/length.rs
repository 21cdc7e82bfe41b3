// Headline length helpers

/// Search snippets show roughly this many characters of a headline.
pub const IDEAL_MIN: usize = 50;
pub const IDEAL_MAX: usize = 60;

/// Count characters the way an editor would read them, ignoring surrounding whitespace.
pub fn char_count(text: &str) -> usize {
    text.trim().chars().count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthRating {
    Empty,
    Short,
    Ideal,
    Long,
}

impl LengthRating {
    pub const fn of(count: usize) -> Self {
        if count == 0 {
            Self::Empty
        } else if count < IDEAL_MIN {
            Self::Short
        } else if count <= IDEAL_MAX {
            Self::Ideal
        } else {
            Self::Long
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::Short => "short",
            Self::Ideal => "ideal",
            Self::Long => "long",
        }
    }
}
