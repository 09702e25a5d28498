use journey_core::model::{Difficulty, IconId};

/// Glyph drawn for a symbolic icon.
#[must_use]
pub fn icon_glyph(icon: IconId) -> &'static str {
    match icon {
        IconId::Brain => "🧠",
        IconId::PuzzlePiece => "🧩",
        IconId::StackSimple => "🗂️",
        IconId::Books => "📚",
        IconId::Users => "👥",
        IconId::CheckCircle => "✔",
        IconId::Star => "⭐",
        IconId::TrendUp => "📈",
        IconId::Target => "🎯",
        IconId::Path => "🧭",
        IconId::Trophy => "🏆",
        IconId::Sparkle => "✨",
        IconId::GraduationCap => "🎓",
    }
}

/// CSS class carrying the badge colours for a difficulty tier.
#[must_use]
pub fn difficulty_class(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Beginner => "badge difficulty-beginner",
        Difficulty::Intermediate => "badge difficulty-intermediate",
        Difficulty::Advanced => "badge difficulty-advanced",
    }
}
