use services::{CodeTrainerGrade, QuizGrade};

pub const GREETINGS: &[&str] = &[
    "Ah, another brave soul enters the Lexicon...",
    "Oh great, YOU again. Ready to embarrass yourself?",
    "Welcome, mortal. The ancient knowledge awaits your fumbling attempts.",
    "So you think you can code? Let's test that theory, shall we?",
    "The Lexicon welcomes you... reluctantly.",
    "Another day, another developer thinking they know it all.",
    "Enter, if you dare. The code awaits no one.",
    "Behold! A wild programmer appears. Let's see what you've got.",
];

#[must_use]
pub fn quiz_verdict(grade: QuizGrade) -> &'static str {
    match grade {
        QuizGrade::Excellent => "Impressive... I suppose even a broken clock is right twice a day.",
        QuizGrade::Decent => "Not terrible. You might actually learn something yet.",
        QuizGrade::Mediocre => "Mediocre at best. I expected nothing and I'm still disappointed.",
        QuizGrade::Poor => "Pathetic. Did you even try? Perhaps coding isn't for you.",
    }
}

#[must_use]
pub fn code_trainer_verdict(grade: CodeTrainerGrade) -> &'static str {
    match grade {
        CodeTrainerGrade::HardmodeFailed => "Failed in hardmode. The shame will follow you forever.",
        CodeTrainerGrade::Impressive => "Impressive score. Don't let it go to your head.",
        CodeTrainerGrade::Acceptable => "Acceptable. Room for improvement... lots of room.",
        CodeTrainerGrade::Weak => "I've seen better. Much, much better.",
    }
}

#[must_use]
pub fn hardmode_reaction(enabled: bool) -> &'static str {
    if enabled {
        "Hardmode activated. No pressure... actually, lots of pressure."
    } else {
        "Playing it safe, I see. Typical."
    }
}
