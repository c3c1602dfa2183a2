//! Built-in code-training languages and their regex validators.

use learn_core::model::{
    CodeExercise, ProgrammingLanguage, ValidationResult, Validator, normalize_whitespace,
};
use regex::Regex;

/// What a [`RegexValidator`] matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// The submission with its ends trimmed; line breaks are significant.
    Trimmed,
    /// Every whitespace run collapsed to one space.
    Normalized,
}

/// Accepts a submission when `pattern` matches anywhere in it.
#[derive(Debug, Clone)]
pub struct RegexValidator {
    pattern: Regex,
    scope: Scope,
    hint: &'static str,
}

impl RegexValidator {
    /// # Errors
    ///
    /// Returns `regex::Error` if `pattern` does not compile.
    pub fn new(pattern: &str, scope: Scope, hint: &'static str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            scope,
            hint,
        })
    }

    fn subject(&self, code: &str) -> String {
        match self.scope {
            Scope::Trimmed => code.trim().to_owned(),
            Scope::Normalized => normalize_whitespace(code),
        }
    }
}

impl Validator for RegexValidator {
    fn validate(&self, code: &str) -> ValidationResult {
        if self.pattern.is_match(&self.subject(code)) {
            ValidationResult::correct()
        } else {
            ValidationResult::incorrect(self.hint)
        }
    }
}

/// `foreach` drill with graded hints for the usual slips.
fn foreach_validator() -> Result<impl Validator, regex::Error> {
    let pattern = Regex::new(r"foreach\s*\(\s*var\s+\w+\s+in\s+\w+\s*\)")?;
    Ok(move |code: &str| {
        let normalized = normalize_whitespace(code);
        if pattern.is_match(&normalized) {
            return if code.contains('{') && code.contains('}') {
                ValidationResult::correct().with_feedback("Well done! You included the curly braces too.")
            } else {
                ValidationResult::correct()
                    .with_feedback("Correct! Tip: add the curly braces, even for one-liners.")
            };
        }
        let hint = if !normalized.contains("foreach") {
            "Don't forget the 'foreach' keyword."
        } else if !normalized.contains("var") {
            "Use 'var' to declare the loop variable."
        } else if !normalized.contains("in") {
            "Don't forget 'in' between the variable and the collection."
        } else {
            "The syntax isn't quite right. Check the parentheses and structure."
        };
        ValidationResult::incorrect(hint)
    })
}

fn exercise(
    name: &str,
    description: &str,
    correct_example: &str,
    pattern: &str,
    scope: Scope,
    hint: &'static str,
) -> Result<CodeExercise, regex::Error> {
    Ok(CodeExercise::new(
        name,
        description,
        correct_example,
        RegexValidator::new(pattern, scope, hint)?,
    ))
}

const COUNTING_FOR_HINT: &str =
    "Remember: initialization (int i = 0), condition (i < 10) and increment (i++).";
const IF_HINT: &str = "Syntax: if (variable > 5)";
const IF_PATTERN: &str = r"if\s*\(\s*\w+\s*>\s*5\s*\)";
const IF_DESCRIPTION: &str = "Write an if statement that checks whether a variable 'x' is greater than 5.";
const IF_EXAMPLE: &str = "if (x > 5)\n{\n    // code here\n}";
const COUNTING_FOR_DESCRIPTION: &str = "Write a for loop that counts from 0 to 9.";
const COUNTING_FOR_EXAMPLE: &str = "for (int i = 0; i < 10; i++)\n{\n    // code here\n}";

fn csharp() -> Result<ProgrammingLanguage, regex::Error> {
    Ok(ProgrammingLanguage::new(
        "C#",
        vec![
            CodeExercise::new(
                "Foreach Loop",
                "Write a foreach loop that iterates over a list with any name.",
                "foreach (var item in myList)\n{\n    // code here\n}",
                foreach_validator()?,
            ),
            exercise(
                "For Loop",
                COUNTING_FOR_DESCRIPTION,
                COUNTING_FOR_EXAMPLE,
                r"for\s*\(\s*(int|var)\s+\w+\s*=\s*0\s*;\s*\w+\s*<\s*10\s*;\s*\w+\+\+\s*\)",
                Scope::Normalized,
                COUNTING_FOR_HINT,
            )?,
            exercise("If Statement", IF_DESCRIPTION, IF_EXAMPLE, IF_PATTERN, Scope::Normalized, IF_HINT)?,
        ],
    ))
}

fn cpp() -> Result<ProgrammingLanguage, regex::Error> {
    Ok(ProgrammingLanguage::new(
        "C++",
        vec![
            exercise(
                "For Loop",
                COUNTING_FOR_DESCRIPTION,
                COUNTING_FOR_EXAMPLE,
                r"for\s*\(\s*int\s+\w+\s*=\s*0\s*;\s*\w+\s*<\s*10\s*;\s*\w+\+\+\s*\)",
                Scope::Normalized,
                COUNTING_FOR_HINT,
            )?,
            exercise(
                "Range-Based For Loop",
                "Write a range-based for loop that iterates over a vector.",
                "for (auto item : myVector)\n{\n    // code here\n}",
                r"for\s*\(\s*(auto|int|const\s+auto)\s+\w+\s*:\s*\w+\s*\)",
                Scope::Normalized,
                "Syntax: for (auto item : container)",
            )?,
            exercise("If Statement", IF_DESCRIPTION, IF_EXAMPLE, IF_PATTERN, Scope::Normalized, IF_HINT)?,
            exercise(
                "Pointer Declaration",
                "Declare an int pointer that points to a variable 'x'.",
                "int* ptr = &x;",
                r"int\s*\*\s*\w+\s*=\s*&\s*\w+",
                Scope::Normalized,
                "Syntax: int* ptr = &variable;",
            )?,
        ],
    ))
}

fn javascript() -> Result<ProgrammingLanguage, regex::Error> {
    Ok(ProgrammingLanguage::new(
        "JavaScript",
        vec![
            exercise(
                "forEach Method",
                "Write a forEach call that iterates over an array.",
                "myArray.forEach(item => {\n    // code here\n});",
                r"\w+\.forEach\s*\(\s*\w+\s*=>",
                Scope::Normalized,
                "Syntax: array.forEach(item => { ... });",
            )?,
            exercise(
                "Arrow Function",
                "Write an arrow function that takes a parameter and returns it times 2.",
                "const double = x => x * 2;",
                r"(const|let|var)\s+\w+\s*=\s*\w+\s*=>\s*\w+\s*\*\s*2",
                Scope::Normalized,
                "Syntax: const name = x => x * 2;",
            )?,
        ],
    ))
}

fn python() -> Result<ProgrammingLanguage, regex::Error> {
    Ok(ProgrammingLanguage::new(
        "Python",
        vec![
            exercise(
                "For Loop",
                "Write a for loop that iterates over a list.",
                "for item in my_list:\n    # code here",
                r"for\s+\w+\s+in\s+\w+:",
                Scope::Trimmed,
                "Syntax: for item in list:",
            )?,
            exercise(
                "List Comprehension",
                "Write a list comprehension that creates a list of squares from 0-9.",
                "squares = [x**2 for x in range(10)]",
                r"\w+\s*=\s*\[\s*\w+\*\*2\s+for\s+\w+\s+in\s+range\s*\(\s*10\s*\)\s*\]",
                Scope::Normalized,
                "Syntax: [x**2 for x in range(10)]",
            )?,
        ],
    ))
}

/// Every built-in language, in menu order.
///
/// # Errors
///
/// Returns `regex::Error` if a validator pattern does not compile.
pub fn languages() -> Result<Vec<ProgrammingLanguage>, regex::Error> {
    Ok(vec![csharp()?, cpp()?, javascript()?, python()?])
}
