//! Recognition of convention-named companion methods.
//!
//! A method named `hideFirstName` is a visibility companion for member
//! `firstName`; `default0PlaceOrder` is a default provider for parameter 0
//! of action `placeOrder`. Recognition is purely name-based; whether a
//! recognized method actually binds is decided by the companion factories,
//! and recognized methods that never bind are reported as orphans.

/// The recognized companion prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupportPrefix {
    /// `hide<Member>` visibility provider.
    Hide,
    /// `disable<Member>` usability provider.
    Disable,
    /// `validate<Member>` proposed-value validator.
    Validate,
    /// `default<Member>` / `default<N><Action>` default provider.
    Default,
    /// `choices<Member>` / `choices<N><Action>` choices provider.
    Choices,
}

impl SupportPrefix {
    /// The literal prefix in method names.
    pub fn as_str(&self) -> &'static str {
        match self {
            SupportPrefix::Hide => "hide",
            SupportPrefix::Disable => "disable",
            SupportPrefix::Validate => "validate",
            SupportPrefix::Default => "default",
            SupportPrefix::Choices => "choices",
        }
    }

    /// Prefixes that also support the parameter-indexed form.
    pub fn supports_parameters(&self) -> bool {
        matches!(self, SupportPrefix::Default | SupportPrefix::Choices)
    }

    const ALL: [SupportPrefix; 5] = [
        SupportPrefix::Hide,
        SupportPrefix::Disable,
        SupportPrefix::Validate,
        SupportPrefix::Default,
        SupportPrefix::Choices,
    ];
}

/// A successfully recognized companion method name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SupportMatch {
    /// A member companion: `hideFirstName` => member `firstName`.
    Member {
        prefix: SupportPrefix,
        member: String,
    },
    /// A parameter companion: `default0PlaceOrder` => parameter 0 of
    /// action `placeOrder`.
    Parameter {
        prefix: SupportPrefix,
        index: usize,
        action: String,
    },
}

/// Recognize a method name as a companion pattern.
pub fn match_support(name: &str) -> Option<SupportMatch> {
    for prefix in SupportPrefix::ALL {
        let Some(rest) = name.strip_prefix(prefix.as_str()) else {
            continue;
        };
        if rest.is_empty() {
            continue;
        }
        if rest.starts_with(|c: char| c.is_ascii_uppercase()) {
            return Some(SupportMatch::Member {
                prefix,
                member: decapitalize(rest),
            });
        }
        if prefix.supports_parameters() && rest.starts_with(|c: char| c.is_ascii_digit()) {
            let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
            let tail = &rest[digits.len()..];
            if tail.starts_with(|c: char| c.is_ascii_uppercase()) {
                // Index always parses: digits are bounded by the name length.
                if let Ok(index) = digits.parse::<usize>() {
                    return Some(SupportMatch::Parameter {
                        prefix,
                        index,
                        action: decapitalize(tail),
                    });
                }
            }
        }
    }
    None
}

/// Returns true if the name matches any companion pattern.
pub fn is_support_name(name: &str) -> bool {
    match_support(name).is_some()
}

/// Lower-case the first character (`FirstName` => `firstName`).
fn decapitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
