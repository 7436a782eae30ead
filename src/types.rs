// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are the lowercased, trimmed pieces of a
/// symptom query.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`.
pub type TokenRef = str;

/// Represents the name of an illness (e.g. `"influenza"`) as an owned `String`.
pub type IllnessName = String;

/// Represents a canonical symptom of an illness (e.g. `"runny nose"`).
pub type Symptom = String;

/// Represents the explanatory sentence attached to an illness.
pub type Evidence = String;

/// Share of an illness's canonical symptoms matched by a query, as a whole percentage in
/// `0..=100`.
pub type MatchPercent = u8;
