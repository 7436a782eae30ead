use crate::types::MatchPercent;

/// Expresses `part / whole` as a whole percentage, rounding halves up.
///
/// Integer arithmetic keeps values such as `1 / 8` (12.5%) from drifting under floating point.
/// A `whole` of zero yields `0`, and `part` is clamped to `whole` so the result never exceeds
/// `100`.
pub fn round_percentage(part: usize, whole: usize) -> MatchPercent {
    if whole == 0 {
        return 0;
    }

    let part = part.min(whole);
    let percent = (part * 200 + whole) / (whole * 2);

    percent as MatchPercent
}
