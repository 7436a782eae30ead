pub mod render_match_bar;
pub mod round_percentage;
pub mod sort_results;

pub use render_match_bar::render_match_bar;
pub use round_percentage::round_percentage;
pub use sort_results::sort_results;
