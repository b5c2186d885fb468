//! Filter form components: FilterCard, FilterInput

mod filter_card;
mod filter_input;

pub use filter_card::FilterCard;
pub use filter_input::FilterInput;
