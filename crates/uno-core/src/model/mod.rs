pub mod card;
pub mod color;
pub mod deck;
pub mod rank;
pub mod score;
