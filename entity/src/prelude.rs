pub use super::game::Entity as Game;
pub use super::league::Entity as League;
pub use super::matches::Entity as Match;
pub use super::series::Entity as Series;
pub use super::team::Entity as Team;
pub use super::tournament::Entity as Tournament;
