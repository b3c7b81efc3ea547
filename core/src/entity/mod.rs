//! immutable-shaped entity records (Player, Team, Competition, Tournament, Round, Game, Arena)

pub mod arena;
pub mod competition;
pub mod game;
pub mod player;
pub mod round;
pub mod team;
pub mod tournament;

pub use arena::Arena;
pub use competition::Competition;
pub use game::Game;
pub use player::Player;
pub use round::Round;
pub use team::Team;
pub use tournament::{Format, TournamentMeta};

/// a team slot in a game: `None` is a BYE
pub fn is_bye_team(team: Option<&Team>) -> bool {
    match team {
        None => true,
        Some(t) => t.players().is_empty(),
    }
}

/// a game is vacuous if at most `advancing` real teams are seated in it
pub fn is_bye_game(teams: &[Option<Team>], advancing: u32) -> bool {
    if teams.len() <= advancing as usize {
        return true;
    }
    let real = teams.iter().filter(|t| !is_bye_team(t.as_ref())).count();
    real <= advancing as usize
}
