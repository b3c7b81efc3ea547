//! §4.9: the storage adapter contract. The core treats storage as a black
//! box — it assigns identities, persists entities, and answers lookups by
//! name or foreign key; it never assumes transactional isolation across
//! multi-entity writes.
//!
//! Grounded on `app_core::ports::database`'s `DatabasePort`/`DbpPostalAddress`
//! split (one method group per entity on a single `Send + Sync` trait),
//! generalized from postal addresses to the tournament entities.

use crate::entity::{Arena, Competition, Game, Player, Round, Team, TournamentMeta};
use crate::errors::StorageResult;
use async_trait::async_trait;
use uuid::Uuid;

/// storage port the core depends on but never implements.
#[async_trait]
pub trait StoragePort: Send + Sync {
    async fn save_player(&self, player: &Player) -> StorageResult<Player>;
    async fn get_player(&self, id: Uuid) -> StorageResult<Player>;
    async fn find_player_by_name(&self, name: &str) -> StorageResult<Option<Player>>;

    async fn save_team(&self, team: &Team) -> StorageResult<Team>;
    async fn get_team(&self, id: Uuid) -> StorageResult<Team>;
    async fn find_team_by_name(
        &self,
        tournament_id: Uuid,
        name: &str,
    ) -> StorageResult<Option<Team>>;
    /// insertion order preserved
    async fn list_teams_by_tournament(&self, tournament_id: Uuid) -> StorageResult<Vec<Team>>;

    async fn save_competition(&self, competition: &Competition) -> StorageResult<Competition>;
    async fn get_competition(&self, id: Uuid) -> StorageResult<Competition>;
    /// insertion order preserved
    async fn list_tournaments_by_competition(
        &self,
        competition_id: Uuid,
    ) -> StorageResult<Vec<TournamentMeta>>;
    async fn list_arenas_by_competition(&self, competition_id: Uuid) -> StorageResult<Vec<Arena>>;

    async fn save_tournament(&self, tournament: &TournamentMeta) -> StorageResult<TournamentMeta>;
    async fn get_tournament(&self, id: Uuid) -> StorageResult<TournamentMeta>;

    async fn save_round(&self, round: &Round) -> StorageResult<Round>;
    async fn get_round(&self, id: Uuid) -> StorageResult<Round>;
    /// insertion order preserved
    async fn list_rounds_by_tournament(&self, tournament_id: Uuid) -> StorageResult<Vec<Round>>;

    async fn save_game(&self, game: &Game) -> StorageResult<Game>;
    async fn get_game(&self, id: Uuid) -> StorageResult<Game>;
    /// insertion order preserved
    async fn list_games_by_round(&self, round_id: Uuid) -> StorageResult<Vec<Game>>;

    async fn save_arena(&self, arena: &Arena) -> StorageResult<Arena>;
    async fn get_arena(&self, id: Uuid) -> StorageResult<Arena>;
    async fn list_active_games_by_arena(&self, arena_id: Uuid) -> StorageResult<Vec<Game>>;
}
