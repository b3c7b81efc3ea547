//! in-memory adapters for the storage and randomness ports, for use in
//! driver tests and examples. Not part of the scheduling core itself.

use async_trait::async_trait;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;
use std::sync::Mutex;
use tournament_core::ports::{Shuffler, StoragePort};
use tournament_core::utils::id_version::{IdVersion, ObjectIdVersion};
use tournament_core::{
    Arena, Competition, Game, Player, Round, StorageError, StorageResult, Team, TournamentMeta,
};
use uuid::Uuid;

struct Table<T> {
    rows: Mutex<HashMap<Uuid, T>>,
    order: Mutex<Vec<Uuid>>,
}

impl<T: Clone + ObjectIdVersion> Table<T> {
    fn new() -> Self {
        Table {
            rows: Mutex::new(HashMap::new()),
            order: Mutex::new(Vec::new()),
        }
    }

    fn save(&self, entity: &T) -> StorageResult<T> {
        let mut entity = entity.clone();
        let mut rows = self.rows.lock().unwrap();
        match entity.get_id_version() {
            IdVersion::New => {
                let id = Uuid::new_v4();
                entity.set_id_version(IdVersion::existing(id, 0));
                rows.insert(id, entity.clone());
                self.order.lock().unwrap().push(id);
            }
            IdVersion::Existing { id, version } => {
                let current = rows.get(&id).ok_or(StorageError::NotFound)?;
                let current_version = current.get_version().unwrap_or(0);
                if current_version != version {
                    return Err(StorageError::OptimisticLockConflict {
                        expected: version,
                        actual: current_version,
                    });
                }
                entity.set_id_version(IdVersion::existing(id, version + 1));
                rows.insert(id, entity.clone());
            }
        }
        Ok(entity)
    }

    fn get(&self, id: Uuid) -> StorageResult<T> {
        self.rows
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    fn list_ordered(&self, filter: impl Fn(&T) -> bool) -> Vec<T> {
        let order = self.order.lock().unwrap();
        let rows = self.rows.lock().unwrap();
        order
            .iter()
            .filter_map(|id| rows.get(id))
            .filter(|e| filter(e))
            .cloned()
            .collect()
    }

    fn find_first(&self, filter: impl Fn(&T) -> bool) -> Option<T> {
        self.list_ordered(filter).into_iter().next()
    }
}

impl<T: Clone + ObjectIdVersion> Default for Table<T> {
    fn default() -> Self {
        Table::new()
    }
}

/// a `StoragePort` backed by in-process hash maps, with the same
/// optimistic-locking contract a real adapter enforces: the caller's
/// `IdVersion` must match the currently stored version or the save fails.
#[derive(Default)]
pub struct InMemoryStorage {
    players: Table<Player>,
    teams: Table<Team>,
    competitions: Table<Competition>,
    tournaments: Table<TournamentMeta>,
    rounds: Table<Round>,
    games: Table<Game>,
    arenas: Table<Arena>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage::default()
    }
}

#[async_trait]
impl StoragePort for InMemoryStorage {
    async fn save_player(&self, player: &Player) -> StorageResult<Player> {
        self.players.save(player)
    }

    async fn get_player(&self, id: Uuid) -> StorageResult<Player> {
        self.players.get(id)
    }

    async fn find_player_by_name(&self, name: &str) -> StorageResult<Option<Player>> {
        Ok(self.players.find_first(|p| p.name() == name))
    }

    async fn save_team(&self, team: &Team) -> StorageResult<Team> {
        self.teams.save(team)
    }

    async fn get_team(&self, id: Uuid) -> StorageResult<Team> {
        self.teams.get(id)
    }

    async fn find_team_by_name(
        &self,
        tournament_id: Uuid,
        name: &str,
    ) -> StorageResult<Option<Team>> {
        Ok(self
            .teams
            .find_first(|t| t.tournament_id() == tournament_id && t.name() == name))
    }

    async fn list_teams_by_tournament(&self, tournament_id: Uuid) -> StorageResult<Vec<Team>> {
        Ok(self
            .teams
            .list_ordered(|t| t.tournament_id() == tournament_id))
    }

    async fn save_competition(&self, competition: &Competition) -> StorageResult<Competition> {
        self.competitions.save(competition)
    }

    async fn get_competition(&self, id: Uuid) -> StorageResult<Competition> {
        self.competitions.get(id)
    }

    async fn list_tournaments_by_competition(
        &self,
        competition_id: Uuid,
    ) -> StorageResult<Vec<TournamentMeta>> {
        Ok(self
            .tournaments
            .list_ordered(|t| t.competition_id() == Some(competition_id)))
    }

    async fn list_arenas_by_competition(&self, competition_id: Uuid) -> StorageResult<Vec<Arena>> {
        Ok(self
            .arenas
            .list_ordered(|a| a.competition_id() == Some(competition_id)))
    }

    async fn save_tournament(&self, tournament: &TournamentMeta) -> StorageResult<TournamentMeta> {
        self.tournaments.save(tournament)
    }

    async fn get_tournament(&self, id: Uuid) -> StorageResult<TournamentMeta> {
        self.tournaments.get(id)
    }

    async fn save_round(&self, round: &Round) -> StorageResult<Round> {
        self.rounds.save(round)
    }

    async fn get_round(&self, id: Uuid) -> StorageResult<Round> {
        self.rounds.get(id)
    }

    async fn list_rounds_by_tournament(&self, tournament_id: Uuid) -> StorageResult<Vec<Round>> {
        Ok(self
            .rounds
            .list_ordered(|r| r.tournament_id() == tournament_id))
    }

    async fn save_game(&self, game: &Game) -> StorageResult<Game> {
        self.games.save(game)
    }

    async fn get_game(&self, id: Uuid) -> StorageResult<Game> {
        self.games.get(id)
    }

    async fn list_games_by_round(&self, round_id: Uuid) -> StorageResult<Vec<Game>> {
        Ok(self.games.list_ordered(|g| g.round_id() == round_id))
    }

    async fn save_arena(&self, arena: &Arena) -> StorageResult<Arena> {
        self.arenas.save(arena)
    }

    async fn get_arena(&self, id: Uuid) -> StorageResult<Arena> {
        self.arenas.get(id)
    }

    async fn list_active_games_by_arena(&self, arena_id: Uuid) -> StorageResult<Vec<Game>> {
        use tournament_core::Status;
        Ok(self
            .games
            .list_ordered(|g| g.arena_id() == Some(arena_id) && g.status() != Status::Completed))
    }
}

/// a `Shuffler` seeded once at construction, so test scenarios reproduce
/// exactly across runs.
pub struct SeededShuffler {
    rng: Mutex<ChaCha8Rng>,
}

impl SeededShuffler {
    pub fn new(seed: u64) -> Self {
        SeededShuffler {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl Shuffler for SeededShuffler {
    fn shuffle_indices(&self, len: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..len).collect();
        indices.shuffle(&mut *self.rng.lock().unwrap());
        indices
    }
}

/// a `Shuffler` that never reorders; useful when a test wants compass-draw
/// division assignment without shuffle noise.
pub struct IdentityShuffler;

impl Shuffler for IdentityShuffler {
    fn shuffle_indices(&self, len: usize) -> Vec<usize> {
        (0..len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_assigns_id_and_version_zero() {
        let storage = InMemoryStorage::new();
        let player = Player::new("ada");
        let saved = storage.save_player(&player).await.unwrap();
        assert_eq!(saved.get_version(), Some(0));
    }

    #[tokio::test]
    async fn stale_version_is_rejected() {
        let storage = InMemoryStorage::new();
        let v0 = storage.save_player(&Player::new("ada")).await.unwrap();
        let v1 = storage.save_player(&v0).await.unwrap();
        assert_eq!(v1.get_version(), Some(1));
        let err = storage.save_player(&v0).await.unwrap_err();
        assert!(matches!(
            err,
            StorageError::OptimisticLockConflict {
                expected: 0,
                actual: 1
            }
        ));
    }

    #[test]
    fn seeded_shuffler_is_deterministic() {
        let a = SeededShuffler::new(42).shuffle_indices(10);
        let b = SeededShuffler::new(42).shuffle_indices(10);
        assert_eq!(a, b);
    }
}
