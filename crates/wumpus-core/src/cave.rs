//! Cave graph generation and topology.
//!
//! The cave is twenty caverns on a 4-regular circulant graph: cavern `i`
//! connects to `i ± 1` and `i ± 4` (mod 20). Adjacency is never stored, it is
//! recomputed from the index by [`neighbors`]. Generation only decides which
//! id and which label sit at each index.

use std::collections::HashSet;

use log::{debug, trace};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::label::RoomLabel;
use crate::parser::is_reserved;

/// Number of caverns in every cave.
pub const ROOM_COUNT: usize = 20;

/// Length of a cavern id.
pub const ROOM_ID_LEN: usize = 4;

/// Index of the cavern the ladder leads down to.
pub const START_INDEX: usize = 0;

/// Offsets to the four neighbors, in display order. 19 and 16 are the
/// inverses of 1 and 4 mod 20, which makes the graph undirected.
const NEIGHBOR_OFFSETS: [usize; 4] = [ROOM_COUNT - 1, 1, 4, ROOM_COUNT - 4];

/// The four caverns one tunnel away from `index`.
pub fn neighbors(index: usize) -> [usize; 4] {
    NEIGHBOR_OFFSETS.map(|offset| (index + offset) % ROOM_COUNT)
}

/// A cavern id: four lowercase letters, never a command word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    /// Wrap an id. Returns `None` unless it is four lowercase ASCII letters
    /// and not a reserved command word.
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        let well_formed =
            id.len() == ROOM_ID_LEN && id.chars().all(|c| c.is_ascii_lowercase());
        (well_formed && !is_reserved(&id)).then_some(Self(id))
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn random<R: Rng + ?Sized>(rng: &mut R) -> String {
        (0..ROOM_ID_LEN)
            .map(|_| char::from(rng.random_range(b'a'..=b'z')))
            .collect()
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for RoomId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// A single cavern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Room {
    /// Unique id the player types to walk or shoot into this cavern.
    pub id: RoomId,
    /// What is in the cavern.
    pub label: RoomLabel,
}

/// The full cave. Immutable once built.
#[derive(Debug, Clone, Serialize)]
pub struct CaveGraph {
    rooms: Vec<Room>,
}

impl CaveGraph {
    /// Generate a cave from the given RNG.
    ///
    /// Ids are drawn until twenty distinct, non-reserved ones exist. Labels
    /// are shuffled onto them, then the whole room list is reshuffled until
    /// the start cavern holds neither hazard.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let ids = generate_ids(rng);

        let mut labels = RoomLabel::ALL;
        labels.shuffle(rng);

        let mut rooms: Vec<Room> = ids
            .into_iter()
            .zip(labels)
            .map(|(id, label)| Room { id, label })
            .collect();

        let mut reshuffles = 0u32;
        while rooms[START_INDEX].label.is_hazard() {
            rooms.shuffle(rng);
            reshuffles += 1;
        }
        debug!("generated cave after {reshuffles} reshuffle(s)");
        for (index, room) in rooms.iter().enumerate() {
            trace!("cavern {index:>2}: {} ({})", room.id, room.label);
        }

        Self { rooms }
    }

    /// Build a cave from an explicit room list.
    ///
    /// Returns `None` if ids repeat, labels are not used exactly once each, or
    /// the start cavern is a hazard.
    pub fn from_rooms(rooms: Vec<Room>) -> Option<Self> {
        if rooms.len() != ROOM_COUNT || rooms[START_INDEX].label.is_hazard() {
            return None;
        }
        let ids: HashSet<_> = rooms.iter().map(|r| &r.id).collect();
        let labels: HashSet<_> = rooms.iter().map(|r| r.label).collect();
        if ids.len() != ROOM_COUNT || labels.len() != ROOM_COUNT {
            return None;
        }
        Some(Self { rooms })
    }

    /// All caverns in index order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// The cavern at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= ROOM_COUNT`.
    pub fn room(&self, index: usize) -> &Room {
        &self.rooms[index]
    }

    /// The start cavern.
    pub fn start(&self) -> &Room {
        self.room(START_INDEX)
    }

    /// Index of the cavern with this id, anywhere in the cave.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.rooms.iter().position(|r| r.id == *id)
    }

    /// Index of the cavern carrying `label`.
    pub fn index_of_label(&self, label: RoomLabel) -> Option<usize> {
        self.rooms.iter().position(|r| r.label == label)
    }

    /// Labels of the four neighbors of `index`.
    pub fn neighbor_labels(&self, index: usize) -> [RoomLabel; 4] {
        neighbors(index).map(|n| self.rooms[n].label)
    }
}

fn generate_ids<R: Rng + ?Sized>(rng: &mut R) -> Vec<RoomId> {
    let mut seen = HashSet::with_capacity(ROOM_COUNT);
    let mut ids = Vec::with_capacity(ROOM_COUNT);
    let mut rejected = 0u32;

    while ids.len() < ROOM_COUNT {
        let candidate = RoomId::random(rng);
        match RoomId::new(candidate) {
            Some(id) if seen.insert(id.clone()) => ids.push(id),
            _ => rejected += 1,
        }
    }
    if rejected > 0 {
        debug!("rejected {rejected} colliding cavern id(s)");
    }
    ids
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// A cave with ids `baaa`, `caaa`, ... and labels placed by index. The
    /// labels not named in `placed` fill the remaining caverns in order,
    /// hazards last.
    pub(crate) fn cave_with(placed: &[(usize, RoomLabel)]) -> CaveGraph {
        let mut labels: Vec<Option<RoomLabel>> = vec![None; ROOM_COUNT];
        for &(index, label) in placed {
            labels[index] = Some(label);
        }
        let all = RoomLabel::ALL;
        let mut spare = all[2..]
            .iter()
            .chain(&all[..2])
            .copied()
            .filter(|l| !placed.iter().any(|(_, p)| p == l));
        let rooms = labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| Room {
                id: RoomId::new(format!("{}aaa", char::from(b'b' + i as u8))).unwrap(),
                label: label.unwrap_or_else(|| spare.next().unwrap()),
            })
            .collect();
        CaveGraph::from_rooms(rooms).unwrap()
    }

    #[test]
    fn neighbors_use_fixed_offsets() {
        assert_eq!(neighbors(0), [19, 1, 4, 16]);
        assert_eq!(neighbors(5), [4, 6, 9, 1]);
        assert_eq!(neighbors(19), [18, 0, 3, 15]);
    }

    #[test]
    fn adjacency_is_symmetric() {
        for i in 0..ROOM_COUNT {
            for n in neighbors(i) {
                assert!(neighbors(n).contains(&i), "{i} -> {n} has no way back");
            }
        }
    }

    #[test]
    fn neighbors_are_distinct_and_exclude_self() {
        for i in 0..ROOM_COUNT {
            let set: HashSet<_> = neighbors(i).into_iter().collect();
            assert_eq!(set.len(), 4);
            assert!(!set.contains(&i));
        }
    }

    #[test]
    fn graph_is_connected() {
        let mut seen = HashSet::from([START_INDEX]);
        let mut frontier = vec![START_INDEX];
        while let Some(i) = frontier.pop() {
            for n in neighbors(i) {
                if seen.insert(n) {
                    frontier.push(n);
                }
            }
        }
        assert_eq!(seen.len(), ROOM_COUNT);
    }

    #[test]
    fn room_id_validation() {
        assert!(RoomId::new("abcd").is_some());
        assert!(RoomId::new("abc").is_none());
        assert!(RoomId::new("ABCD").is_none());
        assert!(RoomId::new("ab1d").is_none());
        assert!(RoomId::new("look").is_none());
        assert!(RoomId::new("quit").is_none());
    }

    #[test]
    fn same_seed_same_cave() {
        let a = CaveGraph::generate(&mut StdRng::seed_from_u64(3));
        let b = CaveGraph::generate(&mut StdRng::seed_from_u64(3));
        assert_eq!(a.rooms(), b.rooms());
    }

    #[test]
    fn lookups() {
        let cave = cave_with(&[(5, RoomLabel::Pit), (12, RoomLabel::Wumpus)]);
        assert_eq!(cave.index_of("gaaa"), Some(5));
        assert_eq!(cave.index_of("zzzz"), None);
        assert_eq!(cave.index_of_label(RoomLabel::Wumpus), Some(12));
        assert_eq!(cave.start().id.as_str(), "baaa");
        assert!(cave.neighbor_labels(4).contains(&RoomLabel::Pit));
    }

    #[test]
    fn from_rooms_rejects_bad_layouts() {
        let cave = cave_with(&[]);
        let mut rooms = cave.rooms().to_vec();

        let mut hazardous_start = rooms.clone();
        let pit = hazardous_start
            .iter()
            .position(|r| r.label == RoomLabel::Pit)
            .unwrap();
        hazardous_start.swap(0, pit);
        assert!(CaveGraph::from_rooms(hazardous_start).is_none());

        let mut duplicate_label = rooms.clone();
        duplicate_label[3].label = duplicate_label[4].label;
        assert!(CaveGraph::from_rooms(duplicate_label).is_none());

        rooms[7].id = rooms[8].id.clone();
        assert!(CaveGraph::from_rooms(rooms).is_none());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn generated_caves_use_every_label_once(seed in any::<u64>()) {
            let cave = CaveGraph::generate(&mut StdRng::seed_from_u64(seed));
            let labels: HashSet<_> = cave.rooms().iter().map(|r| r.label).collect();
            prop_assert_eq!(cave.rooms().len(), ROOM_COUNT);
            prop_assert_eq!(labels.len(), ROOM_COUNT);
            prop_assert_eq!(
                cave.rooms().iter().filter(|r| r.label == RoomLabel::Wumpus).count(),
                1
            );
            prop_assert_eq!(
                cave.rooms().iter().filter(|r| r.label == RoomLabel::Pit).count(),
                1
            );
        }

        #[test]
        fn generated_caves_start_safe(seed in any::<u64>()) {
            let cave = CaveGraph::generate(&mut StdRng::seed_from_u64(seed));
            prop_assert!(!cave.start().label.is_hazard(), "seed={seed}");
        }

        #[test]
        fn generated_ids_are_distinct_and_unreserved(seed in any::<u64>()) {
            let cave = CaveGraph::generate(&mut StdRng::seed_from_u64(seed));
            let ids: HashSet<_> = cave.rooms().iter().map(|r| r.id.as_str()).collect();
            prop_assert_eq!(ids.len(), ROOM_COUNT);
            for id in ids {
                prop_assert!(!is_reserved(id));
                prop_assert_eq!(id.len(), ROOM_ID_LEN);
            }
        }
    }
}
