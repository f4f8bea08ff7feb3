use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::progression::BASE_ROLL_CEILING;
use crate::room::Room;

const BUILTIN_DUNGEON: &str = include_str!("../content/dungeon.json");

/// An ordered, validated sequence of rooms.
///
/// Room identity is its position in the sequence. Every constructor runs
/// [`Dungeon::validate`], so a `Dungeon` value can always be played to the
/// end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DungeonFile")]
pub struct Dungeon {
    rooms: Vec<Room>,
}

/// The unvalidated on-disk form.
#[derive(Deserialize)]
struct DungeonFile {
    rooms: Vec<Room>,
}

impl TryFrom<DungeonFile> for Dungeon {
    type Error = CoreError;

    fn try_from(file: DungeonFile) -> CoreResult<Self> {
        Self::new(file.rooms)
    }
}

impl Dungeon {
    /// Build a dungeon from rooms, rejecting content that cannot be completed.
    pub fn new(rooms: Vec<Room>) -> CoreResult<Self> {
        let dungeon = Self { rooms };
        dungeon.validate()?;
        Ok(dungeon)
    }

    /// Parse and validate a dungeon from its JSON form.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let file: DungeonFile = serde_json::from_str(json)?;
        let dungeon = Self::new(file.rooms)?;
        tracing::debug!(rooms = dungeon.len(), "loaded dungeon");
        Ok(dungeon)
    }

    /// The five-room dungeon that ships with the game.
    pub fn builtin() -> CoreResult<Self> {
        Self::from_json(BUILTIN_DUNGEON)
    }

    /// Check that every room can be entered and cleared.
    ///
    /// The roll range on entering room `i` is `[1, 6 + sum of bonuses of
    /// rooms 0..i)`, so the range must be non-empty and its best outcome must
    /// reach the room's difficulty. The ceiling after every room, including
    /// the last, must also fit in an `i32`.
    pub fn validate(&self) -> CoreResult<()> {
        if self.rooms.is_empty() {
            return Err(CoreError::EmptyDungeon);
        }
        let mut total: i32 = 0;
        for (index, room) in self.rooms.iter().enumerate() {
            let difficulty = room.difficulty();
            if difficulty < 1 {
                return Err(CoreError::InvalidDifficulty { index, difficulty });
            }
            // Bounded by the overflow check below.
            let best_roll = BASE_ROLL_CEILING + total - 1;
            if best_roll < 1 || difficulty > best_roll {
                return Err(CoreError::UnwinnableRoom {
                    index,
                    difficulty,
                    best_roll,
                });
            }
            total = total
                .checked_add(room.reward().bonus())
                .filter(|total| BASE_ROLL_CEILING.checked_add(*total).is_some())
                .ok_or(CoreError::BonusOverflow { index })?;
        }
        Ok(())
    }

    /// Each room paired with the exclusive roll ceiling a participant has on
    /// entering it, assuming every earlier room was cleared.
    ///
    /// Validation keeps every ceiling within `i32`.
    pub fn entry_ceilings(&self) -> impl Iterator<Item = (&Room, i32)> {
        self.rooms.iter().scan(BASE_ROLL_CEILING, |ceiling, room| {
            let entry = *ceiling;
            *ceiling += room.reward().bonus();
            Some((room, entry))
        })
    }

    /// The rooms in order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Number of rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Always false for a validated dungeon.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub(crate) fn room_mut(&mut self, index: usize) -> Option<&mut Room> {
        self.rooms.get_mut(index)
    }
}
