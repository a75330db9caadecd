//! Rotation - a skill list used as a round-robin queue
//!
//! The drawn skill is removed, stamped with the current time and pushed to
//! the back, so the back of the queue is always the skill in flight.

use crate::character::Skill;
use crate::types::RedrawPolicy;
use serde::{Deserialize, Serialize};

/// Which modulus a draw uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Draw {
    /// First draw of the battle: any skill may come up
    Opening,
    /// Every later draw, governed by the redraw policy
    Follow(RedrawPolicy),
}

/// Per-battle copy of a character's skills
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    skills: Vec<Skill>,
    started: bool,
}

impl Rotation {
    /// Copy `skills` into a fresh rotation with no timestamps
    pub fn new(skills: &[Skill]) -> Self {
        let skills = skills
            .iter()
            .cloned()
            .map(|mut skill| {
                skill.last_use = None;
                skill
            })
            .collect();
        Rotation {
            skills,
            started: false,
        }
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Skills in queue order, most recently used last
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    /// The skill currently in flight, once anything has been drawn
    pub fn current(&self) -> Option<&Skill> {
        if self.started {
            self.skills.last()
        } else {
            None
        }
    }

    /// Move the skill selected by `roll` to the back, stamped with `now`.
    ///
    /// Returns `None` only for an empty rotation.
    pub fn draw(&mut self, roll: i32, draw: Draw, now: u64) -> Option<&Skill> {
        if self.skills.is_empty() {
            return None;
        }

        let index = pick_index(roll, self.skills.len(), draw);
        let mut skill = self.skills.remove(index);
        skill.last_use = Some(now);
        self.skills.push(skill);
        self.started = true;

        self.skills.last()
    }
}

/// Index selected by `roll` in a rotation of `len` skills.
///
/// The remainder keeps the sign of the roll. A negative remainder counts back
/// from the end of the full rotation, which under the legacy follow-up draw
/// can land on the skill that just finished.
pub fn pick_index(roll: i32, len: usize, draw: Draw) -> usize {
    let len_i = len as i64;
    let roll = i64::from(roll);
    let from_end = |r: i64| if r < 0 { (len_i + r) as usize } else { r as usize };

    match draw {
        Draw::Opening => from_end(roll % len_i),
        Draw::Follow(RedrawPolicy::Legacy) => {
            let modulus = len_i - 1;
            if modulus == 0 {
                0
            } else {
                from_end(roll % modulus)
            }
        }
        Draw::Follow(RedrawPolicy::ExcludeLast) => {
            let modulus = len_i - 1;
            if modulus == 0 {
                0
            } else {
                roll.rem_euclid(modulus) as usize
            }
        }
    }
}
