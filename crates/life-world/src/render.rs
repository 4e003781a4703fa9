//! Text rendering of a world snapshot.
//!
//! The core produces no output of its own; this is the one concession to
//! drivers that want a ready-made picture, kept pure as a `Display` impl.

use crate::world::World;
use std::fmt;

const LIVE: &str = "■";
const DEAD: &str = "·";

impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.dimension {
            for col in 0..self.dimension {
                f.write_str(if self.get(row, col) { LIVE } else { DEAD })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_small_world() {
        let mut world = World::new(2).unwrap();
        world.set(0, 0, true);
        assert_eq!(world.to_string(), "■·\n··\n");
    }

    #[test]
    fn test_render_row_count() {
        let world = World::new(4).unwrap();
        assert_eq!(world.to_string().lines().count(), 4);
    }
}
