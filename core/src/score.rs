use crate::*;

pub const POINTS_PER_TILE: Points = 10;

/// Points a single tile contributes: +10 when guessed, offset by -10 once the bomb has fired
/// and the tile carries the bomb mark.
pub const fn tile_points(tile: &Tile, bomb_triggered: bool) -> Points {
    if !tile.guessed {
        0
    } else if tile.bombed && bomb_triggered {
        0
    } else {
        POINTS_PER_TILE
    }
}

pub fn compute_score<'a>(tiles: impl IntoIterator<Item = &'a Tile>, bomb_triggered: bool) -> Points {
    tiles
        .into_iter()
        .map(|tile| tile_points(tile, bomb_triggered))
        .sum()
}

/// Label shown on the back of a revealed card.
pub const fn score_label(tile: &Tile, bomb_triggered: bool) -> Option<&'static str> {
    match (tile.bombed, bomb_triggered, tile.guessed) {
        (true, true, _) => Some("0"),
        (true, false, _) => Some("+10"),
        (false, _, true) => Some("+10"),
        (false, _, false) => None,
    }
}
